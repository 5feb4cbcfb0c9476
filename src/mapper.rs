//! The encode/decode engine.
//!
//! Both directions are plain folds:
//! * encode walks the specs, reads each field by position and emits a
//!   `(name, value)` pair for every field that is present.
//! * decode walks the properties, finds the spec for each name and writes
//!   the transformed value into the record.
//!
//! The free functions [`encode`] and [`decode`] build what they need on
//! every call. A [`Mapper`] indexes its specs once and can be reused (and
//! shared between threads) for any number of records.

use core::hash::BuildHasherDefault;
use std::collections::HashMap;
use std::hash::Hash;

// fast hashing for the name lookups, names are never adversarial here
use seahash::SeaHasher;
use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::record::Record;
use crate::settings::{EncodeOrder, Settings};
use crate::spec::FieldSpec;
use crate::value::Value;

pub type NameHasher = BuildHasherDefault<SeaHasher>;

/// Name to spec index. Later specs overwrite earlier ones with the same name.
type Lookup<K> = HashMap<K, usize, NameHasher>;

fn index_specs<K>(specs: &[FieldSpec<K>]) -> (Lookup<K>, usize)
where
    K: Eq + Hash + Clone,
{
    let mut lookup = Lookup::default();
    let mut shadowed = 0;
    for (index, spec) in specs.iter().enumerate() {
        if lookup.insert(spec.name().clone(), index).is_some() {
            shadowed += 1;
        }
    }
    (lookup, shadowed)
}

fn encode_ordered<K, R>(record: &R, specs: &[FieldSpec<K>], order: EncodeOrder) -> Result<Vec<(K, Value)>>
where
    K: Clone,
    R: Record + ?Sized,
{
    let mut properties = Vec::with_capacity(specs.len());
    for spec in specs {
        match record.field(spec.position())? {
            None => trace!(position = spec.position(), "absent field skipped"),
            Some(value) => {
                let value = spec.apply(value.clone())?;
                properties.push((spec.name().clone(), value));
            }
        }
    }
    if order == EncodeOrder::Reversed {
        // same result as prepending every pair while walking the specs
        properties.reverse();
    }
    debug!(specs = specs.len(), produced = properties.len(), ?order, "encoded record");
    Ok(properties)
}

fn decode_indexed<K, R, P>(record: R, specs: &[FieldSpec<K>], lookup: &Lookup<K>, properties: P) -> Result<R>
where
    K: Eq + Hash,
    R: Record,
    P: IntoIterator<Item = (K, Value)>,
{
    let mut seen = 0usize;
    let mut applied = 0usize;
    let mut ignored = 0usize;
    let record = properties.into_iter().try_fold(record, |mut record, (key, value)| -> Result<R> {
        seen += 1;
        match lookup.get(&key) {
            None => {
                ignored += 1;
                trace!(property = seen, "unknown property ignored");
            }
            Some(&index) => {
                let spec = &specs[index];
                let value = spec.apply(value)?;
                record.set_field(spec.position(), value)?;
                applied += 1;
            }
        }
        Ok(record)
    })?;
    debug!(properties = seen, applied, ignored, "decoded record");
    Ok(record)
}

/// Encodes the present fields of `record` as `(name, value)` pairs.
///
/// Absent fields produce nothing. The pairs come out in the reverse of the
/// order of `specs`; use a [`Mapper`] with [`EncodeOrder::Preserved`] to
/// keep the spec order instead.
pub fn encode<K, R>(record: &R, specs: &[FieldSpec<K>]) -> Result<Vec<(K, Value)>>
where
    K: Clone,
    R: Record + ?Sized,
{
    encode_ordered(record, specs, EncodeOrder::Reversed)
}

/// Writes the matching `properties` into `record` and returns it.
///
/// Properties whose name has no spec are ignored. When a name appears more
/// than once the last property wins, and when several specs share a name
/// only the last of them is used.
pub fn decode<K, R, P>(record: R, specs: &[FieldSpec<K>], properties: P) -> Result<R>
where
    K: Eq + Hash + Clone,
    R: Record,
    P: IntoIterator<Item = (K, Value)>,
{
    let (lookup, _) = index_specs(specs);
    decode_indexed(record, specs, &lookup, properties)
}

/// A reusable, pre-indexed set of field specs.
#[derive(Debug, Clone)]
pub struct Mapper<K = String> {
    specs: Vec<FieldSpec<K>>,
    lookup: Lookup<K>,
    settings: Settings,
}

impl<K> Mapper<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new(specs: Vec<FieldSpec<K>>) -> Self {
        Self::with_settings(specs, Settings::default())
    }
    pub fn with_settings(specs: Vec<FieldSpec<K>>, settings: Settings) -> Self {
        let (lookup, shadowed) = index_specs(&specs);
        if shadowed > 0 {
            warn!(shadowed, "specs share names, only the last spec per name is used when decoding");
        }
        Self {
            specs,
            lookup,
            settings,
        }
    }
    pub fn specs(&self) -> &[FieldSpec<K>] {
        &self.specs
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    /// The spec decode would use for `name`.
    pub fn lookup(&self, name: &K) -> Option<&FieldSpec<K>> {
        self.lookup.get(name).map(|&index| &self.specs[index])
    }
    pub fn len(&self) -> usize {
        self.specs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
    pub fn encode<R: Record + ?Sized>(&self, record: &R) -> Result<Vec<(K, Value)>> {
        encode_ordered(record, &self.specs, self.settings.encode_order)
    }
    pub fn decode<R, P>(&self, record: R, properties: P) -> Result<R>
    where
        R: Record,
        P: IntoIterator<Item = (K, Value)>,
    {
        decode_indexed(record, &self.specs, &self.lookup, properties)
    }
}
