//! Positionally addressed records.
//!
//! A record is a fixed-arity sequence of optional values. Positions are
//! 0-based and `None` marks an absent field. Two kinds of records are
//! provided:
//! * [`Row`] – a dynamic record backed by a vector, useful when the shape
//!   is only known at runtime.
//! * Struct records declared with the [`record!`](crate::record) macro,
//!   where each named field is bound to a fixed position.

use crate::error::{RecmapError, Result};
use crate::value::Value;

pub trait Record {
    fn arity(&self) -> usize;
    /// Reads the field at `position`, `Ok(None)` when it is absent.
    fn field(&self, position: usize) -> Result<Option<&Value>>;
    /// Sets the field at `position`, replacing whatever was there.
    fn set_field(&mut self, position: usize, value: Value) -> Result<()>;

    fn invalid_position(&self, position: usize) -> RecmapError {
        RecmapError::InvalidFieldPosition {
            position,
            arity: self.arity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    fields: Vec<Option<Value>>,
}

impl Row {
    /// A row of the given arity with every field absent.
    pub fn new(arity: usize) -> Self {
        Self {
            fields: vec![None; arity],
        }
    }
    pub fn from_fields(fields: Vec<Option<Value>>) -> Self {
        Self { fields }
    }
    pub fn fields(&self) -> &[Option<Value>] {
        &self.fields
    }
    pub fn into_fields(self) -> Vec<Option<Value>> {
        self.fields
    }
    pub fn with(mut self, position: usize, value: impl Into<Value>) -> Result<Self> {
        self.set_field(position, value.into())?;
        Ok(self)
    }
}

impl Record for Row {
    fn arity(&self) -> usize {
        self.fields.len()
    }
    fn field(&self, position: usize) -> Result<Option<&Value>> {
        match self.fields.get(position) {
            Some(slot) => Ok(slot.as_ref()),
            None => Err(self.invalid_position(position)),
        }
    }
    fn set_field(&mut self, position: usize, value: Value) -> Result<()> {
        let arity = self.fields.len();
        match self.fields.get_mut(position) {
            Some(slot) => {
                *slot = Some(value);
                Ok(())
            }
            None => Err(RecmapError::InvalidFieldPosition { position, arity }),
        }
    }
}

/// Declares a struct record whose fields are bound to fixed positions.
///
/// Every field is stored as `Option<Value>`. The generated struct derives
/// `Debug`, `Clone`, `Default` and `PartialEq`, so do not derive those again.
///
/// The positions must cover `0..n` exactly once for `n` fields, in any
/// order, so the arity is the field count and every position below it is
/// valid. Gaps and repeats are rejected at compile time:
///
/// ```compile_fail
/// recmap::record! {
///     struct Sparse {
///         a: 0,
///         b: 2,
///     }
/// }
/// ```
///
/// ```
/// use recmap::{record, Record, Value};
///
/// record! {
///     /// A country as held in memory.
///     pub struct Country {
///         pub name: 0,
///         pub country_code: 1,
///         pub currency_code: 2,
///     }
/// }
///
/// let country = Country { name: Some(Value::from("Netherlands")), ..Default::default() };
/// assert_eq!(country.arity(), 3);
/// assert_eq!(Country::position_of("currency_code"), Some(2));
/// assert_eq!(country.field(1).unwrap(), None);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($field_vis:vis $field:ident : $position:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $($field_vis $field: ::std::option::Option<$crate::Value>,)*
        }

        // positions must be a permutation of 0..n
        const _: () = {
            let positions: &[usize] = &[$($position),*];
            let mut i = 0;
            while i < positions.len() {
                assert!(positions[i] < positions.len(), "record position outside 0..field count");
                let mut j = i + 1;
                while j < positions.len() {
                    assert!(positions[i] != positions[j], "record position declared twice");
                    j += 1;
                }
                i += 1;
            }
        };

        impl $name {
            /// Field names in declaration order.
            pub const FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];

            pub fn position_of(name: &str) -> ::std::option::Option<usize> {
                match name {
                    $(stringify!($field) => ::std::option::Option::Some($position),)*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl $crate::Record for $name {
            fn arity(&self) -> usize {
                Self::FIELDS.len()
            }
            fn field(&self, position: usize) -> $crate::Result<::std::option::Option<&$crate::Value>> {
                match position {
                    $($position => ::std::result::Result::Ok(self.$field.as_ref()),)*
                    _ => ::std::result::Result::Err(<Self as $crate::Record>::invalid_position(self, position)),
                }
            }
            fn set_field(&mut self, position: usize, value: $crate::Value) -> $crate::Result<()> {
                match position {
                    $($position => {
                        self.$field = ::std::option::Option::Some(value);
                        ::std::result::Result::Ok(())
                    })*
                    _ => ::std::result::Result::Err(<Self as $crate::Record>::invalid_position(self, position)),
                }
            }
        }
    };
}
