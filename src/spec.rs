//! Field specifications: one mapping rule per record field.

use std::fmt;
use std::sync::Arc;

use crate::error::TransformError;
use crate::value::Value;

/// A unary transform applied to a value on its way in or out of a record.
pub type Transform = Arc<dyn Fn(Value) -> Result<Value, TransformError> + Send + Sync>;

/// Maps an external property name onto a record position.
///
/// Specs are immutable once built and cheap to clone, the transform is
/// shared. The position is not checked against any record until the spec
/// is used by [`encode`](crate::encode) or [`decode`](crate::decode).
#[derive(Clone)]
pub struct FieldSpec<K = String> {
    name: K,
    position: usize,
    transform: Option<Transform>,
}

impl<K> FieldSpec<K> {
    /// A spec with the identity transform.
    pub fn new(name: impl Into<K>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
            transform: None,
        }
    }
    pub fn with_transform<F>(name: impl Into<K>, position: usize, transform: F) -> Self
    where
        F: Fn(Value) -> Result<Value, TransformError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            position,
            transform: Some(Arc::new(transform)),
        }
    }
    /// Like [`FieldSpec::with_transform`] for transforms that cannot fail.
    pub fn mapped<F>(name: impl Into<K>, position: usize, transform: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self::with_transform(name, position, move |value| Ok(transform(value)))
    }
    pub fn name(&self) -> &K {
        &self.name
    }
    pub fn position(&self) -> usize {
        self.position
    }
    pub fn is_identity(&self) -> bool {
        self.transform.is_none()
    }
    pub fn apply(&self, value: Value) -> Result<Value, TransformError> {
        match &self.transform {
            Some(transform) => transform(value),
            None => Ok(value),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for FieldSpec<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("position", &self.position)
            .field("identity", &self.transform.is_none())
            .finish()
    }
}

pub fn field_spec<K>(name: impl Into<K>, position: usize) -> FieldSpec<K> {
    FieldSpec::new(name, position)
}

pub fn field_spec_with<K, F>(name: impl Into<K>, position: usize, transform: F) -> FieldSpec<K>
where
    F: Fn(Value) -> Result<Value, TransformError> + Send + Sync + 'static,
{
    FieldSpec::with_transform(name, position, transform)
}

/// Ready made transforms.
pub mod transform {
    use super::*;

    pub fn identity(value: Value) -> Result<Value, TransformError> {
        Ok(value)
    }

    /// Wraps every value as `Tagged(tag, value)`.
    pub fn wrap(tag: &str) -> impl Fn(Value) -> Result<Value, TransformError> + Send + Sync + use<> {
        let tag = tag.to_owned();
        move |value| Ok(Value::tagged(tag.clone(), value))
    }

    /// Inverse of [`wrap`], fails on values that are not tagged with `tag`.
    pub fn unwrap(tag: &str) -> impl Fn(Value) -> Result<Value, TransformError> + Send + Sync + use<> {
        let tag = tag.to_owned();
        move |value| match value {
            Value::Tagged(t, inner) if t == tag => Ok(*inner),
            other => Err(TransformError::new(format!(
                "expected a value tagged '{}', found {}",
                tag, other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_transform_is_identity() {
        let spec: FieldSpec = field_spec("name", 0);
        assert!(spec.is_identity());
        assert_eq!(spec.name(), "name");
        assert_eq!(spec.position(), 0);
        assert_eq!(spec.apply(Value::from("NL")).unwrap(), Value::from("NL"));
    }

    #[test]
    fn construction_does_not_validate_position() {
        let spec: FieldSpec = field_spec("far", 1_000);
        assert_eq!(spec.position(), 1_000);
    }

    #[test]
    fn wrap_then_unwrap() {
        let wrap: FieldSpec = field_spec_with("name", 0, transform::wrap("s"));
        let unwrap: FieldSpec = field_spec_with("name", 0, transform::unwrap("s"));
        let wrapped = wrap.apply(Value::from("Netherlands")).unwrap();
        assert_eq!(wrapped, Value::tagged("s", "Netherlands"));
        assert_eq!(unwrap.apply(wrapped).unwrap(), Value::from("Netherlands"));
        let err = unwrap.apply(Value::from("bare")).unwrap_err();
        assert!(err.message().contains("tagged 's'"));
    }

    #[test]
    fn mapped_specs_share_their_transform_when_cloned() {
        let spec: FieldSpec = FieldSpec::mapped("n", 0, |v| match v {
            Value::Integer(i) => Value::Integer(i * 2),
            other => other,
        });
        let copy = spec.clone();
        assert_eq!(copy.apply(Value::from(21)).unwrap(), Value::Integer(42));
        assert!(!copy.is_identity());
    }
}
