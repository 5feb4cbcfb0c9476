//! Recmap – declarative field mapping between records and property lists.
//!
//! Recmap moves data between a positional, fixed-arity *record* and an
//! ordered list of `(name, value)` *properties*, the shape most JSON and
//! database layers want to see. The mapping is declared once as a list of
//! field specs:
//! * A [`spec::FieldSpec`] binds an external name to a record position and
//!   carries an optional transform applied on the way in or out.
//! * A [`record::Record`] is anything addressable by position. [`record::Row`]
//!   is a dynamic record, and the [`record!`] macro declares struct records.
//! * A [`value::Value`] is what fields and properties hold. An absent field is
//!   `None` in its `Option<Value>` slot, never a value.
//!
//! ## Modules
//! * [`mapper`] – [`encode`], [`decode`] and the reusable [`mapper::Mapper`].
//! * [`spec`] – Field specs and ready made transforms.
//! * [`record`] – The record trait, `Row` and the `record!` macro.
//! * [`value`] – The dynamic value type.
//! * [`settings`] – Mapper settings, readable from a config file.
//! * [`json`] – Property lists as JSON objects.
//! * [`sql`] – Property lists and values for SQLite.
//!
//! ## Ordering
//! [`encode`] emits its pairs in the *reverse* of the spec order, as if each
//! pair were prepended while walking the specs. A mapper configured with
//! [`settings::EncodeOrder::Preserved`] emits them in spec order instead.
//! [`decode`] applies properties in list order, so a repeated name ends up
//! holding its last value.
//!
//! ## Quick Start
//! ```
//! use recmap::{decode, encode, field_spec, record, FieldSpec, Value};
//!
//! record! {
//!     pub struct Country {
//!         pub name: 0,
//!         pub country_code: 1,
//!         pub currency_code: 2,
//!     }
//! }
//!
//! let specs: Vec<FieldSpec> = vec![
//!     field_spec("name", 0),
//!     field_spec("country_code", 1),
//!     field_spec("currency_code", 2),
//! ];
//! let country = Country {
//!     name: Some(Value::from("Netherlands")),
//!     ..Default::default()
//! };
//! let properties = encode(&country, &specs).unwrap();
//! assert_eq!(properties, vec![("name".to_string(), Value::from("Netherlands"))]);
//!
//! let decoded = decode(Country::default(), &specs, properties).unwrap();
//! assert_eq!(decoded, country);
//! ```

pub mod error;
pub mod json;
pub mod mapper;
pub mod record;
pub mod settings;
pub mod spec;
pub mod sql;
pub mod value;

pub use error::{RecmapError, Result, TransformError};
pub use mapper::{decode, encode, Mapper};
pub use record::{Record, Row};
pub use settings::{EncodeOrder, Settings};
pub use spec::{field_spec, field_spec_with, transform, FieldSpec, Transform};
pub use value::Value;
