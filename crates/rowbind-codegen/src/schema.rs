mod column;
pub(crate) use column::ColumnAttr;

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::{Binding, Field, FieldKind};

mod record;
pub(crate) use record::Record;
