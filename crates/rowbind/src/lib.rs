mod cursor;
pub use cursor::Cursor;

mod error;
pub use error::Error;

mod mapper;
pub use mapper::{FromRows, RecordMapper};

mod record;
pub use record::{ColumnBinding, Record};

mod slot;
pub use slot::{FieldKind, Slot};

pub use rowbind_macros::Record;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{ColumnBinding, Error, FieldKind, Record, Result, Slot};
}
