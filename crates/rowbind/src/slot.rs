use crate::{Error, Result};

/// A transient typed variable used to receive one column's value for the
/// current row before it is copied into the destination field.
///
/// The mapper allocates one slot per result column, in column order. Columns
/// with no corresponding destination field get a [`Slot::Skip`] placeholder:
/// the cursor reads the value and the mapper discards it.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Slot {
    /// Inert placeholder for a column with no destination field
    #[default]
    Skip,

    /// Signed 64-bit integer value
    I64(i64),

    /// 64-bit float value
    F64(f64),

    /// String value
    String(String),

    /// Boolean value
    Bool(bool),
}

impl Slot {
    pub const fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }

    /// Returns the field kind this slot was allocated for, or `None` for a
    /// placeholder slot.
    pub const fn kind(&self) -> Option<FieldKind> {
        match self {
            Self::Skip => None,
            Self::I64(_) => Some(FieldKind::Int),
            Self::F64(_) => Some(FieldKind::Float),
            Self::String(_) => Some(FieldKind::Str),
            Self::Bool(_) => Some(FieldKind::Bool),
        }
    }

    pub fn to_i64(self) -> Result<i64> {
        match self {
            Self::I64(v) => Ok(v),
            _ => Err(Error::mapping(format!("cannot convert {self:?} to i64"))),
        }
    }

    pub fn to_f64(self) -> Result<f64> {
        match self {
            Self::F64(v) => Ok(v),
            _ => Err(Error::mapping(format!("cannot convert {self:?} to f64"))),
        }
    }

    pub fn to_string(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            _ => Err(Error::mapping(format!("cannot convert {self:?} to String"))),
        }
    }

    pub fn to_bool(self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            _ => Err(Error::mapping(format!("cannot convert {self:?} to bool"))),
        }
    }
}

impl From<i64> for Slot {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Slot {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Slot {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&str> for Slot {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<bool> for Slot {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

/// The four value kinds a destination field may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Signed integer of any width
    Int,

    /// Floating point of any width
    Float,

    /// String
    Str,

    /// Boolean
    Bool,
}

impl FieldKind {
    /// Allocates a zeroed scratch slot of this kind.
    pub fn scratch(self) -> Slot {
        match self {
            Self::Int => Slot::I64(0),
            Self::Float => Slot::F64(0.0),
            Self::Str => Slot::String(String::new()),
            Self::Bool => Slot::Bool(false),
        }
    }
}
