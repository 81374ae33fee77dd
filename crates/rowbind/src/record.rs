use crate::{FieldKind, Result, Slot};

/// A destination type rows can be mapped into.
///
/// Usually implemented with `#[derive(Record)]`, which builds the binding
/// table from `#[column("...")]` field attributes. Types that cannot use the
/// derive may implement this trait by hand and register their bindings
/// explicitly.
pub trait Record: Sized {
    /// The column bindings declared by this type, in field declaration order.
    ///
    /// Order matters: when two fields bind the same column name, the
    /// first-declared field wins.
    fn bindings() -> &'static [ColumnBinding<Self>];
}

/// One entry of a record type's correspondence table: the result column a
/// field binds to, the field's declared kind, and the operation that writes a
/// scratch slot's value into that field.
pub struct ColumnBinding<R> {
    /// Result-column name, matched by exact string equality
    pub column: &'static str,

    /// Declared kind of the destination field
    pub kind: FieldKind,

    /// Copies the slot's value into the destination field. Fails with a
    /// mapping error if the slot kind does not match or the value is out of
    /// range for the field's width.
    pub store: fn(&mut R, Slot) -> Result<()>,
}

impl<R> core::fmt::Debug for ColumnBinding<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("ColumnBinding")
            .field("column", &self.column)
            .field("kind", &self.kind)
            .finish()
    }
}
