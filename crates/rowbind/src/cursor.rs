use crate::{Result, Slot};

/// The row-fetching collaborator a [`RecordMapper`] drives.
///
/// Implementations wrap a live handle over an executing query's result
/// stream: forward-only advancement plus per-row extraction into typed
/// scratch slots. Blocking, single-threaded; cancellation and retries, if
/// needed, belong to the implementation or its caller, not to the mapper.
///
/// [`RecordMapper`]: crate::RecordMapper
pub trait Cursor {
    /// Returns the result-column names, in result order.
    ///
    /// Called once, at mapper construction. A failure here is surfaced as a
    /// cursor error and the mapper is not constructed.
    fn column_names(&self) -> Result<Vec<String>>;

    /// Advances to the next row, blocking until one is available.
    ///
    /// Returns `false` once the result stream is exhausted. Calling `advance`
    /// again after exhaustion must keep returning `false` rather than panic.
    fn advance(&mut self) -> bool;

    /// Reads the current row into `slots`, one slot per result column, in the
    /// same order as [`column_names`].
    ///
    /// A [`Slot::Skip`] placeholder means the column's value is unwanted:
    /// read it and leave the slot alone. Every other slot arrives pre-set to
    /// the kind the destination field expects.
    ///
    /// [`column_names`]: Cursor::column_names
    fn read_into(&mut self, slots: &mut [Slot]) -> Result<()>;
}
