use crate::{ColumnBinding, Cursor, Error, Record, Result, Slot};

/// Binds one open cursor to one destination record type.
///
/// On each [`fetch_next`] call the mapper reads one row into typed scratch
/// slots and copies the bound values into the destination's fields. One
/// mapper per cursor; the cursor is owned and released when the mapper is
/// dropped or [`into_cursor`] is called.
///
/// The destination type is fixed by the `R` parameter, so the column→field
/// correspondence is resolved once, at construction, and reused for every
/// row.
///
/// [`fetch_next`]: RecordMapper::fetch_next
/// [`into_cursor`]: RecordMapper::into_cursor
#[derive(Debug)]
pub struct RecordMapper<C, R: Record + 'static> {
    cursor: C,

    /// Column names captured at construction; never change afterwards, even
    /// as the cursor's position advances.
    columns: Vec<String>,

    bindings: &'static [ColumnBinding<R>],

    /// Per column, the index of the binding it populates, or `None` for a
    /// column with no destination field.
    plan: Vec<Option<usize>>,
}

/// Anything the remaining rows of a mapper can be collected into.
pub trait FromRows<R>: Extend<R> + Default {}

impl<R, T: Extend<R> + Default> FromRows<R> for T {}

impl<C: Cursor, R: Record + 'static> RecordMapper<C, R> {
    /// Creates a mapper over an open, not-yet-exhausted cursor.
    ///
    /// Retrieves and snapshots the column names immediately; a retrieval
    /// failure is returned as a cursor error and no mapper is constructed.
    pub fn new(cursor: C) -> Result<Self> {
        let columns = cursor
            .column_names()
            .map_err(|err| err.context(Error::cursor("failed to retrieve column names")))?;

        let bindings = R::bindings();

        // `position` scans in declaration order, so when two fields bind the
        // same column the first-declared field wins.
        let plan = columns
            .iter()
            .map(|column| bindings.iter().position(|binding| binding.column == column))
            .collect();

        Ok(Self {
            cursor,
            columns,
            bindings,
            plan,
        })
    }

    /// The column-name snapshot taken at construction.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Fetches the next row into `record`.
    ///
    /// Returns `Ok(false)` once the cursor is exhausted, leaving `record`
    /// completely untouched; further calls keep returning `Ok(false)`. On
    /// `Ok(true)`, every field with a valid column correspondence has been
    /// overwritten with the row's value; all other fields retain whatever
    /// value they held on entry.
    ///
    /// At most one row is consumed from the cursor per call.
    pub fn fetch_next(&mut self, record: &mut R) -> Result<bool> {
        let mut slots: Vec<Slot> = self
            .plan
            .iter()
            .map(|resolved| match resolved {
                Some(index) => self.bindings[*index].kind.scratch(),
                None => Slot::Skip,
            })
            .collect();

        if !self.cursor.advance() {
            return Ok(false);
        }

        self.cursor
            .read_into(&mut slots)
            .map_err(|err| err.context(Error::scan("failed to read current row")))?;

        for (slot, resolved) in slots.into_iter().zip(&self.plan) {
            if let Some(index) = resolved {
                (self.bindings[*index].store)(record, slot)?;
            }
        }

        Ok(true)
    }

    /// Drains the remaining rows into a fresh collection, allocating a
    /// default record per row.
    pub fn collect<B>(mut self) -> Result<B>
    where
        R: Default,
        B: FromRows<R>,
    {
        let mut ret = B::default();

        loop {
            let mut record = R::default();
            if !self.fetch_next(&mut record)? {
                return Ok(ret);
            }
            ret.extend(Some(record));
        }
    }

    /// Releases the underlying cursor.
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}
