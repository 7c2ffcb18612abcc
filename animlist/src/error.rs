use core::fmt;

/// A caller/backing-data desynchronization detected by the list.
///
/// The panicking entry points (`insert_item`, `remove_item`, ...) turn these into panics; the
/// `try_*` variants return them without touching any state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListError {
    /// The logical insert position is past the end of the list.
    InsertOutOfRange { index: usize, logical_count: usize },
    /// The logical index does not name an item in the backing data.
    RemoveOutOfRange { index: usize, logical_count: usize },
    /// The physical slot is already animating out.
    AlreadyRemoving { slot: usize },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InsertOutOfRange {
                index,
                logical_count,
            } => write!(
                f,
                "insert index out of range (index={index}, logical_count={logical_count})"
            ),
            Self::RemoveOutOfRange {
                index,
                logical_count,
            } => write!(
                f,
                "remove index out of range (index={index}, logical_count={logical_count})"
            ),
            Self::AlreadyRemoving { slot } => {
                write!(f, "slot is already animating out (slot={slot})")
            }
        }
    }
}

impl core::error::Error for ListError {}
