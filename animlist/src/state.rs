/// A lightweight, serializable snapshot of the list's bookkeeping.
///
/// This is what `on_change` receives. With `feature = "serde"`, this type implements
/// `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListState {
    /// Physical slot count (logical items plus items still animating out).
    pub item_count: usize,
    pub incoming: usize,
    pub outgoing: usize,
}

impl ListState {
    /// Number of items the backing data currently holds.
    pub fn logical_count(&self) -> usize {
        self.item_count.saturating_sub(self.outgoing)
    }

    pub fn is_animating(&self) -> bool {
        self.incoming > 0 || self.outgoing > 0
    }
}
