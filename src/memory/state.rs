/// Memory state of a list.
///
/// The state advances every time the arena is reorganized, which invalidates
/// every node index created before.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct MemoryState {
    pub(crate) id: usize,
}

impl MemoryState {
    pub(crate) const fn successor_state(&self) -> Self {
        Self { id: self.id + 1 }
    }
}
