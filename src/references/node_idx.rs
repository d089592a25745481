use crate::MemoryState;

/// A node index providing safe and constant time access to the nodes of a list.
///
/// The index is the identity of a node: two nodes holding equal data are
/// still different entries, and removal always targets the entry of the given index.
///
/// A node index is valid iff it satisfies all of the following:
///
/// * It is created by the list it is used with.
/// * Memory state of the list has not changed since this index was created.
/// * The node it refers to has not been disposed.
///
/// Invalid indices are never silently redirected to another node; list methods
/// reject them with the corresponding [`NodeIdxError`].
///
/// [`NodeIdxError`]: crate::NodeIdxError
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeIdx {
    pos: usize,
    key: usize,
    state: MemoryState,
}

impl NodeIdx {
    /// Creates a new index for the node at the given `pos`ition of the list
    /// with the given `key` and memory `state`.
    #[inline(always)]
    pub(crate) fn new(pos: usize, key: usize, state: MemoryState) -> Self {
        Self { pos, key, state }
    }

    /// Position of the node in the arena of its list at the time the index is created.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Checks whether or not the `state` of the index matches that of this index.
    #[inline(always)]
    pub fn is_in_state(&self, state: MemoryState) -> bool {
        self.state == state
    }

    #[inline(always)]
    pub(crate) fn key(&self) -> usize {
        self.key
    }
}
