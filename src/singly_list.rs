use crate::{
    CoreList, Iter, ListError, MemoryPolicy, MemoryReclaimNever, MemoryState, Node, NodeIdx,
    NodeIdxError, NodeStorage, Utilization,
};
use core::{
    marker::PhantomData,
    sync::atomic::{AtomicUsize, Ordering},
};
use orx_split_vec::{Recursive, SplitVec};

static NEXT_LIST_KEY: AtomicUsize = AtomicUsize::new(0);

/// A singly linked list of `i32` values whose nodes live in an arena.
///
/// Nodes are created by the list, linked to the front by `insert`, unlinked by
/// `remove` and finally released by `dispose`:
///
/// * `create` returns a [`NodeIdx`] to a free node which is not yet part of the chain;
/// * `insert` makes the node the new head;
/// * `remove` unlinks the node, leaving it free; it never releases the node;
/// * `dispose` releases a free node and returns its data.
///
/// The list is generic over:
/// * `M`: the [`MemoryPolicy`] deciding when holes left by disposed nodes are reclaimed;
/// * `P`: the [`NodeStorage`] holding the nodes; a growable [`SplitVec`] by default,
///   or a fixed capacity `FixedVec` to bound the arena.
///
/// # Examples
///
/// ```
/// use orx_indirect_list::*;
///
/// let mut list: SinglyList = SinglyList::new();
///
/// let n1 = list.create(10).unwrap();
/// let n2 = list.create(20).unwrap();
/// let n3 = list.create(30).unwrap();
///
/// for idx in [n1, n2, n3] {
///     list.insert(idx).unwrap();
/// }
/// assert_eq!(list.iter().collect::<Vec<_>>(), [30, 20, 10]);
///
/// list.remove(n2).unwrap();
/// assert_eq!(list.iter().collect::<Vec<_>>(), [30, 10]);
/// assert_eq!(list.remove(n2), Err(ListError::NotFound));
///
/// assert_eq!(list.dispose(n2), Ok(20));
/// ```
pub struct SinglyList<M = MemoryReclaimNever, P = SplitVec<Node, Recursive>>
where
    M: MemoryPolicy,
    P: NodeStorage,
{
    core: CoreList<P>,
    key: usize,
    state: MemoryState,
    phantom: PhantomData<M>,
}

impl<M, P> Default for SinglyList<M, P>
where
    M: MemoryPolicy,
    P: NodeStorage + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<M, P> SinglyList<M, P>
where
    M: MemoryPolicy,
    P: NodeStorage,
{
    /// Creates a new empty list.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self::with_storage(P::default())
    }

    /// Creates a new empty list storing its nodes in the given `nodes` storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use orx_indirect_list::*;
    /// use orx_fixed_vec::FixedVec;
    ///
    /// let mut list: SinglyList<MemoryReclaimNever, FixedVec<Node>> =
    ///     SinglyList::with_storage(FixedVec::new(2));
    ///
    /// assert!(list.create(1).is_ok());
    /// assert!(list.create(2).is_ok());
    /// assert_eq!(list.create(3), Err(ListError::AllocationFailure));
    /// ```
    pub fn with_storage(nodes: P) -> Self {
        Self {
            core: CoreList::with_storage(nodes),
            key: NEXT_LIST_KEY.fetch_add(1, Ordering::Relaxed),
            state: MemoryState::default(),
            phantom: PhantomData,
        }
    }

    // get

    /// Number of nodes linked to the list.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Returns whether or not the list is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Data of the head of the list; None if the list is empty.
    pub fn front(&self) -> Option<i32> {
        self.iter().next()
    }

    /// Index of the head of the list; None if the list is empty.
    pub fn front_idx(&self) -> Option<NodeIdx> {
        self.core
            .head()
            .map(|pos| NodeIdx::new(pos, self.key, self.state))
    }

    /// Returns a lazy iterator over the data of the list from head to tail.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter::new(self.core.nodes(), self.core.head())
    }

    /// Returns current node utilization of the arena.
    pub fn utilization(&self) -> Utilization {
        self.core.utilization()
    }

    /// Memory state of the list; it changes whenever the arena is reorganized.
    #[inline(always)]
    pub fn memory_state(&self) -> MemoryState {
        self.state
    }

    /// Returns the core of the list.
    pub fn core(&self) -> &CoreList<P> {
        &self.core
    }

    /// Returns the reason why `idx` cannot be used with this list; None if it is valid.
    pub fn idx_error(&self, idx: NodeIdx) -> Option<NodeIdxError> {
        if idx.key() != self.key {
            Some(NodeIdxError::WrongCollection)
        } else if !idx.is_in_state(self.state) {
            Some(NodeIdxError::ReorganizedCollection)
        } else {
            // positions are only trimmed by reclaim, which also advances the state
            match self.core.node(idx.position()).is_some_and(Node::is_active) {
                true => None,
                false => Some(NodeIdxError::RemovedNode),
            }
        }
    }

    /// Returns true if `idx` can be used with this list.
    pub fn is_valid(&self, idx: NodeIdx) -> bool {
        self.idx_error(idx).is_none()
    }

    /// Returns the data of the node at `idx`.
    pub fn data(&self, idx: NodeIdx) -> Result<i32, ListError> {
        let pos = self.position_of(idx)?;
        self.core
            .node(pos)
            .and_then(Node::data)
            .ok_or(NodeIdxError::RemovedNode.into())
    }

    /// Returns whether or not the node at `idx` is linked to the list.
    pub fn is_linked(&self, idx: NodeIdx) -> Result<bool, ListError> {
        let pos = self.position_of(idx)?;
        Ok(self.core.node(pos).is_some_and(Node::is_linked))
    }

    fn position_of(&self, idx: NodeIdx) -> Result<usize, NodeIdxError> {
        match self.idx_error(idx) {
            None => Ok(idx.position()),
            Some(e) => Err(e),
        }
    }

    // mut

    /// Creates a new free node holding `value` and returns its index.
    ///
    /// The node is not part of the list until it is inserted.
    ///
    /// Returns `AllocationFailure` if the storage is full and cannot grow.
    pub fn create(&mut self, value: i32) -> Result<NodeIdx, ListError> {
        match self.core.nodes().has_room() {
            true => {
                let pos = self.core.push(value);
                Ok(NodeIdx::new(pos, self.key, self.state))
            }
            false => Err(ListError::AllocationFailure),
        }
    }

    /// Links the free node at `idx` to the front of the list, making it the new head.
    ///
    /// Returns `AlreadyLinked` if the node is already in the list.
    pub fn insert(&mut self, idx: NodeIdx) -> Result<(), ListError> {
        let pos = self.position_of(idx)?;
        match self.core.node(pos).is_some_and(Node::is_linked) {
            true => Err(ListError::AlreadyLinked),
            false => {
                self.core.link_front(pos);
                Ok(())
            }
        }
    }

    /// Unlinks the node at `idx` from the list, keeping the order of the remaining nodes.
    ///
    /// The list is walked with a single cursor denoting the link that points to the
    /// current candidate, starting from the head link. When the candidate is the entry,
    /// the link is rewritten to skip it. Removing the head and removing any other node
    /// is the same step since the head is just the first link.
    ///
    /// The removed node is not disposed, it becomes a free node with no successor.
    ///
    /// Returns `NotFound`, leaving the list unchanged, if the entry is not reachable from the head.
    pub fn remove(&mut self, idx: NodeIdx) -> Result<(), ListError> {
        let pos = self.position_of(idx)?;
        match self.core.unlink_indirect(pos) {
            true => Ok(()),
            false => Err(ListError::NotFound),
        }
    }

    /// Unlinks the node at `idx` from the list with the same contract as [`remove`](Self::remove).
    ///
    /// The list is walked with a `prev` and `walk` pair; the head and the other nodes
    /// are re-linked in two separate branches depending on whether `prev` exists.
    pub fn remove_tracking_prev(&mut self, idx: NodeIdx) -> Result<(), ListError> {
        let pos = self.position_of(idx)?;
        match self.core.unlink_tracking_prev(pos) {
            true => Ok(()),
            false => Err(ListError::NotFound),
        }
    }

    /// Releases the free node at `idx` and returns its data.
    ///
    /// The index becomes invalid. The memory policy of the list may then reorganize the arena,
    /// in which case all prior indices become invalid.
    ///
    /// Returns `StillLinked` if the node is still in the list.
    pub fn dispose(&mut self, idx: NodeIdx) -> Result<i32, ListError> {
        let pos = self.position_of(idx)?;
        if self.core.node(pos).is_some_and(Node::is_linked) {
            return Err(ListError::StillLinked);
        }

        let data = self.core.close(pos).ok_or(NodeIdxError::RemovedNode)?;
        if M::reclaim_closed_nodes(&mut self.core) {
            self.state = self.state.successor_state();
        }
        Ok(data)
    }

    /// Reclaims the holes left by disposed nodes regardless of the memory policy.
    ///
    /// Reclaim is performed only when there exist closed nodes and all active nodes are linked.
    /// When performed, the memory state changes and all prior indices become invalid.
    ///
    /// Returns whether or not the arena is reorganized.
    pub fn reclaim_closed_nodes(&mut self) -> bool {
        let reorganized = self.core.reclaim_nodes();
        if reorganized {
            self.state = self.state.successor_state();
        }
        reorganized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idx_error_beyond_storage_is_removed_node() {
        let mut list: SinglyList = SinglyList::new();
        let a = list.create(1).expect("growable");

        let beyond = NodeIdx::new(1, a.key(), list.memory_state());
        assert_eq!(list.idx_error(beyond), Some(NodeIdxError::RemovedNode));
        assert_eq!(
            list.insert(beyond),
            Err(ListError::InvalidIdx(NodeIdxError::RemovedNode))
        );
        assert_eq!(list.idx_error(a), None);
    }
}
