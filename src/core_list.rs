use crate::{Node, NodeStorage, Slot, Utilization};
use alloc::vec::Vec;
use orx_split_vec::{Recursive, SplitVec};

/// Core of the singly linked list: the arena of nodes, the head link and the counters.
///
/// Links are arena positions; a link of `None` denotes the end of the chain.
pub struct CoreList<P = SplitVec<Node, Recursive>>
where
    P: NodeStorage,
{
    nodes: P,
    head: Option<usize>,
    len: usize,
    num_active: usize,
}

impl<P> Default for CoreList<P>
where
    P: NodeStorage + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P> CoreList<P>
where
    P: NodeStorage,
{
    /// Creates a new empty list core.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self::with_storage(P::default())
    }

    /// Creates a new empty list core using the given `nodes` storage.
    ///
    /// Any element already in the storage is cleared.
    pub fn with_storage(mut nodes: P) -> Self {
        nodes.clear();
        Self {
            nodes,
            head: None,
            len: 0,
            num_active: 0,
        }
    }

    // get

    /// Returns current node utilization of the arena.
    pub fn utilization(&self) -> Utilization {
        Utilization {
            capacity: self.nodes.capacity(),
            num_active_nodes: self.num_active,
            num_closed_nodes: self.nodes.len() - self.num_active,
        }
    }

    /// Number of nodes reachable from the head.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether or not the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of active nodes in the arena, linked or free.
    #[inline(always)]
    pub fn num_active(&self) -> usize {
        self.num_active
    }

    /// Returns a reference to the underlying nodes storage.
    #[inline(always)]
    pub fn nodes(&self) -> &P {
        &self.nodes
    }

    /// Position of the first node of the chain.
    #[inline(always)]
    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Returns a reference to the node at the given arena `pos`ition.
    #[inline(always)]
    pub fn node(&self, pos: usize) -> Option<&Node> {
        self.nodes.get(pos)
    }

    /// Returns the position of the node that the `slot` currently links to.
    pub fn link(&self, slot: Slot) -> Option<usize> {
        match slot {
            Slot::Head => self.head,
            Slot::NextOf(pos) => self.nodes.get(pos).and_then(Node::next),
        }
    }

    /// Iterates over arena positions of the chain from head to tail.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        core::iter::successors(self.head, move |&pos| self.link(Slot::NextOf(pos)))
    }

    // mut

    fn set_link(&mut self, slot: Slot, target: Option<usize>) {
        match slot {
            Slot::Head => self.head = target,
            Slot::NextOf(pos) => {
                if let Some(node) = self.nodes.get_mut(pos) {
                    node.set_next(target);
                }
            }
        }
    }

    /// Pushes a free node holding `data` and returns its position.
    pub(crate) fn push(&mut self, data: i32) -> usize {
        let pos = self.nodes.len();
        self.nodes.push(Node::new_free_node(data));
        self.num_active += 1;
        pos
    }

    /// Makes the free node at `pos` the new head.
    pub(crate) fn link_front(&mut self, pos: usize) {
        let old_head = self.head;
        if let Some(node) = self.nodes.get_mut(pos) {
            node.set_next(old_head);
            node.set_linked(true);
            self.head = Some(pos);
            self.len += 1;
        }
    }

    /// Unlinks the node at `pos` by walking a single slot cursor from the head.
    ///
    /// Returns false, leaving the chain untouched, if the node is not reachable from the head.
    pub(crate) fn unlink_indirect(&mut self, pos: usize) -> bool {
        let mut slot = Slot::Head;
        loop {
            match self.link(slot) {
                None => return false,
                Some(current) if current == pos => break,
                Some(current) => slot = Slot::NextOf(current),
            }
        }

        let next = self.link(Slot::NextOf(pos));
        self.set_link(slot, next);
        self.detach(pos);
        true
    }

    /// Unlinks the node at `pos` by walking a `prev` and `walk` pair from the head.
    ///
    /// Equivalent to [`unlink_indirect`](Self::unlink_indirect), with separate
    /// branches for the head and for the other nodes.
    pub(crate) fn unlink_tracking_prev(&mut self, pos: usize) -> bool {
        let mut prev = None;
        let mut walk = self.head;

        while let Some(current) = walk {
            if current == pos {
                break;
            }
            prev = Some(current);
            walk = self.link(Slot::NextOf(current));
        }

        let Some(current) = walk else {
            return false;
        };

        let next = self.link(Slot::NextOf(current));
        match prev {
            None => self.head = next,
            Some(prev) => self.set_link(Slot::NextOf(prev), next),
        }
        self.detach(pos);
        true
    }

    fn detach(&mut self, pos: usize) {
        if let Some(node) = self.nodes.get_mut(pos) {
            node.set_next(None);
            node.set_linked(false);
            self.len -= 1;
        }
    }

    /// Closes the free node at `pos` and returns its data; None if it was already closed.
    pub(crate) fn close(&mut self, pos: usize) -> Option<i32> {
        let data = self.nodes.get_mut(pos).and_then(Node::close);
        if data.is_some() {
            self.num_active -= 1;
        }
        data
    }

    /// Moves the chain to positions `0..len` in link order, rewrites the links
    /// and truncates the storage, dropping every closed node.
    ///
    /// Does nothing while free nodes exist, or when there is no closed node.
    /// Returns whether or not the layout of the storage has changed.
    pub fn reclaim_nodes(&mut self) -> bool {
        let used = self.nodes.len();
        if self.num_active != self.len || used == self.len {
            return false;
        }

        let order: Vec<usize> = self.positions().collect();
        let mut position_of: Vec<usize> = (0..used).collect();
        let mut at_position: Vec<usize> = (0..used).collect();

        for (target, &original) in order.iter().enumerate() {
            let current = position_of[original];
            if current != target {
                self.nodes.swap(target, current);

                let displaced = at_position[target];
                at_position[target] = original;
                position_of[original] = target;
                at_position[current] = displaced;
                position_of[displaced] = current;
            }
        }

        for target in 0..self.len {
            let next = (target + 1 < self.len).then_some(target + 1);
            self.nodes[target].set_next(next);
        }
        self.head = (self.len > 0).then_some(0);
        self.nodes.truncate(self.len);

        true
    }
}
