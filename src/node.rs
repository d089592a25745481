use core::fmt::Debug;

/// Node of the singly linked list, stored in the arena of its list.
///
/// A node is in one of three states:
/// * free: created by `create` but not linked to the chain, or detached by `remove`;
/// * linked: reachable from the head of the list;
/// * closed: disposed; its position is a hole until memory is reclaimed.
#[derive(Clone, PartialEq, Eq)]
pub struct Node {
    data: Option<i32>,
    next: Option<usize>,
    linked: bool,
}

impl Node {
    /// Creates a new active node with the given `data` but with no connections.
    pub fn new_free_node(data: i32) -> Self {
        Self {
            data: Some(data),
            next: None,
            linked: false,
        }
    }

    // ref

    /// Returns the data of the node; None if the node is already closed.
    pub fn data(&self) -> Option<i32> {
        self.data
    }

    /// Returns the arena position of the successor of this node, if any.
    #[inline(always)]
    pub fn next(&self) -> Option<usize> {
        self.next
    }

    /// Returns true if the node is currently part of the chain of its list.
    #[inline(always)]
    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// Returns true if the node is active, false if it is closed.
    #[inline(always)]
    pub fn is_active(&self) -> bool {
        self.data.is_some()
    }

    /// Returns true if the node is closed, false if it is active.
    #[inline(always)]
    pub fn is_closed(&self) -> bool {
        self.data.is_none()
    }

    // mut

    pub(crate) fn set_next(&mut self, next: Option<usize>) {
        self.next = next;
    }

    pub(crate) fn set_linked(&mut self, linked: bool) {
        self.linked = linked;
    }

    /// Closes the node and returns its data, and clears its connections.
    ///
    /// Returns None if the node was already closed.
    pub(crate) fn close(&mut self) -> Option<i32> {
        self.next = None;
        self.linked = false;
        self.data.take()
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("next", &self.next)
            .field("linked", &self.linked)
            .finish()
    }
}
