use core::fmt::{Debug, Display};

/// Error cases of an invalid node index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeIdxError {
    /// RemovedNode => Referenced node is disposed.
    /// Node index can only be used if the corresponding node is still active in the list's arena.
    RemovedNode,
    /// WrongCollection => Node index is used on a list different than the list it is created for.
    /// Node indices can only be used for the list that created them.
    WrongCollection,
    /// ReorganizedCollection => Nodes of the list are re-organized in order to reclaim memory of closed nodes.
    /// Such a reorganization happens:
    /// * after a dispose if the utilization level drops below a threshold with `MemoryReclaimOnThreshold`,
    /// * only if the `reclaim_closed_nodes()` is manually called when `MemoryReclaimNever` is used,
    ///   * note that in this case indices are never implicitly invalidated.
    ReorganizedCollection,
}

impl Display for NodeIdxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        <NodeIdxError as Debug>::fmt(self, f)
    }
}

impl core::error::Error for NodeIdxError {}
