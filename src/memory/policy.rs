use crate::{CoreList, NodeStorage};

/// Policy which determines how the memory of closed nodes will be reclaimed and made useful.
///
/// Two implementors are:
/// * [`MemoryReclaimOnThreshold::<D>`] reclaims unused holes whenever the utilization of the memory falls below a constant threshold determined by `D`.
/// * [`MemoryReclaimNever`] which never reclaims the holes left by disposed nodes.
///   This approach has the advantage that a `NodeIdx` is never invalidated due to memory reorganization.
///   Note that it still allows to reclaim closed nodes manually.
///
/// [`MemoryReclaimOnThreshold::<D>`]: crate::MemoryReclaimOnThreshold
/// [`MemoryReclaimNever`]: crate::MemoryReclaimNever
pub trait MemoryPolicy: Clone + Default {
    /// Reclaims closed nodes; called right after a node is disposed.
    ///
    /// Assume that **A** below stands for active nodes and **x** designates a closed node.
    /// If the underlying storage has the following layout at a certain stage:
    /// * `[ x, x, A, x, A, A, A, x, A, x ]`
    ///
    /// the reclaimer first reorganizes the nodes so that we have:
    /// * `[ A, A, A, A, A, x, x, x, x, x ]`
    ///
    /// and next trims the storage to reclaim memory
    /// * `[ A, A, A, A, A ]`
    ///
    /// The active nodes end up in link order, head first.
    ///
    /// Returns whether or not the layout of the storage has changed.
    fn reclaim_closed_nodes<P>(col: &mut CoreList<P>) -> bool
    where
        P: NodeStorage;
}
