use super::policy::MemoryPolicy;
use crate::{CoreList, NodeStorage};

/// A do-nothing `MemoryPolicy` which would never reclaim the memory of the closed nodes, leaving them as holes in the underlying storage.
///
/// This approach has the advantage that a `NodeIdx` is never invalidated due to an automatic memory reorganization.
///
/// Furthermore, node utilization can still be maximized by manually calling `reclaim_closed_nodes` method.
#[derive(Default, Clone, Copy, Debug)]
pub struct MemoryReclaimNever;

impl MemoryPolicy for MemoryReclaimNever {
    #[inline(always)]
    fn reclaim_closed_nodes<P>(_col: &mut CoreList<P>) -> bool
    where
        P: NodeStorage,
    {
        false
    }
}
