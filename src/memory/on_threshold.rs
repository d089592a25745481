use super::policy::MemoryPolicy;
use crate::{CoreList, NodeStorage};

/// Memory reclaim policy which triggers the reclaim operation whenever the node utilization
/// falls below a certain threshold.
///
/// Specifically, memory of closed nodes will be reclaimed whenever the ratio of closed nodes to all nodes exceeds one over `2^D`.
/// * when `D = 0`: memory will be reclaimed when utilization is below 0.00% (equivalent to never).
/// * when `D = 1`: memory will be reclaimed when utilization is below 50.00%.
/// * when `D = 2`: memory will be reclaimed when utilization is below 75.00%.
/// * when `D = 3`: memory will be reclaimed when utilization is below 87.50%.
/// * when `D = 4`: memory will be reclaimed when utilization is below 93.75%.
///
/// Reclaim is skipped while the list has free nodes, since reorganizing would
/// invalidate the only handles to them.
#[derive(Default, Clone, Copy, Debug)]
pub struct MemoryReclaimOnThreshold<const D: usize = 2>;

impl<const D: usize> MemoryPolicy for MemoryReclaimOnThreshold<D> {
    fn reclaim_closed_nodes<P>(col: &mut CoreList<P>) -> bool
    where
        P: NodeStorage,
    {
        let used = col.nodes().len();
        let allowed_vacant = used >> D;
        let num_vacant = used - col.num_active();

        match num_vacant <= allowed_vacant {
            true => false,
            false => col.reclaim_nodes(),
        }
    }
}
