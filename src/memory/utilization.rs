/// Node utilization of the arena of the list.
///
/// The result contains the following bits of information:
/// * `capacity`: number of positions that is already allocated.
/// * `num_active_nodes`: number of active nodes holding data, linked or free.
/// * `num_closed_nodes`: number of nodes which had been disposed; however, not yet reclaimed.
///
/// Note that `num_active_nodes + num_closed_nodes` reflects the length of the underlying pinned vector,
/// which is less than or equal to the `capacity`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Utilization {
    /// Number of positions that is already allocated.
    pub capacity: usize,
    /// Number of active nodes holding data.
    pub num_active_nodes: usize,
    /// Number of nodes which had been disposed; however, not yet reclaimed.
    pub num_closed_nodes: usize,
}
