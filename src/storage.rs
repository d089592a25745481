use crate::Node;
use orx_fixed_vec::FixedVec;
use orx_pinned_vec::PinnedVec;
use orx_split_vec::{Doubling, Recursive, SplitVec};

/// Arena storing the nodes of a list.
///
/// Any pinned vector can be used; the only additional requirement is to tell
/// whether or not one more node can be pushed without exceeding a hard bound.
/// * growable storages such as [`SplitVec`] always have room; failing to allocate
///   follows the global allocator and aborts.
/// * [`FixedVec`] has room as long as its length is below its fixed capacity.
pub trait NodeStorage: PinnedVec<Node> {
    /// Returns true if one more node can be pushed to the storage.
    fn has_room(&self) -> bool;
}

impl NodeStorage for SplitVec<Node, Recursive> {
    #[inline(always)]
    fn has_room(&self) -> bool {
        true
    }
}

impl NodeStorage for SplitVec<Node, Doubling> {
    #[inline(always)]
    fn has_room(&self) -> bool {
        true
    }
}

impl NodeStorage for FixedVec<Node> {
    #[inline(always)]
    fn has_room(&self) -> bool {
        PinnedVec::len(self) < PinnedVec::capacity(self)
    }
}
