use crate::{MemoryPolicy, NodeStorage, SinglyList};
use core::fmt::Debug;

impl<M, P> Debug for SinglyList<M, P>
where
    M: MemoryPolicy,
    P: NodeStorage,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SinglyList")
            .field("len", &self.len())
            .field("values", &self.iter())
            .field("utilization", &self.utilization())
            .finish()
    }
}
