use crate::{MemoryPolicy, NodeStorage, SinglyList};
use core::fmt::Display;

/// Prints the data of the list from head to tail, such as `List contents: 30 20 10`.
impl<M, P> Display for SinglyList<M, P>
where
    M: MemoryPolicy,
    P: NodeStorage,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "List contents:")?;
        for x in self.iter() {
            write!(f, " {x}")?;
        }
        Ok(())
    }
}
