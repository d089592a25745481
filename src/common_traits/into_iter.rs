use crate::{Iter, MemoryPolicy, NodeStorage, SinglyList};

impl<'a, M, P> IntoIterator for &'a SinglyList<M, P>
where
    M: MemoryPolicy,
    P: NodeStorage,
{
    type Item = i32;

    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
