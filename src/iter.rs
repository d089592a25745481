use crate::NodeStorage;
use core::{fmt::Debug, iter::FusedIterator};

/// Iterator over the data of a list, from the head to the tail, in link order.
///
/// Created by [`SinglyList::iter`]; it never mutates the list and the list can be
/// traversed again by creating a new iterator or cloning this one.
///
/// [`SinglyList::iter`]: crate::SinglyList::iter
pub struct Iter<'a, P>
where
    P: NodeStorage,
{
    nodes: &'a P,
    current: Option<usize>,
}

impl<'a, P> Iter<'a, P>
where
    P: NodeStorage,
{
    pub(crate) fn new(nodes: &'a P, head: Option<usize>) -> Self {
        Self {
            nodes,
            current: head,
        }
    }
}

impl<P> Clone for Iter<'_, P>
where
    P: NodeStorage,
{
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            current: self.current,
        }
    }
}

impl<P> Iterator for Iter<'_, P>
where
    P: NodeStorage,
{
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.current?)?;
        self.current = node.next();
        node.data()
    }
}

impl<P> FusedIterator for Iter<'_, P> where P: NodeStorage {}

impl<P> Debug for Iter<'_, P>
where
    P: NodeStorage,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

