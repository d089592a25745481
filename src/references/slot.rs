/// A place holding a link to a node of the chain.
///
/// This is the "indirect pointer" of the list: it does not denote a node, but
/// the link that currently refers to a node. Rewriting the link that a slot
/// denotes is the same operation for the head of the list and for the `next`
/// of any node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// The head of the list.
    Head,
    /// The `next` link of the node at the given arena position.
    NextOf(usize),
}
