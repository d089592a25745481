use crate::NodeIdxError;
use core::fmt::Display;

/// Errors reported by the operations of a [`SinglyList`].
///
/// [`SinglyList`]: crate::SinglyList
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The entry to remove is not reachable from the head of the list; the list is left unchanged.
    NotFound,
    /// The storage of the list has no room for a new node and cannot grow.
    AllocationFailure,
    /// The node to insert is already linked to the list.
    AlreadyLinked,
    /// The node to dispose is still linked to the list; it must be removed first.
    StillLinked,
    /// The node index cannot be used with the list.
    InvalidIdx(NodeIdxError),
}

impl From<NodeIdxError> for ListError {
    fn from(value: NodeIdxError) -> Self {
        Self::InvalidIdx(value)
    }
}

impl Display for ListError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "node not found; nothing removed"),
            Self::AllocationFailure => write!(f, "failed to allocate memory for a new node"),
            Self::AlreadyLinked => write!(f, "node is already linked to the list"),
            Self::StillLinked => write!(f, "node is still linked to the list; remove it first"),
            Self::InvalidIdx(e) => write!(f, "invalid node index: {e}"),
        }
    }
}

impl core::error::Error for ListError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidIdx(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display() {
        assert_eq!(
            ListError::NotFound.to_string(),
            "node not found; nothing removed"
        );
        assert_eq!(
            ListError::from(NodeIdxError::RemovedNode).to_string(),
            "invalid node index: RemovedNode"
        );
    }

    #[test]
    fn source() {
        use core::error::Error;

        assert!(ListError::NotFound.source().is_none());
        assert!(
            ListError::InvalidIdx(NodeIdxError::WrongCollection)
                .source()
                .is_some()
        );
    }
}
