mod node_idx;
mod node_idx_error;
mod slot;

pub use node_idx::NodeIdx;
pub use node_idx_error::NodeIdxError;
pub use slot::Slot;
