#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::missing_panics_doc,
    clippy::todo
)]
#![no_std]
extern crate alloc;

/// Node references.
pub mod references;

mod common_traits;
mod core_list;
mod error;
mod iter;
mod memory;
mod node;
mod singly_list;
mod storage;

pub use core_list::CoreList;
pub use error::ListError;
pub use iter::Iter;
pub use memory::{
    MemoryPolicy, MemoryReclaimNever, MemoryReclaimOnThreshold, MemoryState, Utilization,
};
pub use node::Node;
pub use references::{NodeIdx, NodeIdxError, Slot};
pub use singly_list::SinglyList;
pub use storage::NodeStorage;
