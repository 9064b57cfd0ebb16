//! Profile storage for the profile manager.
//!
//! This crate owns the authoritative in-memory collection of profiles and
//! the bounded activity log. Consumers read snapshots, mutate through the
//! store's operations and observe changes through callback listeners or a
//! broadcast channel.

mod activity_log;
mod error;
mod operation;
mod search;
mod seed;
mod statistics;
mod store;
mod subscription;

pub use activity_log::*;
pub use error::*;
pub use operation::*;
pub use search::*;
pub use seed::*;
pub use statistics::*;
pub use store::*;
pub use subscription::*;
