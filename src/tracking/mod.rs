//! Cursor tracking: display ownership, coordinate mapping and the per-frame
//! polling iteration.

pub mod mapper;
pub mod poll_loop;
pub mod resolver;
pub mod topology;

pub use mapper::{to_global, to_local};
pub use poll_loop::{PollingLoop, TickOutcome};
pub use resolver::resolve;
pub use topology::{TopologyChange, TopologyWatcher};
