//! Event system for decoupled inter-module communication.
//!
//! Every change that does not come from the per-frame cursor sample goes
//! through this queue. The runtime task is its only consumer, so settings
//! edits, running toggles and topology rebuilds are applied between frames
//! and never interleave with a render write.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Commands   │     │  Settings   │     │   Surface   │
//! │   (stdin)   │     │   editor    │     │   factory   │
//! └──────┬──────┘     └──────┬──────┘     └──────┬──────┘
//!        │ publish()         │ publish()         │ publish()
//!        ▼                   ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     EventBus                        │
//! │               (tokio unbounded mpsc)                │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ recv()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    Dispatcher                       │
//! │            (runtime task, frame-paced)              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Structure
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::AppEvent;
