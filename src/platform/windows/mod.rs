//! Windows host backed by Win32.

pub mod host;

pub use host::Win32Host;
