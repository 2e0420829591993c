//! macOS host backed by CoreGraphics.

pub mod host;

pub use host::CoreGraphicsHost;
