//! Configuration structures for descriptor generation.

mod arch;
mod builder;
mod core;

// Re-export all public types
pub use arch::Arch;
pub use builder::SettingsBuilder;
pub use core::{Protocol, Settings};
