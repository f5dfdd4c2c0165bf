//! WiX installer-descriptor generator.
//!
//! This library converts a directory of application files into a declarative
//! WiX `.wxs` descriptor: every file becomes a `Component` with a stable,
//! path-derived identifier, every directory becomes a nested `Directory`
//! element, and the result is wrapped in a fixed `Wix`/`Product` skeleton
//! carrying product metadata, optional shortcuts, and URL-protocol
//! registrations.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod wxs;

// Re-export commonly used types
pub use error::{Error, Result};
pub use wxs::{Arch, Protocol, Settings, SettingsBuilder, XmlElement, generate};
