//! Descriptor generation: tree walker, document assembler, serialization.
//!
//! The generator is a single pipeline: [`Settings`] → [`walk`] produces the
//! element tree and identifier list → [`document::installer_document`] wraps
//! them in the fixed product skeleton → [`XmlElement::to_xml`] serializes.

pub mod document;
mod element;
mod id;
mod settings;
mod walker;

// Re-export all public types
pub use element::XmlElement;
pub use id::escape_id;
pub use settings::{Arch, Protocol, Settings, SettingsBuilder};
pub use walker::WalkOutput;

use crate::error::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Walks the configured source tree and returns the root-level element
/// sequence plus the flat identifier list.
///
/// # Errors
///
/// Fails on the first directory that cannot be listed or entry that cannot
/// be classified; partial results are discarded.
pub async fn walk(settings: &Settings) -> Result<WalkOutput> {
    walker::collect_components(PathBuf::new(), Arc::new(settings.clone())).await
}

/// Generates the pretty-printed descriptor document for the given settings.
///
/// # Examples
///
/// ```no_run
/// use wixgen::{SettingsBuilder, generate};
///
/// # async fn example() -> wixgen::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source("build/app")
///     .name("MyApp")
///     .version("1.0.0")
///     .manufacturer("Example Inc.")
///     .upgrade_code("12345678-1234-1234-1234-123456789012")
///     .icon_path("assets/app.ico")
///     .executable("myapp.exe")
///     .build()?;
///
/// let wxs = generate(&settings).await?;
/// # Ok(())
/// # }
/// ```
pub async fn generate(settings: &Settings) -> Result<String> {
    render(settings, true).await
}

/// Generates the descriptor document without indentation.
pub async fn generate_compact(settings: &Settings) -> Result<String> {
    render(settings, false).await
}

async fn render(settings: &Settings, pretty: bool) -> Result<String> {
    let output = walk(settings).await?;
    log::info!(
        "collected {} components from {}",
        output.component_ids.len(),
        settings.source().display()
    );

    let doc = document::installer_document(output.elements, &output.component_ids, settings);
    Ok(doc.to_xml(pretty))
}
