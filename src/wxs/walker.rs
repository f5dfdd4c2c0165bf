//! Recursive directory traversal producing descriptor elements.
//!
//! Each file becomes a `Component` wrapping a `File` element, each directory
//! a `Directory` element wrapping its children. Sibling entries within one
//! directory are inspected concurrently; the first filesystem failure at any
//! depth aborts the whole traversal and discards partial results.

use super::element::XmlElement;
use super::id::escape_id;
use super::settings::Settings;
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::task::JoinSet;

/// Entries with this name are dropped before recursion and before
/// identifier generation.
const EXCLUDED_ENTRY: &str = ".DS_Store";

/// Result of walking one directory's full transitive contents.
#[derive(Clone, Debug)]
pub struct WalkOutput {
    /// One element per direct entry of the directory (components for files,
    /// nested `Directory` elements for subdirectories).
    pub elements: Vec<XmlElement>,

    /// Identifiers of every file component in the subtree, in traversal
    /// order. Directories contribute no identifier.
    pub component_ids: Vec<String>,
}

/// Output of a single directory-entry visit.
#[derive(Clone, Debug)]
struct EntryOutput {
    element: XmlElement,
    ids: Vec<String>,
}

/// Walks the directory at `settings.source().join(rel)` and returns its full
/// transitive contents as descriptor elements plus the flat identifier list.
///
/// Sibling entries are classified and processed concurrently. Results are
/// collected into per-entry slots, so the output order follows the directory
/// listing regardless of task completion order; the generated document is
/// therefore identical across runs on an unchanged tree.
///
/// # Errors
///
/// Any listing or classification failure aborts the traversal; no partial
/// result is returned.
pub async fn collect_components(rel: PathBuf, settings: Arc<Settings>) -> Result<WalkOutput> {
    collect_components_boxed(rel, settings).await
}

/// Boxed form of [`collect_components`]; the indirection breaks the
/// recursive opaque-future cycle so the future is provably `Send`.
fn collect_components_boxed(
    rel: PathBuf,
    settings: Arc<Settings>,
) -> std::pin::Pin<Box<dyn Future<Output = Result<WalkOutput>> + Send>> {
    Box::pin(collect_components_inner(rel, settings))
}

async fn collect_components_inner(rel: PathBuf, settings: Arc<Settings>) -> Result<WalkOutput> {
    let full = settings.source().join(&rel);
    log::debug!("scanning {}", full.display());

    let mut dir = fs::read_dir(&full).await.map_err(|source| Error::ReadDir {
        path: full.clone(),
        source,
    })?;

    let mut names: Vec<OsString> = Vec::new();
    loop {
        match dir.next_entry().await {
            Ok(Some(entry)) => {
                let name = entry.file_name();
                if name != EXCLUDED_ENTRY {
                    names.push(name);
                }
            }
            Ok(None) => break,
            Err(source) => {
                return Err(Error::ReadDir { path: full, source });
            }
        }
    }

    // Fan out one task per entry, fan back in first-error-wins. Each task
    // writes into its own slot, so completion order cannot reorder output.
    let mut tasks = JoinSet::new();
    let entry_count = names.len();
    for (idx, name) in names.into_iter().enumerate() {
        let rel = rel.clone();
        let settings = Arc::clone(&settings);
        tasks.spawn(async move { (idx, visit_entry(rel, name, settings).await) });
    }

    let mut slots: Vec<Option<EntryOutput>> = vec![None; entry_count];
    while let Some(joined) = tasks.join_next().await {
        let (idx, outcome) = joined?;
        slots[idx] = Some(outcome?);
    }

    let mut elements = Vec::with_capacity(entry_count);
    let mut component_ids = Vec::new();
    for entry in slots.into_iter().flatten() {
        elements.push(entry.element);
        component_ids.extend(entry.ids);
    }

    Ok(WalkOutput {
        elements,
        component_ids,
    })
}

/// Classifies one entry and produces its element subtree.
async fn visit_entry(rel: PathBuf, name: OsString, settings: Arc<Settings>) -> Result<EntryOutput> {
    let rel_child = rel.join(&name);
    let abs = settings.source().join(&rel_child);

    let metadata = fs::metadata(&abs).await.map_err(|source| Error::Probe {
        path: abs.clone(),
        source,
    })?;

    let display_name = name.to_string_lossy().into_owned();
    if metadata.is_dir() {
        let sub = collect_components_boxed(rel_child.clone(), settings).await?;
        let element = XmlElement::new("Directory")
            .attr("Id", escape_id(&rel_child))
            .attr("Name", display_name)
            .children(sub.elements);
        Ok(EntryOutput {
            element,
            ids: sub.component_ids,
        })
    } else {
        Ok(file_component(&rel_child, &abs, &display_name, &settings))
    }
}

/// Builds the `Component` element for one file, with shortcut and protocol
/// attachments when the file is the designated executable.
fn file_component(rel: &Path, abs: &Path, display_name: &str, settings: &Settings) -> EntryOutput {
    let id = escape_id(rel);

    let mut items = vec![
        XmlElement::new("File")
            .attr("Id", id.clone())
            .attr("Source", abs.to_string_lossy())
            .attr("Name", display_name),
    ];

    if rel == settings.executable() {
        if settings.start_menu_shortcut_enabled() {
            items.push(shortcut("StartMenuShortcut", "ProgramMenuFolder", settings));
        }
        if settings.desktop_shortcut_enabled() {
            items.push(shortcut("DesktopShortcut", "DesktopFolder", settings));
        }
        for protocol in settings.protocols() {
            for scheme in &protocol.schemes {
                items.push(protocol_registration(&protocol.name, scheme));
            }
        }
    }

    // The wildcard Guid tells the consuming toolchain to mint a fresh
    // component identity on every build.
    let element = XmlElement::new("Component")
        .attr("Id", id.clone())
        .attr("Guid", "*")
        .children(items);

    EntryOutput {
        element,
        ids: vec![id],
    }
}

fn shortcut(id: &str, directory: &str, settings: &Settings) -> XmlElement {
    XmlElement::new("Shortcut")
        .attr("Id", id)
        .attr("Advertise", "yes")
        .attr("Icon", "icon.ico")
        .attr("Name", settings.name())
        .attr("Directory", directory)
        .attr("WorkingDirectory", "INSTALLDIR")
        .attr("Description", settings.description())
}

fn protocol_registration(name: &str, scheme: &str) -> XmlElement {
    XmlElement::new("RegistryKey")
        .attr("Root", "HKCR")
        .attr("Key", scheme)
        .attr("Action", "createAndRemoveOnUninstall")
        .child(
            XmlElement::new("RegistryValue")
                .attr("Type", "string")
                .attr("Name", "URL Protocol")
                .attr("Value", ""),
        )
        .child(
            XmlElement::new("RegistryValue")
                .attr("Type", "string")
                .attr("Name", format!("URL:{name}"))
                .attr("Value", ""),
        )
}
