//! Descriptor document assembly.
//!
//! Pure, total construction of the fixed `Wix`/`Product` skeleton around the
//! walker's output. No I/O and no failure path; inputs are assumed valid.

use super::element::XmlElement;
use super::settings::{Arch, Settings};

/// Assembles the complete descriptor document.
///
/// `components` is the walker's root-level element sequence and
/// `component_ids` its flat identifier list; the top-level `Feature`
/// references each identifier exactly once, in list order.
pub fn installer_document(
    components: Vec<XmlElement>,
    component_ids: &[String],
    settings: &Settings,
) -> XmlElement {
    XmlElement::new("Wix")
        .attr("xmlns", "http://schemas.microsoft.com/wix/2006/wi")
        .child(product(components, component_ids, settings))
}

/// Selects the programs folder the application directory nests under.
///
/// Per-user installs always use the local application-data folder; otherwise
/// the architecture picks the 64-bit or 32-bit program-files folder.
pub fn programs_folder(settings: &Settings) -> &'static str {
    if settings.local_install() {
        "LocalAppDataFolder"
    } else if settings.arch() == Arch::X64 {
        "ProgramFiles64Folder"
    } else {
        "ProgramFilesFolder"
    }
}

fn product(
    components: Vec<XmlElement>,
    component_ids: &[String],
    settings: &Settings,
) -> XmlElement {
    let install_scope = if settings.local_install() {
        "perUser"
    } else {
        "perMachine"
    };

    let elements = vec![
        XmlElement::new("Property").attr("Id", "PREVIOUSVERSIONSINSTALLED"),
        XmlElement::new("Upgrade")
            .attr("Id", settings.upgrade_code())
            .child(
                // Open-ended range: any previously installed version below
                // the current one is detected and removed.
                XmlElement::new("UpgradeVersion")
                    .attr("Minimum", "0.0.0")
                    .attr("Property", "PREVIOUSVERSIONSINSTALLED")
                    .attr("IncludeMinimum", "yes")
                    .attr("IncludeMaximum", "no"),
            ),
        XmlElement::new("InstallExecuteSequence").child(
            XmlElement::new("RemoveExistingProducts").attr("Before", "InstallInitialize"),
        ),
        XmlElement::new("Package")
            .attr("InstallerVersion", "200")
            .attr("Compressed", "yes")
            .attr("Comments", "Windows Installer Package")
            .attr("InstallScope", install_scope),
        XmlElement::new("Media")
            .attr("Id", "1")
            .attr("Cabinet", "app.cab")
            .attr("EmbedCab", "yes"),
        XmlElement::new("Icon")
            .attr("Id", "icon.ico")
            .attr("SourceFile", settings.icon_path().to_string_lossy()),
        XmlElement::new("Property")
            .attr("Id", "ARPPRODUCTICON")
            .attr("Value", "icon.ico"),
        XmlElement::new("Directory")
            .attr("Id", "TARGETDIR")
            .attr("Name", "SourceDir")
            .child(
                XmlElement::new("Directory")
                    .attr("Id", programs_folder(settings))
                    .child(
                        XmlElement::new("Directory")
                            .attr("Id", "INSTALLDIR")
                            .attr("Name", settings.name())
                            .children(components),
                    ),
            ),
        XmlElement::new("Feature")
            .attr("Id", "App")
            .attr("Level", "1")
            .children(
                component_ids
                    .iter()
                    .map(|id| XmlElement::new("ComponentRef").attr("Id", id.as_str())),
            ),
    ];

    XmlElement::new("Product")
        .attr("Id", "*")
        .attr("Name", settings.name())
        .attr("UpgradeCode", settings.upgrade_code())
        .attr("Language", "1033")
        .attr("Codepage", "1252")
        .attr("Version", settings.version())
        .attr("Manufacturer", settings.manufacturer())
        .children(elements)
}
