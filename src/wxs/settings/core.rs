//! Core Settings struct and implementations.

use super::Arch;
use std::path::{Path, PathBuf};

/// URL-protocol registration for the designated executable.
///
/// Each scheme is registered as a custom URL protocol handled by the
/// application and removed again on uninstall.
///
/// # Configuration
///
/// ```toml
/// [[protocols]]
/// name = "myapp"
/// schemes = ["myapp", "myapp2"]
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize)]
pub struct Protocol {
    /// Display name used in the registry value (`URL:<name>`).
    pub name: String,

    /// URI schemes to register (registry keys under HKCR).
    pub schemes: Vec<String>,
}

/// Immutable configuration for one descriptor generation.
///
/// Constructed via [`SettingsBuilder`] or deserialized from a TOML/JSON
/// configuration file. Read-only for the duration of one generation call.
///
/// # Examples
///
/// ```no_run
/// use wixgen::SettingsBuilder;
///
/// # fn example() -> wixgen::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source("build/app")
///     .name("MyApp")
///     .version("1.0.0")
///     .manufacturer("Example Inc.")
///     .upgrade_code("12345678-1234-1234-1234-123456789012")
///     .icon_path("assets/app.ico")
///     .executable("myapp.exe")
///     .build()?;
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`SettingsBuilder`] - Builder for constructing Settings
/// - [`Protocol`] - URL-protocol registration
///
/// [`SettingsBuilder`]: super::SettingsBuilder
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Root of the directory tree to scan.
    source: PathBuf,

    /// Product display name, also used as the install directory name.
    name: String,

    /// Product version string.
    version: String,

    /// Manufacturer shown in product metadata.
    manufacturer: String,

    /// GUID-like upgrade-detection key.
    upgrade_code: String,

    /// Icon source file registered in the descriptor.
    icon_path: PathBuf,

    /// Relative path of the file receiving shortcuts and protocol
    /// registrations.
    executable: PathBuf,

    /// Target architecture (program-files folder selection).
    #[serde(default)]
    arch: Arch,

    /// Per-user install scope instead of per-machine.
    #[serde(default)]
    local_install: bool,

    // The shortcut toggles are tri-state: an absent value enables the
    // shortcut, only an explicit `false` disables it.
    /// Master toggle for both shortcut kinds.
    #[serde(default)]
    shortcuts: Option<bool>,

    /// Start-menu shortcut toggle.
    #[serde(default)]
    start_menu_shortcut: Option<bool>,

    /// Desktop shortcut toggle.
    #[serde(default)]
    desktop_shortcut: Option<bool>,

    /// URL-protocol registrations attached to the executable's component.
    #[serde(default)]
    protocols: Vec<Protocol>,

    /// Shortcut description text.
    #[serde(default)]
    description: String,
}

impl Settings {
    /// Returns the root of the tree to scan.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Returns the product display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the product version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the manufacturer.
    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    /// Returns the upgrade-detection GUID.
    pub fn upgrade_code(&self) -> &str {
        &self.upgrade_code
    }

    /// Returns the icon source path.
    pub fn icon_path(&self) -> &Path {
        &self.icon_path
    }

    /// Returns the relative path of the designated executable.
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Returns the target architecture.
    pub fn arch(&self) -> Arch {
        self.arch
    }

    /// Returns true for a per-user install, false for per-machine.
    pub fn local_install(&self) -> bool {
        self.local_install
    }

    /// Returns the configured protocol registrations.
    pub fn protocols(&self) -> &[Protocol] {
        &self.protocols
    }

    /// Returns the shortcut description text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the start-menu shortcut should be attached.
    ///
    /// Enabled unless the master toggle or the per-kind toggle is an
    /// explicit `false`.
    pub fn start_menu_shortcut_enabled(&self) -> bool {
        self.shortcuts != Some(false) && self.start_menu_shortcut != Some(false)
    }

    /// Whether the desktop shortcut should be attached.
    pub fn desktop_shortcut_enabled(&self) -> bool {
        self.shortcuts != Some(false) && self.desktop_shortcut != Some(false)
    }

    /// Returns these settings with the source directory replaced.
    ///
    /// Used by the CLI `--source` override.
    pub fn with_source(mut self, source: PathBuf) -> Self {
        self.source = source;
        self
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        source: PathBuf,
        name: String,
        version: String,
        manufacturer: String,
        upgrade_code: String,
        icon_path: PathBuf,
        executable: PathBuf,
        arch: Arch,
        local_install: bool,
        shortcuts: Option<bool>,
        start_menu_shortcut: Option<bool>,
        desktop_shortcut: Option<bool>,
        protocols: Vec<Protocol>,
        description: String,
    ) -> Self {
        Self {
            source,
            name,
            version,
            manufacturer,
            upgrade_code,
            icon_path,
            executable,
            arch,
            local_install,
            shortcuts,
            start_menu_shortcut,
            desktop_shortcut,
            protocols,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::SettingsBuilder;

    fn base() -> SettingsBuilder {
        SettingsBuilder::new()
            .source("app")
            .name("Test App")
            .version("1.0.0")
            .manufacturer("Acme")
            .upgrade_code("aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee")
            .icon_path("app.ico")
            .executable("app.exe")
    }

    #[test]
    fn shortcuts_default_to_enabled() {
        let settings = base().build().unwrap();
        assert!(settings.start_menu_shortcut_enabled());
        assert!(settings.desktop_shortcut_enabled());
    }

    #[test]
    fn explicit_true_keeps_shortcuts_enabled() {
        let settings = base().shortcuts(true).build().unwrap();
        assert!(settings.start_menu_shortcut_enabled());
        assert!(settings.desktop_shortcut_enabled());
    }

    #[test]
    fn master_toggle_disables_both_kinds() {
        let settings = base()
            .shortcuts(false)
            .start_menu_shortcut(true)
            .build()
            .unwrap();
        assert!(!settings.start_menu_shortcut_enabled());
        assert!(!settings.desktop_shortcut_enabled());
    }

    #[test]
    fn per_kind_toggle_disables_one_kind() {
        let settings = base().start_menu_shortcut(false).build().unwrap();
        assert!(!settings.start_menu_shortcut_enabled());
        assert!(settings.desktop_shortcut_enabled());
    }
}
