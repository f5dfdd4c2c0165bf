//! Builder for constructing Settings.

use super::{Arch, Protocol, Settings};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Provides a fluent API for building generator settings with validation.
///
/// # Examples
///
/// ```no_run
/// use wixgen::{SettingsBuilder, Protocol, Arch};
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
///     .arch(Arch::X64)
///     .protocols(vec![Protocol {
///         name: "myapp".into(),
///         schemes: vec!["myapp".into()],
///     }])
///     .build()?;
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`Settings`] - The built settings struct
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    source: Option<PathBuf>,
    name: Option<String>,
    version: Option<String>,
    manufacturer: Option<String>,
    upgrade_code: Option<String>,
    icon_path: Option<PathBuf>,
    executable: Option<PathBuf>,
    arch: Arch,
    local_install: bool,
    shortcuts: Option<bool>,
    start_menu_shortcut: Option<bool>,
    desktop_shortcut: Option<bool>,
    protocols: Vec<Protocol>,
    description: String,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the root directory to scan.
    ///
    /// # Required
    pub fn source<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the product display name.
    ///
    /// # Required
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the product version string.
    ///
    /// # Required
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the manufacturer.
    ///
    /// # Required
    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    /// Sets the upgrade-detection GUID.
    ///
    /// # Required
    pub fn upgrade_code(mut self, code: impl Into<String>) -> Self {
        self.upgrade_code = Some(code.into());
        self
    }

    /// Sets the icon source path.
    ///
    /// # Required
    pub fn icon_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.icon_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the relative path of the executable receiving shortcuts and
    /// protocol registrations.
    ///
    /// # Required
    pub fn executable<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.executable = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the target architecture.
    ///
    /// Default: [`Arch::X86`]
    pub fn arch(mut self, arch: Arch) -> Self {
        self.arch = arch;
        self
    }

    /// Selects per-user install scope.
    ///
    /// Default: false (per-machine)
    pub fn local_install(mut self, local: bool) -> Self {
        self.local_install = local;
        self
    }

    /// Sets the master shortcut toggle.
    ///
    /// Default: unset (both shortcut kinds enabled)
    pub fn shortcuts(mut self, enabled: bool) -> Self {
        self.shortcuts = Some(enabled);
        self
    }

    /// Sets the start-menu shortcut toggle.
    ///
    /// Default: unset (enabled)
    pub fn start_menu_shortcut(mut self, enabled: bool) -> Self {
        self.start_menu_shortcut = Some(enabled);
        self
    }

    /// Sets the desktop shortcut toggle.
    ///
    /// Default: unset (enabled)
    pub fn desktop_shortcut(mut self, enabled: bool) -> Self {
        self.desktop_shortcut = Some(enabled);
        self
    }

    /// Sets URL-protocol registrations.
    ///
    /// Default: Empty
    pub fn protocols(mut self, protocols: Vec<Protocol>) -> Self {
        self.protocols = protocols;
        self
    }

    /// Sets the shortcut description text.
    ///
    /// Default: Empty
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if a required field is missing.
    pub fn build(self) -> Result<Settings> {
        fn required<T>(value: Option<T>, field: &str) -> Result<T> {
            value.ok_or_else(|| Error::InvalidConfig(format!("{field} is required")))
        }

        Ok(Settings::new(
            required(self.source, "source")?,
            required(self.name, "name")?,
            required(self.version, "version")?,
            required(self.manufacturer, "manufacturer")?,
            required(self.upgrade_code, "upgradeCode")?,
            required(self.icon_path, "iconPath")?,
            required(self.executable, "executable")?,
            self.arch,
            self.local_install,
            self.shortcuts,
            self.start_menu_shortcut,
            self.desktop_shortcut,
            self.protocols,
            self.description,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_field_is_rejected() {
        let result = SettingsBuilder::new().source("app").build();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
