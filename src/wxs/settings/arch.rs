//! Target architecture for the generated descriptor.

/// CPU architecture of the packaged application.
///
/// Only affects which program-files folder the descriptor installs into:
/// [`Arch::X64`] selects the 64-bit folder, everything else the 32-bit one.
///
/// # Configuration
///
/// ```toml
/// arch = "x64"
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit)
    X64,
    /// x86 / i686 (32-bit)
    #[default]
    X86,
}
