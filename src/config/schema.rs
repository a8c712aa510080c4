use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/sonosify/config.toml` or `~/.config/sonosify/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags (`--filter`, `--no-progress`)
/// 2) Environment variables (prefix `SONOSIFY__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to process (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to descend into symlinked directories.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["m4a".into()],
            follow_links: false,
            include_hidden: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Show the live `[#:… L:… C:… E:…]` progress line.
    pub progress: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { progress: true }
    }
}
