/// Viewer configuration.
///
/// Reads `config.toml` from the executable's directory (or CWD, or the
/// usual data dirs) for defaults; command-line flags override whatever the
/// file says. Missing file or missing keys gracefully fall back to
/// defaults.

use clap::ValueEnum;
use serde::Deserialize;
use std::path::PathBuf;

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct ViewerConfig {
    /// Scroll step, in map cells.
    pub step: usize,
    /// Window size in map cells; None means derive from the terminal.
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub border: bool,
    pub colors: ColorMode,
}

/// Palette preference: probe the terminal, or force a variant.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Rich,
    Basic,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    view: TomlView,
}

#[derive(Deserialize, Debug)]
struct TomlView {
    #[serde(default = "default_step")]
    step: usize,
    #[serde(default)]
    width: Option<usize>,
    #[serde(default)]
    height: Option<usize>,
    #[serde(default = "default_border")]
    border: bool,
    #[serde(default)]
    colors: ColorMode,
}

// ── Defaults ──

fn default_step() -> usize { 3 }
fn default_border() -> bool { true }

impl Default for TomlView {
    fn default() -> Self {
        TomlView {
            step: default_step(),
            width: None,
            height: None,
            border: default_border(),
            colors: ColorMode::default(),
        }
    }
}

// ── Loading ──

impl ViewerConfig {
    /// Base config from `config.toml`, defaults where the file is silent.
    /// Search order: (1) exe directory, (2) current working directory,
    /// (3) data dirs.
    pub fn load() -> Self {
        let toml_cfg = load_toml(&candidate_dirs());

        ViewerConfig {
            step: toml_cfg.view.step,
            width: toml_cfg.view.width,
            height: toml_cfg.view.height,
            border: toml_cfg.view.border,
            colors: toml_cfg.view.colors,
        }
    }
}

/// Candidate directories to search: exe dir + CWD + system paths (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    // 1. Directory of the running executable
    if let Ok(exe) = std::env::current_exe() {
        // Resolve symlinks so a linked binary still finds its config.
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    // 2. Current working directory
    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    // 3. XDG data home (~/.local/share/twview)
    if let Ok(home) = std::env::var("HOME") {
        let xdg = PathBuf::from(&home).join(".local/share/twview");
        if xdg.is_dir() && !dirs.iter().any(|d| d == &xdg) {
            dirs.push(xdg);
        }
    }

    // 4. System data directory (/usr/share/twview)
    let sys = PathBuf::from("/usr/share/twview");
    if sys.is_dir() && !dirs.iter().any(|d| d == &sys) {
        dirs.push(sys);
    }

    // 5. Fallback
    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

/// Search for config.toml in candidate directories.
fn load_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(text) => match toml::from_str::<TomlConfig>(&text) {
                    Ok(cfg) => return cfg,
                    Err(e) => {
                        eprintln!("Warning: config.toml parse error: {e}");
                        eprintln!("Using default settings.");
                        return TomlConfig::default();
                    }
                },
                Err(e) => {
                    eprintln!("Warning: could not read {}: {e}", path.display());
                }
            }
        }
    }
    TomlConfig::default()
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: TomlConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.view.step, 3);
        assert_eq!(cfg.view.width, None);
        assert_eq!(cfg.view.height, None);
        assert!(cfg.view.border);
        assert_eq!(cfg.view.colors, ColorMode::Auto);
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let cfg: TomlConfig = toml::from_str(
            "[view]\nstep = 5\ncolors = \"basic\"\n",
        )
        .unwrap();
        assert_eq!(cfg.view.step, 5);
        assert_eq!(cfg.view.colors, ColorMode::Basic);
        assert!(cfg.view.border);
        assert_eq!(cfg.view.width, None);
    }

    #[test]
    fn explicit_window_size_parses() {
        let cfg: TomlConfig = toml::from_str(
            "[view]\nwidth = 40\nheight = 20\nborder = false\n",
        )
        .unwrap();
        assert_eq!(cfg.view.width, Some(40));
        assert_eq!(cfg.view.height, Some(20));
        assert!(!cfg.view.border);
    }
}
