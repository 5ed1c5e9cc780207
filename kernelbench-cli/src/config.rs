//! Configuration loading from kernelbench.toml
//!
//! The file is discovered by walking up from the current directory. Every
//! key is optional; command-line flags override whatever the file sets.

use kernelbench_core::{ParseError, Variant};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name searched for by [`KernelbenchConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "kernelbench.toml";

/// kernelbench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KernelbenchConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which implementations to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VariantSelection {
    /// Reference only
    Reference,
    /// Accelerated only
    Accelerated,
    /// Both, reference first (needed for speedups)
    #[default]
    Both,
}

impl VariantSelection {
    /// Selected variants in execution order
    pub fn variants(self) -> &'static [Variant] {
        match self {
            VariantSelection::Reference => &[Variant::Reference],
            VariantSelection::Accelerated => &[Variant::Accelerated],
            VariantSelection::Both => &Variant::ALL,
        }
    }
}

impl std::str::FromStr for VariantSelection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("both") {
            return Ok(VariantSelection::Both);
        }
        Ok(match s.parse::<Variant>()? {
            Variant::Reference => VariantSelection::Reference,
            Variant::Accelerated => VariantSelection::Accelerated,
        })
    }
}

/// Runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Timed runs per kernel/variant pair
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Untimed runs before measuring
    #[serde(default)]
    pub warmup_runs: usize,
    /// Variants to run
    #[serde(default)]
    pub variant: VariantSelection,
    /// Check that both variants produce identical results
    #[serde(default)]
    pub verify: bool,
    /// Core to pin the measuring thread to (Linux only)
    #[serde(default)]
    pub pin_cpu: Option<usize>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            warmup_runs: 0,
            variant: VariantSelection::default(),
            verify: false,
            pin_cpu: None,
        }
    }
}

fn default_samples() -> usize {
    1
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", "csv", "markdown"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl KernelbenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        let path = Self::find_in_ancestors(&dir)?;
        match Self::load(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                None
            }
        }
    }

    /// Nearest `kernelbench.toml` at or above `start`
    pub fn find_in_ancestors(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Write [`Self::default_toml`] to `dir/kernelbench.toml`
    ///
    /// Fails rather than overwrite an existing file.
    pub fn write_default(dir: &Path) -> anyhow::Result<PathBuf> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            anyhow::bail!("{} already exists", path.display());
        }
        std::fs::write(&path, Self::default_toml())?;
        Ok(path)
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# kernelbench configuration

[runner]
# Timed runs per kernel/variant pair
samples = 1
# Untimed runs before measuring
warmup_runs = 0
# Variants to run: reference, accelerated or both
variant = "both"
# Check that both variants produce identical results
verify = false
# Pin the measuring thread to a core (Linux only, uncomment to enable)
# pin_cpu = 0

[output]
# Default output format: human, json, csv, markdown
format = "human"
"#
        .to_string()
    }
}
