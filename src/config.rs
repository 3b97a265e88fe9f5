use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use spectrum_data::LoadOptions;
use spectrum_data::table::DEFAULT_SAMPLE_BYTES;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings read from an optional TOML file. Command-line flags override
/// these after loading.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Color matching table to use instead of the bundled CIE 1931 data.
    pub cmf_path: Option<PathBuf>,
    pub sample_bytes: usize,
    pub skip_header: bool,
    /// Exit non-zero when the conversion itself fails.
    pub strict: bool,
    pub format: OutputFormat,
    pub locus: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cmf_path: None,
            sample_bytes: DEFAULT_SAMPLE_BYTES,
            skip_header: false,
            strict: false,
            format: OutputFormat::Text,
            locus: false,
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(text).context("parsing configuration")?;
        anyhow::ensure!(config.sample_bytes > 0, "sample_bytes must be positive");
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            sample_bytes: self.sample_bytes,
            skip_header: self.skip_header,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.load_options(), LoadOptions::default());
    }

    #[test]
    fn parses_all_fields() {
        let config = Config::from_toml(
            r#"
cmf_path = "cmf/cie_1964.csv"
sample_bytes = 4096
skip_header = true
strict = true
format = "json"
locus = true
"#,
        )
        .unwrap();
        assert_eq!(config.cmf_path, Some(PathBuf::from("cmf/cie_1964.csv")));
        assert_eq!(config.sample_bytes, 4096);
        assert!(config.skip_header);
        assert!(config.strict);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.locus);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_toml("smaple_bytes = 10").is_err());
    }

    #[test]
    fn zero_sample_is_rejected() {
        assert!(Config::from_toml("sample_bytes = 0").is_err());
    }
}
