use std::path::Path;

use serde::{Deserialize, Serialize};
use tagprobe_matching::Cuts;
use thiserror::Error;

use crate::{InputTag, InputTagError};

/// Errors detected while configuring a producer.
///
/// Every variant is fatal: a producer that fails to configure never
/// processes an event.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    #[error("malformed parameter `{name}`: {source}")]
    MalformedParameter {
        name: &'static str,
        #[source]
        source: InputTagError,
    },

    #[error("producer label must not be empty")]
    EmptyLabel,

    #[error("invalid cuts: {0}")]
    InvalidCuts(#[from] tagprobe_matching::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// The parameter set of a tag-probe producer.
///
/// Keys match the parameter names used in job configurations. The two
/// collection names are required; every cut is optional and falls back to
/// the [`Cuts`] defaults.
///
/// # Example
///
/// ```
/// use tagprobe_producer::ProducerConfig;
///
/// let config = ProducerConfig::from_toml_str(r#"
///     TagCollection = "tagMuons"
///     ProbeCollection = "probeTracks"
///     MassMinCut = 60.0
/// "#).unwrap();
///
/// assert_eq!(config.mass_min_cut, 60.0);
/// assert_eq!(config.mass_max_cut, 120.0);
/// assert!(config.require_os);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProducerConfig {
    #[serde(
        rename = "TagCollection",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub tag_collection: Option<String>,

    #[serde(
        rename = "ProbeCollection",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub probe_collection: Option<String>,

    #[serde(rename = "MassMinCut", default = "default_mass_min")]
    pub mass_min_cut: f64,

    #[serde(rename = "MassMaxCut", default = "default_mass_max")]
    pub mass_max_cut: f64,

    #[serde(rename = "DelRMinCut", default = "default_delta_r_min")]
    pub del_r_min_cut: f64,

    #[serde(rename = "DelRMaxCut", default = "default_delta_r_max")]
    pub del_r_max_cut: f64,

    #[serde(rename = "RequireOS", default = "default_require_os")]
    pub require_os: bool,
}

fn default_mass_min() -> f64 {
    Cuts::DEFAULT_MASS_MIN
}

fn default_mass_max() -> f64 {
    Cuts::DEFAULT_MASS_MAX
}

fn default_delta_r_min() -> f64 {
    Cuts::DEFAULT_DELTA_R_MIN
}

fn default_delta_r_max() -> f64 {
    Cuts::DEFAULT_DELTA_R_MAX
}

fn default_require_os() -> bool {
    true
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            tag_collection: None,
            probe_collection: None,
            mass_min_cut: default_mass_min(),
            mass_max_cut: default_mass_max(),
            del_r_min_cut: default_delta_r_min(),
            del_r_max_cut: default_delta_r_max(),
            require_os: default_require_os(),
        }
    }
}

impl ProducerConfig {
    /// Creates a config with the given collections and default cuts.
    pub fn new(tag_collection: impl Into<String>, probe_collection: impl Into<String>) -> Self {
        Self {
            tag_collection: Some(tag_collection.into()),
            probe_collection: Some(probe_collection.into()),
            ..Self::default()
        }
    }

    /// Loads a config file, choosing the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// extension is not one of `toml`, `yaml`, `yml`, or `json`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        match extension {
            "toml" => Self::from_toml_file(path),
            "yaml" | "yml" => Self::from_yaml_file(path),
            "json" => {
                let contents = std::fs::read_to_string(path)?;
                Self::from_json_str(&contents)
            }
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Loads a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid TOML for this config.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a config from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid YAML.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses a config from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid YAML for this config.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Parses a config from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid JSON for this config.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Returns the parsed tag collection name.
    ///
    /// # Errors
    ///
    /// Returns an error if `TagCollection` is missing or malformed.
    pub fn tag_input(&self) -> Result<InputTag, ConfigError> {
        required_tag("TagCollection", self.tag_collection.as_deref())
    }

    /// Returns the parsed probe collection name.
    ///
    /// # Errors
    ///
    /// Returns an error if `ProbeCollection` is missing or malformed.
    pub fn probe_input(&self) -> Result<InputTag, ConfigError> {
        required_tag("ProbeCollection", self.probe_collection.as_deref())
    }

    /// Returns the validated matching cuts.
    ///
    /// # Errors
    ///
    /// Returns an error if either window has a NaN bound or is inverted.
    pub fn cuts(&self) -> Result<Cuts, ConfigError> {
        Ok(Cuts::new(
            self.mass_min_cut,
            self.mass_max_cut,
            self.del_r_min_cut,
            self.del_r_max_cut,
            self.require_os,
        )?)
    }
}

fn required_tag(name: &'static str, value: Option<&str>) -> Result<InputTag, ConfigError> {
    let value = value.ok_or(ConfigError::MissingParameter(name))?;
    value
        .parse()
        .map_err(|source| ConfigError::MalformedParameter { name, source })
}
