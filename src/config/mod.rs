// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.


use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::data::basics::Mode;
use crate::errors;
use crate::sweep::{self, SweepParams};

/// Name of the config.json file where we store the analysis settings.
pub const CONFIG_FILENAME: &str = "config.json";

/// Name of the default configuration directory below the user's home.
const CONFIG_DIRNAME: &str = ".kpcommittee";

/// Current version of the config file layout.
pub const CONFIG_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("reading/writing configuration failed: {0}")]
    IoError(#[from] io::Error),
    #[error("JSON (de)serialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("could not expand path {0}")]
    PathExpansion(String),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] errors::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Settings of the committee attack analysis.
///
/// Every field is optional in the JSON file; missing fields keep their default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracks the layout version of the file this config was loaded from.
    pub version: u32,

    /// Number of nodes in the network.
    pub n_nodes: usize,
    /// Number of seats in the committee.
    pub n_seats: usize,
    /// Whether the adversary wants to stop or overtake the committee.
    pub mode: Mode,

    /// Zipf exponent of a single instance.
    pub zipfc: f64,
    // sweep over Zipf exponents
    pub zipfc_min: f64,
    pub zipfc_max: f64,
    pub zipfc_step: f64,

    /// Number of tiers of a single instance.
    pub k: usize,
    /// Largest number of tiers in a sweep over k.
    pub k_max: usize,
}

lazy_static! {
    pub static ref DEFAULT_CONFIG: Config = Config {
        version: CONFIG_VERSION,
        n_nodes: 100,
        n_seats: 20,
        mode: Mode::Stop,
        zipfc: 1.0,
        zipfc_min: 0.5,
        zipfc_max: 1.5,
        zipfc_step: 0.01,
        k: 1,
        k_max: 1,
    };
}

impl Default for Config {
    /// Copies the current DEFAULT_CONFIG.
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl Config {
    /// Loads the config file from the given directory.
    pub fn load_from_disk(dir: &impl AsRef<Path>) -> Result<Self> {
        Self::load_from_file(&dir.as_ref().join(CONFIG_FILENAME))
    }

    /// Loads a config file, filling missing fields with defaults.
    pub fn load_from_file(file: &impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(file)?;
        let c = Self::load(&content)?;
        debug!(path = %file.as_ref().display(), "loaded config");
        Ok(c)
    }

    /// Loads the config from `dir`, or returns the defaults if there is no config file.
    pub fn load_or_default(dir: &impl AsRef<Path>) -> Result<Self> {
        match Self::load_from_disk(dir) {
            Err(ConfigError::IoError(e)) if e.kind() == io::ErrorKind::NotFound => {
                warn!(dir = %dir.as_ref().display(), "no config file found, using defaults");
                Ok(Self::default())
            }
            res => res,
        }
    }

    fn load(content: &str) -> Result<Self> {
        let c: Self = serde_json::from_str(content)?;
        if c.version > CONFIG_VERSION {
            warn!(
                version = c.version,
                supported = CONFIG_VERSION,
                "config file is newer than this build"
            );
        }
        Ok(c)
    }

    /// Writes the config to `config.json` in the given directory.
    pub fn save_to_disk(&self, root: &impl AsRef<Path>) -> Result<()> {
        self.save_to_file(&root.as_ref().join(CONFIG_FILENAME))
    }

    /// Saves the config to a specific filename, allowing overriding the default name.
    pub fn save_to_file(&self, filename: &impl AsRef<Path>) -> Result<()> {
        let f = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(filename)?;
        serde_json::to_writer_pretty(f, self)?;
        Ok(())
    }

    /// Network and committee shape of the configured analysis.
    pub fn sweep_params(&self) -> Result<SweepParams> {
        let params = SweepParams {
            n_nodes: self.n_nodes,
            n_seats: self.n_seats,
            mode: self.mode,
        };
        params.validate()?;
        Ok(params)
    }

    /// The configured range of Zipf exponents.
    pub fn zipf_exponents(&self) -> Result<Vec<f64>> {
        Ok(sweep::zipf_range(
            self.zipfc_min,
            self.zipfc_max,
            self.zipfc_step,
        )?)
    }
}

/// Expands `~` and environment variables in a user supplied path.
pub fn expand_path(path: &str) -> Result<PathBuf> {
    shellexpand::full(path)
        .map(|p| PathBuf::from(p.into_owned()))
        .map_err(|e| ConfigError::PathExpansion(e.to_string()))
}

/// Retrieves the default directory for config files.
/// By default we store these in ~/.kpcommittee/.
pub fn get_default_config_dir() -> io::Result<PathBuf> {
    match dirs::home_dir() {
        Some(home_dir) => Ok(home_dir.join(CONFIG_DIRNAME)),
        None => Err(io::Error::new(
            io::ErrorKind::NotFound,
            "current user has no home directory",
        )),
    }
}
