use std::{env, path::PathBuf};

/// Runtime settings of the binaries, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Seed for maze generation, `None` draws one from the OS
    pub seed: Option<u64>,
    /// Directory of the log file
    pub log_dir: PathBuf,
    pub log_file: String,
    /// `EnvFilter` directives, e.g. `mazewalk=debug`
    pub log_filter: String,
    /// Settings that could not be parsed and fell back to their default
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_dir: PathBuf::from("."),
            log_file: String::from("mazewalk.log"),
            log_filter: String::from("info"),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    pub const SEED_VAR: &'static str = "MAZEWALK_SEED";
    pub const LOG_DIR_VAR: &'static str = "MAZEWALK_LOG_DIR";
    pub const LOG_FILE_VAR: &'static str = "MAZEWALK_LOG_FILE";
    pub const LOG_FILTER_VAR: &'static str = "RUST_LOG";

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();
        if let Some(raw) = lookup(Self::SEED_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => config.warnings.push(format!(
                    "{}={raw:?} is not a u64 seed, using a random one",
                    Self::SEED_VAR
                )),
            }
        }
        if let Some(dir) = lookup(Self::LOG_DIR_VAR) {
            config.log_dir = PathBuf::from(dir);
        }
        if let Some(file) = lookup(Self::LOG_FILE_VAR) {
            config.log_file = file;
        }
        if let Some(filter) = lookup(Self::LOG_FILTER_VAR) {
            config.log_filter = filter;
        }
        config
    }
}
