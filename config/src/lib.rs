//! Environment-driven configuration.
//!
//! Each section is read from variables named `DIVTEST_<SECTION>_<KEY>`,
//! optionally seeded from a `.divtest.env` file in the working directory.
//! Variables already set in the environment win over the file.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

mod error;

pub mod run;

pub use error::Error;
pub use run::{RunConfig, SinkKind};

const CONFIG_ENV_PREFIX: &str = "DIVTEST";
const CONFIG_ENV_FILE: &str = ".divtest.env";

pub trait Config: DeserializeOwned {
    const PREFIX: &'static str;

    fn from_env() -> Result<Self, Error> {
        load_env_file(&config_env_path())?;
        Self::from_env_vars()
    }

    /// Like [`Config::from_env`], without consulting the env file.
    fn from_env_vars() -> Result<Self, Error> {
        let prefix = format!("{}_{}", CONFIG_ENV_PREFIX, Self::PREFIX);

        Ok(config::Config::builder()
            .add_source(
                config::Environment::with_prefix(&prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?)
    }
}

/// Loads `path` into the process environment. A missing file is fine.
pub fn load_env_file(path: &Path) -> Result<(), Error> {
    match dotenvy::from_path(path) {
        Err(e) if e.not_found() => Ok(()),
        result => result.map(|_| ()).map_err(Error::from),
    }
}

#[doc(hidden)]
pub fn config_env_path() -> PathBuf {
    Path::new(CONFIG_ENV_FILE).to_path_buf()
}
