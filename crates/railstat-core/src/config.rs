use std::env;
use std::path::{Path, PathBuf};

use railstat_parser::{Delimiter, TimestampFormat};
use serde::Deserialize;
use tracing::debug;

use crate::error::{PipelineError, Result};

pub const CONFIG_PATH_ENV: &str = "RAILSTAT_CONFIG";
pub const BIND_ENV: &str = "RAILSTAT_BIND";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RailstatConfig {
    pub parser: ParserConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// `auto`, or one of `,` `;` `\t`.
    pub delimiter: String,
    pub date_format: String,
    pub time_format: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        let format = TimestampFormat::default();
        Self {
            delimiter: "auto".to_string(),
            date_format: format.date,
            time_format: format.time,
        }
    }
}

impl ParserConfig {
    /// `None` means the delimiter is detected from the header row.
    pub fn delimiter(&self) -> Result<Option<Delimiter>> {
        if self.delimiter.eq_ignore_ascii_case("auto") {
            return Ok(None);
        }
        Delimiter::try_from(self.delimiter.as_str())
            .map(Some)
            .map_err(PipelineError::Config)
    }

    pub fn timestamp_format(&self) -> TimestampFormat {
        TimestampFormat::new(self.date_format.clone(), self.time_format.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl RailstatConfig {
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: RailstatConfig = toml::from_str(toml_str)
            .map_err(|err| PipelineError::Config(format!("invalid config TOML: {err}")))?;
        config.parser.delimiter()?;
        Ok(config)
    }

    /// Reads the file at `path`, else the one named by `RAILSTAT_CONFIG`,
    /// else falls back to defaults. `RAILSTAT_BIND` overrides the bind address.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from));

        let mut config = match path {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration");
                let contents = std::fs::read_to_string(&path).map_err(|err| {
                    PipelineError::Config(format!("failed to read {}: {err}", path.display()))
                })?;
                Self::from_toml(&contents)?
            }
            None => Self::default(),
        };

        if let Ok(bind) = env::var(BIND_ENV) {
            config.server.bind = bind;
        }

        Ok(config)
    }
}
