use crate::codec::Delimiter;
use crate::error::{InvError, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

const SETTINGS_FILENAME: &str = "settings.cfg";

pub const DELIMITER_KEY: &str = "delimiter";

/// Settings for invtrack, stored one value per line in `settings.cfg`.
///
/// Line 1 holds the delimiter used for exports and, by default, imports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvConfig {
    pub delimiter: Delimiter,
}

impl InvConfig {
    /// Load settings from the given directory, creating the file with
    /// defaults if it does not exist yet.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();
        let config_path = config_dir.join(SETTINGS_FILENAME);

        if !config_path.exists() {
            let config = Self::default();
            config.save(config_dir)?;
            info!(path = %config_path.display(), "created settings file with defaults");
            return Ok(config);
        }

        let content = fs::read_to_string(&config_path).map_err(InvError::Io)?;
        Ok(Self::parse(&content))
    }

    /// Save settings to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(InvError::Io)?;
        }

        let config_path = config_dir.join(SETTINGS_FILENAME);
        fs::write(config_path, format!("{}\n", self.delimiter)).map_err(InvError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            DELIMITER_KEY => Some(self.delimiter.to_string()),
            _ => None,
        }
    }

    /// Set a key from its textual form. On error the value is left untouched.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            DELIMITER_KEY => {
                self.delimiter = value.parse()?;
                Ok(())
            }
            _ => Err(InvError::Api(format!("Unknown config key: {}", key))),
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &[DELIMITER_KEY]
    }

    fn parse(content: &str) -> Self {
        let first = content.lines().next().and_then(|line| line.chars().next());

        match first.map(Delimiter::new) {
            Some(Ok(delimiter)) => Self { delimiter },
            Some(Err(e)) => {
                warn!(error = %e, "ignoring stored delimiter, using default");
                Self::default()
            }
            None => {
                warn!("settings file is empty, using default delimiter");
                Self::default()
            }
        }
    }
}
