use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where to look for frames when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://frinkiac.com";

/// Configuration options of Frinkiac.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrinkiacOptions {
    /// Root of the service, used both for searching and for images.
    pub base_url: String,
    /// Request timeout in seconds. Wait forever if not set.
    pub timeout: Option<u64>,
}

impl Default for FrinkiacOptions {
    fn default() -> Self {
        FrinkiacOptions {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl FrinkiacOptions {
    /// Parse options from contents of a TOML file.
    pub fn from_toml(s: &str) -> Result<FrinkiacOptions, toml::de::Error> {
        toml::from_str(s)
    }

    /// Read options from `path`. Missing file means default options, unless
    /// `required` is set.
    pub fn load(path: &Path, required: bool) -> Result<FrinkiacOptions, String> {
        match std::fs::read_to_string(path) {
            Ok(s) => Self::from_toml(&s).map_err(|e| format!("{}: {e}", path.display())),
            Err(e) if required => Err(format!("{}: {e}", path.display())),
            Err(_) => Ok(Default::default()),
        }
    }

    /// Base URL without trailing slashes so paths can be appended to it.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
