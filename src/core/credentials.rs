

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::error::{KeywordError, Result};


#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub serpapi: String,
}

impl Credentials {
    pub fn is_configured(&self) -> bool {
        !self.serpapi.trim().is_empty()
    }
}


#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is not an error: it yields empty credentials.
    pub fn load(&self) -> Result<Credentials> {
        if !self.path.exists() {
            debug!("No credential file at {}", self.path.display());
            return Ok(Credentials::default());
        }

        let raw = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw).map_err(|e| {
            KeywordError::Credentials(format!("{} is not valid JSON: {e}", self.path.display()))
        })
    }

    pub fn save(&self, credentials: &Credentials) -> Result<()> {
        let body = serde_json::to_string(credentials)?;
        std::fs::write(&self.path, body)?;
        info!("API key saved to {}", self.path.display());
        Ok(())
    }
}
