//! Build identity and storage configuration
//!
//! The build identifier decides whether stored data belongs to the current
//! deployment; the storage keys name the four LocalStorage slots.

use serde::{Deserialize, Serialize};

/// Schema version of the persisted document. Bump when the shape of
/// [`crate::model::Document`] changes incompatibly.
pub const DATA_VERSION: &str = "1.0.4";

/// Viewport width (CSS pixels) below which the sidebar counts as narrow
pub const NARROW_BREAKPOINT: f64 = 1024.0;

/// Names of the four LocalStorage slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub sections: String,
    pub sidebar: String,
    pub version: String,
    pub build: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            sections: "trialShowcaseSections".to_string(),
            sidebar: "sidebarCollapsed".to_string(),
            version: "trialShowcaseVersion".to_string(),
            build: "trialShowcaseBuildId".to_string(),
        }
    }
}

impl StorageKeys {
    /// Every slot, in the order they are cleared
    pub fn all(&self) -> [&str; 4] {
        [&self.sections, &self.sidebar, &self.version, &self.build]
    }
}

/// Runtime configuration for a showcase session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub keys: StorageKeys,
    /// Sidebar auto-collapses below this width
    pub narrow_breakpoint: f64,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            narrow_breakpoint: NARROW_BREAKPOINT,
        }
    }
}

impl ShowcaseConfig {
    /// Parse a JSON config blob, falling back to defaults when it is malformed
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring malformed showcase config: {}", e);
                Self::default()
            }
        }
    }
}

/// Identity of the running build, compared against the stored markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub build_id: String,
    pub data_version: String,
}

impl BuildInfo {
    /// Pick the build id: commit sha, then explicit override, then the
    /// session start timestamp.
    pub fn resolve(commit_sha: Option<&str>, build_override: Option<&str>, fallback_ms: f64) -> Self {
        let build_id = [commit_sha, build_override]
            .into_iter()
            .flatten()
            .find(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}", fallback_ms.trunc() as u64));

        Self {
            build_id,
            data_version: DATA_VERSION.to_string(),
        }
    }

    /// Resolve from the values baked in at compile time
    pub fn current(session_start_ms: f64) -> Self {
        Self::resolve(
            option_env!("VERCEL_GIT_COMMIT_SHA"),
            option_env!("SHOWCASE_BUILD_ID"),
            session_start_ms,
        )
    }

    /// Explicit identity, mostly for tests and the native walkthrough
    pub fn fixed(build_id: &str, data_version: &str) -> Self {
        Self {
            build_id: build_id.to_string(),
            data_version: data_version.to_string(),
        }
    }
}
