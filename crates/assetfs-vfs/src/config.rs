use serde::{Deserialize, Serialize};

use crate::error::{FsError, FsResult};

/// Configuration for an [`AssetFs`](crate::AssetFs).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FsConfig {
    /// Trusted root joined in front of every requested path.
    ///
    /// Lets one asset set serve several mounts, e.g. `root = "public"` so
    /// that `/index.html` opens `public/index.html`.
    pub root: String,
    /// Cache a directory handle's child list on its first `readdir` instead
    /// of asking the registry on every call.
    pub cache_dir_listing: bool,
}

impl FsConfig {
    /// Parse from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> FsResult<Self> {
        toml::from_str(s).map_err(|e| FsError::Config(e.to_string()))
    }

    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_cache_dir_listing(mut self, enabled: bool) -> Self {
        self.cache_dir_listing = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = FsConfig::default();
        assert_eq!(c.root, "");
        assert!(!c.cache_dir_listing);
    }

    #[test]
    fn parse_toml() {
        let c = FsConfig::from_toml_str(
            r#"
            root = "public"
            cache_dir_listing = true
            "#,
        )
        .unwrap();
        assert_eq!(c, FsConfig::default().with_root("public").with_cache_dir_listing(true));
    }

    #[test]
    fn parse_partial_toml() {
        let c = FsConfig::from_toml_str("root = \"static\"").unwrap();
        assert_eq!(c.root, "static");
        assert!(!c.cache_dir_listing);
        assert_eq!(FsConfig::from_toml_str("").unwrap(), FsConfig::default());
    }

    #[test]
    fn reject_bad_toml() {
        let err = FsConfig::from_toml_str("cache_dir_listing = \"yes\"").unwrap_err();
        assert!(matches!(err, FsError::Config(_)));
    }
}
