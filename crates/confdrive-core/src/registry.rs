//! Explicit registry of configuration drivers
//!
//! Drivers are registered once at startup under their tag. Lookups go either
//! by tag or by the extension of the file being loaded or saved.

use crate::{ConfigData, ConfigError, ConfigurationDriver, Result};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace};

/// Mapping from format tag to driver instance
#[derive(Debug, Default, Clone)]
pub struct DriverRegistry {
    drivers: BTreeMap<&'static str, Arc<dyn ConfigurationDriver>>,
    // lowercase extension -> tag; first registration wins
    extensions: HashMap<String, &'static str>,
}

impl DriverRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `driver` under its tag.
    ///
    /// Fails with [`ConfigError::DuplicateDriver`] if the tag is taken. An
    /// extension already claimed by an earlier driver keeps routing there.
    pub fn register(&mut self, driver: Arc<dyn ConfigurationDriver>) -> Result<()> {
        let tag = driver.tag();
        if self.drivers.contains_key(tag) {
            return Err(ConfigError::DuplicateDriver {
                tag: tag.to_string(),
            });
        }

        for ext in driver.extensions() {
            let ext = ext.to_ascii_lowercase();
            if let Some(owner) = self.extensions.get(&ext) {
                trace!(tag, ext = %ext, owner, "extension already claimed");
                continue;
            }
            self.extensions.insert(ext, tag);
        }

        debug!(tag, extensions = ?driver.extensions(), "registered configuration driver");
        self.drivers.insert(tag, driver);
        Ok(())
    }

    /// Builder-style [`register`](Self::register)
    pub fn with_driver(mut self, driver: Arc<dyn ConfigurationDriver>) -> Result<Self> {
        self.register(driver)?;
        Ok(self)
    }

    /// Driver registered under `tag`
    pub fn get(&self, tag: &str) -> Option<Arc<dyn ConfigurationDriver>> {
        self.drivers.get(tag).cloned()
    }

    /// Driver registered under `tag`, or [`ConfigError::UnknownDriver`]
    pub fn require(&self, tag: &str) -> Result<Arc<dyn ConfigurationDriver>> {
        self.get(tag).ok_or_else(|| ConfigError::UnknownDriver {
            tag: tag.to_string(),
        })
    }

    /// Registered tags in sorted order
    pub fn tags(&self) -> Vec<&'static str> {
        self.drivers.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Select a driver from the extension of `path` (case-insensitive)
    pub fn for_path(&self, path: &Path) -> Result<Arc<dyn ConfigurationDriver>> {
        path.extension()
            .and_then(|s| s.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .and_then(|ext| self.extensions.get(&ext))
            .and_then(|tag| self.get(tag))
            .ok_or_else(|| ConfigError::UnknownFormat {
                path: path.to_path_buf(),
            })
    }

    /// Load `path` with the driver its extension selects
    pub fn load(&self, path: &Path) -> Result<ConfigData> {
        self.for_path(path)?.load(path)
    }

    /// Save `data` to `path` with the driver its extension selects.
    ///
    /// Fails with [`ConfigError::ReadOnlyDriver`] if that driver cannot save.
    pub fn save(&self, path: &Path, data: &ConfigData) -> Result<()> {
        let driver = self.for_path(path)?;
        if !driver.can_save() {
            return Err(ConfigError::ReadOnlyDriver {
                tag: driver.tag().to_string(),
                path: path.to_path_buf(),
            });
        }
        driver.save(path, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[derive(Debug)]
    struct StubDriver {
        tag: &'static str,
        extensions: &'static [&'static str],
        writable: bool,
    }

    impl ConfigurationDriver for StubDriver {
        fn tag(&self) -> &'static str {
            self.tag
        }

        fn extensions(&self) -> &'static [&'static str] {
            self.extensions
        }

        fn can_save(&self) -> bool {
            self.writable
        }

        fn load(&self, _path: &Path) -> Result<ConfigData> {
            Ok(ConfigData::new())
        }

        fn save(&self, _path: &Path, _data: &ConfigData) -> Result<()> {
            Ok(())
        }
    }

    fn stub(
        tag: &'static str,
        extensions: &'static [&'static str],
        writable: bool,
    ) -> Arc<dyn ConfigurationDriver> {
        Arc::new(StubDriver {
            tag,
            extensions,
            writable,
        })
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = DriverRegistry::new()
            .with_driver(stub("yaml", &["yml", "yaml"], false))
            .unwrap()
            .with_driver(stub("ini", &["ini"], true))
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.tags(), vec!["ini", "yaml"]);
        assert_eq!(registry.get("ini").unwrap().tag(), "ini");
        assert!(registry.get("toml").is_none());
        assert!(matches!(
            registry.require("toml"),
            Err(ConfigError::UnknownDriver { tag }) if tag == "toml"
        ));
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        let mut registry = DriverRegistry::new();
        registry.register(stub("ini", &["ini"], true)).unwrap();
        let err = registry.register(stub("ini", &["cfg"], true)).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateDriver { tag } if tag == "ini"));
        assert!(registry.for_path(Path::new("a.cfg")).is_err());
    }

    #[test]
    fn test_for_path_by_extension() {
        let registry = DriverRegistry::new()
            .with_driver(stub("yaml", &["yml", "yaml"], false))
            .unwrap();

        assert_eq!(
            registry.for_path(Path::new("conf/app.yml")).unwrap().tag(),
            "yaml"
        );
        assert_eq!(
            registry.for_path(Path::new("APP.YAML")).unwrap().tag(),
            "yaml"
        );

        for path in ["app.txt", "app", ".yml.bak"] {
            let err = registry.for_path(Path::new(path)).unwrap_err();
            assert!(
                matches!(err, ConfigError::UnknownFormat { path: p } if p == PathBuf::from(path))
            );
        }
    }

    #[test]
    fn test_first_registration_owns_extension() {
        let registry = DriverRegistry::new()
            .with_driver(stub("ini", &["conf"], true))
            .unwrap()
            .with_driver(stub("nginx", &["conf"], true))
            .unwrap();

        assert_eq!(registry.for_path(Path::new("x.conf")).unwrap().tag(), "ini");
        assert!(registry.get("nginx").is_some());
    }

    #[test]
    fn test_save_through_read_only_driver() {
        let registry = DriverRegistry::new()
            .with_driver(stub("yaml", &["yml"], false))
            .unwrap()
            .with_driver(stub("ini", &["ini"], true))
            .unwrap();
        let data = ConfigData::new();

        let err = registry.save(Path::new("app.yml"), &data).unwrap_err();
        assert!(matches!(err, ConfigError::ReadOnlyDriver { ref tag, .. } if tag == "yaml"));
        assert_eq!(err.path(), Some(Path::new("app.yml")));

        assert!(registry.save(Path::new("app.ini"), &data).is_ok());
        assert_eq!(registry.load(Path::new("app.yml")).unwrap(), ConfigData::new());
    }
}
