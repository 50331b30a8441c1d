use crate::{Brand, FactoryError, PersonKind, Platform};
use serde::Deserialize;
use std::path::Path;

/// Discriminants for the demos, supplied explicitly instead of being read
/// from the host.
///
/// Values are kept as raw strings so that resolving them goes through the
/// same selectors (and yields the same errors) as any other caller.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default = "default_brands")]
    pub brands: Vec<String>,
    #[serde(default = "default_person")]
    pub person: String,
}

fn default_brands() -> Vec<String> {
    Brand::ALL.iter().map(|b| b.as_str().to_string()).collect()
}

fn default_person() -> String {
    PersonKind::Villager.as_str().to_string()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            platform: None,
            brands: default_brands(),
            person: default_person(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, FactoryError> {
        toml::from_str(content).map_err(|e| FactoryError::config(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FactoryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn with_platform<S: Into<String>>(mut self, platform: S) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Returns the configured platform, falling back to host detection.
    pub fn resolve_platform(&self) -> Result<Platform, FactoryError> {
        match &self.platform {
            Some(os) => Platform::try_from(os.as_str()),
            None => Platform::detect(),
        }
    }

    pub fn resolve_brands(&self) -> Result<Vec<Brand>, FactoryError> {
        self.brands
            .iter()
            .map(|name| Brand::try_from(name.as_str()))
            .collect()
    }

    pub fn resolve_person(&self) -> Result<PersonKind, FactoryError> {
        PersonKind::try_from(self.person.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.platform, None);
        assert_eq!(
            config.resolve_brands().unwrap(),
            vec![Brand::Nike, Brand::Adidas]
        );
        assert_eq!(config.resolve_person().unwrap(), PersonKind::Villager);
    }

    #[test]
    fn test_parse_full_config() {
        let config = DemoConfig::from_toml_str(
            r#"
            platform = "windows"
            brands = ["adidas"]
            person = "metropolitan"
            "#,
        )
        .unwrap();

        assert_eq!(config.resolve_platform().unwrap(), Platform::Windows);
        assert_eq!(config.resolve_brands().unwrap(), vec![Brand::Adidas]);
        assert_eq!(config.resolve_person().unwrap(), PersonKind::Metropolitan);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_unknown_platform_is_unsupported() {
        let config = DemoConfig::from_toml_str(r#"platform = "beos""#).unwrap();
        assert!(matches!(
            config.resolve_platform(),
            Err(FactoryError::UnsupportedPlatform(ref os)) if os == "beos"
        ));
    }

    #[test]
    fn test_host_alias_is_not_a_configured_platform() {
        let config = DemoConfig::default().with_platform("macos");
        assert!(matches!(
            config.resolve_platform(),
            Err(FactoryError::UnsupportedPlatform(_))
        ));
    }

    #[test]
    fn test_unknown_brand_is_unsupported() {
        let config = DemoConfig::from_toml_str(r#"brands = ["nike", "reebok"]"#).unwrap();
        assert!(matches!(
            config.resolve_brands(),
            Err(FactoryError::UnsupportedBrand(_))
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let result = DemoConfig::from_toml_str("platform = ");
        assert!(matches!(result, Err(FactoryError::ConfigError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"platform = "darwin""#).unwrap();

        let config = DemoConfig::load(file.path()).unwrap();
        assert_eq!(config.resolve_platform().unwrap(), Platform::Darwin);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = DemoConfig::load(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(FactoryError::IoError(_))));
    }
}
