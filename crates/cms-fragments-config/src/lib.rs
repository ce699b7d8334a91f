use cms_fragments_engine::TemplateLinkResolver;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where rendered document links point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// URL template with `{id}`, `{uid}`, `{type}`, `{slug}` and `{lang}`
    /// placeholders.
    pub document_url: String,
    /// Target for links to documents that no longer exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broken_url: Option<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            document_url: "/{type}/{id}".to_string(),
            broken_url: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Templates may reference environment variables such as $SITE_URL
        config.resolver.document_url = Self::expand(&config.resolver.document_url);
        config.resolver.broken_url = config.resolver.broken_url.map(|url| Self::expand(&url));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/cms-fragments");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Builds the resolver described by the `[resolver]` table.
    pub fn link_resolver(&self) -> TemplateLinkResolver {
        let resolver = TemplateLinkResolver::new(&self.resolver.document_url);
        match &self.resolver.broken_url {
            Some(url) => resolver.with_broken_url(url),
            None => resolver,
        }
    }

    /// Expands `$VAR`/`${VAR}` references; `{placeholder}` segments without a
    /// leading `$` are left for the resolver. Unknown variables leave the
    /// text unchanged.
    fn expand(template: &str) -> String {
        match shellexpand::env(template) {
            Ok(expanded) => expanded.into_owned(),
            Err(_) => template.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cms_fragments_engine::{DocumentLink, LinkResolver};
    use std::env;
    use tempfile::TempDir;

    fn link(is_broken: bool) -> DocumentLink {
        DocumentLink {
            id: "UrDejAEAAFwMyrW9".into(),
            uid: None,
            doc_type: "doc".into(),
            tags: vec![],
            slug: "installing-meta-micro".into(),
            lang: Some("en-us".into()),
            is_broken,
        }
    }

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/cms-fragments/config.toml"));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            resolver: ResolverConfig {
                document_url: "https://example.org/{lang}/{slug}".into(),
                broken_url: Some("/not-found".into()),
            },
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_missing_resolver_table_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.resolver.document_url, "/{type}/{id}");
        assert_eq!(config.link_resolver().resolve(&link(false)), "/doc/UrDejAEAAFwMyrW9");
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[resolver\ndocument_url = 1").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_env_var_in_template() {
        unsafe {
            env::set_var("CMS_FRAGMENTS_TEST_SITE", "https://docs.example.org");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            r#"
[resolver]
document_url = "$CMS_FRAGMENTS_TEST_SITE/{type}/{slug}"
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(
            config.link_resolver().resolve(&link(false)),
            "https://docs.example.org/doc/installing-meta-micro"
        );

        unsafe {
            env::remove_var("CMS_FRAGMENTS_TEST_SITE");
        }
    }

    #[test]
    fn test_broken_links_use_broken_url() {
        let config: Config = toml::from_str(
            r#"
[resolver]
document_url = "/{lang}/{slug}"
broken_url = "/404"
"#,
        )
        .unwrap();

        let resolver = config.link_resolver();
        assert_eq!(resolver.resolve(&link(false)), "/en-us/installing-meta-micro");
        assert_eq!(resolver.resolve(&link(true)), "/404");
    }
}
