//! Config file storage.
//!
//! Resolves which on-disk file holds the configuration, loads it (creating it
//! when absent), and writes changes back.
//!
//! Responsibilities:
//! - **Discovery**: probe `<path>.json`, `<path>.yaml`, `<path>.toml`
//! - **Conflict detection**: refuse to pick between several candidates
//! - **Persistence**: full overwrite on save, format conversion
//!
//! Does NOT:
//! - Lock the file; last writer wins
//! - Know anything about format syntax (delegated to [`codec`](super::codec))

use std::io;
use std::path::{Path, PathBuf};

use awssume_core::config::file_path_for;
use awssume_core::fs::FileSystem;
use awssume_core::{AwssumeError, Config, ConfigFormat, Result, RoleRegistry};

use super::codec;
use crate::dto::ConfigDocument;

/// Loads and persists a [`Config`] through a [`FileSystem`].
pub struct ConfigStore<F> {
    fs: F,
}

impl<F: FileSystem> ConfigStore<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Loads the configuration rooted at `path`.
    ///
    /// `path` is normally given without an extension; a recognized config
    /// extension (`.json`, `.yaml`, `.yml`, `.toml`) is stripped first.
    ///
    /// # Errors
    ///
    /// - `MultipleConfigsDetected` if more than one candidate file exists
    /// - `FileRead` / `FileWrite` if probing, reading or creating fails
    /// - `Unmarshal` if the file content cannot be decoded
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Config> {
        let base = strip_config_extension(path.as_ref());

        let mut found = Vec::new();
        for format in ConfigFormat::SUPPORTED {
            let candidate = file_path_for(&base, format);
            let exists = self
                .fs
                .exists(&candidate)
                .map_err(|e| AwssumeError::file_read(&candidate, e))?;
            if exists {
                found.push((format, candidate));
            }
        }

        let format = match found.as_slice() {
            [] => ConfigFormat::default(),
            [(format, _)] => *format,
            _ => {
                let found = found.into_iter().map(|(_, p)| p).collect::<Vec<_>>();
                tracing::warn!(?found, "refusing to choose between configuration files");
                return Err(AwssumeError::MultipleConfigsDetected { found });
            }
        };

        let file_path = file_path_for(&base, format);
        let bytes = match self.fs.read(&file_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %file_path.display(), "creating empty configuration file");
                self.create_empty(&file_path)?;
                Vec::new()
            }
            Err(e) => return Err(AwssumeError::file_read(&file_path, e)),
        };

        let roles: RoleRegistry = codec::decode(format, &bytes)?.into();
        tracing::debug!(
            path = %file_path.display(),
            %format,
            roles = roles.len(),
            "loaded configuration"
        );

        Ok(Config::new(base, format, roles))
    }

    /// Serializes the roles and overwrites `<path>.<ext>` in full.
    pub fn save(&self, config: &Config) -> Result<()> {
        let format = config.format();
        if !format.is_known() {
            return Err(AwssumeError::UnsupportedConfigFormat(format.to_string()));
        }

        let bytes = codec::encode(format, &ConfigDocument::from(&config.roles))?;
        let file_path = config.file_path();

        self.ensure_parent(&file_path)?;
        self.fs
            .write(&file_path, &bytes)
            .map_err(|e| AwssumeError::file_write(&file_path, e))?;

        tracing::debug!(
            path = %file_path.display(),
            roles = config.roles.len(),
            "saved configuration"
        );
        Ok(())
    }

    /// Rewrites the configuration in `format` and removes the old file.
    ///
    /// Not transactional: if the old file cannot be removed after the new one
    /// was written, both remain on disk and the next `load` reports
    /// `MultipleConfigsDetected`.
    pub fn convert(&self, config: &mut Config, format: ConfigFormat) -> Result<()> {
        let previous = config.format();
        if previous == format {
            tracing::info!(%format, "configuration already in requested format");
            return Ok(());
        }

        let old_path = config.file_path();
        config.set_format(format);
        if let Err(e) = self.save(config) {
            config.set_format(previous);
            return Err(e);
        }

        tracing::info!(from = %previous, to = %format, "converted configuration");
        self.fs
            .remove(&old_path)
            .map_err(|e| AwssumeError::file_write(&old_path, e))
    }

    fn create_empty(&self, file_path: &Path) -> Result<()> {
        self.ensure_parent(file_path)?;
        self.fs
            .create(file_path)
            .map_err(|e| AwssumeError::file_write(file_path, e))
    }

    fn ensure_parent(&self, file_path: &Path) -> Result<()> {
        match file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self
                .fs
                .create_dir_all(parent)
                .map_err(|e| AwssumeError::file_write(parent, e)),
            _ => Ok(()),
        }
    }
}

/// Drops a trailing config-format extension, leaving other dotted names alone.
fn strip_config_extension(path: &Path) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ConfigFormat::from_extension(ext).is_known() => path.with_extension(""),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFileSystem;
    use awssume_core::{Arn, Role};

    fn skunk() -> Role {
        Role::new(
            Arn::parse("arn:aws:iam::000000000000:role/skunk").unwrap(),
            "skunk",
            "sess",
        )
    }

    #[test]
    fn test_load_creates_yaml_when_missing() {
        let fs = MemoryFileSystem::new();
        let store = ConfigStore::new(&fs);

        let config = store.load("cfg").unwrap();

        assert_eq!(config.format(), ConfigFormat::Yaml);
        assert!(config.roles.is_empty());
        assert_eq!(fs.paths(), vec![PathBuf::from("cfg.yaml")]);
        assert_eq!(fs.contents("cfg.yaml").as_deref(), Some(""));
    }

    #[test]
    fn test_load_rejects_multiple_configs() {
        let fs = MemoryFileSystem::with_files([("cfg.json", ""), ("cfg.yaml", "")]);
        let store = ConfigStore::new(&fs);

        let err = store.load("cfg").unwrap_err();
        match err {
            AwssumeError::MultipleConfigsDetected { found } => {
                assert_eq!(found, vec![PathBuf::from("cfg.json"), PathBuf::from("cfg.yaml")]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_selects_existing_format() {
        let fs = MemoryFileSystem::with_files([(
            "cfg.toml",
            "[[roles]]\nalias = \"skunk\"\narn = \"arn:aws:iam::000000000000:role/skunk\"\nsession_name = \"sess\"\n",
        )]);
        let store = ConfigStore::new(&fs);

        let config = store.load("cfg").unwrap();
        assert_eq!(config.format(), ConfigFormat::Toml);
        assert_eq!(config.roles.by_alias("skunk").unwrap(), &skunk());
    }

    #[test]
    fn test_load_strips_known_extension() {
        let fs = MemoryFileSystem::with_files([("cfg.json", "{\"roles\": []}")]);
        let store = ConfigStore::new(&fs);

        let config = store.load("cfg.json").unwrap();
        assert_eq!(config.path(), Path::new("cfg"));
        assert_eq!(config.format(), ConfigFormat::Json);
    }

    #[test]
    fn test_save_then_load() {
        let fs = MemoryFileSystem::new();
        let store = ConfigStore::new(&fs);

        let mut config = store.load("cfg").unwrap();
        config.roles.add(skunk()).unwrap();
        store.save(&config).unwrap();

        let reloaded = store.load("cfg").unwrap();
        let role = reloaded.roles.by_alias("skunk").unwrap();
        assert_eq!(role.arn().to_string(), "arn:aws:iam::000000000000:role/skunk");
        assert_eq!(role.session_name(), "sess");
    }

    #[test]
    fn test_save_unknown_format_writes_nothing() {
        let fs = MemoryFileSystem::new();
        let store = ConfigStore::new(&fs);
        let config = Config::new("cfg", ConfigFormat::Unknown, RoleRegistry::new());

        assert!(store.save(&config).unwrap_err().is_unsupported_format());
        assert!(fs.paths().is_empty());
    }

    #[test]
    fn test_convert_yaml_to_json() {
        let fs = MemoryFileSystem::new();
        let store = ConfigStore::new(&fs);

        let mut config = store.load("cfg").unwrap();
        config.roles.add(skunk()).unwrap();
        store.save(&config).unwrap();

        store.convert(&mut config, ConfigFormat::Json).unwrap();

        assert_eq!(fs.paths(), vec![PathBuf::from("cfg.json")]);
        let json = fs.contents("cfg.json").unwrap();
        assert!(json.contains("\"alias\": \"skunk\""));
        assert!(json.contains("\"arn\": \"arn:aws:iam::000000000000:role/skunk\""));

        let reloaded = store.load("cfg").unwrap();
        assert_eq!(reloaded.format(), ConfigFormat::Json);
        assert_eq!(reloaded.roles.len(), 1);
    }

    #[test]
    fn test_convert_same_format_is_noop() {
        let fs = MemoryFileSystem::new();
        let store = ConfigStore::new(&fs);

        let mut config = store.load("cfg").unwrap();
        store.convert(&mut config, ConfigFormat::Yaml).unwrap();

        assert_eq!(fs.paths(), vec![PathBuf::from("cfg.yaml")]);
    }

    #[test]
    fn test_convert_to_unknown_keeps_format() {
        let fs = MemoryFileSystem::new();
        let store = ConfigStore::new(&fs);

        let mut config = store.load("cfg").unwrap();
        let err = store.convert(&mut config, ConfigFormat::Unknown).unwrap_err();

        assert!(err.is_unsupported_format());
        assert_eq!(config.format(), ConfigFormat::Yaml);
        assert_eq!(fs.paths(), vec![PathBuf::from("cfg.yaml")]);
    }

    #[test]
    fn test_strip_config_extension() {
        assert_eq!(strip_config_extension(Path::new("a/cfg.yml")), PathBuf::from("a/cfg"));
        assert_eq!(strip_config_extension(Path::new("a/cfg")), PathBuf::from("a/cfg"));
        assert_eq!(
            strip_config_extension(Path::new("a/my.config")),
            PathBuf::from("a/my.config")
        );
    }
}
