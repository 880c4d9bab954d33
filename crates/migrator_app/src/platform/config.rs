use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use migrator_engine::MigratorConfig;
use migrator_logging::{migrate_debug, migrate_info};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Loads host overrides from a RON file.
///
/// No path, or a path that does not exist, yields the default hosts.
pub(crate) fn load_config(path: Option<&Path>) -> Result<MigratorConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(MigratorConfig::default());
    };

    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            migrate_info!("Config {:?} not found; using default hosts", path);
            return Ok(MigratorConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config: MigratorConfig = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    migrate_debug!("Loaded config from {:?}: {:?}", path, config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(load_config(None).unwrap(), MigratorConfig::default());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.ron");
        assert_eq!(
            load_config(Some(&path)).unwrap(),
            MigratorConfig::default()
        );
    }

    #[test]
    fn overrides_are_read_from_ron() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("migrator.ron");
        fs::write(
            &path,
            r#"(new_domain: "board.example.org", target_host: "community.example.org")"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.new_domain, "board.example.org");
        assert_eq!(config.target_host, "community.example.org");
        assert_eq!(config.old_domain, MigratorConfig::default().old_domain);
    }

    #[test]
    fn invalid_ron_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.ron");
        fs::write(&path, "(new_domain: ").unwrap();

        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn directory_path_is_a_read_error() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            load_config(Some(temp.path())),
            Err(ConfigError::Read { .. })
        ));
    }
}
