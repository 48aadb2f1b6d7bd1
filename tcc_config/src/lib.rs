use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;
use tcc_models::submission::SubmissionSuccessRate;

pub use duration::Duration;

mod duration;

/// The contents of `config.toml`, which every other source is layered on top
/// of.
pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Loads the default configuration and merges the given TOML files into it in
/// order, so a file only needs to contain the values it overrides.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    let mut builder =
        config::Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    for path in paths {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        builder = builder.add_source(File::from_str(&content, FileFormat::Toml));
    }

    builder
        .build()
        .and_then(|config| config.try_deserialize())
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub submission: SubmissionConfig,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionConfig {
    /// Deadline for a single submission attempt.
    pub timeout: Option<Duration>,
    pub simulated: SimulatedSubmissionConfig,
}

#[derive(Debug, Deserialize)]
pub struct SimulatedSubmissionConfig {
    pub delay: Duration,
    pub success_rate: SubmissionSuccessRate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let config = load(&[] as &[&Path]).unwrap();

        assert_eq!(config.submission.timeout, None);
        assert_eq!(
            *config.submission.simulated.delay,
            std::time::Duration::from_secs(2)
        );
        assert_eq!(*config.submission.simulated.success_rate, 0.9);
    }

    #[test]
    fn override_config() {
        // Arrange
        let dir = std::env::temp_dir().join(format!("tcc_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("override.toml");
        std::fs::write(
            &path,
            "[submission]\ntimeout = \"30s\"\n[submission.simulated]\nsuccess_rate = 1.0\n",
        )
        .unwrap();

        // Act
        let config = load(&[path.as_path()]).unwrap();

        // Assert
        assert_eq!(
            config.submission.timeout.map(|x| x.0),
            Some(std::time::Duration::from_secs(30))
        );
        assert_eq!(
            *config.submission.simulated.delay,
            std::time::Duration::from_secs(2)
        );
        assert_eq!(*config.submission.simulated.success_rate, 1.0);

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn reject_invalid_success_rate() {
        // Arrange
        let dir = std::env::temp_dir().join(format!("tcc_config_rate_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("invalid.toml");
        std::fs::write(&path, "[submission.simulated]\nsuccess_rate = 1.5\n").unwrap();

        // Act
        let result = load(&[path.as_path()]);

        // Assert
        assert!(result.is_err());

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn missing_file() {
        let err = load(&[Path::new("/nonexistent/tcc.toml")]).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tcc.toml"));
    }
}
