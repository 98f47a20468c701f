//! Build a settings for an object that implement `massa_settings`
//!
//! ---
//! The node configuration is composed from 2 parts, one part is the
//! file configuration often named `config.toml` located in the project
//! directory.
//!
//! The First thing that the node will try is to read the configuration located
//! in the `path` described in the environment variable `MASSA_CONFIG_PATH`.
//! If no path found in the environment variable, the relative path
//! `base_config/config.toml` is used as default. The default path should exist
//! because it's a configuration file pushed in the repository.
//!
//! Whatever configuration you used (the one from the environment variable or the
//! default one) You always have a next possibility. Using the default path of
//! configuration for the project. The default configuration directories
//! is set on Setting creation. All the configuration in this file will be merged
//! with the previous step (override if duplicated)
//!
//! The last step is to merge the environment variable prefixed with
//! `env_prefix`, override if duplicated
//!
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Merge the settings
/// 1. in path specified in `MASSA_CONFIG_PATH` environment variable (`base_config/config.toml` by default)
/// 2. in path specified in `MASSA_CONFIG_OVERRIDE_PATH` environment variable (`config/config.toml` by default)
/// 3. in the user configuration directory of `app_name`
/// 4. in environment variables prefixed with `env_prefix`
pub fn build_massa_settings<T: DeserializeOwned>(
    app_name: &str,
    env_prefix: &str,
) -> Result<T, config::ConfigError> {
    let mut builder = config::Config::builder();
    let config_path = std::env::var("MASSA_CONFIG_PATH")
        .unwrap_or_else(|_| "base_config/config.toml".to_string());

    builder = builder.add_source(config::File::with_name(&config_path));

    let config_override_path = std::env::var("MASSA_CONFIG_OVERRIDE_PATH")
        .unwrap_or_else(|_| "config/config.toml".to_string());

    if Path::new(&config_override_path).is_file() {
        builder = builder.add_source(config::File::with_name(&config_override_path));
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "MassaLabs", app_name) {
        // Portable user config loading
        let user_config_path = proj_dirs.config_dir().join("config.toml");
        if user_config_path.is_file() {
            builder = builder.add_source(config::File::from(user_config_path));
        }
    }

    builder
        .add_source(config::Environment::with_prefix(env_prefix))
        .build()?
        .try_deserialize()
}
