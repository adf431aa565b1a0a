use std::{env, fs, path::PathBuf};

use serde::{Deserialize, Serialize};

/// Store location settings.
///
/// Loaded from the JSON file named by `FLOORTRACK_CONFIG` when set, with
/// `FLOORTRACK_DB` overriding the database path either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("floortrack.db"),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let mut config = env::var("FLOORTRACK_CONFIG")
            .ok()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|contents| serde_json::from_str::<Config>(&contents).ok())
            .unwrap_or_default();

        if let Ok(path) = env::var("FLOORTRACK_DB") {
            config.db_path = PathBuf::from(path);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("FLOORTRACK_CONFIG");
        env::remove_var("FLOORTRACK_DB");
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let config = Config::load();
        assert_eq!(config.db_path, PathBuf::from("floortrack.db"));
    }

    #[test]
    fn env_var_overrides_the_db_path() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        env::set_var("FLOORTRACK_DB", "/tmp/override.db");
        let config = Config::load();
        assert_eq!(config.db_path, PathBuf::from("/tmp/override.db"));

        clear_env();
    }
}
