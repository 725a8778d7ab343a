use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{env_subst::substitute_env, schema::WesterosConfig};

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &[
    "westeros.toml",
    "westeros.yaml",
    "westeros.yml",
    "westeros.json",
];

/// Load config from the given path (any supported format).
pub fn load_config(path: &Path) -> anyhow::Result<WesterosConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let raw = substitute_env(&raw);
    parse_config(&raw, path)
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./westeros.{toml,yaml,yml,json}` (project-local)
/// 2. `~/.config/westeros/westeros.{toml,yaml,yml,json}` (user-global)
///
/// Returns `WesterosConfig::default()` if no config file is found.
pub fn discover_and_load() -> WesterosConfig {
    if let Some(path) = find_config_file() {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            },
        }
    } else {
        debug!("no config file found, using defaults");
    }
    WesterosConfig::default()
}

/// Find the first config file in standard locations.
fn find_config_file() -> Option<PathBuf> {
    // Project-local
    for name in CONFIG_FILENAMES {
        let p = PathBuf::from(name);
        if p.exists() {
            return Some(p);
        }
    }

    // User-global: ~/.config/westeros/
    if let Some(dir) = config_dir() {
        for name in CONFIG_FILENAMES {
            let p = dir.join(name);
            if p.exists() {
                return Some(p);
            }
        }
    }

    None
}

/// Returns the user-global config directory (`~/.config/westeros/`).
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "westeros").map(|d| d.config_dir().to_path_buf())
}

fn parse_config(raw: &str, path: &Path) -> anyhow::Result<WesterosConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => Ok(toml::from_str(raw)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(raw)?),
        "json" => Ok(serde_json::from_str(raw)?),
        _ => anyhow::bail!("unsupported config format: .{ext}"),
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).expect("write config");
        path
    }

    #[test]
    fn loads_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_config(
            &dir,
            "westeros.toml",
            "[server]\nbind = \"0.0.0.0\"\nport = 4242\n\n[secrets]\napi_key = \"abc\"\n",
        );
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.server.bind, "0.0.0.0");
        assert_eq!(cfg.server.port, 4242);
        assert_eq!(cfg.secrets.get("api_key").map(String::as_str), Some("abc"));
    }

    #[test]
    fn loads_yaml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_config(
            &dir,
            "westeros.yaml",
            "graphql:\n  graphiql: false\n  event_capacity: 8\n",
        );
        let cfg = load_config(&path).expect("load");
        assert!(!cfg.graphql.graphiql);
        assert_eq!(cfg.graphql.event_capacity, 8);
    }

    #[test]
    fn loads_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_config(&dir, "westeros.json", r#"{"server": {"port": 9000}}"#);
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.server.port, 9000);
        // Unset sections fall back to their defaults.
        assert_eq!(cfg.server.bind, "127.0.0.1");
        assert!(cfg.graphql.graphiql);
    }

    #[test]
    fn substitutes_env_placeholders() {
        let dir = tempfile::tempdir().expect("tempdir");
        // PATH is always set; an unset placeholder must survive verbatim.
        let path = write_config(
            &dir,
            "westeros.toml",
            "[secrets]\npath = \"${PATH}\"\nmissing = \"${WESTEROS_UNSET_VAR_XYZ}\"\n",
        );
        let cfg = load_config(&path).expect("load");
        assert_eq!(
            cfg.secrets.get("path"),
            Some(&std::env::var("PATH").expect("PATH set"))
        );
        assert_eq!(
            cfg.secrets.get("missing").map(String::as_str),
            Some("${WESTEROS_UNSET_VAR_XYZ}")
        );
    }

    #[test]
    fn config_dir_ends_with_project_name() {
        // None only when the platform reports no home directory.
        if let Some(dir) = config_dir() {
            assert!(dir.ends_with("westeros"), "got {}", dir.display());
        }
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_config(&dir, "westeros.ini", "bind=0.0.0.0");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_config(&dir.path().join("westeros.toml")).is_err());
    }
}
