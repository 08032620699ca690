use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::facade::Facade;
use crate::core::identity::IdentityStore;
use crate::core::prefs::FilePrefs;
use crate::core::sink::{ConsoleSink, LogSink, PrintSink};

pub const CONFIG_DIR_ENV: &str = "CUTEDEBUG_CONFIG_DIR";

pub fn config_dir() -> PathBuf {
    // $CUTEDEBUG_CONFIG_DIR, else ~/.config/cutedebug (platform config dir), else temp
    if let Ok(base) = std::env::var(CONFIG_DIR_ENV) {
        return PathBuf::from(base);
    }
    dirs_next::config_dir().unwrap_or_else(std::env::temp_dir).join("cutedebug")
}

pub fn default_config_path() -> PathBuf {
    config_dir().join("config.toml")
}

pub fn default_prefs_path() -> PathBuf {
    config_dir().join("prefs.json")
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_path {
        return p.clone();
    }
    default_config_path()
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Console,
    Log,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colored console output.
    pub color: bool,
    pub sink: SinkKind,
    /// Overrides the OS account name as the fallback identity.
    pub default_identity: Option<String>,
    /// Overrides `<config dir>/prefs.json`.
    pub prefs_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self { color: true, sink: SinkKind::Console, default_identity: None, prefs_file: None }
    }
}

impl Config {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        toml::from_str(txt).context("parsing cutedebug config")
    }

    /// Missing file → defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let txt = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("in {}", path.display()))
    }

    /// Never fails: a broken file falls back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            crate::debug_log!("config ignored: {e:#}");
            Self::default()
        })
    }

    pub fn load_default() -> Self {
        Self::load_or_default(&default_config_path())
    }

    pub fn prefs_path(&self) -> PathBuf {
        self.prefs_path_in(&config_dir())
    }

    /// Relative `prefs_file` values are taken relative to `base`.
    pub fn prefs_path_in(&self, base: &Path) -> PathBuf {
        match &self.prefs_file {
            Some(p) if p.is_relative() => base.join(p),
            Some(p) => p.clone(),
            None => base.join("prefs.json"),
        }
    }

    pub fn identity_store(&self) -> IdentityStore {
        let prefs = Arc::new(FilePrefs::new(self.prefs_path()));
        match &self.default_identity {
            Some(name) => IdentityStore::with_fixed_default(prefs, name.clone()),
            None => IdentityStore::with_account_default(prefs),
        }
    }

    pub fn sink(&self) -> Arc<dyn PrintSink> {
        match self.sink {
            SinkKind::Console => Arc::new(ConsoleSink::new(self.color)),
            SinkKind::Log => Arc::new(LogSink),
        }
    }

    pub fn build_facade(&self) -> Facade {
        Facade::new(self.identity_store(), self.sink())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn all_keys_parse() {
        let cfg = Config::from_toml_str(
            r#"
            color = false
            sink = "log"
            default_identity = "studio-bob"
            prefs_file = "/tmp/cd/prefs.json"
            "#,
        )
        .unwrap();
        assert!(!cfg.color);
        assert_eq!(cfg.sink, SinkKind::Log);
        assert_eq!(cfg.default_identity.as_deref(), Some("studio-bob"));
        assert_eq!(cfg.prefs_path(), PathBuf::from("/tmp/cd/prefs.json"));
    }

    #[test]
    fn unknown_sink_is_rejected_and_load_falls_back() {
        assert!(Config::from_toml_str("sink = \"syslog\"").is_err());
        let td = tempfile::tempdir().unwrap();
        let path = td.path().join("config.toml");
        fs::write(&path, "sink = \"syslog\"").unwrap();
        assert!(Config::load(&path).is_err());
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn relative_prefs_file_lives_under_config_dir() {
        let base = Path::new("/etc/cutedebug");
        let cfg = Config { prefs_file: Some("state/prefs.json".into()), ..Config::default() };
        assert_eq!(cfg.prefs_path_in(base), PathBuf::from("/etc/cutedebug/state/prefs.json"));
        assert_eq!(Config::default().prefs_path_in(base), PathBuf::from("/etc/cutedebug/prefs.json"));
    }

    #[test]
    fn missing_file_is_default() {
        let td = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(&td.path().join("nope.toml")).unwrap(), Config::default());
    }

    #[test]
    fn fixed_default_identity_from_config() {
        let td = tempfile::tempdir().unwrap();
        let cfg = Config {
            default_identity: Some("studio-bob".into()),
            prefs_file: Some(td.path().join("prefs.json")),
            ..Config::default()
        };
        let ids = cfg.identity_store();
        assert_eq!(ids.get_identity(), "studio-bob");
        ids.set_identity("alice");
        assert_eq!(cfg.identity_store().get_identity(), "alice");
    }
}
