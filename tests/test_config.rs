//! Project config discovery relative to the working directory.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use prgate::config::{Config, CONFIG_PATH};

/// Restores the original working directory when dropped.
struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    fn enter(dir: &TempDir) -> Self {
        let original = env::current_dir().unwrap();
        env::set_current_dir(dir.path()).unwrap();
        Self { original }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original);
    }
}

#[test]
#[serial]
fn test_load_without_project_config_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    let _guard = CwdGuard::enter(&tmp);

    let config = Config::load().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_load_reads_project_config() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join(".prgate")).unwrap();
    fs::write(
        tmp.path().join(CONFIG_PATH),
        "---\nmin_length: 12\nsections:\n  - label: Summary\n---\n\n# Team rules\n",
    )
    .unwrap();
    let _guard = CwdGuard::enter(&tmp);

    let config = Config::load().unwrap();
    let specs = config.section_specs();
    assert_eq!(specs.len(), 1);
    assert_eq!(specs[0].label, "Summary");
    assert_eq!(specs[0].min_length, 12);
}

#[test]
#[serial]
fn test_load_rejects_broken_project_config() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join(".prgate")).unwrap();
    fs::write(tmp.path().join(CONFIG_PATH), "---\nsections: [\n---\n").unwrap();
    let _guard = CwdGuard::enter(&tmp);

    let err = Config::load().unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid config"));
}
