use std::sync::Mutex;

use bill_core::{config::ConfigManager, errors::BillError, notify::Notifier, storage::JsonStorage};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated storage backend and config manager for each test.
pub fn setup_test_env() -> (JsonStorage, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let storage = JsonStorage::open(base.join("bills.json")).expect("open json storage backend");
    let config_manager =
        ConfigManager::with_base_dir(base).expect("create config manager for temp dir");

    (storage, config_manager)
}

/// Notifier that records every delivery for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    pub calls: Mutex<Vec<(i64, String, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, key: i64, title: &str, body: &str) -> Result<(), BillError> {
        self.calls
            .lock()
            .expect("lock notifier call log")
            .push((key, title.to_string(), body.to_string()));
        Ok(())
    }
}

/// Notifier that always fails, for exercising error propagation.
pub struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn notify(&self, _key: i64, _title: &str, _body: &str) -> Result<(), BillError> {
        Err(BillError::Notify("delivery channel unavailable".into()))
    }
}
