use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Duration;

use crate::core::services::DEFAULT_LOOKAHEAD_DAYS;
use crate::errors::BillError;
use crate::format::Locale;

const APP_DIR: &str = "bill_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    pub reminder_lookahead_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            reminder_lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
        }
    }
}

impl Config {
    /// Resolved presentation locale for reminder and report text.
    pub fn presentation_locale(&self) -> Locale {
        Locale::from_tag(&self.locale)
    }

    /// Reminder window as a duration, for the periodic scan.
    pub fn lookahead(&self) -> Duration {
        Duration::days(self.reminder_lookahead_days.max(0))
    }
}

/// Loads and saves the configuration file, defaulting when absent.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, BillError> {
        let base = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);
        Self::from_base(base)
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, BillError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, BillError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config, BillError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), BillError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".");
    tmp.push(TMP_SUFFIX);
    PathBuf::from(tmp)
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), BillError> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    Ok(())
}
