//! Single-file JSON persistence for bills and payment history.
//!
//! The whole collection lives in one document guarded by a mutex; every
//! mutation rewrites the file through a temp-file rename so a crash never
//! leaves a torn document behind.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Bill, PaymentHistoryEntry};
use crate::errors::BillError;

use super::{BillStore, HistoryStore, Result};

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    bills: Vec<Bill>,
    #[serde(default)]
    history: Vec<PaymentHistoryEntry>,
    #[serde(default)]
    next_bill_id: i64,
    #[serde(default)]
    next_history_id: i64,
}

impl StoreDocument {
    fn next_bill_id(&mut self) -> i64 {
        self.next_bill_id += 1;
        self.next_bill_id
    }

    fn next_history_id(&mut self) -> i64 {
        self.next_history_id += 1;
        self.next_history_id
    }
}

/// File-backed store implementing both [`BillStore`] and [`HistoryStore`].
pub struct JsonStorage {
    path: PathBuf,
    state: Mutex<StoreDocument>,
}

impl JsonStorage {
    /// Opens the store at `path`, creating an empty document when the file
    /// does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let state = if path.exists() {
            let data = fs::read_to_string(&path)?;
            serde_json::from_str(&data)?
        } else {
            StoreDocument::default()
        };
        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    fn persist(&self, state: &StoreDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(state)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreDocument> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl BillStore for JsonStorage {
    fn list_all(&self) -> Result<Vec<Bill>> {
        let state = self.lock();
        let mut bills = state.bills.clone();
        bills.sort_by_key(|bill| bill.due_date);
        Ok(bills)
    }

    fn list_in_range(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Bill>> {
        let state = self.lock();
        let mut bills: Vec<Bill> = state
            .bills
            .iter()
            .filter(|bill| bill.due_date >= from && bill.due_date <= to)
            .cloned()
            .collect();
        bills.sort_by_key(|bill| bill.due_date);
        Ok(bills)
    }

    fn insert(&self, mut bill: Bill) -> Result<Bill> {
        bill.validate()?;
        let mut state = self.lock();
        bill.id = state.next_bill_id();
        state.bills.push(bill.clone());
        self.persist(&state)?;
        Ok(bill)
    }

    fn update(&self, bill: &Bill) -> Result<()> {
        let mut state = self.lock();
        let slot = state
            .bills
            .iter_mut()
            .find(|stored| stored.id == bill.id)
            .ok_or(BillError::BillNotFound(bill.id))?;
        *slot = bill.clone();
        self.persist(&state)
    }

    fn delete(&self, id: i64) -> Result<()> {
        let mut state = self.lock();
        let before = state.bills.len();
        state.bills.retain(|bill| bill.id != id);
        if state.bills.len() == before {
            return Err(BillError::BillNotFound(id));
        }
        self.persist(&state)
    }
}

impl HistoryStore for JsonStorage {
    fn append(&self, mut entry: PaymentHistoryEntry) -> Result<PaymentHistoryEntry> {
        let mut state = self.lock();
        entry.id = state.next_history_id();
        state.history.push(entry.clone());
        self.persist(&state)?;
        Ok(entry)
    }

    fn entries(&self) -> Result<Vec<PaymentHistoryEntry>> {
        let state = self.lock();
        let mut entries = state.history.clone();
        entries.sort_by(|a, b| b.payment_date.cmp(&a.payment_date));
        Ok(entries)
    }

    fn clear(&self) -> Result<()> {
        let mut state = self.lock();
        state.history.clear();
        self.persist(&state)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".");
    tmp.push(TMP_SUFFIX);
    PathBuf::from(tmp)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    Ok(())
}
