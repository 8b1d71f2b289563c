use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{ledger::Ledger, utils};

use super::{LedgerStore, Result};

const TMP_SUFFIX: &str = "tmp";

/// Whole-snapshot JSON persistence: one file holding transactions, cards,
/// accounts, and goals. Saves go through a temp file and rename so a failed
/// write never clobbers the previous snapshot.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the default data directory (`~/.ledger_core`).
    pub fn new_default() -> Self {
        Self::new(utils::ledger_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for JsonStorage {
    fn load(&self) -> Result<Ledger> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no snapshot file, starting empty");
            return Ok(Ledger::new());
        }
        let data = fs::read_to_string(&self.path)?;
        let ledger: Ledger = serde_json::from_str(&data)?;
        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(ledger)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            transactions = ledger.transaction_count(),
            "snapshot saved"
        );
        Ok(())
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
