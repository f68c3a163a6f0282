use crate::workbook::Workbook;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait Storage {
    /// Charge un workbook depuis un support.
    fn load(&self) -> anyhow::Result<Workbook>;
    /// Sauvegarde de manière atomique.
    fn save(&self, workbook: &Workbook) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Workbook> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let workbook: Workbook = serde_json::from_slice(&data)
            .with_context(|| format!("parsing workbook {}", self.path.display()))?;
        Ok(workbook)
    }

    fn save(&self, workbook: &Workbook) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(workbook)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
