//! Key-Value-Stores für gespeicherte Designs.
//!
//! Der Store ist ein externer Kollaborateur: er kennt nur Schlüssel und Bytes.
//! Lesen und Schreiben sind blockierend und ersetzen jeweils den ganzen Wert.

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Byte-Store mit String-Schlüsseln.
pub trait KeyValueStore {
    /// Liest den Wert zu `key` (`None`, wenn nicht vorhanden).
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Schreibt den Wert zu `key` (ersetzt einen vorhandenen Wert).
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;
}

/// Flüchtiger Store im Speicher (Tests, Headless-Betrieb).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der gespeicherten Schlüssel.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn nichts gespeichert ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// Store im Dateisystem: ein `<key>.json` pro Schlüssel in einem Verzeichnis.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Erstellt einen Store im Verzeichnis `root` (wird beim Schreiben angelegt).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Wurzelverzeichnis des Stores.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            bail!("Ungültiger Store-Schlüssel: {key:?}");
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("Lesen fehlgeschlagen: {}", path.display()))
            }
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("Verzeichnis nicht anlegbar: {}", self.root.display()))?;

        // Erst in eine temporäre Datei schreiben, dann umbenennen (ganz oder gar nicht)
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)
            .with_context(|| format!("Schreiben fehlgeschlagen: {}", tmp.display()))?;
        std::fs::rename(&tmp, &path)
            .with_context(|| format!("Umbenennen fehlgeschlagen: {}", path.display()))?;
        log::debug!("Store-Eintrag geschrieben: {}", path.display());
        Ok(())
    }
}
