//! Saving and loading to files, specifically.
//!
//! A [`KeyFile`] is a tiny key/value store: string keys, string values, the whole thing loaded into memory on open and
//! rewritten on every change. The best score is one entry in it, under [`BEST_SCORE_KEY`], as a decimal string.
//!
//! On disk, it's 8 magic bytes followed by the bincode-encoded map of entries.

use std::{
    collections::BTreeMap,
    ffi::OsString,
    fs::{self, File},
    io::{self, BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use crate::{
    constants::saves::BEST_SCORE_KEY,
    error::{Error, Result},
};

use super::ScoreStore;

const MAGIC: &[u8] = b"NUMGUESS";
const TMP_SUFFIX: &str = ".tmp";

/// Everything in the file after the magic bytes.
#[derive(serde::Serialize, serde::Deserialize, Debug, Default)]
struct Body {
    entries: BTreeMap<String, String>,
}

/// A key/value file, loaded into memory and written through on every change.
#[derive(Debug)]
pub struct KeyFile {
    path: PathBuf,
    body: Body,
}

impl KeyFile {
    /// Open the key file at `path`. If there's nothing there yet, it starts out empty; nothing is written until the
    /// first change.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let body = match File::open(&path) {
            Ok(file) => Self::read_body(file)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no save file at {}, starting fresh", path.display());
                Body::default()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, body })
    }

    fn read_body(file: File) -> Result<Body> {
        let mut reader = BufReader::new(file);
        let mut magic = [0u8; 8];
        match reader.read_exact(&mut magic) {
            Ok(()) => (),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(Error::Corrupt("too short to be a save file".into()))
            }
            Err(e) => return Err(e.into()),
        }
        if magic != MAGIC {
            return Err(Error::Corrupt("missing magic bytes".into()));
        }
        let body = bincode::deserialize_from(reader)?;
        Ok(body)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.body.entries.get(key).map(String::as_str)
    }

    /// Set `key` to `value` and write the file.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.body.entries.insert(key.into(), value.into());
        self.flush()
    }

    /// Remove `key`, writing the file if it was there. Returns the old value.
    pub fn remove(&mut self, key: &str) -> Result<Option<String>> {
        let old = self.body.entries.remove(key);
        if old.is_some() {
            self.flush()?;
        }
        Ok(old)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(TMP_SUFFIX);
        PathBuf::from(name)
    }

    /// Write everything out. The data goes to a sibling file first, then gets renamed over the real one, so a crash
    /// mid-write leaves the old save intact.
    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.tmp_path();
        let mut writer = BufWriter::new(File::create(&tmp)?);
        writer.write_all(MAGIC)?;
        bincode::serialize_into(&mut writer, &self.body)?;
        writer.flush()?;
        drop(writer);
        fs::rename(&tmp, &self.path)?;
        log::debug!("wrote {} entries to {}", self.body.entries.len(), self.path.display());
        Ok(())
    }
}

impl ScoreStore for KeyFile {
    fn load(&self) -> Result<Option<u32>> {
        let raw = match self.get(BEST_SCORE_KEY) {
            Some(raw) => raw,
            None => return Ok(None),
        };
        // nobody can win in zero tries, so a zero is as bogus as text
        match raw.trim().parse::<u32>() {
            Ok(best) if best > 0 => Ok(Some(best)),
            _ => {
                log::warn!("ignoring unusable {} value {:?} in {}", BEST_SCORE_KEY, raw, self.path.display());
                Ok(None)
            }
        }
    }

    fn save(&mut self, tries: u32) -> Result<()> {
        self.set(BEST_SCORE_KEY, tries.to_string())
    }
}
