//! Profile persistence with file locking.
//!
//! The profile is stored as a single JSON file. Saves are atomic
//! (write to a temp file, sync, rename over the original). Unlike
//! ledger reads, a corrupt profile is a hard error: defaulting would
//! invent age, weight, and height.

use crate::{Error, Profile, Result};
use fs2::FileExt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

impl Profile {
    /// Load the profile from a file with shared locking.
    ///
    /// Returns `Ok(None)` if no profile has been created yet.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            tracing::info!("No profile file found at {:?}", path);
            return Ok(None);
        }

        let file = File::open(path)?;
        file.lock_shared()?;

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        let read_result = reader.read_to_string(&mut contents);
        file.unlock()?;
        read_result?;

        let profile = serde_json::from_str::<Profile>(&contents)
            .map_err(|e| Error::Storage(format!("corrupt profile at {:?}: {}", path, e)))?;

        // Stored values may predate validation
        crate::bmi::validate_anthropometrics(profile.weight_kg, profile.height_cm)?;

        tracing::debug!("Loaded profile for {} from {:?}", profile.name, path);
        Ok(Some(profile))
    }

    /// Save the profile with exclusive locking and atomic rename.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Temp file in the same directory so the rename stays atomic
        let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "profile path missing parent")
        })?)?;

        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved profile for {} to {:?}", self.name, path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.json");

        let profile = Profile::new("sana", 34, 62.0, 168.0).unwrap();
        profile.save(&path).unwrap();

        let loaded = Profile::load(&path).unwrap().unwrap();
        assert_eq!(loaded.id, profile.id);
        assert_eq!(loaded.name, "sana");
        assert_eq!(loaded.age, 34);
        assert_eq!(loaded.weight_kg, 62.0);
    }

    #[test]
    fn test_load_missing_returns_none() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        assert!(Profile::load(&path).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_profile_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.json");

        std::fs::write(&path, "{ invalid json }").unwrap();

        let result = Profile::load(&path);
        assert!(matches!(result.unwrap_err(), Error::Storage(_)));
    }

    #[test]
    fn test_atomic_save_leaves_no_temp_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.json");

        let profile = Profile::new("a", 30, 70.0, 175.0).unwrap();
        profile.save(&path).unwrap();

        assert!(path.exists());
        let extras: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != "profile.json")
            .collect();
        assert!(extras.is_empty(), "unexpected files: {:?}", extras);
    }

    #[test]
    fn test_stored_bad_anthropometrics_rejected_on_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.json");

        let mut profile = Profile::new("a", 30, 70.0, 175.0).unwrap();
        profile.weight_kg = -1.0;
        profile.save(&path).unwrap();

        let result = Profile::load(&path);
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAnthropometrics { .. }
        ));
    }
}
