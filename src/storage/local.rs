//! Local filesystem storage implementation.
//!
//! Reads source-group and keynote files, and persists the exported
//! catalog snapshot with atomic writes (temp file + rename). Source
//! enumeration is sorted by file name so group order is deterministic
//! across platforms.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{AppError, Result};
use crate::models::Keynote;
use crate::pipeline::SourceGroup;
use crate::storage::CatalogData;

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Get the full path for a relative key.
    pub fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Ensure parent directory exists.
    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(key);
        self.ensure_dir(&path)?;

        let tmp = path.with_extension("tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Write JSON data.
    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_bytes(key, &bytes)
    }

    /// Read bytes, returning None if the file doesn't exist.
    fn read_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Read JSON data.
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.read_bytes(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Enumerate `*.json` files in a directory, sorted by file name.
    fn list_json_files(&self, dir: &str) -> Result<Vec<PathBuf>> {
        let path = self.path(dir);
        if !path.exists() {
            log::warn!("Source directory {} not found", path.display());
            return Ok(Vec::new());
        }

        let mut files: Vec<PathBuf> = fs::read_dir(&path)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();
        Ok(files)
    }

    /// Read every source-group file under the given directory.
    ///
    /// Unreadable files become groups with empty content, so the loader's
    /// skip policy reports them instead of aborting the enumeration.
    pub fn read_source_groups(&self, dir: &str) -> Result<Vec<SourceGroup>> {
        let mut groups = Vec::new();
        for file in self.list_json_files(dir)? {
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());

            let raw = fs::read_to_string(&file).unwrap_or_else(|e| {
                log::warn!("Failed to read {}: {}", file.display(), e);
                String::new()
            });
            groups.push(SourceGroup::new(name, raw));
        }
        Ok(groups)
    }

    /// Read every keynote file under the given directory, skipping
    /// invalid ones with a warning.
    pub fn read_keynotes(&self, dir: &str) -> Result<Vec<Keynote>> {
        let mut keynotes = Vec::new();
        for file in self.list_json_files(dir)? {
            let raw = match fs::read_to_string(&file) {
                Ok(raw) => raw,
                Err(e) => {
                    log::warn!("Failed to read {}: {}", file.display(), e);
                    continue;
                }
            };
            match serde_json::from_str::<Keynote>(&raw) {
                Ok(keynote) => keynotes.push(keynote),
                Err(e) => {
                    log::warn!("Skipping keynote {}: {}", file.display(), e);
                }
            }
        }
        Ok(keynotes)
    }

    /// Persist the exported catalog snapshot.
    pub fn write_catalog(&self, key: &str, data: &CatalogData) -> Result<()> {
        self.write_json(key, data)
    }

    /// Load the exported catalog snapshot, if present.
    pub fn load_catalog(&self, key: &str) -> Result<Option<CatalogData>> {
        self.read_json(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Project;
    use tempfile::TempDir;

    fn make_project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            title: "Test Project".to_string(),
            subtitle: String::new(),
            description: String::new(),
            year: 2024,
            author: vec!["Jane Doe".to_string()],
            category: vec!["Thesis".to_string()],
            tags: vec!["arts".to_string()],
            image: vec![],
            video: vec![],
            project_url: String::new(),
            project_repo: String::new(),
            student_url: String::new(),
        }
    }

    fn write_file(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_catalog_snapshot_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        let data = CatalogData::new(vec![make_project("2024-jane-doe-test-project")]);
        storage.write_catalog("catalog.json", &data).unwrap();

        let loaded = storage.load_catalog("catalog.json").unwrap().unwrap();
        assert_eq!(loaded.count, 1);
        assert_eq!(loaded.projects, data.projects);
    }

    #[test]
    fn test_load_missing_snapshot() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        assert!(storage.load_catalog("catalog.json").unwrap().is_none());
    }

    #[test]
    fn test_source_groups_sorted_by_file_name() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "data/projects/2024.json", "[]");
        write_file(tmp.path(), "data/projects/2023.json", "[]");
        write_file(tmp.path(), "data/projects/notes.txt", "ignored");

        let storage = LocalStorage::new(tmp.path());
        let groups = storage.read_source_groups("data/projects").unwrap();
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["2023.json", "2024.json"]);
    }

    #[test]
    fn test_missing_source_dir_yields_no_groups() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        assert!(storage.read_source_groups("data/projects").unwrap().is_empty());
    }

    #[test]
    fn test_keynotes_skip_invalid_files() {
        let tmp = TempDir::new().unwrap();
        write_file(
            tmp.path(),
            "data/keynotes/2024.json",
            r#"{
                "year": 2024, "title": "Opening Night", "department": "DT",
                "description": "", "location": "Auditorium", "date": "May 12",
                "time": "7pm", "url": "", "students": [], "video_embed_html": ""
            }"#,
        );
        write_file(tmp.path(), "data/keynotes/broken.json", "{ nope");

        let storage = LocalStorage::new(tmp.path());
        let keynotes = storage.read_keynotes("data/keynotes").unwrap();
        assert_eq!(keynotes.len(), 1);
        assert_eq!(keynotes[0].title, "Opening Night");
    }
}
