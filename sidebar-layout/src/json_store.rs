use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::StoreError;
use crate::store::LayoutStore;

const LAYOUT_FILE_VERSION: u32 = 1;

/// On-disk representation of the layout store.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayoutFile {
    version: u32,
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for LayoutFile {
    fn default() -> Self {
        Self {
            version: LAYOUT_FILE_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// Layout store persisted as a JSON file, rewritten atomically on each set.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    file: LayoutFile,
}

impl JsonFileStore {
    /// Create an empty store that will write to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: LayoutFile::default(),
        }
    }

    /// Open the store at `path`.
    ///
    /// A missing file yields an empty store. A file that is not valid JSON
    /// also yields an empty store, with a warning, and is replaced on the
    /// next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::new(path));
            },
            Err(err) => return Err(err.into()),
        };

        let file = match serde_json::from_str::<LayoutFile>(&contents) {
            Ok(file) => file,
            Err(err) => {
                log::warn!(
                    "ignoring unreadable layout file {}: {err}",
                    path.display()
                );
                LayoutFile::default()
            },
        };

        Ok(Self { path, file })
    }

    /// Default location: `$HOME/.config/<app>/layout.json`, or the temp
    /// directory when `HOME` is unset.
    pub fn default_path(app: &str) -> PathBuf {
        if let Ok(home) = std::env::var("HOME") {
            return Path::new(&home)
                .join(".config")
                .join(app)
                .join("layout.json");
        }

        std::env::temp_dir().join(app).join("layout.json")
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, file: &LayoutFile) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let payload = serde_json::to_string_pretty(file)?;
        write_atomic(&self.path, payload.as_bytes())?;
        Ok(())
    }
}

impl LayoutStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.file.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // Only commit entries that reached the disk.
        let mut next = self.file.clone();
        next.entries.insert(key.to_owned(), value.to_owned());
        self.save(&next)?;
        self.file = next;
        Ok(())
    }
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::JsonFileStore;
    use crate::state::{STORAGE_KEY_COLLAPSED, STORAGE_KEY_WIDTH};
    use crate::store::LayoutStore;

    #[test]
    fn given_missing_file_when_opened_then_store_is_empty() {
        let root = test_temp_dir("missing");
        let path = root.join("layout.json");

        let store = JsonFileStore::open(&path).expect("open should succeed");

        assert_eq!(store.get(STORAGE_KEY_WIDTH), None);
        assert!(!path.exists());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_written_entries_when_reopened_then_values_round_trip() {
        let root = test_temp_dir("round_trip");
        let path = root.join("nested").join("layout.json");

        let mut store = JsonFileStore::new(&path);
        store
            .set(STORAGE_KEY_WIDTH, "312px")
            .expect("width should be written");
        store
            .set(STORAGE_KEY_COLLAPSED, "true")
            .expect("flag should be written");

        let reopened =
            JsonFileStore::open(&path).expect("open should succeed");

        assert_eq!(
            reopened.get(STORAGE_KEY_WIDTH).as_deref(),
            Some("312px")
        );
        assert_eq!(
            reopened.get(STORAGE_KEY_COLLAPSED).as_deref(),
            Some("true")
        );
        assert!(!path.with_extension("json.tmp").exists());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_opened_then_store_is_empty_and_writable() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("layout.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let mut store = JsonFileStore::open(&path)
            .expect("invalid content should not fail with io error");
        assert_eq!(store.get(STORAGE_KEY_WIDTH), None);

        store
            .set(STORAGE_KEY_WIDTH, "240px")
            .expect("width should be written");
        let contents =
            fs::read_to_string(&path).expect("layout file should be readable");
        let value: serde_json::Value = serde_json::from_str(&contents)
            .expect("layout file should be valid json");
        assert_eq!(value["version"], 1);
        assert_eq!(value["entries"][STORAGE_KEY_WIDTH], "240px");

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_unwritable_path_when_set_then_previous_value_is_kept() {
        let root = test_temp_dir("unwritable");
        let blocker = root.join("not-a-dir");
        fs::write(&blocker, "plain file")
            .expect("blocking file should be written");
        let path = blocker.join("layout.json");

        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.path(), path.as_path());

        let result = store.set(STORAGE_KEY_WIDTH, "312px");

        assert!(result.is_err());
        assert_eq!(store.get(STORAGE_KEY_WIDTH), None);
        assert!(JsonFileStore::open(&path).is_err());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_saved_value_when_later_set_fails_then_saved_value_is_kept() {
        let root = test_temp_dir("keep_saved");
        let dir = root.join("store");
        let path = dir.join("layout.json");
        let mut store = JsonFileStore::new(&path);
        store
            .set(STORAGE_KEY_WIDTH, "240px")
            .expect("width should be written");

        fs::remove_dir_all(&dir).expect("store directory should be removed");
        fs::write(&dir, "plain file")
            .expect("blocking file should be written");

        assert!(store.set(STORAGE_KEY_WIDTH, "312px").is_err());
        assert_eq!(store.get(STORAGE_KEY_WIDTH).as_deref(), Some("240px"));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_app_name_when_default_path_built_then_it_ends_with_layout_file() {
        let path = JsonFileStore::default_path("sidebar-layout");

        assert!(path.ends_with("sidebar-layout/layout.json"));
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "sidebar-layout-store-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
