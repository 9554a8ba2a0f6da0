// JSON document storage.
// Reads and writes whole documents, replacing files via a temp file and rename.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::Result;

/// Read a JSON document, returning None if the file does not exist.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let value: T = serde_json::from_str(&contents)?;
    Ok(Some(value))
}

/// Write a JSON document, overwriting any previous contents.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    write_document(path, value, false)
}

/// Like [`write_json`], but readable by the owner only on unix (mode 0600).
pub fn write_private_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    write_document(path, value, true)
}

fn write_document<T: Serialize>(path: &Path, value: &T, private: bool) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let mut file = fs::File::create(&temp_path)?;
    if private {
        restrict_to_owner(&file)?;
    }
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(unix)]
fn restrict_to_owner(file: &fs::File) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_to_owner(_file: &fs::File) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_write_and_read_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        write_json(&path, &data).unwrap();

        let read: Option<TestData> = read_json(&path).unwrap();
        assert_eq!(read, Some(data));
        assert!(!temp_dir.path().join("test.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("doc.json");

        write_json(&path, &vec![1, 2, 3]).unwrap();

        let read: Option<Vec<i32>> = read_json(&path).unwrap();
        assert_eq!(read, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_write_dotfile() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".discli");

        write_json(&path, &"x").unwrap();
        assert!(path.exists());
        assert!(!temp_dir.path().join(".discli.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_private_json_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let private = temp_dir.path().join("secret.json");

        write_private_json(&private, &"key").unwrap();

        let mode = fs::metadata(&private).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);

        // Rewriting keeps the restricted mode
        write_private_json(&private, &"other").unwrap();
        let mode = fs::metadata(&private).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_read_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let read: Option<TestData> = read_json(&path).unwrap();
        assert!(read.is_none());
    }

    #[test]
    fn test_read_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();

        let result: Result<Option<TestData>> = read_json(&path);
        assert!(matches!(result, Err(crate::error::DiscliError::Json(_))));
    }
}
