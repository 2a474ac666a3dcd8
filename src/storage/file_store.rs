//! 文件键值存储
//!
//! 每个键对应存储目录下的一个 JSON 文件

use crate::error::{AppError, AppResult};
use crate::storage::KeyValueStore;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// 文件键值存储
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// 创建新的文件存储
    ///
    /// 目录不要求已存在，首次写入时创建
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// 键对应的文件路径
    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::storage_read_failed(key, e))?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| AppError::storage_write_failed(key, e))?;
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|e| AppError::storage_write_failed(key, e))?;

        debug!("已写入存储: {}", path.display());
        Ok(())
    }

    fn erase(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| AppError::storage_erase_failed(key, e))?;
            debug!("已删除存储: {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> (FileStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "math_tutor_client_test_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        (FileStore::new(&dir), dir)
    }

    #[test]
    fn test_read_missing_key_is_none() {
        let (store, dir) = temp_store("missing");
        assert!(store.read("math_history").unwrap().is_none());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let (store, dir) = temp_store("roundtrip");
        store.write("math_history", r#"["x**2 - 9 = 0"]"#).unwrap();
        let value = store.read("math_history").unwrap();
        assert_eq!(value.as_deref(), Some(r#"["x**2 - 9 = 0"]"#));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_erase_removes_file_entirely() {
        let (store, dir) = temp_store("erase");
        store.write("math_history", "[]").unwrap();
        assert!(dir.join("math_history.json").exists());

        store.erase("math_history").unwrap();
        assert!(!dir.join("math_history.json").exists());
        assert!(store.read("math_history").unwrap().is_none());

        // 再次删除不存在的键也算成功
        store.erase("math_history").unwrap();
        let _ = fs::remove_dir_all(dir);
    }
}
