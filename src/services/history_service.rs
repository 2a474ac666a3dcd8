//! 历史记录服务 - 业务能力层
//!
//! 只负责"维护最近查询列表"能力，不关心流程
//!
//! 列表最新在前、精确去重、容量封顶，每次变更后整体重新持久化。
//! 持久化读写失败一律吞掉并记日志，本次会话以内存列表为准——
//! 丢失的内容用户重新求解一次即可恢复。

use crate::storage::KeyValueStore;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// 历史记录容量上限
pub const HISTORY_CAPACITY: usize = 15;

/// 历史记录的固定存储键
pub const HISTORY_KEY: &str = "math_history";

/// 历史记录服务
///
/// 职责：
/// - 启动时从存储恢复一次历史列表
/// - 求解成功后记录查询（置顶 + 去重 + 截断）
/// - 清空时彻底删除存储键
/// - 不读取求解流程的任何内部状态
pub struct HistoryService {
    entries: Mutex<Vec<String>>,
    store: Arc<dyn KeyValueStore>,
}

impl HistoryService {
    /// 创建历史记录服务并从存储恢复
    ///
    /// 存储缺失或内容损坏时从空列表开始，绝不报错
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let entries = Self::load(store.as_ref());
        Self {
            entries: Mutex::new(entries),
            store,
        }
    }

    /// 从存储读取历史列表
    fn load(store: &dyn KeyValueStore) -> Vec<String> {
        let raw = match store.read(HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("⚠️ 读取历史记录失败，使用空列表: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(mut list) => {
                // 旧数据可能超长，恢复时同样按容量截断
                list.truncate(HISTORY_CAPACITY);
                debug!("已恢复 {} 条历史记录", list.len());
                list
            }
            Err(e) => {
                warn!("⚠️ 历史记录内容损坏，使用空列表: {}", e);
                Vec::new()
            }
        }
    }

    /// 当前历史列表快照（最新在前）
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// 记录一次成功求解的查询
    ///
    /// 将查询移到最前，删除其余完全相同的条目（区分大小写和空白，
    /// 不做任何规范化），再截断到容量上限，并整体持久化。
    ///
    /// # 返回
    /// 返回更新后的列表快照
    pub fn record(&self, query: &str) -> Vec<String> {
        let snapshot = {
            let mut entries = self.entries.lock().unwrap();
            entries.retain(|q| q != query);
            entries.insert(0, query.to_string());
            entries.truncate(HISTORY_CAPACITY);
            entries.clone()
        };

        self.persist(&snapshot);
        snapshot
    }

    /// 清空历史记录
    ///
    /// 清空内存列表并彻底删除存储键（而非写入空列表），
    /// 保证新会话加载到的同样是空历史。
    ///
    /// # 返回
    /// 返回清空后的（空）列表快照
    pub fn clear(&self) -> Vec<String> {
        self.entries.lock().unwrap().clear();

        if let Err(e) = self.store.erase(HISTORY_KEY) {
            warn!("⚠️ 删除历史记录存储失败: {}", e);
        }

        Vec::new()
    }

    /// 整体持久化当前列表
    fn persist(&self, entries: &[String]) {
        let serialized = match serde_json::to_string(entries) {
            Ok(s) => s,
            Err(e) => {
                warn!("⚠️ 历史记录序列化失败: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.write(HISTORY_KEY, &serialized) {
            warn!("⚠️ 持久化历史记录失败，本次会话仅保留内存列表: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};
    use crate::storage::MemoryStore;

    /// 写入和删除总是失败的存储，用于验证持久化失败被吞掉
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn read(&self, _key: &str) -> AppResult<Option<String>> {
            Err(AppError::storage_read_failed(
                HISTORY_KEY,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "存储不可用"),
            ))
        }

        fn write(&self, _key: &str, _value: &str) -> AppResult<()> {
            Err(AppError::storage_write_failed(
                HISTORY_KEY,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "存储不可用"),
            ))
        }

        fn erase(&self, _key: &str) -> AppResult<()> {
            Err(AppError::storage_erase_failed(
                HISTORY_KEY,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "存储不可用"),
            ))
        }
    }

    #[test]
    fn test_missing_storage_loads_empty() {
        let service = HistoryService::new(Arc::new(MemoryStore::new()));
        assert!(service.entries().is_empty());
    }

    #[test]
    fn test_corrupt_storage_loads_empty() {
        let store = MemoryStore::new();
        store.write(HISTORY_KEY, "not valid json {{{").unwrap();

        let service = HistoryService::new(Arc::new(store));
        assert!(service.entries().is_empty());
    }

    #[test]
    fn test_record_prepends_newest() {
        let service = HistoryService::new(Arc::new(MemoryStore::new()));
        service.record("integrate x**2");
        let entries = service.record("derivative sin(x) * x");

        assert_eq!(entries, vec!["derivative sin(x) * x", "integrate x**2"]);
    }

    #[test]
    fn test_record_deduplicates_and_moves_to_front() {
        let service = HistoryService::new(Arc::new(MemoryStore::new()));
        service.record("x**2 - 9 = 0");
        service.record("sphere radius 5");
        let entries = service.record("x**2 - 9 = 0");

        assert_eq!(entries, vec!["x**2 - 9 = 0", "sphere radius 5"]);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_dedup_is_exact_match_only() {
        // 区分大小写和空白，不做规范化
        let service = HistoryService::new(Arc::new(MemoryStore::new()));
        service.record("sphere radius 5");
        let entries = service.record("Sphere radius 5 ");

        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let service = HistoryService::new(Arc::new(MemoryStore::new()));
        for i in 1..=16 {
            service.record(&format!("query {}", i));
        }

        let entries = service.entries();
        assert_eq!(entries.len(), HISTORY_CAPACITY);
        assert_eq!(entries[0], "query 16");
        assert_eq!(entries[14], "query 2");
        assert!(!entries.contains(&"query 1".to_string()));
    }

    #[test]
    fn test_record_persists_full_list() {
        let store = Arc::new(MemoryStore::new());
        let service = HistoryService::new(store.clone());
        service.record("hypotenuse sides 3 4");
        service.record("integrate cos(x)");
        drop(service);

        // 新会话从同一份存储恢复
        let restored = HistoryService::new(store);
        assert_eq!(
            restored.entries(),
            vec!["integrate cos(x)", "hypotenuse sides 3 4"]
        );
    }

    #[test]
    fn test_overlong_persisted_list_is_truncated_on_load() {
        let store = MemoryStore::new();
        let oversized: Vec<String> = (0..20).map(|i| format!("query {}", i)).collect();
        store
            .write(HISTORY_KEY, &serde_json::to_string(&oversized).unwrap())
            .unwrap();

        let service = HistoryService::new(Arc::new(store));
        assert_eq!(service.entries().len(), HISTORY_CAPACITY);
    }

    #[test]
    fn test_clear_erases_stored_key() {
        let store = Arc::new(MemoryStore::new());
        let service = HistoryService::new(store.clone());
        service.record("x**3 - x = 0");
        assert!(store.contains_key(HISTORY_KEY));

        let cleared = service.clear();
        assert!(cleared.is_empty());
        assert!(service.entries().is_empty());
        // 键被彻底删除，而不是留下一个空值
        assert!(!store.contains_key(HISTORY_KEY));

        // 新会话加载到的同样是空历史
        drop(service);
        let fresh = HistoryService::new(store);
        assert!(fresh.entries().is_empty());
    }

    #[test]
    fn test_broken_storage_never_surfaces() {
        // 读写删全部失败：加载得到空列表，record/clear 照常工作
        let service = HistoryService::new(Arc::new(BrokenStore));
        assert!(service.entries().is_empty());

        let entries = service.record("expand (x+1)*(x-1)");
        assert_eq!(entries, vec!["expand (x+1)*(x-1)"]);

        let cleared = service.clear();
        assert!(cleared.is_empty());
    }
}
