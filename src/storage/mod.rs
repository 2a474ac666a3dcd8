//! 持久化存储 - 基础设施层
//!
//! 只暴露"按键读写"能力，不关心存的是什么

pub mod file_store;
pub mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

use crate::error::AppResult;

/// 键值存储能力
///
/// 历史记录等客户端状态的持久化入口。以注入方式使用，
/// 测试中可替换为内存实现。
pub trait KeyValueStore: Send + Sync {
    /// 读取键对应的值；键不存在返回 `Ok(None)`
    fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// 写入键值，覆盖已有值
    fn write(&self, key: &str, value: &str) -> AppResult<()>;

    /// 彻底删除键（而非写入空值），键不存在视为成功
    fn erase(&self, key: &str) -> AppResult<()>;
}
