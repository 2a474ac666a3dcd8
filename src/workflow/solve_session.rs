//! 求解会话 - 流程层
//!
//! 核心职责：管理一次求解的完整生命周期
//!
//! 阶段顺序：Idle → Pending → Succeeded / Failed
//!
//! - 提交后立即进入 Pending，清掉上一次的结果或错误
//! - 单次出站请求即权威结果，不超时、不重试
//! - 成功后通知历史记录服务，再对外暴露结果
//! - Pending 期间的新提交被直接忽略，保证同时至多一个在途请求

use crate::clients::SolverClient;
use crate::config::Config;
use crate::models::Solution;
use crate::services::HistoryService;
use crate::storage::{FileStore, KeyValueStore};
use crate::utils::logging::truncate_text;
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info};

/// 求解生命周期阶段
///
/// 任一时刻恰有一个阶段生效；进入 Pending 即丢弃之前的结果和错误，
/// 错误与旧结果绝不同时可见。
#[derive(Debug, Clone, PartialEq)]
pub enum SolvePhase {
    /// 空闲，尚无提交
    Idle,
    /// 求解请求在途
    Pending,
    /// 求解成功，携带结构化结果
    Succeeded(Solution),
    /// 求解失败，携带用户可读的错误消息
    Failed(String),
}

impl SolvePhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, SolvePhase::Pending)
    }
}

/// 取不到错误描述时的兜底文案（与渲染壳约定保持一致）
const GENERIC_FAILURE_MESSAGE: &str = "Connection to Solver Engine failed.";

/// 求解会话
///
/// - 持有求解客户端与历史记录服务
/// - 阶段变更只发生在 `submit` 这一个入口
/// - 渲染壳通过 `subscribe` 订阅阶段变化，或用 `phase` 取快照
pub struct SolveSession {
    client: SolverClient,
    history: HistoryService,
    phase_tx: watch::Sender<SolvePhase>,
    verbose_logging: bool,
}

impl SolveSession {
    /// 初始化会话（文件存储）
    ///
    /// 使用配置的存储目录持久化历史记录
    pub fn initialize(config: Config) -> Result<Self> {
        std::fs::create_dir_all(&config.storage_dir)
            .with_context(|| format!("无法创建存储目录: {}", config.storage_dir))?;

        crate::utils::logging::log_session_start(&config);

        let store = Arc::new(FileStore::new(&config.storage_dir));
        Ok(Self::with_store(&config, store))
    }

    /// 使用注入的存储能力创建会话
    ///
    /// 测试中传入内存存储即可完全脱离文件系统
    pub fn with_store(config: &Config, store: Arc<dyn KeyValueStore>) -> Self {
        let (phase_tx, _) = watch::channel(SolvePhase::Idle);
        Self {
            client: SolverClient::new(config),
            history: HistoryService::new(store),
            phase_tx,
            verbose_logging: config.verbose_logging,
        }
    }

    /// 订阅阶段变化
    pub fn subscribe(&self) -> watch::Receiver<SolvePhase> {
        self.phase_tx.subscribe()
    }

    /// 当前阶段快照
    pub fn phase(&self) -> SolvePhase {
        self.phase_tx.borrow().clone()
    }

    /// 当前历史列表快照（最新在前）
    pub fn history(&self) -> Vec<String> {
        self.history.entries()
    }

    /// 清空历史记录
    pub fn clear_history(&self) -> Vec<String> {
        info!("🧹 清空历史记录");
        self.history.clear()
    }

    /// 提交一次求解
    ///
    /// 空白查询是无操作；Pending 期间的提交被忽略。
    /// 其余情况严格按 Pending → Succeeded/Failed 推进阶段，
    /// 成功时以原始查询串通知历史记录服务。
    pub async fn submit(&self, query: &str) {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            debug!("查询为空白，忽略本次提交");
            return;
        }

        if self.phase_tx.borrow().is_pending() {
            info!(
                "⏳ 已有求解在途，忽略新的提交: {}",
                truncate_text(trimmed, 40)
            );
            return;
        }

        info!("🚀 开始求解: {}", truncate_text(trimmed, 80));
        self.phase_tx.send_replace(SolvePhase::Pending);

        match self.client.solve(trimmed).await {
            Ok(solution) => {
                let entries = self.history.record(query);
                if self.verbose_logging {
                    debug!("历史记录共 {} 条", entries.len());
                }

                info!(
                    "✅ 求解成功: {}",
                    truncate_text(&solution.solution_latex, 80)
                );
                self.phase_tx.send_replace(SolvePhase::Succeeded(solution));
            }
            Err(e) => {
                error!("❌ 求解失败: {}", e);
                self.phase_tx
                    .send_replace(SolvePhase::Failed(failure_message(&e.to_string())));
            }
        }
    }
}

/// 由错误描述派生用户可读的失败消息
///
/// 有描述时展示描述，否则退回兜底文案
fn failure_message(description: &str) -> String {
    if description.trim().is_empty() {
        GENERIC_FAILURE_MESSAGE.to_string()
    } else {
        format!("Error: {}", description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::storage::MemoryStore;

    fn unreachable_session() -> SolveSession {
        // 端口 1 无服务监听，必然连接失败
        let config = Config {
            solver_base_url: "http://127.0.0.1:1".to_string(),
            ..Config::default()
        };
        SolveSession::with_store(&config, Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_initial_phase_is_idle() {
        let session = unreachable_session();
        assert_eq!(session.phase(), SolvePhase::Idle);
    }

    #[test]
    fn test_blank_query_is_noop() {
        let session = unreachable_session();
        tokio_test::block_on(async {
            session.submit("").await;
            session.submit("   ").await;
            session.submit("\t\n").await;
        });

        // 阶段不变，历史不变
        assert_eq!(session.phase(), SolvePhase::Idle);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_transport_failure_surfaces_as_failed() {
        let session = unreachable_session();
        tokio_test::block_on(session.submit("x**2 - 9 = 0"));

        match session.phase() {
            SolvePhase::Failed(message) => {
                assert!(!message.is_empty());
                assert!(message.starts_with("Error: "));
            }
            other => panic!("期望 Failed，实际: {:?}", other),
        }
        // 失败不写历史
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_failure_message_falls_back_when_empty() {
        assert_eq!(failure_message(""), GENERIC_FAILURE_MESSAGE);
        assert_eq!(failure_message("   "), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_failure_message_uses_description() {
        let err = AppError::solver_bad_status("http://127.0.0.1:8000/solve", 500);
        let message = failure_message(&err.to_string());
        assert!(message.starts_with("Error: "));
        assert!(message.contains("500"));
    }

    #[test]
    fn test_subscriber_observes_pending_before_failed() {
        let session = unreachable_session();
        let mut rx = session.subscribe();

        tokio_test::block_on(async {
            let submit = session.submit("sphere radius 5");
            tokio::pin!(submit);

            // 提交进入 Pending 后才会等待网络，订阅端先看到 Pending
            let mut saw_pending = false;
            loop {
                tokio::select! {
                    _ = &mut submit => break,
                    changed = rx.changed() => {
                        changed.unwrap();
                        if rx.borrow().is_pending() {
                            saw_pending = true;
                        }
                    }
                }
            }
            assert!(saw_pending, "订阅端应先观察到 Pending");
        });

        assert!(matches!(session.phase(), SolvePhase::Failed(_)));
    }
}
