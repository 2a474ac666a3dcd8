//! # Math Tutor Client
//!
//! 交互式数学求解工具的客户端核心：接收用户的符号数学查询，
//! 提交到远端求解服务，并把返回的讲解（文本/标记/LaTeX 步骤、
//! 最终公式、可选交互式绘图）整理成可渲染的结构。页面布局与
//! 渲染本身由宿主应用壳负责，本 crate 不含进程入口。
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `clients/` - 求解服务 HTTP 客户端，只暴露 solve() 能力
//! - `storage/` - 键值持久化能力（文件实现 + 内存实现），以注入方式使用
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，不关心流程
//! - `HistoryService` - 有界、去重、持久化的历史记录能力
//! - `step_parser` - 步骤文本切分能力（纯函数）
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次求解"的完整生命周期
//! - `SolvePhase` - 阶段状态机（Idle → Pending → Succeeded/Failed）
//! - `SolveSession` - 流程编排（提交 → 请求 → 记录历史 → 暴露结果）
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod examples_bank;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::SolverClient;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use examples_bank::{find_category, ExampleCategory, EXAMPLE_CATEGORIES};
pub use models::{PlotData, Segment, Solution};
pub use services::{parse_step, HistoryService, HISTORY_CAPACITY, HISTORY_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use workflow::{SolvePhase, SolveSession};
