use crate::config::Config;
/// 日志工具模块
///
/// 提供日志初始化和格式化辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 由宿主应用壳在启动时调用一次；重复调用是无害的空操作
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录会话启动信息
///
/// # 参数
/// - `config`: 当前配置
pub fn log_session_start(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 会话启动 - 数学辅导求解客户端");
    info!("📡 求解服务: {}", config.solver_base_url);
    info!(
        "🕐 启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
