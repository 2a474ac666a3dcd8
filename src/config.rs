/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 求解服务基础URL
    pub solver_base_url: String,
    /// 本地存储目录（历史记录等持久化数据）
    pub storage_dir: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            solver_base_url: "http://127.0.0.1:8000".to_string(),
            storage_dir: ".math_tutor".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            solver_base_url: std::env::var("SOLVER_BASE_URL").unwrap_or(default.solver_base_url),
            storage_dir: std::env::var("STORAGE_DIR").unwrap_or(default.storage_dir),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
