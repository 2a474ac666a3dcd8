use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 求解服务调用错误
    Solver(SolverError),
    /// 本地存储错误
    Storage(StorageError),
    /// 配置错误
    Config(ConfigError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Solver(e) => write!(f, "求解服务错误: {}", e),
            AppError::Storage(e) => write!(f, "存储错误: {}", e),
            AppError::Config(e) => write!(f, "配置错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Solver(e) => Some(e),
            AppError::Storage(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 求解服务调用错误
///
/// 传输层失败（网络不可达）和协议层失败（错误状态码、响应体不合法）
/// 分为不同变体，便于内部诊断；对用户展示时不作区分。
#[derive(Debug)]
pub enum SolverError {
    /// 网络请求失败（连接失败等传输层错误）
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 服务返回非成功状态码
    BadStatus {
        endpoint: String,
        status: u16,
    },
    /// 响应体 JSON 解析失败
    JsonParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::RequestFailed { endpoint, source } => {
                write!(f, "请求失败 ({}): {}", endpoint, source)
            }
            SolverError::BadStatus { endpoint, status } => {
                write!(f, "服务返回错误状态 ({}): HTTP {}", endpoint, status)
            }
            SolverError::JsonParseFailed { source } => {
                write!(f, "响应解析失败: {}", source)
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolverError::RequestFailed { source, .. }
            | SolverError::JsonParseFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

impl SolverError {
    /// 是否为传输层失败（而非协议层失败）
    pub fn is_transport(&self) -> bool {
        matches!(self, SolverError::RequestFailed { .. })
    }
}

/// 本地存储错误
///
/// 历史记录持久化的读写失败。这类错误只记录日志，不向用户展示。
#[derive(Debug)]
pub enum StorageError {
    /// 读取失败
    ReadFailed {
        key: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入失败
    WriteFailed {
        key: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 删除失败
    EraseFailed {
        key: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed { key, source } => {
                write!(f, "读取存储失败 (键: {}): {}", key, source)
            }
            StorageError::WriteFailed { key, source } => {
                write!(f, "写入存储失败 (键: {}): {}", key, source)
            }
            StorageError::EraseFailed { key, source } => {
                write!(f, "删除存储失败 (键: {}): {}", key, source)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::ReadFailed { source, .. }
            | StorageError::WriteFailed { source, .. }
            | StorageError::EraseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 环境变量解析失败
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EnvVarParseFailed {
                var_name,
                value,
                expected_type,
            } => {
                write!(
                    f,
                    "环境变量 {} 解析失败: 值 '{}' 无法转换为 {}",
                    var_name, value, expected_type
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Solver(SolverError::JsonParseFailed {
            source: Box::new(err),
        })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Other(err.to_string())
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建求解请求失败错误（传输层）
    pub fn solver_request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Solver(SolverError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建错误状态码错误（协议层）
    pub fn solver_bad_status(endpoint: impl Into<String>, status: u16) -> Self {
        AppError::Solver(SolverError::BadStatus {
            endpoint: endpoint.into(),
            status,
        })
    }

    /// 创建响应解析失败错误（协议层）
    pub fn solver_json_failed(
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Solver(SolverError::JsonParseFailed {
            source: Box::new(source),
        })
    }

    /// 创建存储读取失败错误
    pub fn storage_read_failed(
        key: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Storage(StorageError::ReadFailed {
            key: key.into(),
            source: Box::new(source),
        })
    }

    /// 创建存储写入失败错误
    pub fn storage_write_failed(
        key: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Storage(StorageError::WriteFailed {
            key: key.into(),
            source: Box::new(source),
        })
    }

    /// 创建存储删除失败错误
    pub fn storage_erase_failed(
        key: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Storage(StorageError::EraseFailed {
            key: key.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
