//! 求解服务客户端
//!
//! 封装所有与求解服务（Solver Engine）相关的调用逻辑

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{SolveRequest, Solution};
use tracing::debug;

/// 求解服务客户端
pub struct SolverClient {
    http: reqwest::Client,
    base_url: String,
}

impl SolverClient {
    /// 创建新的求解客户端
    ///
    /// 不设置客户端超时：单次请求即权威结果，等待时长由底层网络决定
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.solver_base_url.clone(),
        }
    }

    /// 提交问题求解
    ///
    /// # 参数
    /// - `problem`: 去除首尾空白后的查询串
    ///
    /// # 返回
    /// 返回结构化求解结果；传输失败、非 2xx 状态、响应体不合法
    /// 分别映射为对应错误变体
    pub async fn solve(&self, problem: &str) -> AppResult<Solution> {
        let endpoint = format!("{}/solve", self.base_url);

        debug!("提交求解请求 ({}): {}", endpoint, problem);

        let response = self
            .http
            .post(&endpoint)
            .json(&SolveRequest { problem })
            .send()
            .await
            .map_err(|e| AppError::solver_request_failed(&endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::solver_bad_status(&endpoint, status.as_u16()));
        }

        let solution: Solution = response
            .json()
            .await
            .map_err(|e| AppError::solver_json_failed(e))?;

        debug!("求解成功: {}", solution.solution_latex);

        Ok(solution)
    }

    /// 求解服务基础URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
