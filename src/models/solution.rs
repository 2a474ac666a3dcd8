use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 求解请求体
///
/// POST /solve 的请求载荷，`problem` 为去除首尾空白后的查询串
#[derive(Debug, Clone, Serialize)]
pub struct SolveRequest<'a> {
    pub problem: &'a str,
}

/// 求解结果
///
/// 求解服务返回的结构化解答：
/// - `solution_latex`: 最终答案（块级数学标记）
/// - `steps`: 解题步骤原始文本列表（可缺省）
/// - `plot_data`: 可选的交互式绘图数据，本模块只透传不解释
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub solution_latex: String,
    #[serde(default)]
    pub steps: Option<Vec<String>>,
    #[serde(rename = "plotData", default)]
    pub plot_data: Option<PlotData>,
}

/// 绘图数据（序列 + 布局提示）
///
/// 内容对本模块不透明，原样交给绘图渲染器
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    pub data: Vec<Value>,
    pub layout: Value,
}
