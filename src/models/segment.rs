/// 步骤文本片段
///
/// 解析一行步骤文本得到的带类型片段，按顺序排列后即可还原原始含义：
/// - `Text`: 普通文本
/// - `Bold`: `**...**` 包裹的强调文本（已去除定界符）
/// - `Math`: `$...$` 包裹的行内数学标记（已去除定界符）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Bold(String),
    Math(String),
}

impl Segment {
    /// 片段的底层文本内容
    pub fn content(&self) -> &str {
        match self {
            Segment::Text(s) | Segment::Bold(s) | Segment::Math(s) => s,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Segment::Text(s.into())
    }

    pub fn bold(s: impl Into<String>) -> Self {
        Segment::Bold(s.into())
    }

    pub fn math(s: impl Into<String>) -> Self {
        Segment::Math(s.into())
    }
}
