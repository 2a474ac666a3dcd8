//! 步骤标记解析服务 - 业务能力层
//!
//! 只负责"把一条步骤文本切成带类型片段"能力，不关心流程
//!
//! 解析顺序：
//! 1. 按换行哨兵 `\\` 拆成子行
//! 2. 子行内先按 `**...**`（非贪婪、成对）切出强调跨度
//! 3. 剩余片段再按 `$` 切出行内数学跨度
//!
//! 强调切分先于数学切分，因此强调跨度内的 `$` 按字面文本保留，
//! 不再特殊处理。

use crate::models::Segment;
use regex::Regex;
use std::sync::OnceLock;

/// 换行哨兵：一条步骤内的子行分隔符（两个反斜杠字符）
const LINE_BREAK: &str = r"\\";

/// 成对的强调定界符模式，非贪婪匹配
fn bold_span_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("强调定界符模式是合法正则"))
}

/// 解析一条步骤文本
///
/// 纯函数，对任意输入（空串、残缺定界符）都产出尽力而为的切分，
/// 不会失败。外层序列是子行，内层序列是子行内的有序片段。
pub fn parse_step(step: &str) -> Vec<Vec<Segment>> {
    step.split(LINE_BREAK).map(parse_sub_line).collect()
}

/// 解析单个子行
fn parse_sub_line(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for span in bold_span_regex().find_iter(line) {
        if span.start() > last {
            split_math_fragment(&line[last..span.start()], &mut segments);
        }

        // 去掉前后各两个定界符字符
        let inner = &line[span.start() + 2..span.end() - 2];
        if inner.is_empty() {
            // `****` 没有内容，不构成强调跨度，按普通片段处理
            split_math_fragment(span.as_str(), &mut segments);
        } else {
            segments.push(Segment::Bold(inner.to_string()));
        }

        last = span.end();
    }

    if last < line.len() {
        split_math_fragment(&line[last..], &mut segments);
    }

    segments
}

/// 在非强调片段内切分行内数学跨度
///
/// 按字面 `$` 切分：偶数下标是普通文本，奇数下标是两个 `$`
/// 之间的数学内容。`$` 总数为奇数时，最后一段没有配对的
/// 结束定界符，按普通文本处理而不是丢弃。
/// 零长度片段一律不产出。
fn split_math_fragment(fragment: &str, out: &mut Vec<Segment>) {
    let pieces: Vec<&str> = fragment.split('$').collect();

    // 定界符个数 = pieces.len() - 1，为奇数时尾段未配对
    let unmatched_tail = pieces.len() % 2 == 0;
    let last_index = pieces.len() - 1;

    for (i, piece) in pieces.iter().enumerate() {
        if piece.is_empty() {
            continue;
        }
        if i % 2 == 1 && !(unmatched_tail && i == last_index) {
            out.push(Segment::Math((*piece).to_string()));
        } else {
            out.push(Segment::Text((*piece).to_string()));
        }
    }
}
