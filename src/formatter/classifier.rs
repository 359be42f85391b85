//! 片段分类器：在指定偏移之后查找下一个命中片段
use tracing::debug;

use crate::compiler::CompiledMatcher;
use crate::syntax::SpanMatch;
use crate::error::{WfResult, WikiFmtError};

/// 片段分类器
pub struct SpanClassifier;

impl SpanClassifier {
    /// 查找起始偏移不小于 start 的下一个命中片段
    ///
    /// 返回 `Ok(None)` 表示"从该偏移到文本末尾不再有可标记片段"，
    /// 是一等结果而非错误；调用方应据此停止扫描。
    /// 同一起点存在多个候选时，规则列表靠前者获胜（交替顺序即优先级）。
    pub fn find_next(
        matcher: &CompiledMatcher,
        text: &str,
        start: usize,
    ) -> WfResult<Option<SpanMatch>> {
        // 1. 偏移校验：越界为无效输入，非字符边界为"无法分类"
        if start > text.len() {
            return Err(WikiFmtError::InvalidInput(format!(
                "起始偏移 {} 超出文本长度 {}",
                start,
                text.len()
            )));
        }
        if !text.is_char_boundary(start) {
            return Err(WikiFmtError::CannotClassify { offset: start });
        }

        // 2. 组合正则求值（最左命中）
        let Some(caps) = matcher.regex.captures_at(text, start) else {
            return Ok(None);
        };

        // 3. 按显式分组表分发分类
        let Some((format, m)) = matcher.dispatch(&caps) else {
            return Ok(None);
        };

        debug!("片段命中：分类={}，区间={}..{}", format, m.start(), m.end());

        Ok(Some(SpanMatch {
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_string(),
            format,
        }))
    }
}

/// 可重入的前向扫描迭代器
/// 从偏移0开始依次产出全部片段；只向前推进，不回溯到更早的偏移。
/// 对零宽命中至少前进一个字符，保证任意有限文本上有限步终止。
pub struct SpanIter<'a> {
    matcher: &'a CompiledMatcher,
    text: &'a str,
    pos: usize,
}

impl<'a> SpanIter<'a> {
    pub(crate) fn new(matcher: &'a CompiledMatcher, text: &'a str) -> Self {
        Self {
            matcher,
            text,
            pos: 0,
        }
    }
}

impl<'a> Iterator for SpanIter<'a> {
    type Item = SpanMatch;

    fn next(&mut self) -> Option<SpanMatch> {
        if self.pos > self.text.len() {
            return None;
        }

        let caps = self.matcher.regex.captures_at(self.text, self.pos)?;
        let (format, m) = self.matcher.dispatch(&caps)?;

        // 推进扫描位置：零宽命中时强制跨过一个字符
        self.pos = if m.end() > m.start() {
            m.end()
        } else {
            match self.text[m.end()..].chars().next() {
                Some(c) => m.end() + c.len_utf8(),
                None => self.text.len() + 1,
            }
        };

        Some(SpanMatch {
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_string(),
            format,
        })
    }
}
