//! 编译后模式模型
//! 正则编译后的结构

use std::sync::Arc;
use regex::{Captures, Match, Regex};

use crate::syntax::{FormatType, ScanMode};

/// 交替分支中的单个样式分组
/// 分组名即模式内命名捕获组（style0、style1…），分类由显式表给出
#[derive(Debug, Clone)]
pub struct StyleGroup {
    pub name: String,
    pub format: FormatType,
}

/// 编译后的组合匹配器：单个交替正则 + 分组序号到分类的显式映射表
/// 表中顺序与编译期规则列表顺序一致，命中分发不依赖命名约定
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    pub regex: Regex,
    pub groups: Arc<Vec<StyleGroup>>,
}

impl CompiledMatcher {
    /// 根据捕获结果分发命中的分类
    /// 交替语义为"最左最先"，同一起点恰有一个样式分组参与匹配
    pub fn dispatch<'t>(&self, caps: &Captures<'t>) -> Option<(FormatType, Match<'t>)> {
        for group in self.groups.iter() {
            if let Some(m) = caps.name(&group.name) {
                return Some((group.format, m));
            }
        }
        None
    }

    /// 匹配器包含的规则数
    pub fn rule_count(&self) -> usize {
        self.groups.len()
    }
}

/// 单个模式的两个编译变体（含/不含驼峰词规则）
#[derive(Debug, Clone)]
pub struct CompiledModeSet {
    pub with_camel_case: CompiledMatcher,
    pub without_camel_case: CompiledMatcher,
}

impl CompiledModeSet {
    /// 按驼峰词开关选择变体
    pub fn select(&self, include_camel_case: bool) -> &CompiledMatcher {
        if include_camel_case {
            &self.with_camel_case
        } else {
            &self.without_camel_case
        }
    }
}

/// 编译后的完整语法集：3个模式 × 2个变体，外加规范化所需的整词锚定模式
#[derive(Debug, Clone)]
pub struct CompiledSyntaxSet {
    pub highlight: CompiledModeSet,
    pub update: CompiledModeSet,
    pub export: CompiledModeSet,

    // 整词锚定模式（\A…\z），仅供 wiki 词判定与规范化使用
    pub wiki_word_token: Regex,
    pub wiki_word_bracketed_token: Regex,
    pub footnote_token: Regex,
}

impl CompiledSyntaxSet {
    /// 按扫描模式取对应的变体对
    pub fn mode_set(&self, mode: ScanMode) -> &CompiledModeSet {
        match mode {
            ScanMode::Highlight => &self.highlight,
            ScanMode::Update => &self.update,
            ScanMode::Export => &self.export,
        }
    }
}
