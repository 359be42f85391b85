//! 语法数据模型定义
//! 仅存储方言与分类数据，无任何业务逻辑，支持序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

/// 格式分类：每个片段有且仅有一个分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatType {
    /// 默认文本（含脚注等不参与样式的命中）
    Default,
    /// 方括号形式的 wiki 词（[括号词]）
    WikiWord2,
    /// 驼峰形式的 wiki 词（CamelCase）
    WikiWord,
    /// 已存在目标页面的 wiki 词（仅用于样式映射）
    AvailWikiWord,
    Bold,
    Italic,
    Heading4,
    Heading3,
    Heading2,
    Heading1,
    Url,
    Script,
    Property,
    ToDo,
    HorizLine,
    Bullet,
    Numeric,
    /// 抑制区域（导出时丢弃内容）
    Suppress,
}

// ======== 为 FormatType 实现 Display trait（用于日志输出） ========
impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatType::Default => "Default",
            FormatType::WikiWord2 => "WikiWord2",
            FormatType::WikiWord => "WikiWord",
            FormatType::AvailWikiWord => "AvailWikiWord",
            FormatType::Bold => "Bold",
            FormatType::Italic => "Italic",
            FormatType::Heading4 => "Heading4",
            FormatType::Heading3 => "Heading3",
            FormatType::Heading2 => "Heading2",
            FormatType::Heading1 => "Heading1",
            FormatType::Url => "Url",
            FormatType::Script => "Script",
            FormatType::Property => "Property",
            FormatType::ToDo => "ToDo",
            FormatType::HorizLine => "HorizLine",
            FormatType::Bullet => "Bullet",
            FormatType::Numeric => "Numeric",
            FormatType::Suppress => "Suppress",
        };
        write!(f, "{}", name)
    }
}

/// 扫描模式：三类消费方各对应一套规则列表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanMode {
    /// 编辑器交互式语法高亮
    Highlight,
    /// 编辑后的增量重算
    Update,
    /// 静态HTML导出
    Export,
}

// ======== 为 ScanMode 实现 Display trait（用于日志输出） ========
impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScanMode::Highlight => "Highlight",
            ScanMode::Update => "Update",
            ScanMode::Export => "Export",
        };
        write!(f, "{}", name)
    }
}

/// 单条规则：（原始正则模式，格式分类）
/// 列表中的顺序即优先级顺序，编译后保持不变
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub pattern: String,
    pub format: FormatType,
}

impl Rule {
    /// 从模式与分类快速创建
    pub fn new(pattern: impl Into<String>, format: FormatType) -> Self {
        Self {
            pattern: pattern.into(),
            format,
        }
    }
}

/// 单次分类结果：（起始偏移，结束偏移，命中文本，格式分类）
/// 偏移为字节偏移，区间为半开区间 start..end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanMatch {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub format: FormatType,
}

// ======== 为 SpanMatch 实现 Display trait（用于日志输出） ========
impl fmt::Display for SpanMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}] {}", self.start, self.end, self.format)
    }
}

/// 样式字体参数：仅用于样式映射（getStyles），不参与匹配
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleFaces {
    /// 等宽字体名称
    pub mono: String,
    /// 正文字号
    pub size: u32,
    pub heading4: u32,
    pub heading3: u32,
    pub heading2: u32,
    pub heading1: u32,
}

impl Default for StyleFaces {
    fn default() -> Self {
        Self {
            mono: "Courier New".to_string(),
            size: 10,
            heading4: 11,
            heading3: 12,
            heading2: 14,
            heading1: 16,
        }
    }
}

/// Wiki方言定义：每个槽位一条原始正则模式
/// 模式在编译期之后不再变更；更换方言需重新初始化引擎
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiSyntax {
    /// 方言名称（用于日志输出）
    #[serde(default)]
    pub name: String,

    // wiki 词模式
    /// 驼峰形式 wiki 词（"无驼峰"变体中唯一被剔除的规则）
    pub wiki_word: String,
    /// 方括号形式 wiki 词
    pub wiki_word_bracketed: String,
    /// 脚注引用（与方括号词形态重叠，优先级更高）
    pub footnote: String,

    // 行内模式
    pub url: String,
    pub script: String,
    pub bold: String,
    pub italic: String,
    pub property: String,

    // 行首锚定模式
    /// 待办标记（仅标记，高亮模式用）
    pub todo: String,
    /// 待办标记含内容（增量/导出模式用）
    pub todo_with_content: String,
    pub heading4: String,
    pub heading3: String,
    pub heading2: String,
    pub heading1: String,
    pub horiz_line: String,
    pub bullet: String,
    pub numeric_bullet: String,

    // 区域模式
    pub suppress: String,

    /// 方言自带的样式字体参数
    #[serde(default)]
    pub faces: StyleFaces,
}
