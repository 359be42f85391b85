//! rswikifmt - wiki 语法格式引擎
//! 为编辑器高亮、增量重算与HTML导出提供统一的片段分类能力

// 导出全局错误类型
pub use self::error::{WikiFmtError, WfResult};

// 导出配置模块
pub use self::config::{EngineConfig, ConfigManager, CustomConfigBuilder};

// 导出语法模块核心接口
pub use self::syntax::{
    FormatType, Rule, ScanMode, SpanMatch, StyleFaces, WikiSyntax,
    DialectLoader, RuleSet,
};

// 导出编译模块核心接口
pub use self::compiler::{
    CompiledMatcher, CompiledModeSet, CompiledSyntaxSet, StyleGroup, RuleCompiler,
};

// 导出工具模块核心接口
pub use self::utils::{WikiWordNormalizer, StyleAttrs, StyleConverter};

// 导出格式模块核心接口（含兼容原有调用的简化接口）
pub use self::formatter::{
    FormatEngine,
    SpanClassifier,
    SpanIter,
    StyleMapper,
    init_wiki_format,
    init_wiki_format_with_config,
    init_wiki_format_with_syntax,
    find_next_span,
    scan_spans,
    token_at,
    get_styles,
    is_wiki_word,
    normalize_wiki_word,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod syntax;
pub mod compiler;
pub mod formatter;
pub mod utils;
