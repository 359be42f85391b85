//! 格式模块：片段分类、样式映射、引擎实例与全局引擎管理
pub mod classifier;
pub mod engine;
pub mod global;
pub mod styles;

// 导出核心接口（含兼容原有调用的简化接口）
pub use self::classifier::{SpanClassifier, SpanIter};
pub use self::engine::{
    FormatEngine,
    find_next_span,
    scan_spans,
    token_at,
    get_styles,
    is_wiki_word,
    normalize_wiki_word,
};
pub use self::global::{
    init_wiki_format,
    init_wiki_format_with_config,
    init_wiki_format_with_syntax,
};
pub use self::styles::StyleMapper;
