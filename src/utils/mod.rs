//! 工具模块：wiki 词规范化、样式描述串转换
pub mod wiki_word;
pub mod style_parser;

// 导出核心接口
pub use self::wiki_word::WikiWordNormalizer;
pub use self::style_parser::{StyleAttrs, StyleConverter};
