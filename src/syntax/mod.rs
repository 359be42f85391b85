//! 语法模块：负责方言的加载、规则列表组织、数据模型定义
pub mod model;
pub mod dialect;
pub mod rules;

// 导出核心接口
pub use self::model::{
    FormatType, Rule, ScanMode, SpanMatch, StyleFaces, WikiSyntax,
};
pub use self::dialect::DialectLoader;
pub use self::rules::RuleSet;
