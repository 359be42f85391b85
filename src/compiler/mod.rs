//! 编译模块：负责规则列表到组合正则匹配器的编译
pub mod pattern;
pub mod compiler;

// 导出核心接口
pub use self::pattern::{CompiledMatcher, CompiledModeSet, CompiledSyntaxSet, StyleGroup};
pub use self::compiler::RuleCompiler;
