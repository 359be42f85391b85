//! 全局错误类型定义

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;

#[derive(Error, Debug)]
pub enum WikiFmtError {
    // 方言相关错误
    #[error("方言加载失败：{0}")]
    DialectLoadError(String),
    #[error("方言解析失败：{0}")]
    DialectParseError(#[from] SerdeJsonError),

    // 编译相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),
    #[error("编译初始化失败：{0}")]
    CompilerInitError(String),

    // 分类相关错误
    #[error("格式引擎未初始化")]
    EngineNotInitialized,
    #[error("引擎状态访问失败：{0}")]
    EngineStateError(String),
    #[error("无法分类：偏移 {offset} 不在字符边界上")]
    CannotClassify { offset: usize },

    // 基础错误
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type WfResult<T> = Result<T, WikiFmtError>;
