//! 全局格式引擎管理
//! 初始化调用整体替换引擎实例（切换方言的唯一途径）；在途扫描经由
//! 自身持有的 Arc 引用继续使用旧引擎，替换不会改写扫描中的匹配器

use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

use super::engine::FormatEngine;
use crate::error::{WfResult, WikiFmtError};
use crate::config::{ConfigManager, EngineConfig};
use crate::syntax::WikiSyntax;

/// 全局引擎实例
static GLOBAL_ENGINE: Lazy<RwLock<Option<Arc<FormatEngine>>>> =
    Lazy::new(|| RwLock::new(None));

/// 初始化全局引擎（默认配置）
pub fn init_wiki_format() -> WfResult<()> {
    init_wiki_format_with_config(ConfigManager::get_default())
}

/// 带自定义配置初始化全局引擎
pub fn init_wiki_format_with_config(config: EngineConfig) -> WfResult<()> {
    let engine = FormatEngine::new(config)?;
    replace_global(engine)
}

/// 以给定方言定义初始化全局引擎
pub fn init_wiki_format_with_syntax(syntax: WikiSyntax, config: EngineConfig) -> WfResult<()> {
    let engine = FormatEngine::with_syntax(syntax, config)?;
    replace_global(engine)
}

/// 整体替换全局引擎
/// 先完整构建再替换：构建失败时旧引擎保持生效，不产生半编译状态
fn replace_global(engine: FormatEngine) -> WfResult<()> {
    let mut slot = GLOBAL_ENGINE
        .write()
        .map_err(|e| WikiFmtError::EngineStateError(e.to_string()))?;
    *slot = Some(Arc::new(engine));
    Ok(())
}

/// 获取全局引擎
pub(crate) fn get_global_engine() -> WfResult<Arc<FormatEngine>> {
    let slot = GLOBAL_ENGINE
        .read()
        .map_err(|e| WikiFmtError::EngineStateError(e.to_string()))?;
    slot.clone().ok_or(WikiFmtError::EngineNotInitialized)
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::engine::{
        find_next_span, get_styles, is_wiki_word, normalize_wiki_word, scan_spans, token_at,
    };
    use crate::syntax::{DialectLoader, FormatType, ScanMode, StyleFaces};

    // 全局状态只在本测试内使用，串联验证：未初始化报错 -> 初始化 -> 切换方言整体替换
    #[test]
    fn test_global_engine_lifecycle() {
        // 1. 未初始化时所有简化接口报错
        let err = find_next_span("text", 0, ScanMode::Highlight, true).unwrap_err();
        assert!(matches!(err, WikiFmtError::EngineNotInitialized));

        // 2. 默认初始化后可用
        init_wiki_format().unwrap();
        let span = find_next_span("see https://example.org", 0, ScanMode::Highlight, true)
            .unwrap()
            .unwrap();
        assert_eq!(span.format, FormatType::Url);
        assert!(is_wiki_word("WikiWord").unwrap());
        assert_eq!(
            normalize_wiki_word("[WikiWord]").unwrap(),
            Some("WikiWord".to_string())
        );
        let spans = scan_spans("todo: CleanUp", ScanMode::Highlight, true).unwrap();
        assert_eq!(spans.len(), 2);
        let under_cursor = token_at("see CamelWord", 6, ScanMode::Highlight)
            .unwrap()
            .unwrap();
        assert_eq!(under_cursor.format, FormatType::WikiWord);
        assert_eq!(get_styles(&StyleFaces::default()).unwrap().len(), 13);

        // 3. 切换方言：旧方言的URL模式在新方言下不再命中
        let mut syntax = DialectLoader::builtin();
        syntax.name = "zz-only".to_string();
        syntax.url = r"zz://[^\s]+".to_string();
        init_wiki_format_with_syntax(syntax, ConfigManager::get_default()).unwrap();

        let after = find_next_span("see https://example.org", 0, ScanMode::Highlight, true).unwrap();
        assert!(after.is_none());
        let zz = find_next_span("zz://page", 0, ScanMode::Highlight, true)
            .unwrap()
            .unwrap();
        assert_eq!(zz.format, FormatType::Url);

        // 4. 再次初始化恢复默认方言（完整替换，无残留）
        init_wiki_format().unwrap();
        assert!(
            find_next_span("see https://example.org", 0, ScanMode::Highlight, true)
                .unwrap()
                .is_some()
        );
    }
}
