//! 格式引擎核心：整合方言加载与规则编译，输出片段分类结果
use std::sync::Arc;

use tracing::debug;

use super::classifier::{SpanClassifier, SpanIter};
use super::styles::StyleMapper;
use crate::compiler::{CompiledSyntaxSet, RuleCompiler};
use crate::syntax::{DialectLoader, FormatType, ScanMode, SpanMatch, StyleFaces, WikiSyntax};
use crate::utils::WikiWordNormalizer;
use crate::error::{WfResult, WikiFmtError};
use crate::config::EngineConfig;

/// 格式引擎
/// 持有一个方言的全部编译状态；更换方言即重建引擎，不做增量修补
#[derive(Debug, Clone)]
pub struct FormatEngine {
    compiled: Arc<CompiledSyntaxSet>,
    syntax: Arc<WikiSyntax>,
    config: EngineConfig,
}

impl FormatEngine {
    /// 创建引擎（按配置加载方言）
    pub fn new(config: EngineConfig) -> WfResult<Self> {
        // 1. 加载方言定义
        let syntax = DialectLoader::load(&config)?;

        // 2. 编译语法集
        Self::with_syntax(syntax, config)
    }

    /// 以给定方言定义创建引擎
    /// 任一模式编译失败即返回错误，不会产生半编译状态的引擎
    pub fn with_syntax(syntax: WikiSyntax, config: EngineConfig) -> WfResult<Self> {
        let compiled = RuleCompiler::compile(&syntax)?;

        if config.verbose {
            debug!("格式引擎构建完成，方言：{}", syntax.name);
        }

        Ok(Self {
            compiled: Arc::new(compiled),
            syntax: Arc::new(syntax),
            config,
        })
    }

    /// 当前生效的方言定义
    pub fn syntax(&self) -> &WikiSyntax {
        &self.syntax
    }

    /// 核心分类接口：查找起始偏移不小于 start 的下一个命中片段
    /// `Ok(None)` 为一等结果，表示该偏移之后不再有可标记片段
    pub fn find_next(
        &self,
        text: &str,
        start: usize,
        mode: ScanMode,
        include_camel_case: bool,
    ) -> WfResult<Option<SpanMatch>> {
        let matcher = self.compiled.mode_set(mode).select(include_camel_case);
        SpanClassifier::find_next(matcher, text, start)
    }

    /// 从偏移0开始的前向扫描迭代器
    pub fn spans<'a>(
        &'a self,
        text: &'a str,
        mode: ScanMode,
        include_camel_case: bool,
    ) -> SpanIter<'a> {
        let matcher = self.compiled.mode_set(mode).select(include_camel_case);
        SpanIter::new(matcher, text)
    }

    /// 一次性扫描整段文本的全部片段
    pub fn scan(&self, text: &str, mode: ScanMode, include_camel_case: bool) -> Vec<SpanMatch> {
        self.spans(text, mode, include_camel_case).collect()
    }

    /// 查找覆盖指定位置的片段（编辑器解析光标下token用）
    pub fn token_at(
        &self,
        text: &str,
        pos: usize,
        mode: ScanMode,
    ) -> WfResult<Option<SpanMatch>> {
        if pos > text.len() {
            return Err(WikiFmtError::InvalidInput(format!(
                "位置 {} 超出文本长度 {}",
                pos,
                text.len()
            )));
        }
        if !text.is_char_boundary(pos) {
            return Err(WikiFmtError::CannotClassify { offset: pos });
        }

        // 多行片段（脚本/抑制区域）可能早于所在行开始，从头前向扫描
        for span in self.spans(text, mode, true) {
            if span.start > pos {
                break;
            }
            if pos < span.end {
                return Ok(Some(span));
            }
        }
        Ok(None)
    }

    /// 样式映射：按字体参数生成（分类，样式描述串）有序列表
    pub fn get_styles(&self, faces: &StyleFaces) -> Vec<(FormatType, String)> {
        StyleMapper::get_styles(faces)
    }

    /// 按配置中的默认字体参数生成样式映射
    pub fn default_styles(&self) -> Vec<(FormatType, String)> {
        StyleMapper::get_styles(&self.config.faces)
    }

    /// 判定token是否为 wiki 词
    pub fn is_wiki_word(&self, token: &str) -> bool {
        WikiWordNormalizer::is_wiki_word(&self.compiled, token)
    }

    /// 将token规范化为合法 wiki 词
    pub fn normalize_wiki_word(&self, token: &str) -> Option<String> {
        WikiWordNormalizer::normalize(&self.compiled, token)
    }
}

// 对外暴露的简化接口（兼容经全局引擎的调用方式）
pub fn find_next_span(
    text: &str,
    start: usize,
    mode: ScanMode,
    include_camel_case: bool,
) -> WfResult<Option<SpanMatch>> {
    let engine = super::global::get_global_engine()?;
    engine.find_next(text, start, mode, include_camel_case)
}

pub fn scan_spans(
    text: &str,
    mode: ScanMode,
    include_camel_case: bool,
) -> WfResult<Vec<SpanMatch>> {
    let engine = super::global::get_global_engine()?;
    Ok(engine.scan(text, mode, include_camel_case))
}

pub fn token_at(text: &str, pos: usize, mode: ScanMode) -> WfResult<Option<SpanMatch>> {
    let engine = super::global::get_global_engine()?;
    engine.token_at(text, pos, mode)
}

pub fn get_styles(faces: &StyleFaces) -> WfResult<Vec<(FormatType, String)>> {
    let engine = super::global::get_global_engine()?;
    Ok(engine.get_styles(faces))
}

pub fn is_wiki_word(token: &str) -> WfResult<bool> {
    let engine = super::global::get_global_engine()?;
    Ok(engine.is_wiki_word(token))
}

pub fn normalize_wiki_word(token: &str) -> WfResult<Option<String>> {
    let engine = super::global::get_global_engine()?;
    Ok(engine.normalize_wiki_word(token))
}
