//! 规则编译器核心
//! 仅负责将有序规则列表编译为可执行的组合正则匹配器

use std::sync::Arc;
use std::time::Instant;
use regex::Regex;
use tracing::debug;

use super::pattern::{CompiledMatcher, CompiledModeSet, CompiledSyntaxSet, StyleGroup};
use crate::syntax::{FormatType, Rule, RuleSet, ScanMode, WikiSyntax};
use crate::error::{WfResult, WikiFmtError};

// 组合正则的全局标志：. 跨行匹配、^/$ 按行锚定（Unicode类为 regex crate 默认行为）
const COMBINED_FLAGS: &str = "(?ms)";

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译完整语法集
    /// 任一模式编译失败即整体失败，引擎不会以半编译状态运行
    pub fn compile(syntax: &WikiSyntax) -> WfResult<CompiledSyntaxSet> {
        let start = Instant::now();
        let mut compile_stats = CompileStats::default();

        // 1. 编译三个模式（每模式两个变体）
        let highlight = Self::compile_mode(syntax, ScanMode::Highlight, &mut compile_stats)?;
        let update = Self::compile_mode(syntax, ScanMode::Update, &mut compile_stats)?;
        let export = Self::compile_mode(syntax, ScanMode::Export, &mut compile_stats)?;

        // 2. 编译规范化所需的整词锚定模式
        let wiki_word_token = Self::compile_token_pattern(&syntax.wiki_word)?;
        let wiki_word_bracketed_token = Self::compile_token_pattern(&syntax.wiki_word_bracketed)?;
        let footnote_token = Self::compile_token_pattern(&syntax.footnote)?;

        // 3. 输出编译统计
        let total_time = start.elapsed();
        debug!("✅ 方言[{}]编译完成，总耗时{:?}", syntax.name, total_time);
        debug!(
            "📊 编译统计：高亮模式{}条、增量模式{}条、导出模式{}条、整词模式3条",
            compile_stats.highlight_count,
            compile_stats.update_count,
            compile_stats.export_count
        );

        Ok(CompiledSyntaxSet {
            highlight,
            update,
            export,
            wiki_word_token,
            wiki_word_bracketed_token,
            footnote_token,
        })
    }

    /// 编译单个模式的变体对
    fn compile_mode(
        syntax: &WikiSyntax,
        mode: ScanMode,
        stats: &mut CompileStats,
    ) -> WfResult<CompiledModeSet> {
        let rules = RuleSet::rules_for(syntax, mode);

        // 1. 逐条校验原始模式，保证错误信息能定位到具体规则
        for (index, rule) in rules.iter().enumerate() {
            if let Err(e) = Self::verify_single_pattern(&rule.pattern) {
                return Err(WikiFmtError::CompilerInitError(format!(
                    "{}模式第{}条规则（{}）无效：{}",
                    mode, index, rule.format, e
                )));
            }
        }

        // 2. 编译两个组合变体
        let with_camel_case = Self::compile_combined(&rules, true)?;
        let without_camel_case = Self::compile_combined(&rules, false)?;

        Self::update_stats(stats, mode, rules.len());

        Ok(CompiledModeSet {
            with_camel_case,
            without_camel_case,
        })
    }

    /// 将有序规则列表合并为单个交替匹配器
    ///
    /// 每条规则包裹进唯一编号的命名分组（style0、style1…），交替顺序即列表
    /// 顺序，保证同一起点命中时"列表靠前的规则获胜"。"无驼峰"变体剔除且仅
    /// 剔除分类为 WikiWord 的规则，其余规则保留原有编号。
    fn compile_combined(rules: &[Rule], include_camel_case: bool) -> WfResult<CompiledMatcher> {
        let mut branches = Vec::with_capacity(rules.len());
        let mut groups = Vec::with_capacity(rules.len());

        for (index, rule) in rules.iter().enumerate() {
            if !include_camel_case && rule.format == FormatType::WikiWord {
                continue;
            }
            let name = format!("style{}", index);
            branches.push(format!("(?P<{}>{})", name, rule.pattern));
            groups.push(StyleGroup {
                name,
                format: rule.format,
            });
        }

        let combined = format!("{}{}", COMBINED_FLAGS, branches.join("|"));
        let regex = Regex::new(&combined)?;

        Ok(CompiledMatcher {
            regex,
            groups: Arc::new(groups),
        })
    }

    /// 校验单条原始模式
    fn verify_single_pattern(pattern: &str) -> Result<(), regex::Error> {
        Regex::new(&format!("{}{}", COMBINED_FLAGS, pattern)).map(|_| ())
    }

    /// 编译整词锚定模式（\A…\z），供 wiki 词判定与规范化使用
    fn compile_token_pattern(pattern: &str) -> WfResult<Regex> {
        Ok(Regex::new(&format!(r"\A(?:{})\z", pattern))?)
    }

    /// 更新编译统计
    fn update_stats(stats: &mut CompileStats, mode: ScanMode, count: usize) {
        match mode {
            ScanMode::Highlight => stats.highlight_count = count,
            ScanMode::Update => stats.update_count = count,
            ScanMode::Export => stats.export_count = count,
        }
    }
}

/// 编译统计信息
#[derive(Debug, Clone, Default)]
struct CompileStats {
    highlight_count: usize,
    update_count: usize,
    export_count: usize,
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::DialectLoader;

    #[test]
    fn test_compile_builtin_dialect() {
        // 测试场景：内置方言应完整编译，6个组合匹配器规则数正确
        let syntax = DialectLoader::builtin();
        let compiled = RuleCompiler::compile(&syntax).unwrap();

        assert_eq!(compiled.highlight.with_camel_case.rule_count(), 14);
        assert_eq!(compiled.highlight.without_camel_case.rule_count(), 13);
        assert_eq!(compiled.update.with_camel_case.rule_count(), 8);
        assert_eq!(compiled.update.without_camel_case.rule_count(), 7);
        assert_eq!(compiled.export.with_camel_case.rule_count(), 17);
        assert_eq!(compiled.export.without_camel_case.rule_count(), 16);
    }

    #[test]
    fn test_group_numbering_preserved_without_camel_case() {
        // 测试场景："无驼峰"变体剔除驼峰词规则后，其余分组保留原编号
        let syntax = DialectLoader::builtin();
        let compiled = RuleCompiler::compile(&syntax).unwrap();

        let with_names: Vec<&str> = compiled
            .highlight
            .with_camel_case
            .groups
            .iter()
            .map(|g| g.name.as_str())
            .collect();
        let without_names: Vec<&str> = compiled
            .highlight
            .without_camel_case
            .groups
            .iter()
            .map(|g| g.name.as_str())
            .collect();

        // 高亮列表中驼峰词是第7条（style7）
        assert!(with_names.contains(&"style7"));
        assert!(!without_names.contains(&"style7"));
        assert!(without_names.contains(&"style6"));
        assert!(without_names.contains(&"style8"));
    }

    #[test]
    fn test_group_table_order_matches_rule_list() {
        // 测试场景：分组映射表顺序与规则列表顺序一致
        let syntax = DialectLoader::builtin();
        let compiled = RuleCompiler::compile(&syntax).unwrap();

        let formats: Vec<FormatType> = compiled
            .export
            .with_camel_case
            .groups
            .iter()
            .map(|g| g.format)
            .collect();
        assert_eq!(formats[0], FormatType::Suppress);
        assert_eq!(formats[1], FormatType::Script);
        assert_eq!(formats[2], FormatType::Url);
        assert_eq!(formats[16], FormatType::Numeric);
    }

    #[test]
    fn test_malformed_pattern_is_fatal() {
        // 测试场景：方言中存在非法正则时，编译必须报错且错误能定位模式
        let mut syntax = DialectLoader::builtin();
        syntax.bold = r"\*([unclosed".to_string();

        let err = RuleCompiler::compile(&syntax).unwrap_err();
        match err {
            WikiFmtError::CompilerInitError(msg) => {
                assert!(msg.contains("Bold"));
            }
            other => panic!("预期 CompilerInitError，实际为 {:?}", other),
        }
    }

    #[test]
    fn test_token_patterns_are_full_match() {
        // 测试场景：整词锚定模式只接受完整token，不接受前缀命中
        let syntax = DialectLoader::builtin();
        let compiled = RuleCompiler::compile(&syntax).unwrap();

        assert!(compiled.wiki_word_token.is_match("WikiWord"));
        assert!(!compiled.wiki_word_token.is_match("WikiWord!"));
        assert!(compiled.footnote_token.is_match("[42]"));
        assert!(!compiled.footnote_token.is_match("a[42]"));
    }
}
