//! 按模式组织的有序规则列表
//! 列表顺序即优先级顺序：多个模式可在同一起点命中时，列表靠前的规则获胜

use super::model::{FormatType, Rule, ScanMode, WikiSyntax};

/// 规则列表构建器
pub struct RuleSet;

impl RuleSet {
    /// 按扫描模式返回有序规则列表
    pub fn rules_for(syntax: &WikiSyntax, mode: ScanMode) -> Vec<Rule> {
        match mode {
            ScanMode::Highlight => Self::highlight_rules(syntax),
            ScanMode::Update => Self::update_rules(syntax),
            ScanMode::Export => Self::export_rules(syntax),
        }
    }

    /// 交互式高亮规则列表（最具体的规则在前）
    pub fn highlight_rules(syntax: &WikiSyntax) -> Vec<Rule> {
        vec![
            Rule::new(&syntax.suppress, FormatType::Default),
            Rule::new(&syntax.script, FormatType::Script),
            Rule::new(&syntax.url, FormatType::Url),
            Rule::new(&syntax.todo, FormatType::ToDo),
            Rule::new(&syntax.property, FormatType::Property),
            Rule::new(&syntax.footnote, FormatType::Default),
            Rule::new(&syntax.wiki_word_bracketed, FormatType::WikiWord2),
            Rule::new(&syntax.wiki_word, FormatType::WikiWord),
            Rule::new(&syntax.bold, FormatType::Bold),
            Rule::new(&syntax.italic, FormatType::Italic),
            Rule::new(&syntax.heading4, FormatType::Heading4),
            Rule::new(&syntax.heading3, FormatType::Heading3),
            Rule::new(&syntax.heading2, FormatType::Heading2),
            Rule::new(&syntax.heading1, FormatType::Heading1),
        ]
    }

    /// 增量重算规则列表
    /// 精简集合：仅覆盖样式类别可能变化的区域检测，不含段落级块标记
    pub fn update_rules(syntax: &WikiSyntax) -> Vec<Rule> {
        vec![
            Rule::new(&syntax.suppress, FormatType::Default),
            Rule::new(&syntax.script, FormatType::Script),
            Rule::new(&syntax.url, FormatType::Url),
            Rule::new(&syntax.todo_with_content, FormatType::ToDo),
            Rule::new(&syntax.property, FormatType::Property),
            Rule::new(&syntax.footnote, FormatType::Default),
            Rule::new(&syntax.wiki_word_bracketed, FormatType::WikiWord2),
            Rule::new(&syntax.wiki_word, FormatType::WikiWord),
        ]
    }

    /// HTML导出规则列表（超集：抑制区域标记为 Suppress 供导出端丢弃）
    pub fn export_rules(syntax: &WikiSyntax) -> Vec<Rule> {
        vec![
            Rule::new(&syntax.suppress, FormatType::Suppress),
            Rule::new(&syntax.script, FormatType::Script),
            Rule::new(&syntax.url, FormatType::Url),
            Rule::new(&syntax.todo_with_content, FormatType::ToDo),
            Rule::new(&syntax.property, FormatType::Property),
            Rule::new(&syntax.footnote, FormatType::Default),
            Rule::new(&syntax.wiki_word_bracketed, FormatType::WikiWord2),
            Rule::new(&syntax.wiki_word, FormatType::WikiWord),
            Rule::new(&syntax.bold, FormatType::Bold),
            Rule::new(&syntax.italic, FormatType::Italic),
            Rule::new(&syntax.heading4, FormatType::Heading4),
            Rule::new(&syntax.heading3, FormatType::Heading3),
            Rule::new(&syntax.heading2, FormatType::Heading2),
            Rule::new(&syntax.heading1, FormatType::Heading1),
            Rule::new(&syntax.horiz_line, FormatType::HorizLine),
            Rule::new(&syntax.bullet, FormatType::Bullet),
            Rule::new(&syntax.numeric_bullet, FormatType::Numeric),
        ]
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::DialectLoader;

    #[test]
    fn test_rule_list_sizes() {
        // 测试场景：三套列表的规则数量固定（高亮14条、增量8条、导出17条）
        let syntax = DialectLoader::builtin();
        assert_eq!(RuleSet::highlight_rules(&syntax).len(), 14);
        assert_eq!(RuleSet::update_rules(&syntax).len(), 8);
        assert_eq!(RuleSet::export_rules(&syntax).len(), 17);
    }

    #[test]
    fn test_suppress_tagging_differs_by_mode() {
        // 测试场景：抑制区域在高亮/增量模式标记为 Default，导出模式标记为 Suppress
        let syntax = DialectLoader::builtin();
        assert_eq!(RuleSet::highlight_rules(&syntax)[0].format, FormatType::Default);
        assert_eq!(RuleSet::update_rules(&syntax)[0].format, FormatType::Default);
        assert_eq!(RuleSet::export_rules(&syntax)[0].format, FormatType::Suppress);
    }

    #[test]
    fn test_update_mode_omits_block_markers() {
        // 测试场景：增量模式不含标题/列表/分隔线规则（与导出模式的已知差异）
        let syntax = DialectLoader::builtin();
        let update = RuleSet::update_rules(&syntax);
        assert!(update.iter().all(|r| !matches!(
            r.format,
            FormatType::Heading1
                | FormatType::Heading2
                | FormatType::Heading3
                | FormatType::Heading4
                | FormatType::HorizLine
                | FormatType::Bullet
                | FormatType::Numeric
        )));
    }

    #[test]
    fn test_priority_order_property_before_bracketed_word() {
        // 测试场景：属性规则必须排在括号词规则之前，否则 [键: 值] 会被当作括号词
        let syntax = DialectLoader::builtin();
        for rules in [
            RuleSet::highlight_rules(&syntax),
            RuleSet::update_rules(&syntax),
            RuleSet::export_rules(&syntax),
        ] {
            let prop = rules.iter().position(|r| r.format == FormatType::Property);
            let ww2 = rules.iter().position(|r| r.format == FormatType::WikiWord2);
            assert!(prop.unwrap() < ww2.unwrap());
        }
    }
}
