//! wiki 词规范化工具模块
//! 负责判定任意token是否为（或可成为）合法的 wiki 词链接，并产出其规范形式
//! 判定均为整词匹配；脚注形态与括号词形态重叠时脚注优先

use crate::compiler::CompiledSyntaxSet;

/// wiki 词规范化工具类
/// 提供静态方法 `is_wiki_word` 与 `normalize`
pub struct WikiWordNormalizer;

impl WikiWordNormalizer {
    /// 判定token是否在语法意义上是一个 wiki 词
    ///
    /// # 参数
    /// - `compiled`: 编译后的语法集（含整词锚定模式）
    /// - `token`: 待判定token
    ///
    /// # 返回值
    /// - `true`: token为驼峰词，或为括号词且不同时是脚注引用
    /// - `false`: 其他情况（脚注引用一律不是 wiki 词）
    pub fn is_wiki_word(compiled: &CompiledSyntaxSet, token: &str) -> bool {
        compiled.wiki_word_token.is_match(token)
            || (compiled.wiki_word_bracketed_token.is_match(token)
                && !compiled.footnote_token.is_match(token))
    }

    /// 尝试将token规范化为合法 wiki 词并返回，无法规范化时返回 None
    ///
    /// # 检查顺序（严格按序执行）
    /// 1. 已是驼峰词 -> 原样返回
    /// 2. 是脚注引用 -> None（脚注永不可规范化为 wiki 词）
    /// 3. 是括号词 -> 去掉外层括号后若是合法驼峰词则返回去括号形式，
    ///    否则括号形式必要（含空格/标点），原样返回
    /// 4. 都不是 -> 尝试加括号，加括号后合法则返回括号形式
    /// 5. 仍不合法 -> None
    ///
    /// 去括号优先是有意为之：展示与存储统一到最短合法形式。
    pub fn normalize(compiled: &CompiledSyntaxSet, token: &str) -> Option<String> {
        // 1. 已是驼峰词
        if compiled.wiki_word_token.is_match(token) {
            return Some(token.to_string());
        }

        // 2. 脚注引用
        if compiled.footnote_token.is_match(token) {
            return None;
        }

        // 3. 括号词：优先去括号形式
        if compiled.wiki_word_bracketed_token.is_match(token) {
            if let Some(inner) = token.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
                if compiled.wiki_word_token.is_match(inner) {
                    return Some(inner.to_string());
                }
            }
            return Some(token.to_string());
        }

        // 4. 尝试加括号
        let bracketed = format!("[{}]", token);
        if compiled.wiki_word_bracketed_token.is_match(&bracketed)
            && !compiled.footnote_token.is_match(&bracketed)
        {
            return Some(bracketed);
        }

        // 5. 无法作为 wiki 词处理
        None
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::RuleCompiler;
    use crate::syntax::DialectLoader;

    fn compiled() -> CompiledSyntaxSet {
        RuleCompiler::compile(&DialectLoader::builtin()).unwrap()
    }

    #[test]
    fn test_is_wiki_word_camel_case() {
        // 测试场景：驼峰词是 wiki 词
        let c = compiled();
        assert!(WikiWordNormalizer::is_wiki_word(&c, "WikiWord"));
        assert!(!WikiWordNormalizer::is_wiki_word(&c, "plainword"));
        assert!(!WikiWordNormalizer::is_wiki_word(&c, "Single"));
    }

    #[test]
    fn test_is_wiki_word_footnote_excluded() {
        // 测试场景：[1] 满足括号词形态但同时是脚注引用，不是 wiki 词
        let c = compiled();
        assert!(WikiWordNormalizer::is_wiki_word(&c, "[bracket word]"));
        assert!(!WikiWordNormalizer::is_wiki_word(&c, "[1]"));
        assert!(!WikiWordNormalizer::is_wiki_word(&c, "[42]"));
    }

    #[test]
    fn test_normalize_camel_case_unchanged() {
        // 测试场景：已是驼峰词，原样返回
        let c = compiled();
        assert_eq!(
            WikiWordNormalizer::normalize(&c, "WikiWord"),
            Some("WikiWord".to_string())
        );
    }

    #[test]
    fn test_normalize_footnote_is_none() {
        // 测试场景：脚注引用永不可规范化
        let c = compiled();
        assert_eq!(WikiWordNormalizer::normalize(&c, "[7]"), None);
    }

    #[test]
    fn test_normalize_strips_redundant_brackets() {
        // 测试场景：[WikiWord] 去括号后是合法驼峰词，返回去括号形式
        let c = compiled();
        assert_eq!(
            WikiWordNormalizer::normalize(&c, "[WikiWord]"),
            Some("WikiWord".to_string())
        );
    }

    #[test]
    fn test_normalize_keeps_necessary_brackets() {
        // 测试场景：[not a word!] 去括号后不是驼峰词，括号形式必要，原样返回
        let c = compiled();
        assert_eq!(
            WikiWordNormalizer::normalize(&c, "[not a word!]"),
            Some("[not a word!]".to_string())
        );
    }

    #[test]
    fn test_normalize_adds_brackets() {
        // 测试场景：plainword 不是驼峰词，但加括号后满足括号词形态
        let c = compiled();
        assert_eq!(
            WikiWordNormalizer::normalize(&c, "plainword"),
            Some("[plainword]".to_string())
        );
    }

    #[test]
    fn test_normalize_numeric_token_is_none() {
        // 测试场景：纯数字token加括号后会变成脚注形态，不可规范化
        let c = compiled();
        assert_eq!(WikiWordNormalizer::normalize(&c, "42"), None);
    }

    #[test]
    fn test_normalize_unusable_token_is_none() {
        // 测试场景：含换行的token加括号后也不满足括号词形态，返回 None
        let c = compiled();
        assert_eq!(WikiWordNormalizer::normalize(&c, "bad\ntoken"), None);
    }

    #[test]
    fn test_round_trip_property() {
        // 测试场景：凡 is_wiki_word 为真的token，normalize 必不为 None
        let c = compiled();
        for token in ["WikiWord", "CamelCaseWord", "[bracket word]", "[WikiWord]"] {
            assert!(WikiWordNormalizer::is_wiki_word(&c, token), "token={}", token);
            assert!(
                WikiWordNormalizer::normalize(&c, token).is_some(),
                "token={}",
                token
            );
        }
    }
}
