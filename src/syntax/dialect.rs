//! 方言加载管理器
//! 负责从配置中的自定义JSON或内置默认方言加载语法定义

use tracing::debug;

use super::model::{StyleFaces, WikiSyntax};
use crate::config::EngineConfig;
use crate::error::WfResult;

/// 方言加载管理器
pub struct DialectLoader;

impl DialectLoader {
    /// 加载方言（优先自定义JSON，未配置则使用内置默认方言）
    pub fn load(config: &EngineConfig) -> WfResult<WikiSyntax> {
        // 1. 优先加载自定义JSON方言
        if let Some(json) = &config.custom_dialect_json {
            let syntax: WikiSyntax = serde_json::from_str(json)?;
            debug!("从自定义JSON加载方言成功：{}", syntax.name);
            return Ok(syntax);
        }

        // 2. 回退到内置默认方言
        debug!("未配置自定义方言，使用内置默认方言");
        Ok(Self::builtin())
    }

    /// 内置默认方言
    ///
    /// 经典桌面wiki语法：驼峰词、[括号词]、[1]脚注、*加粗*、_斜体_、
    /// +号标题1~4、<% 脚本 %>、[键: 值]属性、todo族待办标记、----分隔线、
    /// */1. 列表项、<< 抑制区域 >>。
    /// 所有模式均为 regex crate 兼容写法（不含环视语法）。
    pub fn builtin() -> WikiSyntax {
        WikiSyntax {
            name: "classic".to_string(),

            // 驼峰词：至少两个大写驼峰段，词边界锚定
            wiki_word: r"\b\p{Lu}\p{Ll}+(?:\p{Lu}[\p{Ll}\p{Nd}]*)+\b".to_string(),
            // 括号词：方括号内任意非括号字符（允许空格与标点）
            wiki_word_bracketed: r"\[[^\[\]\n]+?\]".to_string(),
            // 脚注：方括号内纯数字
            footnote: r"\[[0-9]+\]".to_string(),

            url: r"(?:https?|ftp|wiki|file)://[^\s<>]+".to_string(),
            script: r"<%.*?%>".to_string(),
            bold: r"\*[^\s*](?:[^*]*[^\s*])?\*".to_string(),
            italic: r"\b_.+?_\b".to_string(),
            // 属性：[键: 值] 或 [键= 值]，必须先于括号词参与匹配
            property: r"\[[ \t]*[a-zA-Z0-9._\- ]+?[ \t]*[=:][ \t]*[^\]\n]*?[ \t]*\]".to_string(),

            todo: r"^\s*(?:todo|done|wait|action|track|issue|question|project)[.:]".to_string(),
            todo_with_content:
                r"^\s*(?:todo|done|wait|action|track|issue|question|project)(?:\.[^:\s]+)?:[^\n]*"
                    .to_string(),
            // 标题按加号数量区分，最具体的规则在列表中靠前，由交替顺序完成消歧
            heading4: r"^\+\+\+\+ ?[^\n]+".to_string(),
            heading3: r"^\+\+\+ ?[^\n]+".to_string(),
            heading2: r"^\+\+ ?[^\n]+".to_string(),
            heading1: r"^\+ ?[^\n]+".to_string(),
            horiz_line: r"----+".to_string(),
            bullet: r"^[ \t]*\*[ \t]+[^\n]*".to_string(),
            numeric_bullet: r"^[ \t]*[0-9]+\.[ \t]+[^\n]*".to_string(),

            suppress: r"<<.*?>>".to_string(),

            faces: StyleFaces::default(),
        }
    }
}
