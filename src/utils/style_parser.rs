//! 样式描述串转换工具
//! 负责样式描述串与结构化样式属性之间的双向转换
//! 描述串格式：逗号连接的 key:value 或裸标志 token（如 "bold,face:Consolas,size:10"）

use crate::error::{WfResult, WikiFmtError};

/// 结构化样式属性
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleAttrs {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub face: Option<String>,
    pub size: Option<u32>,
    pub fore: Option<String>,
}

/// 样式描述串转换工具
pub struct StyleConverter;

impl StyleConverter {
    /// 解析样式描述串为结构化属性
    /// 未知 token 视为无效输入（描述串由 getStyles 生成，词汇封闭）
    pub fn parse(descriptor: &str) -> WfResult<StyleAttrs> {
        let mut attrs = StyleAttrs::default();

        for token in descriptor.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            match token.split_once(':') {
                Some(("face", value)) => attrs.face = Some(value.to_string()),
                Some(("size", value)) => {
                    let size = value.parse::<u32>().map_err(|e| {
                        WikiFmtError::InvalidInput(format!("无效字号 {}：{}", value, e))
                    })?;
                    attrs.size = Some(size);
                }
                Some(("fore", value)) => attrs.fore = Some(value.to_string()),
                Some((key, _)) => {
                    return Err(WikiFmtError::InvalidInput(format!(
                        "未知样式键：{}",
                        key
                    )));
                }
                None => match token {
                    "bold" => attrs.bold = true,
                    "italic" => attrs.italic = true,
                    "underline" => attrs.underline = true,
                    other => {
                        return Err(WikiFmtError::InvalidInput(format!(
                            "未知样式标志：{}",
                            other
                        )));
                    }
                },
            }
        }

        Ok(attrs)
    }

    /// 由结构化属性构建样式描述串（parse 的逆操作）
    /// 输出顺序固定：标志在前，fore/face/size 在后
    pub fn build(attrs: &StyleAttrs) -> String {
        let mut tokens = Vec::new();

        if attrs.bold {
            tokens.push("bold".to_string());
        }
        if attrs.italic {
            tokens.push("italic".to_string());
        }
        if attrs.underline {
            tokens.push("underline".to_string());
        }
        if let Some(fore) = &attrs.fore {
            tokens.push(format!("fore:{}", fore));
        }
        if let Some(face) = &attrs.face {
            tokens.push(format!("face:{}", face));
        }
        if let Some(size) = attrs.size {
            tokens.push(format!("size:{}", size));
        }

        tokens.join(",")
    }
}
