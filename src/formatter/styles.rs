//! 样式映射：分类到样式描述串的有序对照表
//! 描述串为逗号连接的 key:value / 裸标志 token，由编辑器渲染层消费

use crate::syntax::{FormatType, StyleFaces};

/// 样式映射工具类
pub struct StyleMapper;

impl StyleMapper {
    /// 按字体参数生成（分类，样式描述串）有序列表
    ///
    /// 颜色约定：wiki 词黑色带下划线，已存在页面的 wiki 词与 URL 蓝色带
    /// 下划线，脚本灰色，属性加粗灰色，待办加粗。
    pub fn get_styles(faces: &StyleFaces) -> Vec<(FormatType, String)> {
        let mono = &faces.mono;
        let size = faces.size;
        vec![
            (
                FormatType::Default,
                format!("face:{},size:{}", mono, size),
            ),
            (
                FormatType::WikiWord,
                format!("fore:#000000,underline,face:{},size:{}", mono, size),
            ),
            (
                FormatType::AvailWikiWord,
                format!("fore:#0000BB,underline,face:{},size:{}", mono, size),
            ),
            (
                FormatType::Bold,
                format!("bold,face:{},size:{}", mono, size),
            ),
            (
                FormatType::Italic,
                format!("italic,face:{},size:{}", mono, size),
            ),
            (
                FormatType::Heading4,
                format!("bold,face:{},size:{}", mono, faces.heading4),
            ),
            (
                FormatType::Heading3,
                format!("bold,face:{},size:{}", mono, faces.heading3),
            ),
            (
                FormatType::Heading2,
                format!("bold,face:{},size:{}", mono, faces.heading2),
            ),
            (
                FormatType::Heading1,
                format!("bold,face:{},size:{}", mono, faces.heading1),
            ),
            (
                FormatType::Url,
                format!("fore:#0000BB,underline,face:{},size:{}", mono, size),
            ),
            (
                FormatType::Script,
                format!("fore:#555555,face:{},size:{}", mono, size),
            ),
            (
                FormatType::Property,
                format!("bold,fore:#555555,face:{},size:{}", mono, size),
            ),
            (
                FormatType::ToDo,
                format!("bold,face:{},size:{}", mono, size),
            ),
        ]
    }
}
