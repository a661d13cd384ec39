//! 载荷组装器
//!
//! 内联完成后（无论各图片成败），把片段定格为一对平行表示：
//! 序列化后的 HTML 与纯文本投影。组装本身没有失败语义，
//! 空片段得到两个空字符串。

use kuchikiki::NodeRef;
use serde::Serialize;

use super::fragment;
use crate::error::AppError;

/// 交付给剪贴板边界的最终载荷。组装后不再变化。
#[derive(Debug, Clone, Serialize)]
pub struct ClipboardPayload {
    /// 纯文本表示（标记剥离，属性内嵌数据不参与）
    pub text: String,
    /// HTML 表示（含已内联的 data URI）
    pub html: String,
}

/// 从处理完的片段组装剪贴板载荷。
pub fn assemble(fragment: &NodeRef) -> Result<ClipboardPayload, AppError> {
    Ok(ClipboardPayload {
        text: fragment::plain_text(fragment),
        html: fragment::inner_html(fragment)?,
    })
}
