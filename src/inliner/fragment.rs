//! 片段解析与序列化
//!
//! # 设计思路
//!
//! 渲染器输出的是 HTML 字符串，内联需要在元素树上原地改写属性，
//! 因此先解析成 DOM 片段，处理完再序列化回字符串。
//! html5ever 会自动补全文档骨架，这里取 `<body>` 作为片段根，
//! 对外只暴露「内层 HTML」与「纯文本投影」两个视角。

use kuchikiki::NodeRef;
use kuchikiki::traits::TendrilSink;

use crate::error::AppError;

/// 把渲染得到的 HTML 字符串解析为片段根节点。
pub fn parse_fragment(html: &str) -> Result<NodeRef, AppError> {
    let document = kuchikiki::parse_html().one(html);
    let body = document
        .select_first("body")
        .map_err(|_| AppError::Fragment("渲染结果缺少 body 节点".to_string()))?;
    Ok(body.as_node().clone())
}

/// 序列化片段根的全部子节点（即「内层 HTML」）。
pub fn inner_html(fragment: &NodeRef) -> Result<String, AppError> {
    let mut buf = Vec::new();
    for child in fragment.children() {
        child
            .serialize(&mut buf)
            .map_err(|err| AppError::Fragment(format!("序列化 HTML 失败: {err}")))?;
    }
    String::from_utf8(buf).map_err(|err| AppError::Fragment(format!("序列化结果非 UTF-8: {err}")))
}

/// 片段的纯文本投影：剥离标记，属性中内嵌的数据不参与。
pub fn plain_text(fragment: &NodeRef) -> String {
    fragment.text_contents()
}
