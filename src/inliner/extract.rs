//! 引用提取器
//!
//! 按文档顺序扫描片段中的 `img` 元素并读取其 `src` 属性。
//! 缺少 `src` 的元素直接排除（无操作，不算错误）。
//! 提取是一次性的：后续阶段会原地改写片段，提取结果不可重放。

use kuchikiki::{ElementData, NodeDataRef, NodeRef};

/// 一个待处理的图片元素及其原始引用。
pub struct ImageRef {
    pub node: NodeDataRef<ElementData>,
    pub src: String,
}

/// 收集片段内全部携带 `src` 的图片元素，保持文档顺序。无副作用。
pub fn collect_image_refs(fragment: &NodeRef) -> Vec<ImageRef> {
    let selection = match fragment.select("img") {
        Ok(selection) => selection,
        Err(()) => {
            log::warn!("⚠️ 图片选择器执行失败，按无图片处理");
            return Vec::new();
        }
    };

    selection
        .filter_map(|node| {
            let src = node.attributes.borrow().get("src").map(str::to_string);
            src.map(|src| ImageRef { node, src })
        })
        .collect()
}
