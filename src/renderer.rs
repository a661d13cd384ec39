//! Markdown 渲染边界
//!
//! # 设计思路
//!
//! 渲染语义（wiki 链接、标注语法等）不属于本工具的职责，
//! 因此只定义 [`Renderer`] 接口，由宿主决定具体渲染器。
//! 流水线仅依赖该接口，保证渲染器可替换。
//!
//! 默认适配器 [`CommonMarkRenderer`] 基于 pulldown-cmark，
//! 开启全部扩展，输出标准 HTML 片段。

use pulldown_cmark::{Options, Parser, html};

use crate::error::AppError;

/// Markdown → HTML 渲染接口。
///
/// `context_path` 是笔记在素材库中的路径，供需要按上下文
/// 解析内部链接的渲染器使用；不需要时可以忽略。
pub trait Renderer {
    fn render(&self, source: &str, context_path: &str) -> Result<String, AppError>;
}

/// 基于 pulldown-cmark 的默认渲染器。
pub struct CommonMarkRenderer;

impl Renderer for CommonMarkRenderer {
    fn render(&self, source: &str, _context_path: &str) -> Result<String, AppError> {
        let parser = Parser::new_ext(source, Options::all());
        let mut output = String::new();
        html::push_html(&mut output, parser);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_image_syntax_to_img_tag() {
        let renderer = CommonMarkRenderer;
        let html = renderer
            .render("![alt text](assets/pic.png)", "note.md")
            .expect("render should succeed");

        assert!(html.contains("<img"), "output: {html}");
        assert!(html.contains("assets/pic.png"), "output: {html}");
    }

    #[test]
    fn renders_plain_paragraph() {
        let renderer = CommonMarkRenderer;
        let html = renderer.render("hello world", "note.md").expect("render should succeed");

        assert!(html.contains("<p>hello world</p>"), "output: {html}");
    }
}
