//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，替代各模块中分散的
//! `.map_err(|e| e.to_string())`、`format!(...)` 等不一致模式。
//!
//! 单张图片的内联失败不会出现在这里：它由 [`crate::inliner::InlineError`]
//! 承载，并在内联循环内部就地恢复，永远不向上传播。
//! `AppError` 只表示会终止整次复制操作的片段级失败。

/// 应用级统一错误类型
///
/// 复制流水线的所有外层阶段均返回此类型，最终在顶层边界统一上报。
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Markdown 渲染失败
    #[error("渲染 Markdown 失败: {0}")]
    Render(String),

    /// HTML 片段解析或序列化失败
    #[error("处理 HTML 片段失败: {0}")]
    Fragment(String),

    /// 剪贴板写入失败
    #[error("剪贴板操作失败: {0}")]
    Clipboard(String),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),
}
