//! 内联错误模型
//!
//! # 设计思路
//!
//! 单张图片处理过程中的错误统一由 `InlineError` 承载。
//! 它只在内联循环内部流转：被捕获、记日志、保留原引用后继续下一张，
//! 永远不会升级为片段级的 `AppError`。
//!
//! 「解析不到资产」不是错误（返回 `None` 即跳过），
//! 因此这里只剩读取类失败。

/// 单张图片内联失败的错误类型。
#[derive(Debug, thiserror::Error)]
pub enum InlineError {
    /// 资产字节读取失败
    #[error("资产读取失败: {0}")]
    Read(String),
}
