//! # 图片内联模块（inliner）
//!
//! ## 设计思路
//!
//! 该模块把「引用提取 → 文件名推导 → 资产解析读取 → base64 改写 →
//! 载荷组装」按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `fragment`：HTML 字符串 ↔ 片段树的解析与序列化
//! - `extract`：按文档顺序收集携带 `src` 的图片元素
//! - `reference`：远程白名单判定 + 不透明 URI 的文件名启发式
//! - `mime`：扩展名 → MIME 固定映射
//! - `inline`：逐张内联与失败隔离（核心）
//! - `payload`：text/html 双表示的最终载荷
//! - `error`：单张图片的错误模型
//!
//! ## 新同事快速上手
//!
//! 可以按下面顺序理解调用链：
//!
//! ```text
//! pipeline.rs（编排 + 顶层失败边界）
//!    ↓
//! fragment.rs（解析渲染结果为片段树）
//!    ↓
//! inline.rs（逐张处理，单张失败就地恢复）
//!    ├─ extract.rs（收集 img 引用）
//!    ├─ reference.rs（远程判定 + 文件名推导）
//!    ├─ vault.rs（资产解析与读取，外部协作方）
//!    └─ mime.rs（扩展名 → MIME）
//!    ↓
//! payload.rs（组装 ClipboardPayload）
//! ```
//!
//! ## 分层职责建议
//!
//! - 宿主资源 URI 格式变化优先改 `reference.rs`
//! - 支持的图片类型变化优先改 `mime.rs`
//! - 跳过/失败的统计口径变化优先改 `inline.rs`

pub mod fragment;
pub mod payload;

mod error;
mod extract;
mod inline;
mod mime;
mod reference;

pub use error::InlineError;
pub use inline::{InlineReport, inline_local_images};
pub use mime::mime_for_extension;
pub use payload::ClipboardPayload;
pub use reference::{LocalReference, is_remote};
