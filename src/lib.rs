//! # rich-copy — 库入口
//!
//! 把渲染后的 Markdown 笔记复制为自包含富文本：本地引用的图片
//! 全部改写为内嵌 data URI，粘贴到任何应用都不会丢图。
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      main.rs (CLI)                       │
//! │        参数解析 · env_logger 初始化 · 组件装配             │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↓              库 (rich_copy)                      │
//! │                                                          │
//! │  ┌─ pipeline ─── CopyPipeline（编排 + 顶层失败边界）      │
//! │  │     ├─ renderer   Markdown → HTML（外部协作方接口）    │
//! │  │     ├─ inliner    引用提取·图片内联·载荷组装（核心）    │
//! │  │     │    └─ vault 资产解析与字节读取（外部协作方接口）  │
//! │  │     ├─ clipboard  双通道写入（native / command）       │
//! │  │     └─ notify     用户通知（发射后不管）               │
//! │  │                                                       │
//! │  └─ error ──── AppError（统一片段级错误类型）             │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，所有外层阶段的返回类型 |
//! | [`renderer`] | 渲染边界接口与 pulldown-cmark 默认适配器 |
//! | [`vault`] | 资产存储接口与本地目录素材库 `FolderVault` |
//! | [`inliner`] | 核心：引用提取、图片内联（失败隔离）、载荷组装 |
//! | [`clipboard`] | 传输通道选择与单次原子写入 |
//! | [`notify`] | 用户通知边界 |
//! | [`pipeline`] | 流水线编排、阶段耗时日志、顶层失败边界 |

pub mod clipboard;
pub mod error;
pub mod inliner;
pub mod notify;
pub mod pipeline;
pub mod renderer;
pub mod vault;
