//! 引用解析：远程判定与文件名推导
//!
//! # 设计思路
//!
//! 渲染器产出的 `src` 形态不稳定：可能是宿主自有的不透明资源 URI
//! （如 `app://local/Users/.../photo.png?12345`）、相对路径或带转义的路径。
//! 这里刻意不做结构化 URI 解析，只假定「末段文件名可靠」：
//! 取最后一个 `/` 之后的片段，去掉 `?` 起始的查询串，再做百分号解码。
//!
//! 该启发式是一个独立、可替换的步骤：宿主资源 URI 格式变化时只改本文件。

use std::borrow::Cow;

/// 远程引用判定：保守白名单，仅放过明确的公网 URL。
///
/// 其余任何 scheme（包括宿主内部资源 scheme）都视为潜在本地引用。
pub fn is_remote(src: &str) -> bool {
    src.starts_with("http://") || src.starts_with("https://")
}

/// 一条待内联的本地引用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalReference<'a> {
    /// 原始 `src` 字符串，失败时原样保留。
    pub raw: &'a str,
    /// 推导出的展示文件名（已解码）。
    pub filename: String,
    /// 解析上下文：笔记在素材库中的路径。
    pub context_path: &'a str,
}

impl<'a> LocalReference<'a> {
    /// 从原始引用推导本地引用。
    ///
    /// 推导不出非空文件名（含解码失败）时返回 `None`，
    /// 调用方应跳过该图片并保留原引用。
    pub fn derive(raw: &'a str, context_path: &'a str) -> Option<Self> {
        let segment = raw.rsplit('/').next().unwrap_or(raw);
        let trimmed = segment.split('?').next().unwrap_or(segment);
        if trimmed.is_empty() {
            return None;
        }

        let filename = match urlencoding::decode(trimmed) {
            Ok(Cow::Borrowed(s)) => s.to_string(),
            Ok(Cow::Owned(s)) => s,
            Err(err) => {
                log::warn!("⚠️ 引用百分号解码失败，保留原引用: src={raw} err={err}");
                return None;
            }
        };
        if filename.is_empty() {
            return None;
        }

        Some(Self {
            raw,
            filename,
            context_path,
        })
    }
}
