//! 图片内联核心
//!
//! # 设计思路
//!
//! 对提取到的每个图片元素独立处理：
//! 1. 远程 URL（http/https 白名单）原样放过
//! 2. 从不透明引用推导展示文件名
//! 3. 经资产存储解析并读取字节
//! 4. 标准 base64 编码 + 按扩展名确定 MIME
//! 5. 把 `src` 改写为 `data:<mime>;base64,<payload>`
//!
//! # 实现思路
//!
//! 失败隔离是核心契约：每个元素有自己的 try/recover 边界
//! （[`inline_one`] 的 `Result` 在循环里就地消化），
//! 一张图片不可读只降级这一张，绝不中断整轮内联。
//! 内联严格只增不破坏：任何失败都保留元素的原始引用。

use base64::{Engine as _, engine::general_purpose};
use kuchikiki::NodeRef;

use super::error::InlineError;
use super::extract::{self, ImageRef};
use super::mime;
use super::reference::{self, LocalReference};
use crate::vault::{AssetId, AssetStore};

/// 一轮内联的结果统计，供编排层输出阶段日志。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InlineReport {
    /// 片段中携带 `src` 的图片总数
    pub images: usize,
    /// 成功改写为 data URI 的数量
    pub inlined: usize,
    /// 被跳过的数量（远程 URL、推导不出文件名、解析不到资产）
    pub skipped: usize,
    /// 失败后保留原引用的数量
    pub failed: usize,
}

/// 解析成功后的瞬态资产：仅在编码单张图片期间存在。
struct ResolvedAsset {
    id: AssetId,
    bytes: Vec<u8>,
}

/// 对片段中的所有本地图片引用执行内联，按文档顺序逐张等待。
///
/// 不返回 `Result`：单张失败在内部恢复，片段本身不会因内联出错。
pub async fn inline_local_images<S: AssetStore + ?Sized>(
    fragment: &NodeRef,
    store: &S,
    context_path: &str,
) -> InlineReport {
    let images = extract::collect_image_refs(fragment);
    let mut report = InlineReport {
        images: images.len(),
        ..InlineReport::default()
    };

    for image in &images {
        if reference::is_remote(&image.src) {
            report.skipped += 1;
            continue;
        }

        let Some(local) = LocalReference::derive(&image.src, context_path) else {
            report.skipped += 1;
            continue;
        };

        // 单张图片的失败隔离边界
        match inline_one(store, image, &local).await {
            Ok(true) => report.inlined += 1,
            Ok(false) => {
                log::info!("ℹ️ 引用未解析到库内资产，保留原引用: src={}", image.src);
                report.skipped += 1;
            }
            Err(err) => {
                log::warn!("⚠️ 图片内联失败，保留原引用: src={} err={}", image.src, err);
                report.failed += 1;
            }
        }
    }

    report
}

/// 处理单张图片：解析 → 读取 → 编码 → 改写。
///
/// 返回 `Ok(false)` 表示资产解析不到（合法跳过），
/// `Err` 表示读取失败，由调用方记录并继续。
async fn inline_one<S: AssetStore + ?Sized>(
    store: &S,
    image: &ImageRef,
    local: &LocalReference<'_>,
) -> Result<bool, InlineError> {
    let Some(id) = store.resolve(&local.filename, local.context_path).await else {
        return Ok(false);
    };

    let bytes = store.read_bytes(&id).await.map_err(|err| {
        InlineError::Read(format!("asset={} err={err}", id.as_path().display()))
    })?;
    let asset = ResolvedAsset { id, bytes };

    let encoded = general_purpose::STANDARD.encode(&asset.bytes);
    let mime_type = mime::mime_for_extension(asset.id.extension().unwrap_or(""));
    image
        .node
        .attributes
        .borrow_mut()
        .insert("src", format!("data:{mime_type};base64,{encoded}"));

    Ok(true)
}
