//! 复制流水线编排模块
//!
//! # 设计思路
//!
//! `CopyPipeline` 只负责流程编排，不与任何具体宿主绑定。
//! 处理链路固定为：
//! 1. 渲染 Markdown 为 HTML 并解析成片段
//! 2. 逐张内联本地图片（单张失败就地恢复）
//! 3. 组装 text/html 双表示载荷
//! 4. 经选定通道一次性写入剪贴板
//!
//! # 实现思路
//!
//! - 渲染器与资产存储通过泛型注入，测试可用假实现替换。
//! - 记录 render/inline/assemble/write 阶段耗时，便于性能诊断。
//! - `copy_and_notify` 是唯一的顶层失败边界：内联之外的任何错误
//!   在这里被捕获一次、记日志并向用户发一条通用通知；
//!   失败时剪贴板不会留下半截载荷（写入本身是单次调用）。

use std::time::Instant;

use crate::clipboard::{self, ClipboardTransport};
use crate::error::AppError;
use crate::inliner::fragment;
use crate::inliner::payload;
use crate::inliner::{ClipboardPayload, InlineReport, inline_local_images};
use crate::notify::Notifier;
use crate::renderer::Renderer;
use crate::vault::AssetStore;

/// 复制流水线。
///
/// 渲染器与资产存储为外部协作方，仅按接口依赖。
pub struct CopyPipeline<R: Renderer, S: AssetStore> {
    renderer: R,
    store: S,
}

impl<R: Renderer, S: AssetStore> CopyPipeline<R, S> {
    pub fn new(renderer: R, store: S) -> Self {
        Self { renderer, store }
    }

    /// 渲染、内联并组装载荷，不触碰剪贴板。
    ///
    /// 片段归本次调用独占，组装完成后即丢弃。
    pub async fn build_payload(
        &self,
        source: &str,
        context_path: &str,
    ) -> Result<(ClipboardPayload, InlineReport), AppError> {
        let render_start = Instant::now();
        let html = self.renderer.render(source, context_path)?;
        let fragment = fragment::parse_fragment(&html)?;
        let render_elapsed = render_start.elapsed();

        let inline_start = Instant::now();
        let report = inline_local_images(&fragment, &self.store, context_path).await;
        let inline_elapsed = inline_start.elapsed();

        let assemble_start = Instant::now();
        let payload = payload::assemble(&fragment)?;
        let assemble_elapsed = assemble_start.elapsed();

        log::info!(
            "✅ 载荷组装完成 - render={}ms inline={}ms assemble={}ms 图片={} 内联={} 跳过={} 失败={}",
            render_elapsed.as_millis(),
            inline_elapsed.as_millis(),
            assemble_elapsed.as_millis(),
            report.images,
            report.inlined,
            report.skipped,
            report.failed
        );

        Ok((payload, report))
    }

    /// 完整复制：组装载荷并写入剪贴板。
    pub async fn copy(
        &self,
        source: &str,
        context_path: &str,
        transport: Box<dyn ClipboardTransport>,
    ) -> Result<InlineReport, AppError> {
        let (payload, report) = self.build_payload(source, context_path).await?;

        let write_start = Instant::now();
        let channel = transport.name();
        clipboard::write_payload(transport, payload).await?;
        log::info!(
            "✅ 剪贴板写入完成 - channel={} write={}ms",
            channel,
            write_start.elapsed().as_millis()
        );

        Ok(report)
    }

    /// 顶层失败边界：执行复制，把结果折叠为一次用户通知。
    ///
    /// 返回是否成功，供调用方决定退出码。
    pub async fn copy_and_notify(
        &self,
        source: &str,
        context_path: &str,
        transport: Box<dyn ClipboardTransport>,
        notifier: &dyn Notifier,
    ) -> bool {
        match self.copy(source, context_path, transport).await {
            Ok(report) => {
                notifier.notify(&format!(
                    "已复制为富文本（图片内联 {}/{}）",
                    report.inlined, report.images
                ));
                true
            }
            Err(err) => {
                log::error!("❌ 复制失败: {err}");
                notifier.notify("复制失败，请查看日志了解详情");
                false
            }
        }
    }
}
