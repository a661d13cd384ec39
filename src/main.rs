//! # rich-copy — 命令行入口
//!
//! 本文件仅负责参数解析、日志初始化与组件装配。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use rich_copy::clipboard;
use rich_copy::notify::ConsoleNotifier;
use rich_copy::pipeline::CopyPipeline;
use rich_copy::renderer::CommonMarkRenderer;
use rich_copy::vault::FolderVault;

/// 把 Markdown 笔记复制为自包含富文本（本地图片内联为 data URI）。
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// 要复制的 Markdown 笔记路径
    note: PathBuf,

    /// 素材库根目录（默认取笔记所在目录）
    #[arg(long)]
    vault: Option<PathBuf>,

    /// 仅把载荷以 JSON 输出到标准输出，不写剪贴板
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let vault_root = cli.vault.clone().unwrap_or_else(|| {
        cli.note
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    });

    // 解析上下文 = 笔记相对素材库根的路径
    let context_path = cli
        .note
        .strip_prefix(&vault_root)
        .unwrap_or(&cli.note)
        .to_string_lossy()
        .into_owned();

    let source = match std::fs::read_to_string(&cli.note) {
        Ok(source) => source,
        Err(err) => {
            log::error!("❌ 读取笔记失败: path={} err={}", cli.note.display(), err);
            eprintln!("无法读取笔记 {}: {err}", cli.note.display());
            return ExitCode::FAILURE;
        }
    };

    let pipeline = CopyPipeline::new(CommonMarkRenderer, FolderVault::new(vault_root));

    if cli.json {
        return match pipeline.build_payload(&source, &context_path).await {
            Ok((payload, _report)) => match serde_json::to_string_pretty(&payload) {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    log::error!("❌ 序列化载荷失败: {err}");
                    ExitCode::FAILURE
                }
            },
            Err(err) => {
                log::error!("❌ 组装载荷失败: {err}");
                eprintln!("复制失败，请查看日志了解详情");
                ExitCode::FAILURE
            }
        };
    }

    let transport = clipboard::select_transport();
    let ok = pipeline
        .copy_and_notify(&source, &context_path, transport, &ConsoleNotifier)
        .await;

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
