//! 剪贴板写入模块
//!
//! # 设计思路
//!
//! 将与系统剪贴板交互的逻辑独立出来，便于隔离平台不稳定因素。
//! 流水线只产出 [`ClipboardPayload`](crate::inliner::ClipboardPayload)，
//! 通道选择在系统边界一次完成，核心流程对传输方式无感知。
//!
//! # 实现思路
//!
//! 两条通道，按宿主能力择一：
//! - `NativeClipboard`：arboard 原生写入，`set_html` 一次调用同时携带
//!   HTML 与纯文本两种格式，天然满足「要么写全、要么不写」。
//! - `CommandClipboard`：原生剪贴板不可用时（无显示服务等）回退到
//!   外部命令行工具，单次进程调用写入最富表示。
//!
//! 写入在阻塞线程执行，避免阻塞 async 运行时。
//! 不做重试：每次调用至多尝试一次。

use std::io::Write as _;
use std::process::{Command, Stdio};

use crate::error::AppError;
use crate::inliner::ClipboardPayload;

/// 剪贴板传输通道接口。
pub trait ClipboardTransport: Send {
    /// 通道名，用于日志。
    fn name(&self) -> &'static str;

    /// 将完整载荷写入系统剪贴板，要么全部写入要么失败。
    fn write(&mut self, payload: &ClipboardPayload) -> Result<(), AppError>;
}

/// 原生剪贴板通道（arboard）。
pub struct NativeClipboard;

impl ClipboardTransport for NativeClipboard {
    fn name(&self) -> &'static str {
        "native"
    }

    fn write(&mut self, payload: &ClipboardPayload) -> Result<(), AppError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|err| AppError::Clipboard(format!("无法访问系统剪贴板: {err}")))?;
        clipboard
            .set_html(payload.html.clone(), Some(payload.text.clone()))
            .map_err(|err| AppError::Clipboard(format!("写入富文本失败: {err}")))
    }
}

/// 命令行工具回退通道。
pub struct CommandClipboard;

impl CommandClipboard {
    fn run_with_stdin(program: &str, args: &[&str], input: &[u8]) -> Result<(), AppError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| AppError::Clipboard(format!("启动 {program} 失败: {err}")))?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(input)?;
        }

        let status = child
            .wait()
            .map_err(|err| AppError::Clipboard(format!("等待 {program} 退出失败: {err}")))?;
        if status.success() {
            Ok(())
        } else {
            Err(AppError::Clipboard(format!("{program} 退出状态异常: {status}")))
        }
    }
}

impl ClipboardTransport for CommandClipboard {
    fn name(&self) -> &'static str {
        "command"
    }

    fn write(&mut self, payload: &ClipboardPayload) -> Result<(), AppError> {
        #[cfg(target_os = "linux")]
        {
            if Self::run_with_stdin("wl-copy", &["--type", "text/html"], payload.html.as_bytes())
                .is_ok()
            {
                return Ok(());
            }
            return Self::run_with_stdin(
                "xclip",
                &["-selection", "clipboard", "-t", "text/html"],
                payload.html.as_bytes(),
            );
        }

        #[cfg(target_os = "macos")]
        {
            // pbcopy 只接受纯文本，作为能力受限时的保底
            return Self::run_with_stdin("pbcopy", &[], payload.text.as_bytes());
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            let _ = payload;
            return Err(AppError::Clipboard(
                "当前平台没有可用的命令行剪贴板工具".to_string(),
            ));
        }
    }
}

/// 探测原生剪贴板是否可用。
pub fn native_available() -> bool {
    arboard::Clipboard::new().is_ok()
}

/// 按宿主能力选择传输通道（每次调用选择一次）。
pub fn select_transport() -> Box<dyn ClipboardTransport> {
    if native_available() {
        log::info!("📋 剪贴板通道: native");
        Box::new(NativeClipboard)
    } else {
        log::info!("📋 剪贴板通道: command（原生剪贴板不可用）");
        Box::new(CommandClipboard)
    }
}

/// 在阻塞线程上执行一次完整的载荷写入。
pub async fn write_payload(
    mut transport: Box<dyn ClipboardTransport>,
    payload: ClipboardPayload,
) -> Result<(), AppError> {
    tokio::task::spawn_blocking(move || transport.write(&payload))
        .await
        .map_err(|err| AppError::Clipboard(format!("剪贴板写入任务异常退出: {err}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct MemoryTransport {
        captured: Arc<Mutex<Option<ClipboardPayload>>>,
    }

    impl ClipboardTransport for MemoryTransport {
        fn name(&self) -> &'static str {
            "memory"
        }

        fn write(&mut self, payload: &ClipboardPayload) -> Result<(), AppError> {
            *self.captured.lock().expect("lock poisoned") = Some(payload.clone());
            Ok(())
        }
    }

    #[test]
    fn select_transport_picks_a_channel() {
        let transport = select_transport();
        assert!(matches!(transport.name(), "native" | "command"));
    }

    #[tokio::test]
    async fn write_payload_delivers_both_representations() {
        let captured = Arc::new(Mutex::new(None));
        let transport = Box::new(MemoryTransport {
            captured: Arc::clone(&captured),
        });
        let payload = ClipboardPayload {
            text: "plain".to_string(),
            html: "<p>plain</p>".to_string(),
        };

        write_payload(transport, payload).await.expect("write should succeed");

        let captured = captured.lock().expect("lock poisoned");
        let payload = captured.as_ref().expect("payload should be captured");
        assert_eq!(payload.text, "plain");
        assert_eq!(payload.html, "<p>plain</p>");
    }
}
