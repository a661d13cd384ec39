//! 用户通知边界
//!
//! 通知是“发射后不管”的：没有返回值，失败也不影响复制结果。
//! 具体展示方式（弹窗、状态栏、终端输出）由宿主实现决定。

/// 通知接口。
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// 终端通知器：消息写到 stderr，同时落一条日志。
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        log::info!("📋 通知: {message}");
        eprintln!("{message}");
    }
}
