//! 日志初始化
//!
//! 日志统一输出到 stderr，stdout 只留给列表结果，方便管道处理。

use std::io::Stderr;
use tracing::info;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

type Builder = SubscriberBuilder<DefaultFields, Format, EnvFilter, fn() -> Stderr>;

/// 初始化日志
///
/// `RUST_LOG` 优先；未设置时按 `verbose` 选择 `debug` 或 `info`。
pub fn init(verbose: bool) {
    // 重复初始化（例如测试中）时忽略错误
    let _ = builder(verbose).try_init();
}

/// 在全局日志初始化之前临时输出日志，例如加载配置时
pub fn scoped<T>(verbose: bool, f: impl FnOnce() -> T) -> T {
    tracing::subscriber::with_default(builder(verbose).finish(), f)
}

fn builder(verbose: bool) -> Builder {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr as fn() -> Stderr)
        .with_target(false)
}

/// 记录程序启动信息
pub fn log_startup(command: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 skim_submit 启动 - {}", command);
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}

/// 打印列表统计
pub fn log_listing_complete(kind: &str, count: usize) {
    info!("{}", "─".repeat(60));
    info!("✓ {}完成: 共 {} 项", kind, count);
    info!("{}", "─".repeat(60));
}
