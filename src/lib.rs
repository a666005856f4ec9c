//! # skim_submit
//!
//! 物理分析样本目录扫描与批处理作业提交工具
//!
//! ## 模块结构
//!
//! ### 目录扫描（`scanner/`）
//! - `walk` - 限定深度的目录遍历，由每个节点的 `Descend` 决定是否下探
//! - `samples` - 按版本标记和样本名过滤集合列出样本目录
//! - `files` - 按标识串（例如 `.root`）列出数据文件
//! - `parts` - 列表分块
//!
//! ### 作业提交（`launcher/`）
//! - `request` - 位置参数与墙钟时间校验
//! - `script` - 生成作业脚本（cd 到工作目录 + 调用分析程序）
//! - `queue` - `BatchQueue` 抽象，`QsubQueue` / `DryRunQueue`
//!
//! ### 其他
//! - `config` - TOML 配置 + 环境变量覆盖
//! - `app` / `cli` - 命令行入口
//! - `logger` - tracing 日志初始化

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod logger;
pub mod scanner;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult, ScanError};
pub use launcher::{launch_job, BatchQueue, JobId, JobRequest, WallTime};
pub use scanner::{
    collect_files, collect_sample_directories, list_files, list_parts, list_sample_directories,
    walk_limited_depth, walk_with, Descend, SampleDirectory, SamplePolicy, WalkEntry,
};
