//! 目录扫描
//!
//! - `walk` - 限定深度的目录遍历
//! - `samples` - 样本目录列表（按版本标记和样本名过滤）
//! - `files` - 按标识串列出数据文件
//! - `parts` - 列表分块，用于把文件分配给多个作业

pub mod files;
pub mod parts;
pub mod samples;
pub mod walk;

pub use files::{collect_files, list_files};
pub use parts::list_parts;
pub use samples::{
    collect_sample_directories, list_sample_directories, SampleDirectory, SampleFilter,
    SamplePolicy,
};
pub use walk::{walk_all, walk_limited_depth, walk_with, Descend, Walk, WalkEntry};
