//! 命令行定义

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// 样本目录扫描与批处理作业提交
#[derive(Debug, Parser)]
#[command(name = "skim_submit", version)]
pub struct Cli {
    /// 配置文件路径（默认读取当前目录下的 samples.toml）
    #[arg(long, global = true, env = "SKIM_CONFIG")]
    pub config: Option<PathBuf>,

    /// 以 JSON 输出结果
    #[arg(long, global = true)]
    pub json: bool,

    /// 显示详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 生成作业脚本并提交到批处理队列
    Submit {
        /// year region process [wall_time]
        #[arg(value_name = "ARGS", num_args = 0..)]
        args: Vec<String>,

        /// 只写脚本，不提交
        #[arg(long)]
        dry_run: bool,
    },

    /// 列出名称包含指定子串的样本目录（遍历深度 1）
    Samples {
        /// 根目录
        root: PathBuf,

        /// 子目录名需包含的子串（例如版本标记）
        name_to_search: String,

        /// 使用的过滤集合名
        #[arg(long)]
        filter_set: Option<String>,

        /// 要求父目录匹配过滤集合
        #[arg(long, conflicts_with = "no_name_filter")]
        apply_name_filter: bool,

        /// 跳过样本名过滤
        #[arg(long)]
        no_name_filter: bool,
    },

    /// 列出文件名包含标识串的所有文件
    Files {
        /// 起始目录
        directory: PathBuf,

        /// 文件名需包含的子串（例如 .root）
        identifier: String,

        /// 每行输出的文件数
        #[arg(long)]
        chunk_size: Option<usize>,
    },
}

impl Command {
    /// 日志中显示的命令名
    pub fn name(&self) -> &'static str {
        match self {
            Command::Submit { .. } => "submit",
            Command::Samples { .. } => "samples",
            Command::Files { .. } => "files",
        }
    }
}

/// 命令行上的过滤开关，未指定时返回 None（沿用配置）
pub fn name_filter_switch(apply: bool, skip: bool) -> Option<bool> {
    match (apply, skip) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_name_filter_switch() {
        assert_eq!(name_filter_switch(true, false), Some(true));
        assert_eq!(name_filter_switch(false, true), Some(false));
        assert_eq!(name_filter_switch(false, false), None);
    }
}
