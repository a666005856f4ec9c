//! 应用编排：把命令行子命令分派到扫描器和作业提交

use crate::cli::{name_filter_switch, Command};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::launcher::{self, BatchQueue, DryRunQueue, JobRequest, QsubQueue};
use crate::logger;
use crate::scanner;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    json: bool,
}

impl App {
    pub fn new(config: Config, json: bool) -> Self {
        Self { config, json }
    }

    /// 运行子命令，结果写到 stdout
    pub fn run(&self, command: Command) -> AppResult<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with(command, &mut out)
    }

    /// 运行子命令，结果写到 `out`
    pub fn run_with(&self, command: Command, out: &mut impl Write) -> AppResult<()> {
        logger::log_startup(command.name());

        match command {
            Command::Submit { args, dry_run } => self.submit(&args, dry_run, out),
            Command::Samples {
                root,
                name_to_search,
                filter_set,
                apply_name_filter,
                no_name_filter,
            } => self.samples(
                &root,
                &name_to_search,
                filter_set.as_deref(),
                name_filter_switch(apply_name_filter, no_name_filter),
                out,
            ),
            Command::Files {
                directory,
                identifier,
                chunk_size,
            } => self.files(&directory, &identifier, chunk_size, out),
        }
    }

    fn submit(&self, args: &[String], dry_run: bool, out: &mut impl Write) -> AppResult<()> {
        let request = JobRequest::from_positionals(args, &self.config.job.default_wall_time)?;

        let queue: Box<dyn BatchQueue> = if dry_run {
            Box::new(DryRunQueue)
        } else {
            Box::new(QsubQueue::new(&self.config.job.submit_command))
        };

        let job_id = launcher::launch_job(&self.config, &request, queue.as_ref())?;

        if self.json {
            let record = serde_json::json!({ "job_id": job_id, "request": request });
            writeln!(out, "{}", serde_json::to_string_pretty(&record)?).map_err(stdout_error)?;
        } else {
            writeln!(out, "{}", job_id).map_err(stdout_error)?;
        }
        Ok(())
    }

    fn samples(
        &self,
        root: &Path,
        name_to_search: &str,
        filter_set: Option<&str>,
        apply_name_filter: Option<bool>,
        out: &mut impl Write,
    ) -> AppResult<()> {
        info!(
            "\n📁 正在扫描样本目录: {} (匹配 '{}')",
            root.display(),
            name_to_search
        );
        let policy = self.config.sample_policy(filter_set, apply_name_filter)?;
        let samples = scanner::collect_sample_directories(root, name_to_search, &policy)?;

        if samples.is_empty() {
            warn!("⚠️ 没有找到匹配的样本目录");
        }

        if self.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&samples)?).map_err(stdout_error)?;
        } else {
            for sample in &samples {
                writeln!(out, "{}", sample.path().display()).map_err(stdout_error)?;
            }
        }

        logger::log_listing_complete("样本目录扫描", samples.len());
        Ok(())
    }

    fn files(
        &self,
        directory: &Path,
        identifier: &str,
        chunk_size: Option<usize>,
        out: &mut impl Write,
    ) -> AppResult<()> {
        info!(
            "\n📁 正在列出文件: {} (包含 '{}')",
            directory.display(),
            identifier
        );
        let files = scanner::collect_files(directory, identifier)?;

        match chunk_size {
            Some(size) => {
                let parts: Vec<&[PathBuf]> = scanner::list_parts(&files, size)?.collect();
                info!("📦 {} 个文件分为 {} 组", files.len(), parts.len());
                if self.json {
                    writeln!(out, "{}", serde_json::to_string_pretty(&parts)?)
                        .map_err(stdout_error)?;
                } else {
                    for part in parts {
                        let line = part
                            .iter()
                            .map(|p| p.to_string_lossy())
                            .collect::<Vec<_>>()
                            .join(" ");
                        writeln!(out, "{}", line).map_err(stdout_error)?;
                    }
                }
            }
            None => {
                if self.json {
                    writeln!(out, "{}", serde_json::to_string_pretty(&files)?)
                        .map_err(stdout_error)?;
                } else {
                    for file in &files {
                        writeln!(out, "{}", file.display()).map_err(stdout_error)?;
                    }
                }
            }
        }

        logger::log_listing_complete("文件列表", files.len());
        Ok(())
    }
}

fn stdout_error(e: std::io::Error) -> AppError {
    AppError::io("<stdout>", e)
}
