//! 批处理队列
//!
//! 只负责"提交脚本、拿到作业号或失败"，不关心作业执行结果，也不重试。

use super::request::WallTime;
use crate::error::{AppError, AppResult};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// 队列返回的作业号
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobId(pub String);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 批处理队列
pub trait BatchQueue {
    /// 提交脚本，返回作业号；只表示入队成功
    fn submit(&self, script: &Path, wall_time: &WallTime) -> AppResult<JobId>;
}

/// qsub 兼容的提交命令：`<command> <script> -l walltime=HH:MM:SS`
#[derive(Debug, Clone)]
pub struct QsubQueue {
    command: String,
}

impl QsubQueue {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn arguments(script: &Path, wall_time: &WallTime) -> Vec<String> {
        vec![
            script.to_string_lossy().into_owned(),
            "-l".to_string(),
            format!("walltime={}", wall_time.as_str()),
        ]
    }
}

impl BatchQueue for QsubQueue {
    fn submit(&self, script: &Path, wall_time: &WallTime) -> AppResult<JobId> {
        let args = Self::arguments(script, wall_time);
        debug!("执行提交命令: {} {}", self.command, args.join(" "));

        let output = Command::new(&self.command)
            .args(&args)
            .output()
            .map_err(|e| AppError::Submission {
                command: self.command.clone(),
                status: None,
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(AppError::Submission {
                command: self.command.clone(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let job_id = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(JobId(job_id))
    }
}

/// 只记录日志、不实际提交
#[derive(Debug, Clone, Default)]
pub struct DryRunQueue;

impl BatchQueue for DryRunQueue {
    fn submit(&self, script: &Path, wall_time: &WallTime) -> AppResult<JobId> {
        info!(
            "🧪 dry-run: 跳过提交 {} (walltime={})",
            script.display(),
            wall_time
        );
        Ok(JobId("dry-run".to_string()))
    }
}
