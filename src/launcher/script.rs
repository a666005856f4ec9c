//! 作业脚本：切换到工作目录后调用分析程序

use super::request::JobRequest;
use crate::error::{AppError, AppResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 生成的作业脚本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobScript {
    pub path: PathBuf,
    pub body: String,
}

impl JobScript {
    /// 生成脚本内容
    pub fn render(
        path: impl Into<PathBuf>,
        working_dir: &Path,
        executable: &str,
        request: &JobRequest,
    ) -> Self {
        let command = std::iter::once(executable)
            .chain(request.arguments())
            .map(shell_quote)
            .collect::<Vec<_>>()
            .join(" ");

        let body = format!(
            "#!/bin/bash\n# 由 skim_submit 生成于 {}\ncd {}\n{}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            shell_quote(&working_dir.to_string_lossy()),
            command
        );

        Self {
            path: path.into(),
            body,
        }
    }

    /// 写入磁盘（覆盖同名文件），Unix 下设置可执行权限
    pub fn write(&self) -> AppResult<()> {
        std::fs::write(&self.path, &self.body).map_err(|e| AppError::io(&self.path, e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o755))
                .map_err(|e| AppError::io(&self.path, e))?;
        }

        debug!("作业脚本已写入: {}", self.path.display());
        Ok(())
    }
}

/// 含空白或特殊字符时加单引号
fn shell_quote(text: &str) -> String {
    let plain = !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=+,@%".contains(c));
    if plain {
        text.to_string()
    } else {
        format!("'{}'", text.replace('\'', r"'\''"))
    }
}
