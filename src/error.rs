use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 命令行参数个数或取值不符合用法
    #[error("用法错误: {0}")]
    Usage(String),

    /// 参数取值非法（例如分块大小为 0、墙钟时间格式错误）
    #[error("参数非法: {0}")]
    InvalidArgument(String),

    /// 批处理队列拒绝了作业（只表示入队失败，不涉及作业执行）
    #[error("作业提交失败 ({command}, 退出状态: {status:?}): {stderr}")]
    Submission {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    /// 配置文件读取或解析失败
    #[error("配置错误 ({}): {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 目录扫描错误
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// 文件写入等 I/O 错误
    #[error("文件操作失败 ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    Json(#[from] serde_json::Error),

    /// 正则表达式构造失败
    #[error("正则表达式错误: {0}")]
    Pattern(#[from] regex::Error),
}

/// 目录扫描错误
#[derive(Debug, Error)]
pub enum ScanError {
    /// 读取目录失败（不存在、无权限等）
    #[error("无法读取目录 {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 参数非法
    #[error("参数非法: {0}")]
    InvalidArgument(String),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件操作错误
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// 创建配置错误
    pub fn config(
        path: impl Into<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Config {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// 进程退出码：用法类错误为 2，其余为 1
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Usage(_) | AppError::InvalidArgument(_) => 2,
            AppError::Scan(ScanError::InvalidArgument(_)) => 2,
            _ => 1,
        }
    }
}

impl ScanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<walkdir::Error> for ScanError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        // 只有跟随符号链接时才会出现目录循环，此处不会发生
        let source = err
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "目录循环"));
        ScanError::Io { path, source }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
