//! 程序配置
//!
//! 优先级：默认值 < 配置文件 < 环境变量 < 命令行参数。

use crate::error::{AppError, AppResult};
use crate::scanner::{SampleFilter, SamplePolicy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 未指定配置路径时在当前目录查找的文件名
pub const DEFAULT_CONFIG_FILE: &str = "samples.toml";

/// 程序配置
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 具名的样本名过滤集合
    pub filter_sets: BTreeMap<String, Vec<String>>,
    /// 当前使用的过滤集合名
    pub active_filter_set: Option<String>,
    /// 是否要求父目录匹配过滤集合
    pub apply_name_filter: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 作业提交配置
    pub job: JobConfig,
}

/// 作业提交配置
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    /// 作业脚本中 cd 的目录，未设置时使用当前目录
    pub working_dir: Option<PathBuf>,
    /// 分析程序
    pub executable: String,
    /// 生成的作业脚本文件名
    pub script_name: String,
    /// 默认墙钟时间
    pub default_wall_time: String,
    /// 提交命令
    pub submit_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter_sets: BTreeMap::new(),
            active_filter_set: None,
            apply_name_filter: false,
            verbose_logging: false,
            job: JobConfig::default(),
        }
    }
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            working_dir: None,
            executable: "./ttZAnalysis".to_string(),
            script_name: "submit.sh".to_string(),
            default_wall_time: "24:00:00".to_string(),
            submit_command: "qsub".to_string(),
        }
    }
}

impl Config {
    /// 只用默认值和环境变量构造
    pub fn from_env() -> Self {
        Self::default().with_overrides(env_lookup)
    }

    /// 从 TOML 文件加载，再叠加环境变量
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::config(path, e))?;
        let config: Config = toml::from_str(&content).map_err(|e| AppError::config(path, e))?;
        debug!(
            "已加载配置 {}: {} 个过滤集合",
            path.display(),
            config.filter_sets.len()
        );
        Ok(config.with_overrides(env_lookup))
    }

    /// 按优先级解析配置
    ///
    /// 显式给出的路径必须存在；否则在当前目录查找 `samples.toml`，找不到就用默认值。
    pub fn resolve(explicit: Option<&Path>) -> AppResult<Self> {
        match explicit {
            Some(path) => Config::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Config::load(fallback)
                } else {
                    debug!("未找到 {}，使用默认配置", DEFAULT_CONFIG_FILE);
                    Ok(Config::from_env())
                }
            }
        }
    }

    /// 用查找函数叠加覆盖项，便于测试时不依赖进程环境
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup("SKIM_FILTER_SET") {
            self.active_filter_set = Some(v);
        }
        if let Some(v) = lookup("SKIM_APPLY_NAME_FILTER").and_then(|v| v.parse().ok()) {
            self.apply_name_filter = v;
        }
        if let Some(v) = lookup("VERBOSE_LOGGING").and_then(|v| v.parse().ok()) {
            self.verbose_logging = v;
        }
        if let Some(v) = lookup("SKIM_WORKING_DIR") {
            self.job.working_dir = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("SKIM_EXECUTABLE") {
            self.job.executable = v;
        }
        if let Some(v) = lookup("SKIM_SCRIPT_NAME") {
            self.job.script_name = v;
        }
        if let Some(v) = lookup("SKIM_WALL_TIME") {
            self.job.default_wall_time = v;
        }
        if let Some(v) = lookup("SKIM_SUBMIT_COMMAND") {
            self.job.submit_command = v;
        }
        self
    }

    /// 生成样本目录过滤策略
    ///
    /// `filter_set` 覆盖配置中的 `active_filter_set`，`apply_name_filter`
    /// 覆盖配置中的同名开关。集合名不存在时返回用法错误。
    pub fn sample_policy(
        &self,
        filter_set: Option<&str>,
        apply_name_filter: Option<bool>,
    ) -> AppResult<SamplePolicy> {
        let apply = apply_name_filter.unwrap_or(self.apply_name_filter);
        let name = filter_set.or(self.active_filter_set.as_deref());

        let substrings = match name {
            Some(name) => self.filter_sets.get(name).cloned().ok_or_else(|| {
                let known: Vec<&str> = self.filter_sets.keys().map(String::as_str).collect();
                AppError::Usage(format!(
                    "未知的过滤集合 '{}'，可用: [{}]",
                    name,
                    known.join(", ")
                ))
            })?,
            None => Vec::new(),
        };

        let policy = SamplePolicy {
            filter: SampleFilter::new(substrings),
            apply_name_filter: apply,
        };

        if apply && policy.filter.is_empty() {
            warn!("⚠️ 已启用样本名过滤但过滤集合为空，不会产生任何结果");
        }
        if let Some(name) = name {
            info!(
                "📋 过滤集合: {} ({} 项, 启用: {})",
                name,
                policy.filter.len(),
                apply
            );
        }

        Ok(policy)
    }

    /// 作业脚本中的工作目录
    pub fn working_dir(&self) -> AppResult<PathBuf> {
        match &self.job.working_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(|e| AppError::io(".", e)),
        }
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
