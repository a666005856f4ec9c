//! 作业请求：位置参数解析与墙钟时间校验

use crate::error::{AppError, AppResult};
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// 用法说明
pub const USAGE: &str = "用法: skim_submit submit <year> <region> <process> [wall_time]\n\
                         wall_time 格式为 HH:MM:SS，默认 24:00:00";

/// 墙钟时间，格式 `HH:MM:SS`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WallTime(String);

impl WallTime {
    /// 解析并校验：小时至少两位，分钟和秒在 00..=59
    pub fn parse(text: &str) -> AppResult<Self> {
        let re = Regex::new(r"^\d{2,}:[0-5]\d:[0-5]\d$")?;
        if re.is_match(text) {
            Ok(Self(text.to_string()))
        } else {
            Err(AppError::InvalidArgument(format!(
                "墙钟时间 '{}' 不是 HH:MM:SS 格式",
                text
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 一次作业提交请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRequest {
    pub year: String,
    pub region: String,
    pub process: String,
    pub wall_time: WallTime,
}

impl JobRequest {
    /// 由各字段构造，`wall_time` 缺省时使用 `default_wall_time`
    pub fn new(
        year: impl Into<String>,
        region: impl Into<String>,
        process: impl Into<String>,
        wall_time: Option<&str>,
        default_wall_time: &str,
    ) -> AppResult<Self> {
        let year = year.into();
        let region = region.into();
        let process = process.into();

        for (name, value) in [("year", &year), ("region", &region), ("process", &process)] {
            if value.trim().is_empty() {
                return Err(AppError::Usage(format!("参数 {} 不能为空\n{}", name, USAGE)));
            }
        }

        Ok(Self {
            year,
            region,
            process,
            wall_time: WallTime::parse(wall_time.unwrap_or(default_wall_time))?,
        })
    }

    /// 从位置参数解析（不含程序名）
    ///
    /// 接受 3 个或 4 个参数：`year region process [wall_time]`，其他个数返回用法错误。
    pub fn from_positionals(args: &[String], default_wall_time: &str) -> AppResult<Self> {
        match args {
            [year, region, process] => {
                Self::new(year, region, process, None, default_wall_time)
            }
            [year, region, process, wall_time] => Self::new(
                year,
                region,
                process,
                Some(wall_time.as_str()),
                default_wall_time,
            ),
            _ => Err(AppError::Usage(format!(
                "需要 3 或 4 个参数，实际得到 {} 个\n{}",
                args.len(),
                USAGE
            ))),
        }
    }

    /// 分析程序的位置参数
    pub fn arguments(&self) -> [&str; 3] {
        [self.year.as_str(), self.region.as_str(), self.process.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_three_arguments_use_default_wall_time() {
        let request =
            JobRequest::from_positionals(&args(&["2017", "signal", "ttZ"]), "24:00:00").unwrap();
        assert_eq!(request.arguments(), ["2017", "signal", "ttZ"]);
        assert_eq!(request.wall_time.as_str(), "24:00:00");
    }

    #[test]
    fn test_four_arguments_override_wall_time() {
        let request = JobRequest::from_positionals(
            &args(&["2018", "WZ", "data", "120:30:00"]),
            "24:00:00",
        )
        .unwrap();
        assert_eq!(request.wall_time.as_str(), "120:30:00");
    }

    #[test]
    fn test_wrong_argument_count_is_usage_error() {
        for values in [&[][..], &["2017"][..], &["2017", "signal"][..]] {
            let err = JobRequest::from_positionals(&args(values), "24:00:00").unwrap_err();
            assert!(matches!(err, AppError::Usage(_)));
            assert!(err.to_string().contains("year"));
        }
        let too_many = args(&["2017", "signal", "ttZ", "01:00:00", "extra"]);
        assert!(matches!(
            JobRequest::from_positionals(&too_many, "24:00:00"),
            Err(AppError::Usage(_))
        ));
    }

    #[test]
    fn test_empty_field_is_usage_error() {
        let err = JobRequest::new("2017", " ", "ttZ", None, "24:00:00").unwrap_err();
        assert!(matches!(err, AppError::Usage(_)));
    }

    #[test]
    fn test_wall_time_validation() {
        assert!(WallTime::parse("00:05:00").is_ok());
        assert!(WallTime::parse("168:00:00").is_ok());
        for bad in ["24:00", "1:00:00", "24:60:00", "24:00:99", "abc", "24:00:00 "] {
            assert!(
                matches!(WallTime::parse(bad), Err(AppError::InvalidArgument(_))),
                "应拒绝 {}",
                bad
            );
        }
    }

    #[test]
    fn test_bad_default_wall_time_is_rejected() {
        let err = JobRequest::new("2017", "signal", "ttZ", None, "forever").unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }
}
