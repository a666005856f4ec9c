//! 样本目录列表
//!
//! 在给定根目录下查找名称包含版本标记（或其他子串）的样本子目录。

use super::walk::walk_limited_depth;
use crate::error::ScanError;
use serde::{Serialize, Serializer};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// 样本名过滤列表
///
/// 任一子串出现在候选名称中即为匹配。空列表不匹配任何名称。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleFilter {
    substrings: Vec<String>,
}

impl SampleFilter {
    pub fn new(substrings: Vec<String>) -> Self {
        Self { substrings }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.substrings.iter().any(|s| candidate.contains(s.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.substrings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.substrings.len()
    }
}

/// 样本目录过滤策略
#[derive(Debug, Clone, Default)]
pub struct SamplePolicy {
    pub filter: SampleFilter,
    /// 为 true 时父目录路径必须匹配 `filter`；为 false 时跳过该检查
    pub apply_name_filter: bool,
}

impl SamplePolicy {
    /// 不做样本名过滤
    pub fn unfiltered() -> Self {
        Self::default()
    }

    /// 要求父目录匹配给定子串
    pub fn filtered(substrings: Vec<String>) -> Self {
        Self {
            filter: SampleFilter::new(substrings),
            apply_name_filter: true,
        }
    }

    fn accepts_parent(&self, parent: &Path) -> bool {
        !self.apply_name_filter || self.filter.matches(&parent.to_string_lossy())
    }
}

/// 一个样本目录：(父目录, 子目录名)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleDirectory {
    pub parent: PathBuf,
    #[serde(serialize_with = "lossy_name")]
    pub name: OsString,
}

impl SampleDirectory {
    /// 完整路径
    pub fn path(&self) -> PathBuf {
        self.parent.join(&self.name)
    }
}

/// JSON 输出中的目录名，非 UTF-8 字节替换为 U+FFFD
fn lossy_name<S: Serializer>(name: &OsString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&name.to_string_lossy())
}

/// 列出 `root` 下一层以内、名称包含 `name_to_search` 的子目录
///
/// 遍历深度为 1：根目录和它的直接子目录都会作为父目录参与匹配。
/// 两个匹配都是区分大小写的子串包含判断。
pub fn list_sample_directories<'a>(
    root: impl AsRef<Path>,
    name_to_search: &'a str,
    policy: &'a SamplePolicy,
) -> impl Iterator<Item = Result<SampleDirectory, ScanError>> + 'a {
    walk_limited_depth(root.as_ref(), 1).flat_map(move |entry| {
        let found: Vec<Result<SampleDirectory, ScanError>> = match entry {
            Err(e) => vec![Err(e)],
            Ok(entry) if !policy.accepts_parent(&entry.directory) => Vec::new(),
            Ok(entry) => {
                let parent = entry.directory;
                entry
                    .subdirectories
                    .into_iter()
                    .filter(|name| name.to_string_lossy().contains(name_to_search))
                    .map(|name| {
                        Ok(SampleDirectory {
                            parent: parent.clone(),
                            name,
                        })
                    })
                    .collect()
            }
        };
        found
    })
}

/// 收集全部样本目录，遇到第一个错误即返回
pub fn collect_sample_directories(
    root: impl AsRef<Path>,
    name_to_search: &str,
    policy: &SamplePolicy,
) -> Result<Vec<SampleDirectory>, ScanError> {
    list_sample_directories(root, name_to_search, policy).collect()
}
