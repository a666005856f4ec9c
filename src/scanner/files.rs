//! 文件列表：不限深度列出名称包含标识串的文件（例如样本目录下的所有 .root 文件）

use super::walk::walk_all;
use crate::error::ScanError;
use std::path::{Path, PathBuf};

/// 列出 `directory` 下所有文件名包含 `identifier` 的文件完整路径，按遍历顺序
///
/// 非 UTF-8 文件名按有损文本匹配，产出的路径保持原样。
pub fn list_files<'a>(
    directory: impl AsRef<Path>,
    identifier: &'a str,
) -> impl Iterator<Item = Result<PathBuf, ScanError>> + 'a {
    walk_all(directory.as_ref()).flat_map(move |entry| {
        let found: Vec<Result<PathBuf, ScanError>> = match entry {
            Err(e) => vec![Err(e)],
            Ok(entry) => entry
                .files
                .iter()
                .filter(|name| name.to_string_lossy().contains(identifier))
                .map(|name| Ok(entry.directory.join(name)))
                .collect(),
        };
        found
    })
}

/// 收集全部文件，遇到第一个错误即返回
pub fn collect_files(
    directory: impl AsRef<Path>,
    identifier: &str,
) -> Result<Vec<PathBuf>, ScanError> {
    list_files(directory, identifier).collect()
}
