//! 限定深度的目录遍历
//!
//! 基于 `walkdir` 的自顶向下先序遍历，每个被访问的目录产出一个 [`WalkEntry`]。
//! 是否继续下探由每个节点的 [`Descend`] 决定，而不是在遍历过程中修改待访问列表。
//! 名称一律保留为 `OsString`，只在匹配和显示时做有损转换。

use crate::error::ScanError;
use std::cmp::Ordering;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// 一个被访问的目录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// 目录路径
    pub directory: PathBuf,
    /// 子目录名（按名称排序，包含指向目录的符号链接）
    pub subdirectories: Vec<OsString>,
    /// 文件名（按名称排序）
    pub files: Vec<OsString>,
}

/// 节点产出后是否继续访问其子目录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descend {
    Into,
    Prune,
}

/// 惰性目录遍历器
///
/// 由 [`walk_with`] 或 [`walk_limited_depth`] 创建。
pub struct Walk<F> {
    it: walkdir::IntoIter,
    decide: F,
}

impl<F> Iterator for Walk<F>
where
    F: FnMut(&WalkEntry, usize) -> Descend,
{
    type Item = Result<WalkEntry, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let dent = match self.it.next()? {
                Ok(dent) => dent,
                Err(e) => return Some(Err(e.into())),
            };

            let depth = dent.depth();
            if !dent.file_type().is_dir() {
                // 根目录可以是指向目录的符号链接，walkdir 会跟随它
                if depth > 0 || dent.path().is_dir() {
                    continue;
                }
                return Some(Err(ScanError::io(
                    dent.path(),
                    io::Error::new(io::ErrorKind::InvalidInput, "不是目录"),
                )));
            }

            let entry = match read_entry(dent.into_path()) {
                Ok(entry) => entry,
                Err(e) => {
                    // 目录已读不出内容，外层不必再为它报一次错
                    self.it.skip_current_dir();
                    return Some(Err(e));
                }
            };

            if (self.decide)(&entry, depth) == Descend::Prune {
                self.it.skip_current_dir();
            }
            return Some(Ok(entry));
        }
    }
}

/// 以自定义下探决策遍历 `root`
///
/// `decide` 在每个节点产出时调用一次，参数为节点和它相对 `root` 的深度。
pub fn walk_with<F>(root: &Path, decide: F) -> Walk<F>
where
    F: FnMut(&WalkEntry, usize) -> Descend,
{
    Walk {
        it: WalkDir::new(strip_trailing_separators(root))
            .sort_by(files_first)
            .into_iter(),
        decide,
    }
}

/// 遍历 `root`，深度达到 `max_depth` 的目录仍会产出，但不再下探
///
/// `max_depth = 0` 时只产出根目录本身。
pub fn walk_limited_depth(
    root: &Path,
    max_depth: usize,
) -> Walk<impl FnMut(&WalkEntry, usize) -> Descend> {
    walk_with(root, move |_, depth| {
        if depth >= max_depth {
            Descend::Prune
        } else {
            Descend::Into
        }
    })
}

/// 不限深度遍历
pub fn walk_all(root: &Path) -> Walk<impl FnMut(&WalkEntry, usize) -> Descend> {
    walk_with(root, |_, _| Descend::Into)
}

/// 同一目录内文件在前，其余按名称排序
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// 去掉末尾分隔符；根目录 `/` 保持原样
fn strip_trailing_separators(path: &Path) -> PathBuf {
    let stripped: PathBuf = path.components().collect();
    if stripped.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        stripped
    }
}

/// 列出一个目录的直接子项
fn read_entry(directory: PathBuf) -> Result<WalkEntry, ScanError> {
    let mut subdirectories = Vec::new();
    let mut files = Vec::new();

    let children = WalkDir::new(&directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();
    for child in children {
        let child = child?;
        let file_type = child.file_type();
        // 指向目录的符号链接列出但不跟随
        if file_type.is_dir() || (file_type.is_symlink() && child.path().is_dir()) {
            subdirectories.push(child.file_name().to_os_string());
        } else {
            files.push(child.file_name().to_os_string());
        }
    }

    debug!(
        "访问目录 {}: {} 个子目录, {} 个文件",
        directory.display(),
        subdirectories.len(),
        files.len()
    );

    Ok(WalkEntry {
        directory,
        subdirectories,
        files,
    })
}
