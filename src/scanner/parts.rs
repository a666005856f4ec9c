//! 列表分块：把文件列表切成固定大小的若干组，便于分批处理

use crate::error::ScanError;
use std::slice::Chunks;

/// 将列表按固定大小分块，最后一块可能较短
///
/// `chunk_size` 为 0 时返回 [`ScanError::InvalidArgument`]。
pub fn list_parts<T>(items: &[T], chunk_size: usize) -> Result<Chunks<'_, T>, ScanError> {
    if chunk_size == 0 {
        return Err(ScanError::InvalidArgument(
            "分块大小必须为正整数".to_string(),
        ));
    }
    Ok(items.chunks(chunk_size))
}
