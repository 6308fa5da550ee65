use anyhow::{Context, Result, bail};
use std::path::Path;

/// 確保資料夾存在，不存在時建立（含上層）
///
/// 路徑已存在但不是資料夾時回傳錯誤。
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
    } else if !path.is_dir() {
        bail!("Path is not a directory: {}", path.display());
    }
    Ok(())
}
