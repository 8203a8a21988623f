// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的临时目录、矿工夹具、目录仓储初始化
// ==========================================

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use xmr_stak_panel::{Catalog, CatalogRepo};

/// 创建临时目录仓储并落盘一份空目录
///
/// # 返回
/// - TempDir: 临时目录（需要保持存活）
/// - CatalogRepo: 指向临时目录内 config.json 的仓储
#[allow(dead_code)]
pub fn create_test_repo() -> Result<(TempDir, CatalogRepo), Box<dyn Error>> {
    let temp_dir = TempDir::new()?;
    let repo = CatalogRepo::new(temp_dir.path().join("config.json"));

    // 初始空目录
    repo.save(&Catalog::empty())?;

    Ok((temp_dir, repo))
}

/// 在独立子目录中放置一个矿工夹具
///
/// # 参数
/// - root: 父目录（通常为测试临时目录）
/// - sub_dir: 矿工所在子目录名（每个矿工独立目录,避免片段互相覆盖）
/// - file_name: 矿工可执行文件名
/// - fragment: Some(片段内容) 时同目录写入 config.txt
///
/// # 返回
/// - 矿工可执行文件的完整路径
#[allow(dead_code)]
pub fn write_miner_fixture(
    root: &Path,
    sub_dir: &str,
    file_name: &str,
    fragment: Option<&str>,
) -> Result<PathBuf, Box<dyn Error>> {
    let dir = root.join(sub_dir);
    fs::create_dir_all(&dir)?;

    let miner_path = dir.join(file_name);
    fs::write(&miner_path, b"")?;

    if let Some(text) = fragment {
        fs::write(dir.join("config.txt"), text)?;
    }

    Ok(miner_path)
}
