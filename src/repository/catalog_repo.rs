// ==========================================
// XmrStak 挖矿控制台 - 目录仓储
// ==========================================
// 职责: 目录文件的加载与保存
// 存储: 单一 JSON 文件,缩进格式
// ==========================================
// 红线: load 不做任何恢复,缺失/损坏直接上抛
// 红线: save 整体重写,读-改-写由调用方编排
// 并发: 单写者假设,外部并发写入不设防护 (last-writer-wins)
// ==========================================

use crate::domain::catalog::Catalog;
use crate::domain::consts;
use crate::repository::error::{CatalogError, CatalogResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// ==========================================
// CatalogRepo - 目录仓储
// ==========================================
pub struct CatalogRepo {
    path: PathBuf,
}

impl CatalogRepo {
    /// 创建新的 CatalogRepo 实例
    ///
    /// # 参数
    /// - path: 目录文件路径（显式注入,便于测试隔离）
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 目录文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 加载完整目录
    ///
    /// # 返回
    /// - Ok(Catalog): 解析成功
    /// - Err(CatalogError::Unreadable): 文件缺失或内容损坏,不做恢复
    pub fn load(&self) -> CatalogResult<Catalog> {
        let text = fs::read_to_string(&self.path).map_err(|e| CatalogError::Unreadable {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        let catalog: Catalog =
            serde_json::from_str(&text).map_err(|e| CatalogError::Unreadable {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        debug!(
            path = %self.path.display(),
            miners = catalog.miners.len(),
            configurations = catalog.configurations.len(),
            "目录加载完成"
        );
        Ok(catalog)
    }

    /// 保存完整目录（整体重写）
    ///
    /// # 返回
    /// - Ok(()): 写入成功
    /// - Err(CatalogError::Write): I/O 失败,不重试
    pub fn save(&self, catalog: &Catalog) -> CatalogResult<()> {
        let text = serde_json::to_string_pretty(catalog)
            .map_err(|e| CatalogError::InternalError(format!("目录序列化失败: {}", e)))?;

        fs::write(&self.path, text).map_err(|e| CatalogError::Write {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        info!(
            path = %self.path.display(),
            miners = catalog.miners.len(),
            configurations = catalog.configurations.len(),
            "目录保存完成"
        );
        Ok(())
    }
}

/// 默认目录文件路径: 控制台可执行文件同目录下的 config.json
///
/// # 说明
/// 仅供外部协作方在缺省场景使用;测试与嵌入场景应显式注入路径
pub fn default_catalog_path() -> CatalogResult<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| CatalogError::InternalError(format!("无法定位可执行文件: {}", e)))?;
    let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(dir.join(consts::CATALOG_FILE))
}
