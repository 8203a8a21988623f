// ==========================================
// XmrStak 挖矿控制台 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================
// 注: 片段缺失、无法识别的文件名等跳过条件不是错误,
//     导入返回 Ok(None) 表示无结果
// ==========================================

use crate::repository::error::CatalogError;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 片段相关错误 =====
    #[error("配置片段解析失败: {0}")]
    MalformedFragment(String),

    #[error("片段文件读取失败: {0}")]
    FragmentReadError(String),

    #[error("片段文件写入失败: {0}")]
    FragmentWriteError(String),

    // ===== 目录持久化错误 =====
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
