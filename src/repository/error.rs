// ==========================================
// XmrStak 挖矿控制台 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum CatalogError {
    // ===== 目录文件错误 =====
    #[error("目录文件不可读 (路径 {path}): {message}")]
    Unreadable { path: String, message: String },

    #[error("目录文件写入失败 (路径 {path}): {message}")]
    Write { path: String, message: String },

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type CatalogResult<T> = Result<T, CatalogError>;
