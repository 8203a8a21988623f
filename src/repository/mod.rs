// ==========================================
// XmrStak 挖矿控制台 - 数据仓储层
// ==========================================
// 职责: 目录文件的整体读写
// 红线: 每次保存整体重写,不做局部合并
// ==========================================

// 模块声明
pub mod catalog_repo;
pub mod error;

// 重导出核心类型
pub use catalog_repo::{default_catalog_path, CatalogRepo};
pub use error::{CatalogError, CatalogResult};
