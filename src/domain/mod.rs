// ==========================================
// XmrStak 挖矿控制台 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、文件名常量
// 红线: 不含文件访问逻辑,不含比较引擎逻辑
// ==========================================

pub mod catalog;
pub mod consts;
pub mod types;

// 重导出核心类型
pub use catalog::{Catalog, Configuration, MinerBinary};
pub use types::MinerKind;
