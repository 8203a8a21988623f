// ==========================================
// XmrStak 挖矿控制台 - 引擎层
// ==========================================
// 职责: 纯业务规则,无副作用
// 红线: 不含文件访问,不含目录修改
// ==========================================

// 模块声明
pub mod structure_compare;

// 重导出核心函数
pub use structure_compare::{deep_equal, equal_configurations, slot_equal};
