// ==========================================
// XmrStak 挖矿控制台 - 核心库
// ==========================================
// 技术栈: Rust + serde_json
// 系统定位: 桌面控制台的配置持久化核心 (GUI 为外部协作方)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则 (结构等价比较)
pub mod engine;

// 数据仓储层 - 目录持久化
pub mod repository;

// 导入层 - 外部矿工配置
pub mod importer;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::MinerKind;

// 领域实体
pub use domain::{Catalog, Configuration, MinerBinary};

// 引擎
pub use engine::structure_compare;

// 仓储
pub use repository::{default_catalog_path, CatalogError, CatalogRepo, CatalogResult};

// 导入
pub use importer::{ImportError, ImportResult, MinerImporter};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "XmrStak 挖矿控制台";

// ==========================================
// 预编译检查
// ==========================================
