// ==========================================
// XmrStak 挖矿控制台 - 导入层
// ==========================================
// 职责: 外部矿工配置导入,片段编解码
// 流程: 定位片段 → 解码 → 去重 → 持久化
// ==========================================

// 模块声明
pub mod error;
pub mod fragment_codec;
pub mod miner_importer;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use fragment_codec::{decode_fragment, encode_fragment};
pub use miner_importer::MinerImporter;
