// ==========================================
// XmrStak 挖矿控制台 - 目录领域模型
// ==========================================
// 对齐: 目录文件根对象 settings/miners/configurations
// 红线: 实体只增不删,由外部协作方决定裁剪
// ==========================================

use crate::domain::types::MinerKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ==========================================
// Catalog - 配置目录根聚合
// ==========================================
// 用途: 仓储层读写,导入层修改
// 生命周期: 进程生命周期,单实例
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    // ===== 全局设置（不透明记录，本核心不解释其内容）=====
    #[serde(default)]
    pub settings: Value,

    // ===== 已知矿工（插入顺序 = 发现顺序）=====
    #[serde(default)]
    pub miners: Vec<MinerBinary>,

    // ===== 已知运行配置（插入顺序 = 导入顺序）=====
    #[serde(default)]
    pub configurations: Vec<Configuration>,
}

impl Catalog {
    /// 创建空目录（首次运行时使用）
    pub fn empty() -> Self {
        Self {
            settings: Value::Object(Map::new()),
            miners: Vec::new(),
            configurations: Vec::new(),
        }
    }

    /// 按路径查找已注册矿工（大小写不敏感）
    pub fn find_miner(&self, path: &str) -> Option<&MinerBinary> {
        self.miners
            .iter()
            .find(|m| m.path.eq_ignore_ascii_case(path))
    }

    /// 注册矿工可执行文件
    ///
    /// # 返回
    /// - true: 新路径,已追加
    /// - false: 路径已存在（大小写不敏感比较）,不做任何修改
    pub fn register_miner(&mut self, path: &str) -> bool {
        if self.find_miner(path).is_some() {
            return false;
        }
        self.miners.push(MinerBinary {
            path: path.to_string(),
        });
        true
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

// ==========================================
// MinerBinary - 矿工可执行文件记录
// ==========================================
// 唯一键: path（大小写不敏感）
// 红线: 创建后不变,不自动删除
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinerBinary {
    pub path: String, // 矿工可执行文件的完整路径
}

// ==========================================
// Configuration - 运行配置记录
// ==========================================
// 三个槽位互斥,每次导入恰好填充一个
// 等价判定: 三个槽位逐一结构等价,name 不参与比较
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub name: String, // 生成规则: "<小写文件名> <本地时间戳>"

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amd: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nvidia: Option<Value>,
}

impl Configuration {
    /// 创建仅填充一个槽位的新配置（name 留待去重后生成）
    pub fn with_payload(kind: MinerKind, payload: Value) -> Self {
        let mut configuration = Self::default();
        configuration.set_payload(kind, payload);
        configuration
    }

    /// 读取指定槽位
    pub fn payload(&self, kind: MinerKind) -> Option<&Value> {
        match kind {
            MinerKind::Cpu => self.cpu.as_ref(),
            MinerKind::Amd => self.amd.as_ref(),
            MinerKind::Nvidia => self.nvidia.as_ref(),
        }
    }

    /// 写入指定槽位
    pub fn set_payload(&mut self, kind: MinerKind, payload: Value) {
        match kind {
            MinerKind::Cpu => self.cpu = Some(payload),
            MinerKind::Amd => self.amd = Some(payload),
            MinerKind::Nvidia => self.nvidia = Some(payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_miner_case_insensitive() {
        let mut catalog = Catalog::empty();
        assert!(catalog.register_miner(r"C:\Miners\XMRig.exe"));
        assert!(!catalog.register_miner(r"c:\miners\xmrig.exe"));
        assert_eq!(catalog.miners.len(), 1, "Should register exactly one miner");
        // 保留首次出现时的原始大小写
        assert_eq!(catalog.miners[0].path, r"C:\Miners\XMRig.exe");
    }

    #[test]
    fn test_configuration_slot_accessors() {
        let configuration = Configuration::with_payload(MinerKind::Amd, json!({"gpus": 2}));
        assert!(configuration.cpu.is_none());
        assert!(configuration.nvidia.is_none());
        assert_eq!(
            configuration.payload(MinerKind::Amd),
            Some(&json!({"gpus": 2}))
        );
    }

    #[test]
    fn test_catalog_serde_member_names() {
        let mut catalog = Catalog::empty();
        catalog.register_miner(r"C:\Miners\xmr-stak-cpu.exe");
        catalog.configurations.push(Configuration {
            name: "xmr-stak-cpu.exe 2024-01-01 00:00:00".to_string(),
            cpu: Some(json!({"threads": 4})),
            ..Default::default()
        });

        let text = serde_json::to_string(&catalog).expect("Should serialize catalog");
        assert!(text.contains("\"settings\""));
        assert!(text.contains("\"miners\""));
        assert!(text.contains("\"configurations\""));
        assert!(text.contains("\"path\""));
        // 空槽位不序列化
        assert!(!text.contains("\"amd\""));
        assert!(!text.contains("\"nvidia\""));
    }

    #[test]
    fn test_catalog_deserialize_missing_members() {
        // 历史目录文件可能缺少成员,全部按空处理
        let catalog: Catalog = serde_json::from_str("{}").expect("Should parse empty object");
        assert!(catalog.miners.is_empty());
        assert!(catalog.configurations.is_empty());
    }
}
