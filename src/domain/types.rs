// ==========================================
// XmrStak 挖矿控制台 - 领域类型定义
// ==========================================
// 职责: 矿工硬件后端分类
// ==========================================

use crate::domain::consts;
use serde::{Deserialize, Serialize};

// ==========================================
// MinerKind - 矿工硬件后端
// ==========================================
// 每种后端对应 Configuration 中一个互斥的负载槽位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinerKind {
    Cpu,
    Amd,
    Nvidia,
}

impl MinerKind {
    /// 按矿工可执行文件名分类（输入须已转小写）
    ///
    /// # 返回
    /// - Some(MinerKind): 三个已知文件名之一
    /// - None: 无法识别的文件名（不进行解码）
    pub fn classify(file_name: &str) -> Option<Self> {
        match file_name {
            consts::CPU_MINER_FILE => Some(MinerKind::Cpu),
            consts::AMD_MINER_FILE => Some(MinerKind::Amd),
            consts::NVIDIA_MINER_FILE => Some(MinerKind::Nvidia),
            _ => None,
        }
    }

    /// 后端标签（目录文件中的槽位键名）
    pub fn label(&self) -> &'static str {
        match self {
            MinerKind::Cpu => "cpu",
            MinerKind::Amd => "amd",
            MinerKind::Nvidia => "nvidia",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_miners() {
        assert_eq!(MinerKind::classify("xmr-stak-cpu.exe"), Some(MinerKind::Cpu));
        assert_eq!(MinerKind::classify("xmr-stak-amd.exe"), Some(MinerKind::Amd));
        assert_eq!(
            MinerKind::classify("xmr-stak-nvidia.exe"),
            Some(MinerKind::Nvidia)
        );
    }

    #[test]
    fn test_classify_unknown_miner() {
        assert_eq!(MinerKind::classify("notepad.exe"), None);
        assert_eq!(MinerKind::classify(""), None);
    }
}
