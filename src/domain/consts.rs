// ==========================================
// XmrStak 挖矿控制台 - 文件名常量
// ==========================================
// 依据: xmr-stak 系列矿工的发布文件布局
// ==========================================

// 目录文件（位于控制台可执行文件同目录）
pub const CATALOG_FILE: &str = "config.json";

// 配置片段文件（位于矿工可执行文件同目录，无外层大括号）
pub const FRAGMENT_FILE: &str = "config.txt";

// ===== 可识别的矿工可执行文件名（小写比较）=====
pub const CPU_MINER_FILE: &str = "xmr-stak-cpu.exe";
pub const AMD_MINER_FILE: &str = "xmr-stak-amd.exe";
pub const NVIDIA_MINER_FILE: &str = "xmr-stak-nvidia.exe";

// 配置名称中的时间戳格式（与历史目录文件保持一致）
pub const NAME_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
