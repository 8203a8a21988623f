// ==========================================
// XmrStak 挖矿控制台 - 矿工配置导入器
// ==========================================
// 流程: 矿工注册 → 片段定位 → 分类 → 解码 → 去重 → 持久化
// ==========================================
// 红线: 跳过条件 (片段缺失/文件名无法识别/路径成分缺失) 不是错误
// 红线: 去重命中时复用现有配置,不更新其 name
// 红线: 凡进入矿工注册步骤的导入,结束时均整体持久化目录
// ==========================================

use crate::domain::catalog::{Catalog, Configuration};
use crate::domain::consts;
use crate::domain::types::MinerKind;
use crate::engine::structure_compare::equal_configurations;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::fragment_codec::{decode_fragment, encode_fragment};
use crate::repository::catalog_repo::CatalogRepo;
use chrono::Local;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

// ==========================================
// MinerImporter - 矿工配置导入器
// ==========================================
pub struct MinerImporter {
    repo: CatalogRepo,
}

impl MinerImporter {
    /// 创建新的 MinerImporter 实例
    ///
    /// # 参数
    /// - repo: 目录仓储（持有目录文件路径）
    pub fn new(repo: CatalogRepo) -> Self {
        Self { repo }
    }

    /// 目录仓储
    pub fn repo(&self) -> &CatalogRepo {
        &self.repo
    }

    /// 导入矿工可执行文件及其配置片段
    ///
    /// # 步骤
    /// 1. 文件名或父目录缺失 → 无操作,返回 None,不持久化
    /// 2. 注册矿工（大小写不敏感路径去重）
    /// 3. 导入配置片段（可能因跳过条件返回 None）
    /// 4. 整体持久化目录（无论配置是否去重命中,新矿工都要落盘）
    ///
    /// # 返回
    /// - Ok(Some(Configuration)): 新增或去重命中的配置
    /// - Ok(None): 跳过条件命中,无配置产出
    /// - Err(ImportError): 片段损坏或持久化失败
    pub fn import(
        &self,
        catalog: &mut Catalog,
        miner_file: &Path,
    ) -> ImportResult<Option<Configuration>> {
        if lowercase_file_name(miner_file).is_none() || miner_file.parent().is_none() {
            debug!(miner = %miner_file.display(), "路径成分缺失,导入无操作");
            return Ok(None);
        }

        Self::import_miner(catalog, miner_file);
        let configuration = Self::import_configuration(catalog, miner_file)?;
        self.repo.save(catalog)?;

        Ok(configuration)
    }

    /// 注册矿工可执行文件（仅内存修改,不持久化）
    ///
    /// 路径按大小写不敏感比较,已存在则不做任何修改
    pub fn import_miner(catalog: &mut Catalog, miner_file: &Path) {
        if lowercase_file_name(miner_file).is_none() {
            return;
        }

        let path = miner_file.display().to_string();
        if catalog.register_miner(&path) {
            info!(miner = %path, "注册新矿工");
        } else {
            debug!(miner = %path, "矿工已注册,跳过");
        }
    }

    /// 导入矿工同目录的配置片段（仅内存修改,不持久化）
    ///
    /// # 跳过条件（返回 Ok(None)）
    /// - 路径成分缺失
    /// - 同目录无 config.txt
    /// - 文件名不属于三个已知矿工
    ///
    /// # 去重
    /// 线性扫描现有配置,三槽位结构等价即命中,
    /// 命中时返回现有条目（name 不变,不追加）
    pub fn import_configuration(
        catalog: &mut Catalog,
        miner_file: &Path,
    ) -> ImportResult<Option<Configuration>> {
        let Some(file_name) = lowercase_file_name(miner_file) else {
            return Ok(None);
        };
        let Some(dir) = miner_file.parent() else {
            return Ok(None);
        };

        let fragment_path = dir.join(consts::FRAGMENT_FILE);
        if !fragment_path.exists() {
            debug!(path = %fragment_path.display(), "未找到配置片段,跳过配置导入");
            return Ok(None);
        }

        let Some(kind) = MinerKind::classify(&file_name) else {
            warn!(file_name = %file_name, "无法识别的矿工文件名,跳过配置导入");
            return Ok(None);
        };

        let text = fs::read_to_string(&fragment_path).map_err(|e| {
            ImportError::FragmentReadError(format!("{}: {}", fragment_path.display(), e))
        })?;
        let payload = decode_fragment(&text)?;
        let mut fresh = Configuration::with_payload(kind, payload);

        if let Some(existing) = catalog
            .configurations
            .iter()
            .find(|c| equal_configurations(c, &fresh))
        {
            info!(name = %existing.name, "配置与现有条目结构等价,复用");
            return Ok(Some(existing.clone()));
        }

        fresh.name = format!(
            "{} {}",
            file_name,
            Local::now().format(consts::NAME_TIMESTAMP_FORMAT)
        );
        info!(name = %fresh.name, kind = kind.label(), "新增配置");
        catalog.configurations.push(fresh.clone());
        Ok(Some(fresh))
    }

    /// 将配置的单个槽位写回矿工同目录的 config.txt
    ///
    /// 槽位由调用点指定的 MinerKind 选择;
    /// 父目录缺失或目标槽位为空时为无操作
    pub fn save_fragment(
        configuration: &Configuration,
        kind: MinerKind,
        miner_file: &Path,
    ) -> ImportResult<()> {
        let Some(dir) = miner_file.parent() else {
            return Ok(());
        };
        let Some(payload) = configuration.payload(kind) else {
            debug!(kind = kind.label(), "目标槽位为空,跳过片段写出");
            return Ok(());
        };

        let text = encode_fragment(payload)?;
        let fragment_path = dir.join(consts::FRAGMENT_FILE);
        fs::write(&fragment_path, text).map_err(|e| {
            ImportError::FragmentWriteError(format!("{}: {}", fragment_path.display(), e))
        })?;

        debug!(path = %fragment_path.display(), kind = kind.label(), "片段写出完成");
        Ok(())
    }
}

/// 提取小写文件名（无文件名成分时返回 None）
fn lowercase_file_name(miner_file: &Path) -> Option<String> {
    miner_file
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_lowercase())
}
