// 配置管理模块

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::builtin_dictionary::{
    builtin_dictionary, load_dictionary_from_path, read_dictionary_from_path,
};
use crate::dictionary_utils::{remove_terms, upsert_term, Dictionary};
use crate::filter::MatchPolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// 自定义词库文件（每行一个词），设置后总是优先加载
    #[serde(default)]
    pub dictionary_path: Option<PathBuf>,
    /// 是否使用内置词库（未设置自定义词库时作为基础词库，否则作为加载失败时的回退）
    #[serde(default = "default_true")]
    pub use_builtin_dictionary: bool,
    /// 追加到词库末尾的词
    #[serde(default)]
    pub extra_terms: Vec<String>,
    /// 从词库中剔除的词
    #[serde(default)]
    pub allowed_terms: Vec<String>,
    /// 检测前将输入转为小写
    #[serde(default = "default_true")]
    pub lowercase_input: bool,
    /// 检测前去除零宽等不可见字符
    #[serde(default = "default_true")]
    pub strip_invisible: bool,
    #[serde(default)]
    pub policy: MatchPolicy,
}

fn default_true() -> bool {
    true
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            use_builtin_dictionary: true,
            extra_terms: Vec::new(),
            allowed_terms: Vec::new(),
            lowercase_input: true,
            strip_invisible: true,
            policy: MatchPolicy::default(),
        }
    }
}

impl FilterConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        let app_dir = config_dir.join("PostGuard");
        std::fs::create_dir_all(&app_dir)?;
        Ok(app_dir.join("config.json"))
    }

    /// 从默认路径加载，文件不存在时返回默认配置
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        tracing::debug!("尝试从以下路径加载配置: {:?}", path);

        if !path.exists() {
            tracing::debug!("配置文件不存在，使用默认配置");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("解析配置文件失败 {:?}: {}", path, e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = serde_json::to_string_pretty(self)?;
        tracing::info!("保存配置到: {:?}", path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // 先写临时文件，再重命名
        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, &content)?;
        std::fs::rename(&temp_path, path).map_err(|e| {
            tracing::error!("替换配置文件失败: {}", e);
            let _ = std::fs::remove_file(&temp_path);
            e
        })?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.policy.distance_threshold == 0 {
            anyhow::bail!("编辑距离阈值必须大于 0");
        }

        if !self.use_builtin_dictionary
            && self.dictionary_path.is_none()
            && self.extra_terms.iter().all(|t| t.trim().is_empty())
        {
            anyhow::bail!("禁用内置词库时必须提供 dictionary_path 或 extra_terms");
        }

        if let Some(term) = self.extra_terms.iter().find(|t| t.contains(',')) {
            anyhow::bail!("词条不能包含逗号: {}", term);
        }

        Ok(())
    }

    /// 组装最终词库：基础词库 + extra_terms - allowed_terms
    pub fn resolve_dictionary(&self) -> Dictionary {
        let base = match (&self.dictionary_path, self.use_builtin_dictionary) {
            (Some(path), true) => load_dictionary_from_path(path),
            (Some(path), false) => read_dictionary_from_path(path).unwrap_or_else(|err| {
                tracing::warn!("{}，内置词库已禁用，仅使用 extra_terms", err);
                Dictionary::default()
            }),
            (None, true) => builtin_dictionary(),
            (None, false) => Dictionary::default(),
        };

        if self.extra_terms.is_empty() && self.allowed_terms.is_empty() {
            return base;
        }

        let mut terms = base.terms().to_vec();
        for term in &self.extra_terms {
            upsert_term(&mut terms, term);
        }
        remove_terms(&mut terms, &self.allowed_terms);
        Dictionary::new(terms)
    }
}
