// 词库工具函数
//
// 独立模块，提供词库的解析和条目维护功能
// 被过滤引擎、内置词库加载、命令行共享使用

use std::collections::HashSet;

/// 有序、只读的屏蔽词库
///
/// 顺序决定多个词同时命中时报告哪一个；允许重复（先出现者优先）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    terms: Vec<String>,
}

impl Dictionary {
    pub fn new(terms: Vec<String>) -> Self {
        Self { terms }
    }

    /// 解析词库文本
    ///
    /// 每行一个词，去除首尾空白；空行与 `#` 开头的注释行忽略
    pub fn parse(content: &str) -> Self {
        let terms = content
            .lines()
            .map(normalize_term)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.terms.iter()
    }
}

/// 标准化词汇（去除首尾空格）
pub fn normalize_term(term: &str) -> String {
    term.trim().to_string()
}

/// 追加词条（已存在则保持原位置不变）
pub fn upsert_term(terms: &mut Vec<String>, term: &str) {
    let normalized = normalize_term(term);
    if normalized.is_empty() {
        return;
    }

    if terms.iter().any(|t| *t == normalized) {
        return;
    }

    terms.push(normalized);
}

/// 删除指定词汇（所有重复项一并删除）
pub fn remove_terms(terms: &mut Vec<String>, to_remove: &[String]) {
    let remove_set: HashSet<&str> = to_remove.iter().map(|s| s.as_str()).collect();
    terms.retain(|t| !remove_set.contains(t.as_str()));
}

/// 去重，保留首次出现的顺序
pub fn dedup_preserving_order(terms: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    terms
        .iter()
        .filter(|t| seen.insert(t.as_str()))
        .cloned()
        .collect()
}
