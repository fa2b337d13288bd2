use std::path::Path;

use anyhow::Result;

use crate::dictionary_utils::Dictionary;

const EMBEDDED_BADWORDS: &str = include_str!("../badwords.txt");
pub const MAX_DICTIONARY_BYTES: usize = 1024 * 1024;
pub const MIN_VALID_TERM_COUNT: usize = 1;

/// 内置词库（编译期嵌入）
pub fn builtin_dictionary() -> Dictionary {
    Dictionary::parse(EMBEDDED_BADWORDS)
}

/// 从文件读取并校验词库
pub fn read_dictionary_from_path(path: &Path) -> Result<Dictionary> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("读取词库失败 {}: {}", path.display(), e))?;
    validate_dictionary(&content)?;

    let dictionary = Dictionary::parse(&content);
    tracing::debug!("已加载词库 {} ({} 个词)", path.display(), dictionary.len());
    Ok(dictionary)
}

/// 从文件加载词库，缺失或校验失败时回退到内置词库
pub fn load_dictionary_from_path(path: &Path) -> Dictionary {
    match read_dictionary_from_path(path) {
        Ok(dictionary) => dictionary,
        Err(err) => {
            tracing::warn!("{}，回退内置词库", err);
            builtin_dictionary()
        }
    }
}

pub fn validate_dictionary(content: &str) -> Result<()> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        anyhow::bail!("词库为空");
    }

    if trimmed.len() > MAX_DICTIONARY_BYTES {
        anyhow::bail!("词库内容过大");
    }

    let mut valid_term_count = 0usize;
    for (line_no, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.contains(',') {
            anyhow::bail!("词库第 {} 行包含逗号: {}", line_no + 1, line);
        }
        valid_term_count += 1;
    }

    if valid_term_count < MIN_VALID_TERM_COUNT {
        anyhow::bail!("词库有效词数不足");
    }

    Ok(())
}
