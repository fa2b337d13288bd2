//! 词库词变体生成
//!
//! 将变音符/分隔符替换为 ASCII 写法，用于宽松子串匹配

/// 替换表（按顺序应用）
const SUBSTITUTIONS: &[(char, &str)] = &[
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('ß', "ss"),
    ('_', " "),
];

/// 词库词的规范化变体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermVariants {
    /// 变音符替换后的写法
    pub substituted: String,
    /// 在 `substituted` 基础上去除全部空格
    pub collapsed: String,
}

impl TermVariants {
    /// 计算词库词的变体
    pub fn of(term: &str) -> Self {
        let substituted = substitute(term);
        let collapsed = substituted.replace(' ', "");
        Self {
            substituted,
            collapsed,
        }
    }
}

/// 依次应用替换表，替换所有出现位置
fn substitute(term: &str) -> String {
    let mut result = String::with_capacity(term.len() + 4);
    for ch in term.chars() {
        match SUBSTITUTIONS.iter().find(|(from, _)| *from == ch) {
            Some((_, to)) => result.push_str(to),
            None => result.push(ch),
        }
    }
    result
}
