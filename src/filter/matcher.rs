//! 单词匹配器
//!
//! 对单个词库词依次尝试：原词子串 → 替换变体子串 → 去空格变体子串 → 编辑距离

use serde::{Deserialize, Serialize};

use crate::filter::distance::levenshtein;
use crate::filter::normalizer::TermVariants;
use crate::filter::types::MatchStrategy;

/// 默认长度差上限（字符数）
pub const DEFAULT_MAX_LENGTH_GAP: usize = 2;
/// 默认编辑距离阈值（严格小于才算命中）
pub const DEFAULT_DISTANCE_THRESHOLD: usize = 2;

/// 模糊匹配策略参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPolicy {
    /// token 与词库词的长度差超过该值时跳过编辑距离计算
    #[serde(default = "default_max_length_gap")]
    pub max_length_gap: usize,
    /// 编辑距离 < 该值视为命中
    #[serde(default = "default_distance_threshold")]
    pub distance_threshold: usize,
}

fn default_max_length_gap() -> usize {
    DEFAULT_MAX_LENGTH_GAP
}

fn default_distance_threshold() -> usize {
    DEFAULT_DISTANCE_THRESHOLD
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            max_length_gap: DEFAULT_MAX_LENGTH_GAP,
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
        }
    }
}

/// 单词匹配器（无状态，仅持有策略参数）
#[derive(Debug, Clone, Copy, Default)]
pub struct TermMatcher {
    policy: MatchPolicy,
}

impl TermMatcher {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    /// 判断 `text` 中是否出现 `term`
    ///
    /// 返回首个成功的策略；空文本或空词永不命中
    pub fn matches(&self, text: &str, term: &str, variants: &TermVariants) -> Option<MatchStrategy> {
        if text.is_empty() || term.is_empty() {
            return None;
        }

        // 1. 原词
        if text.contains(term) {
            return Some(MatchStrategy::Exact);
        }

        // 2. 变音符替换（变体为空时跳过，否则任何文本都会命中）
        if !variants.substituted.is_empty() && text.contains(variants.substituted.as_str()) {
            return Some(MatchStrategy::Substituted);
        }

        // 3. 去空格
        if !variants.collapsed.is_empty() && text.contains(variants.collapsed.as_str()) {
            return Some(MatchStrategy::Collapsed);
        }

        // 4. 编辑距离
        if self.try_edit_distance(text, term) {
            return Some(MatchStrategy::EditDistance);
        }

        None
    }

    /// 按空白切分后逐 token 比较编辑距离
    fn try_edit_distance(&self, text: &str, term: &str) -> bool {
        let term_len = term.chars().count();

        text.split_whitespace().any(|token| {
            let token_len = token.chars().count();
            if token_len.abs_diff(term_len) > self.policy.max_length_gap {
                return false;
            }
            levenshtein(token, term) < self.policy.distance_threshold
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str, term: &str) -> Option<MatchStrategy> {
        TermMatcher::default().matches(text, term, &TermVariants::of(term))
    }

    #[test]
    fn test_exact_substring() {
        assert_eq!(check("du bist dumm", "dumm"), Some(MatchStrategy::Exact));
        assert_eq!(check("dumm", "dumm"), Some(MatchStrategy::Exact));
        // 子串即可，不要求整词
        assert_eq!(check("dummkopf", "dumm"), Some(MatchStrategy::Exact));
    }

    #[test]
    fn test_substituted_substring() {
        assert_eq!(
            check("mein schluessel ist weg", "schlüssel"),
            Some(MatchStrategy::Substituted)
        );
        assert_eq!(check("so eine scheisse", "scheiße"), Some(MatchStrategy::Substituted));
        assert_eq!(check("bad word", "bad_word"), Some(MatchStrategy::Substituted));
    }

    #[test]
    fn test_collapsed_substring() {
        assert_eq!(check("badword", "bad_word"), Some(MatchStrategy::Collapsed));
        assert_eq!(check("das ist ein blowjob", "blow job"), Some(MatchStrategy::Collapsed));
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(
            check("du bist so dumn heute", "dumm"),
            Some(MatchStrategy::EditDistance)
        );
        // 两处拼写错误不命中
        assert_eq!(check("du bist so dunn heute", "dumm"), None);
    }

    #[test]
    fn test_length_gap_gate() {
        // 距离虽为 1，但策略把长度差上限收紧到 0 时应跳过
        let strict = TermMatcher::new(MatchPolicy {
            max_length_gap: 0,
            distance_threshold: 2,
        });
        let variants = TermVariants::of("dumm");
        assert_eq!(strict.matches("so dum", "dumm", &variants), None);
        assert_eq!(
            TermMatcher::default().matches("so dum", "dumm", &variants),
            Some(MatchStrategy::EditDistance)
        );
    }

    #[test]
    fn test_threshold_is_policy() {
        let loose = TermMatcher::new(MatchPolicy {
            max_length_gap: 2,
            distance_threshold: 3,
        });
        let variants = TermVariants::of("dumm");
        assert_eq!(
            loose.matches("so dunn", "dumm", &variants),
            Some(MatchStrategy::EditDistance)
        );
    }

    #[test]
    fn test_empty_inputs_never_match() {
        assert_eq!(check("", "dumm"), None);
        assert_eq!(check("dumm", ""), None);
        assert_eq!(check("", ""), None);
    }

    #[test]
    fn test_separator_only_term_does_not_match_everything() {
        // "_" 替换后为 " "，去空格后为空串
        assert_eq!(check("hallo welt", "_"), Some(MatchStrategy::Substituted));
        assert_eq!(check("hallowelt", "_"), None);
    }

    #[test]
    fn test_short_term_ignores_whitespace_runs() {
        // 连续空白不会产生空 token
        assert_eq!(check("aaaa  bbbb", "x"), None);
    }
}
