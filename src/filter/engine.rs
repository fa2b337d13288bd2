//! 过滤主引擎
//!
//! 按词库顺序逐词调用匹配器，返回首个命中的词

use unicode_normalization::UnicodeNormalization;

use crate::config::FilterConfig;
use crate::dictionary_utils::Dictionary;
use crate::filter::matcher::{MatchPolicy, TermMatcher};
use crate::filter::normalizer::TermVariants;
use crate::filter::types::Verdict;

/// 检测文本是否包含词库中的词
///
/// 纯函数：不做大小写转换（调用方负责先转小写），按词库顺序返回首个命中词
pub fn detect<'a, S: AsRef<str>>(text: &str, dictionary: &'a [S]) -> Option<&'a str> {
    let matcher = TermMatcher::default();
    dictionary
        .iter()
        .map(AsRef::<str>::as_ref)
        .find(|term| matcher.matches(text, term, &TermVariants::of(term)).is_some())
}

/// 过滤引擎（可复用，预计算词库变体）
#[derive(Debug, Clone)]
pub struct FilterEngine {
    /// 词库词及其变体（保持词库顺序）
    entries: Vec<(String, TermVariants)>,
    matcher: TermMatcher,
    lowercase_input: bool,
    strip_invisible: bool,
}

impl FilterEngine {
    /// 创建过滤引擎（默认策略：转小写、去除不可见字符）
    pub fn new(dictionary: Dictionary, policy: MatchPolicy) -> Self {
        let entries = dictionary
            .iter()
            .map(|term| (term.clone(), TermVariants::of(term)))
            .collect();

        Self {
            entries,
            matcher: TermMatcher::new(policy),
            lowercase_input: true,
            strip_invisible: true,
        }
    }

    /// 按配置创建引擎
    pub fn from_config(config: &FilterConfig) -> Self {
        let dictionary = config.resolve_dictionary();
        tracing::debug!("过滤引擎初始化: {} 个词, 策略 {:?}", dictionary.len(), config.policy);

        let mut engine = Self::new(dictionary, config.policy);
        engine.lowercase_input = config.lowercase_input;
        engine.strip_invisible = config.strip_invisible;
        engine
    }

    pub fn term_count(&self) -> usize {
        self.entries.len()
    }

    /// 检查用户输入的原文
    ///
    /// NFC 归一化 → 去除不可见字符 → 转小写 → 扫描词库
    pub fn check(&self, raw: &str) -> Verdict {
        let prepared = self.prepare_text(raw);
        self.scan(&prepared)
    }

    /// 扫描已预处理的文本
    ///
    /// 严格按词库顺序，首个命中即返回
    pub fn scan(&self, text: &str) -> Verdict {
        if text.is_empty() {
            return Verdict::Clean;
        }

        for (term, variants) in &self.entries {
            if let Some(strategy) = self.matcher.matches(text, term, variants) {
                tracing::debug!("命中屏蔽词 {:?} ({:?})", term, strategy);
                return Verdict::Blocked {
                    term: term.clone(),
                    strategy,
                };
            }
        }

        tracing::trace!("文本未命中任何屏蔽词");
        Verdict::Clean
    }

    fn prepare_text(&self, raw: &str) -> String {
        let nfc: String = raw.nfc().collect();

        let cleaned: String = if self.strip_invisible {
            nfc.chars().filter(|c| !is_invisible(*c)).collect()
        } else {
            nfc
        };

        if self.lowercase_input {
            cleaned.to_lowercase()
        } else {
            cleaned
        }
    }
}

/// 零宽/不可见字符，可被用于绕过过滤
fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{200b}' // zero-width space
        | '\u{200c}' // zero-width non-joiner
        | '\u{200d}' // zero-width joiner
        | '\u{200e}' // LTR mark
        | '\u{200f}' // RTL mark
        | '\u{2060}' // word joiner
        | '\u{feff}' // BOM
        | '\u{00ad}' // soft hyphen
        | '\u{034f}' // combining grapheme joiner
        | '\u{180e}' // Mongolian vowel separator
    )
}
