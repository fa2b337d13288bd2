//! 过滤器类型定义

use serde::{Deserialize, Serialize};

/// 命中策略（按尝试顺序排列）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStrategy {
    /// 原词子串匹配
    Exact,
    /// 变音符替换后子串匹配（如 "ü" → "ue"）
    Substituted,
    /// 去空格后子串匹配（如 "bad_word" → "badword"）
    Collapsed,
    /// 按空白切分后的编辑距离匹配
    EditDistance,
}

/// 检测结论
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// 未命中任何词
    Clean,
    /// 命中词库中的词
    Blocked {
        /// 词库中的原词（用于提示）
        term: String,
        /// 命中策略
        strategy: MatchStrategy,
    },
}

impl Verdict {
    /// 命中的词库词
    pub fn term(&self) -> Option<&str> {
        match self {
            Self::Clean => None,
            Self::Blocked { term, .. } => Some(term),
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}

/// 提交决策
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitDecision {
    /// 直接发送
    Proceed,
    /// 需要用户确认后再发送
    ConfirmRequired {
        term: String,
        message: String,
    },
}

impl From<&Verdict> for SubmitDecision {
    fn from(verdict: &Verdict) -> Self {
        match verdict.term() {
            None => Self::Proceed,
            Some(term) => Self::ConfirmRequired {
                term: term.to_string(),
                message: confirmation_message(term),
            },
        }
    }
}

/// 生成确认提示文案
pub fn confirmation_message(term: &str) -> String {
    format!(
        "Du hast das Wort '{}' verwendet. Bist du dir sicher, dass du diesen Text so absenden möchtest?",
        term
    )
}
