//! 屏蔽词过滤层
//!
//! 在用户提交动态前检查待发送文本，命中屏蔽词时要求确认。
//!
//! ## 处理流程
//! 1. Unicode 归一化 + 去除不可见字符 + 转小写
//! 2. 按词库顺序逐词匹配（首个命中即返回）
//! 3. 单词匹配：原词子串 → 变音符替换子串 → 去空格子串 → 编辑距离

mod distance;
mod engine;
mod matcher;
mod normalizer;
mod types;

pub use distance::levenshtein;
pub use engine::{detect, FilterEngine};
pub use matcher::{MatchPolicy, TermMatcher, DEFAULT_DISTANCE_THRESHOLD, DEFAULT_MAX_LENGTH_GAP};
pub use normalizer::TermVariants;
pub use types::{confirmation_message, MatchStrategy, SubmitDecision, Verdict};
