pub mod builtin_dictionary;
pub mod config;
pub mod dictionary_utils;
pub mod filter;

pub use config::FilterConfig;
pub use dictionary_utils::Dictionary;
pub use filter::{detect, FilterEngine, MatchPolicy, MatchStrategy, SubmitDecision, Verdict};
