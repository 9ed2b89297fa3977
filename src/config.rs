use std::path::PathBuf;

pub const QUESTIONS_VAR: &str = "GEOQUIZ_QUESTIONS";
pub const DB_VAR: &str = "GEOQUIZ_DB";

/// Runtime settings. The bot token itself is read by `Bot::from_env` (`TELOXIDE_TOKEN`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// JSON question bank; the built-in geography bank when unset.
    pub questions_file: Option<PathBuf>,
    /// SQLite file for dialogue storage; in-memory storage when unset.
    pub dialogue_db: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            questions_file: non_empty(QUESTIONS_VAR).map(PathBuf::from),
            dialogue_db: non_empty(DB_VAR),
        }
    }
}
