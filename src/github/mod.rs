pub mod issues;
pub mod pull;
pub mod push;

pub(crate) const API_BASE: &str = "https://api.github.com";
pub(crate) const USER_AGENT: &str = "sync-issues";
