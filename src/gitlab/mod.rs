pub mod issues;

pub(crate) const API_BASE: &str = "https://gitlab.com/api/v4";
