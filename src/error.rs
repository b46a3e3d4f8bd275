use thiserror::Error;

/// Conditions that abort a sync run outright. Per-item write rejections are
/// not errors; they are reported through `sync::SyncOutcome::Failed` and the
/// run continues.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyncError {
    #[error("missing required environment variable: {0}")]
    MissingConfig(&'static str),
    #[error("GitHub issue listing did not return an empty page within {0} pages")]
    PaginationExhausted(u32),
}
