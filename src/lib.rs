pub mod config;
pub mod error;
pub mod github;
pub mod gitlab;
pub mod output;
pub mod run;
pub mod sync;
