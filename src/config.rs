use crate::error::SyncError;
use anyhow::Result;

/// Required configuration keys and their environment variable names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    GitlabToken,
    GithubToken,
    GitlabProjectId,
    GithubRepo,
}

impl ConfigKey {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::GitlabToken => "GITLAB_TOKEN",
            ConfigKey::GithubToken => "GITHUB_TOKEN",
            ConfigKey::GitlabProjectId => "GITLAB_PROJECT_ID",
            ConfigKey::GithubRepo => "GITHUB_REPO",
        }
    }
}

/// Inputs for a sync run, validated before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub gitlab_token: String,
    pub github_token: String,
    pub gitlab_project_id: String,
    pub github_repo: String,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from a key lookup function. Fails on the
    /// first missing key, naming the environment variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: ConfigKey| {
            lookup(key.as_str()).ok_or(SyncError::MissingConfig(key.as_str()))
        };
        Ok(Config {
            gitlab_token: require(ConfigKey::GitlabToken)?,
            github_token: require(ConfigKey::GithubToken)?,
            gitlab_project_id: require(ConfigKey::GitlabProjectId)?,
            github_repo: require(ConfigKey::GithubRepo)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("GITLAB_TOKEN", "glpat-secret"),
            ("GITHUB_TOKEN", "ghp-secret"),
            ("GITLAB_PROJECT_ID", "12345"),
            ("GITHUB_REPO", "owner/repo"),
        ])
    }

    #[test]
    fn all_keys_present_works() {
        let env = full_env();
        let config = Config::from_lookup(|key| env.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.gitlab_token, "glpat-secret");
        assert_eq!(config.github_token, "ghp-secret");
        assert_eq!(config.gitlab_project_id, "12345");
        assert_eq!(config.github_repo, "owner/repo");
    }

    #[test]
    fn missing_gitlab_token_fails() {
        let mut env = full_env();
        env.remove("GITLAB_TOKEN");

        let result = Config::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("GITLAB_TOKEN"));
    }

    #[test]
    fn missing_github_repo_fails() {
        let mut env = full_env();
        env.remove("GITHUB_REPO");

        let result = Config::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("GITHUB_REPO"));
    }

    #[test]
    fn empty_environment_names_first_missing_key() {
        let result = Config::from_lookup(|_key| None);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("GITLAB_TOKEN"));
    }
}
