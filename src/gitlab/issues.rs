use anyhow::Result;
use serde_json::Value;

/// Issue record read from the source project, immutable within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitLabIssue {
    pub title: String,
    pub description: String,
    pub state: GitLabIssueState,
}

/// State vocabulary used by the GitLab issues API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitLabIssueState {
    Opened,
    Closed,
}

pub fn parse_gitlab_issues(issues_json: &[Value]) -> Vec<GitLabIssue> {
    issues_json
        .iter()
        .filter_map(|issue| {
            if let (Some(title), Some(state)) =
                (issue["title"].as_str(), issue["state"].as_str())
            {
                let state = match state {
                    "opened" => GitLabIssueState::Opened,
                    "closed" => GitLabIssueState::Closed,
                    _ => return None,
                };

                Some(GitLabIssue {
                    title: title.to_string(),
                    description: issue["description"].as_str().unwrap_or("").to_string(),
                    state,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Fetches the complete source issue set in one call. The response body is
/// parsed directly without inspecting the HTTP status, so an error body
/// surfaces as a parse failure and aborts the run.
pub async fn fetch_issues(
    client: &reqwest::Client,
    project_id: &str,
    token: &str,
) -> Result<Vec<GitLabIssue>> {
    let url = format!("{}/projects/{}/issues", super::API_BASE, project_id);
    let response = client
        .get(&url)
        .header("PRIVATE-TOKEN", token)
        .header("Accept", "application/json")
        .send()
        .await?;

    let issues_json = response.json::<Vec<Value>>().await?;
    Ok(parse_gitlab_issues(&issues_json))
}
