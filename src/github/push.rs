use crate::github::issues::IssueState;
use crate::gitlab::issues::GitLabIssue;
use anyhow::Result;
use serde::Serialize;

/// Label applied to every issue created by the sync, so imported issues can
/// be told apart from natively authored ones.
pub const IMPORT_LABEL: &str = "imported-from-gitlab";

const IMPORT_BODY_PREFIX: &str = "Imported from GITLAB:\n\n";

/// Request body for creating an imported issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
    pub state: String,
}

#[derive(Serialize)]
struct StateUpdate {
    state: &'static str,
}

/// Result of one destination write. A rejection carries the response so it
/// can be reported without aborting the remaining items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Accepted,
    Rejected { status: u16, body: String },
}

pub fn import_request(issue: &GitLabIssue, state: IssueState) -> NewIssue {
    NewIssue {
        title: issue.title.clone(),
        body: format!("{IMPORT_BODY_PREFIX}{}", issue.description),
        labels: vec![IMPORT_LABEL.to_string()],
        state: state.as_str().to_string(),
    }
}

/// Creates a destination issue. Only a 201 counts as accepted; any other
/// status is a rejection for the caller to report.
pub async fn create_issue(
    client: &reqwest::Client,
    repo: &str,
    token: &str,
    request: &NewIssue,
) -> Result<WriteOutcome> {
    let url = format!("{}/repos/{}/issues", super::API_BASE, repo);
    let response = client
        .post(&url)
        .bearer_auth(token)
        .header("Accept", "application/vnd.github.v3+json")
        .header("User-Agent", super::USER_AGENT)
        .json(request)
        .send()
        .await?;

    let status = response.status();
    if status == reqwest::StatusCode::CREATED {
        Ok(WriteOutcome::Accepted)
    } else {
        let body = response.text().await.unwrap_or_default();
        Ok(WriteOutcome::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

/// Sets the state of an existing destination issue, touching no other field.
pub async fn update_issue_state(
    client: &reqwest::Client,
    repo: &str,
    token: &str,
    number: u64,
    state: IssueState,
) -> Result<WriteOutcome> {
    let url = format!("{}/repos/{}/issues/{}", super::API_BASE, repo, number);
    let response = client
        .patch(&url)
        .bearer_auth(token)
        .header("Accept", "application/vnd.github.v3+json")
        .header("User-Agent", super::USER_AGENT)
        .json(&StateUpdate {
            state: state.as_str(),
        })
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        Ok(WriteOutcome::Accepted)
    } else {
        let body = response.text().await.unwrap_or_default();
        Ok(WriteOutcome::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gitlab::issues::GitLabIssueState;

    fn source_issue(title: &str, description: &str, state: GitLabIssueState) -> GitLabIssue {
        GitLabIssue {
            title: title.to_string(),
            description: description.to_string(),
            state,
        }
    }

    #[test]
    fn test_import_request_carries_marker_label() {
        let issue = source_issue("Fix bug", "Steps to reproduce", GitLabIssueState::Opened);

        let request = import_request(&issue, IssueState::Open);

        assert_eq!(request.labels, vec!["imported-from-gitlab".to_string()]);
    }

    #[test]
    fn test_import_request_prefixes_body() {
        let issue = source_issue("Fix bug", "x", GitLabIssueState::Closed);

        let request = import_request(&issue, IssueState::Closed);

        assert_eq!(request.body, "Imported from GITLAB:\n\nx");
        assert!(request.body.contains("Imported from"));
    }

    #[test]
    fn test_import_request_maps_state() {
        let issue = source_issue("A", "x", GitLabIssueState::Closed);

        let request = import_request(&issue, IssueState::Closed);

        assert_eq!(request.title, "A");
        assert_eq!(request.state, "closed");
    }

    #[test]
    fn test_new_issue_serializes_expected_shape() {
        let issue = source_issue("A", "x", GitLabIssueState::Opened);
        let request = import_request(&issue, IssueState::Open);

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "title": "A",
                "body": "Imported from GITLAB:\n\nx",
                "labels": ["imported-from-gitlab"],
                "state": "open"
            })
        );
    }
}
