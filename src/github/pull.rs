use crate::error::SyncError;
use crate::github::issues::{GitHubIssue, IssueState};
use anyhow::Result;
use serde_json::Value;
use std::future::Future;

const PER_PAGE: u32 = 100;

/// Upper bound on the listing loop. A listing that never returns an empty
/// page would otherwise loop forever.
const MAX_PAGES: u32 = 1000;

/// Extracts issues from one page of the GitHub listing. Pull requests appear
/// in the issues listing and are filtered out, as are records with missing
/// fields or an unrecognized state.
pub fn parse_issue_page(issues_json: &[Value]) -> Vec<GitHubIssue> {
    issues_json
        .iter()
        .filter_map(|issue| {
            if let (Some(number), Some(title), Some(state)) = (
                issue["number"].as_u64(),
                issue["title"].as_str(),
                issue["state"].as_str(),
            ) {
                if issue["pull_request"].is_null() {
                    let state = match state {
                        "open" => IssueState::Open,
                        "closed" => IssueState::Closed,
                        _ => return None,
                    };

                    Some(GitHubIssue {
                        number,
                        title: title.to_string(),
                        state,
                    })
                } else {
                    None
                }
            } else {
                None
            }
        })
        .collect()
}

/// Accumulates pages from a 1-based page source until the first empty page.
/// Page order is preserved in the result.
pub async fn fetch_all_pages<F, Fut>(mut fetch_page: F) -> Result<Vec<GitHubIssue>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<Value>>>,
{
    let mut all_issues = Vec::new();
    let mut page = 1;

    loop {
        if page > MAX_PAGES {
            return Err(SyncError::PaginationExhausted(MAX_PAGES).into());
        }

        let issues_json = fetch_page(page).await?;

        if issues_json.is_empty() {
            break;
        }

        all_issues.extend(parse_issue_page(&issues_json));
        page += 1;
    }

    Ok(all_issues)
}

/// Fetches the complete destination issue set, open and closed.
pub async fn fetch_issues(
    client: &reqwest::Client,
    repo: &str,
    token: &str,
) -> Result<Vec<GitHubIssue>> {
    fetch_all_pages(|page| fetch_issue_page(client, repo, token, page)).await
}

async fn fetch_issue_page(
    client: &reqwest::Client,
    repo: &str,
    token: &str,
    page: u32,
) -> Result<Vec<Value>> {
    let url = format!("{}/repos/{}/issues", super::API_BASE, repo);
    let response = client
        .get(&url)
        .query(&[
            ("state", "all".to_string()),
            ("per_page", PER_PAGE.to_string()),
            ("page", page.to_string()),
        ])
        .bearer_auth(token)
        .header("Accept", "application/vnd.github.v3+json")
        .header("User-Agent", super::USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(anyhow::anyhow!(
            "GitHub issue listing failed: HTTP {}",
            response.status()
        ));
    }

    Ok(response.json::<Vec<Value>>().await?)
}
