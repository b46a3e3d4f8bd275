use crate::github::issues::{GitHubIssue, IssueState};
use crate::github::push::WriteOutcome;
use crate::gitlab::issues::{GitLabIssue, GitLabIssueState};
use anyhow::Result;
use std::collections::HashMap;
use std::future::Future;

/// Write decision for a single source issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    Create { state: IssueState },
    UpdateState { number: u64, state: IssueState },
    Skip,
}

/// What happened to a single source issue after executing its action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Created,
    Updated,
    Skipped,
    Failed(String),
}

/// Maps the GitLab state vocabulary onto GitHub's. Both the create and the
/// update path go through this one mapping.
pub fn map_state(state: GitLabIssueState) -> IssueState {
    match state {
        GitLabIssueState::Opened => IssueState::Open,
        GitLabIssueState::Closed => IssueState::Closed,
    }
}

/// Decides one action per source issue, in source listing order.
///
/// Title is the sole matching key. Destination titles are assumed unique; if
/// they are not, the most recently listed issue wins the index slot.
pub fn plan_sync(
    source: &[GitLabIssue],
    destination: &[GitHubIssue],
) -> Vec<(GitLabIssue, SyncAction)> {
    let by_title: HashMap<&str, &GitHubIssue> = destination
        .iter()
        .map(|issue| (issue.title.as_str(), issue))
        .collect();

    source
        .iter()
        .map(|issue| {
            let desired = map_state(issue.state);
            let action = match by_title.get(issue.title.as_str()) {
                Some(existing) if existing.state == desired => SyncAction::Skip,
                Some(existing) => SyncAction::UpdateState {
                    number: existing.number,
                    state: desired,
                },
                None => SyncAction::Create { state: desired },
            };
            (issue.clone(), action)
        })
        .collect()
}

/// Executes a plan sequentially through the injected write functions.
///
/// A transport-level `Err` from either function aborts the run. A
/// `WriteOutcome::Rejected` is recorded as a failure for that item and the
/// remaining items are still processed.
pub async fn apply_plan<C, CFut, U, UFut>(
    plan: &[(GitLabIssue, SyncAction)],
    mut create_issue: C,
    mut update_state: U,
) -> Result<Vec<(String, SyncOutcome)>>
where
    C: FnMut(GitLabIssue, IssueState) -> CFut,
    CFut: Future<Output = Result<WriteOutcome>>,
    U: FnMut(u64, IssueState) -> UFut,
    UFut: Future<Output = Result<WriteOutcome>>,
{
    let mut outcomes = Vec::with_capacity(plan.len());

    for (issue, action) in plan {
        let outcome = match action {
            SyncAction::Create { state } => match create_issue(issue.clone(), *state).await? {
                WriteOutcome::Accepted => SyncOutcome::Created,
                WriteOutcome::Rejected { status, body } => {
                    SyncOutcome::Failed(format!("HTTP {status}: {body}"))
                }
            },
            SyncAction::UpdateState { number, state } => {
                match update_state(*number, *state).await? {
                    WriteOutcome::Accepted => SyncOutcome::Updated,
                    WriteOutcome::Rejected { status, body } => {
                        SyncOutcome::Failed(format!("HTTP {status}: {body}"))
                    }
                }
            }
            SyncAction::Skip => SyncOutcome::Skipped,
        };
        outcomes.push((issue.title.clone(), outcome));
    }

    Ok(outcomes)
}
