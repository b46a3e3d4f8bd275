use crate::config::Config;
use crate::github::{pull, push};
use crate::gitlab;
use crate::output;
use crate::sync::{self, SyncOutcome};

const HTTP_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Runs one full sync pass: fetch both sides, decide an action per source
/// issue, execute the writes in source order, and report one line per issue.
pub async fn run(
    config: &Config,
    mut stdout_additional: Option<&mut dyn std::io::Write>,
) -> anyhow::Result<()> {
    let client = anyhow::Context::context(
        reqwest::Client::builder().timeout(HTTP_TIMEOUT).build(),
        "Failed to create HTTP client",
    )?;

    let source = anyhow::Context::context(
        gitlab::issues::fetch_issues(&client, &config.gitlab_project_id, &config.gitlab_token)
            .await,
        "Failed to fetch GitLab issues",
    )?;

    let destination = anyhow::Context::context(
        pull::fetch_issues(&client, &config.github_repo, &config.github_token).await,
        "Failed to fetch GitHub issues",
    )?;

    let plan = sync::plan_sync(&source, &destination);

    let outcomes = sync::apply_plan(
        &plan,
        |issue, state| {
            let request = push::import_request(&issue, state);
            let client = &client;
            async move {
                push::create_issue(client, &config.github_repo, &config.github_token, &request)
                    .await
            }
        },
        |number, state| {
            let client = &client;
            async move {
                push::update_issue_state(
                    client,
                    &config.github_repo,
                    &config.github_token,
                    number,
                    state,
                )
                .await
            }
        },
    )
    .await?;

    for (title, outcome) in &outcomes {
        let line = match outcome {
            SyncOutcome::Created => format!("created: {title}"),
            SyncOutcome::Updated => format!("updated: {title}"),
            SyncOutcome::Skipped => format!("skipped: {title}"),
            SyncOutcome::Failed(reason) => format!("failed: {title} ({reason})"),
        };
        output::println(&line, &mut stdout_additional)?;
    }

    Ok(())
}
