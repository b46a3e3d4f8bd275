#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = sync_issues::config::Config::from_env()?;
    sync_issues::run::run(&config, None).await
}
