use crate::cli::CheckArgs;
use crate::config::ConfigFile;
use anyhow::Context;
use colored::Colorize;

/// Prepare every catalogued query on a live database.
///
/// A query passes when PostgreSQL accepts it and infers as many parameters
/// as the template has bind slots.
pub async fn run(args: CheckArgs) -> anyhow::Result<()> {
    let config = ConfigFile::load(args.common.config.as_deref())?;
    let database_url = args
        .database
        .or_else(|| config.database.map(|db| db.url))
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .context("no database configured: pass --database, set [database] url or DATABASE_URL")?;

    let client = connect(&database_url).await?;
    let catalog = instaorm::injector::catalog()?;

    let mut failed = 0usize;
    for (name, template) in &catalog {
        match client.prepare(&template.to_numbered()).await {
            Ok(statement) if statement.params().len() == template.bind_count() => {
                println!("  {} {}", "✓".green().bold(), name);
            }
            Ok(statement) => {
                failed += 1;
                println!(
                    "  {} {}: database expects {} parameters, template binds {}",
                    "✗".red().bold(),
                    name,
                    statement.params().len(),
                    template.bind_count()
                );
            }
            Err(err) => {
                failed += 1;
                tracing::debug!(query = %name, sql = %template.sql(), "prepare failed");
                println!("  {} {}: {}", "✗".red().bold(), name, err);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} queries failed", catalog.len());
    }
    println!("{}", format!("all {} queries prepared", catalog.len()).green());
    Ok(())
}

async fn connect(database_url: &str) -> anyhow::Result<tokio_postgres::Client> {
    let (client, connection) = tokio_postgres::connect(database_url, tokio_postgres::NoTls)
        .await
        .context("failed to connect to database")?;

    tokio::spawn(async move {
        if let Err(err) = connection.await {
            tracing::error!("postgres connection error: {err}");
        }
    });

    Ok(client)
}
