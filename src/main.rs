use anyhow::Context;
use clap::Parser;
use sqlschemadeploy::{DatabaseRunner, DeployConfig, SchemaDeployer, logging};
use std::path::PathBuf;

/// Deploy a directory of SQL schema files, statement by statement
#[derive(Parser, Debug)]
#[command(name = "sqlschemadeploy", version, about)]
struct Cli {
    /// `postgres://...` connection string, or a SQLite database path
    #[arg(long)]
    database: String,

    /// Catalog name; required unless given by --config
    #[arg(long)]
    catalog: Option<String>,

    /// Directory containing SQL schema files [default: schema]
    #[arg(long)]
    schema_dir: Option<PathBuf>,

    /// JSON configuration file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    log_level: String,

    #[arg(long, default_value = "schema_deployment.log")]
    log_file: PathBuf,
}

fn load_config(cli: &Cli) -> anyhow::Result<DeployConfig> {
    let mut config = match (&cli.config, &cli.catalog) {
        (Some(path), _) => DeployConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        (None, Some(catalog)) => DeployConfig::new(catalog.clone()),
        (None, None) => anyhow::bail!("--catalog is required when --config is not given"),
    };
    if let Some(catalog) = &cli.catalog {
        config.catalog = catalog.clone();
    }
    if let Some(schema_dir) = &cli.schema_dir {
        config.schema_dir = schema_dir.clone();
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let runner = DatabaseRunner::connect(&cli.database)
        .with_context(|| format!("failed to connect to {}", cli.database))?;

    let mut deployer = SchemaDeployer::new(runner, config);
    let report = deployer.deploy_dir()?;
    tracing::info!(
        "Executed {} statements across {} files, {} failed",
        report.total_executed(),
        report.files.len(),
        report.total_failed()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init_tracing(&cli.log_level, Some(&cli.log_file));

    match run(&cli) {
        Ok(()) => {
            tracing::info!("Schema deployment completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Schema deployment failed: {e:#}");
            Err(e)
        }
    }
}
