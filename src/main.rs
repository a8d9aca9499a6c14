//! Riser dashboard main entry point

use clap::Parser;
use riserboard_api::start_server;
use riserboard_config::Config;
use riserboard_core::{Dashboard, DefaultErrorLogger, ErrorContext, ErrorLogger, JsonFileSource};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;

#[derive(Parser, Debug)]
#[command(name = "riserboard")]
#[command(version = "0.1.0")]
#[command(about = "Sales dashboard: metrics, searchable transactions and charts", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration file and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let config = match Config::load_or_default(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] {}", e.to_details());
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over the configured level
    let env = env_logger::Env::default().default_filter_or(config.logging.level.as_str());
    env_logger::Builder::from_env(env).init();

    if !args.config.exists() {
        DefaultErrorLogger.log_warning(
            "Config file not found, using defaults",
            &ErrorContext::new("load config")
                .with_data("path", serde_json::json!(args.config.display().to_string())),
        );
    }

    let rt = Runtime::new()?;

    rt.block_on(async {
        let data_path = config.data_file_path();
        log::info!("Looking for transactions file: {}", data_path.display());

        let source = Arc::new(JsonFileSource::new(data_path));
        let mut dashboard = Dashboard::new(config.clone(), source);

        // A failed load leaves the dashboard empty; the page still renders
        if let Err(e) = dashboard.load().await {
            let context = ErrorContext::new("startup load")
                .with_data("source", serde_json::json!(dashboard.summary().source));
            DefaultErrorLogger.log_error(&e, &context);
        }

        start_server(config, Arc::new(RwLock::new(dashboard))).await
    })?;

    Ok(())
}
