use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use liverscreen::db;
use liverscreen::model::Classifier;
use liverscreen::server::StartupError;
use liverscreen::server::config::ServerConfig;
use liverscreen::services::prediction_pipeline::PredictionPipeline;
use liverscreen::version::VERSION;
use liverscreen::web;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the classifier artifact, overriding MODEL_PATH
    #[arg(short, long)]
    model: Option<String>,
}

fn init_logging() {
    // Default to `info` with noisy sqlx statement logging damped.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx::query=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Keep the plain --version output before full argument parsing.
    if std::env::args().any(|arg| arg == "--version") {
        println!("liverscreen version: {VERSION}");
        return Ok(());
    }

    let args = Args::parse();

    init_logging();
    info!("Starting liverscreen, version: {}", VERSION);
    dotenv().ok();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load server configuration.");
            return Err(e.into());
        }
    };

    // The classifier is loaded exactly once; every request shares it
    // read-only for the lifetime of the process.
    let model_path = args.model.unwrap_or_else(|| config.model_path.clone());
    let classifier = match Classifier::load(Path::new(&model_path)) {
        Ok(classifier) => {
            info!(path = %model_path, "Loaded classifier artifact.");
            classifier
        }
        Err(e) => {
            error!(path = %model_path, error = %e, "Failed to load classifier artifact.");
            return Err(e.into());
        }
    };

    let pool = match db::connect(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!(error = %e, "Failed to create database connection pool.");
            return Err(e.into());
        }
    };

    if let Err(e) = db::services::ensure_schema(&pool).await {
        error!(error = %e, "Failed to initialize database schema.");
        return Err(e.into());
    }
    info!("Database schema is ready.");

    let tera = match web::load_templates() {
        Ok(tera) => tera,
        Err(e) => {
            error!(error = %e, "Failed to compile page templates.");
            return Err(e.into());
        }
    };

    let pipeline = PredictionPipeline::new(Arc::new(classifier), pool);
    let app = web::create_axum_router(pipeline, tera);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "HTTP server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
