use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use stipple::api;
use stipple::codec;
use stipple::config::AppConfig;
use stipple::server;

#[derive(Parser)]
#[command(name = "stipple")]
#[command(about = "Converts images to stippled black-and-white art using dithering")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Convert an image file directly to a stippled PNG (no server needed)
    Convert {
        /// Input image (JPEG, PNG, BMP, TIFF or WebP)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stippling Image Generator",
        description = "Converts images to stippled black-and-white art using dithering",
        version = "1.0.0",
        license(name = "MIT")
    ),
    paths(api::handle_root, api::handle_health, api::handle_stipple),
    components(schemas(
        api::RootResponse,
        api::EndpointList,
        api::HealthResponse,
        api::StippleForm,
    )),
    tags(
        (name = "Service", description = "Service status endpoints"),
        (name = "Stipple", description = "Image conversion")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Convert { input, output }) => run_convert_command(&input, &output),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Convert a single image file to a stippled PNG.
fn run_convert_command(input: &Path, output: &Path) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stipple=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let bytes = std::fs::read(input)?;
    let source = codec::decode_rgb(&bytes).map_err(|e| anyhow::anyhow!("Decode error: {e}"))?;

    let stippled = mono_dither::stipple(&source);

    let png_bytes =
        codec::encode_png(&stippled).map_err(|e| anyhow::anyhow!("Encode error: {e}"))?;
    std::fs::write(output, &png_bytes)?;
    println!("Stippled {} ({} bytes)", output.display(), png_bytes.len());

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Stipple v{VERSION} - Stippling Image Generator");
    println!("Converts images to stippled black-and-white art using dithering\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:10000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    println!("\nCommands:");
    println!("  stipple serve      Start the HTTP server");
    println!("  stipple convert    Convert an image file to a stippled PNG");
    println!("\nRun 'stipple --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stipple=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let config = AppConfig::load(config_file.as_deref());
    let bind_addr = config.bind_addr.clone();

    tracing::info!(
        max_upload_bytes = config.max_upload_bytes,
        max_pixels = config.max_pixels,
        "Configuration loaded"
    );

    let state = server::create_app_state(config);

    let app = server::build_router(state)
        // OpenAPI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Stipple server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
