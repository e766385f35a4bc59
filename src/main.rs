//! forum-client 命令行
//!
//! - upload-image / upload-file: 上传媒体并输出 Embed JSON
//! - routes: 列出前端路由
//! - resolve: 查询路径对应的页面

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use forum_client::application::{get_global_error_message, UploadMediaFromPath, UploadMediaHandler};
use forum_client::config::{load_config, load_config_from_path, print_config, AppConfig};
use forum_client::domain::EmbedKind;
use forum_client::infrastructure::http::{ApiClient, HttpMediaClient};
use forum_client::infrastructure::routes::create_routes;

#[derive(Debug, Parser)]
#[command(name = "forum-client", about = "Forum API client utilities", version)]
struct Args {
    /// 配置文件路径（默认搜索 config.toml / config.local.toml）
    #[arg(short, long, value_name = "path")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Upload an image (JPEG, PNG, GIF, WEBP)
    UploadImage { path: PathBuf },
    /// Upload a file of any type
    UploadFile { path: PathBuf },
    /// List the registered client routes
    Routes,
    /// Print the page rendered for a path
    Resolve { path: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config_from_path(Some(path.as_path())),
        None => load_config(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);
    print_config(&config);

    match args.command {
        Commands::UploadImage { path } => upload(&config, EmbedKind::Image, path).await,
        Commands::UploadFile { path } => upload(&config, EmbedKind::File, path).await,
        Commands::Routes => {
            let table = create_routes()?;
            for route in table.iter() {
                println!("{:<36} {}", route.path, route.page);
            }
            Ok(())
        }
        Commands::Resolve { path } => {
            let table = create_routes()?;
            match table.resolve(&path) {
                Some(page) => {
                    println!("{}", page);
                    Ok(())
                }
                None => anyhow::bail!("No page registered for {}", path),
            }
        }
    }
}

fn init_tracing(config: &AppConfig) {
    let log_filter = format!("warn,forum_client={}", config.log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn upload(config: &AppConfig, kind: EmbedKind, path: PathBuf) -> anyhow::Result<()> {
    let api = ApiClient::new(config.api.client_config())?;
    let handler = UploadMediaHandler::new(Arc::new(HttpMediaClient::new(api)));

    let loadable = handler.handle_path(UploadMediaFromPath { kind, path }).await?;

    if let Some(embed) = loadable.data() {
        println!("{}", serde_json::to_string_pretty(embed)?);
        return Ok(());
    }

    let message = get_global_error_message(&loadable, &["file", "type"])
        .map(|m| m.into_owned())
        .or_else(|| {
            loadable
                .error()
                .and_then(|e| e.field_errors())
                .and_then(|fields| fields.values().flatten().next())
                .map(|e| format!("{}: {}", e.field, e.message))
        })
        .unwrap_or_else(|| "Upload failed".to_string());

    anyhow::bail!(message)
}
