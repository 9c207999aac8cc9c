use clap::Parser;
use ng_core::{InferenceModel, Result};
use ng_inference::{create_model, Config, DummyModel};
use ng_scrapers::{handle_command, init_logging, ArticleGenerator, DuckDuckGoSearch, GeneratorCommands, MainTextScraper};
use ng_web::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate and browse news articles", long_about = None)]
struct Cli {
    #[arg(long, default_value = "memory", help = "Storage backend. Available: memory (default), sqlite")]
    storage: String,
    /// Database location for persistent backends (e.g. sqlite:articles.db)
    #[arg(long)]
    database_url: Option<String>,
    #[arg(long, default_value = "huggingface", help = "Model to use for summaries. Available: huggingface (default), dummy")]
    model: String,
    /// Override the summarization endpoint
    #[arg(long)]
    model_url: Option<String>,
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    hf_token: Option<String>,
    /// Override the search frontend base URL
    #[arg(long)]
    search_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
    #[command(flatten)]
    Articles(GeneratorCommands),
}

impl Commands {
    /// Only commands that may generate articles talk to the inference API
    fn needs_model(&self) -> bool {
        matches!(self, Commands::Serve { .. } | Commands::Articles(GeneratorCommands::Generate(_)))
    }
}

async fn build_generator(cli: &Cli) -> Result<ArticleGenerator> {
    let storage = ng_storage::create_storage(&cli.storage, cli.database_url.as_deref()).await?;

    let model: Arc<dyn InferenceModel> = if cli.command.needs_model() {
        let config = Config {
            api_key: cli.hf_token.clone(),
            model_name: Some(cli.model.clone()),
            model_url: cli.model_url.clone(),
        };
        create_model(&config)?
    } else {
        Arc::new(DummyModel::new())
    };

    let mut search = DuckDuckGoSearch::new()?;
    if let Some(url) = &cli.search_url {
        search = search.with_base_url(url.clone());
    }

    Ok(ArticleGenerator::new(
        Arc::new(search),
        Arc::new(MainTextScraper::new()?),
        model,
        storage,
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let generator = build_generator(&cli).await?;
    info!("🦗 Generator ready (storage: {}, model: {})", cli.storage, cli.model);

    match cli.command {
        Commands::Serve { addr } => ng_web::serve(addr, AppState::new(generator)).await?,
        Commands::Articles(command) => handle_command(command, &generator).await?,
    }

    Ok(())
}
