

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use seo_keywords::core::{CredentialStore, Credentials, RandomSource};
use seo_keywords::export::{render_keywords, save_keywords};
use seo_keywords::sources::{DataSourceFactory, SerpApiSource};
use seo_keywords::{GenerationRequest, KeywordConfig, KeywordGenerator, WordLists};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "seo-keywords", version, about = "Generate SEO keyword phrases from a seed term")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate keyword phrases for a seed term
    Generate(GenerateArgs),
    /// List related keywords from the configured providers
    Related {
        seed: String,
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// Show provider statistics for a keyword as JSON
    Stats { seed: String },
    /// Store the SerpApi key in the credential file
    SetKey { key: String },
    /// Show whether SerpApi is configured
    Status,
    /// Send a test query to SerpApi
    TestConnection,
}

#[derive(Args)]
struct GenerateArgs {
    seed: String,
    #[arg(short, long)]
    count: Option<usize>,
    #[arg(long)]
    no_prefixes: bool,
    #[arg(long)]
    no_suffixes: bool,
    #[arg(long)]
    no_questions: bool,
    #[arg(long)]
    no_api: bool,
    #[arg(long = "prefix")]
    prefixes: Vec<String>,
    #[arg(long = "suffix")]
    suffixes: Vec<String>,
    #[arg(long = "question")]
    questions: Vec<String>,
    #[arg(long)]
    min_length: Option<usize>,
    #[arg(long)]
    save: bool,
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

fn non_empty(values: &[String]) -> Option<&[String]> {
    (!values.is_empty()).then_some(values)
}

async fn generate(config: &KeywordConfig, random: Arc<RandomSource>, args: GenerateArgs) -> anyhow::Result<()> {
    if args.seed.trim().is_empty() {
        bail!("Enter a seed keyword.");
    }

    let sources = DataSourceFactory::from_config(config, Arc::clone(&random))?;
    let mut generator = KeywordGenerator::with_word_lists(WordLists::default(), sources, random);
    generator.add_custom_pattern(
        non_empty(&args.prefixes),
        non_empty(&args.suffixes),
        non_empty(&args.questions),
    );

    let request = GenerationRequest::new(args.seed)
        .with_count(args.count.unwrap_or(config.default_count))
        .with_prefixes(!args.no_prefixes)
        .with_suffixes(!args.no_suffixes)
        .with_questions(!args.no_questions)
        .with_api_data(!args.no_api);

    let generator = Arc::new(generator);
    let task = tokio::spawn(async move { generator.generate_keywords(&request).await });
    let mut keywords = task.await.context("keyword generation task failed")?;

    if let Some(min_length) = args.min_length {
        keywords = KeywordGenerator::filter_keywords(&keywords, min_length);
    }

    println!("{}", render_keywords(&keywords));
    eprintln!("Generated {} keywords", keywords.len());

    if args.save {
        let path = save_keywords(&args.output_dir, &keywords)?;
        eprintln!("Saved to {}", path.display());
    }
    Ok(())
}

/// Merges stored credentials into the env config and validates the result.
fn load_config(config: KeywordConfig, store: &CredentialStore) -> anyhow::Result<(KeywordConfig, Arc<RandomSource>)> {
    let config = config.with_credentials(&store.load()?);
    config.validate()?;
    let random = Arc::new(RandomSource::from_seed_option(config.rng_seed));
    Ok((config, random))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("seo_keywords=info".parse()?))
        .init();

    let cli = Cli::parse();

    let config = KeywordConfig::from_env();
    let store = CredentialStore::new(config.credentials_path.clone());

    match cli.command {
        Command::Generate(args) => {
            let (config, random) = load_config(config, &store)?;
            generate(&config, random, args).await?
        }
        Command::Related { seed, limit } => {
            let (config, random) = load_config(config, &store)?;
            let sources = DataSourceFactory::from_config(&config, Arc::clone(&random))?;
            let generator = KeywordGenerator::with_word_lists(WordLists::default(), sources, random);
            for item in generator.get_related_keywords(seed.trim(), limit).await {
                println!("{}\t{}\t{}\t{}", item.keyword, item.kind, item.score, item.origin);
            }
        }
        Command::Stats { seed } => {
            let (config, random) = load_config(config, &store)?;
            let sources = DataSourceFactory::from_config(&config, Arc::clone(&random))?;
            let generator = KeywordGenerator::with_word_lists(WordLists::default(), sources, random);
            let stats = generator.get_keyword_data(seed.trim()).await;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        // Overwrites the credential file without reading it, so a corrupt file can be repaired.
        Command::SetKey { key } => {
            store.save(&Credentials { serpapi: key.trim().to_string() })?;
            println!("API key saved");
        }
        Command::Status => {
            let (config, random) = load_config(config, &store)?;
            let serpapi = SerpApiSource::from_config(&config, random)?;
            println!("SerpApi: {}", serpapi.status());
        }
        Command::TestConnection => {
            let (config, random) = load_config(config, &store)?;
            let serpapi = SerpApiSource::from_config(&config, random)?;
            println!("SerpApi: {}", serpapi.check_connection().await);
        }
    }

    Ok(())
}
