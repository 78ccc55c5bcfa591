mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use virality_engine::config::ScoringConfig;
use virality_engine::generate::{build_generator, ContentGenerator};
use virality_engine::rewrite::RewriteEngine;
use virality_engine::scoring::ScoringEngine;
use virality_engine::{format_float, Platform};

#[derive(Parser)]
#[command(name = "virality-engine", about = "Content virality scoring and rewrite engine")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Score text for virality potential
    Score(ScoreArgs),
    /// Rewrite text toward a platform and compare scores
    Rewrite(RewriteArgs),
    /// Generate templated social posts for a topic
    Posts(PostsArgs),
    /// Generate attention-grabbing hooks for a topic
    Hooks(HooksArgs),
    /// Run the HTTP server
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct ScoreArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    platform: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct RewriteArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    platform: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct PostsArgs {
    #[arg(long)]
    topic: String,
    #[arg(long, value_delimiter = ',', default_value = "twitter,linkedin")]
    platforms: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct HooksArgs {
    #[arg(long)]
    topic: String,
    #[arg(long, default_value_t = 5)]
    count: usize,
    #[arg(long)]
    platform: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
    #[arg(long, default_value = "../dashboard/dist")]
    web_root: String,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Score(ScoreArgs::default()));

    match command {
        Command::Score(args) => run_score(args),
        Command::Rewrite(args) => run_rewrite(args),
        Command::Posts(args) => run_posts(args),
        Command::Hooks(args) => run_hooks(args),
        Command::Serve(args) => server::serve(args).await,
    }
}

fn run_score(args: ScoreArgs) -> Result<(), String> {
    let (config, _) = ScoringConfig::load(None)?;
    let engine = ScoringEngine::new(config);

    let text = read_text(args.text)?;
    let platform = parse_platform(args.platform)?;

    let result = engine
        .score(&text, platform)
        .map_err(|err| err.to_string())?;

    println!("Overall score: {}/100", result.overall_score);
    println!(
        "Sub-scores: hook {} | structure {} | niche {}",
        result.hook_score, result.structure_score, result.niche_score
    );
    println!(
        "Predicted engagement: {}",
        format_float(result.predicted_engagement, 2)
    );
    if !result.recommendations.is_empty() {
        println!("\nRecommendations:");
        for recommendation in result.recommendations {
            println!("- {}", recommendation);
        }
    }

    Ok(())
}

fn run_rewrite(args: RewriteArgs) -> Result<(), String> {
    let (config, _) = ScoringConfig::load(None)?;
    let engine = RewriteEngine::new(config);

    let text = read_text(args.text)?;
    let platform = parse_platform(args.platform)?;

    let result = engine
        .rewrite(&text, platform)
        .map_err(|err| err.to_string())?;

    println!(
        "Score: {} -> {}",
        result.original_score, result.improved_score
    );
    if !result.improvements.is_empty() {
        println!("Improvements:");
        for improvement in &result.improvements {
            println!("- {}", improvement);
        }
    }
    println!("\n{}", result.rewritten_text);

    Ok(())
}

fn run_posts(args: PostsArgs) -> Result<(), String> {
    let (config, _) = ScoringConfig::load(None)?;
    let generator = build_generator(&config.generator)?;

    let platforms = args
        .platforms
        .iter()
        .map(|name| {
            Platform::from_str(name).ok_or_else(|| format!("unsupported platform: {}", name))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let posts = generator
        .generate_social_posts(&args.topic, &platforms)
        .map_err(|err| err.to_string())?;

    for post in posts {
        println!("[{}] ({} chars)", post.platform, post.character_count);
        println!("{}", post.content);
        println!("hashtags: {}\n", post.hashtags.join(", "));
    }

    Ok(())
}

fn run_hooks(args: HooksArgs) -> Result<(), String> {
    let (config, _) = ScoringConfig::load(None)?;
    let generator = build_generator(&config.generator)?;
    let platform = parse_platform(args.platform)?;

    let hooks = generator
        .generate_hooks(&args.topic, args.count, platform)
        .map_err(|err| err.to_string())?;

    for hook in hooks {
        println!("- {}", hook);
    }

    Ok(())
}

fn parse_platform(arg: Option<String>) -> Result<Option<Platform>, String> {
    match arg.as_deref() {
        Some(name) if !name.trim().is_empty() => Platform::from_str(name)
            .map(Some)
            .ok_or_else(|| format!("unsupported platform: {}", name)),
        _ => Ok(None),
    }
}

fn read_text(arg: Option<String>) -> Result<String, String> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing text: pass --text or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
