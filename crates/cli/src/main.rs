mod cmd;
mod logging;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "flur",
    version,
    about = "Write, check and cross-post Flurnamen blog posts"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// Show how a post splits into front matter and paragraphs
    Split(FileArgs),

    /// Compose the Mastodon post for a blog post
    Toot(FileArgs),

    /// Create a new post stub for a Flurname
    Stub(StubArgs),

    /// Spell-check the prose of a post and write corrections back
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct FileArgs {
    /// Path to the markdown post
    pub file: PathBuf,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct StubArgs {
    /// Flurname the post is about
    #[arg(long)]
    pub flurname: String,

    /// Link target for the lead paragraph (defaults to the profile's default_url)
    #[arg(long)]
    pub url: Option<String>,

    /// Post date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Folder to write into (defaults to the profile's posts_dir)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Overwrite an existing post with the same name
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to the markdown post
    pub file: PathBuf,

    /// Report corrections without writing them
    #[arg(long)]
    pub dry_run: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::Split(args) => {
            cmd::init_logging("split", &cmd::load_config("split", config, profile));
            cmd::split::run(&args);
        }
        Commands::Toot(args) => {
            let cfg = cmd::load_config("toot", config, profile);
            cmd::init_logging("toot", &cfg);
            cmd::toot::run(&cfg, &args);
        }
        Commands::Stub(args) => {
            let cfg = cmd::load_config("stub", config, profile);
            cmd::init_logging("stub", &cfg);
            cmd::stub::run(&cfg, &args);
        }
        Commands::Check(args) => {
            let cfg = cmd::load_config("check", config, profile);
            cmd::init_logging("check", &cfg);
            cmd::check::run(&cfg, &args);
        }
    }
}
