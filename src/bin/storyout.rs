use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "storyout", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a story JSON document into AMP story HTML.
    Compile(CompileArgs),
    /// Print the compiler decisions (scripts, fonts, preloads, pages) as JSON.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Input story JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output HTML path.
    #[arg(long)]
    out: PathBuf,

    /// Compile options JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Publisher name (overrides the config file).
    #[arg(long)]
    publisher: Option<String>,

    /// Disable product tags and shopping attachments.
    #[arg(long)]
    no_shopping: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input story JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Compile options JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn read_story_json(path: &Path) -> anyhow::Result<storyout::Story> {
    storyout::Story::from_path(path).with_context(|| format!("load story '{}'", path.display()))
}

fn read_options(path: Option<&Path>) -> anyhow::Result<storyout::CompileOptions> {
    let Some(path) = path else {
        return Ok(storyout::CompileOptions::default());
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    storyout::CompileOptions::from_json_str(&s)
        .with_context(|| format!("parse config '{}'", path.display()))
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let story = read_story_json(&args.in_path)?;
    let mut options = read_options(args.config.as_deref())?;
    if let Some(publisher) = args.publisher {
        options.metadata.publisher = publisher;
    }
    if args.no_shopping {
        options.flags.shopping = false;
    }

    let compiled = storyout::compile_story(&story, &options)
        .with_context(|| format!("compile story '{}'", args.in_path.display()))?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &compiled.html)
        .with_context(|| format!("write html '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} pages, {} scripts)",
        args.out.display(),
        compiled.artifacts.pages.len(),
        compiled.artifacts.scripts.len()
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let story = read_story_json(&args.in_path)?;
    let options = read_options(args.config.as_deref())?;
    let artifacts = storyout::inspect_story(&story, &options)
        .with_context(|| format!("inspect story '{}'", args.in_path.display()))?;
    println!("{}", serde_json::to_string_pretty(&artifacts)?);
    Ok(())
}
