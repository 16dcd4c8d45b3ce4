#![forbid(unsafe_code)]
//! ai-blog Command Line Interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use console::style;

use ai_blog::commands::{
    execute_batch, execute_expand, execute_generate, execute_outline, execute_validate,
    BatchOptions, ExpandOptions, GenerateOptions, OutlineOptions, RunFlags, ValidateOptions,
};
use ai_blog::config::DEFAULT_CONFIG_FILE;
use ai_blog::{BlogError, Config, ProviderKind, ValidationMode};

#[derive(Parser)]
#[command(name = "ai-blog")]
#[command(about = "Generate SEO-friendly Markdown blog posts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one article
    Generate {
        /// Topic or keyword for the post
        #[arg(long)]
        topic: String,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Generate one article per line of a topics file
    Batch {
        /// Topics file (one per line, `#` comments allowed)
        #[arg(long)]
        topics: PathBuf,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Generate a blog outline
    Outline {
        /// Topic or keyword for the outline
        #[arg(long)]
        topic: String,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Expand outline sections into Markdown files
    Expand {
        /// Outline Markdown file
        #[arg(long)]
        outline: PathBuf,

        /// Section number, 1-based (all sections if omitted)
        #[arg(long)]
        section: Option<usize>,

        /// Topic override (default: outline frontmatter, then title)
        #[arg(long)]
        topic: Option<String>,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Check a Markdown file's structure
    Validate {
        /// Markdown file to check
        file: PathBuf,

        /// Structure to check against
        #[arg(long, value_enum, default_value = "article")]
        mode: ModeArg,
    },
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Target word count
    #[arg(long)]
    words: Option<u32>,

    /// Tone of voice
    #[arg(long)]
    tone: Option<String>,

    /// Target audience
    #[arg(long)]
    audience: Option<String>,

    /// Target country/context
    #[arg(long)]
    country: Option<String>,

    /// Output directory
    #[arg(long)]
    out: Option<PathBuf>,

    /// Model name (overrides AI_BLOG_MODEL / OPENAI_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Content provider
    #[arg(long, value_enum)]
    provider: Option<ProviderArg>,

    /// Skip provider calls and write deterministic placeholder content
    #[arg(long)]
    dry_run: bool,
}

impl From<RunArgs> for RunFlags {
    fn from(args: RunArgs) -> Self {
        RunFlags {
            words: args.words,
            tone: args.tone,
            audience: args.audience,
            country: args.country,
            out: args.out,
            model: args.model,
            provider: args.provider.map(Into::into),
            dry_run: args.dry_run,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProviderArg {
    Openai,
    Mock,
}

impl From<ProviderArg> for ProviderKind {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Openai => ProviderKind::OpenAi,
            ProviderArg::Mock => ProviderKind::Mock,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Article,
    Outline,
}

impl From<ModeArg> for ValidationMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Article => ValidationMode::Article,
            ModeArg::Outline => ValidationMode::Outline,
        }
    }
}

fn main() {
    // Existing environment variables win over .env entries
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        std::process::exit(report(&err));
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Load config
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Generate { topic, run } => {
            let options = GenerateOptions {
                topic,
                flags: run.into(),
            };
            execute_generate(options, &config)?;
        }

        Commands::Batch { topics, run } => {
            let options = BatchOptions {
                topics,
                flags: run.into(),
            };
            execute_batch(options, &config)?;
        }

        Commands::Outline { topic, run } => {
            let options = OutlineOptions {
                topic,
                flags: run.into(),
            };
            execute_outline(options, &config)?;
        }

        Commands::Expand {
            outline,
            section,
            topic,
            run,
        } => {
            let options = ExpandOptions {
                outline,
                section,
                topic,
                flags: run.into(),
            };
            execute_expand(options, &config)?;
        }

        Commands::Validate { file, mode } => {
            let options = ValidateOptions {
                file,
                mode: mode.into(),
            };
            execute_validate(options)?;
        }
    }

    Ok(())
}

/// Print the failure and return the process exit code
fn report(err: &anyhow::Error) -> i32 {
    let Some(blog_err) = err.downcast_ref::<BlogError>() else {
        eprintln!("{} {:#}", style("✗").red(), err);
        return 1;
    };

    match blog_err {
        BlogError::Auth(_) => {
            eprintln!(
                "{} Authentication failed. Please check OPENAI_API_KEY and try again.",
                style("✗").red()
            );
        }
        BlogError::MissingApiKey => {
            eprintln!(
                "{} OPENAI_API_KEY is not set. Please export your OpenAI API key.",
                style("✗").red()
            );
        }
        BlogError::RateLimited(_) => {
            eprintln!("{} Rate limit or quota exceeded. To fix:", style("✗").red());
            eprintln!("  - Check your OpenAI billing status and add a payment method");
            eprintln!("  - Review usage and limits for your account");
            eprintln!("  - Wait a few minutes and retry if you're rate-limited");
        }
        other => {
            eprintln!("{} {}", style("✗").red(), other);
        }
    }
    tracing::debug!(error = ?blog_err, "command failed");
    blog_err.exit_code()
}
