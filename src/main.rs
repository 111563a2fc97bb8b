use clap::{Parser, Subcommand};
use stadiumport::route::{self, RouteContext};
use stadiumport::{check, config, generate, output};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "stadiumport")]
#[command(about = "Static site builder for the StadiumPort World Cup 2026 travel guides")]
#[command(long_about = "\
Static site builder for the StadiumPort World Cup 2026 travel guides

Every page lives under /world-cup-2026-travel-tips/<slug>. A slug is routed
in a fixed order:

  1. Redirect table   legacy slugs move to their replacement (or /404)
  2. Title            title override → primary article → words of the slug
  3. Body             dedicated guide by alias → article sections → placeholder

Source directory (all optional):

  content/
  ├── config.toml     # Site config (run 'stadiumport gen-config')
  └── assets/         # Images, favicon, fonts → copied to output root

STADIUMPORT_SITE_URL overrides site.base_url. RUST_LOG controls log output.")]
#[command(version)]
struct Cli {
    /// Source directory (config.toml and assets/)
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the whole site
    Build,
    /// Print how a slug is routed, as JSON
    Resolve {
        /// Slug under /world-cup-2026-travel-tips/
        slug: String,
    },
    /// Print the HTML page for one slug
    Render {
        /// Slug under /world-cup-2026-travel-tips/
        slug: String,
        /// Render the page even if the slug is redirected
        #[arg(long)]
        no_redirects: bool,
    },
    /// Validate the routing tables and config
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            init_thread_pool(&site_config.processing);
            println!("==> Building {} → {}", cli.source.display(), cli.output.display());
            let report = generate::build(&cli.source, &cli.output, &site_config)?;
            output::print_build_output(&report);
        }
        Command::Resolve { slug } => {
            let site_config = config::load_config(&cli.source)?;
            let routed = route::route(&slug, &RouteContext::new(&site_config));
            output::print_resolve_output(&slug, &routed)?;
        }
        Command::Render { slug, no_redirects } => {
            let site_config = config::load_config(&cli.source)?;
            let mut ctx = RouteContext::new(&site_config);
            if no_redirects {
                ctx = ctx.without_redirects();
            }
            println!("{}", generate::render_slug(&slug, &ctx));
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            config::load_config(&cli.source)?;
            let issues = check::run();
            output::print_check_output(&issues);
            if !issues.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Logs go to stderr; stdout carries command output.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Initialize the rayon thread pool based on processing config.
///
/// Capped at the number of available CPU cores; config can lower it, not raise it.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
