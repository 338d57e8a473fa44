//! Binary entrypoint for the Swapquest CLI.
//!
//! Commands:
//! - `play` - open the interactive shell (default when no command is given)
//! - `init` - write a starter `swapquest.toml`
//! - `status [--json]` - print the starting profile for the current config
//! - `quote --from <SYM> --to <SYM> --amount <A>` - price a swap without playing
//!
//! See the library crate docs for module-level details: `swapquest::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::Path;

use swapquest::config::Config;
use swapquest::game::GameState;
use swapquest::market::swap::{quote, usd_value, xp_for_swap};
use swapquest::market::token;
use swapquest::market::parse_amount;
use swapquest::shell;
use swapquest::shell::pages;

#[derive(Parser)]
#[command(name = "swapquest")]
#[command(about = "Gamified token swaps: earn XP, finish quests, open loot boxes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "swapquest.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session
    Play,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show the starting profile for the current configuration
    Status {
        /// Print machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Quote a swap between two catalog tokens
    Quote {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    if let Commands::Init { force } = command {
        init_logging(&None, cli.verbose);
        if Path::new(&cli.config).exists() && !force {
            warn!("{} already exists; pass --force to overwrite", cli.config);
            return Ok(());
        }
        info!("Initializing new configuration");
        Config::create_default(&cli.config).await?;
        info!("Configuration file created at {}", cli.config);
        return Ok(());
    }

    let loaded = Config::load(&cli.config).await;
    let config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => Config::default(),
    };
    init_logging(&Some(config.clone()), cli.verbose);
    if let Err(e) = loaded {
        if Path::new(&cli.config).exists() {
            return Err(e);
        }
        warn!("{}; using built-in defaults", e);
    }

    match command {
        Commands::Play => {
            info!("Starting Swapquest v{}", env!("CARGO_PKG_VERSION"));
            shell::run(config).await?;
        }
        Commands::Status { json } => {
            let state = GameState::new(&config.progression);
            if json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                println!("{}", pages::level_bar(&state));
                print!("{}", pages::profile(&state, &Default::default()));
            }
        }
        Commands::Quote { from, to, amount } => {
            let from = token::find(&from)?;
            let to = token::find(&to)?;
            let amount = parse_amount(&amount)?;
            let out = quote(amount, &from, &to);
            println!(
                "{} {} -> {:.6} {} (${:.2}, +{} XP)",
                amount,
                from.symbol,
                out,
                to.symbol,
                usd_value(amount, &from),
                xp_for_swap(amount, &from, config.swap.xp_rate)
            );
        }
        Commands::Init { .. } => {}
    }

    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity wins over the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .map(|c| c.logging.level_filter())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let file = config
        .as_ref()
        .and_then(|c| c.logging.file.clone())
        .and_then(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });

    match file {
        Some(f) => {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
            // Echo to the console only when attached to a terminal
            let is_tty = atty::is(atty::Stream::Stdout);
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        }
        None => {
            builder.format(|fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
            });
        }
    }
    let _ = builder.try_init();
}
