use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ddl_lexer::config::{Config, IllegalPolicy, OutputFormat};
use ddl_lexer::error::{CliError, Result};
use ddl_lexer::{Lexer, Token};

#[derive(Parser)]
#[command(name = "ddllex", author, version, about = "Tokenizer for SQL-like DDL statements")]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true, env = "DDLLEX_VERBOSE")]
    verbose: bool,

    /// Path to the JSON configuration file
    #[arg(short, long, global = true, env = "DDLLEX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable colored log output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token stream of one or more statements
    Lex(LexArgs),
    /// Manage the ddllex configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args, Default)]
struct LexArgs {
    /// Statements to tokenize; the configured demo statement is used when none are given
    statements: Vec<String>,

    /// Tokenize the contents of a file
    #[arg(short, long = "file", value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Whether to keep scanning after an unexpected character
    #[arg(long, value_enum)]
    on_illegal: Option<IllegalPolicy>,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a configuration file with defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| CliError::Config(format!("failed to initialize logging: {}", e)))
}

fn read_sources(args: &LexArgs, config: &Config) -> Result<Vec<(String, String)>> {
    let mut sources: Vec<(String, String)> = args
        .statements
        .iter()
        .enumerate()
        .map(|(i, statement)| (format!("statement {}", i + 1), statement.clone()))
        .collect();

    for path in &args.files {
        let contents = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?;
        sources.push((path.display().to_string(), contents));
    }

    if sources.is_empty() {
        sources.push(("demo statement".to_string(), config.demo_statement.clone()));
    }

    Ok(sources)
}

fn print_token(token: &Token, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", token),
        OutputFormat::Json => println!("{}", serde_json::to_string(token)?),
    }
    Ok(())
}

fn run_lex(args: LexArgs, config: &Config) -> Result<()> {
    let format = args.format.unwrap_or(config.format);
    let policy = args.on_illegal.unwrap_or(config.on_illegal);
    let sources = read_sources(&args, config)?;

    let mut illegal = 0;
    for (name, text) in &sources {
        debug!(source = %name, bytes = text.len(), "lexing");
        let mut lexer = Lexer::new(text);
        loop {
            match lexer.next_token() {
                Ok(token) if token.is_end() => break,
                Ok(token) => print_token(&token, format)?,
                Err(err) => {
                    print_token(err.token(), format)?;
                    if policy == IllegalPolicy::Abort {
                        return Err(err.into());
                    }
                    eprintln!("error: {}", err);
                    illegal += 1;
                }
            }
        }
    }

    if illegal > 0 {
        return Err(CliError::IllegalInput { count: illegal });
    }
    Ok(())
}

fn run_config(command: ConfigCommands, config_path: Option<&Path>) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::get_config_path);

    match command {
        ConfigCommands::Show => {
            let config = Config::load(config_path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommands::Path => {
            println!("{}", path.display());
        }
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::Config(format!(
                    "{} already exists; use --force to overwrite it",
                    path.display()
                )));
            }
            Config::default().save_to_path(&path)?;
            info!(path = %path.display(), "wrote default configuration");
            println!("Initialized config at {}", path.display());
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Lex(LexArgs::default())) {
        Commands::Lex(args) => {
            let config = Config::load(cli.config.as_deref())?;
            run_lex(args, &config)
        }
        Commands::Config { command } => run_config(command, cli.config.as_deref()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = init_logging(cli.verbose, cli.no_color).and_then(|_| run(cli));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
