use astopt::cli::{self, CliError, OptimizeOptions, OutputFormat, RenderOptions};
use astopt::{OptimizerConfig, ReaderConfig};
use clap::{Args, Parser as ClapParser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "astopt")]
#[command(about = "astopt - Optimize indentation-encoded ASTs and hand them to C and Graphviz")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fold constants, remove dead branches and unroll small loops
    Optimize {
        #[command(flatten)]
        io: IoArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        #[command(flatten)]
        passes: PassArgs,

        /// Print rewrite counts as JSON to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Only check that the input parses
    Check {
        #[command(flatten)]
        io: IoArgs,
    },

    /// Translate the tree into C source
    Codegen {
        #[command(flatten)]
        io: IoArgs,

        /// Optimize before translating
        #[arg(long)]
        optimize: bool,
    },

    /// Render the tree as a Graphviz digraph
    Graph {
        #[command(flatten)]
        io: IoArgs,

        /// Optimize before rendering
        #[arg(long)]
        optimize: bool,
    },
}

#[derive(Args)]
struct IoArgs {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Deepest nesting level accepted
    #[arg(long, default_value_t = ReaderConfig::default().max_depth)]
    max_depth: usize,

    /// Most children a node may have (unbounded if not provided)
    #[arg(long)]
    max_children: Option<usize>,
}

#[derive(Args)]
struct PassArgs {
    /// Skip constant folding
    #[arg(long)]
    no_fold: bool,

    /// Skip dead-code elimination
    #[arg(long)]
    no_dce: bool,

    /// Skip loop unrolling
    #[arg(long)]
    no_unroll: bool,

    /// Largest trip count to unroll
    #[arg(long, default_value_t = OptimizerConfig::default().max_unroll)]
    max_unroll: i64,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl IoArgs {
    fn reader_config(&self) -> ReaderConfig {
        ReaderConfig {
            max_depth: self.max_depth,
            max_children: self.max_children,
        }
    }
}

impl PassArgs {
    fn optimizer_config(&self) -> OptimizerConfig {
        OptimizerConfig {
            fold_constants: !self.no_fold,
            eliminate_dead_code: !self.no_dce,
            unroll_loops: !self.no_unroll,
            max_unroll: self.max_unroll,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Optimize {
            io,
            format,
            passes,
            stats,
        } => run_optimize(io, format, passes, stats),
        Commands::Check { io } => run_check(io),
        Commands::Codegen { io, optimize } => run_render(io, optimize, cli::execute_codegen),
        Commands::Graph { io, optimize } => run_render(io, optimize, cli::execute_graph),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("astopt={default_level}"))),
        )
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&PathBuf>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, content)?,
        None => print!("{}", content),
    }
    Ok(())
}

fn run_optimize(io: IoArgs, format: Format, passes: PassArgs, stats: bool) -> Result<(), CliError> {
    let options = OptimizeOptions {
        source: read_input(io.input.as_ref())?,
        reader: io.reader_config(),
        optimizer: passes.optimizer_config(),
        format: match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        },
    };

    let result = cli::execute_optimize(&options)?;
    write_output(io.output.as_ref(), &result.output)?;

    if stats {
        eprintln!("{}", serde_json::to_string(&result.stats.to_json())?);
    }
    Ok(())
}

fn run_check(io: IoArgs) -> Result<(), CliError> {
    let source = read_input(io.input.as_ref())?;
    let result = cli::execute_check(&source, io.reader_config())?;
    let report = format!("Tree is valid: {} nodes, depth {}\n", result.nodes, result.depth);
    write_output(io.output.as_ref(), &report)
}

fn run_render(
    io: IoArgs,
    optimize: bool,
    render: fn(&RenderOptions) -> Result<String, CliError>,
) -> Result<(), CliError> {
    let options = RenderOptions {
        source: read_input(io.input.as_ref())?,
        reader: io.reader_config(),
        optimize: optimize.then(OptimizerConfig::default),
    };
    let output = render(&options)?;
    write_output(io.output.as_ref(), &output)
}
