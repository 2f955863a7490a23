use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use recursive_flatten::{flatten, Container, CursorKind, ParseConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "recursive-flatten",
    about = "Flatten nested bracketed literals with stack or chain cursors"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every leaf of the input, one per line.
    Flatten {
        #[command(flatten)]
        input: InputArgs,
        /// Cursor representation used for the traversal.
        #[arg(long, value_enum, default_value_t = CursorArg::Stack)]
        cursor: CursorArg,
    },
    /// Run both cursors over the input and check they agree.
    Compare {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Nested literal such as `[1, [2, []], 3]`.
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    literal: Option<String>,
    /// Read the literal from a file instead.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Maximum nesting depth accepted by the parser.
    #[arg(long, default_value_t = ParseConfig::DEFAULT_MAX_DEPTH)]
    max_depth: usize,
    /// Reject a `,` directly before `]`.
    #[arg(long)]
    strict_commas: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CursorArg {
    Stack,
    Chain,
}

impl From<CursorArg> for CursorKind {
    fn from(arg: CursorArg) -> Self {
        match arg {
            CursorArg::Stack => CursorKind::Stack,
            CursorArg::Chain => CursorKind::Chain,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Flatten { input, cursor } => run_flatten(&input, cursor.into())?,
        Commands::Compare { input } => run_compare(&input)?,
    }

    Ok(())
}

fn run_flatten(args: &InputArgs, kind: CursorKind) -> Result<()> {
    let container = load_container(args)?;
    info!(cursor = %kind, "flattening input");

    for leaf in flatten(&container).make_cursor(kind) {
        println!("{}", leaf);
    }

    Ok(())
}

fn run_compare(args: &InputArgs) -> Result<()> {
    let container = load_container(args)?;
    let sequence = flatten(&container);

    let agreed = compare_leaves(
        sequence.make_cursor(CursorKind::Stack),
        sequence.make_cursor(CursorKind::Chain),
    )?;

    println!("stack and chain cursors agree on {} leaves", agreed);
    Ok(())
}

/// Walk both leaf streams in lockstep; error at the first disagreement
fn compare_leaves<T, S, C>(mut stack: S, mut chain: C) -> Result<usize>
where
    T: PartialEq + fmt::Debug,
    S: Iterator<Item = T>,
    C: Iterator<Item = T>,
{
    let mut position = 0usize;

    loop {
        match (stack.next(), chain.next()) {
            (None, None) => return Ok(position),
            (left, right) if left == right => position += 1,
            (left, right) => anyhow::bail!(
                "cursors diverge at leaf {}: stack={:?} chain={:?}",
                position,
                left,
                right
            ),
        }
    }
}

fn load_container(args: &InputArgs) -> Result<Container<String>> {
    let text = match (&args.literal, &args.file) {
        (Some(literal), _) => literal.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input from {}", path.display()))?,
        (None, None) => anyhow::bail!("no input literal or --file given"),
    };

    let config = ParseConfig {
        max_depth: args.max_depth,
        allow_trailing_comma: !args.strict_commas,
    };
    debug!(?config, bytes = text.len(), "parsing input");

    Container::parse_with(&text, &config).context("failed to parse nested literal")
}
