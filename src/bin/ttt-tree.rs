use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use ttt_tree::{
    print_breadth_first, print_depth_first, release_breadth_first, BoardConfig, TreeBuilder,
    TreeConfig, ValueFormat,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PrintMode {
    /// Only the summary line
    None,
    /// One line per node, depth-first
    Dfs,
    /// Result values grouped by depth
    Bfs,
}

#[derive(Parser, Debug)]
#[command(
    name = "ttt-tree",
    version,
    about = "Enumerate the full game tree of an N x M tic-tac-toe board"
)]
struct Args {
    /// Board rows
    #[arg(long, default_value_t = 3)]
    rows: usize,
    /// Board columns
    #[arg(long, default_value_t = 3)]
    cols: usize,
    /// Opening moves applied before expansion, as ROW,COL (repeatable)
    #[arg(long = "move", value_name = "ROW,COL", value_parser = parse_move)]
    moves: Vec<(usize, usize)>,
    /// Tree output
    #[arg(long, value_enum, default_value_t = PrintMode::Dfs)]
    print: PrintMode,
    /// Print results as 0 (A), 1 (B), -1 (tie) instead of labels
    #[arg(long, default_value_t = false)]
    codes: bool,
    /// Abort once this many nodes are created (0 = unlimited)
    #[arg(long, default_value_t = TreeConfig::default().max_nodes)]
    max_nodes: usize,
    /// Emit tree statistics as JSON after the tree output
    #[arg(long, default_value_t = false)]
    stats: bool,
    /// Print the starting board before expanding it
    #[arg(long, default_value_t = false)]
    show_root: bool,
}

fn parse_move(s: &str) -> std::result::Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{s}'"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row '{row}': {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("bad col '{col}': {e}"))?;
    Ok((row, col))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut root = BoardConfig::new(args.rows, args.cols).build()?;
    root.play_all(&args.moves)
        .with_context(|| format!("invalid opening {:?}", args.moves))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.show_root {
        writeln!(out, "{root}")?;
    }

    let config = TreeConfig::default().with_max_nodes(args.max_nodes);
    let tree = TreeBuilder::new(config)
        .build(root)
        .with_context(|| format!("building {}x{} tree", args.rows, args.cols))?;
    writeln!(out, "generated game tree with {} nodes", tree.nodes_created())?;

    let format = if args.codes { ValueFormat::Code } else { ValueFormat::Label };
    out = match args.print {
        PrintMode::None => out,
        PrintMode::Dfs => print_depth_first(&tree, out, format)?,
        PrintMode::Bfs => print_breadth_first(&tree, out, format)?,
    };

    if args.stats {
        let stats = tree.stats();
        serde_json::to_writer_pretty(&mut out, &stats)?;
        writeln!(out)?;
        info!("{} distinct positions", tree.distinct_states());
    }
    out.flush()?;

    let released = release_breadth_first(tree);
    info!("released {released} nodes");
    Ok(())
}
