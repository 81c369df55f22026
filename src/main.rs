use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pathviz::{Config, Edit, Grid, Node, NodeState, Position, SearchOutcome, Session};


/// Terminal front end for the grid path visualizer
#[derive(Parser, Debug)]
#[command(name = "pathviz", version, about)]
struct Cli {
    /// Cells per side of the square board (2-50)
    rows: String,

    /// Search algorithm: a_star or dijkstra
    algorithm: String,

    /// Start cell as ROW,COL
    #[arg(long, value_parser = parse_position)]
    start: Position,

    /// End cell as ROW,COL
    #[arg(long, value_parser = parse_position)]
    end: Position,

    /// Barrier cell as ROW,COL, repeatable
    #[arg(long = "barrier", value_parser = parse_position)]
    barriers: Vec<Position>,

    /// Fraction of free cells to turn into barriers at random
    #[arg(long)]
    scatter: Option<f64>,

    /// Seed for --scatter
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Cancel the search on the Nth cancellation poll
    #[arg(long)]
    cancel_after: Option<usize>,

    /// Log every cell state change
    #[arg(long)]
    trace: bool,
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row.trim().parse().map_err(|_| format!("bad row in {s:?}"))?;
    let col = col.trim().parse().map_err(|_| format!("bad column in {s:?}"))?;
    Ok(Position::new(row, col))
}

fn glyph(state: NodeState) -> char {
    match state {
        NodeState::Unvisited => '.',
        NodeState::Open => 'o',
        NodeState::Closed => 'x',
        NodeState::Barrier => '#',
        NodeState::Start => 'S',
        NodeState::End => 'E',
        NodeState::Path => '*',
    }
}

fn render(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.cell_count() + grid.rows());
    for (i, node) in grid.iter().enumerate() {
        out.push(glyph(node.state()));
        if (i + 1) % grid.rows() == 0 {
            out.push('\n');
        }
    }
    out
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::parse(&cli.rows, &cli.algorithm)?;
    let mut session = Session::new(&config)?;

    if session.primary(cli.start)? != Edit::StartPlaced {
        bail!("could not place start at {}", cli.start);
    }
    if session.primary(cli.end)? != Edit::EndPlaced {
        bail!("end {} must differ from start {}", cli.end, cli.start);
    }
    for &barrier in &cli.barriers {
        if barrier == cli.start || barrier == cli.end {
            log::warn!("ignoring barrier on endpoint {barrier}");
            continue;
        }
        if session.grid().cell_at(barrier.row, barrier.col)?.is_barrier() {
            continue;
        }
        session.primary(barrier)?;
    }

    if let Some(density) = cli.scatter {
        let mut rng = StdRng::seed_from_u64(cli.seed);
        let placed = session.scatter_barriers(density, &mut rng)?;
        log::info!("scattered {placed} barriers");
    }

    let trace = cli.trace;
    let on_change = |node: &Node| {
        if trace {
            log::info!("{} -> {:?}", node.position(), node.state());
        }
    };

    let mut polls = 0usize;
    let cancel_after = cli.cancel_after;
    let is_cancelled = || {
        polls += 1;
        cancel_after.is_some_and(|n| polls >= n)
    };

    let outcome = session
        .run(on_change, is_cancelled)?
        .context("search did not start")?;

    print!("{}", render(session.grid()));
    match outcome {
        SearchOutcome::PathFound(path) => println!(
            "{}: path of {} moves, {} cells expanded",
            config.algorithm,
            path.len() - 1,
            session.grid().count(NodeState::Closed)
        ),
        SearchOutcome::NoPathExists => println!(
            "{}: no path, {} cells expanded",
            config.algorithm,
            session.grid().count(NodeState::Closed)
        ),
    }
    Ok(())
}
