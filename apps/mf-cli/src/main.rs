use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use mf_app::{
    AppError, AppResult, SolveProgress, SolveRequest, SolveResponse, SolveStage, load_network,
    solve_network_with_progress, validate_network,
};
use mf_project::NetworkDef;
use mf_solver::{SolveProgressEvent, SolverConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mf-cli")]
#[command(about = "Maximum flow through capacitated directed networks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a network file (.yaml, .yml, .json or .txt)
    Solve {
        /// Path to the network file
        network_path: PathBuf,
        #[command(flatten)]
        opts: SolveArgs,
    },
    /// Check a network file and its terminals without solving
    Validate {
        /// Path to the network file
        network_path: PathBuf,
        /// Source node label
        #[arg(long)]
        source: Option<String>,
        /// Sink node label
        #[arg(long)]
        sink: Option<String>,
    },
    /// Solve the built-in five-node demo network
    Demo {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct SolveArgs {
    /// Source node label (defaults to the file's, then the first node)
    #[arg(long)]
    source: Option<String>,
    /// Sink node label (defaults to the file's, then the first other node)
    #[arg(long)]
    sink: Option<String>,
    /// Residual capacities at or below this count as zero
    #[arg(long, default_value_t = default_epsilon())]
    epsilon: f64,
    /// Give up after this many blocking-flow phases
    #[arg(long)]
    max_phases: Option<usize>,
    /// Give up after this many augmenting paths
    #[arg(long)]
    max_augmentations: Option<usize>,
    /// Give up after this many milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,
    /// Let a repeated edge overwrite the earlier capacity
    #[arg(long)]
    allow_duplicate_edges: bool,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn default_epsilon() -> f64 {
    SolverConfig::default().epsilon
}

impl SolveArgs {
    fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            epsilon: self.epsilon,
            max_phases: self.max_phases,
            max_augmentations: self.max_augmentations,
            time_limit: self.time_limit_ms.map(Duration::from_millis),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Solve { network_path, opts } => cmd_solve(&network_path, &opts),
        Commands::Validate {
            network_path,
            source,
            sink,
        } => cmd_validate(&network_path, source.as_deref(), sink.as_deref()),
        Commands::Demo { json } => cmd_demo(json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_error(&err),
    }
}

fn report_error(err: &AppError) -> ExitCode {
    if err.is_internal() {
        eprintln!("Internal error (please report): {err}");
        ExitCode::from(3)
    } else if err.is_input_error() {
        eprintln!("Error: {err}");
        ExitCode::from(2)
    } else {
        eprintln!("Error: {err}");
        ExitCode::FAILURE
    }
}

fn cmd_solve(network_path: &Path, opts: &SolveArgs) -> AppResult<()> {
    let network = load_network(network_path)?;
    let mut request = SolveRequest::new(network);
    request.options.source = opts.source.clone();
    request.options.sink = opts.sink.clone();
    request.options.solver = opts.solver_config();
    request.options.allow_duplicate_edges = opts.allow_duplicate_edges;

    let response = run_with_progress(&request, !opts.json)?;
    print_response(&response, opts.json)
}

fn cmd_validate(network_path: &Path, source: Option<&str>, sink: Option<&str>) -> AppResult<()> {
    println!("Validating network: {}", network_path.display());
    let network = load_network(network_path)?;
    let summary = validate_network(&network, source, sink)?;
    println!("✓ Network is valid");
    println!(
        "  {} nodes, {} edges, total capacity {}",
        summary.node_count, summary.edge_count, summary.total_capacity
    );
    println!("  source: {}  sink: {}", summary.source, summary.sink);
    Ok(())
}

fn cmd_demo(json: bool) -> AppResult<()> {
    let request = SolveRequest::new(NetworkDef::sample());
    let response = run_with_progress(&request, !json)?;
    print_response(&response, json)
}

fn run_with_progress(request: &SolveRequest, show_progress: bool) -> AppResult<SolveResponse> {
    if !show_progress {
        return solve_network_with_progress(request, None);
    }

    let mut line = ProgressLine::new(io::stderr());
    let result = solve_network_with_progress(
        request,
        Some(&mut |event| {
            // solver events are throttled, stage changes always shown
            if event.solver.is_none() || line.last_emit.elapsed().as_millis() >= 100 {
                line.show(&event);
            }
        }),
    );
    line.clear();
    result
}

/// A single self-overwriting status line. Only clears what it drew.
struct ProgressLine<W: Write> {
    out: W,
    shown: bool,
    last_emit: Instant,
}

impl<W: Write> ProgressLine<W> {
    fn new(out: W) -> Self {
        Self {
            out,
            shown: false,
            last_emit: Instant::now(),
        }
    }

    fn show(&mut self, event: &SolveProgress) {
        let text = format!("[{:>7.3}s] {}", event.elapsed_wall_s, progress_text(event));
        let _ = write!(self.out, "\r{text:<80}");
        let _ = self.out.flush();
        self.shown = true;
        self.last_emit = Instant::now();
    }

    fn clear(&mut self) {
        if !self.shown {
            return;
        }
        let _ = write!(self.out, "\r{}\r", " ".repeat(80));
        let _ = self.out.flush();
        self.shown = false;
    }
}

fn progress_text(event: &SolveProgress) -> String {
    match (&event.stage, &event.solver) {
        (_, Some(SolveProgressEvent::LevelGraphBuilt { phase, sink_level })) => {
            format!("phase {phase}: sink at level {sink_level}")
        }
        (_, Some(SolveProgressEvent::PhaseCompleted { phase, total, .. })) => {
            format!("phase {phase}: flow so far {total:.2}")
        }
        (_, Some(SolveProgressEvent::Finished { phases, .. })) => {
            format!("finished after {phases} phases")
        }
        (SolveStage::BuildingNetwork, None) => "building network".to_string(),
        (SolveStage::Solving, None) => match &event.message {
            Some(m) => format!("solving {m}"),
            None => "solving".to_string(),
        },
        (SolveStage::Reporting, None) => "building report".to_string(),
        (SolveStage::Auditing, None) => "auditing flow".to_string(),
        (SolveStage::Completed, None) => "done".to_string(),
    }
}

fn print_response(response: &SolveResponse, json: bool) -> AppResult<()> {
    if json {
        let text = serde_json::to_string_pretty(response).map_err(|e| AppError::Output {
            what: e.to_string(),
        })?;
        println!("{text}");
        return Ok(());
    }

    let report = &response.report;
    println!("Maximum total flow: {:.2}", report.total_flow);
    println!();
    println!("Flow by edge ({} -> {}):", report.source, report.sink);
    for edge in &report.edges {
        let marker = if edge.saturated { "  [saturated]" } else { "" };
        println!(
            "  {} -> {} : {:.2} / {}{marker}",
            edge.from, edge.to, edge.flow, edge.capacity
        );
    }
    println!();
    println!(
        "Minimum cut: {{{}}} capacity {:.2}",
        response.min_cut.source_side.join(", "),
        response.min_cut.capacity
    );
    println!(
        "  {} phases, {} augmenting paths, {:.3} ms",
        response.stats.phases,
        response.stats.augmentations,
        response.stats.total_time_s * 1e3
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_without_progress_writes_nothing() {
        let mut line = ProgressLine::new(Vec::new());
        line.clear();
        assert!(line.out.is_empty());
    }

    #[test]
    fn clear_erases_a_shown_line_once() {
        let mut line = ProgressLine::new(Vec::new());
        line.show(&SolveProgress::stage(SolveStage::Reporting, 0.5, None));
        let shown = String::from_utf8(line.out.clone()).unwrap();
        assert!(shown.starts_with('\r'));
        assert!(shown.contains("building report"));

        line.clear();
        let after_clear = line.out.len();
        assert!(after_clear > shown.len());
        line.clear();
        assert_eq!(line.out.len(), after_clear);
    }

    #[test]
    fn solver_events_are_described() {
        let event = SolveProgress::solver(
            SolveProgressEvent::PhaseCompleted {
                phase: 2,
                pushed: 5.0,
                total: 15.0,
            },
            0.1,
        );
        assert_eq!(progress_text(&event), "phase 2: flow so far 15.00");
    }
}
