use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use armada_app::controller::{Controller, Flow};
use armada_sim::{NamePolicy, Scenario, SimConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Discrete-time naval simulation")]
struct Cli {
    /// Load islands and ships from a JSON scenario instead of the default fleet.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Let ships share names with islands.
    #[arg(long)]
    names_per_kind: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let scenario = match &cli.scenario {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("failed to load scenario from {}", path.display()))?,
        None => Scenario::default_fleet(),
    };
    let config = SimConfig {
        names: if cli.names_per_kind {
            NamePolicy::UniquePerKind
        } else {
            NamePolicy::UniqueAcrossAll
        },
    };
    let sim = scenario
        .build(config)
        .context("failed to build the simulation")?;
    info!(
        ships = sim.ship_count(),
        islands = sim.island_count(),
        "simulation ready"
    );

    run(Controller::new(sim))
}

fn run(mut controller: Controller) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "{}", controller.prompt())?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            writeln!(stdout)?;
            break;
        };
        let line = line.context("failed to read command")?;
        if controller.handle_line(&line, &mut stdout)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
