use anyhow::{bail, Result};
use clap::Parser;
use predation_lib::app::{run_headless, App};
use predation_lib::model::config::AppConfig;
use predation_lib::model::metrics::init_logging;
use predation_lib::ui::tui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Field side in world units (multiple of 10)
    #[arg(long)]
    size: Option<i32>,

    #[arg(long)]
    iterations: Option<u32>,

    /// Initial number of agents across both species
    #[arg(long)]
    count: Option<usize>,

    /// Victims per predator at start
    #[arg(long)]
    density: Option<u32>,

    #[arg(long)]
    predator_life: Option<u32>,

    #[arg(long)]
    reproductive_period: Option<u32>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between ticks in the terminal view
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Print the headless run report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Standard,
    Headless,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        let sim = &mut config.simulation;
        if let Some(v) = self.size {
            sim.grid_size = v;
        }
        if let Some(v) = self.iterations {
            sim.iterations = v;
        }
        if let Some(v) = self.count {
            sim.total_count = v;
        }
        if let Some(v) = self.density {
            sim.density = v;
        }
        if let Some(v) = self.predator_life {
            sim.predator_life_period = v;
        }
        if let Some(v) = self.reproductive_period {
            sim.reproductive_period = v;
        }
        if self.seed.is_some() {
            sim.seed = self.seed;
        }
        if let Some(v) = self.interval_ms {
            config.display.tick_interval_ms = v;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let mut config = AppConfig::load(&args.config)?;
    args.apply(&mut config);
    if let Err(e) = config.simulation.validate() {
        bail!("Invalid parameters:\n  {}", e.violations().join("\n  "));
    }

    match args.mode {
        Mode::Headless => {
            let report = run_headless(&config)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if let Some(message) = &report.message {
                println!("{message} (tick {})", report.ticks);
            }
        }
        Mode::Standard => {
            let mut app = App::new(config)?;

            let mut tui = Tui::new()?;
            tui.init()?;

            let res = app.run(&mut tui).await;

            tui.exit()?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            }
        }
    }

    Ok(())
}
