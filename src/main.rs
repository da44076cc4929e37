#![warn(clippy::all)]

use clap::Parser;
use eca::{
    gui::{self, Config, GridShape, InitialState, Settings},
    AutomatonEngine, Result, RuleTable,
};
use std::{
    io::{self, BufWriter, Write},
    process,
    time::Duration,
};

/// Animate a one-dimensional elementary cellular automaton.
#[derive(Parser)]
#[command(name = "eca", version, about)]
struct Args {
    /// Rule number, 0..=255.
    #[arg(default_value_t = Config::DEFAULT_RULE as i64, allow_negative_numbers = true)]
    rule: i64,

    /// Cells per row.
    #[arg(long, default_value_t = Config::DEFAULT_WIDTH)]
    width: usize,

    /// Rows kept on screen.
    #[arg(long, default_value_t = Config::DEFAULT_HEIGHT)]
    height: usize,

    /// Delay between steps in milliseconds.
    #[arg(long, default_value_t = Config::DEFAULT_DELAY_MS)]
    delay_ms: u64,

    /// Independent automata side by side, as ROWSxCOLS.
    #[arg(long, default_value = "1x1")]
    grid: GridShape,

    /// `random`, `center`, `biased`, or an explicit row of 0/1 characters.
    #[arg(long, default_value = "random")]
    init: InitialState,

    /// Seed for the random initial states; panel k uses seed + k.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop stepping after this many steps.
    #[arg(long)]
    frames: Option<u64>,

    /// Print this many steps to stdout instead of opening a window.
    #[arg(long, value_name = "STEPS")]
    print: Option<u64>,
}

impl Args {
    fn settings(&self) -> Result<Settings> {
        Ok(Settings {
            rule: RuleTable::new(self.rule)?,
            width: self.width,
            height: self.height,
            delay: Duration::from_millis(self.delay_ms),
            grid: self.grid,
            init: self.init.clone(),
            seed: self.seed,
            frames: self.frames,
        })
    }
}

/// Text rendering of a run: the starting row followed by `steps` more.
fn print_rows(engine: &mut AutomatonEngine, steps: u64, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", engine.current_row())?;
    for _ in 0..steps {
        writeln!(out, "{}", engine.step())?;
    }
    out.flush()?;
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let settings = args.settings()?;
    match args.print {
        Some(steps) => {
            let mut out = BufWriter::new(io::stdout().lock());
            for k in 0..settings.grid.count() {
                if k > 0 {
                    writeln!(out)?;
                }
                let mut engine = settings.build_engine(k)?;
                print_rows(&mut engine, steps, &mut out)?;
            }
            Ok(())
        }
        None => gui::run(settings),
    }
}

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
