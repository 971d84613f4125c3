//! Benchmark driver (default binary).
//!
//! Builds lookup tables and entity state once per layout, then times a fixed
//! number of frames; afterwards times grid sweeps through each indexing
//! strategy. Each measured run is reported as `<label>: <ticks> ticks`.

use std::io::{self, Stdout};
use std::thread;
use std::time::Duration;

use anyhow::{ensure, Result};
use log::{info, warn};

use tile_sim::core::Grid;
use tile_sim::engine::{AosEngine, CursorEngine, Layout, Simulation, SoaEngine};
use tile_sim::harness::{measure_frames, measure_sweeps, InstantClock, Report, RunConfig};
use tile_sim::term::{Surface, TerminalRenderer};
use tile_sim::types::{SCREEN_HEIGHT, SCREEN_WIDTH};

const WATCH_FRAME_MS: u64 = 30;

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .try_init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = RunConfig::from_env().parse_args(&args)?;
    info!("config: {:?}", config);

    let mut clock = InstantClock::from_nanos(config.tick_ns);
    let mut report = Report::new(io::stdout());

    if config.mode.runs_entities() {
        run_entities(&config, &mut clock, &mut report)?;
    }
    if config.mode.runs_grid() {
        run_grid(&config, &mut clock, &mut report)?;
    }

    if config.watch {
        let mut term = TerminalRenderer::new();
        term.enter()?;
        let result = watch(&mut term, config.frames);
        // Always try to restore terminal state.
        let _ = term.exit();
        result?;
    }

    Ok(())
}

fn new_surface() -> Surface {
    Surface::new(SCREEN_WIDTH as u16, SCREEN_HEIGHT as u16)
}

fn time_layout<S: Simulation>(
    mut engine: S,
    surface: &mut Surface,
    config: &RunConfig,
    clock: &mut InstantClock,
    report: &mut Report<Stdout>,
) -> Result<()> {
    let m = measure_frames(clock, &mut engine, surface, config.frames);
    info!("{} ({} frames)", m, m.iterations);
    report.push(m)
}

fn run_entities(
    config: &RunConfig,
    clock: &mut InstantClock,
    report: &mut Report<Stdout>,
) -> Result<()> {
    let mut reference: Option<(Layout, Surface)> = None;

    for layout in config.layouts() {
        let mut surface = new_surface();
        match layout {
            Layout::Soa => {
                time_layout(SoaEngine::new(&surface)?, &mut surface, config, clock, report)?
            }
            Layout::Cursor => {
                time_layout(CursorEngine::new(&surface)?, &mut surface, config, clock, report)?
            }
            Layout::Aos => {
                time_layout(AosEngine::new(&surface)?, &mut surface, config, clock, report)?
            }
        }

        if config.dump {
            println!("-- {} after {} frames", layout.label(), config.frames);
            for line in surface.text_lines() {
                println!("{}", line.trim_end());
            }
        }

        match &reference {
            Some((first, expected)) => ensure!(
                *expected == surface,
                "{} and {} layouts drew different screens",
                first.label(),
                layout.label()
            ),
            None => reference = Some((layout, surface)),
        }
    }

    Ok(())
}

fn run_grid(
    config: &RunConfig,
    clock: &mut InstantClock,
    report: &mut Report<Stdout>,
) -> Result<()> {
    let expected = (config.sweeps % 256) as u8;

    for strategy in config.strategies() {
        let mut grid = Grid::new();
        let m = measure_sweeps(clock, &mut grid, strategy, config.sweeps);
        info!("{} ({} sweeps)", m, m.iterations);
        report.push(m)?;

        ensure!(
            grid.cells().iter().all(|&c| c == expected),
            "{} sweep left a cell different from {}",
            strategy.label(),
            expected
        );
    }

    Ok(())
}

fn watch(term: &mut TerminalRenderer, frames: u32) -> Result<()> {
    let mut surface = new_surface();
    let mut engine = SoaEngine::new(&surface)?;
    if frames == 0 {
        warn!("watch: nothing to show for 0 frames");
    }

    for _ in 0..frames {
        engine.frame(&mut surface);
        term.draw(&surface)?;
        thread::sleep(Duration::from_millis(WATCH_FRAME_MS));
    }
    Ok(())
}
