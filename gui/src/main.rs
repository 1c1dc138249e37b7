use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use eframe::run_native;
use life_core::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use life_core::{Config, Simulation};
use log::info;

mod app;

use app::{LifeApp, Screen};

const CONTROLS_HEIGHT: f32 = 140.0;
const WINDOW_MARGIN: f32 = 24.0;

#[derive(Parser, Debug)]
#[command(version, about = "Conway's Game of Life on a toroidal grid")]
struct Args {
    /// Number of columns
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Number of rows
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Delay between generations while running, in milliseconds
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,

    /// Edge length of one cell in pixels
    #[arg(long, default_value_t = 10.0)]
    cell_size: f32,

    /// Open the board directly instead of the welcome screen
    #[arg(long)]
    skip_welcome: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            width: self.width,
            height: self.height,
            tick_delay: Duration::from_millis(self.delay_ms),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.config();
    config.validate().context("invalid command-line options")?;
    anyhow::ensure!(args.cell_size >= 1.0, "cell size must be at least one pixel");

    let simulation = Simulation::from_config(&config)?;
    info!(
        "{}x{} grid, {:?} per generation, {} px cells",
        config.width, config.height, config.tick_delay, args.cell_size
    );

    let screen = if args.skip_welcome {
        Screen::Board
    } else {
        Screen::Welcome
    };
    let inner_size = [
        (config.width as f32 * args.cell_size + WINDOW_MARGIN).max(600.0),
        (config.height as f32 * args.cell_size + CONTROLS_HEIGHT + WINDOW_MARGIN).max(400.0),
    ];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(inner_size),
        ..Default::default()
    };

    let cell_size = args.cell_size;
    run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(LifeApp::new(
                simulation,
                config.tick_delay,
                cell_size,
                screen,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the window: {err}"))?;

    Ok(())
}
