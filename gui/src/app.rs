use std::time::{Duration, Instant};

use eframe::egui;
use eframe::egui::{Button, ScrollArea, Ui};
use life_core::{RunState, SeekOutcome, Simulation};
use log::{debug, info, warn};

const RULES: [&str; 4] = [
    "1. Any live cell with fewer than two live neighbours dies (underpopulation).",
    "2. Any live cell with two or three live neighbours lives on to the next generation (survival).",
    "3. Any live cell with more than three live neighbours dies (overpopulation).",
    "4. Any dead cell with exactly three live neighbours becomes a live cell (reproduction).",
];

const ALIVE_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 255, 0);
const DEAD_COLOR: egui::Color32 = egui::Color32::BLACK;
const GRID_LINE_COLOR: egui::Color32 = egui::Color32::from_gray(68);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Board,
}

/// Fixed-cadence scheduler for [`Simulation::tick`]. Armed on start,
/// disarmed once a tick reports that the simulation stopped.
#[derive(Debug)]
pub struct TickTimer {
    delay: Duration,
    next_due: Option<Instant>,
}

impl TickTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_due: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// The first tick is due immediately.
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now);
    }

    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    /// Returns true when a tick should run at `now` and books the next one.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(next_due) if now >= next_due => {
                self.next_due = Some(now + self.delay);
                true
            }
            _ => false,
        }
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|next_due| next_due.saturating_duration_since(now))
    }
}

/// Maps a pointer offset from the board's top-left corner to `(row, col)`.
pub fn cell_at(x: f32, y: f32, cell_size: f32, width: usize, height: usize) -> Option<(usize, usize)> {
    if x < 0.0 || y < 0.0 || cell_size <= 0.0 {
        return None;
    }
    let col = (x / cell_size) as usize;
    let row = (y / cell_size) as usize;
    (row < height && col < width).then_some((row, col))
}

pub struct LifeApp {
    simulation: Simulation,
    timer: TickTimer,
    cell_size: f32,
    screen: Screen,
    show_rules: bool,
    seek_input: String,
}

impl LifeApp {
    pub fn new(simulation: Simulation, tick_delay: Duration, cell_size: f32, screen: Screen) -> Self {
        Self {
            simulation,
            timer: TickTimer::new(tick_delay),
            cell_size,
            screen,
            show_rules: false,
            seek_input: String::new(),
        }
    }

    fn start(&mut self) {
        self.simulation.start();
        if self.simulation.is_running() && !self.timer.is_armed() {
            info!("simulation running");
            self.timer.arm(Instant::now());
        }
    }

    fn toggle_pause(&mut self) {
        self.simulation.toggle_pause();
        match self.simulation.state() {
            RunState::Paused => info!("simulation paused"),
            RunState::Running => info!("simulation resumed"),
            RunState::Idle => {}
        }
    }

    fn reset(&mut self) {
        self.simulation.reset();
        self.seek_input.clear();
        info!("simulation reset");
    }

    fn seek(&mut self) {
        match self.simulation.seek_to_input(&self.seek_input) {
            Ok(SeekOutcome::Reached { advanced }) => {
                info!("jumped {advanced} generations to {}", self.simulation.generation())
            }
            Ok(SeekOutcome::BackwardRejected { current }) => {
                debug!("cannot jump back from generation {current}")
            }
            Err(err) => debug!("ignoring seek input: {err}"),
        }
    }

    /// Runs a due tick and asks egui to wake us for the next one.
    fn drive(&mut self, ctx: &egui::Context) {
        if !self.timer.is_armed() {
            return;
        }
        if self.timer.due(Instant::now()) && !self.simulation.tick().should_reschedule() {
            self.timer.disarm();
            info!("simulation stopped");
            return;
        }
        if let Some(wait) = self.timer.remaining(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }

    fn welcome(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.heading("Welcome to Conway's Game of Life");
            ui.add_space(20.0);
            if ui.button("Let's Begin").clicked() {
                self.screen = Screen::Board;
            }
            if ui.button("View Rules").clicked() {
                self.show_rules = true;
            }
        });
    }

    fn controls(&mut self, ui: &mut Ui) {
        let running = self.simulation.is_running();
        let paused = self.simulation.is_paused();

        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", self.simulation.generation()));
            ui.separator();
            ui.label(format!("Population: {}", self.simulation.population()));
        });

        ui.horizontal(|ui| {
            if ui.add_enabled(!running, Button::new("Start")).clicked() {
                self.start();
            }
            let pause_label = if paused { "Resume" } else { "Pause" };
            if ui.add_enabled(running, Button::new(pause_label)).clicked() {
                self.toggle_pause();
            }
            if ui.add_enabled(!running, Button::new("Next")).clicked() {
                self.simulation.step_once();
            }
            if ui.button("Reset").clicked() {
                self.reset();
            }
            if ui
                .add_enabled(!running || paused, Button::new("Randomize"))
                .clicked()
            {
                self.simulation.randomize();
            }
            if ui.button("Rules").clicked() {
                self.show_rules = true;
            }
        });

        ui.horizontal(|ui| {
            ui.label("Jump to generation:");
            let edit = ui.add_enabled(
                !running,
                egui::TextEdit::singleline(&mut self.seek_input).desired_width(80.0),
            );
            let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.add_enabled(!running, Button::new("Go")).clicked() || submitted {
                self.seek();
            }
        });
    }

    fn board(&mut self, ui: &mut Ui) {
        let grid = self.simulation.grid();
        let (width, height) = (grid.width(), grid.height());
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(self.cell_size * width as f32, self.cell_size * height as f32),
            egui::Sense::click(),
        );

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, GRID_LINE_COLOR);
        let inset = if self.cell_size > 3.0 { 1.0 } else { 0.0 };
        for (row_index, row) in grid.rows().enumerate() {
            for (col_index, cell) in row.iter().enumerate() {
                let pos = rect.min
                    + egui::vec2(col_index as f32 * self.cell_size, row_index as f32 * self.cell_size);
                let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
                painter.rect_filled(
                    egui::Rect::from_min_size(pos, egui::vec2(self.cell_size - inset, self.cell_size - inset)),
                    0.0,
                    color,
                );
            }
        }

        if !response.clicked() {
            return;
        }
        let Some(pointer) = response.interact_pointer_pos() else {
            return;
        };
        let offset = pointer - rect.min;
        if let Some((row, col)) = cell_at(offset.x, offset.y, self.cell_size, width, height) {
            match self.simulation.toggle_cell_at(row, col) {
                Ok(Some(state)) => debug!("cell ({row}, {col}) is now {state:?}"),
                Ok(None) => {}
                Err(err) => warn!("click mapped outside the board: {err}"),
            }
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.screen {
            Screen::Welcome => {
                egui::CentralPanel::default().show(ctx, |ui| self.welcome(ui));
            }
            Screen::Board => {
                egui::TopBottomPanel::bottom("controls").show(ctx, |ui| self.controls(ui));
                egui::CentralPanel::default().show(ctx, |ui| {
                    ScrollArea::both().show(ui, |ui| self.board(ui));
                });
            }
        }

        egui::Window::new("Game Rules")
            .open(&mut self.show_rules)
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Rules of Conway's Game of Life");
                for rule in RULES {
                    ui.add_space(6.0);
                    ui.label(rule);
                }
            });

        self.drive(ctx);
    }
}
