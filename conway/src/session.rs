// session.rs - Ties the grid, view and clock together for an event loop

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::clock::Ticker;
use crate::config::{Color, Config, Palette};
use crate::error::Result;
use crate::grid::{Grid, Mode};
use crate::history::RepeatDetector;
use crate::patterns::{self, Pattern};
use crate::view::{self, CellRect, ViewConfig};

/// Input delivered by the windowing layer, in board-surface pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Quit,
    MouseButtonDown { x: f32, y: f32 },
    KeyDown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Outline,
    Solid,
}

/// Drawing surface provided by the windowing layer.
pub trait Canvas {
    fn draw_rect(&mut self, color: Color, rect: CellRect, fill: Fill);
}

pub struct Session {
    grid: Grid,
    view: ViewConfig,
    ticker: Ticker,
    history: RepeatDetector,
    palette: Palette,
    toggle_key: String,
    pub pause_on_repeat: bool,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(config.width, config.height)?,
            view: config.view,
            ticker: Ticker::new(config.tick_rate, Instant::now())?,
            history: RepeatDetector::new(config.history_len),
            palette: config.palette,
            toggle_key: config.toggle_key.clone(),
            pause_on_repeat: config.pause_on_repeat,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn view(&self) -> &ViewConfig {
        &self.view
    }

    /// Replaces the view if the whole board still fits on the pixel plane.
    pub fn set_view(&mut self, next: ViewConfig) -> Result<()> {
        view::check_fits(self.grid.dims(), &next)?;
        self.view = next;
        Ok(())
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    pub fn tick_rate(&self) -> f32 {
        self.ticker.rate()
    }

    pub fn set_tick_rate(&mut self, rate: f32) -> Result<()> {
        self.ticker.set_rate(rate)
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> Control {
        match event {
            InputEvent::Quit => {
                info!("quit requested");
                return Control::Quit;
            }
            InputEvent::MouseButtonDown { x, y } => {
                self.handle_click(*x, *y);
            }
            InputEvent::KeyDown(name) => self.handle_key(name),
        }
        Control::Continue
    }

    /// Toggles the cell under the pixel and returns it, or `None` if the
    /// pixel missed the board or the simulation is running.
    pub fn handle_click(&mut self, x: f32, y: f32) -> Option<(usize, usize)> {
        let (row, col) = view::pixel_to_cell(x, y, &self.view, self.grid.dims())?;
        match self.grid.toggle(row, col) {
            Ok(true) => Some((row, col)),
            _ => None,
        }
    }

    pub fn handle_key(&mut self, name: &str) {
        if name.eq_ignore_ascii_case(&self.toggle_key) {
            self.toggle_running();
        }
    }

    pub fn toggle_running(&mut self) -> Mode {
        self.set_running(!self.grid.is_running());
        self.grid.mode()
    }

    pub fn set_running(&mut self, running: bool) {
        if running && !self.grid.is_running() {
            self.ticker.reset(Instant::now());
            self.history.reset();
            self.history.observe(self.grid.fingerprint());
        }
        self.grid.set_running(running);
    }

    /// Advances one generation if running and a tick is due at `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.grid.is_running() || !self.ticker.due(now) {
            return false;
        }
        self.step();
        true
    }

    /// Time left before the next tick; `None` while editing.
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.grid.is_running().then(|| self.ticker.until_next(now))
    }

    pub fn step(&mut self) {
        self.grid.advance_generation();
        if self.history.observe(self.grid.fingerprint()) && self.pause_on_repeat {
            info!(generation = self.grid.generation(), "board repeated, pausing");
            self.grid.set_running(false);
        }
    }

    /// Outlines every cell, then fills the live ones. Never advances the grid.
    pub fn render(&self, canvas: &mut impl Canvas) {
        let Palette { grid_line, live, .. } = self.palette;
        for row in 0..self.grid.height() {
            for col in 0..self.grid.width() {
                canvas.draw_rect(grid_line, view::cell_to_rect(row, col, &self.view), Fill::Outline);
            }
        }
        for (row, col) in self.grid.live_cells() {
            canvas.draw_rect(live, view::cell_to_rect(row, col, &self.view), Fill::Solid);
        }
    }

    pub fn clear(&mut self) {
        self.grid.set_running(false);
        self.grid.clear();
        self.history.reset();
        debug!("cleared board");
    }

    pub fn load_pattern(&mut self, pattern: &Pattern) {
        patterns::apply_pattern(&mut self.grid, pattern);
        self.history.reset();
    }

    pub fn randomize(&mut self, seed: u64) {
        patterns::apply_random(&mut self.grid, seed);
        self.history.reset();
    }
}
