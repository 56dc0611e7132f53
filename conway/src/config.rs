// config.rs - Startup configuration with environment overrides

use std::env;
use std::str::FromStr;

use crate::clock::DEFAULT_TICK_RATE;
use crate::error::{LifeError, Result};
use crate::history::DEFAULT_HISTORY_LEN;
use crate::grid::Dims;
use crate::view::{self, MAX_CELL_SIZE, ViewConfig};

pub const GRID_WIDTH: usize = 26;
pub const GRID_HEIGHT: usize = 26;
pub const WINDOW_SIZE: [f32; 2] = [800.0, 800.0];
pub const TOGGLE_KEY: &str = "space";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub grid_line: Color,
    pub live: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            grid_line: Color::WHITE,
            live: Color::GREEN,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub view: ViewConfig,
    pub window_size: [f32; 2],
    /// Generations per second while running.
    pub tick_rate: f32,
    pub palette: Palette,
    pub toggle_key: String,
    /// Leave `Running` when the board repeats a recent generation. Off by
    /// default: only the toggle key changes mode.
    pub pause_on_repeat: bool,
    pub history_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            view: ViewConfig::default(),
            window_size: WINDOW_SIZE,
            tick_rate: DEFAULT_TICK_RATE,
            palette: Palette::default(),
            toggle_key: TOGGLE_KEY.to_owned(),
            pause_on_repeat: false,
            history_len: DEFAULT_HISTORY_LEN,
        }
    }
}

impl Config {
    /// Defaults overridden by `CONWAY_WIDTH`, `CONWAY_HEIGHT`,
    /// `CONWAY_CELL_SIZE` and `CONWAY_TICK_RATE` when set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(width) = parse_var(&lookup, "CONWAY_WIDTH")? {
            config.width = width;
        }
        if let Some(height) = parse_var(&lookup, "CONWAY_HEIGHT")? {
            config.height = height;
        }
        if let Some(cell_size) = parse_var(&lookup, "CONWAY_CELL_SIZE")? {
            config.view = ViewConfig::new(config.view.left(), config.view.top(), cell_size)?;
        }
        if let Some(rate) = parse_var(&lookup, "CONWAY_TICK_RATE")? {
            config.tick_rate = rate;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LifeError::InvalidDimensions { width: self.width, height: self.height });
        }
        if self.view.cell_size() == 0 || self.view.cell_size() > MAX_CELL_SIZE {
            return Err(LifeError::InvalidCellSize);
        }
        view::check_fits(Dims { rows: self.height, cols: self.width }, &self.view)?;
        if !self.tick_rate.is_finite() || self.tick_rate <= 0.0 {
            return Err(LifeError::InvalidTickRate(self.tick_rate));
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| LifeError::Config { key, value }),
    }
}
