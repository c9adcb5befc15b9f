//! WebAssembly host surface: grid, brush and stroke state behind one handle.

use wasm_bindgen::prelude::*;

use crate::cell::Material;
use crate::config::{ConfigError, SimulationConfig};
use crate::driver::Driver;
use crate::input::{pointer_to_cell, CellPos, StrokeState};
use crate::spawner::Spawner;
use crate::Grid;

/// Install the panic hook and console logger.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

fn to_js(err: &ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    grid: Grid,
    spawner: Spawner,
    stroke: StrokeState,
    material: Material,
    pixel_size: f64,
    ticks_per_frame: u32,
}

#[wasm_bindgen]
impl Universe {
    /// Canvas of `width`×`height` pixels split into `pixel_size` cells.
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize, pixel_size: usize) -> Result<Universe, JsValue> {
        let config = SimulationConfig {
            width,
            height,
            pixel_size,
            ..SimulationConfig::default()
        };
        Self::with_config(&config).map_err(|e| to_js(&e))
    }

    /// Build from a JSON `SimulationConfig`; missing fields take defaults.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<Universe, JsValue> {
        SimulationConfig::from_json(json)
            .and_then(|config| Self::with_config(&config))
            .map_err(|e| to_js(&e))
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.grid.width()
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.height()
    }

    /// One animation frame's worth of passes.
    pub fn frame(&mut self) -> usize {
        let times = self.ticks_per_frame;
        self.tick(times)
    }

    pub fn tick(&mut self, times: u32) -> usize {
        Driver::new(&mut self.grid).tick(times)
    }

    /// Select the brush material by wire id. Unknown ids are ignored.
    pub fn set_material(&mut self, id: u8) -> bool {
        match Material::from_id(id) {
            Some(material) => {
                self.material = material;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn material(&self) -> u8 {
        self.material as u8
    }

    /// Brush spawn centered on a grid cell.
    pub fn spawn(&mut self, x: i32, y: i32) -> usize {
        self.spawner.spawn(&mut self.grid, x, y, self.material)
    }

    /// Place a single particle by wire id; 0 erases.
    pub fn set_cell(&mut self, x: i32, y: i32, id: u8) -> bool {
        if id == 0 {
            return self.erase(x, y);
        }
        Material::from_id(id).is_some_and(|m| self.grid.place(x, y, m))
    }

    pub fn erase(&mut self, x: i32, y: i32) -> bool {
        self.grid.clear(x, y).is_some()
    }

    pub fn clear(&mut self) {
        self.grid.clear_all();
    }

    pub fn pointer_down(&mut self, client_x: f64, client_y: f64, left: f64, top: f64) -> usize {
        let Some(cell) = self.locate(client_x, client_y, left, top) else {
            return 0;
        };
        let centers = self.stroke.start(cell);
        self.spawn_at(&centers)
    }

    pub fn pointer_move(&mut self, client_x: f64, client_y: f64, left: f64, top: f64) -> usize {
        let cell = self.locate(client_x, client_y, left, top);
        let centers = self.stroke.drag(cell);
        self.spawn_at(&centers)
    }

    pub fn pointer_up(&mut self) {
        self.stroke.stop();
    }

    pub fn pointer_leave(&mut self) {
        self.stroke.leave();
    }

    pub fn pointer_enter(&mut self, client_x: f64, client_y: f64, left: f64, top: f64) {
        let cell = self.locate(client_x, client_y, left, top);
        self.stroke.enter(cell);
    }

    /// Repeat-timer callback while the pointer is held.
    pub fn hold(&mut self) -> usize {
        let centers = self.stroke.hold();
        self.spawn_at(&centers)
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.stroke.is_drawing()
    }

    /// RGBA bytes, one pixel per cell in row-major order; empty cells are transparent.
    #[must_use]
    pub fn render_rgba(&self) -> Vec<u8> {
        let mut pixels = vec![0u8; self.grid.width() * self.grid.height() * 4];
        let w = self.grid.width();
        self.grid.for_each_occupied(|x, y, color| {
            let i = (y as usize * w + x as usize) * 4;
            pixels[i..i + 4].copy_from_slice(&color.to_rgba());
        });
        pixels
    }

    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.grid.occupied_count()
    }
}

impl Universe {
    /// # Errors
    /// Any [`SimulationConfig::validate`] failure.
    pub fn with_config(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (cols, rows) = config.grid_dimensions()?;
        let (grid, spawner) = match config.seed {
            Some(seed) => (
                Grid::with_seed(cols, rows, seed)?,
                Spawner::with_seed(config.brush.radius, config.brush.shape, seed.wrapping_add(1)),
            ),
            None => (
                Grid::new(cols, rows)?,
                Spawner::new(config.brush.radius, config.brush.shape),
            ),
        };
        Ok(Self {
            grid,
            spawner,
            stroke: StrokeState::new(),
            material: Material::Sand,
            pixel_size: config.pixel_size as f64,
            ticks_per_frame: config.ticks_per_frame,
        })
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    fn locate(&self, client_x: f64, client_y: f64, left: f64, top: f64) -> Option<CellPos> {
        pointer_to_cell(
            (client_x, client_y),
            (left, top),
            self.pixel_size,
            self.grid.width(),
            self.grid.height(),
        )
    }

    fn spawn_at(&mut self, centers: &[CellPos]) -> usize {
        centers
            .iter()
            .map(|&(x, y)| self.spawner.spawn(&mut self.grid, x, y, self.material))
            .sum()
    }
}
