//! Configuration for a simulation instance and its brush.

use serde::{Deserialize, Serialize};

use crate::spawner::BrushShape;

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Canvas width in pixels.
    pub width: usize,
    /// Canvas height in pixels.
    pub height: usize,
    /// Side of one grid cell in canvas pixels. Must divide width and height.
    pub pixel_size: usize,
    /// Grid passes run per animation frame.
    pub ticks_per_frame: u32,
    pub brush: BrushConfig,
    /// Fixed RNG seed; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            pixel_size: 4,
            ticks_per_frame: 2,
            brush: BrushConfig::default(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Brush radius in cells.
    pub radius: i32,
    pub shape: BrushShape,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            radius: 2,
            shape: BrushShape::Disc,
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    ///
    /// # Errors
    /// Malformed JSON or any [`SimulationConfig::validate`] failure.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Grid size in cells.
    ///
    /// # Errors
    /// See [`grid_dimensions`].
    pub fn grid_dimensions(&self) -> Result<(usize, usize), ConfigError> {
        grid_dimensions(self.width, self.height, self.pixel_size)
    }

    /// Validate configuration consistency.
    ///
    /// # Errors
    /// Returns the first programmer error found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (cols, rows) = self.grid_dimensions()?;
        if self.ticks_per_frame == 0 {
            return Err(ConfigError::InvalidTicksPerFrame);
        }
        if self.brush.radius < 0 {
            return Err(ConfigError::InvalidBrushRadius(self.brush.radius));
        }
        let max = cols.max(rows);
        if self.brush.radius as usize > max {
            return Err(ConfigError::BrushRadiusTooLarge {
                radius: self.brush.radius,
                max,
            });
        }
        Ok(())
    }
}

/// `(cols, rows)` for a canvas split into `pixel_size` squares.
///
/// # Errors
/// Zero pixel size, a pixel size that leaves a remainder, or an empty canvas.
pub fn grid_dimensions(
    width: usize,
    height: usize,
    pixel_size: usize,
) -> Result<(usize, usize), ConfigError> {
    if pixel_size == 0 {
        return Err(ConfigError::InvalidPixelSize);
    }
    if width % pixel_size != 0 || height % pixel_size != 0 {
        return Err(ConfigError::UnevenPixelSize {
            width,
            height,
            pixel_size,
        });
    }
    let (cols, rows) = (width / pixel_size, height / pixel_size);
    if cols == 0 || rows == 0 {
        return Err(ConfigError::InvalidDimensions { cols, rows });
    }
    Ok((cols, rows))
}

/// Configuration errors. These indicate a setup bug, not a runtime condition.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions must be non-zero and fit in i32 (got {cols}x{rows})")]
    InvalidDimensions { cols: usize, rows: usize },
    #[error("Pixel size must be non-zero")]
    InvalidPixelSize,
    #[error("Pixel size {pixel_size} does not divide canvas {width}x{height}")]
    UnevenPixelSize {
        width: usize,
        height: usize,
        pixel_size: usize,
    },
    #[error("Brush radius must be non-negative (got {0})")]
    InvalidBrushRadius(i32),
    #[error("Brush radius {radius} exceeds the larger grid side ({max})")]
    BrushRadiusTooLarge { radius: i32, max: usize },
    #[error("Ticks per frame must be positive")]
    InvalidTicksPerFrame,
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
