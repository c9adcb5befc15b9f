//! Pointer stroke state for the input adapter.
//!
//! Holds no grid access: every method returns the brush centers the caller
//! should pass to [`crate::Spawner::spawn`]. The host owns the repeat timer
//! (~16 ms) and calls [`StrokeState::hold`] from it while a stroke is active.

/// Grid cell coordinates.
pub type CellPos = (i32, i32);

/// Map a client-space pointer position to a grid cell.
///
/// `floor((client - origin) / pixel_size)` per axis; `None` outside the grid.
#[must_use]
pub fn pointer_to_cell(
    client: (f64, f64),
    origin: (f64, f64),
    pixel_size: f64,
    cols: usize,
    rows: usize,
) -> Option<CellPos> {
    if pixel_size <= 0.0 {
        return None;
    }
    let fx = ((client.0 - origin.0) / pixel_size).floor();
    let fy = ((client.1 - origin.1) / pixel_size).floor();
    if !(0.0..cols as f64).contains(&fx) || !(0.0..rows as f64).contains(&fy) {
        return None;
    }
    Some((fx as i32, fy as i32))
}

/// Cells along the segment `from..=to`, one per unit of Euclidean length.
///
/// Points are rounded half-up to the nearest cell and may repeat.
#[must_use]
pub fn line_cells(from: CellPos, to: CellPos) -> Vec<CellPos> {
    let dx = f64::from(to.0 - from.0);
    let dy = f64::from(to.1 - from.1);
    let steps = dx.hypot(dy).ceil() as i32;
    if steps == 0 {
        return vec![from];
    }
    let n = f64::from(steps);
    (0..=steps)
        .map(|i| {
            let t = f64::from(i) / n;
            let x = (f64::from(from.0) + dx * t + 0.5).floor() as i32;
            let y = (f64::from(from.1) + dy * t + 0.5).floor() as i32;
            (x, y)
        })
        .collect()
}

/// Per-canvas drawing state, owned by whoever owns the input adapter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StrokeState {
    drawing: bool,
    current: Option<CellPos>,
    last_spawn: Option<CellPos>,
}

impl StrokeState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True between `start` and `stop`; the host's repeat timer runs while set.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    #[must_use]
    pub fn current(&self) -> Option<CellPos> {
        self.current
    }

    /// Pointer pressed on `cell`: spawn once there.
    pub fn start(&mut self, cell: CellPos) -> Vec<CellPos> {
        self.drawing = true;
        self.current = Some(cell);
        self.last_spawn = Some(cell);
        vec![cell]
    }

    pub fn stop(&mut self) {
        *self = Self::default();
    }

    /// Pointer moved. `None` means it moved off the grid.
    pub fn drag(&mut self, cell: Option<CellPos>) -> Vec<CellPos> {
        if !self.drawing {
            return Vec::new();
        }
        let Some(cell) = cell else {
            self.current = None;
            return Vec::new();
        };
        let centers = match self.last_spawn {
            Some(last) => line_cells(last, cell),
            None => vec![cell],
        };
        self.current = Some(cell);
        self.last_spawn = Some(cell);
        centers
    }

    /// Pointer left the canvas: keep the stroke, stop spawning until it returns.
    pub fn leave(&mut self) {
        self.current = None;
    }

    /// Pointer re-entered the canvas.
    pub fn enter(&mut self, cell: Option<CellPos>) {
        if self.drawing && cell.is_some() {
            self.current = cell;
        }
    }

    /// Repeat-timer callback while the pointer is held.
    pub fn hold(&mut self) -> Vec<CellPos> {
        let (true, Some(current)) = (self.drawing, self.current) else {
            return Vec::new();
        };
        let centers = match self.last_spawn {
            Some(last) if last != current => line_cells(last, current),
            _ => vec![current],
        };
        self.last_spawn = Some(current);
        centers
    }
}
