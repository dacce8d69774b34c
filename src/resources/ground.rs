use bevy::prelude::*;
use nalgebra::Vector3;

/// Collision world queried by the ground proximity sensor.
///
/// Implementations must ignore the airframe's own collider.
pub trait GroundQuery {
    /// Casts a ray from `origin` straight down (-z) for at most `max_length`
    /// and returns the first hit point.
    fn raycast_down(&self, origin: &Vector3<f64>, max_length: f64) -> Option<Vector3<f64>>;
}

/// A world with nothing to hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGround;

impl GroundQuery for NoGround {
    fn raycast_down(&self, _origin: &Vector3<f64>, _max_length: f64) -> Option<Vector3<f64>> {
        None
    }
}

/// Infinite horizontal plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlatGround {
    pub elevation: f64,
}

impl FlatGround {
    pub fn new(elevation: f64) -> Self {
        Self { elevation }
    }
}

impl GroundQuery for FlatGround {
    fn raycast_down(&self, origin: &Vector3<f64>, max_length: f64) -> Option<Vector3<f64>> {
        let drop = origin.z - self.elevation;
        if (0.0..=max_length).contains(&drop) {
            Some(Vector3::new(origin.x, origin.y, self.elevation))
        } else {
            None
        }
    }
}

/// Regular grid of terrain heights, bilinearly interpolated.
///
/// Rays cast outside the grid miss.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightMapGround {
    origin: (f64, f64),
    cell_size: f64,
    columns: usize,
    rows: usize,
    heights: Vec<f64>,
}

impl HeightMapGround {
    /// Returns `None` unless the grid is at least 2x2, `heights` holds
    /// exactly `rows * columns` row-major samples and `cell_size` is a
    /// positive finite length.
    pub fn new(
        origin: (f64, f64),
        cell_size: f64,
        columns: usize,
        rows: usize,
        heights: Vec<f64>,
    ) -> Option<Self> {
        let valid_cell = cell_size.is_finite() && cell_size > 0.0;
        if columns < 2 || rows < 2 || heights.len() != columns * rows || !valid_cell {
            return None;
        }
        Some(Self {
            origin,
            cell_size,
            columns,
            rows,
            heights,
        })
    }

    /// World x/y of the first sample.
    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    fn sample(&self, column: usize, row: usize) -> Option<f64> {
        self.heights.get(row * self.columns + column).copied()
    }

    /// Terrain elevation under a world x/y position.
    pub fn height_at(&self, x: f64, y: f64) -> Option<f64> {
        let last_column = self.columns.checked_sub(1)?;
        let last_row = self.rows.checked_sub(1)?;
        let gx = (x - self.origin.0) / self.cell_size;
        let gy = (y - self.origin.1) / self.cell_size;
        if !(0.0..=last_column as f64).contains(&gx) || !(0.0..=last_row as f64).contains(&gy) {
            return None;
        }

        let x0 = (gx.floor() as usize).min(last_column.checked_sub(1)?);
        let y0 = (gy.floor() as usize).min(last_row.checked_sub(1)?);
        let tx = gx - x0 as f64;
        let ty = gy - y0 as f64;

        let near = self.sample(x0, y0)? * (1.0 - tx) + self.sample(x0 + 1, y0)? * tx;
        let far = self.sample(x0, y0 + 1)? * (1.0 - tx) + self.sample(x0 + 1, y0 + 1)? * tx;
        Some(near * (1.0 - ty) + far * ty)
    }
}

impl GroundQuery for HeightMapGround {
    fn raycast_down(&self, origin: &Vector3<f64>, max_length: f64) -> Option<Vector3<f64>> {
        let elevation = self.height_at(origin.x, origin.y)?;
        FlatGround::new(elevation).raycast_down(origin, max_length)
    }
}

/// Collision world shared by every airframe in the app.
#[derive(Resource)]
pub struct GroundResource(pub Box<dyn GroundQuery + Send + Sync>);

impl GroundResource {
    pub fn new<G: GroundQuery + Send + Sync + 'static>(ground: G) -> Self {
        Self(Box::new(ground))
    }
}

impl Default for GroundResource {
    fn default() -> Self {
        Self::new(FlatGround::default())
    }
}

impl GroundQuery for GroundResource {
    fn raycast_down(&self, origin: &Vector3<f64>, max_length: f64) -> Option<Vector3<f64>> {
        self.0.raycast_down(origin, max_length)
    }
}
