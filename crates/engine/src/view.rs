//! Mapping between grid, world and screen coordinates.
//!
//! World space is grid space scaled by `cell_size`. Screen space centers the
//! world on the viewport, offset by the pan and scaled by the zoom:
//! `screen = viewport_center + (world + pan) * zoom`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{CELL_SIZE, MAX_ZOOM, MIN_ZOOM};
use crate::roads::GridPoint;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewTransform {
    pub cell_size: f32,
    pub zoom: f32,
    /// World-space pan offset.
    pub pan: Vec2,
    pub viewport_center: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            zoom: 1.0,
            pan: Vec2::ZERO,
            viewport_center: Vec2::ZERO,
        }
    }
}

impl ViewTransform {
    pub fn new(viewport_size: Vec2) -> Self {
        Self {
            viewport_center: viewport_size / 2.0,
            ..Self::default()
        }
    }

    /// Screen position of a (possibly fractional) grid coordinate.
    pub fn grid_to_screen(&self, grid_x: f32, grid_y: f32) -> Vec2 {
        let world = Vec2::new(grid_x, grid_y) * self.cell_size;
        self.viewport_center + (world + self.pan) * self.zoom
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.viewport_center) / self.zoom - self.pan
    }

    /// Fractional grid coordinate under a screen position.
    pub fn screen_to_grid(&self, screen: Vec2) -> Vec2 {
        self.screen_to_world(screen) / self.cell_size
    }

    /// Tile containing a world position.
    pub fn world_to_grid(&self, world: Vec2) -> GridPoint {
        let cell = (world / self.cell_size).floor();
        GridPoint::new(cell.x as i32, cell.y as i32)
    }

    /// Set the zoom, clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn pan_by(&mut self, screen_delta: Vec2) {
        self.pan += screen_delta / self.zoom;
    }

    /// Closure form of [`Self::grid_to_screen`] for the polygon builders.
    pub fn grid_to_screen_fn(&self) -> impl Fn(f32, f32) -> Vec2 + '_ {
        move |x, y| self.grid_to_screen(x, y)
    }
}
