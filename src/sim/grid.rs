//! Brick grid layout

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bricks::{Brick, BrickField, BrickStatus};
use crate::consts::*;

/// Static brick grid layout (rows, columns and spacing)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub padding: f32,
    pub offset_left: f32,
    pub offset_top: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: BRICK_COLUMNS,
            rows: BRICK_ROWS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            offset_left: BRICK_OFFSET_LEFT,
            offset_top: BRICK_OFFSET_TOP,
        }
    }
}

impl GridLayout {
    /// Top-left corner of the brick at (column, row)
    pub fn brick_position(&self, column: u32, row: u32) -> Vec2 {
        Vec2::new(
            self.offset_left + column as f32 * (self.brick_width + self.padding),
            self.offset_top + row as f32 * (self.brick_height + self.padding),
        )
    }

    /// Build a fresh field of alive bricks, stored column-major.
    ///
    /// Each brick starts at the color tier of its row. Rows beyond the
    /// palette start at `last_tier`.
    pub fn generate(&self, last_tier: u8) -> BrickField {
        let mut bricks = Vec::with_capacity((self.columns * self.rows) as usize);
        for column in 0..self.columns {
            for row in 0..self.rows {
                bricks.push(Brick {
                    column,
                    row,
                    pos: self.brick_position(column, row),
                    status: BrickStatus::Alive,
                    tier: row.min(last_tier as u32) as u8,
                });
            }
        }
        BrickField::new(
            bricks,
            Vec2::new(self.brick_width, self.brick_height),
            last_tier,
        )
    }
}
