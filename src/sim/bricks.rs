//! Brick field: hit testing and tiered destruction

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Brick lifecycle. `Alive -> Destroyed` happens once and never reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickStatus {
    Alive,
    Destroyed,
}

/// A single brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub column: u32,
    pub row: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub status: BrickStatus,
    /// Palette index; only ever increases
    pub tier: u8,
}

impl Brick {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.status == BrickStatus::Alive
    }
}

/// Outcome of [`BrickField::register_hit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Brick moved up one color tier and is still standing
    Advanced { tier: u8 },
    /// Brick was on its last tier and is now destroyed (scores a point)
    Destroyed,
}

/// Mutable set of bricks for one round, stored column-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickField {
    pub bricks: Vec<Brick>,
    /// Width and height shared by every brick
    pub brick_size: Vec2,
    /// Tier at which a hit destroys the brick
    pub last_tier: u8,
}

impl BrickField {
    pub fn new(bricks: Vec<Brick>, brick_size: Vec2, last_tier: u8) -> Self {
        Self {
            bricks,
            brick_size,
            last_tier,
        }
    }

    /// True iff every brick is destroyed
    pub fn all_destroyed(&self) -> bool {
        self.bricks.iter().all(|b| !b.is_alive())
    }

    pub fn alive_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_alive()).count()
    }

    pub fn destroyed_count(&self) -> usize {
        self.bricks.len() - self.alive_count()
    }

    /// Index of the first alive brick whose box strictly contains `point`.
    ///
    /// Scan order is column-major, row-minor; the first match wins even if
    /// several bricks overlap the point.
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        self.bricks.iter().position(|b| {
            b.is_alive()
                && point.x > b.pos.x
                && point.x < b.pos.x + self.brick_size.x
                && point.y > b.pos.y
                && point.y < b.pos.y + self.brick_size.y
        })
    }

    /// Apply one hit to the brick at `index`.
    ///
    /// A brick already on the last tier is destroyed; otherwise its tier
    /// advances by one. Returns `None` for a missing or destroyed brick.
    pub fn register_hit(&mut self, index: usize) -> Option<HitOutcome> {
        let last_tier = self.last_tier;
        let brick = self.bricks.get_mut(index).filter(|b| b.is_alive())?;

        if brick.tier >= last_tier {
            brick.status = BrickStatus::Destroyed;
            log::debug!("Brick ({}, {}) destroyed", brick.column, brick.row);
            Some(HitOutcome::Destroyed)
        } else {
            brick.tier += 1;
            log::trace!(
                "Brick ({}, {}) advanced to tier {}",
                brick.column,
                brick.row,
                brick.tier
            );
            Some(HitOutcome::Advanced { tier: brick.tier })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GridLayout;

    fn field() -> BrickField {
        GridLayout::default().generate(2)
    }

    #[test]
    fn test_hit_test_strict_containment() {
        let field = field();
        // Brick (0, 0) spans x 30..105, y 30..50
        assert_eq!(field.hit_test(Vec2::new(50.0, 40.0)), Some(0));
        assert_eq!(field.hit_test(Vec2::new(30.0, 40.0)), None);
        assert_eq!(field.hit_test(Vec2::new(50.0, 50.0)), None);
        // Gap between columns
        assert_eq!(field.hit_test(Vec2::new(110.0, 40.0)), None);
        // Brick (1, 2) is index 1 * 3 + 2
        assert_eq!(field.hit_test(Vec2::new(150.0, 100.0)), Some(5));
    }

    #[test]
    fn test_hit_test_skips_destroyed() {
        let mut field = field();
        field.bricks[0].status = BrickStatus::Destroyed;
        assert_eq!(field.hit_test(Vec2::new(50.0, 40.0)), None);
    }

    #[test]
    fn test_hit_test_first_match_wins_on_overlap() {
        let layout = GridLayout {
            padding: -40.0,
            ..Default::default()
        };
        let field = layout.generate(2);
        // Columns 0 and 1 overlap between x 65 and 105
        let hit = field.hit_test(Vec2::new(80.0, 40.0)).unwrap();
        assert_eq!(field.bricks[hit].column, 0);
    }

    #[test]
    fn test_register_hit_walks_tiers_then_destroys() {
        let mut field = field();
        assert_eq!(field.register_hit(0), Some(HitOutcome::Advanced { tier: 1 }));
        assert_eq!(field.register_hit(0), Some(HitOutcome::Advanced { tier: 2 }));
        assert_eq!(field.register_hit(0), Some(HitOutcome::Destroyed));
        assert!(!field.bricks[0].is_alive());
        assert_eq!(field.bricks[0].tier, 2);

        // Destroyed bricks take no further hits
        assert_eq!(field.register_hit(0), None);
        assert_eq!(field.register_hit(999), None);
    }

    #[test]
    fn test_last_row_breaks_in_one_hit() {
        let mut field = field();
        assert_eq!(field.register_hit(2), Some(HitOutcome::Destroyed));
        assert_eq!(field.destroyed_count(), 1);
    }

    #[test]
    fn test_all_destroyed() {
        let mut field = field();
        assert!(!field.all_destroyed());
        for b in &mut field.bricks {
            b.status = BrickStatus::Destroyed;
        }
        assert!(field.all_destroyed());
        assert_eq!(field.alive_count(), 0);
    }
}
