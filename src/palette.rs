//! Ember color palette for shattered fragments.
//!
//! Every fragment picks one of three warm colors at spawn time and keeps it
//! for its whole life. Renderers that want a gradient over lifetime should
//! derive it from `life`, not by mutating the color.
//!
//! | Color | R | G | B |
//! |-------|---|---|---|
//! | [`EmberColor::Yellow`] | 1.0 | 0.8 | 0.0 |
//! | [`EmberColor::Orange`] | 1.0 | 0.4 | 0.0 |
//! | [`EmberColor::Red`]    | 1.0 | 0.2 | 0.0 |

use glam::Vec3;
use rand::Rng;

/// One of the three fixed fragment colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmberColor {
    /// Bright yellow core spark.
    Yellow,
    /// Mid orange ember.
    Orange,
    /// Deep red ember.
    Red,
}

impl EmberColor {
    /// All palette entries, in index order.
    pub const ALL: [EmberColor; 3] = [EmberColor::Yellow, EmberColor::Orange, EmberColor::Red];

    /// Number of palette entries.
    pub const fn count() -> u32 {
        Self::ALL.len() as u32
    }

    /// RGB components in `[0, 1]`.
    pub fn rgb(&self) -> Vec3 {
        match self {
            EmberColor::Yellow => Vec3::new(1.0, 0.8, 0.0),
            EmberColor::Orange => Vec3::new(1.0, 0.4, 0.0),
            EmberColor::Red => Vec3::new(1.0, 0.2, 0.0),
        }
    }

    /// Palette entry for an index, or `None` past the last entry.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Index of this entry in [`EmberColor::ALL`].
    pub fn index(&self) -> u32 {
        match self {
            EmberColor::Yellow => 0,
            EmberColor::Orange => 1,
            EmberColor::Red => 2,
        }
    }

    /// Pick an entry uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Find the palette entry whose RGB matches `color` exactly.
    pub fn matching(color: Vec3) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.rgb() == color)
    }
}
