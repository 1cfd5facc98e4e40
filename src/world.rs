//! World model: the hex array, the player table, and random ownership.
//!
//! A `World` is built once at boot and never resized. Hexes are stored
//! row-major in the order [`WorldSize::index_of`] assigns, so the flat index
//! of a hex in `hexes()` always agrees with the grid's neighbor arithmetic.

#[cfg(test)]
#[path = "world_test.rs"]
mod world_test;

use rand::Rng;

use crate::consts::PLAYER_COLORS;
use crate::geom::GridCoord;
use crate::grid::WorldSize;

/// Number of players in every world.
pub const PLAYER_COUNT: usize = 6;

/// Cumulative ownership thresholds for the first five players; the sixth
/// takes the remainder. Approximately uniform.
const OWNER_THRESHOLDS: [f64; PLAYER_COUNT - 1] = [0.16, 0.33, 0.50, 0.66, 0.83];

/// A player identity with a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub color: &'static str,
}

/// Typed index into the world's player table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Wrap a raw index, or `None` when it is not a valid player slot.
    #[must_use]
    pub fn new(raw: u8) -> Option<Self> {
        (usize::from(raw) < PLAYER_COUNT).then_some(Self(raw))
    }

    /// Position in the player table.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

/// A grid cell paired with its owning player.
#[derive(Debug, Clone, Copy)]
pub struct Hex {
    pub coord: GridCoord,
    pub owner: PlayerId,
}

/// The full world: dimensions, hexes, and the fixed player table.
#[derive(Debug)]
pub struct World {
    size: WorldSize,
    hexes: Vec<Hex>,
    players: [Player; PLAYER_COUNT],
}

impl World {
    /// Build a world of `size`, assigning each hex a random owner.
    #[must_use]
    pub fn generate(size: WorldSize, rng: &mut impl Rng) -> Self {
        let mut hexes = Vec::with_capacity(size.cell_count());
        for row in 0..size.height() {
            for col in 0..size.width() {
                hexes.push(Hex {
                    coord: GridCoord::new(col, row),
                    owner: random_owner(rng),
                });
            }
        }
        Self {
            size,
            hexes,
            players: PLAYER_COLORS.map(|color| Player { color }),
        }
    }

    #[must_use]
    pub fn size(&self) -> WorldSize {
        self.size
    }

    #[must_use]
    pub fn hexes(&self) -> &[Hex] {
        &self.hexes
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Reassign the owner of the hex at `index`. Returns `false` when the
    /// index is out of bounds.
    pub fn set_owner(&mut self, index: usize, owner: PlayerId) -> bool {
        let Some(hex) = self.hexes.get_mut(index) else {
            return false;
        };
        hex.owner = owner;
        true
    }
}

/// Draw a player id with the threshold weighting the world was designed for.
#[allow(clippy::cast_possible_truncation)] // slot < PLAYER_COUNT = 6
fn random_owner(rng: &mut impl Rng) -> PlayerId {
    let r: f64 = rng.gen_range(0.0..1.0);
    let slot = OWNER_THRESHOLDS
        .iter()
        .position(|&t| r < t)
        .unwrap_or(PLAYER_COUNT - 1);
    PlayerId(slot as u8)
}
