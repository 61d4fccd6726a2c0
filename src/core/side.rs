//! The two sides of the duel and per-side data storage.
//!
//! ## Side
//!
//! Who is holding the revolver: the human `Player` or the `Npc`.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for life totals.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two duelists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human at the keyboard.
    Player,
    /// The computer opponent.
    Npc,
}

impl Side {
    /// Both sides, player first.
    pub const ALL: [Side; 2] = [Side::Player, Side::Npc];

    /// Slot index (player = 0, npc = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Npc => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Npc,
            Side::Npc => Side::Player,
        }
    }

    /// Iterate over both sides.
    pub fn all() -> impl Iterator<Item = Side> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Npc => write!(f, "NPC"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use face_death::core::{Side, SideMap};
///
/// let mut life: SideMap<u32> = SideMap::with_value(2);
/// life[Side::Npc] -= 1;
///
/// assert_eq!(life[Side::Player], 2);
/// assert_eq!(life[Side::Npc], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Npc)],
        }
    }

    /// Create a SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Overwrite both entries with the same value.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data = [value.clone(), value];
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::all().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert_eq!(Side::Player.index(), 0);
        assert_eq!(Side::Npc.index(), 1);
        assert_eq!(Side::Player.opponent(), Side::Npc);
        assert_eq!(Side::Npc.opponent(), Side::Player);
        assert_eq!(format!("{}", Side::Npc), "NPC");
    }

    #[test]
    fn test_side_all() {
        let sides: Vec<_> = Side::all().collect();
        assert_eq!(sides, vec![Side::Player, Side::Npc]);
    }

    #[test]
    fn test_side_map_new() {
        let map: SideMap<usize> = SideMap::new(|s| s.index() * 10);

        assert_eq!(map[Side::Player], 0);
        assert_eq!(map[Side::Npc], 10);
    }

    #[test]
    fn test_side_map_mutation_and_fill() {
        let mut map: SideMap<u32> = SideMap::with_value(2);

        map[Side::Player] = 0;
        assert_eq!(map[Side::Player], 0);
        assert_eq!(map[Side::Npc], 2);

        map.fill(5);
        assert_eq!(map[Side::Player], 5);
        assert_eq!(map[Side::Npc], 5);
    }

    #[test]
    fn test_side_map_iter() {
        let map: SideMap<u32> = SideMap::new(|s| s.index() as u32 + 1);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Player, &1), (Side::Npc, &2)]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map: SideMap<u32> = SideMap::new(|s| s.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
