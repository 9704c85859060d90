//! Positions and outcomes of the adjacent-pick game

use crate::{display, grid::CharTile};
use std::fmt::Display;

/// Outcome of a position for the player about to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr)
)]
#[repr(u8)]
pub enum Outcome {
    /// Every move leads to a winning position for the opponent, or there is no move at all
    #[default]
    Losing = 0,

    /// There is a move to a losing position
    Winning = 1,
}

impl Outcome {
    /// Digit used by the persisted table
    #[inline]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Outcome::digit`]
    #[inline]
    pub const fn from_digit(digit: u8) -> Option<Outcome> {
        match digit {
            0 => Some(Outcome::Losing),
            1 => Some(Outcome::Winning),
            _ => None,
        }
    }

    /// `Winning` iff `is_winning`
    #[inline]
    pub const fn from_bool(is_winning: bool) -> Outcome {
        if is_winning {
            Outcome::Winning
        } else {
            Outcome::Losing
        }
    }

    #[allow(missing_docs)]
    #[inline]
    pub const fn is_winning(self) -> bool {
        matches!(self, Outcome::Winning)
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Losing => write!(f, "LOSING"),
            Outcome::Winning => write!(f, "WINNING"),
        }
    }
}

impl CharTile for Outcome {
    fn tile_to_char(self) -> char {
        match self {
            Outcome::Losing => 'L',
            Outcome::Winning => 'W',
        }
    }
}

/// Game position: the pile size and the size of the move that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Stones remaining before the next move
    pub stones_left: u32,

    /// Number of stones removed by the previous move, 1-based
    pub previous_pick: u32,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        display::parens(f, |f| {
            display::commas(f, &[self.stones_left, self.previous_pick])
        })
    }
}

impl Position {
    #[allow(missing_docs)]
    #[inline]
    pub const fn new(stones_left: u32, previous_pick: u32) -> Position {
        Position {
            stones_left,
            previous_pick,
        }
    }

    /// Picks allowed after `previous_pick`: one less, the same, or one more, never zero,
    /// never above `max_pick` and never more than the stones left.
    pub fn picks(self, max_pick: u32) -> impl Iterator<Item = u32> {
        let x = self.previous_pick;
        [x.checked_sub(1), Some(x), x.checked_add(1)]
            .into_iter()
            .flatten()
            .filter(move |&pick| pick >= 1 && pick <= max_pick && pick <= self.stones_left)
    }

    /// Positions reachable in a single move
    pub fn moves(self, max_pick: u32) -> impl Iterator<Item = Position> {
        self.picks(max_pick)
            .map(move |pick| Position::new(self.stones_left - pick, pick))
    }

    /// Upper bound on every pick made from this position until the end of the game.
    ///
    /// Picks grow by at most one per move and their sum cannot exceed `stones_left`, so `k`
    /// moves after this position a pick is at most `previous_pick + k` with
    /// `k * (k + 1) / 2 <= stones_left`. Classifying with this bound as `max_pick` never cuts
    /// off a move reachable from the position.
    pub fn pick_bound(self) -> u32 {
        let growth = u32::try_from((2 * u64::from(self.stones_left)).isqrt()).unwrap_or(u32::MAX);
        let floor = self.previous_pick.saturating_add(1);
        floor
            .saturating_add(growth)
            .min(self.stones_left)
            .max(floor)
    }

    /// Position is terminal if no move is possible from it
    pub fn is_terminal(self, max_pick: u32) -> bool {
        self.picks(max_pick).next().is_none()
    }
}

#[cfg(any(test, feature = "quickcheck"))]
impl quickcheck::Arbitrary for Position {
    fn arbitrary(g: &mut quickcheck::Gen) -> Position {
        Position {
            stones_left: u32::arbitrary(g) % 300,
            previous_pick: u32::arbitrary(g) % 40 + 1,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let previous_pick = self.previous_pick;
        Box::new(
            self.stones_left
                .shrink()
                .map(move |stones_left| Position::new(stones_left, previous_pick)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::QuickCheck;

    #[test]
    fn picks_are_adjacent() {
        assert_eq!(
            Position::new(10, 3).picks(10).collect::<Vec<_>>(),
            vec![2, 3, 4]
        );
        assert_eq!(Position::new(10, 1).picks(10).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(Position::new(10, 5).picks(5).collect::<Vec<_>>(), vec![4, 5]);
        assert_eq!(Position::new(3, 3).picks(10).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(Position::new(1, 1).picks(1).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn empty_pile_is_terminal() {
        for x in 1..10 {
            assert!(Position::new(0, x).is_terminal(10));
        }
        assert!(Position::new(1, 3).is_terminal(10));
        assert!(!Position::new(2, 3).is_terminal(10));
    }

    #[test]
    fn moves_land_in_range() {
        let mut qc = QuickCheck::new();
        let test = |p: Position| {
            for next in p.moves(p.previous_pick + 1) {
                assert!(next.stones_left < p.stones_left);
                assert!(next.previous_pick >= 1);
                assert!(next.previous_pick.abs_diff(p.previous_pick) <= 1);
                assert_eq!(p.stones_left - next.stones_left, next.previous_pick);
            }
        };
        qc.quickcheck(test as fn(Position));
    }

    #[test]
    fn pick_bound_is_small() {
        assert_eq!(Position::new(0, 5).pick_bound(), 6);
        assert_eq!(Position::new(10, 1).pick_bound(), 6);
        assert_eq!(Position::new(3, 7).pick_bound(), 8);
        assert_eq!(Position::new(60_000, 1).pick_bound(), 2 + 346);
        assert_eq!(Position::new(u32::MAX, u32::MAX).pick_bound(), u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(12, 4).to_string(), "(12, 4)");
        assert_eq!(Outcome::Winning.to_string(), "WINNING");
        assert_eq!(Outcome::from_digit(0), Some(Outcome::Losing));
        assert_eq!(Outcome::from_digit(2), None);
        assert_eq!(Outcome::Winning.digit(), 1);
    }
}
