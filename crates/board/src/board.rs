use super::*;
use ttt_core::CELLS;
use ttt_core::Index;

/// Nine cells in row-major order, each empty or marked by a role.
///
/// Cells only ever go from empty to a role. The wire text is exactly nine
/// characters: `X`, `O`, or a space for an empty cell.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Board([Option<Role>; CELLS]);

impl Board {
    /// The cell at `index`, or `None` if empty or out of range.
    pub fn get(&self, index: Index) -> Option<Role> {
        self.0.get(index).copied().flatten()
    }
    /// True if `index` is on the board and unmarked.
    pub fn is_vacant(&self, index: Index) -> bool {
        matches!(self.0.get(index), Some(None))
    }
    /// True once no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }
    /// Empty cell indices in ascending order.
    pub fn vacancies(&self) -> impl Iterator<Item = Index> + '_ {
        (0..CELLS).filter(|i| self.is_vacant(*i))
    }
    /// Mark `index` with `role` if it is empty.
    /// Returns false (board untouched) for an occupied or out-of-range cell.
    pub fn mark(&mut self, index: Index, role: Role) -> bool {
        match self.0.get_mut(index) {
            Some(cell) if cell.is_none() => {
                *cell = Some(role);
                true
            }
            _ => false,
        }
    }
    /// Result of the game from the point of view of `role`, the player who just moved.
    /// A completed line wins even when it also fills the board.
    pub fn evaluate(&self, role: Role) -> Outcome {
        if LINES
            .iter()
            .any(|line| line.iter().all(|i| self.get(*i) == Some(role)))
        {
            Outcome::Win(role)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
    /// Three-row grid with 1-based numbers on empty cells, for terminal play.
    pub fn grid(&self) -> String {
        (0..3)
            .map(|row| {
                (0..3)
                    .map(|col| row * 3 + col)
                    .map(|i| match self.get(i) {
                        Some(role) => role.to_string(),
                        None => (i + 1).to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect::<Vec<_>>()
            .join("\n--+---+--\n")
    }
}

/// wire isomorphism
impl TryFrom<&str> for Board {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.chars().count() != CELLS {
            return Err(format!("board must be {} cells: {:?}", CELLS, s));
        }
        let mut board = Board::default();
        for (i, c) in s.chars().enumerate() {
            match c {
                ' ' => continue,
                c => board.0[i] = Some(Role::try_from(c)?),
            }
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0
            .iter()
            .map(|cell| cell.map(Role::symbol).unwrap_or(' '))
            .try_for_each(|c| write!(f, "{}", c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::try_from(s).expect("valid board")
    }

    #[test]
    fn empty_board_text() {
        assert_eq!(Board::default().to_string(), "         ");
        assert_eq!(board("X O  O  X").to_string(), "X O  O  X");
    }

    #[test]
    fn reject_bad_text() {
        assert!(Board::try_from("XO").is_err());
        assert!(Board::try_from("XXXXXXXXXX").is_err());
        assert!(Board::try_from("    Z    ").is_err());
    }

    #[test]
    fn mark_only_empty_cells() {
        let mut b = Board::default();
        assert!(b.mark(4, Role::X));
        assert!(!b.mark(4, Role::O));
        assert_eq!(b.get(4), Some(Role::X));
        assert!(!b.mark(9, Role::O));
        assert_eq!(b.vacancies().count(), 8);
    }

    #[test]
    fn every_line_wins() {
        for line in LINES {
            for role in Role::all() {
                let mut b = Board::default();
                line.iter().for_each(|i| assert!(b.mark(*i, role)));
                assert_eq!(b.evaluate(role), Outcome::Win(role));
                assert_eq!(b.evaluate(role.opponent()), Outcome::InProgress);
            }
        }
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let b = board("XOXXOOOXX");
        assert!(b.is_full());
        assert_eq!(b.evaluate(Role::X), Outcome::Draw);
        assert_eq!(b.evaluate(Role::O), Outcome::Draw);
    }

    #[test]
    fn partial_board_without_line_is_in_progress() {
        let b = board("XO  X  O ");
        assert_eq!(b.evaluate(Role::X), Outcome::InProgress);
        assert_eq!(b.evaluate(Role::O), Outcome::InProgress);
    }

    #[test]
    fn ninth_move_completing_line_wins() {
        let b = board("XOXOXOOXX");
        assert!(b.is_full());
        assert_eq!(b.evaluate(Role::X), Outcome::Win(Role::X));
    }

    #[test]
    fn grid_numbers_empty_cells() {
        let b = board("X   O    ");
        assert_eq!(b.grid(), "X | 2 | 3\n--+---+--\n4 | O | 6\n--+---+--\n7 | 8 | 9");
    }
}
