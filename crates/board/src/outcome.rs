use super::*;
use ttt_core::Index;

/// The eight winning triples, 0-based.
/// Rows, then columns, then diagonals.
pub const LINES: [[Index; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Game result after a move. Terminal once not `InProgress`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Role),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
    pub fn winner(&self) -> Option<Role> {
        match self {
            Self::Win(role) => Some(*role),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Win(role) => write!(f, "{} wins", role),
            Self::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_1_based_combos() {
        let combos = ["123", "456", "789", "147", "258", "369", "159", "357"];
        for (line, combo) in LINES.iter().zip(combos) {
            let text = line.iter().map(|i| (i + 1).to_string()).collect::<String>();
            assert_eq!(text, combo);
        }
    }

    #[test]
    fn terminality() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert!(Outcome::Win(Role::O).is_terminal());
        assert_eq!(Outcome::Win(Role::O).winner(), Some(Role::O));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
