/// The symbol a participant marks cells with.
///
/// Assigned once per game by a fair coin flip at session start.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    X,
    O,
}

impl Role {
    /// Both roles in assignment order.
    pub const fn all() -> [Role; 2] {
        [Role::X, Role::O]
    }
    /// The role held by the other participant.
    pub fn opponent(self) -> Self {
        match self {
            Role::X => Role::O,
            Role::O => Role::X,
        }
    }
    /// Single-character wire symbol.
    pub fn symbol(self) -> char {
        match self {
            Role::X => 'X',
            Role::O => 'O',
        }
    }
}

impl rand::distr::Distribution<Role> for rand::distr::StandardUniform {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Role {
        match rng.random_bool(0.5) {
            true => Role::X,
            false => Role::O,
        }
    }
}

/// char isomorphism
impl TryFrom<char> for Role {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'X' => Ok(Role::X),
            'O' => Ok(Role::O),
            _ => Err(format!("invalid role char: {:?}", c)),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Role {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "X" => Ok(Role::X),
            "O" => Ok(Role::O),
            _ => Err(format!("invalid role str: {:?}", s)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_involution() {
        for role in Role::all() {
            assert_eq!(role.opponent().opponent(), role);
            assert_ne!(role.opponent(), role);
        }
    }

    #[test]
    fn bijective_str() {
        for role in Role::all() {
            assert_eq!(Role::try_from(role.to_string().as_str()), Ok(role));
        }
        assert!(Role::try_from("x").is_err());
        assert!(Role::try_from("").is_err());
    }
}
