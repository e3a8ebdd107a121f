use super::board::Cell;

/// The piece a player drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Circle,
    At,
}

impl Token {
    /// Convert token to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Token::Circle => Cell::Circle,
            Token::At => Cell::At,
        }
    }

    pub fn symbol(self) -> char {
        self.to_cell().symbol()
    }
}

/// A named seat at the table and the token it plays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub token: Token,
}

impl Player {
    pub fn new(name: impl Into<String>, token: Token) -> Self {
        Player {
            name: name.into(),
            token,
        }
    }

    /// The two seats in turn order, with the canonical tokens.
    pub fn pair(first: impl Into<String>, second: impl Into<String>) -> [Player; 2] {
        [
            Player::new(first, Token::Circle),
            Player::new(second, Token::At),
        ]
    }

    /// "Player 1" playing `O` followed by "Player 2" playing `@`.
    pub fn canonical() -> [Player; 2] {
        Player::pair("Player 1", "Player 2")
    }
}
