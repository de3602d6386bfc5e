//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so the core, the
//! command reader and the text renderer can share them freely.
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Depth**: 22 rows (indexed 0-21, row 0 at the top)
//!
//! # Cell Tokens
//!
//! | Token | Cell |
//! |-------|------|
//! | `.` | Empty |
//! | `r` | Red |
//! | `g` | Green |
//! | `b` | Blue |
//! | `o` | Orange |
//! | `c` | Cyan |
//! | `m` | Magenta |
//! | `y` | Yellow |
//!
//! # Examples
//!
//! ```
//! use learntris_types::{Cell, PieceKind, Rotation, GRID_DEPTH, GRID_WIDTH};
//!
//! let piece = PieceKind::from_char('T').unwrap();
//! assert_eq!(piece.color(), Cell::Magenta);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Cell::from_token('x'), Cell::Empty);
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_DEPTH, 22);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: usize = 10;

/// Grid depth in cells (22 rows)
pub const GRID_DEPTH: usize = 22;

/// Points awarded for every cleared row
pub const LINE_CLEAR_SCORE: u32 = 100;


/// State of a single grid cell
///
/// Color identity is only carried for display; game logic only cares whether
/// a cell is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Green,
    Blue,
    Orange,
    Cyan,
    Magenta,
    Yellow,
}

impl Cell {
    /// Parse a cell from its text token
    ///
    /// Anything outside the recognized set (including upper case letters) is
    /// normalized to [`Cell::Empty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use learntris_types::Cell;
    ///
    /// assert_eq!(Cell::from_token('r'), Cell::Red);
    /// assert_eq!(Cell::from_token('.'), Cell::Empty);
    /// assert_eq!(Cell::from_token('R'), Cell::Empty);
    /// ```
    pub fn from_token(token: char) -> Self {
        match token {
            'r' => Cell::Red,
            'g' => Cell::Green,
            'b' => Cell::Blue,
            'o' => Cell::Orange,
            'c' => Cell::Cyan,
            'm' => Cell::Magenta,
            'y' => Cell::Yellow,
            _ => Cell::Empty,
        }
    }

    /// Lower case text token for this cell
    pub fn as_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'r',
            Cell::Green => 'g',
            Cell::Blue => 'b',
            Cell::Orange => 'o',
            Cell::Cyan => 'c',
            Cell::Magenta => 'm',
            Cell::Yellow => 'y',
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }
}

/// The seven piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, 4-wide bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta
/// - **S**: Green
/// - **Z**: Red (mirror of S)
/// - **J**: Blue
/// - **L**: Orange (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from its upper case command letter
    ///
    /// # Examples
    ///
    /// ```
    /// use learntris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('I'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('i'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }

    /// Settled color of this piece once it locks into the grid
    pub fn color(&self) -> Cell {
        match self {
            PieceKind::I => Cell::Cyan,
            PieceKind::O => Cell::Yellow,
            PieceKind::T => Cell::Magenta,
            PieceKind::S => Cell::Green,
            PieceKind::Z => Cell::Red,
            PieceKind::J => Cell::Blue,
            PieceKind::L => Cell::Orange,
        }
    }
}

/// Rotation states, cyclic mod 4
///
/// - **North**: Spawn orientation (index 0)
/// - **East**: Rotated 90° clockwise (index 1)
/// - **South**: Rotated 180° (index 2)
/// - **West**: Rotated 270° clockwise (index 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use learntris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use learntris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Rotation index in `0..4`
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build a rotation from any index, normalized mod 4
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }
}

/// Direction of a one-cell nudge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Anchor offset `(dx, dy)` for one step in this direction
    pub fn offset(&self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Commands accepted by the dispatcher
///
/// Each command maps to exactly one core operation or one display routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stop reading commands
    Quit,
    /// Print the settled grid
    PrintGrid,
    /// Print the grid with the active piece overlaid
    PrintComposite,
    /// Read a full grid from the input
    LoadGrid,
    /// Empty the grid
    ClearGrid,
    /// Clear full rows and update the counters
    Step,
    /// Print the active piece mask
    PrintActive,
    /// Spawn a piece of the given kind
    Spawn(PieceKind),
    /// Rotate the active piece clockwise
    RotateRight,
    /// Rotate the active piece counter-clockwise
    RotateLeft,
    /// Move the active piece one cell
    Nudge(Direction),
    /// Drop the active piece and lock it
    HardDrop,
    /// Print an empty line
    Newline,
    /// Print the score
    QueryScore,
    /// Print the cleared line count
    QueryLines,
}

impl Command {
    /// Parse a single-character command
    ///
    /// Two-character queries (`?s`, `?n`) are assembled by the reader and are
    /// not handled here.
    ///
    /// # Examples
    ///
    /// ```
    /// use learntris_types::{Command, Direction, PieceKind};
    ///
    /// assert_eq!(Command::from_char('p'), Some(Command::PrintGrid));
    /// assert_eq!(Command::from_char('<'), Some(Command::Nudge(Direction::Left)));
    /// assert_eq!(Command::from_char('O'), Some(Command::Spawn(PieceKind::O)));
    /// assert_eq!(Command::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(kind) = PieceKind::from_char(c) {
            return Some(Command::Spawn(kind));
        }
        match c {
            'q' => Some(Command::Quit),
            'p' => Some(Command::PrintGrid),
            'P' => Some(Command::PrintComposite),
            'g' => Some(Command::LoadGrid),
            'c' => Some(Command::ClearGrid),
            's' => Some(Command::Step),
            't' => Some(Command::PrintActive),
            ')' => Some(Command::RotateRight),
            '(' => Some(Command::RotateLeft),
            '<' => Some(Command::Nudge(Direction::Left)),
            '>' => Some(Command::Nudge(Direction::Right)),
            'v' => Some(Command::Nudge(Direction::Down)),
            'V' => Some(Command::HardDrop),
            ';' => Some(Command::Newline),
            _ => None,
        }
    }

    /// Parse the second character of a `?` query
    pub fn from_query(c: char) -> Option<Self> {
        match c {
            's' => Some(Command::QueryScore),
            'n' => Some(Command::QueryLines),
            _ => None,
        }
    }
}
