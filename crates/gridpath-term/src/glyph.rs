use std::fmt;
use std::str::FromStr;

use gridpath_core::Point;
use gridpath_search::ParseError;

/// Symbolic characters used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Space,
    Start,
    Goal,
    Block,
    Slash,
    Backslash,
    Less,
    Greater,
    Caret,
    LowercaseV,
    Vertical,
    Horizontal,
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
    VerticalLeft,
    VerticalRight,
    HorizontalUp,
    HorizontalDown,
    Cross,
    /// A decimal digit, `0..=9`.
    Digit(u8),
}

/// Character set for box drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Plain ASCII, for terminals without box-drawing support.
    Ascii,
}

impl Charset {
    pub fn glyph(self, g: Glyph) -> char {
        match g {
            Glyph::Space => ' ',
            Glyph::Start => 'A',
            Glyph::Goal => 'B',
            Glyph::Slash => '/',
            Glyph::Backslash => '\\',
            Glyph::Less => '<',
            Glyph::Greater => '>',
            Glyph::Caret => '^',
            Glyph::LowercaseV => 'v',
            Glyph::Digit(d) => char::from(b'0' + d.min(9)),
            _ => match self {
                Charset::Unicode => Self::unicode_box(g),
                Charset::Ascii => Self::ascii_box(g),
            },
        }
    }

    fn unicode_box(g: Glyph) -> char {
        match g {
            Glyph::Block => '█',
            Glyph::Vertical => '│',
            Glyph::Horizontal => '─',
            Glyph::UpperLeft => '┌',
            Glyph::UpperRight => '┐',
            Glyph::LowerLeft => '└',
            Glyph::LowerRight => '┘',
            Glyph::VerticalLeft => '┤',
            Glyph::VerticalRight => '├',
            Glyph::HorizontalUp => '┴',
            Glyph::HorizontalDown => '┬',
            Glyph::Cross => '┼',
            _ => ' ',
        }
    }

    fn ascii_box(g: Glyph) -> char {
        match g {
            Glyph::Block => '#',
            Glyph::Vertical => '|',
            Glyph::Horizontal => '-',
            Glyph::UpperLeft
            | Glyph::UpperRight
            | Glyph::LowerLeft
            | Glyph::LowerRight
            | Glyph::VerticalLeft
            | Glyph::VerticalRight
            | Glyph::HorizontalUp
            | Glyph::HorizontalDown
            | Glyph::Cross => '+',
            _ => ' ',
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Charset::Unicode => f.write_str("unicode"),
            Charset::Ascii => f.write_str("ascii"),
        }
    }
}

impl FromStr for Charset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" | "utf8" | "utf-8" => Ok(Charset::Unicode),
            "ascii" => Ok(Charset::Ascii),
            _ => Err(ParseError::new("charset", s)),
        }
    }
}

/// Direction of a neighbouring cell, numbered like a phone keypad:
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum RelPos {
    NorthWest = 1,
    North,
    NorthEast,
    West,
    Same,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl RelPos {
    pub(crate) fn of(delta: Point) -> Self {
        let d = delta.signum();
        match (d.x, d.y) {
            (-1, -1) => RelPos::NorthWest,
            (0, -1) => RelPos::North,
            (1, -1) => RelPos::NorthEast,
            (-1, 0) => RelPos::West,
            (1, 0) => RelPos::East,
            (-1, 1) => RelPos::SouthWest,
            (0, 1) => RelPos::South,
            (1, 1) => RelPos::SouthEast,
            _ => RelPos::Same,
        }
    }
}

/// Glyph at the centre of a path cell entered from `a` and left towards
/// `b` (order does not matter).
pub(crate) fn path_center(a: RelPos, b: RelPos) -> Glyph {
    use RelPos::*;

    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    match (lo, hi) {
        (NorthWest, NorthWest) | (NorthWest, SouthEast) | (SouthEast, SouthEast) => {
            Glyph::Backslash
        }
        (NorthEast, NorthEast) | (NorthEast, SouthWest) | (SouthWest, SouthWest) => Glyph::Slash,
        (NorthWest, North) | (NorthWest, NorthEast) | (North, NorthEast) => Glyph::LowercaseV,
        (SouthWest, South) | (SouthWest, SouthEast) | (South, SouthEast) => Glyph::Caret,
        (NorthWest, West) | (NorthWest, SouthWest) | (West, SouthWest) => Glyph::Less,
        (NorthEast, East) | (NorthEast, SouthEast) | (East, SouthEast) => Glyph::Greater,
        (NorthWest, East)
        | (NorthEast, West)
        | (West, West)
        | (West, East)
        | (West, SouthEast)
        | (East, East)
        | (East, SouthWest) => Glyph::Horizontal,
        (NorthWest, South)
        | (North, North)
        | (North, SouthWest)
        | (North, South)
        | (North, SouthEast)
        | (NorthEast, South)
        | (South, South) => Glyph::Vertical,
        (North, West) => Glyph::LowerRight,
        (North, East) => Glyph::LowerLeft,
        (West, South) => Glyph::UpperRight,
        (East, South) => Glyph::UpperLeft,
        _ => Glyph::Space,
    }
}
