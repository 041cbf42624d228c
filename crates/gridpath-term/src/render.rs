use gridpath_core::Point;
use gridpath_search::SearchAlgorithm;

use crate::glyph::{Charset, Glyph, RelPos, path_center};

/// Characters per cell side. Odd, so that every cell has a centre.
pub const CELL: i32 = 3;

const PITCH: i32 = CELL + 1;
const HALF: i32 = CELL / 2;

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub charset: Charset,
    /// Print the name, counters and outcome above the board.
    pub header: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            charset: Charset::default(),
            header: true,
        }
    }
}

impl RenderOptions {
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

/// Render the current state of `search` as text.
///
/// Each cell takes `CELL`×`CELL` characters inside a box grid. Obstacles are
/// filled, the start and goal are marked `A` and `B`. Once a solution exists
/// the path is drawn through every intermediate cell; before that, each cell
/// shows its two display values as three-digit numbers (top and bottom row).
pub fn render(search: &dyn SearchAlgorithm, opts: &RenderOptions) -> String {
    let mut out = String::new();
    if opts.header {
        out.push_str(&header(search));
    }

    let size = search.size();
    let extent = Point::new(size.x.max(0) * PITCH + 1, size.y.max(0) * PITCH + 1);
    for y in 0..extent.y {
        for x in 0..extent.x {
            let g = glyph_at(search, extent, Point::new(x, y));
            out.push(opts.charset.glyph(g));
        }
        out.push('\n');
    }
    out
}

fn header(search: &dyn SearchAlgorithm) -> String {
    let outcome = if search.solution().is_empty() {
        "No solution:".to_owned()
    } else {
        format!(
            "Solution (distance: {}):",
            format_distance(search.solution_distance())
        )
    };
    format!(
        "Algorithm: {}\nNodes opened: {} - Nodes closed: {}\n{outcome}\n",
        search.name(),
        search.nodes_opened(),
        search.nodes_closed()
    )
}

fn glyph_at(search: &dyn SearchAlgorithm, extent: Point, at: Point) -> Glyph {
    if let Some(g) = border(at, extent) {
        return g;
    }
    let cell = Point::new(at.x / PITCH, at.y / PITCH);
    let local = Point::new(at.x % PITCH - 1, at.y % PITCH - 1);
    let center = local == Point::new(HALF, HALF);

    if search.is_obstacle(cell) {
        return Glyph::Block;
    }
    if center && cell == search.start() {
        return Glyph::Start;
    }
    if center && cell == search.goal() {
        return Glyph::Goal;
    }

    let solution = search.solution();
    if solution.is_empty() {
        let (v1, v2) = search.display_values(cell);
        value_glyph(v1, v2, local)
    } else {
        path_glyph(solution, cell, local)
    }
}

fn border(at: Point, extent: Point) -> Option<Glyph> {
    let inner_col = at.x % PITCH != 0;
    let inner_row = at.y % PITCH != 0;
    let (left, right) = (at.x == 0, at.x == extent.x - 1);
    let (top, bottom) = (at.y == 0, at.y == extent.y - 1);

    let g = if top && left {
        Glyph::UpperLeft
    } else if top && right {
        Glyph::UpperRight
    } else if bottom && left {
        Glyph::LowerLeft
    } else if bottom && right {
        Glyph::LowerRight
    } else if top || bottom {
        match (inner_col, top) {
            (true, _) => Glyph::Horizontal,
            (false, true) => Glyph::HorizontalDown,
            (false, false) => Glyph::HorizontalUp,
        }
    } else if left || right {
        match (inner_row, left) {
            (true, _) => Glyph::Vertical,
            (false, true) => Glyph::VerticalRight,
            (false, false) => Glyph::VerticalLeft,
        }
    } else {
        match (inner_col, inner_row) {
            (true, false) => Glyph::Horizontal,
            (false, true) => Glyph::Vertical,
            (false, false) => Glyph::Cross,
            (true, true) => return None,
        }
    };
    Some(g)
}

/// Path segment at `local` inside `cell`, if `cell` is an intermediate
/// solution cell.
fn path_glyph(solution: &[Point], cell: Point, local: Point) -> Glyph {
    let Some(i) = solution.iter().position(|&p| p == cell) else {
        return Glyph::Space;
    };
    if i == 0 || i + 1 >= solution.len() {
        return Glyph::Space;
    }
    // solution runs goal first, so i + 1 is towards the start
    let before = RelPos::of(solution[i + 1] - cell);
    let after = RelPos::of(solution[i - 1] - cell);
    let has = |r: RelPos| before == r || after == r;

    let (cx, cy) = (local.x, local.y);
    let central_col = cx == HALF;
    let central_row = cy == HALF;
    let main_diag = cx == cy;
    let anti_diag = cx == CELL - 1 - cy;

    if (has(RelPos::NorthWest) && cy < HALF && main_diag)
        || (has(RelPos::SouthEast) && cy > HALF && main_diag)
    {
        Glyph::Backslash
    } else if (has(RelPos::North) && cy < HALF && central_col)
        || (has(RelPos::South) && cy > HALF && central_col)
    {
        Glyph::Vertical
    } else if (has(RelPos::NorthEast) && cy < HALF && anti_diag)
        || (has(RelPos::SouthWest) && cy > HALF && anti_diag)
    {
        Glyph::Slash
    } else if (has(RelPos::East) && cx > HALF && central_row)
        || (has(RelPos::West) && cx < HALF && central_row)
    {
        Glyph::Horizontal
    } else if central_col && central_row {
        path_center(before, after)
    } else {
        Glyph::Space
    }
}

fn value_glyph(v1: f64, v2: f64, local: Point) -> Glyph {
    if v1 == 0.0 && v2 == 0.0 {
        return Glyph::Space;
    }
    if local.y == 0 && v1 <= 999.0 {
        digit(v1, local.x)
    } else if local.y == CELL - 1 && v2 > 0.0 {
        digit(v2, local.x)
    } else {
        Glyph::Space
    }
}

/// Digit of `v` (truncated, zero-padded to `CELL` digits) in column `col`.
fn digit(v: f64, col: i32) -> Glyph {
    let v = v.max(0.0) as u64;
    let units = 10u64.pow((CELL - 1 - col) as u32);
    Glyph::Digit((v / units % 10) as u8)
}

/// Distance with at most three decimals and no trailing zeros.
fn format_distance(d: f64) -> String {
    let s = format!("{d:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_owned()
}
