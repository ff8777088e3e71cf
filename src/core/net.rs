//! Text dump of a facelet state as the unfolded cube net.
//!
//! ```text
//! 32 33 34
//! 35  B 36
//! 37 38 39
//!  0  1  2  8  9 10 16 17 18 24 25 26
//!  3  W  4 11  R 12 19  Y 20 27  O 28
//!  5  6  7 13 14 15 21 22 23 29 30 31
//! 40 41 42
//! 43  G 44
//! 45 46 47
//! ```
//!
//! Each cell shows the facelet currently at that position; centers show
//! their face letter.

use super::face::Face;
use super::position::Position;
use super::state::FaceletState;

/// A cell of the net: a movable position or a fixed center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetCell {
    Facelet(Position),
    Center(Face),
}

const fn p(index: u8) -> NetCell {
    NetCell::Facelet(Position(index))
}

const fn c(face: Face) -> NetCell {
    NetCell::Center(face)
}

/// The 3x3 grid of a face in the net, row-major.
pub(crate) const fn face_grid(face: Face) -> [NetCell; 9] {
    let base = match face {
        Face::White => 0,
        Face::Red => 8,
        Face::Yellow => 16,
        Face::Orange => 24,
        Face::Blue => 32,
        Face::Green => 40,
    };
    [
        p(base),
        p(base + 1),
        p(base + 2),
        p(base + 3),
        c(face),
        p(base + 4),
        p(base + 5),
        p(base + 6),
        p(base + 7),
    ]
}

/// Row layout of the net: which faces appear side by side in each band.
const BANDS: [&[Face]; 3] = [
    &[Face::Blue],
    &[Face::White, Face::Red, Face::Yellow, Face::Orange],
    &[Face::Green],
];

/// Borrowing view that renders a state as the net.
#[derive(Clone, Copy, Debug)]
pub struct NetView<'a> {
    state: &'a FaceletState,
}

impl<'a> NetView<'a> {
    #[must_use]
    pub fn new(state: &'a FaceletState) -> Self {
        Self { state }
    }

    /// The 9 rows of rendered cells.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(9);
        for band in BANDS {
            for row in 0..3 {
                let cells = band
                    .iter()
                    .flat_map(|&face| face_grid(face)[row * 3..row * 3 + 3].to_vec())
                    .map(|cell| self.render_cell(cell))
                    .collect();
                rows.push(cells);
            }
        }
        rows
    }

    fn render_cell(&self, cell: NetCell) -> String {
        match cell {
            NetCell::Facelet(pos) => format!("{:>2}", self.state.facelet_at(pos).0),
            NetCell::Center(face) => format!("{:>2}", face.letter()),
        }
    }
}

impl std::fmt::Display for NetView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

impl std::fmt::Display for FaceletState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&NetView::new(self), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED_NET: &str = "\
32 33 34
35  B 36
37 38 39
 0  1  2  8  9 10 16 17 18 24 25 26
 3  W  4 11  R 12 19  Y 20 27  O 28
 5  6  7 13 14 15 21 22 23 29 30 31
40 41 42
43  G 44
45 46 47
";

    #[test]
    fn test_solved_net() {
        assert_eq!(FaceletState::new().to_string(), SOLVED_NET);
    }

    #[test]
    fn test_rows_shape() {
        let state = FaceletState::new();
        let rows = NetView::new(&state).rows();
        let widths: Vec<_> = rows.iter().map(Vec::len).collect();
        assert_eq!(widths, vec![3, 3, 3, 12, 12, 12, 3, 3, 3]);
    }

    #[test]
    fn test_face_grid_centers() {
        for face in Face::ALL {
            let grid = face_grid(face);
            assert_eq!(grid[4], NetCell::Center(face));
            for (i, cell) in grid.iter().enumerate().filter(|&(i, _)| i != 4) {
                match cell {
                    NetCell::Facelet(pos) => assert_eq!(pos.home_face(), face, "cell {}", i),
                    NetCell::Center(_) => panic!("unexpected center at {}", i),
                }
            }
        }
    }
}
