//! Pure board transforms.
//!
//! Every direction is reduced to a leftward slide: [`transpose`] turns columns
//! into rows and [`reverse_rows`] mirrors the board, so [`compact_row_left`]
//! is the only place where tiles actually move or merge.
use crate::action::Direction;
use crate::config::GameConfig;
use crate::state::{Grid, Row};

const N: usize = GameConfig::GRID_SIZE;

/// Slides one row to the left, merging equal neighbours.
///
/// Zeros are skipped. A value merges into the previous survivor when they are
/// equal and that survivor was not itself produced by a merge in this pass,
/// so `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`, not `[8, 0, 0, 0]`.
pub fn compact_row_left(row: Row) -> Row {
    let mut out = [0; N];
    let mut len = 0;
    // Value the next tile may merge with; 0 right after a merge.
    let mut last = 0;

    for value in row {
        if value == 0 {
            continue;
        }
        if value == last {
            out[len - 1] *= 2;
            last = 0;
        } else {
            out[len] = value;
            len += 1;
            last = value;
        }
    }

    out
}

/// Standard matrix transpose.
pub fn transpose(grid: &Grid) -> Grid {
    let rows = grid.rows();
    let mut out = [[0; N]; N];
    for (r, row) in rows.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            out[c][r] = value;
        }
    }
    Grid::from_rows_unchecked(out)
}

/// Reverses the order of cells within every row.
pub fn reverse_rows(grid: &Grid) -> Grid {
    let mut rows = *grid.rows();
    for row in &mut rows {
        row.reverse();
    }
    Grid::from_rows_unchecked(rows)
}

/// Applies [`compact_row_left`] to every row.
pub fn compact_left(grid: &Grid) -> Grid {
    Grid::from_rows_unchecked(grid.rows().map(compact_row_left))
}

/// Returns the board after sliding every tile towards `direction`.
///
/// No tile is spawned here; see [`spawn_tile`](super::spawn_tile).
pub fn slide(grid: &Grid, direction: Direction) -> Grid {
    match direction {
        Direction::Left => compact_left(grid),
        Direction::Right => reverse_rows(&compact_left(&reverse_rows(grid))),
        Direction::Up => transpose(&compact_left(&transpose(grid))),
        Direction::Down => transpose(&reverse_rows(&compact_left(&reverse_rows(
            &transpose(grid),
        )))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: [Row; 4]) -> Grid {
        Grid::from_rows(rows).expect("test grid must be valid")
    }

    #[test]
    fn compact_merges_leading_pair() {
        assert_eq!(compact_row_left([2, 2, 4, 0]), [4, 4, 0, 0]);
    }

    #[test]
    fn compact_skips_gaps_before_merging() {
        assert_eq!(compact_row_left([2, 0, 2, 2]), [4, 2, 0, 0]);
    }

    #[test]
    fn compact_leaves_packed_single_tile() {
        assert_eq!(compact_row_left([8, 0, 0, 0]), [8, 0, 0, 0]);
    }

    #[test]
    fn compact_all_zero_row_is_unchanged() {
        assert_eq!(compact_row_left([0, 0, 0, 0]), [0, 0, 0, 0]);
    }

    #[test]
    fn compact_three_equal_merges_first_pair_only() {
        assert_eq!(compact_row_left([2, 2, 2, 0]), [4, 2, 0, 0]);
    }

    #[test]
    fn compact_four_equal_makes_two_merges() {
        assert_eq!(compact_row_left([4, 4, 4, 4]), [8, 8, 0, 0]);
    }

    #[test]
    fn compact_merged_tile_does_not_merge_again() {
        // 2+2 produces 4; the following 4 must stay separate.
        assert_eq!(compact_row_left([2, 2, 4, 4]), [4, 8, 0, 0]);
        assert_eq!(compact_row_left([4, 2, 2, 0]), [4, 4, 0, 0]);
    }

    #[test]
    fn compact_without_equal_neighbours_only_packs() {
        assert_eq!(compact_row_left([0, 2, 0, 4]), [2, 4, 0, 0]);
        assert_eq!(compact_row_left([2, 4, 2, 4]), [2, 4, 2, 4]);
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let g = grid([[2, 4, 0, 0], [0, 8, 0, 0], [0, 0, 16, 0], [0, 0, 0, 32]]);
        let t = transpose(&g);
        assert_eq!(t.rows()[0], [2, 0, 0, 0]);
        assert_eq!(t.rows()[1], [4, 8, 0, 0]);
        assert_eq!(t.rows()[3], [0, 0, 0, 32]);
    }

    #[test]
    fn reverse_rows_mirrors_each_row() {
        let g = grid([[2, 4, 8, 16], [0; 4], [0, 0, 0, 2], [0; 4]]);
        let r = reverse_rows(&g);
        assert_eq!(r.rows()[0], [16, 8, 4, 2]);
        assert_eq!(r.rows()[2], [2, 0, 0, 0]);
    }

    #[test]
    fn slide_left_merges_top_row() {
        let g = grid([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert_eq!(
            slide(&g, Direction::Left),
            grid([[4, 0, 0, 0], [0; 4], [0; 4], [0; 4]])
        );
    }

    #[test]
    fn slide_right_packs_towards_last_column() {
        let g = grid([[2, 2, 2, 0], [0; 4], [4, 0, 0, 4], [0; 4]]);
        assert_eq!(
            slide(&g, Direction::Right),
            grid([[0, 0, 2, 4], [0; 4], [0, 0, 0, 8], [0; 4]])
        );
    }

    #[test]
    fn slide_up_packs_columns_towards_top() {
        let g = grid([[0, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 4], [4, 0, 0, 0]]);
        assert_eq!(
            slide(&g, Direction::Up),
            grid([[4, 0, 0, 4], [4, 0, 0, 0], [0; 4], [0; 4]])
        );
    }

    #[test]
    fn slide_down_packs_columns_towards_bottom() {
        let g = grid([[2, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 8], [0; 4]]);
        assert_eq!(
            slide(&g, Direction::Down),
            grid([[0; 4], [0; 4], [2, 0, 0, 0], [4, 0, 0, 8]])
        );
    }

    #[test]
    fn slide_on_empty_board_is_noop() {
        for direction in Direction::ALL {
            assert_eq!(slide(&Grid::EMPTY, direction), Grid::EMPTY);
        }
    }
}
