use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of aligned discs needed to win.
pub const CONNECT: usize = 4;

/// Step directions scanned for a winning run: right, up, up-right, up-left.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

/// A cell coordinate. Row 0 is the bottom, row 5 is the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub column: usize,
    pub row: usize,
}

impl Placement {
    pub fn new(column: usize, row: usize) -> Self {
        Placement { column, row }
    }
}

/// Occupancy grid holding one player's discs only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerBoard {
    cells: [[bool; COLS]; ROWS],
}

impl PlayerBoard {
    /// Create a new empty board
    pub fn new() -> Self {
        PlayerBoard {
            cells: [[false; COLS]; ROWS],
        }
    }

    /// Whether this player has a disc at (column, row). Out-of-range
    /// coordinates are never occupied.
    pub fn is_occupied(&self, column: usize, row: usize) -> bool {
        column < COLS && row < ROWS && self.cells[row][column]
    }

    /// Mark a cell as occupied.
    ///
    /// Panics if the coordinate is off the board.
    pub fn set(&mut self, column: usize, row: usize) {
        self.cells[row][column] = true;
    }

    #[cfg(test)]
    pub(crate) fn clear(&mut self, column: usize, row: usize) {
        self.cells[row][column] = false;
    }

    /// Number of discs on this board
    pub fn count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// All occupied coordinates, bottom row first.
    pub fn occupied(&self) -> impl Iterator<Item = Placement> + '_ {
        (0..ROWS).flat_map(move |row| {
            (0..COLS)
                .filter(move |&column| self.cells[row][column])
                .map(move |column| Placement::new(column, row))
        })
    }

    /// Whether any cell is set on both boards.
    pub fn overlaps(&self, other: &PlayerBoard) -> Option<Placement> {
        self.occupied().find(|p| other.is_occupied(p.column, p.row))
    }

    /// Whether this board holds four or more aligned discs.
    pub fn check_win(&self) -> bool {
        self.winning_line().is_some()
    }

    /// First run of four aligned discs, scanning every starting cell
    /// bottom-up in all four directions. Longer runs also qualify; the first
    /// four cells of the run are returned.
    pub fn winning_line(&self) -> Option<[Placement; CONNECT]> {
        for row in 0..ROWS {
            for column in 0..COLS {
                if !self.cells[row][column] {
                    continue;
                }
                for &(dc, dr) in &DIRECTIONS {
                    if let Some(line) = self.run_from(column, row, dc, dr) {
                        return Some(line);
                    }
                }
            }
        }
        None
    }

    fn run_from(
        &self,
        column: usize,
        row: usize,
        dc: isize,
        dr: isize,
    ) -> Option<[Placement; CONNECT]> {
        let mut line = [Placement::new(column, row); CONNECT];
        for (step, slot) in line.iter_mut().enumerate() {
            let c = column as isize + dc * step as isize;
            let r = row as isize + dr * step as isize;
            if c < 0 || r < 0 || !self.is_occupied(c as usize, r as usize) {
                return None;
            }
            *slot = Placement::new(c as usize, r as usize);
        }
        Some(line)
    }
}

impl Default for PlayerBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowest row in `column` that neither board occupies, or `None` when the
/// column is full or off the board.
pub fn lowest_free_row(one: &PlayerBoard, two: &PlayerBoard, column: usize) -> Option<usize> {
    if column >= COLS {
        return None;
    }
    (0..ROWS).find(|&row| !one.is_occupied(column, row) && !two.is_occupied(column, row))
}

/// A cell of the merged display board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// Numeric form: 0 empty, 1 player one, 2 player two.
    pub fn value(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::PlayerOne => 1,
            Cell::PlayerTwo => 2,
        }
    }
}

/// Both player boards combined into one grid. Derived on demand, never stored
/// by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedBoard {
    cells: [[Cell; COLS]; ROWS],
}

impl MergedBoard {
    /// Merge two disjoint player boards. Player one wins a (never expected)
    /// overlap.
    pub fn merge(one: &PlayerBoard, two: &PlayerBoard) -> Self {
        debug_assert!(
            one.overlaps(two).is_none(),
            "player boards overlap at {:?}",
            one.overlaps(two)
        );

        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (row, cells_row) in cells.iter_mut().enumerate() {
            for (column, cell) in cells_row.iter_mut().enumerate() {
                *cell = if one.is_occupied(column, row) {
                    Player::One.to_cell()
                } else if two.is_occupied(column, row) {
                    Player::Two.to_cell()
                } else {
                    Cell::Empty
                };
            }
        }
        MergedBoard { cells }
    }

    /// Get the cell at (column, row). Row 0 is the bottom.
    pub fn get(&self, column: usize, row: usize) -> Cell {
        self.cells[row][column]
    }

    /// Numeric value at (column, row): 0, 1 or 2.
    pub fn value(&self, column: usize, row: usize) -> u8 {
        self.get(column, row).value()
    }

    /// Rows from top (row 5) to bottom (row 0), the order they are drawn in.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.cells.iter().rev()
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        column >= COLS || self.cells[ROWS - 1][column] != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|column| self.is_column_full(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, usize)]) -> PlayerBoard {
        let mut board = PlayerBoard::new();
        for &(column, row) in cells {
            board.set(column, row);
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = PlayerBoard::new();
        for row in 0..ROWS {
            for column in 0..COLS {
                assert!(!board.is_occupied(column, row));
            }
        }
        assert!(board.is_empty());
    }

    #[test]
    fn test_out_of_range_is_never_occupied() {
        let board = PlayerBoard::new();
        assert!(!board.is_occupied(COLS, 0));
        assert!(!board.is_occupied(0, ROWS));
    }

    #[test]
    fn test_lowest_free_row_respects_both_boards() {
        let one = board_with(&[(3, 0)]);
        let two = board_with(&[(3, 1)]);
        assert_eq!(lowest_free_row(&one, &two, 3), Some(2));
        assert_eq!(lowest_free_row(&one, &two, 0), Some(0));
        assert_eq!(lowest_free_row(&one, &two, COLS), None);
    }

    #[test]
    fn test_lowest_free_row_full_column() {
        let one = board_with(&[(0, 0), (0, 2), (0, 4)]);
        let two = board_with(&[(0, 1), (0, 3), (0, 5)]);
        assert_eq!(lowest_free_row(&one, &two, 0), None);
    }

    #[test]
    fn test_vertical_win() {
        let board = board_with(&[(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert!(board.check_win());
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_with(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(
            board.winning_line(),
            Some([
                Placement::new(0, 0),
                Placement::new(1, 0),
                Placement::new(2, 0),
                Placement::new(3, 0),
            ])
        );
    }

    #[test]
    fn test_diagonal_up_right_win() {
        let board = board_with(&[(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert!(board.check_win());
    }

    #[test]
    fn test_diagonal_up_left_win() {
        let board = board_with(&[(6, 0), (5, 1), (4, 2), (3, 3)]);
        assert!(board.check_win());
    }

    #[test]
    fn test_win_on_top_edge() {
        let board = board_with(&[(3, 5), (4, 5), (5, 5), (6, 5)]);
        assert!(board.check_win());
    }

    #[test]
    fn test_longer_run_is_a_win() {
        let board = board_with(&[(1, 2), (2, 2), (3, 2), (4, 2), (5, 2)]);
        assert!(board.check_win());
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = board_with(&[(0, 0), (0, 1), (0, 2), (0, 3)]);
        board.clear(0, 3);
        assert!(!board.check_win());
    }

    #[test]
    fn test_no_win_for_broken_line() {
        let board = board_with(&[(0, 0), (1, 0), (3, 0), (4, 0)]);
        assert!(!board.check_win());
    }

    #[test]
    fn test_no_wrap_around_rows() {
        // Last three columns of row 0 plus the first column of row 1 are
        // consecutive in memory but not on the board.
        let board = board_with(&[(4, 0), (5, 0), (6, 0), (0, 1)]);
        assert!(!board.check_win());
    }

    #[test]
    fn test_merged_board_values() {
        let one = board_with(&[(0, 0)]);
        let two = board_with(&[(1, 0)]);
        let merged = MergedBoard::merge(&one, &two);
        assert_eq!(merged.value(0, 0), 1);
        assert_eq!(merged.value(1, 0), 2);
        assert_eq!(merged.value(2, 0), 0);
        assert_eq!(merged.get(0, 1), Cell::Empty);
    }

    #[test]
    fn test_rows_top_down_starts_at_top() {
        let one = board_with(&[(0, ROWS - 1)]);
        let merged = MergedBoard::merge(&one, &PlayerBoard::new());
        let top = merged.rows_top_down().next().unwrap();
        assert_eq!(top[0], Cell::PlayerOne);
    }

    #[test]
    fn test_overlap_detection() {
        let one = board_with(&[(2, 0), (4, 0)]);
        let two = board_with(&[(4, 0)]);
        assert_eq!(one.overlaps(&two), Some(Placement::new(4, 0)));
        assert_eq!(one.overlaps(&PlayerBoard::new()), None);
    }

    #[test]
    fn test_merged_full_board() {
        let mut one = PlayerBoard::new();
        let mut two = PlayerBoard::new();
        for column in 0..COLS {
            for row in 0..ROWS {
                if (column + row) % 2 == 0 {
                    one.set(column, row);
                } else {
                    two.set(column, row);
                }
            }
        }
        let merged = MergedBoard::merge(&one, &two);
        assert!(merged.is_full());
        assert_eq!(one.count() + two.count(), ROWS * COLS);
    }
}
