mod cell;
mod window;

pub use self::cell::Cell;
pub use self::window::GridWindow;
use crate::pos::{NEIGHBOR_OFFSETS, Pos2};
use rayon::prelude::*;

/// A fixed-size grid of cells with a clipped (non-toroidal) boundary.
///
/// Dimensions are fixed at construction. Cells are stored row-major in a
/// flat arena; every cell's position matches its index.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-dead grid. Degenerate dimensions are clamped to 1.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            cells: Self::dead_cells(rows, cols),
        }
    }

    fn dead_cells(rows: i32, cols: i32) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(rows as usize * cols as usize);
        for y in 0..rows {
            for x in 0..cols {
                cells.push(Cell::new(Pos2 { x, y }));
            }
        }
        cells
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[inline]
    fn index_of(&self, pos: Pos2) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.cols || pos.y >= self.rows {
            return None;
        }
        Some((pos.y * self.cols + pos.x) as usize)
    }

    /// The sole boundary policy: out-of-range positions are `None`, never a
    /// panic. Border cells simply have fewer than 8 neighbors.
    #[inline]
    pub fn cell_at(&self, pos: Pos2) -> Option<&Cell> {
        self.index_of(pos).map(|idx| &self.cells[idx])
    }

    #[inline]
    pub fn cell_at_mut(&mut self, pos: Pos2) -> Option<&mut Cell> {
        self.index_of(pos).map(|idx| &mut self.cells[idx])
    }

    /// The in-bounds subset of the 8 compass-adjacent cells, in the fixed
    /// N, NE, E, SE, S, SW, W, NW order. Interior positions yield 8, edges
    /// 5, corners 3.
    pub fn neighbors_of(&self, pos: Pos2) -> impl Iterator<Item = &Cell> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&offset| self.cell_at(pos + offset))
    }

    pub fn living_neighbor_count(&self, pos: Pos2) -> u8 {
        self.neighbors_of(pos).filter(|cell| cell.is_alive()).count() as u8
    }

    /// Visits every cell in row-major order.
    pub fn for_each_cell<F: FnMut(&Cell)>(&self, mut visit: F) {
        for cell in &self.cells {
            visit(cell);
        }
    }

    /// Advances one generation as two strictly separated passes: every cell
    /// stages its next state from the current generation, then every cell
    /// commits. No cell ever observes another cell's committed next state
    /// during the staging pass.
    pub fn advance_generation(&mut self) {
        for idx in 0..self.cells.len() {
            let count = self.living_neighbor_count(self.cells[idx].pos());
            self.cells[idx].compute_next(count);
        }
        for cell in &mut self.cells {
            cell.commit();
        }
    }

    /// Same semantics as [`Grid::advance_generation`] with the neighbor
    /// counting done in parallel. The `collect` is the barrier: no commit
    /// starts until every count has been taken from the current generation.
    pub fn advance_generation_parallel(&mut self) {
        let counts: Vec<u8> = self
            .cells
            .par_iter()
            .map(|cell| self.living_neighbor_count(cell.pos()))
            .collect();

        for (cell, count) in self.cells.iter_mut().zip(counts) {
            cell.compute_next(count);
        }
        for cell in &mut self.cells {
            cell.commit();
        }
    }

    /// Replaces the entire cell array with fresh dead cells.
    pub fn reset(&mut self) {
        self.cells = Self::dead_cells(self.rows, self.cols);
    }

    /// Overwrites every cell with an independent Bernoulli trial. This is a
    /// direct edit, not a simulated generation. The probability is clamped
    /// to [0.0, 1.0]; 0.0 and 1.0 are deterministic.
    pub fn randomize(&mut self, probability: f64) {
        self.randomize_with(&mut rand::rng(), probability);
    }

    pub fn randomize_with<R: rand::Rng + ?Sized>(&mut self, rng: &mut R, probability: f64) {
        let probability = probability.clamp(0.0, 1.0);
        for cell in &mut self.cells {
            cell.set_alive(rng.random_bool(probability));
        }
    }

    /// Direct edit; out-of-range positions are ignored.
    pub fn set_alive(&mut self, pos: Pos2, alive: bool) {
        if let Some(cell) = self.cell_at_mut(pos) {
            cell.set_alive(alive);
        }
    }

    /// Flips the cell under a pointer edit; out-of-range positions are
    /// ignored.
    pub fn toggle(&mut self, pos: Pos2) {
        if let Some(cell) = self.cell_at_mut(pos) {
            cell.set_alive(!cell.is_alive());
        }
    }

    #[inline]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn window(&self, top_left: Pos2, bottom_right: Pos2) -> GridWindow<'_> {
        GridWindow::new(self, top_left, bottom_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> Pos2 {
        Pos2 { x, y }
    }

    fn grid_with_alive(rows: i32, cols: i32, alive: &[Pos2]) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for &p in alive {
            grid.set_alive(p, true);
        }
        grid
    }

    fn live_positions(grid: &Grid) -> Vec<Pos2> {
        let mut live = Vec::new();
        grid.for_each_cell(|cell| {
            if cell.is_alive() {
                live.push(cell.pos());
            }
        });
        live
    }

    #[test]
    fn neighbor_count_depends_on_position_class() {
        let grid = Grid::new(4, 5);

        for y in 0..grid.rows() {
            for x in 0..grid.cols() {
                let on_row_edge = y == 0 || y == grid.rows() - 1;
                let on_col_edge = x == 0 || x == grid.cols() - 1;
                let expected = match (on_row_edge, on_col_edge) {
                    (true, true) => 3,
                    (false, false) => 8,
                    _ => 5,
                };
                assert_eq!(
                    grid.neighbors_of(pos(x, y)).count(),
                    expected,
                    "neighbors of ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn neighbors_come_in_fixed_compass_order() {
        let grid = Grid::new(3, 3);

        let order = grid
            .neighbors_of(pos(1, 1))
            .map(Cell::pos)
            .collect::<Vec<_>>();
        let expected = vec![
            pos(1, 0),
            pos(2, 0),
            pos(2, 1),
            pos(2, 2),
            pos(1, 2),
            pos(0, 2),
            pos(0, 1),
            pos(0, 0),
        ];
        assert_eq!(order, expected);
    }

    #[test]
    fn out_of_range_lookup_is_absent() {
        let grid = Grid::new(3, 3);

        for p in [pos(-1, 0), pos(0, -1), pos(3, 0), pos(0, 3), pos(-2, -2)] {
            assert!(grid.cell_at(p).is_none());
        }
    }

    #[test]
    fn neighbors_never_include_out_of_range_positions() {
        let grid = Grid::new(3, 4);

        for y in 0..grid.rows() {
            for x in 0..grid.cols() {
                for neighbor in grid.neighbors_of(pos(x, y)) {
                    assert!(grid.cell_at(neighbor.pos()).is_some());
                }
            }
        }
    }

    #[test]
    fn for_each_cell_visits_in_row_major_order() {
        let grid = Grid::new(2, 3);

        let mut visited = Vec::new();
        grid.for_each_cell(|cell| visited.push(cell.pos()));

        let expected = vec![
            pos(0, 0),
            pos(1, 0),
            pos(2, 0),
            pos(0, 1),
            pos(1, 1),
            pos(2, 1),
        ];
        assert_eq!(visited, expected);
    }

    #[test]
    fn degenerate_dimensions_are_clamped() {
        let grid = Grid::new(0, -3);

        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.cols(), 1);
        assert!(grid.cell_at(Pos2::zero()).is_some());
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = vec![pos(1, 2), pos(2, 2), pos(3, 2)];
        let vertical = vec![pos(2, 1), pos(2, 2), pos(2, 3)];
        let mut grid = grid_with_alive(5, 5, &horizontal);

        grid.advance_generation();
        assert_eq!(live_positions(&grid), vertical);

        grid.advance_generation();
        assert_eq!(live_positions(&grid), horizontal);
    }

    #[test]
    fn block_is_a_still_life() {
        let block = vec![pos(1, 1), pos(2, 1), pos(1, 2), pos(2, 2)];
        let mut grid = grid_with_alive(4, 4, &block);

        for _ in 0..5 {
            grid.advance_generation();
            assert_eq!(live_positions(&grid), block);
        }
    }

    #[test]
    fn isolated_cell_dies() {
        let mut grid = grid_with_alive(5, 5, &[pos(2, 2)]);

        grid.advance_generation();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn parallel_advance_matches_serial() {
        let mut serial = Grid::new(16, 16);
        for y in 0..16 {
            for x in 0..16 {
                serial.set_alive(pos(x, y), (x + y) % 3 == 0);
            }
        }
        let mut parallel = serial.clone();

        for _ in 0..4 {
            serial.advance_generation();
            parallel.advance_generation_parallel();
            assert_eq!(live_positions(&serial), live_positions(&parallel));
        }
    }

    #[test]
    fn reset_leaves_only_dead_cells() {
        let mut grid = Grid::new(6, 6);
        grid.randomize(1.0);
        grid.advance_generation();

        grid.reset();

        assert_eq!(grid.population(), 0);
        grid.for_each_cell(|cell| assert!(!cell.is_alive()));
    }

    #[test]
    fn randomize_boundary_probabilities_are_deterministic() {
        let mut grid = Grid::new(8, 8);

        grid.randomize(1.0);
        assert_eq!(grid.population(), 64);

        grid.randomize(0.0);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn randomize_clamps_out_of_range_probabilities() {
        let mut grid = Grid::new(4, 4);

        grid.randomize(2.5);
        assert_eq!(grid.population(), 16);

        grid.randomize(-1.0);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn toggle_flips_state_and_ignores_out_of_range() {
        let mut grid = Grid::new(3, 3);

        grid.toggle(pos(1, 1));
        assert!(grid.cell_at(pos(1, 1)).is_some_and(Cell::is_alive));

        grid.toggle(pos(1, 1));
        assert!(!grid.cell_at(pos(1, 1)).is_some_and(Cell::is_alive));

        grid.toggle(pos(9, 9));
        assert_eq!(grid.population(), 0);
    }
}
