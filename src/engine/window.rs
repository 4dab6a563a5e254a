use super::{Cell, Grid};
use crate::Pos2;

/// A read-only rectangular view of the grid, used by the rendering layer.
/// `br` is exclusive.
pub struct GridWindow<'a> {
    tl: Pos2,
    br: Pos2,
    grid: &'a Grid,
}
impl<'a> GridWindow<'a> {
    pub fn new(grid: &'a Grid, top_left: Pos2, bottom_right: Pos2) -> Self {
        Self {
            tl: top_left,
            br: bottom_right,
            grid,
        }
    }

    #[inline]
    pub fn live_cells(&self) -> impl Iterator<Item = &Cell> {
        let rx = self.tl.x..self.br.x;
        let ry = self.tl.y..self.br.y;
        self.grid
            .cells
            .iter()
            .filter(move |cell| cell.is_alive() && rx.contains(&cell.col()) && ry.contains(&cell.row()))
    }
}

impl std::fmt::Display for GridWindow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in self.tl.y..self.br.y {
            for x in self.tl.x..self.br.x {
                let alive = self.grid.cell_at(Pos2 { x, y }).is_some_and(Cell::is_alive);
                f.write_str(if alive { "█" } else { "·" })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
