use crate::Pos2;

/// A single grid position with its current and staged life state.
///
/// Cells live in a flat arena owned by the grid; neighbor lookups go
/// through [`Grid`](super::Grid) rather than a back-pointer.
#[derive(Debug, Clone)]
pub struct Cell {
    pos: Pos2,
    alive: bool,
    next_alive: Option<bool>,
}

impl Cell {
    pub(super) fn new(pos: Pos2) -> Self {
        Self {
            pos,
            alive: false,
            next_alive: None,
        }
    }

    #[inline]
    pub fn pos(&self) -> Pos2 {
        self.pos
    }
    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.y
    }
    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.x
    }
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Direct edit of the current state, outside any generation advance.
    #[inline]
    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    /// Stages the next-generation state per B3/S23. Reads only the current
    /// state; `alive` is untouched until [`Cell::commit`].
    pub(super) fn compute_next(&mut self, living_neighbors: u8) {
        let next = if self.alive {
            living_neighbors == 2 || living_neighbors == 3
        } else {
            living_neighbors == 3
        };
        self.next_alive = Some(next);
    }

    /// Commits the staged state. The staged value is not cleared, so this
    /// must be called exactly once per `compute_next`.
    pub(super) fn commit(&mut self) {
        if let Some(next) = self.next_alive {
            self.alive = next;
        }
    }
}
