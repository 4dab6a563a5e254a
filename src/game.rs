use crate::{Grid, Pos2};
use std::time::{Duration, Instant};

/// The owning simulation context: one grid, a playing flag, and the tick
/// cadence. Whatever layer drives input and rendering holds this instead of
/// reaching for a global instance.
///
/// Ticks are serialized by construction; `poll_tick` advances at most one
/// generation per call, so a new tick can never start while one is in
/// flight.
#[derive(Debug)]
pub struct Game {
    grid: Grid,
    interval: Duration,
    playing: bool,
    generation: u64,
    last_tick: Instant,
}

impl Game {
    pub fn new(grid: Grid, interval: Duration) -> Self {
        Self {
            grid,
            interval,
            playing: false,
            generation: 0,
            last_tick: Instant::now(),
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn play(&mut self) {
        if !self.playing {
            self.playing = true;
            // first tick lands a full interval after resuming
            self.last_tick = Instant::now();
        }
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Advances exactly one generation, independent of the cadence.
    pub fn step(&mut self) {
        self.grid.advance_generation();
        self.generation += 1;
    }

    /// Pauses and reallocates the grid dead, like the clear control.
    pub fn clear(&mut self) {
        self.pause();
        self.grid.reset();
        self.generation = 0;
    }

    pub fn randomize(&mut self, probability: f64) {
        self.grid.randomize(probability);
    }

    pub fn toggle_cell(&mut self, pos: Pos2) {
        self.grid.toggle(pos);
    }

    /// Advances one generation if playing and at least one interval has
    /// elapsed since the previous tick. Returns whether a tick ran.
    pub fn poll_tick(&mut self, now: Instant) -> bool {
        if !self.playing || now.duration_since(self.last_tick) < self.interval {
            return false;
        }
        self.last_tick = now;
        self.step();
        true
    }
}
