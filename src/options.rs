use std::time::Duration;

use gridlife::{Grid, Pos2};

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Option<Self> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run interactively in the terminal");
        opts.optflag("t", "threads", "advance generations in parallel");
        opts.optopt("w", "width", "set grid width", "COLS");
        opts.optopt("h", "height", "set grid height", "ROWS");
        opts.optopt(
            "f",
            "fill",
            "initial fill (empty, random, alternating, all)",
            "TYPE",
        );
        opts.optopt(
            "p",
            "probability",
            "live probability for random fill and the randomize key",
            "PROB",
        );
        opts.optopt(
            "s",
            "interval",
            "milliseconds between generations while playing",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "stats", "write stats csv to file", "FILE");

        let matches = opts.parse(args.iter().map(T::as_ref)).unwrap();
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: gridlife [options]"));
            None
        } else {
            Some(Self { matches })
        }
    }
    pub fn from_env() -> Option<Self> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn opt_parsed<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.matches.opt_get(name).ok().flatten()
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn parallel(&self) -> bool {
        self.matches.opt_present("threads")
    }

    pub fn generations(&self) -> usize {
        self.opt_parsed("gens").unwrap_or(usize::MAX)
    }

    pub fn probability(&self) -> f64 {
        self.opt_parsed("probability").unwrap_or(0.5)
    }

    /// Tick cadence while playing.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.opt_parsed("interval").unwrap_or(30))
    }
    /// Headless runs sleep between generations only when asked to.
    pub fn headless_sleep(&self) -> Option<Duration> {
        self.opt_parsed("interval").map(Duration::from_millis)
    }

    pub fn grid_size(&self) -> (i32, i32) {
        let default = if self.console() {
            // leave the bottom terminal row for the status footer
            let (cols, rows) = crossterm::terminal::size().unwrap_or((140, 81));
            (cols as i32, rows as i32 - 1)
        } else {
            (140, 80)
        };

        (
            self.opt_parsed("width").unwrap_or(default.0),
            self.opt_parsed("height").unwrap_or(default.1),
        )
    }

    pub fn fill_mode(&self) -> FillMode {
        // interactive sessions start from a cleared grid
        let default = if self.console() { "empty" } else { "random" };
        let mode_str = self.matches.opt_str("fill");
        FillMode::new(mode_str.as_deref().unwrap_or(default)).expect("valid fill mode string")
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}

pub enum FillMode {
    Empty,
    Random,
    Alternating,
    All,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "empty" => Some(Self::Empty),
            "random" => Some(Self::Random),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    pub fn apply<R: rand::Rng + ?Sized>(&self, grid: &mut Grid, probability: f64, rng: &mut R) {
        match self {
            Self::Empty => {}
            Self::Random => grid.randomize_with(rng, probability),
            Self::All => grid.randomize_with(rng, 1.0),
            Self::Alternating => {
                for y in 0..grid.rows() {
                    for x in 0..grid.cols() {
                        grid.set_alive(Pos2 { x, y }, (x + y) % 2 == 0);
                    }
                }
            }
        }
    }
}
