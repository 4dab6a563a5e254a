use std::time::Instant;

const REPORT_INTERVAL_MS: u128 = 500;

pub trait Recorder {
    fn record(&mut self, population: usize);

    fn has_report(&self) -> bool;
    fn report(&mut self) -> String;
}

/// Tracks generations/sec and the latest population for the status line.
pub struct ThroughputRecord {
    generations: u64,
    population: usize,
    gens_since_report: u64,
    last_report: Instant,
}
impl ThroughputRecord {
    pub fn new(population: usize) -> Self {
        Self {
            generations: 0,
            population,
            gens_since_report: 0,
            last_report: Instant::now(),
        }
    }
}
impl Recorder for ThroughputRecord {
    fn record(&mut self, population: usize) {
        self.generations += 1;
        self.gens_since_report += 1;
        self.population = population;
    }

    fn has_report(&self) -> bool {
        self.last_report.elapsed().as_millis() >= REPORT_INTERVAL_MS
    }
    fn report(&mut self) -> String {
        let gens_per_sec =
            self.gens_since_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset the window for the next report
        self.last_report = Instant::now();
        self.gens_since_report = 0;

        format!(
            "{:.02}gen/s gen:{} pop:{}",
            gens_per_sec, self.generations, self.population
        )
    }
}

/// A [`ThroughputRecord`] that also keeps per-generation timing rows for an
/// optional csv dump at the end of a run.
pub struct CsvRecord {
    inner: ThroughputRecord,
    rows: Vec<(u128, usize)>,
    last_tick: Instant,
}
impl CsvRecord {
    pub fn new(population: usize) -> Self {
        Self {
            inner: ThroughputRecord::new(population),
            rows: Vec::new(),
            last_tick: Instant::now(),
        }
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        use std::{
            fs,
            io::{self, Write},
        };

        let file = fs::File::create(path)?;
        let mut file = io::BufWriter::new(file);

        file.write_all(b"gen,delta_us,population\n")?;
        for (i, (delta, population)) in self.rows.iter().enumerate() {
            let line = format!("{},{},{}\n", i, delta, population);
            file.write_all(line.as_bytes())?;
        }
        file.flush()
    }
}
impl Recorder for CsvRecord {
    fn record(&mut self, population: usize) {
        let delta = self.last_tick.elapsed().as_micros();
        self.last_tick = Instant::now();

        self.rows.push((delta, population));
        self.inner.record(population);
    }

    fn has_report(&self) -> bool {
        self.inner.has_report()
    }
    fn report(&mut self) -> String {
        self.inner.report()
    }
}
