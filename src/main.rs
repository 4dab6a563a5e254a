use std::{
    io, thread,
    time::{Duration, Instant},
};

mod console;
mod options;
mod stats;

use gridlife::{Game, Grid};
use stats::Recorder;

fn build_grid(args: &options::Args) -> Grid {
    let (width, height) = args.grid_size();
    let mut grid = Grid::new(height, width);
    args.fill_mode()
        .apply(&mut grid, args.probability(), &mut rand::rng());
    grid
}

fn run_headless(args: &options::Args) -> io::Result<()> {
    let mut grid = build_grid(args);
    println!("population: {}", grid.population());

    let mut stats = stats::CsvRecord::new(grid.population());
    for _ in 0..args.generations() {
        if args.parallel() {
            grid.advance_generation_parallel();
        } else {
            grid.advance_generation();
        }
        stats.record(grid.population());

        if stats.has_report() {
            println!("{}", stats.report());
        }
        if let Some(sleep) = args.headless_sleep() {
            thread::sleep(sleep);
        }
    }

    if let Some(file_name) = args.stats_file() {
        stats.save(file_name)?;
    }
    Ok(())
}

fn run_console(args: &options::Args) -> io::Result<()> {
    let mut game = Game::new(build_grid(args), args.interval());
    let mut ui = console::ConsoleUi::new(args.probability())?;
    let mut stats = stats::CsvRecord::new(game.grid().population());

    'session: loop {
        while let Some(cmd) = ui.poll_events(&mut game)? {
            if let console::ConsoleCommand::Exit = cmd {
                break 'session;
            }
        }

        if game.poll_tick(Instant::now()) {
            stats.record(game.grid().population());
        }
        if stats.has_report() {
            ui.set_report(stats.report());
        }
        ui.render(&game)?;

        // don't spin between frames
        thread::sleep(Duration::from_millis(5));
    }
    std::mem::drop(ui);

    if let Some(file_name) = args.stats_file() {
        stats.save(file_name)?;
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let Some(args) = options::Args::from_env() else {
        return Ok(());
    };

    if args.console() {
        run_console(&args)
    } else {
        run_headless(&args)
    }
}
