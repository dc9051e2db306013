use anyhow::Context;
use lifeboard::{Board, Pattern, Pos2, UpdateLoop, update_loop};
use log::info;
use simple_logger::SimpleLogger;
use std::sync::mpsc::RecvTimeoutError;

mod console;
mod options;
mod stats;

use stats::Recorder;

fn seed_board(args: &options::Args, board: &mut Board) -> anyhow::Result<()> {
    let Some(file_name) = args.pattern_file() else {
        return args.fill_mode()?.apply(board);
    };

    let text = std::fs::read_to_string(&file_name)
        .with_context(|| format!("failed to read pattern from {file_name}"))?;
    let bounds = board.simulated_bounds();
    let pattern = Pattern::parse_rle(&text, bounds.len())
        .with_context(|| format!("invalid pattern in {file_name}"))?;
    board.place(pattern.cells(), Pos2::new(bounds.start, bounds.start))?;
    Ok(())
}

fn run_console(update: &mut UpdateLoop, stats: &mut Recorder) -> anyhow::Result<()> {
    let generations = update.subscribe();
    let mut console = console::ConsoleRender::new(&update.board().lock())?;
    loop {
        while let Some(cmd) = console.poll_events(update, stats)? {
            match cmd {
                console::ConsoleCommand::Exit => return Ok(()),
                console::ConsoleCommand::Handled => {}
            }
        }
        for generation in generations.try_iter() {
            stats.record(&generation);
        }
        if stats.has_report() {
            console.set_report(stats.report());
        }
        let frame = console.capture(&update.board().lock(), update.state())?;
        console.render(&frame)?;
    }
}

/// Runs the loop for `limit` generations, or forever when there is no limit
fn run_headless(update: &mut UpdateLoop, stats: &mut Recorder, limit: Option<u64>) {
    let generations = update.subscribe();
    let timeout = update.interval() * 2 + stats::REPORT_INTERVAL;
    match limit {
        Some(steps) => update.start_for(steps),
        None => update.start(),
    }

    let mut seen = 0;
    while limit.is_none_or(|steps| seen < steps) {
        match generations.recv_timeout(timeout) {
            Ok(generation) => {
                stats.record(&generation);
                seen += 1;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        // report metrics every 500ms
        if stats.has_report() {
            println!("{}", stats.report());
        }
    }
    update.wait();
}

fn main() -> anyhow::Result<()> {
    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };
    SimpleLogger::new()
        .with_level(args.log_level()?)
        .env()
        .init()?;

    let config = args.config()?;
    let mut board = Board::from_config(&config)?;
    seed_board(&args, &mut board)?;
    info!(
        "{}x{} {} board, alive: {}",
        board.size(),
        board.size(),
        board.policy(),
        board.alive_count()
    );

    let mut stats = Recorder::new(board.generation(), board.alive_count());
    let mut update = UpdateLoop::new(update_loop::shared(board), &config);
    if args.console() {
        run_console(&mut update, &mut stats)?;
        update.stop();
    } else {
        run_headless(&mut update, &mut stats, args.generations()?);
        let board = update.board().lock();
        println!("{}", board.view());
        println!("{}", stats.report());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeboard::{BorderPolicy, Config};
    use std::time::Duration;

    #[test]
    fn headless_run_stops_at_the_generation_limit() {
        let config = Config {
            tick_interval: Duration::from_millis(1),
            ..Config::preset(BorderPolicy::Bordered)
        };
        let mut board = Board::from_config(&config).expect("valid config");
        board.randomize();
        let mut stats = Recorder::new(0, board.alive_count());
        let mut update = UpdateLoop::new(update_loop::shared(board), &config);

        run_headless(&mut update, &mut stats, Some(5));

        assert_eq!(update.board().lock().generation(), 5);
        assert!(stats.report().contains("gen:5,"));
    }
}
