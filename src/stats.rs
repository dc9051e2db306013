use lifeboard::Generation;
use std::time::{Duration, Instant};

pub const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// Running totals of the generations an update loop has published
pub struct Recorder {
    generation: u64,
    alive: usize,
    changed: usize,
    gens_in_report: usize,
    last_report: Instant,
}
impl Recorder {
    pub fn new(generation: u64, alive: usize) -> Self {
        Self {
            generation,
            alive,
            changed: 0,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }

    pub fn record(&mut self, generation: &Generation) {
        self.generation = generation.index;
        self.alive = generation.alive;
        self.changed = generation.changes.len();
        self.gens_in_report += 1;
    }

    /// Notes a manual edit so the next report reflects it
    pub fn record_edit(&mut self, alive: usize) {
        self.alive = alive;
    }

    pub fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }
    pub fn report(&mut self) -> String {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gen:{}, alive:{}, changed:{}",
            gens_per_sec, self.generation, self.alive, self.changed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_reflects_latest_generation() {
        let mut recorder = Recorder::new(0, 3);
        recorder.record(&Generation {
            index: 7,
            changes: Vec::new(),
            alive: 4,
        });

        let report = recorder.report();
        assert!(report.ends_with("gen:7, alive:4, changed:0"), "{report}");
        assert!(!recorder.has_report());
    }

    #[test]
    fn edits_update_alive_count() {
        let mut recorder = Recorder::new(2, 3);
        recorder.record_edit(10);

        assert!(recorder.report().ends_with("gen:2, alive:10, changed:0"));
    }
}
