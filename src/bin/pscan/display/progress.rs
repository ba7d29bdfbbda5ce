use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

/// Step reporter for `generate`. Does nothing when created non-interactive.
pub struct Progress {
    enabled: bool,
    started: Instant,
    total_steps: u8,
    current: Option<Step>,
    count: u8,
}

struct Step {
    label: String,
    since: Instant,
    spinner: ProgressBar,
}

impl Progress {
    pub fn new(interactive: bool, total_steps: u8) -> Self {
        Self {
            enabled: interactive,
            started: Instant::now(),
            total_steps,
            current: None,
            count: 0,
        }
    }

    pub fn step(&mut self, label: &str) {
        if !self.enabled {
            return;
        }
        self.clear();
        self.count += 1;

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(step_line(self.count, self.total_steps, label, None));

        self.current = Some(Step {
            label: label.to_string(),
            since: Instant::now(),
            spinner,
        });
    }

    /// Shows `done`/`total` items next to the running step.
    pub fn update(&mut self, done: usize, total: usize) {
        if let Some(step) = &self.current {
            step.spinner.set_message(step_line(
                self.count,
                self.total_steps,
                &step.label,
                Some((done, total)),
            ));
        }
    }

    pub fn complete_step(&mut self, label: &str, substeps: &[&str]) {
        let Some(step) = self.current.take() else {
            return;
        };
        step.spinner.finish_and_clear();

        let mut err = io::stderr().lock();
        let _ = writeln!(
            err,
            "  \x1b[32m✓\x1b[0m {label:<44} {:>5.1}s",
            step.since.elapsed().as_secs_f64()
        );
        for line in substeps {
            let _ = writeln!(err, "      \x1b[2m·\x1b[0m {line}");
        }
    }

    pub fn finish(mut self) {
        if !self.enabled {
            return;
        }
        self.clear();
        let _ = writeln!(
            io::stderr().lock(),
            "\n  \x1b[32m✓\x1b[0m Scan complete in {:.2}s\n",
            self.started.elapsed().as_secs_f64()
        );
    }

    fn clear(&mut self) {
        if let Some(step) = self.current.take() {
            step.spinner.finish_and_clear();
        }
    }
}

fn step_line(n: u8, total: u8, label: &str, items: Option<(usize, usize)>) -> String {
    match items {
        Some((done, of)) => format!("[{n}/{total}] {label}... {done}/{of}"),
        None => format!("[{n}/{total}] {label}..."),
    }
}
