use indicatif::{ProgressBar, ProgressStyle};

use super::driver::RunCounters;

const NAME_WIDTH: usize = 40;

/// `[#:00012 L:00010 C:00002 E:000] <name padded to 40>`
pub fn status_line(counters: &RunCounters, name: &str) -> String {
    let name: String = name.chars().take(NAME_WIDTH).collect();
    format!(
        "[#:{:05} L:{:05} C:{:05} E:{:03}] {:<width$}",
        counters.processed,
        counters.links,
        counters.copies,
        counters.errors,
        name,
        width = NAME_WIDTH
    )
}

/// End-of-run summary lines.
pub fn summary_lines(counters: &RunCounters) -> Vec<String> {
    vec![
        format!("[+] Total: {}", counters.processed),
        format!("[+] Links: {}", counters.links),
        format!("[+] Copies: {}", counters.copies),
        format!("[+] Errors: {}", counters.errors),
        format!("[+] Duplicates: {}", counters.duplicates),
    ]
}

/// Single live status line; diagnostics are printed above it.
pub struct Progress {
    bar: ProgressBar,
}

impl Progress {
    pub fn new(visible: bool) -> Self {
        if !visible {
            return Self::hidden();
        }
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{msg}") {
            bar.set_style(style);
        }
        Self { bar }
    }

    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn update(&self, counters: &RunCounters, name: &str) {
        self.bar.set_message(status_line(counters, name));
    }

    pub fn println(&self, line: impl AsRef<str>) {
        if self.bar.is_hidden() {
            println!("{}", line.as_ref());
        } else {
            self.bar.println(line);
        }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
