//! Terminal renderer
//!
//! Implements the aggregator's observer seam: prints the accepted snapshot
//! as a compact list with status icon columns, and maps the theme's success
//! and error colors onto the icons via truecolor ANSI escapes.

use gh_widget_config::{parse_hex, Theme};
use gh_widget_core::{CiStatus, RefreshError, RefreshObserver, ReviewStatus, Snapshot};

const RESET: &str = "\x1b[0m";

pub struct TextRenderer {
    success_rgb: Option<(u8, u8, u8)>,
    error_rgb: Option<(u8, u8, u8)>,
}

impl TextRenderer {
    pub fn new(theme: &Theme) -> Self {
        Self {
            success_rgb: parse_hex(&theme.success_color),
            error_rgb: parse_hex(&theme.error_color),
        }
    }

    pub fn show_notice(&self, message: &str) {
        println!("{}", message);
    }

    fn paint(&self, text: &str, rgb: Option<(u8, u8, u8)>) -> String {
        match rgb {
            Some((r, g, b)) => format!("\x1b[38;2;{};{};{}m{}{}", r, g, b, text, RESET),
            None => text.to_string(),
        }
    }

    fn ci_icon(&self, status: CiStatus) -> String {
        let rgb = match status {
            CiStatus::Success => self.success_rgb,
            CiStatus::Failure => self.error_rgb,
            CiStatus::Pending | CiStatus::Unknown => None,
        };
        self.paint(status.icon(), rgb)
    }

    fn review_icon(&self, status: ReviewStatus) -> String {
        let rgb = match status {
            ReviewStatus::Approved => self.success_rgb,
            ReviewStatus::ChangesRequested => self.error_rgb,
            ReviewStatus::Pending | ReviewStatus::Unknown => None,
        };
        self.paint(status.icon(), rgb)
    }

    fn print_snapshot(&self, snapshot: &Snapshot) {
        if snapshot.is_empty() {
            println!("No open pull requests found");
        } else {
            for pr in snapshot.iter() {
                println!(
                    "{} {}  {}",
                    self.ci_icon(pr.ci_status),
                    self.review_icon(pr.review_status),
                    pr.summary.title
                );
                println!(
                    "      {} · {} · {}",
                    pr.summary.repo_name(),
                    pr.summary.state_label(),
                    pr.summary.html_url
                );
                if let Some(url) = &pr.graphite_url {
                    println!("      ↳ {}", url);
                }
            }
        }

        let now = chrono::Local::now();
        println!("Last updated: {}", now.format("%H:%M:%S"));
    }
}

impl RefreshObserver for TextRenderer {
    fn refresh_started(&mut self) {
        println!("Loading...");
    }

    fn snapshot_changed(&mut self, snapshot: &Snapshot) {
        self.print_snapshot(snapshot);
    }

    fn refresh_failed(&mut self, error: &RefreshError) {
        println!("Error: {}", error);
    }
}
