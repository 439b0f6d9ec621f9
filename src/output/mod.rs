//! Output control module with structured console logging

use std::time::Instant;

#[derive(Clone, Debug)]
pub struct OutputManager {
    pub verbose: bool,
    quiet: bool,
    start_time: Option<Instant>,
}

impl OutputManager {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            quiet: false,
            start_time: Some(Instant::now()),
        }
    }

    pub fn new_quiet() -> Self {
        Self {
            verbose: false,
            quiet: true,
            start_time: Some(Instant::now()),
        }
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            self.print_with_timestamp("INFO", message, "ℹ️");
        }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            self.print_with_timestamp("SUCCESS", message, "✅");
        }
    }

    // Warnings and errors go to stderr so stdout stays clean for piped
    // manifest output (dry runs, listings).
    pub fn warning(&self, message: &str) {
        eprintln!("{}", self.format_line("WARN", message, "⚠️"));
    }

    pub fn error(&self, message: &str) {
        eprintln!("{}", self.format_line("ERROR", message, "❌"));
    }

    // Section headers
    pub fn section(&self, title: &str) {
        if self.quiet {
            return;
        }

        if self.verbose {
            let separator = "━".repeat(60);
            println!("\n{}", separator);
            println!("📋 {}", title);
            println!("{}", separator);
        } else {
            println!("\n📋 {}", title);
        }
    }

    pub fn detail(&self, detail: &str) {
        if self.verbose {
            println!("      📝 {}", detail);
        }
    }

    // Helper methods
    fn print_with_timestamp(&self, level: &str, message: &str, emoji: &str) {
        println!("{}", self.format_line(level, message, emoji));
    }

    fn format_line(&self, level: &str, message: &str, emoji: &str) -> String {
        let timestamp = if let Some(start_time) = self.start_time {
            format!("[{:8.3}s]", start_time.elapsed().as_secs_f64())
        } else {
            String::new()
        };

        if self.verbose {
            format!("{} {} {} {}", timestamp, emoji, level, message)
        } else {
            format!("{} {}", emoji, message)
        }
    }
}
