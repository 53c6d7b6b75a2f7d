//! Run summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use std::time::Duration;

/// Summary of a prediction run, displayed after the submission is written
#[derive(Debug, Default)]
pub struct RunSummary {
    pub train_rows: usize,
    pub test_rows: usize,
    pub model_features: usize,
    pub predictions: usize,
    pub load_time: Duration,
    pub fit_time: Duration,
    pub predict_time: Duration,
    pub write_time: Duration,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_rows(&mut self, train_rows: usize, test_rows: usize) {
        self.train_rows = train_rows;
        self.test_rows = test_rows;
    }

    pub fn set_load_time(&mut self, elapsed: Duration) {
        self.load_time = elapsed;
    }

    pub fn set_fit_time(&mut self, elapsed: Duration) {
        self.fit_time = elapsed;
    }

    pub fn set_predict_time(&mut self, elapsed: Duration) {
        self.predict_time = elapsed;
    }

    pub fn set_write_time(&mut self, elapsed: Duration) {
        self.write_time = elapsed;
    }

    pub fn total_time(&self) -> Duration {
        self.load_time + self.fit_time + self.predict_time + self.write_time
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("RUN SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Training rows"),
            Cell::new(self.train_rows),
        ]);

        table.add_row(vec![Cell::new("📁 Test rows"), Cell::new(self.test_rows)]);

        table.add_row(vec![
            Cell::new("🔢 Model features"),
            Cell::new(self.model_features),
        ]);

        table.add_row(vec![
            Cell::new("✅ Predictions written"),
            Cell::new(self.predictions)
                .fg(if self.predictions == self.test_rows {
                    Color::Green
                } else {
                    Color::Red
                })
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("⏱  Training time"),
            Cell::new(format!("{:.2}s", self.fit_time.as_secs_f64())),
        ]);

        table.add_row(vec![
            Cell::new("⏱  Total time"),
            Cell::new(format!("{:.2}s", self.total_time().as_secs_f64()))
                .add_attribute(Attribute::Bold),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}
