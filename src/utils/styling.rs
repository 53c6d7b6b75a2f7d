//! Terminal styling utilities

use console::{style, Emoji};
use std::path::Path;
use std::time::Duration;

use crate::pipeline::Hyperparameters;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", ">> ");
pub static GEM: Emoji<'_, '_> = Emoji("💎 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
        _______________
       /\             /\
      /  \   .   .   /  \
     / .  \ / \ / \ /  . \
    /______V___V___V______\
    \          .          /
     \        / \        /
      \      /   \      /
       \    /     \    /
        \  /       \  /
         \/_________\/
    "#;

    println!();
    println!("{}", style(banner).cyan());
    println!(
        "    {} {}",
        style("◆ Lapidary").magenta().bold(),
        style("Gemstone price prediction").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the run configuration card
pub fn print_config(
    train: &Path,
    test: &Path,
    output: &Path,
    target: &str,
    lenient: bool,
    params: &Hyperparameters,
) {
    println!("    {} {}", GEM, style("Configuration").cyan().bold());
    println!("    {}", style("─".repeat(50)).dim());
    println!("      {} Train:   {}", FOLDER, train.display());
    println!("      {} Test:    {}", FOLDER, test.display());
    println!("      {} Output:  {}", SAVE, output.display());
    println!("      {} Target:  {}", TARGET, style(target).yellow());
    println!(
        "      Unknown categories: {}",
        if lenient {
            style("lenient (-1 sentinel)").yellow()
        } else {
            style("strict (fail)").yellow()
        }
    );
    println!(
        "      Booster: {} rounds, depth {}, eta {}",
        style(params.boost_rounds).yellow(),
        style(params.max_depth).yellow(),
        style(params.learning_rate).yellow()
    );
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!(
        "    {} {}",
        style("✓").green().bold(),
        style(message).green()
    );
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print the elapsed time for a completed step
pub fn print_step_time(elapsed: Duration) {
    println!(
        "    {}",
        style(format!("took {:.2}s", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        SPARKLE,
        style("Lapidary run complete!").green().bold()
    );
    println!();
}
