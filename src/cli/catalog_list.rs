use crate::core::catalog::{FEATURE_OPTIONS, THEME_OPTIONS};
use crate::core::selection::MAX_FEATURES;

fn format_listing(heading: &str, labels: &[&str], footer: &str) -> String {
    let mut out = format!("{heading}\n\n");
    for label in labels {
        out.push_str(&format!("  • {label}\n"));
    }
    out.push_str(&format!("\n{footer}"));
    out
}

pub fn themes_listing() -> String {
    format_listing(
        "Available themes:",
        &THEME_OPTIONS,
        "Pick one with: appspark generate -t \"<theme>\"",
    )
}

pub fn features_listing() -> String {
    format_listing(
        "Available features:",
        &FEATURE_OPTIONS,
        &format!("Pick up to {MAX_FEATURES} with: appspark generate -t <theme> -f \"<feature>\" ..."),
    )
}

pub fn list_themes() {
    println!("{}", themes_listing());
}

pub fn list_features() {
    println!("{}", features_listing());
}
