use current_platform::CURRENT_PLATFORM;
use strum::VariantArray;

use crate::args::Positional;

/// Printed on a wrong argument count. Goes to stderr: the exit status is a failure either way.
pub fn print_usage() {
    eprint!("{}", usage());
}

fn usage() -> String {
    let mut text = format!("Version: {}\n", version_string());
    text.push_str(&format!("License: {}\n", env!("CARGO_PKG_LICENSE")));
    let names: Vec<String> = Positional::VARIANTS
        .iter()
        .map(|arg| {
            let name: &'static str = arg.into();
            format!("<{name}>")
        })
        .collect();
    text.push_str(&format!("Usage: {} {}\n\n", env!("CARGO_PKG_NAME"), names.join(" ")));
    text.push_str("Arguments:\n");
    for arg in Positional::VARIANTS {
        let name: &'static str = arg.into();
        text.push_str(&format!("  {name:19} {}\n", arg.help_text()));
    }
    text
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let version = env!("CARGO_PKG_VERSION");
    format!("{} {version} {cpu}", env!("CARGO_PKG_NAME"))
}
