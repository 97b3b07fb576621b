use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Set a step output. Appends to the runner's `GITHUB_OUTPUT` file when there
/// is one and falls back to the legacy `::set-output` workflow command.
pub fn set_output(name: &str, value: &str, github_output: Option<&Path>) -> Result<()> {
    match github_output {
        Some(path) => {
            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            writeln!(file, "{name}={value}")
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => println!("{}", set_output_command(name, value)),
    }
    Ok(())
}

pub fn set_output_command(name: &str, value: &str) -> String {
    format!("::set-output name={}::{}", escape_property(name), escape_data(value))
}

/// `%` goes first so the escapes added after it stay intact.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
