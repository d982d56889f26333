//! Plain-text coverage track loading.

use anyhow::Context;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a coverage track from a text file.
///
/// One or more whitespace-separated values per line, index = genomic
/// position. Blank lines and lines starting with `#` or `*` are
/// skipped.
pub fn load_track(path: &Path) -> anyhow::Result<Vec<f64>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open coverage track '{}'", path.display()))?;
    let reader = BufReader::new(file);

    let mut values = Vec::new();
    for (line_index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read '{}'", path.display()))?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with('*') {
            continue;
        }

        for token in line.split_whitespace() {
            let value: f64 = token.parse().with_context(|| {
                format!(
                    "invalid coverage value '{}' at {}:{}",
                    token,
                    path.display(),
                    line_index + 1
                )
            })?;
            values.push(value);
        }
    }

    Ok(values)
}
