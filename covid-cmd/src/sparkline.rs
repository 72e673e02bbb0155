//! Text rendering of a spark line for the terminal.

use covid_data::geometry::downsample_indices;

/// Block characters from lowest to highest.
const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// A spark line of at most `width` characters. Long series are thinned out,
/// always keeping the first and last value.
pub fn sparkline(values: &[i64], width: usize) -> String {
    let indices = downsample_indices(values.len(), width.max(2));
    let sampled: Vec<i64> = indices.iter().map(|&i| values[i]).collect();
    let min = sampled.iter().copied().min().unwrap_or(0);
    let max = sampled.iter().copied().max().unwrap_or(0);
    let span = (max as i128 - min as i128) as f64;
    let top = (BARS.len() - 1) as f64;

    sampled
        .iter()
        .map(|v| {
            if span > 0.0 {
                BARS[((*v as i128 - min as i128) as f64 / span * top).round() as usize]
            } else {
                BARS[BARS.len() / 2 - 1]
            }
        })
        .collect()
}

/// A line with a caret under the character that shows window index `index`.
pub fn marker(index: usize, len: usize, width: usize) -> String {
    let indices = downsample_indices(len, width.max(2));
    let column = indices
        .iter()
        .position(|&i| i >= index)
        .unwrap_or(indices.len().saturating_sub(1));
    format!("{}^", " ".repeat(column))
}
