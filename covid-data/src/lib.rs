//! Presentation logic for the COVID tracker.
//!
//! This crate turns fetched daily records into what a chart surface draws:
//! the `SparkAdapter` over one region's series, the `Screen` state that the
//! front ends render, and the plotting geometry they share.

pub mod screen;
pub mod spark_adapter;

pub use screen::{fetch_national, fetch_regions, Load, Readout, Screen, ScreenEvent};
pub use spark_adapter::SparkAdapter;

/// Mapping between spark values and drawing coordinates.
pub mod geometry {
    /// Drawing area in surface units, with uniform padding inside it.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Frame {
        pub width: f64,
        pub height: f64,
        pub padding: f64,
    }

    impl Frame {
        pub fn new(width: f64, height: f64, padding: f64) -> Self {
            Self {
                width,
                height,
                padding,
            }
        }

        fn inner_width(&self) -> f64 {
            (self.width - 2.0 * self.padding).max(0.0)
        }

        fn inner_height(&self) -> f64 {
            (self.height - 2.0 * self.padding).max(0.0)
        }

        /// X coordinate of point `index` out of `count`, evenly spaced.
        /// A single point sits in the middle.
        pub fn x_at(&self, index: usize, count: usize) -> f64 {
            if count <= 1 {
                return self.padding + self.inner_width() / 2.0;
            }
            self.padding + index as f64 * self.inner_width() / (count - 1) as f64
        }
    }

    /// Points of a spark line through `values`, scaled to fill `frame`.
    ///
    /// The largest value touches the top edge and the smallest the bottom
    /// edge; a flat series runs through the vertical middle.
    pub fn spark_points(values: &[i64], frame: Frame) -> Vec<(f64, f64)> {
        let (min, max) = values
            .iter()
            .fold((i64::MAX, i64::MIN), |(mn, mx), v| (mn.min(*v), mx.max(*v)));
        let span = (max as i128 - min as i128) as f64;
        let inner_h = frame.inner_height();

        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let y_norm = if span > 0.0 {
                    (*v as i128 - min as i128) as f64 / span
                } else {
                    0.5
                };
                let y = frame.padding + (1.0 - y_norm) * inner_h;
                (frame.x_at(i, values.len()), y)
            })
            .collect()
    }

    /// SVG `points` attribute for a polyline.
    pub fn polyline(points: &[(f64, f64)]) -> String {
        points
            .iter()
            .map(|(x, y)| format!("{x:.2},{y:.2}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Index of the point closest to horizontal position `x`, clamped to the
    /// drawn range. `None` when nothing is drawn.
    pub fn index_at_x(x: f64, count: usize, frame: Frame) -> Option<usize> {
        if count == 0 {
            return None;
        }
        if count == 1 || frame.inner_width() <= 0.0 {
            return Some(0);
        }
        let ratio = ((x - frame.padding) / frame.inner_width()).clamp(0.0, 1.0);
        Some((ratio * (count - 1) as f64).round() as usize)
    }

    /// Indices that thin `len` points down to about `max_points`, always
    /// keeping the first and last.
    pub fn downsample_indices(len: usize, max_points: usize) -> Vec<usize> {
        if len <= max_points || max_points < 2 {
            return (0..len).collect();
        }
        let step = len as f64 / max_points as f64;
        let mut result = Vec::with_capacity(max_points + 1);
        let mut idx = 0.0;
        while (idx as usize) < len {
            result.push(idx as usize);
            idx += step;
        }
        if result.last() != Some(&(len - 1)) {
            result.push(len - 1);
        }
        result
    }

}
