//! Sparkline geometry and SVG rendering.
//!
//! A sparkline maps an ordered price series into a fixed viewport:
//!
//! ```text
//! x(i) = padding + (i / (n-1)) * (width - 2*padding)
//! y(v) = height - padding - ((v - min) / range) * (height - 2*padding)
//! ```
//!
//! y grows downward, so higher values produce smaller y. The mapping is a
//! pure function of its input: the same series always produces the same
//! geometry.
//!
//! Flat series (`range == 0`) render as a horizontal line at mid-height
//! rather than pinned to an edge; the guard is an explicit branch, not a
//! substituted divisor.

/// Direction of the series from first to last sample.
///
/// Chooses the styling: a series that ends at or above where it started
/// counts as up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Stroke color for this trend.
    pub fn color(&self) -> &'static str {
        match self {
            Trend::Up => "#34d399",
            Trend::Down => "#fb7185",
        }
    }
}

/// Viewport-mapped geometry for one series.
#[derive(Clone, Debug)]
pub struct SparklineGeometry {
    /// The polyline vertices, one per sample, in series order
    pub points: Vec<(f64, f64)>,

    /// The fill polygon: the polyline closed down to the baseline
    pub fill: Vec<(f64, f64)>,

    /// Direction of the series
    pub trend: Trend,

    /// Viewport width the points were mapped into
    pub width: f64,

    /// Viewport height the points were mapped into
    pub height: f64,
}

/// Map `series` into a `width` x `height` viewport inset by `padding`.
///
/// Returns `None` for series with fewer than two samples: a single point
/// has no x interpolation (the `i / (n-1)` term divides by zero) and
/// nothing meaningful to draw.
pub fn sparkline_geometry(
    series: &[f64],
    width: f64,
    height: f64,
    padding: f64,
) -> Option<SparklineGeometry> {
    if series.len() < 2 {
        return None;
    }

    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    let n = series.len();
    let inner_width = width - 2.0 * padding;
    let inner_height = height - 2.0 * padding;

    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = padding + (i as f64 / (n - 1) as f64) * inner_width;
            let y = if range == 0.0 {
                height / 2.0
            } else {
                height - padding - ((v - min) / range) * inner_height
            };
            (x, y)
        })
        .collect();

    let baseline = height - padding;
    let first_x = points[0].0;
    let last_x = points[n - 1].0;

    let mut fill = points.clone();
    fill.push((last_x, baseline));
    fill.push((first_x, baseline));

    let trend = if series[n - 1] >= series[0] {
        Trend::Up
    } else {
        Trend::Down
    };

    Some(SparklineGeometry {
        points,
        fill,
        trend,
        width,
        height,
    })
}

impl SparklineGeometry {
    /// Render the geometry as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let color = self.trend.color();
        format!(
            concat!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" ",
                "viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\">\n",
                "  <polygon points=\"{fill}\" fill=\"{color}\" fill-opacity=\"0.15\"/>\n",
                "  <polyline points=\"{line}\" fill=\"none\" stroke=\"{color}\" ",
                "stroke-width=\"2\" stroke-linejoin=\"round\" stroke-linecap=\"round\"/>\n",
                "</svg>\n"
            ),
            w = self.width,
            h = self.height,
            fill = format_points(&self.fill),
            line = format_points(&self.points),
            color = color,
        )
    }
}

fn format_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 240.0;
    const HEIGHT: f64 = 64.0;
    const PADDING: f64 = 4.0;

    fn geometry(series: &[f64]) -> SparklineGeometry {
        sparkline_geometry(series, WIDTH, HEIGHT, PADDING).unwrap()
    }

    #[test]
    fn test_too_short_series_has_no_geometry() {
        assert!(sparkline_geometry(&[], WIDTH, HEIGHT, PADDING).is_none());
        assert!(sparkline_geometry(&[42.0], WIDTH, HEIGHT, PADDING).is_none());
    }

    #[test]
    fn test_x_spans_padded_viewport() {
        let g = geometry(&[1.0, 2.0, 3.0]);
        assert_eq!(g.points[0].0, PADDING);
        assert_eq!(g.points[2].0, WIDTH - PADDING);
        assert_eq!(g.points[1].0, WIDTH / 2.0);
    }

    #[test]
    fn test_extremes_touch_padded_edges() {
        let g = geometry(&[1.0, 3.0]);
        // min maps to the baseline, max to the top inset
        assert_eq!(g.points[0].1, HEIGHT - PADDING);
        assert_eq!(g.points[1].1, PADDING);
    }

    #[test]
    fn test_flat_series_renders_centered() {
        let g = geometry(&[5.0, 5.0, 5.0, 5.0]);
        for (_, y) in &g.points {
            assert_eq!(*y, HEIGHT / 2.0);
        }
    }

    #[test]
    fn test_increasing_series_has_strictly_decreasing_y() {
        let g = geometry(&[1.0, 2.0, 4.0, 8.0]);
        for pair in g.points.windows(2) {
            assert!(pair[1].1 < pair[0].1, "{:?} should descend", g.points);
        }
    }

    #[test]
    fn test_fill_closes_to_baseline() {
        let g = geometry(&[2.0, 1.0, 3.0]);
        let baseline = HEIGHT - PADDING;
        assert_eq!(g.fill.len(), g.points.len() + 2);
        assert_eq!(g.fill[g.fill.len() - 2], (WIDTH - PADDING, baseline));
        assert_eq!(g.fill[g.fill.len() - 1], (PADDING, baseline));
    }

    #[test]
    fn test_trend_compares_last_to_first() {
        assert_eq!(geometry(&[1.0, 2.0]).trend, Trend::Up);
        assert_eq!(geometry(&[2.0, 1.0]).trend, Trend::Down);
        // dips in the middle do not matter
        assert_eq!(geometry(&[2.0, 1.0, 2.0]).trend, Trend::Up);
    }

    #[test]
    fn test_flat_series_trends_up() {
        assert_eq!(geometry(&[5.0, 5.0]).trend, Trend::Up);
    }

    #[test]
    fn test_svg_carries_trend_color() {
        let up = geometry(&[1.0, 2.0]).to_svg();
        assert!(up.contains("<polyline"));
        assert!(up.contains("#34d399"));

        let down = geometry(&[2.0, 1.0]).to_svg();
        assert!(down.contains("#fb7185"));
        assert!(down.contains("viewBox=\"0 0 240 64\""));
    }
}
