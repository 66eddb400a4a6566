//! SVG scaling charts
//!
//! Self-contained SVG line charts written as plain documents: execution
//! time vs. threads, speedup vs. threads with the ideal linear reference,
//! and parallel efficiency across sizes. No plotting library — each chart
//! is a viewBox, axes, tick labels, one polyline per series and a legend.

use crate::derive::derive_speedup;
use crate::record::ResultSet;

const SERIES_COLORS: [&str; 6] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b",
];
const REFERENCE_COLOR: &str = "#d62728";

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// One plotted line: a label and (threads, value) points.
struct Series {
    label: String,
    points: Vec<(f64, f64)>,
    dashed: bool,
}

/// SVG chart renderer
pub struct SvgPlotter {
    width: f64,
    height: f64,
}

impl SvgPlotter {
    pub fn new() -> Self {
        Self {
            width: 960.0,
            height: 540.0,
        }
    }

    /// Execution time (seconds) vs. thread count, one series per program.
    ///
    /// `None` when no program has data for the requested size.
    pub fn time_chart(&self, results: &ResultSet, size: u32) -> Option<String> {
        let mut series = Vec::new();
        for program in results.programs() {
            let points: Vec<(f64, f64)> = results
                .for_configuration(&program, size)
                .iter()
                .map(|r| (f64::from(r.key.threads), r.mean_seconds()))
                .collect();
            if !points.is_empty() {
                series.push(Series {
                    label: program,
                    points,
                    dashed: false,
                });
            }
        }
        if series.is_empty() {
            return None;
        }

        Some(self.render(
            &format!("Execution Time ({}×{})", size, size),
            "Threads / processes",
            "Time (s)",
            &series,
        ))
    }

    /// Speedup vs. thread count with the ideal linear reference line.
    ///
    /// Programs without a single-thread baseline for this size are
    /// skipped; `None` when none of them is derivable.
    pub fn speedup_chart(&self, results: &ResultSet, size: u32) -> Option<String> {
        let mut series = Vec::new();
        let mut max_threads: f64 = 1.0;

        for program in results.programs() {
            let derived = match derive_speedup(results, &program, size) {
                Ok(derived) => derived,
                Err(_) => continue,
            };
            let points: Vec<(f64, f64)> = derived
                .iter()
                .map(|d| (f64::from(d.record.key.threads), d.speedup))
                .collect();
            if let Some(&(threads, _)) = points.last() {
                max_threads = max_threads.max(threads);
            }
            series.push(Series {
                label: program,
                points,
                dashed: false,
            });
        }
        if series.is_empty() {
            return None;
        }

        series.push(Series {
            label: "Ideal".to_string(),
            points: vec![(1.0, 1.0), (max_threads, max_threads)],
            dashed: true,
        });

        Some(self.render(
            &format!("Speedup ({}×{})", size, size),
            "Threads / processes",
            "Speedup",
            &series,
        ))
    }

    /// Parallel efficiency, one series per derivable (program, size).
    ///
    /// Only sizes in `sizes` that are present in the data are charted;
    /// `None` when nothing is derivable.
    pub fn efficiency_chart(&self, results: &ResultSet, sizes: &[u32]) -> Option<String> {
        let observed = results.sizes();
        let mut series = Vec::new();
        let mut max_threads: f64 = 1.0;

        for program in results.programs() {
            for &size in sizes {
                if !observed.contains(&size) {
                    continue;
                }
                let derived = match derive_speedup(results, &program, size) {
                    Ok(derived) => derived,
                    Err(_) => continue,
                };
                let points: Vec<(f64, f64)> = derived
                    .iter()
                    .map(|d| (f64::from(d.record.key.threads), d.efficiency))
                    .collect();
                if let Some(&(threads, _)) = points.last() {
                    max_threads = max_threads.max(threads);
                }
                series.push(Series {
                    label: format!("{} (N={})", program, size),
                    points,
                    dashed: false,
                });
            }
        }
        if series.is_empty() {
            return None;
        }

        series.push(Series {
            label: "100% efficiency".to_string(),
            points: vec![(1.0, 100.0), (max_threads, 100.0)],
            dashed: true,
        });

        Some(self.render(
            "Parallel Efficiency",
            "Threads / processes",
            "Efficiency (%)",
            &series,
        ))
    }

    fn render(&self, title: &str, x_label: &str, y_label: &str, series: &[Series]) -> String {
        let plot_w = self.width - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = self.height - MARGIN_TOP - MARGIN_BOTTOM;

        let mut x_max: f64 = 1.0;
        let mut y_max: f64 = 0.0;
        for s in series {
            for &(x, y) in &s.points {
                x_max = x_max.max(x);
                y_max = y_max.max(y);
            }
        }
        let x_max = x_max * 1.05;
        let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

        let to_px = |x: f64| MARGIN_LEFT + x / x_max * plot_w;
        let to_py = |y: f64| MARGIN_TOP + plot_h - y / y_max * plot_h;

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n",
            w = self.width,
            h = self.height
        ));
        svg.push_str(&format!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"white\"/>\n",
            self.width, self.height
        ));

        // Title
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"28\" text-anchor=\"middle\" font-size=\"18\" font-weight=\"bold\">{}</text>\n",
            self.width / 2.0,
            title
        ));

        // Horizontal gridlines and y tick labels
        for i in 0..=4 {
            let value = y_max * f64::from(i) / 4.0;
            let y = to_py(value);
            svg.push_str(&format!(
                "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#dddddd\" stroke-width=\"1\"/>\n",
                MARGIN_LEFT,
                y,
                self.width - MARGIN_RIGHT,
                y
            ));
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"12\">{}</text>\n",
                MARGIN_LEFT - 8.0,
                y + 4.0,
                format_tick(value)
            ));
        }

        // X ticks at every observed thread count
        for x in distinct_x(series) {
            let px = to_px(x);
            svg.push_str(&format!(
                "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#999999\" stroke-width=\"1\"/>\n",
                px,
                self.height - MARGIN_BOTTOM,
                px,
                self.height - MARGIN_BOTTOM + 6.0
            ));
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"12\">{}</text>\n",
                px,
                self.height - MARGIN_BOTTOM + 22.0,
                x as u32
            ));
        }

        // Axes
        svg.push_str(&format!(
            "<line x1=\"{ml:.1}\" y1=\"{yb:.1}\" x2=\"{xr:.1}\" y2=\"{yb:.1}\" stroke=\"black\" stroke-width=\"1.5\"/>\n",
            ml = MARGIN_LEFT,
            yb = self.height - MARGIN_BOTTOM,
            xr = self.width - MARGIN_RIGHT
        ));
        svg.push_str(&format!(
            "<line x1=\"{ml:.1}\" y1=\"{mt:.1}\" x2=\"{ml:.1}\" y2=\"{yb:.1}\" stroke=\"black\" stroke-width=\"1.5\"/>\n",
            ml = MARGIN_LEFT,
            mt = MARGIN_TOP,
            yb = self.height - MARGIN_BOTTOM
        ));

        // Axis labels
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"14\">{}</text>\n",
            MARGIN_LEFT + plot_w / 2.0,
            self.height - 14.0,
            x_label
        ));
        svg.push_str(&format!(
            "<text x=\"18\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"14\" transform=\"rotate(-90 18 {:.1})\">{}</text>\n",
            MARGIN_TOP + plot_h / 2.0,
            MARGIN_TOP + plot_h / 2.0,
            y_label
        ));

        // Series
        for (i, s) in series.iter().enumerate() {
            let color = if s.dashed {
                REFERENCE_COLOR
            } else {
                SERIES_COLORS[i % SERIES_COLORS.len()]
            };
            let dash = if s.dashed {
                " stroke-dasharray=\"8 5\""
            } else {
                ""
            };

            let points: Vec<String> = s
                .points
                .iter()
                .map(|&(x, y)| format!("{:.1},{:.1}", to_px(x), to_py(y)))
                .collect();
            svg.push_str(&format!(
                "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"{}/>\n",
                points.join(" "),
                color,
                dash
            ));

            if !s.dashed {
                for &(x, y) in &s.points {
                    svg.push_str(&format!(
                        "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"4\" fill=\"{}\"/>\n",
                        to_px(x),
                        to_py(y),
                        color
                    ));
                }
            }
        }

        // Legend, top-right inside the plot area
        let legend_x = self.width - MARGIN_RIGHT - 200.0;
        for (i, s) in series.iter().enumerate() {
            let color = if s.dashed {
                REFERENCE_COLOR
            } else {
                SERIES_COLORS[i % SERIES_COLORS.len()]
            };
            let y = MARGIN_TOP + 14.0 + 18.0 * i as f64;
            svg.push_str(&format!(
                "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-width=\"2\"/>\n",
                legend_x,
                y,
                legend_x + 26.0,
                y,
                color
            ));
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\">{}</text>\n",
                legend_x + 32.0,
                y + 4.0,
                s.label
            ));
        }

        svg.push_str("</svg>\n");
        svg
    }
}

impl Default for SvgPlotter {
    fn default() -> Self {
        Self::new()
    }
}

fn distinct_x(series: &[Series]) -> Vec<f64> {
    let mut values: Vec<u32> = series
        .iter()
        .filter(|s| !s.dashed)
        .flat_map(|s| s.points.iter().map(|&(x, _)| x as u32))
        .collect();
    values.sort_unstable();
    values.dedup();
    values.into_iter().map(f64::from).collect()
}

fn format_tick(value: f64) -> String {
    if value >= 100.0 {
        format!("{:.0}", value)
    } else if value >= 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ConfigurationKey, ScanReport, SummaryRecord};

    fn record(program: &str, size: u32, threads: u32, mean_us: f64) -> SummaryRecord {
        SummaryRecord {
            key: ConfigurationKey {
                program: program.to_string(),
                size,
                threads,
            },
            mean_us,
            min_us: mean_us,
            max_us: mean_us,
            std_dev_us: 0.0,
            samples: 5,
        }
    }

    fn sample_results() -> ResultSet {
        ResultSet::new(
            vec![
                record("par", 800, 1, 1_000_000.0),
                record("par", 800, 4, 305_000.0),
                record("seq", 800, 1, 1_200_000.0),
            ],
            ScanReport::default(),
        )
    }

    #[test]
    fn time_chart_has_one_polyline_per_program() {
        let svg = SvgPlotter::new().time_chart(&sample_results(), 800).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<polyline").count(), 2);
        assert!(svg.contains("Execution Time (800×800)"));
    }

    #[test]
    fn time_chart_none_for_absent_size() {
        assert!(SvgPlotter::new().time_chart(&sample_results(), 1600).is_none());
    }

    #[test]
    fn speedup_chart_includes_ideal_reference() {
        let svg = SvgPlotter::new()
            .speedup_chart(&sample_results(), 800)
            .unwrap();

        assert!(svg.contains("Ideal"));
        assert!(svg.contains("stroke-dasharray"));
        // par and seq both have baselines, plus the reference line
        assert_eq!(svg.matches("<polyline").count(), 3);
    }

    #[test]
    fn speedup_chart_skips_programs_without_baseline() {
        let results = ResultSet::new(
            vec![
                record("par", 800, 2, 600_000.0),
                record("seq", 800, 1, 1_200_000.0),
            ],
            ScanReport::default(),
        );

        let svg = SvgPlotter::new().speedup_chart(&results, 800).unwrap();

        assert!(!svg.contains(">par<"));
        assert!(svg.contains("seq"));
    }

    #[test]
    fn speedup_chart_none_when_nothing_derivable() {
        let results = ResultSet::new(
            vec![record("par", 800, 2, 600_000.0)],
            ScanReport::default(),
        );

        assert!(SvgPlotter::new().speedup_chart(&results, 800).is_none());
    }

    #[test]
    fn efficiency_chart_respects_the_size_list() {
        let results = ResultSet::new(
            vec![
                record("par", 400, 1, 400_000.0),
                record("par", 400, 4, 110_000.0),
                record("par", 800, 1, 1_000_000.0),
                record("par", 800, 4, 305_000.0),
            ],
            ScanReport::default(),
        );

        let svg = SvgPlotter::new()
            .efficiency_chart(&results, &[800])
            .unwrap();

        assert!(svg.contains("par (N=800)"));
        assert!(!svg.contains("par (N=400)"));
        assert!(svg.contains("100% efficiency"));
    }

    #[test]
    fn efficiency_chart_none_without_baselines() {
        let results = ResultSet::new(
            vec![record("par", 800, 4, 305_000.0)],
            ScanReport::default(),
        );

        assert!(SvgPlotter::new()
            .efficiency_chart(&results, &[400, 800])
            .is_none());
    }
}
