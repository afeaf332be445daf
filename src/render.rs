use std::{
    error::Error,
    path::{Path, PathBuf},
};

use plotters::prelude::*;
use tracing::instrument;

use crate::domain::{
    QualifyingOffer, RankedSalaryList, format_dollars,
    stats::{BoxSummary, HISTOGRAM_BINS, Histogram, Percentiles, ReferenceLine},
};

type DrawResult = Result<(), Box<dyn Error>>;

const FONT: &str = "sans-serif";
const SALARY_AXIS: &str = "Salary (USD)";

/// Failure to draw or write a figure.
#[derive(Debug, thiserror::Error)]
#[error("failed to render {}: {message}", path.display())]
pub struct RenderError {
    path: PathBuf,
    message: String,
}

impl RenderError {
    /// The figure that could not be written.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Draws a horizontal box-and-whisker plot of the salaries to `path` as a
/// PNG.
///
/// # Errors
///
/// Returns an error if the figure cannot be drawn or the file cannot be
/// written. The parent directory is not created.
#[instrument(level = "debug", skip(ranked))]
pub fn box_plot(ranked: &RankedSalaryList, path: &Path) -> Result<(), RenderError> {
    draw_box_plot(&BoxSummary::from_ranked(ranked), path).map_err(|e| RenderError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Draws a histogram of the salaries to `path` as a PNG.
///
/// The qualifying offer and the 25th, 75th and 90th percentiles are marked
/// as dashed vertical lines with a legend.
///
/// # Errors
///
/// Returns an error if the figure cannot be drawn or the file cannot be
/// written. The parent directory is not created.
#[instrument(level = "debug", skip(ranked))]
pub fn histogram(
    ranked: &RankedSalaryList,
    offer: QualifyingOffer,
    path: &Path,
) -> Result<(), RenderError> {
    let hist = Histogram::from_ranked(ranked, HISTOGRAM_BINS);
    let lines = ReferenceLine::for_histogram(offer, &Percentiles::from_ranked(ranked));
    let title = format!("Distribution of Top {} Salaries", ranked.len());

    draw_histogram(&hist, &lines, &title, path).map_err(|e| RenderError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn draw_box_plot(summary: &BoxSummary, path: &Path) -> DrawResult {
    let root = BitMapBackend::new(path, (1000, 1000)).into_drawing_area();
    root.fill(&WHITE)?;

    let (low, high) = padded(summary.min, summary.max);
    let mut chart = ChartBuilder::on(&root)
        .caption("Box and Whisker Salary", (FONT, 30))
        .margin(30)
        .x_label_area_size(70)
        .y_label_area_size(20)
        .build_cartesian_2d(low..high, 0.0..2.0)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(0)
        .x_desc(SALARY_AXIS)
        .axis_desc_style((FONT, 15))
        .x_label_formatter(&|v| format!("${}", format_dollars(*v, 0)))
        .draw()?;

    let style = BLUE.stroke_width(2);
    chart.draw_series(std::iter::once(Rectangle::new(
        [(summary.q1, 0.75), (summary.q3, 1.25)],
        style,
    )))?;
    chart.draw_series([
        PathElement::new(
            vec![(summary.median, 0.75), (summary.median, 1.25)],
            RED.stroke_width(2),
        ),
        PathElement::new(vec![(summary.lower_whisker, 1.0), (summary.q1, 1.0)], style),
        PathElement::new(vec![(summary.q3, 1.0), (summary.upper_whisker, 1.0)], style),
        PathElement::new(
            vec![(summary.lower_whisker, 0.9), (summary.lower_whisker, 1.1)],
            style,
        ),
        PathElement::new(
            vec![(summary.upper_whisker, 0.9), (summary.upper_whisker, 1.1)],
            style,
        ),
    ])?;
    chart.draw_series(
        summary
            .outliers
            .iter()
            .map(|&x| Circle::new((x, 1.0), 4, BLACK.stroke_width(1))),
    )?;

    root.present()?;
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn draw_histogram(hist: &Histogram, lines: &[ReferenceLine], title: &str, path: &Path) -> DrawResult {
    let root = BitMapBackend::new(path, (1500, 1500)).into_drawing_area();
    root.fill(&WHITE)?;

    let low = hist.edges.first().copied().unwrap_or_default();
    let high = hist.edges.last().copied().unwrap_or_default();
    let (low, high) = padded(low, high);
    let top = (hist.max_count() as f64).mul_add(1.1, 1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (FONT, 40))
        .margin(30)
        .x_label_area_size(80)
        .y_label_area_size(80)
        .build_cartesian_2d(low..high, 0.0..top)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(SALARY_AXIS)
        .y_desc("Number of Players")
        .axis_desc_style((FONT, 30))
        .x_label_formatter(&|v| format!("${}", format_dollars(*v, 0)))
        .y_label_formatter(&|v| format!("{v:.0}"))
        .draw()?;

    chart.draw_series(hist.bins().map(|(start, end, count)| {
        Rectangle::new([(start, 0.0), (end, count as f64)], BLUE.mix(0.6).filled())
    }))?;

    let colors = [BLACK, RED, MAGENTA, RGBColor(255, 165, 0)];
    for (line, color) in lines.iter().zip(colors) {
        chart
            .draw_series(DashedLineSeries::new(
                [(line.value, 0.0), (line.value, top)],
                12,
                8,
                color.stroke_width(2),
            ))?
            .label(line.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT, 25))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Widens `[low, high]` by 5% either side so markers at the edges stay
/// visible.
fn padded(low: f64, high: f64) -> (f64, f64) {
    let pad = ((high - low) * 0.05).max(1.0);
    (low - pad, high + pad)
}
