//! @ai:module:intent Draw a chart layout with plotters backends
//! @ai:module:layer infrastructure
//! @ai:module:public_api ChartRenderer, SvgRenderer, BitmapRenderer
//! @ai:module:stateless true

use crate::chart::font::current_font_family;
use crate::chart::layout::ChartLayout;
use crate::error::{Error, Result};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle, FontTransform};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};

/// Pixels reserved below the plot for rotated tick labels.
const TICK_LABEL_AREA: u32 = 110;

/// @ai:intent Trait for chart rendering backends
pub trait ChartRenderer {
    /// @ai:intent Draw one complete chart from its layout
    fn render(&mut self, layout: &ChartLayout) -> Result<()>;
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for Error {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Error::Render(err.to_string())
    }
}

/// @ai:intent Renders charts into an in-memory SVG document
#[derive(Debug, Default)]
pub struct SvgRenderer {
    svg: String,
}

impl SvgRenderer {
    /// @ai:intent Create a new SVG renderer
    /// @ai:effects pure
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent SVG text of the most recent render
    pub fn svg(&self) -> &str {
        &self.svg
    }

    pub fn into_svg(self) -> String {
        self.svg
    }
}

impl ChartRenderer for SvgRenderer {
    /// @ai:effects state:write
    fn render(&mut self, layout: &ChartLayout) -> Result<()> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, layout.size).into_drawing_area();
            draw_chart(&root, layout)?;
        }
        self.svg = svg;
        Ok(())
    }
}

/// @ai:intent Renders charts to a bitmap image file
pub struct BitmapRenderer {
    path: PathBuf,
}

impl BitmapRenderer {
    /// @ai:intent Create a renderer writing to the given image path
    /// @ai:effects pure
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChartRenderer for BitmapRenderer {
    /// @ai:effects fs:write
    fn render(&mut self, layout: &ChartLayout) -> Result<()> {
        let root = BitMapBackend::new(&self.path, layout.size).into_drawing_area();
        draw_chart(&root, layout)?;
        tracing::info!("Chart written to {}", self.path.display());
        Ok(())
    }
}

/// @ai:intent Map a counter-clockwise rotation to the nearest quarter turn plotters supports
/// @ai:effects pure
pub(crate) fn font_transform(degrees_ccw: f64) -> FontTransform {
    let quarter_turns = (degrees_ccw / 90.0).round().rem_euclid(4.0) as u8;
    match quarter_turns {
        1 => FontTransform::Rotate270,
        2 => FontTransform::Rotate180,
        3 => FontTransform::Rotate90,
        _ => FontTransform::None,
    }
}

/// @ai:intent Draw axes, bars, value annotations, tick labels and legend
/// @ai:effects io
fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: &ChartLayout,
) -> Result<()> {
    let family = current_font_family();
    let family = family.as_str();
    let font =
        move |size: f64, style: FontStyle| FontDesc::new(FontFamily::Name(family), size, style);

    root.fill(&WHITE)?;

    let (x_min, x_max) = layout.x_range();
    let (y_min, y_max) = layout.y_range;

    let mut chart = ChartBuilder::on(root)
        .caption(&layout.title, font(24.0, FontStyle::Bold))
        .margin(20)
        .x_label_area_size(TICK_LABEL_AREA)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    // Category ticks are drawn by hand below; plotters would pick numeric ones.
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc(layout.y_axis_label.as_str())
        .axis_desc_style(font(14.0, FontStyle::Bold))
        .label_style(font(12.0, FontStyle::Normal))
        .draw()?;

    let value_style = font(11.0, FontStyle::Normal)
        .transform(font_transform(layout.value_label_rotation))
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    let half_width = layout.bar_width / 2.0;

    for series in &layout.series {
        let color = series.color;

        chart
            .draw_series(series.bars.iter().map(|bar| {
                Rectangle::new(
                    [(bar.center - half_width, 0.0), (bar.center + half_width, bar.value)],
                    color.filled(),
                )
            }))?
            .label(series.model_name.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));

        chart.draw_series(series.bars.iter().map(|bar| {
            Text::new(
                bar.annotation.clone(),
                (bar.center, bar.annotation_y),
                value_style.clone(),
            )
        }))?;
    }

    // plotters rotates text in quarter turns only, so 45 degrees draws vertical.
    let tick_style = font(12.0, FontStyle::Normal)
        .transform(font_transform(layout.tick_label_rotation))
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Top));

    for (label, x) in layout.labels.iter().zip(&layout.tick_positions) {
        let (px, py) = chart.backend_coord(&(*x, y_min));
        root.draw(&Text::new(label.clone(), (px, py + 8), tick_style.clone()))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(font(12.0, FontStyle::Normal))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
