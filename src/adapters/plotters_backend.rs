use crate::config::OutputFormat;
use crate::domain::model::{
    Color as ChartColor, LayerShape, LegendPosition, LineStyle, Marker, RenderPlan, Tick,
};
use crate::domain::ports::{RenderBackend, RenderOutput};
use crate::utils::error::{backend_error, ChartError, Result};
use plotters::coord::ranged1d::{KeyPointHint, NoDefaultFormatting, Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};
use std::ops::Range;
use std::path::PathBuf;
use std::sync::OnceLock;

pub const DEFAULT_SIZE: (u32, u32) = (800, 600);

const FONT_FAMILY: &str = "sans-serif";
static EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
static FONT_REGISTERED: OnceLock<bool> = OnceLock::new();
/// Writes the chart to an SVG or PNG file.
#[derive(Debug, Clone)]
pub struct PlottersBackend {
    path: PathBuf,
    format: OutputFormat,
    size: (u32, u32),
}

impl PlottersBackend {
    pub fn new(path: impl Into<PathBuf>, format: OutputFormat, size: (u32, u32)) -> Self {
        Self {
            path: path.into(),
            format,
            size,
        }
    }
}

impl RenderBackend for PlottersBackend {
    fn name(&self) -> &str {
        match self.format {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }

    fn render(&self, plan: &RenderPlan) -> Result<RenderOutput> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        match self.format {
            OutputFormat::Svg => {
                draw_plan(SVGBackend::new(&self.path, self.size).into_drawing_area(), plan)?
            }
            OutputFormat::Png => {
                draw_plan(BitMapBackend::new(&self.path, self.size).into_drawing_area(), plan)?
            }
        }

        Ok(RenderOutput::File(self.path.clone()))
    }
}

/// Render to an in-memory SVG document.
pub fn render_svg_string(plan: &RenderPlan, size: (u32, u32)) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw_plan(root, plan)?;
    }
    Ok(svg)
}

/// Render to a packed RGB8 buffer of `width * height * 3` bytes.
pub fn render_rgb_buffer(plan: &RenderPlan, size: (u32, u32)) -> Result<Vec<u8>> {
    let mut buffer = vec![0u8; size.0 as usize * size.1 as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
        draw_plan(root, plan)?;
    }
    Ok(buffer)
}

/// 所有文字都以內嵌字型繪製，點陣輸出不依賴系統字型
fn register_embedded_font() -> Result<()> {
    let registered = *FONT_REGISTERED.get_or_init(|| {
        register_font(FONT_FAMILY, FontStyle::Normal, EMBEDDED_FONT).is_ok()
    });

    if registered {
        Ok(())
    } else {
        Err(ChartError::BackendError {
            message: "embedded DejaVu Sans font could not be parsed".to_string(),
        })
    }
}

fn rgb(color: ChartColor) -> RGBColor {
    let (r, g, b) = color.rgb();
    RGBColor(r, g, b)
}

fn label_position(position: LegendPosition) -> SeriesLabelPosition {
    match position {
        LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
        LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
        LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
    }
}

/// Numeric x axis whose only key points are the category ticks, labeled
/// with the category names.
struct CategoryCoord {
    inner: RangedCoordf64,
    ticks: Vec<Tick>,
}

impl CategoryCoord {
    fn new((start, end): (f64, f64), ticks: &[Tick]) -> Self {
        Self {
            inner: (start..end).into(),
            ticks: ticks.to_vec(),
        }
    }
}

impl Ranged for CategoryCoord {
    type FormatOption = NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.inner.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        // 不畫細格線
        if hint.weight().allow_light_points() {
            return Vec::new();
        }
        self.ticks.iter().map(|t| t.position).collect()
    }

    fn range(&self) -> Range<f64> {
        self.inner.range()
    }
}

impl ValueFormatter<f64> for CategoryCoord {
    fn format(value: &f64) -> String {
        value.to_string()
    }

    fn format_ext(&self, value: &f64) -> String {
        self.ticks
            .iter()
            .find(|t| (t.position - value).abs() < 1e-9)
            .map(|t| t.label.clone())
            .unwrap_or_default()
    }
}

fn draw_plan<DB: DrawingBackend>(root: DrawingArea<DB, Shift>, plan: &RenderPlan) -> Result<()> {
    register_embedded_font()?;
    root.fill(&WHITE).map_err(backend_error)?;

    let (y_min, y_max) = plan.y_range;

    let mut chart = ChartBuilder::on(&root)
        .caption(&plan.title, (FONT_FAMILY, 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(CategoryCoord::new(plan.x_range, &plan.ticks), y_min..y_max)
        .map_err(backend_error)?;

    let mut mesh = chart.configure_mesh();
    mesh.disable_x_mesh()
        .x_labels(plan.ticks.len())
        .label_style((FONT_FAMILY, 14));
    if let Some(x_label) = &plan.x_label {
        mesh.x_desc(x_label.as_str());
    }
    if let Some(y_label) = &plan.y_label {
        mesh.y_desc(y_label.as_str());
    }
    mesh.draw().map_err(backend_error)?;

    for layer in &plan.layers {
        let color = rgb(layer.color);

        match &layer.shape {
            LayerShape::Bars(rects) => {
                chart
                    .draw_series(rects.iter().map(|r| {
                        Rectangle::new([(r.x_start, 0.0), (r.x_end, r.height)], color.filled())
                    }))
                    .map_err(backend_error)?
                    .label(layer.name.as_str())
                    .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
            }
            LayerShape::Polyline {
                points,
                marker,
                line_style,
            } => {
                let with_circle = *marker == Marker::Circle;

                if *line_style == LineStyle::Solid {
                    let line = chart
                        .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
                        .map_err(backend_error)?
                        .label(layer.name.as_str());
                    if with_circle {
                        line.legend(move |(x, y)| {
                            EmptyElement::at((x, y))
                                + PathElement::new(vec![(0, 0), (16, 0)], color.stroke_width(2))
                                + Circle::new((8, 0), 4, color.filled())
                        });
                    } else {
                        line.legend(move |(x, y)| {
                            PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2))
                        });
                    }
                }

                if with_circle {
                    let markers = chart
                        .draw_series(points.iter().map(|&p| Circle::new(p, 4, color.filled())))
                        .map_err(backend_error)?;
                    if *line_style != LineStyle::Solid {
                        markers
                            .label(layer.name.as_str())
                            .legend(move |(x, y)| Circle::new((x + 8, y), 4, color.filled()));
                    }
                }
            }
        }
    }

    chart
        .configure_series_labels()
        .position(label_position(plan.legend))
        .label_font((FONT_FAMILY, 14))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(backend_error)?;

    root.present().map_err(backend_error)?;
    Ok(())
}
