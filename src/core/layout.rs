use crate::domain::model::{BarRect, Chart, Layer, LayerShape, RenderPlan, SeriesStyle};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Fraction of the data span added on each side of an axis.
const AXIS_MARGIN: f64 = 0.05;
const MIN_X_PADDING: f64 = 0.25;

/// Turn a chart description into concrete geometry.
///
/// Pure: the same chart always yields the same plan.
pub fn plan(chart: &Chart) -> Result<RenderPlan> {
    chart.validate()?;

    let layers: Vec<Layer> = chart
        .series
        .iter()
        .map(|series| {
            let shape = match series.style {
                SeriesStyle::Bar { width, offset, .. } => LayerShape::Bars(
                    series
                        .values
                        .iter()
                        .enumerate()
                        .map(|(i, &height)| {
                            let x_start = i as f64 + offset;
                            BarRect {
                                x_start,
                                x_end: x_start + width,
                                height,
                            }
                        })
                        .collect(),
                ),
                SeriesStyle::Line {
                    marker, line_style, ..
                } => LayerShape::Polyline {
                    points: series
                        .values
                        .iter()
                        .enumerate()
                        .map(|(i, &v)| (i as f64, v))
                        .collect(),
                    marker,
                    line_style,
                },
            };

            Layer {
                name: series.name.clone(),
                color: series.style.color(),
                shape,
            }
        })
        .collect();

    let ticks = chart.categories.ticks();
    let x_range = x_extent(&layers, ticks.iter().map(|t| t.position));
    let y_range = y_extent(&layers);

    tracing::debug!(
        "Planned '{}': {} layers, x={:?}, y={:?}",
        chart.id,
        layers.len(),
        x_range,
        y_range
    );

    Ok(RenderPlan {
        title: chart.title.clone(),
        x_label: chart.x_label.clone(),
        y_label: chart.y_label.clone(),
        x_range,
        y_range,
        ticks,
        layers,
        legend: chart.legend,
    })
}

fn x_extent(layers: &[Layer], tick_positions: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut xs: Vec<f64> = tick_positions.collect();
    for layer in layers {
        match &layer.shape {
            LayerShape::Bars(rects) => {
                xs.extend(rects.iter().flat_map(|r| [r.x_start, r.x_end]));
            }
            LayerShape::Polyline { points, .. } => xs.extend(points.iter().map(|p| p.0)),
        }
    }

    let (min, max) = min_max(xs);
    let padding = ((max - min) * AXIS_MARGIN).max(MIN_X_PADDING);
    (min - padding, max + padding)
}

fn y_extent(layers: &[Layer]) -> (f64, f64) {
    let mut has_bars = false;
    let mut ys = Vec::new();
    for layer in layers {
        match &layer.shape {
            LayerShape::Bars(rects) => {
                has_bars = true;
                ys.extend(rects.iter().map(|r| r.height));
            }
            LayerShape::Polyline { points, .. } => ys.extend(points.iter().map(|p| p.1)),
        }
    }

    // 長條圖由 0 起算
    if has_bars {
        ys.push(0.0);
    }

    let (min, max) = min_max(ys);
    let span = max - min;
    let padding = if span > 0.0 { span * AXIS_MARGIN } else { 1.0 };

    let lower = if has_bars && min >= 0.0 { 0.0 } else { min - padding };
    let upper = if has_bars && max <= 0.0 { 0.0 } else { max + padding };
    (lower, upper)
}

fn min_max(values: Vec<f64>) -> (f64, f64) {
    values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CategoryAxis, Color, LegendPosition, LineStyle, Marker, Series};

    fn line_chart(values: Vec<f64>, labels: &[&str]) -> Chart {
        Chart {
            id: "line".to_string(),
            title: "Line".to_string(),
            x_label: None,
            y_label: Some("ms".to_string()),
            categories: CategoryAxis::new(labels),
            series: vec![Series::new(
                "latency",
                values,
                SeriesStyle::Line {
                    color: Color::Blue,
                    marker: Marker::Circle,
                    line_style: LineStyle::Solid,
                },
            )],
            legend: LegendPosition::UpperLeft,
        }
    }

    #[test]
    fn test_line_points_follow_category_order() {
        let plan = plan(&line_chart(vec![10.0, 30.0, 20.0], &["a", "b", "c"])).unwrap();

        match &plan.layers[0].shape {
            LayerShape::Polyline { points, .. } => {
                assert_eq!(points, &vec![(0.0, 10.0), (1.0, 30.0), (2.0, 20.0)]);
            }
            other => panic!("expected polyline, got {:?}", other),
        }
    }

    #[test]
    fn test_line_y_range_pads_both_ends() {
        let plan = plan(&line_chart(vec![100.0, 200.0], &["a", "b"])).unwrap();
        assert_eq!(plan.y_range, (95.0, 205.0));
        assert_eq!(plan.x_range, (-0.25, 1.25));
    }

    #[test]
    fn test_flat_line_still_has_height() {
        let plan = plan(&line_chart(vec![5.0, 5.0], &["a", "b"])).unwrap();
        assert_eq!(plan.y_range, (4.0, 6.0));
    }

    #[test]
    fn test_bars_start_at_zero() {
        let chart = Chart {
            series: vec![Series::new(
                "kb",
                vec![10.0, 20.0],
                SeriesStyle::Bar {
                    color: Color::Red,
                    width: 0.5,
                    offset: 0.0,
                },
            )],
            ..line_chart(vec![], &["a", "b"])
        };

        let plan = plan(&chart).unwrap();
        assert_eq!(plan.y_range.0, 0.0);
        assert!((plan.y_range.1 - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_chart_is_not_planned() {
        assert!(plan(&line_chart(vec![1.0], &["a", "b"])).is_err());
    }
}
