use crate::utils::error::{ChartError, Result};
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_range, validate_series_length, Validate,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Blue,
}

impl Color {
    /// RGB triple matching the single-letter matplotlib colors `r`, `y`, `b`.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Red => (255, 0, 0),
            Color::Yellow => (191, 191, 0),
            Color::Blue => (0, 0, 255),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    None,
    Circle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    None,
    Solid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SeriesStyle {
    /// Bars of `width` drawn at `index + offset`.
    Bar { color: Color, width: f64, offset: f64 },
    Line {
        color: Color,
        marker: Marker,
        line_style: LineStyle,
    },
}

impl SeriesStyle {
    pub fn color(&self) -> Color {
        match self {
            SeriesStyle::Bar { color, .. } | SeriesStyle::Line { color, .. } => *color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    pub style: SeriesStyle,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>, style: SeriesStyle) -> Self {
        Self {
            name: name.into(),
            values,
            style,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAxis {
    pub labels: Vec<String>,
    /// Tick `i` sits at `i + tick_offset`.
    pub tick_offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

impl CategoryAxis {
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        Self {
            labels: labels.iter().map(|l| l.as_ref().to_string()).collect(),
            tick_offset: 0.0,
        }
    }

    pub fn with_tick_offset(mut self, offset: f64) -> Self {
        self.tick_offset = offset;
        self
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn ticks(&self) -> Vec<Tick> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| Tick {
                position: i as f64 + self.tick_offset,
                label: label.clone(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// File stem used for the default output name.
    pub id: String,
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub categories: CategoryAxis,
    pub series: Vec<Series>,
    pub legend: LegendPosition,
}

impl Validate for Chart {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("title", &self.title)?;

        if self.categories.is_empty() || self.series.is_empty() {
            return Err(ChartError::EmptyChart {
                chart: self.id.clone(),
            });
        }

        for series in &self.series {
            validate_series_length(&series.name, series.len(), self.categories.len())?;
            validate_finite(&series.name, &series.values)?;

            if let SeriesStyle::Bar { width, offset, .. } = series.style {
                validate_range(
                    &format!("{}.bar_width", series.name),
                    width,
                    f64::MIN_POSITIVE,
                    1.0,
                )?;
                // 每組長條必須留在自己的類別格內
                validate_range(&format!("{}.bar_offset", series.name), offset + width, width, 1.0)?;
            }
        }

        Ok(())
    }
}

/// A resolved, backend-independent drawing of a [`Chart`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub ticks: Vec<Tick>,
    pub layers: Vec<Layer>,
    pub legend: LegendPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub name: String,
    pub color: Color,
    pub shape: LayerShape,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LayerShape {
    Bars(Vec<BarRect>),
    Polyline {
        points: Vec<(f64, f64)>,
        marker: Marker,
        line_style: LineStyle,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarRect {
    pub x_start: f64,
    pub x_end: f64,
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(offset: f64, values: Vec<f64>) -> Series {
        Series::new(
            "kb",
            values,
            SeriesStyle::Bar {
                color: Color::Red,
                width: 0.35,
                offset,
            },
        )
    }

    fn chart_with(series: Vec<Series>, labels: &[&str]) -> Chart {
        Chart {
            id: "test".to_string(),
            title: "Test".to_string(),
            x_label: None,
            y_label: None,
            categories: CategoryAxis::new(labels),
            series,
            legend: LegendPosition::UpperLeft,
        }
    }

    #[test]
    fn test_ticks_apply_offset() {
        let axis = CategoryAxis::new(&["100", "200"]).with_tick_offset(0.175);
        let ticks = axis.ticks();

        assert_eq!(ticks.len(), 2);
        assert!((ticks[1].position - 1.175).abs() < 1e-12);
        assert_eq!(ticks[1].label, "200");
    }

    #[test]
    fn test_chart_rejects_mismatched_series() {
        let chart = chart_with(vec![bar(0.0, vec![1.0, 2.0, 3.0])], &["a", "b"]);
        assert!(matches!(
            chart.validate(),
            Err(ChartError::LengthMismatch {
                expected: 2,
                actual: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_chart_rejects_empty_axis() {
        let chart = chart_with(vec![bar(0.0, vec![])], &[]);
        assert!(matches!(chart.validate(), Err(ChartError::EmptyChart { .. })));
    }

    #[test]
    fn test_bar_group_must_fit_its_slot() {
        let ok = chart_with(vec![bar(0.35, vec![1.0])], &["a"]);
        assert!(ok.validate().is_ok());

        let overflowing = chart_with(vec![bar(0.7, vec![1.0])], &["a"]);
        assert!(matches!(
            overflowing.validate(),
            Err(ChartError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_series_style_serializes_with_kind_tag() {
        let json = serde_json::to_value(SeriesStyle::Line {
            color: Color::Blue,
            marker: Marker::Circle,
            line_style: LineStyle::Solid,
        })
        .unwrap();

        assert_eq!(json["kind"], "line");
        assert_eq!(json["marker"], "circle");
        assert_eq!(json["color"], "blue");
    }
}
