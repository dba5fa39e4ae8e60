use crate::domain::model::{CategoryAxis, Chart, Color, LegendPosition, Series, SeriesStyle};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub const DEFAULT_BAR_WIDTH: f64 = 0.35;

/// Builds a grouped bar chart: one bar per series in every category,
/// series `k` shifted right by `k * bar_width`.
#[derive(Debug, Clone)]
pub struct GroupedBarChart {
    id: String,
    title: String,
    x_label: Option<String>,
    y_label: Option<String>,
    labels: Vec<String>,
    bar_width: f64,
    series: Vec<(String, Vec<f64>, Color)>,
    legend: LegendPosition,
}

impl GroupedBarChart {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            x_label: None,
            y_label: None,
            labels: Vec::new(),
            bar_width: DEFAULT_BAR_WIDTH,
            series: Vec::new(),
            legend: LegendPosition::UpperLeft,
        }
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn categories<S: AsRef<str>>(mut self, labels: &[S]) -> Self {
        self.labels = labels.iter().map(|l| l.as_ref().to_string()).collect();
        self
    }

    pub fn bar_width(mut self, width: f64) -> Self {
        self.bar_width = width;
        self
    }

    pub fn series(mut self, name: impl Into<String>, values: &[f64], color: Color) -> Self {
        self.series.push((name.into(), values.to_vec(), color));
        self
    }

    pub fn legend(mut self, position: LegendPosition) -> Self {
        self.legend = position;
        self
    }

    pub fn build(self) -> Result<Chart> {
        let width = self.bar_width;
        let groups = self.series.len().max(1);

        // 刻度置於每組長條的中央
        let tick_offset = width * (groups - 1) as f64 / 2.0;

        let series = self
            .series
            .into_iter()
            .enumerate()
            .map(|(k, (name, values, color))| {
                Series::new(
                    name,
                    values,
                    SeriesStyle::Bar {
                        color,
                        width,
                        offset: k as f64 * width,
                    },
                )
            })
            .collect();

        let chart = Chart {
            id: self.id,
            title: self.title,
            x_label: self.x_label,
            y_label: self.y_label,
            categories: CategoryAxis::new(&self.labels).with_tick_offset(tick_offset),
            series,
            legend: self.legend,
        };

        chart.validate()?;
        Ok(chart)
    }
}

/// Storage consumption without and with provenance tracking, one bar pair
/// per category.
pub fn storage_comparison<S: AsRef<str>>(
    without_feature: &[f64],
    with_feature: &[f64],
    labels: &[S],
    bar_width: f64,
) -> Result<Chart> {
    GroupedBarChart::new("block_storage", "Block Storage Consumption")
        .x_label("# of Manufactured iPhones")
        .y_label("KB")
        .categories(labels)
        .bar_width(bar_width)
        .series("Without Provenance Enabled", without_feature, Color::Red)
        .series("With Provenance Enabled", with_feature, Color::Yellow)
        .legend(LegendPosition::UpperLeft)
        .build()
}
