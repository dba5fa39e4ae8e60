use crate::domain::model::{
    CategoryAxis, Chart, Color, LegendPosition, LineStyle, Marker, Series, SeriesStyle,
};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

#[derive(Debug, Clone)]
pub struct LineChart {
    id: String,
    title: String,
    x_label: Option<String>,
    y_label: Option<String>,
    labels: Vec<String>,
    series: Vec<Series>,
    legend: LegendPosition,
}

impl LineChart {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            x_label: None,
            y_label: None,
            labels: Vec::new(),
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

    pub fn series(
        mut self,
        name: impl Into<String>,
        values: &[f64],
        color: Color,
        marker: Marker,
        line_style: LineStyle,
    ) -> Self {
        self.series.push(Series::new(
            name,
            values.to_vec(),
            SeriesStyle::Line {
                color,
                marker,
                line_style,
            },
        ));
        self
    }

    pub fn legend(mut self, position: LegendPosition) -> Self {
        self.legend = position;
        self
    }

    pub fn build(self) -> Result<Chart> {
        let chart = Chart {
            id: self.id,
            title: self.title,
            x_label: self.x_label,
            y_label: self.y_label,
            categories: CategoryAxis::new(&self.labels),
            series: self.series,
            legend: self.legend,
        };

        chart.validate()?;
        Ok(chart)
    }
}

/// Query latency in milliseconds as a solid blue line with circle markers.
///
/// `labels` must hold exactly one entry per latency; extra or missing labels
/// are reported, never trimmed.
pub fn latency_line<S: AsRef<str>>(latencies: &[f64], labels: &[S]) -> Result<Chart> {
    LineChart::new("query_latency", "Query Latency")
        .y_label("ms")
        .categories(labels)
        .series(
            "latency",
            latencies,
            Color::Blue,
            Marker::Circle,
            LineStyle::Solid,
        )
        .legend(LegendPosition::UpperLeft)
        .build()
}
