// Chart descriptor domain models
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Theme {
    #[serde(rename = "plotly_dark")]
    PlotlyDark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceMode {
    Lines,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    ToZeroY,
    ToNextY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    Inside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextInfo {
    #[serde(rename = "percent+label")]
    PercentAndLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub name: String,
    pub mode: TraceMode,
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
    pub line: LineStyle,
    pub fill: FillMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub values: Vec<u64>,
    pub labels: Vec<String>,
    pub colors: Vec<String>,
    pub text_position: TextPosition,
    pub text_info: TextInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Pie(PieTrace),
}

impl Trace {
    pub fn point_count(&self) -> usize {
        match self {
            Trace::Scatter(s) => s.y.len(),
            Trace::Pie(p) => p.values.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_title: Option<String>,
    pub theme: Theme,
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
    pub font: Font,
    pub title_font: Font,
    pub show_legend: bool,
    pub margin: Margin,
}

/// Shared look applied to every chart on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub theme: Theme,
    pub paper_bgcolor: String,
    /// Plot area behind cartesian traces.
    pub plot_bgcolor: String,
    /// Plot area behind pie traces.
    pub pie_plot_bgcolor: String,
    pub font_color: String,
    pub title_font_size: u32,
    pub margin: Margin,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            theme: Theme::PlotlyDark,
            paper_bgcolor: "rgba(0,0,0,0)".to_string(),
            plot_bgcolor: "rgba(255,255,255,0.9)".to_string(),
            pie_plot_bgcolor: "rgba(0,0,0,0)".to_string(),
            font_color: "white".to_string(),
            title_font_size: 20,
            margin: Margin {
                l: 40,
                r: 40,
                t: 60,
                b: 40,
            },
        }
    }
}

impl ChartTheme {
    pub fn cartesian_layout(&self, title: &str, x_axis: &str, y_axis: &str) -> ChartLayout {
        ChartLayout {
            x_axis_title: Some(x_axis.to_string()),
            y_axis_title: Some(y_axis.to_string()),
            show_legend: false,
            ..self.base_layout(title, &self.plot_bgcolor)
        }
    }

    pub fn pie_layout(&self, title: &str) -> ChartLayout {
        self.base_layout(title, &self.pie_plot_bgcolor)
    }

    fn base_layout(&self, title: &str, plot_bgcolor: &str) -> ChartLayout {
        ChartLayout {
            title: title.to_string(),
            x_axis_title: None,
            y_axis_title: None,
            theme: self.theme,
            paper_bgcolor: self.paper_bgcolor.clone(),
            plot_bgcolor: plot_bgcolor.to_string(),
            font: Font {
                color: self.font_color.clone(),
                size: None,
            },
            title_font: Font {
                color: self.font_color.clone(),
                size: Some(self.title_font_size),
            },
            show_legend: true,
            margin: self.margin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescriptor {
    pub id: String,
    pub traces: Vec<Trace>,
    pub layout: ChartLayout,
}

impl ChartDescriptor {
    pub fn new(id: &str, traces: Vec<Trace>, layout: ChartLayout) -> Self {
        Self {
            id: id.to_string(),
            traces,
            layout,
        }
    }

    pub fn point_count(&self) -> usize {
        self.traces.iter().map(Trace::point_count).sum()
    }
}

/// The three dashboard charts, rebuilt together on every refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSet {
    pub line: ChartDescriptor,
    pub area: ChartDescriptor,
    pub pie: ChartDescriptor,
}

impl ChartSet {
    pub fn iter(&self) -> impl Iterator<Item = &ChartDescriptor> {
        [&self.line, &self.area, &self.pie].into_iter()
    }

    pub fn into_vec(self) -> Vec<ChartDescriptor> {
        vec![self.line, self.area, self.pie]
    }
}
