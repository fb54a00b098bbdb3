// Chart builder - Turns generated tables into themed chart descriptors
use crate::domain::chart::{
    ChartDescriptor, ChartSet, ChartTheme, FillMode, LineStyle, PieTrace, ScatterTrace,
    TextInfo, TextPosition, Trace, TraceMode,
};
use crate::domain::dashboard::{PIE_CHART_ID, REVENUE_CHART_ID, SALES_CHART_ID};
use crate::domain::reference::RegionRow;
use crate::domain::series::DailySeries;

pub const SALES_COLOR: &str = "#00d4ff";
pub const REVENUE_COLOR: &str = "#ff6b6b";
pub const REVENUE_FILL: &str = "rgba(255, 107, 107, 0.3)";
pub const REGION_PALETTE: [&str; 5] = ["#00d4ff", "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4"];

pub const SALES_CHART_TITLE: &str = "Cumulative Sales Over Time";
pub const REVENUE_CHART_TITLE: &str = "Cumulative Revenue";
pub const PIE_CHART_TITLE: &str = "Sales by Region";

/// Chart ids and titles in the order `build_charts` emits them.
pub const CHART_TITLES: [(&str, &str); 3] = [
    (SALES_CHART_ID, SALES_CHART_TITLE),
    (REVENUE_CHART_ID, REVENUE_CHART_TITLE),
    (PIE_CHART_ID, PIE_CHART_TITLE),
];

const LINE_WIDTH: u32 = 3;

/// Used for both the initial load and every refresh so the two never drift apart.
#[derive(Debug, Clone, Default)]
pub struct ChartBuilder {
    theme: ChartTheme,
}

impl ChartBuilder {
    pub fn new(theme: ChartTheme) -> Self {
        Self { theme }
    }

    pub fn build_charts(&self, series: &DailySeries, regions: &[RegionRow]) -> ChartSet {
        ChartSet {
            line: self.sales_chart(series),
            area: self.revenue_chart(series),
            pie: self.region_chart(regions),
        }
    }

    fn sales_chart(&self, series: &DailySeries) -> ChartDescriptor {
        let trace = ScatterTrace {
            name: "Sales".to_string(),
            mode: TraceMode::Lines,
            x: series.dates(),
            y: series.sales(),
            line: LineStyle {
                color: SALES_COLOR.to_string(),
                width: LINE_WIDTH,
            },
            fill: FillMode::ToNextY,
            fill_color: None,
        };

        ChartDescriptor::new(
            SALES_CHART_ID,
            vec![Trace::Scatter(trace)],
            self.theme.cartesian_layout(SALES_CHART_TITLE, "Date", "Sales"),
        )
    }

    fn revenue_chart(&self, series: &DailySeries) -> ChartDescriptor {
        let trace = ScatterTrace {
            name: "Revenue".to_string(),
            mode: TraceMode::Lines,
            x: series.dates(),
            y: series.revenue(),
            line: LineStyle {
                color: REVENUE_COLOR.to_string(),
                width: LINE_WIDTH,
            },
            fill: FillMode::ToZeroY,
            fill_color: Some(REVENUE_FILL.to_string()),
        };

        ChartDescriptor::new(
            REVENUE_CHART_ID,
            vec![Trace::Scatter(trace)],
            self.theme
                .cartesian_layout(REVENUE_CHART_TITLE, "Date", "Revenue ($)"),
        )
    }

    fn region_chart(&self, regions: &[RegionRow]) -> ChartDescriptor {
        let trace = PieTrace {
            values: regions.iter().map(|r| r.sales).collect(),
            labels: regions.iter().map(|r| r.region_name.clone()).collect(),
            colors: REGION_PALETTE
                .iter()
                .cycle()
                .take(regions.len())
                .map(|c| c.to_string())
                .collect(),
            text_position: TextPosition::Inside,
            text_info: TextInfo::PercentAndLabel,
        };

        ChartDescriptor::new(
            PIE_CHART_ID,
            vec![Trace::Pie(trace)],
            self.theme.pie_layout(PIE_CHART_TITLE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::Theme;
    use crate::domain::reference::regions;
    use crate::domain::series::{daily_range, DailyIncrements};
    use chrono::NaiveDate;

    fn sample_series() -> DailySeries {
        let dates = daily_range(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
        );
        let increments = DailyIncrements {
            sales: vec![900.0, 1100.0, 1000.0, 950.0],
            revenue: vec![14000.0, 16000.0, 15000.0, 15500.0],
            orders: vec![48, 52, 50, 49],
        };
        DailySeries::accumulate(&dates, &increments)
    }

    fn scatter(chart: &ChartDescriptor) -> &ScatterTrace {
        match &chart.traces[0] {
            Trace::Scatter(s) => s,
            other => panic!("expected scatter trace, got {:?}", other),
        }
    }

    fn pie(chart: &ChartDescriptor) -> &PieTrace {
        match &chart.traces[0] {
            Trace::Pie(p) => p,
            other => panic!("expected pie trace, got {:?}", other),
        }
    }

    #[test]
    fn test_sales_line_chart() {
        let charts = ChartBuilder::default().build_charts(&sample_series(), &regions());
        let trace = scatter(&charts.line);

        assert_eq!(charts.line.id, SALES_CHART_ID);
        assert_eq!(trace.y, vec![900.0, 2000.0, 3000.0, 3950.0]);
        assert_eq!(trace.x.len(), 4);
        assert_eq!(trace.fill, FillMode::ToNextY);
        assert_eq!(trace.line.color, SALES_COLOR);
        assert!(!charts.line.layout.show_legend);
        assert_eq!(charts.line.layout.title, "Cumulative Sales Over Time");
    }

    #[test]
    fn test_revenue_area_chart() {
        let charts = ChartBuilder::default().build_charts(&sample_series(), &regions());
        let trace = scatter(&charts.area);

        assert_eq!(trace.fill, FillMode::ToZeroY);
        assert_eq!(trace.fill_color.as_deref(), Some(REVENUE_FILL));
        assert_eq!(trace.y[3], 60500.0);
        assert_eq!(charts.area.layout.y_axis_title.as_deref(), Some("Revenue ($)"));
    }

    #[test]
    fn test_region_pie_chart_palette_in_order() {
        let charts = ChartBuilder::default().build_charts(&sample_series(), &regions());
        let trace = pie(&charts.pie);

        assert_eq!(trace.labels[0], "North America");
        assert_eq!(trace.values, vec![45_000, 38_000, 52_000, 15_000, 12_000]);
        assert_eq!(trace.colors, REGION_PALETTE.to_vec());
        assert_eq!(trace.text_info, TextInfo::PercentAndLabel);
        assert_eq!(charts.pie.layout.plot_bgcolor, "rgba(0,0,0,0)");
    }

    #[test]
    fn test_palette_cycles_past_five_regions() {
        let mut many = regions().to_vec();
        many.push(RegionRow::new("Africa", 9_000, 5));
        let charts = ChartBuilder::default().build_charts(&DailySeries::default(), &many);
        let trace = pie(&charts.pie);

        assert_eq!(trace.colors.len(), 6);
        assert_eq!(trace.colors[5], REGION_PALETTE[0]);
    }

    #[test]
    fn test_shared_theme_on_all_charts() {
        let charts = ChartBuilder::default().build_charts(&sample_series(), &regions());
        for chart in charts.iter() {
            assert_eq!(chart.layout.theme, Theme::PlotlyDark);
            assert_eq!(chart.layout.paper_bgcolor, "rgba(0,0,0,0)");
            assert_eq!(chart.layout.font.color, "white");
            assert_eq!(chart.layout.title_font.size, Some(20));
            assert_eq!(chart.layout.margin.t, 60);
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = ChartBuilder::default();
        let series = sample_series();
        assert_eq!(
            builder.build_charts(&series, &regions()),
            builder.build_charts(&series, &regions())
        );
    }

    #[test]
    fn test_chart_titles_match_built_charts() {
        let charts = ChartBuilder::new(ChartTheme::default()).build_charts(&sample_series(), &regions());
        let built: Vec<(&str, &str)> = charts
            .iter()
            .map(|c| (c.id.as_str(), c.layout.title.as_str()))
            .collect();

        assert_eq!(built, CHART_TITLES.to_vec());
    }

    #[test]
    fn test_empty_series_keeps_layout() {
        let charts = ChartBuilder::default().build_charts(&DailySeries::default(), &[]);

        assert_eq!(charts.line.point_count(), 0);
        assert_eq!(charts.area.point_count(), 0);
        assert_eq!(charts.pie.point_count(), 0);
        assert_eq!(charts.line.layout.title, "Cumulative Sales Over Time");
        assert_eq!(charts.area.layout.theme, Theme::PlotlyDark);
        assert_eq!(scatter(&charts.line).line.color, SALES_COLOR);
        assert_eq!(scatter(&charts.area).fill_color.as_deref(), Some(REVENUE_FILL));
    }
}
