// Dashboard service - Use cases for the initial render and chart refreshes
use crate::application::chart_builder::ChartBuilder;
use crate::application::data_generator::{render_rng, DataGenerator};
use crate::application::refresh_cycle::{RefreshCycle, RenderedCycle};
use crate::application::table_builder::build_table;
use crate::domain::chart::{ChartDescriptor, ChartTheme};
use crate::domain::dashboard::{DashboardData, Layout, SALES_CHART_ID};
use crate::domain::error::{DashboardError, DashboardResult};
use crate::domain::reference::{self, MetricCard};
use crate::domain::table::TableDescriptor;
use crate::infrastructure::config::{GeneratorSettings, RefreshSettings};
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;

/// Charts from a refresh trigger, plus the table when it is rebuilt too.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshedView {
    pub charts: Vec<ChartDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<TableDescriptor>,
}

#[derive(Clone)]
pub struct DashboardService {
    generator: DataGenerator,
    builder: ChartBuilder,
    refresh: RefreshSettings,
    seed: Option<u64>,
    layout: Layout,
    // Built once at startup; reused unless refresh.rebuild_table is set.
    startup_table: TableDescriptor,
}

impl DashboardService {
    pub fn new(settings: &GeneratorSettings, refresh: RefreshSettings) -> DashboardResult<Self> {
        let generator = DataGenerator::new(settings)?;
        tracing::info!(
            "Generator covers {} days from {} to {}",
            generator.days(),
            settings.start_date,
            settings.end_date
        );

        let layout = Layout::default();
        tracing::debug!("Layout places charts {:?}", layout.chart_ids());

        Ok(Self {
            generator,
            builder: ChartBuilder::new(ChartTheme::default()),
            refresh,
            seed: settings.seed,
            layout,
            startup_table: build_table(&reference::products()),
        })
    }

    /// Random source for one render.
    pub fn rng(&self) -> StdRng {
        render_rng(self.seed)
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn metrics(&self) -> Vec<MetricCard> {
        reference::metric_cards().to_vec()
    }

    /// Initial page load: one full cycle plus table, metrics and layout.
    pub fn compute_dashboard_data<R: Rng + ?Sized>(&self, rng: &mut R) -> DashboardResult<DashboardData> {
        let rendered = self.run_cycle(rng)?;
        let table = self.table_for(&rendered);

        Ok(DashboardData {
            charts: rendered.charts.into_vec(),
            table,
            metrics: self.metrics(),
            layout: self.layout.clone(),
        })
    }

    /// Only the sales chart's identity is wired as a trigger.
    pub fn refresh_charts<R: Rng + ?Sized>(
        &self,
        trigger: &str,
        rng: &mut R,
    ) -> DashboardResult<RefreshedView> {
        if trigger != SALES_CHART_ID {
            return Err(DashboardError::UnknownTrigger(trigger.to_string()));
        }

        let rendered = self.run_cycle(rng)?;
        let table = self
            .refresh
            .rebuild_table
            .then(|| build_table(&rendered.data.products));

        Ok(RefreshedView {
            charts: rendered.charts.into_vec(),
            table,
        })
    }

    pub fn run_cycle<R: Rng + ?Sized>(&self, rng: &mut R) -> DashboardResult<RenderedCycle> {
        let rendered = RefreshCycle::new().run(&self.generator, &self.builder, rng)?;
        tracing::debug!(
            "Rendered {} charts ({} points) from {} daily records, {} orders, in {}ms",
            rendered.charts.iter().count(),
            rendered.charts.iter().map(|c| c.point_count()).sum::<usize>(),
            rendered.data.series.len(),
            rendered.data.series.orders().last().copied().unwrap_or(0),
            rendered.duration_ms
        );
        Ok(rendered)
    }

    /// Table snapshot taken at construction.
    pub fn startup_table(&self) -> &TableDescriptor {
        &self.startup_table
    }

    pub fn table_for(&self, rendered: &RenderedCycle) -> TableDescriptor {
        if self.refresh.rebuild_table {
            build_table(&rendered.data.products)
        } else {
            self.startup_table.clone()
        }
    }
}
