// Streaming dashboard service - Progressive loading over a message channel
use crate::application::chart_builder::CHART_TITLES;
use crate::application::dashboard_service::DashboardService;
use crate::domain::chart::ChartDescriptor;
use crate::domain::dashboard::Layout;
use crate::domain::reference::MetricCard;
use crate::domain::table::TableDescriptor;
use rand::rngs::StdRng;
use serde::Serialize;
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSkeleton {
    pub id: String,
    pub title: String,
}

/// Everything that does not depend on the random draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSkeleton {
    pub layout: Layout,
    pub metrics: Vec<MetricCard>,
    pub table: TableDescriptor,
    pub charts: Vec<ChartSkeleton>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionEvent {
    pub widgets: usize,
    pub duration_ms: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamMessage {
    Skeleton(DashboardSkeleton),
    Chart(ChartDescriptor),
    Complete(CompletionEvent),
}

#[derive(Clone)]
pub struct StreamingDashboardService {
    dashboard: DashboardService,
}

impl StreamingDashboardService {
    pub fn new(dashboard: DashboardService) -> Self {
        Self { dashboard }
    }

    /// Sends the skeleton before any data is generated, then hands the render
    /// to a task that sends one message per chart followed by completion.
    pub async fn stream_dashboard(&self, rng: StdRng) -> mpsc::Receiver<StreamMessage> {
        let (tx, rx) = mpsc::channel(16);
        let start_time = Instant::now();

        let skeleton = self.build_skeleton();
        let total_widgets = skeleton.metrics.len() + skeleton.charts.len() + 1;
        let _ = tx.send(StreamMessage::Skeleton(skeleton)).await;

        let dashboard = self.dashboard.clone();
        tokio::spawn(async move {
            let mut rng = rng;
            let rendered = match dashboard.run_cycle(&mut rng) {
                Ok(rendered) => rendered,
                Err(e) => {
                    tracing::error!("Stream render failed: {}", e);
                    return;
                }
            };

            for chart in rendered.charts.into_vec() {
                tracing::debug!("Streaming chart {}", chart.id);
                if tx.send(StreamMessage::Chart(chart)).await.is_err() {
                    tracing::debug!("Stream client went away");
                    return;
                }
            }

            let complete = CompletionEvent {
                widgets: total_widgets,
                duration_ms: start_time.elapsed().as_millis() as i64,
            };
            let _ = tx.send(StreamMessage::Complete(complete)).await;
        });

        rx
    }

    pub fn build_skeleton(&self) -> DashboardSkeleton {
        DashboardSkeleton {
            layout: self.dashboard.layout().clone(),
            metrics: self.dashboard.metrics(),
            table: self.dashboard.startup_table().clone(),
            charts: CHART_TITLES
                .iter()
                .map(|(id, title)| ChartSkeleton {
                    id: id.to_string(),
                    title: title.to_string(),
                })
                .collect(),
        }
    }
}
