// Refresh cycle - Drives one generate/build pass through its phases
use crate::application::chart_builder::ChartBuilder;
use crate::application::data_generator::{DataGenerator, GeneratedData};
use crate::domain::chart::ChartSet;
use crate::domain::error::DashboardResult;
use crate::domain::refresh::RefreshPhase;
use rand::Rng;
use std::time::Instant;

/// Output of one completed cycle. Nothing is carried over to the next one.
#[derive(Debug, Clone)]
pub struct RenderedCycle {
    pub data: GeneratedData,
    pub charts: ChartSet,
    pub phases: Vec<RefreshPhase>,
    pub duration_ms: i64,
}

pub struct RefreshCycle {
    phase: RefreshPhase,
    started: Instant,
    visited: Vec<RefreshPhase>,
}

impl RefreshCycle {
    pub fn new() -> Self {
        Self {
            phase: RefreshPhase::Idle,
            started: Instant::now(),
            visited: vec![RefreshPhase::Idle],
        }
    }

    pub fn phase(&self) -> RefreshPhase {
        self.phase
    }

    pub fn advance(&mut self, to: RefreshPhase) -> DashboardResult<()> {
        let from = self.phase();
        self.phase = from.transition(to)?;
        self.visited.push(to);
        tracing::debug!(
            "Refresh phase {:?} -> {:?} after {}ms",
            from,
            to,
            self.started.elapsed().as_millis()
        );
        Ok(())
    }

    pub fn run<R: Rng + ?Sized>(
        mut self,
        generator: &DataGenerator,
        builder: &ChartBuilder,
        rng: &mut R,
    ) -> DashboardResult<RenderedCycle> {
        self.advance(RefreshPhase::Generating)?;
        let data = generator.generate(rng);

        self.advance(RefreshPhase::Building)?;
        let charts = builder.build_charts(&data.series, &data.regions);

        self.advance(RefreshPhase::Rendered)?;
        let duration_ms = self.started.elapsed().as_millis() as i64;
        self.advance(RefreshPhase::Idle)?;

        Ok(RenderedCycle {
            data,
            charts,
            phases: self.visited,
            duration_ms,
        })
    }
}

impl Default for RefreshCycle {
    fn default() -> Self {
        Self::new()
    }
}
