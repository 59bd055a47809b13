//! Per-tick data collection.

use crate::model::WolfSheep;
use serde::{Deserialize, Serialize};
use wolfsheep_core::{Result, TickMetrics};

/// Observer invoked once after every completed tick.
///
/// The model is borrowed read-only; collectors cannot change the simulation.
pub trait Collector {
    fn collect(&mut self, model: &WolfSheep);
}

impl<F> Collector for F
where
    F: FnMut(&WolfSheep),
{
    fn collect(&mut self, model: &WolfSheep) {
        (*self)(model)
    }
}

/// History of [`TickMetrics`], one row per tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataCollector {
    records: Vec<TickMetrics>,
}

impl DataCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[TickMetrics] {
        &self.records
    }

    pub fn latest(&self) -> Option<&TickMetrics> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn record(&mut self, metrics: TickMetrics) {
        self.records.push(metrics);
    }

    /// One JSON object per line.
    pub fn to_json_lines(&self) -> Result<String> {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&serde_json::to_string(record)?);
            out.push('\n');
        }
        Ok(out)
    }
}

impl Collector for DataCollector {
    fn collect(&mut self, model: &WolfSheep) {
        self.record(model.metrics());
    }
}
