//! Round-trip orchestration: seeds the sample tables from generated
//! data and reads them back into a chart figure. The figure is always
//! built from database rows, never from the in-memory generation.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::chart::Figure;
use crate::config::Config;
use crate::db::{AbscissaSample, CurveCount, DatabaseError, DatabaseManager, OrdinateSample};
use crate::signal;

pub mod logic;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    pub abscissa_inserted: usize,
    pub ordinate_inserted: usize,
}

impl SeedReport {
    pub fn skipped(&self) -> bool {
        self.abscissa_inserted == 0 && self.ordinate_inserted == 0
    }
}

pub struct DatasetService {
    db: Arc<DatabaseManager>,
    config: Arc<Config>,
}

impl DatasetService {
    pub fn new(db: Arc<DatabaseManager>, config: Arc<Config>) -> Self {
        Self { db, config }
    }

    /// Generates samples and bulk-inserts them. Each table is only
    /// written when it is empty, so repeated runs against the same
    /// database leave existing rows untouched.
    pub async fn seed(&self) -> Result<SeedReport, DatasetError> {
        let set = signal::generate(&self.config.sampling);
        let now = Utc::now();

        let abscissa_store = self.db.abscissa_store();
        let abscissa_inserted = if abscissa_store.count_samples().await? == 0 {
            let rows: Vec<AbscissaSample> = set
                .abscissa
                .iter()
                .map(|p| AbscissaSample {
                    sample_number: p.sample_number,
                    value: p.value,
                    created_at: now,
                })
                .collect();
            let inserted = abscissa_store.insert_samples(&rows).await?;
            info!(rows = inserted, "rows inserted into abscissa");
            inserted
        } else {
            info!("table abscissa already seeded, skipping insert");
            0
        };

        let ordinate_store = self.db.ordinate_store();
        let ordinate_inserted = if ordinate_store.count_samples().await? == 0 {
            let rows: Vec<OrdinateSample> = set
                .ordinate
                .iter()
                .map(|p| OrdinateSample {
                    curve: p.curve.clone(),
                    sample_number: p.sample_number,
                    value: p.value,
                    created_at: now,
                })
                .collect();
            let inserted = ordinate_store.insert_samples(&rows).await?;
            info!(rows = inserted, "rows inserted into ordinate");
            inserted
        } else {
            info!("table ordinate already seeded, skipping insert");
            0
        };

        Ok(SeedReport {
            abscissa_inserted,
            ordinate_inserted,
        })
    }

    /// Reads everything back and assembles one trace per configured
    /// curve. A configured curve with no stored rows becomes an empty
    /// trace; mismatched trace lengths are truncated to the shorter
    /// side.
    pub async fn load_chart(&self) -> Result<Figure, DatasetError> {
        let xs: Vec<f64> = self
            .db
            .abscissa_store()
            .list_samples()
            .await?
            .into_iter()
            .map(|s| s.value)
            .collect();

        let ordinate_store = self.db.ordinate_store();
        let mut traces = Vec::with_capacity(self.config.sampling.curves.len());
        for spec in &self.config.sampling.curves {
            let ys: Vec<f64> = ordinate_store
                .list_curve_samples(&spec.name)
                .await?
                .into_iter()
                .map(|s| s.value)
                .collect();

            if ys.len() != xs.len() {
                warn!(
                    curve = %spec.name,
                    abscissa = xs.len(),
                    ordinate = ys.len(),
                    "curve length does not match abscissa, truncating trace"
                );
            }
            traces.push(logic::build_trace(spec, &xs, &ys));
        }

        Ok(logic::assemble_figure(&self.config.chart, traces))
    }

    pub async fn abscissa_values(&self) -> Result<Vec<f64>, DatasetError> {
        Ok(self
            .db
            .abscissa_store()
            .list_samples()
            .await?
            .into_iter()
            .map(|s| s.value)
            .collect())
    }

    /// All curves stored in the database, configured or not.
    pub async fn stored_curves(&self) -> Result<Vec<CurveCount>, DatasetError> {
        Ok(self.db.ordinate_store().list_curves().await?)
    }

    pub async fn curve_values(&self, curve: &str) -> Result<Vec<f64>, DatasetError> {
        Ok(self
            .db
            .ordinate_store()
            .list_curve_samples(curve)
            .await?
            .into_iter()
            .map(|s| s.value)
            .collect())
    }
}
