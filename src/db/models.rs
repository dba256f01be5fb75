use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One x-axis sample. `sample_number` is the primary key and the
/// position of the point within the sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbscissaSample {
    pub sample_number: i64,
    pub value: f64,
    pub created_at: DateTime<Utc>,
}

/// One y-axis sample belonging to a named curve. Keyed by
/// `(curve, sample_number)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdinateSample {
    pub curve: String,
    pub sample_number: i64,
    pub value: f64,
    pub created_at: DateTime<Utc>,
}

/// A curve name together with the number of rows stored for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveCount {
    pub curve: String,
    pub samples: i64,
}
