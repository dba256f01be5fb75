use async_trait::async_trait;

use super::DatabaseError;
use super::models::{AbscissaSample, CurveCount, OrdinateSample};

#[async_trait]
pub trait AbscissaStore: Send + Sync {
    async fn count_samples(&self) -> Result<i64, DatabaseError>;
    /// All abscissa rows in ascending sample order.
    async fn list_samples(&self) -> Result<Vec<AbscissaSample>, DatabaseError>;
    async fn insert_samples(&self, samples: &[AbscissaSample]) -> Result<usize, DatabaseError>;
}

#[async_trait]
pub trait OrdinateStore: Send + Sync {
    async fn count_samples(&self) -> Result<i64, DatabaseError>;
    /// Rows of one curve in ascending sample order.
    async fn list_curve_samples(
        &self,
        curve: &str,
    ) -> Result<Vec<OrdinateSample>, DatabaseError>;
    /// Distinct curve names with their row counts, sorted by name.
    async fn list_curves(&self) -> Result<Vec<CurveCount>, DatabaseError>;
    async fn insert_samples(&self, samples: &[OrdinateSample]) -> Result<usize, DatabaseError>;
}
