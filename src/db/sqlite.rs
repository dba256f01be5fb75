use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::schema_sqlite::{abscissa, ordinate};

use super::{
    DatabaseError,
    models::{AbscissaSample, CurveCount, OrdinateSample},
};

// Helper function to convert DateTime to ISO string for SQLite
fn datetime_to_string(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

// Helper function to parse ISO string to DateTime
fn string_to_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DatabaseError::Query(format!("invalid datetime format: {}", e)))
}

// SQLite uses i32 for INTEGER columns, but we keep i64 in our API
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = abscissa)]
struct DbAbscissaRow {
    sample_number: i32,
    value: f64,
    created_at: String,
}

impl DbAbscissaRow {
    fn to_sample(&self) -> Result<AbscissaSample, DatabaseError> {
        Ok(AbscissaSample {
            sample_number: self.sample_number as i64,
            value: self.value,
            created_at: string_to_datetime(&self.created_at)?,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = abscissa)]
struct NewAbscissaRow {
    sample_number: i32,
    value: f64,
    created_at: String,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = ordinate)]
struct DbOrdinateRow {
    curve: String,
    sample_number: i32,
    value: f64,
    created_at: String,
}

impl DbOrdinateRow {
    fn to_sample(&self) -> Result<OrdinateSample, DatabaseError> {
        Ok(OrdinateSample {
            curve: self.curve.clone(),
            sample_number: self.sample_number as i64,
            value: self.value,
            created_at: string_to_datetime(&self.created_at)?,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = ordinate)]
struct NewOrdinateRow {
    curve: String,
    sample_number: i32,
    value: f64,
    created_at: String,
}

fn establish_connection(path: &str) -> Result<SqliteConnection, DatabaseError> {
    SqliteConnection::establish(path).map_err(|e| DatabaseError::Connection(e.to_string()))
}

pub struct SqliteAbscissaStore {
    db_path: Arc<String>,
}

impl SqliteAbscissaStore {
    pub fn new(db_path: Arc<String>) -> Self {
        Self { db_path }
    }
}

#[async_trait]
impl super::AbscissaStore for SqliteAbscissaStore {
    async fn count_samples(&self) -> Result<i64, DatabaseError> {
        let db_path = self.db_path.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = establish_connection(&db_path)?;
            use crate::db::schema_sqlite::abscissa::dsl::*;
            abscissa
                .count()
                .get_result(&mut conn)
                .map_err(|e| DatabaseError::Query(e.to_string()))
        })
        .await
        .map_err(|e| DatabaseError::Query(format!("database task failed: {e}")))?
    }

    async fn list_samples(&self) -> Result<Vec<AbscissaSample>, DatabaseError> {
        let db_path = self.db_path.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = establish_connection(&db_path)?;
            use crate::db::schema_sqlite::abscissa::dsl::*;
            let results = abscissa
                .order(sample_number.asc())
                .select(DbAbscissaRow::as_select())
                .load::<DbAbscissaRow>(&mut conn)
                .map_err(|e| DatabaseError::Query(e.to_string()))?;

            results.iter().map(|r| r.to_sample()).collect()
        })
        .await
        .map_err(|e| DatabaseError::Query(format!("database task failed: {e}")))?
    }

    async fn insert_samples(&self, samples: &[AbscissaSample]) -> Result<usize, DatabaseError> {
        let rows: Vec<NewAbscissaRow> = samples
            .iter()
            .map(|s| NewAbscissaRow {
                sample_number: s.sample_number as i32,
                value: s.value,
                created_at: datetime_to_string(&s.created_at),
            })
            .collect();
        let db_path = self.db_path.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = establish_connection(&db_path)?;
            diesel::insert_into(abscissa::table)
                .values(&rows)
                .execute(&mut conn)
                .map_err(|e| DatabaseError::Query(e.to_string()))
        })
        .await
        .map_err(|e| DatabaseError::Query(format!("database task failed: {e}")))?
    }
}

pub struct SqliteOrdinateStore {
    db_path: Arc<String>,
}

impl SqliteOrdinateStore {
    pub fn new(db_path: Arc<String>) -> Self {
        Self { db_path }
    }
}

#[async_trait]
impl super::OrdinateStore for SqliteOrdinateStore {
    async fn count_samples(&self) -> Result<i64, DatabaseError> {
        let db_path = self.db_path.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = establish_connection(&db_path)?;
            use crate::db::schema_sqlite::ordinate::dsl::*;
            ordinate
                .count()
                .get_result(&mut conn)
                .map_err(|e| DatabaseError::Query(e.to_string()))
        })
        .await
        .map_err(|e| DatabaseError::Query(format!("database task failed: {e}")))?
    }

    async fn list_curve_samples(
        &self,
        curve_name: &str,
    ) -> Result<Vec<OrdinateSample>, DatabaseError> {
        let curve_name = curve_name.to_string();
        let db_path = self.db_path.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = establish_connection(&db_path)?;
            use crate::db::schema_sqlite::ordinate::dsl::*;
            let results = ordinate
                .filter(curve.eq(curve_name))
                .order(sample_number.asc())
                .select(DbOrdinateRow::as_select())
                .load::<DbOrdinateRow>(&mut conn)
                .map_err(|e| DatabaseError::Query(e.to_string()))?;

            results.iter().map(|r| r.to_sample()).collect()
        })
        .await
        .map_err(|e| DatabaseError::Query(format!("database task failed: {e}")))?
    }

    async fn list_curves(&self) -> Result<Vec<CurveCount>, DatabaseError> {
        let db_path = self.db_path.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = establish_connection(&db_path)?;
            use crate::db::schema_sqlite::ordinate::dsl::*;
            let names = ordinate
                .select(curve)
                .distinct()
                .order(curve.asc())
                .load::<String>(&mut conn)
                .map_err(|e| DatabaseError::Query(e.to_string()))?;

            let mut counts = Vec::with_capacity(names.len());
            for name in names {
                let samples: i64 = ordinate
                    .filter(curve.eq(name.as_str()))
                    .count()
                    .get_result(&mut conn)
                    .map_err(|e| DatabaseError::Query(e.to_string()))?;
                counts.push(CurveCount {
                    curve: name,
                    samples,
                });
            }
            Ok(counts)
        })
        .await
        .map_err(|e| DatabaseError::Query(format!("database task failed: {e}")))?
    }

    async fn insert_samples(&self, samples: &[OrdinateSample]) -> Result<usize, DatabaseError> {
        let rows: Vec<NewOrdinateRow> = samples
            .iter()
            .map(|s| NewOrdinateRow {
                curve: s.curve.clone(),
                sample_number: s.sample_number as i32,
                value: s.value,
                created_at: datetime_to_string(&s.created_at),
            })
            .collect();
        let db_path = self.db_path.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = establish_connection(&db_path)?;
            diesel::insert_into(ordinate::table)
                .values(&rows)
                .execute(&mut conn)
                .map_err(|e| DatabaseError::Query(e.to_string()))
        })
        .await
        .map_err(|e| DatabaseError::Query(format!("database task failed: {e}")))?
    }
}
