use crate::config::DatabaseConfig;
use crate::db::sqlite::{SqliteAbscissaStore, SqliteOrdinateStore};
use crate::db::{AbscissaStore, DatabaseError, OrdinateStore};
use std::sync::Arc;

use diesel::Connection;
use diesel::RunQueryDsl;
use diesel::sqlite::SqliteConnection;

#[derive(Clone)]
pub struct DatabaseManager {
    sqlite_path: String,
    abscissa_store: Arc<dyn AbscissaStore>,
    ordinate_store: Arc<dyn OrdinateStore>,
}

impl DatabaseManager {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let path = config.sqlite_path();
        if path.is_empty() {
            return Err(DatabaseError::Connection(
                "empty sqlite database path".to_string(),
            ));
        }
        let path_arc = Arc::new(path.clone());

        let abscissa_store = Arc::new(SqliteAbscissaStore::new(path_arc.clone()));
        let ordinate_store = Arc::new(SqliteOrdinateStore::new(path_arc));

        Ok(Self {
            sqlite_path: path,
            abscissa_store,
            ordinate_store,
        })
    }

    /// Creates the two sample tables if they do not exist yet.
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        let path = self.sqlite_path.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = SqliteConnection::establish(&path)
                .map_err(|e| DatabaseError::Connection(e.to_string()))?;

            let statements = [
                r#"
                CREATE TABLE IF NOT EXISTS abscissa (
                    sample_number INTEGER PRIMARY KEY,
                    value DOUBLE PRECISION NOT NULL,
                    created_at TEXT NOT NULL DEFAULT (datetime('now'))
                )
                "#,
                r#"
                CREATE TABLE IF NOT EXISTS ordinate (
                    curve TEXT NOT NULL,
                    sample_number INTEGER NOT NULL,
                    value DOUBLE PRECISION NOT NULL,
                    created_at TEXT NOT NULL DEFAULT (datetime('now')),
                    PRIMARY KEY (curve, sample_number)
                )
                "#,
                "CREATE INDEX IF NOT EXISTS idx_ordinate_curve ON ordinate(curve)",
            ];

            for statement in statements {
                diesel::sql_query(statement)
                    .execute(&mut conn)
                    .map_err(|e| DatabaseError::Migration(e.to_string()))?;
            }

            Ok(())
        })
        .await
        .map_err(|e| DatabaseError::Migration(format!("migration task failed: {e}")))?
    }

    pub fn abscissa_store(&self) -> Arc<dyn AbscissaStore> {
        self.abscissa_store.clone()
    }

    pub fn ordinate_store(&self) -> Arc<dyn OrdinateStore> {
        self.ordinate_store.clone()
    }

    pub fn sqlite_path(&self) -> &str {
        &self.sqlite_path
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use tempfile::NamedTempFile;

    use super::DatabaseManager;
    use crate::config::DatabaseConfig;
    use crate::db::{AbscissaSample, OrdinateSample};

    fn temp_config(file: &NamedTempFile) -> DatabaseConfig {
        DatabaseConfig {
            url: None,
            filename: Some(file.path().to_string_lossy().to_string()),
        }
    }

    #[tokio::test]
    async fn sqlite_sample_roundtrip() {
        let file = NamedTempFile::new().expect("temp sqlite file");
        let config = temp_config(&file);

        let manager = DatabaseManager::new(&config).await.expect("db manager");
        manager.migrate().await.expect("migrate");

        let now = Utc::now();
        let xs: Vec<AbscissaSample> = (0..5)
            .map(|i| AbscissaSample {
                sample_number: i,
                value: i as f64 * 0.5,
                created_at: now,
            })
            .collect();
        let ys: Vec<OrdinateSample> = (0..5)
            .map(|i| OrdinateSample {
                curve: "m0s2".to_string(),
                sample_number: i,
                value: 1.0 / (1.0 + i as f64),
                created_at: now,
            })
            .collect();

        let inserted_x = manager
            .abscissa_store()
            .insert_samples(&xs)
            .await
            .expect("insert abscissa");
        assert_eq!(inserted_x, 5);

        let inserted_y = manager
            .ordinate_store()
            .insert_samples(&ys)
            .await
            .expect("insert ordinate");
        assert_eq!(inserted_y, 5);

        let stored_x = manager
            .abscissa_store()
            .list_samples()
            .await
            .expect("list abscissa");
        assert_eq!(stored_x.len(), 5);
        assert_eq!(stored_x[0].sample_number, 0);
        assert_eq!(stored_x[4].value, 2.0);

        let stored_y = manager
            .ordinate_store()
            .list_curve_samples("m0s2")
            .await
            .expect("list curve");
        assert_eq!(stored_y.len(), 5);
        assert_eq!(stored_y[0].value, 1.0);

        let curves = manager
            .ordinate_store()
            .list_curves()
            .await
            .expect("list curves");
        assert_eq!(curves.len(), 1);
        assert_eq!(curves[0].curve, "m0s2");
        assert_eq!(curves[0].samples, 5);

        // Reopening the database sees the same rows.
        let reopened = DatabaseManager::new(&config).await.expect("reopen");
        reopened.migrate().await.expect("migrate reopened");
        let count = reopened
            .abscissa_store()
            .count_samples()
            .await
            .expect("count after reopen");
        assert_eq!(count, 5);
    }

    #[tokio::test]
    async fn migrate_is_idempotent() {
        let file = NamedTempFile::new().expect("temp sqlite file");
        let config = temp_config(&file);

        let manager = DatabaseManager::new(&config).await.expect("db manager");
        manager.migrate().await.expect("first migrate");
        manager.migrate().await.expect("second migrate");

        let count = manager
            .abscissa_store()
            .count_samples()
            .await
            .expect("count");
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn unknown_curve_returns_empty() {
        let file = NamedTempFile::new().expect("temp sqlite file");
        let manager = DatabaseManager::new(&temp_config(&file))
            .await
            .expect("db manager");
        manager.migrate().await.expect("migrate");

        let rows = manager
            .ordinate_store()
            .list_curve_samples("missing")
            .await
            .expect("query");
        assert!(rows.is_empty());
    }
}
