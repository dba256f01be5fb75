pub use self::error::DatabaseError;
pub use self::manager::DatabaseManager;
pub use self::models::{AbscissaSample, CurveCount, OrdinateSample};
pub use self::stores::{AbscissaStore, OrdinateStore};

pub mod error;
pub mod manager;
pub mod models;
pub mod schema_sqlite;
pub mod sqlite;
pub mod stores;
