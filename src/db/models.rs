use serde::Serialize;
use sqlx::FromRow;

/// A stored screening outcome.
/// Corresponds to the `liverpre` table. Rows are written once per
/// successful submission and never updated or deleted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PredictionRecord {
    pub id: i32,
    pub age: f64,
    pub gender: i32,
    pub alcohol_intake: f64,
    pub bmi: f64,
    pub drug_use: i32,
    pub smoking_status: f64,
    pub stress_levels: f64,
    pub prediction: String,
}
