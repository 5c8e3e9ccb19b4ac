use sqlx::{PgPool, Result};

use crate::db::models::PredictionRecord;

/// Idempotent schema bootstrap, run once at startup. Tolerates an
/// already-initialized database.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS liverpre (
            id SERIAL PRIMARY KEY,
            age DOUBLE PRECISION NOT NULL,
            gender INT NOT NULL,
            alcohol_intake DOUBLE PRECISION NOT NULL,
            bmi DOUBLE PRECISION NOT NULL,
            drug_use INT NOT NULL,
            smoking_status DOUBLE PRECISION NOT NULL,
            stress_levels DOUBLE PRECISION NOT NULL,
            prediction TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Appends one screening outcome and returns the stored row, id included.
/// The insert has either committed or errored by the time this returns.
pub async fn insert_prediction(
    pool: &PgPool,
    age: f64,
    gender: i32,
    alcohol_intake: f64,
    bmi: f64,
    drug_use: i32,
    smoking_status: f64,
    stress_levels: f64,
    prediction: &str,
) -> Result<PredictionRecord> {
    sqlx::query_as::<_, PredictionRecord>(
        r#"
        INSERT INTO liverpre (age, gender, alcohol_intake, bmi, drug_use, smoking_status, stress_levels, prediction)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, age, gender, alcohol_intake, bmi, drug_use, smoking_status, stress_levels, prediction
        "#,
    )
    .bind(age)
    .bind(gender)
    .bind(alcohol_intake)
    .bind(bmi)
    .bind(drug_use)
    .bind(smoking_status)
    .bind(stress_levels)
    .bind(prediction)
    .fetch_one(pool)
    .await
}
