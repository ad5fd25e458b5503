pub mod emotion;
pub mod health;
pub mod insights;

use crate::error::AppError;

pub async fn not_found() -> AppError {
    AppError::NotFound
}
