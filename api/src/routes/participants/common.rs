use serde::Deserialize;

use crate::error::AppError;

/// Form body for `POST /adicionar_participante`.
///
/// Numeric fields arrive as text and are parsed explicitly so malformed
/// input surfaces as `InvalidField` rather than an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct ParticipantForm {
    pub name: String,
    pub age: String,
    pub phone: String,
    pub minicurso_id: String,
}

/// Form body for `POST /alterar_participante`.
#[derive(Debug, Deserialize)]
pub struct UpdateParticipantForm {
    pub participant_id: String,
    pub name: String,
    pub age: String,
    pub phone: String,
    pub minicurso_id: String,
}

pub fn parse_i64(value: &str, field: &'static str) -> Result<i64, AppError> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidField { field })
}

pub fn parse_i32(value: &str, field: &'static str) -> Result<i32, AppError> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidField { field })
}
