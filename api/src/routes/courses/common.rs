use serde::Deserialize;

/// Form body for `POST /adicionar_minicurso`.
#[derive(Debug, Deserialize)]
pub struct CourseForm {
    pub title: String,
}
