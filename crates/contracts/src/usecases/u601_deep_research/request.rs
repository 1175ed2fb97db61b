use serde::Serialize;

/// Запрос на исследование
///
/// Даты передаются как есть: пустая строка означает "без ограничения",
/// клиент их не нормализует и не опускает.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResearchRequest {
    /// Текст запроса (уже обрезанный, непустой)
    pub query: String,

    /// Начало периода в формате yyyy-mm-dd или пустая строка
    pub start_date: String,

    /// Конец периода в формате yyyy-mm-dd или пустая строка
    pub end_date: String,
}

impl ResearchRequest {
    pub fn new(
        query: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}
