use serde_json::Value;

/// Ответ backend на запрос исследования
///
/// Клиенту нужен только `final_summary`. Остальные поля backend отдаёт
/// для отладки, их форма не контракт, поэтому тело читается как
/// произвольный JSON и лишнее не проверяется.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResearchResponse {
    pub final_summary: Option<String>,
}

impl ResearchResponse {
    /// Извлечь `final_summary` из любого JSON значения.
    /// Не-объект или не-строковое поле дают `None`.
    pub fn from_json(value: &Value) -> Self {
        Self {
            final_summary: value
                .get("final_summary")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    /// Итоговый текст, если backend его вернул и он не пустой
    pub fn summary(&self) -> Option<&str> {
        self.final_summary.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_present() {
        let response =
            ResearchResponse::from_json(&json!({ "final_summary": "Line1\nLine2", "success": true }));
        assert_eq!(response.summary(), Some("Line1\nLine2"));
    }

    #[test]
    fn test_summary_missing_null_or_empty() {
        for value in [
            json!({}),
            json!({ "final_summary": null }),
            json!({ "final_summary": "" }),
        ] {
            let response = ResearchResponse::from_json(&value);
            assert_eq!(response.summary(), None, "body: {}", value);
        }
    }

    #[test]
    fn test_other_fields_any_shape() {
        let response = ResearchResponse::from_json(&json!({
            "final_summary": "ok",
            "success": "yes",
            "query": 42,
            "sources_requested": -1.5,
        }));
        assert_eq!(response.summary(), Some("ok"));
    }

    #[test]
    fn test_non_object_or_non_string_summary() {
        for value in [json!("done"), json!([1, 2]), json!(7), json!({ "final_summary": 3 })] {
            assert_eq!(ResearchResponse::from_json(&value).summary(), None, "body: {}", value);
        }
    }
}
