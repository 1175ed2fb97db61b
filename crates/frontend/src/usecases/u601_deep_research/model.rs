use contracts::usecases::u601_deep_research::ResearchRequest;
use thiserror::Error;

/// Local edit buffers of the query form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryDraft {
    pub text: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a research query")]
    EmptyQuery,
}

impl QueryDraft {
    /// Turn the draft into a request. The query is trimmed and must not be
    /// empty; dates pass through untouched.
    pub fn submit(&self) -> Result<ResearchRequest, ValidationError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        Ok(ResearchRequest::new(
            text,
            self.start_date.clone(),
            self.end_date.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(text: &str, start: &str, end: &str) -> QueryDraft {
        QueryDraft {
            text: text.to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
        }
    }

    #[test]
    fn test_empty_query_rejected() {
        for text in ["", "   ", "\n\t  \n"] {
            assert_eq!(
                draft(text, "2024-01-01", "").submit(),
                Err(ValidationError::EmptyQuery),
                "text: {:?}",
                text
            );
        }
    }

    #[test]
    fn test_query_is_trimmed() {
        let request = draft("  AI in 2024 \n", "", "").submit().unwrap();
        assert_eq!(request.query, "AI in 2024");
    }

    #[test]
    fn test_dates_pass_through_verbatim() {
        let request = draft("q", " 2024-01-01", "not-a-date").submit().unwrap();
        assert_eq!(request.start_date, " 2024-01-01");
        assert_eq!(request.end_date, "not-a-date");
    }

    #[test]
    fn test_validation_notice() {
        assert_eq!(
            ValidationError::EmptyQuery.to_string(),
            "Please enter a research query"
        );
    }
}
