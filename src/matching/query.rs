use thiserror::Error;

use crate::utils::validation::MAX_INPUT_LENGTH;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictError {
    #[error("Please enter symptoms to predict disease.")]
    EmptyInput,

    #[error("Symptom input is {0} bytes, exceeding the maximum of {max}", max = MAX_INPUT_LENGTH)]
    InputTooLong(usize),

    #[error("Disease dataset is not loaded")]
    DatasetNotLoaded,
}

/// Normalized symptom tokens parsed from free text
///
/// Tokens are lowercased, trimmed, and non-empty, in input order. Repeated
/// tokens are kept: every token counts toward the confidence denominator,
/// while matching runs over [`distinct_tokens`](Self::distinct_tokens).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomQuery {
    tokens: Vec<String>,
    distinct: Vec<String>,
}

impl SymptomQuery {
    /// Parse comma-separated symptom phrases
    ///
    /// # Errors
    ///
    /// Returns `PredictError::InputTooLong` for oversized input and
    /// `PredictError::EmptyInput` if no tokens remain after trimming.
    pub fn parse(input: &str) -> Result<Self, PredictError> {
        if input.len() > MAX_INPUT_LENGTH {
            return Err(PredictError::InputTooLong(input.len()));
        }

        let tokens: Vec<String> = input
            .to_lowercase()
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        if tokens.is_empty() {
            return Err(PredictError::EmptyInput);
        }

        let mut distinct: Vec<String> = Vec::with_capacity(tokens.len());
        for token in &tokens {
            if !distinct.contains(token) {
                distinct.push(token.clone());
            }
        }

        Ok(Self { tokens, distinct })
    }

    /// Every token, repeats included
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Unique tokens in first-seen order
    pub fn distinct_tokens(&self) -> &[String] {
        &self.distinct
    }

    /// Total token count, the confidence denominator
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercases_and_trims() {
        let query = SymptomQuery::parse("  Fever , HEADACHE,cough ").unwrap();
        assert_eq!(query.tokens(), ["fever", "headache", "cough"]);
    }

    #[test]
    fn test_parse_keeps_inner_spaces() {
        let query = SymptomQuery::parse("skin rash, joint pain").unwrap();
        assert_eq!(query.tokens(), ["skin rash", "joint pain"]);
    }

    #[test]
    fn test_parse_drops_empty_tokens() {
        let query = SymptomQuery::parse("fever,, ,cough,").unwrap();
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn test_parse_keeps_repeated_tokens() {
        let query = SymptomQuery::parse("fever, Fever, cough, fever").unwrap();
        assert_eq!(query.tokens(), ["fever", "fever", "cough", "fever"]);
        assert_eq!(query.len(), 4);
        assert_eq!(query.distinct_tokens(), ["fever", "cough"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(SymptomQuery::parse(""), Err(PredictError::EmptyInput));
        assert_eq!(SymptomQuery::parse("   \t "), Err(PredictError::EmptyInput));
        assert_eq!(SymptomQuery::parse(" , ,"), Err(PredictError::EmptyInput));
    }

    #[test]
    fn test_parse_too_long() {
        let input = "a".repeat(MAX_INPUT_LENGTH + 1);
        assert_eq!(
            SymptomQuery::parse(&input),
            Err(PredictError::InputTooLong(MAX_INPUT_LENGTH + 1))
        );
    }
}
