//! Field extraction payload
//!
//! Data model for the extraction subsystem's response: policy field values,
//! per-field confidence percentages, and the raw date spellings recorded for
//! highlighting. The engine only consumes the strings; extraction itself is
//! an external collaborator.

use serde::Deserialize;

/// Flattened extraction response for one document
///
/// Dates come in two spellings: `*_raw` is the exact string as it appears in
/// the document (the one worth highlighting), while the plain field is
/// normalized to `DD-MM-YYYY` for form display. Confidences are integer
/// percentages from 0 to 100.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractionResult {
    pub policyholder_name: Option<String>,
    #[serde(rename = "policyholderName_confidence")]
    pub policyholder_name_confidence: Option<u8>,

    pub issue_date_raw: Option<String>,
    pub issue_date: Option<String>,
    #[serde(rename = "issueDate_confidence")]
    pub issue_date_confidence: Option<u8>,

    pub expiration_date_raw: Option<String>,
    pub expiration_date: Option<String>,
    #[serde(rename = "expirationDate_confidence")]
    pub expiration_date_confidence: Option<u8>,

    pub provider_name: Option<String>,
    #[serde(rename = "providerName_confidence")]
    pub provider_name_confidence: Option<u8>,

    pub policyholder_address: Option<String>,
    #[serde(rename = "policyholderAddress_confidence")]
    pub policyholder_address_confidence: Option<u8>,

    pub policy_number: Option<String>,
    #[serde(rename = "policyNumber_confidence")]
    pub policy_number_confidence: Option<u8>,

    pub premium_amount: Option<String>,
    #[serde(rename = "premiumAmount_confidence")]
    pub premium_amount_confidence: Option<u8>,

    pub deductibles: Option<String>,
    #[serde(rename = "deductibles_confidence")]
    pub deductibles_confidence: Option<u8>,

    pub terms_and_exclusions: Option<Vec<String>>,
}

impl ExtractionResult {
    /// Parse the extraction backend's JSON response
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Highlight terms in presentation order
    ///
    /// Field values first, with the raw date spellings standing in for the
    /// normalized dates, then every terms-and-exclusions entry. Each term is
    /// trimmed and lowercased; empties are dropped.
    pub fn field_terms(&self) -> Vec<String> {
        let singles = [
            &self.policyholder_name,
            &self.issue_date_raw,
            &self.expiration_date_raw,
            &self.provider_name,
            &self.policyholder_address,
            &self.policy_number,
            &self.premium_amount,
            &self.deductibles,
        ];

        let mut terms = Vec::new();
        for value in singles {
            push_term(&mut terms, value.as_deref());
        }
        for entry in self.terms_and_exclusions.iter().flatten() {
            push_term(&mut terms, Some(entry));
        }

        terms
    }

    /// Candidate spellings for scrolling to the issue date, raw first
    pub fn issue_date_variants(&self) -> Vec<String> {
        date_variants(&self.issue_date_raw, &self.issue_date)
    }

    /// Candidate spellings for scrolling to the expiration date, raw first
    pub fn expiration_date_variants(&self) -> Vec<String> {
        date_variants(&self.expiration_date_raw, &self.expiration_date)
    }
}

fn push_term(terms: &mut Vec<String>, value: Option<&str>) {
    if let Some(value) = value {
        let value = value.trim();
        if !value.is_empty() {
            terms.push(value.to_lowercase());
        }
    }
}

fn date_variants(raw: &Option<String>, formatted: &Option<String>) -> Vec<String> {
    [raw, formatted]
        .into_iter()
        .flatten()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "policyholderName": "Jane Doe",
        "policyholderName_confidence": 92,
        "issueDateRaw": "15th June 2024",
        "issueDate": "15-06-2024",
        "issueDate_confidence": 88,
        "expirationDateRaw": "14th June 2025",
        "expirationDate": "14-06-2025",
        "expirationDate_confidence": 85,
        "providerName": "Acme Insurance",
        "providerName_confidence": 95,
        "policyholderAddress": "12 High Street, Springfield",
        "policyholderAddress_confidence": 74,
        "policyNumber": "PN-1234",
        "policyNumber_confidence": 99,
        "premiumAmount": "Rs. 12,500",
        "premiumAmount_confidence": 81,
        "deductibles": "Rs. 1,000 monthly",
        "deductibles_confidence": 63,
        "termsAndExclusions": ["Acts of God", "Pre-existing conditions"]
    }"#;

    #[test]
    fn test_parse_full_response() {
        let result = ExtractionResult::from_json(RESPONSE).expect("valid payload");

        assert_eq!(result.policyholder_name.as_deref(), Some("Jane Doe"));
        assert_eq!(result.policyholder_name_confidence, Some(92));
        assert_eq!(result.issue_date_raw.as_deref(), Some("15th June 2024"));
        assert_eq!(result.issue_date.as_deref(), Some("15-06-2024"));
        assert_eq!(result.policy_number.as_deref(), Some("PN-1234"));
        assert_eq!(
            result.terms_and_exclusions.as_deref(),
            Some(["Acts of God".to_string(), "Pre-existing conditions".to_string()].as_slice())
        );
    }

    #[test]
    fn test_parse_tolerates_missing_and_null_fields() {
        let result = ExtractionResult::from_json(
            r#"{"policyholderName": "Jane Doe", "providerName": null, "termsAndExclusions": null}"#,
        )
        .expect("valid payload");

        assert_eq!(result.policyholder_name.as_deref(), Some("Jane Doe"));
        assert_eq!(result.provider_name, None);
        assert_eq!(result.terms_and_exclusions, None);
        assert_eq!(result.policy_number, None);
    }

    #[test]
    fn test_field_terms_order_and_casing() {
        let result = ExtractionResult::from_json(RESPONSE).expect("valid payload");

        assert_eq!(
            result.field_terms(),
            vec![
                "jane doe",
                "15th june 2024",
                "14th june 2025",
                "acme insurance",
                "12 high street, springfield",
                "pn-1234",
                "rs. 12,500",
                "rs. 1,000 monthly",
                "acts of god",
                "pre-existing conditions",
            ]
        );
    }

    #[test]
    fn test_field_terms_drop_empty_values() {
        let result = ExtractionResult {
            policyholder_name: Some("  ".to_string()),
            policy_number: Some("PN-1".to_string()),
            ..Default::default()
        };

        assert_eq!(result.field_terms(), vec!["pn-1"]);
    }

    #[test]
    fn test_date_variants_prefer_raw_spelling() {
        let result = ExtractionResult::from_json(RESPONSE).expect("valid payload");

        assert_eq!(
            result.issue_date_variants(),
            vec!["15th June 2024", "15-06-2024"]
        );
        assert_eq!(
            result.expiration_date_variants(),
            vec!["14th June 2025", "14-06-2025"]
        );
    }

    #[test]
    fn test_date_variants_fall_back_to_formatted() {
        let result = ExtractionResult {
            issue_date: Some("15-06-2024".to_string()),
            ..Default::default()
        };

        assert_eq!(result.issue_date_variants(), vec!["15-06-2024"]);
        assert!(result.expiration_date_variants().is_empty());
    }
}
