//! Validated report settings.

use std::collections::HashMap;

use paysheet_shared::{PayeRows, ReportsConfig};

use super::error::ReportError;
use crate::payroll::RuleCodes;
use crate::period::PeriodResolver;

/// Immutable settings shared by every generation run.
///
/// Built once at startup from `ReportsConfig`; building fails on unknown
/// rule names, blank codes and duplicate classification PINs.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    /// Company name stamped in every report header.
    pub company_name: String,
    /// Earliest selectable year.
    pub earliest_year: i32,
    /// Whether the housing levy report carries the relief column.
    pub include_relief_column: bool,
    /// Row policy for the PAYE report.
    pub paye_rows: PayeRows,
    classifications: HashMap<String, String>,
    rule_codes: RuleCodes,
}

impl Default for ReportSettings {
    fn default() -> Self {
        let config = ReportsConfig::default();
        Self {
            company_name: config.company_name,
            earliest_year: config.earliest_year,
            include_relief_column: config.include_relief_column,
            paye_rows: config.paye_rows,
            classifications: HashMap::new(),
            rule_codes: RuleCodes::default(),
        }
    }
}

impl ReportSettings {
    /// Validates configuration into settings.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidConfiguration` on an unknown rule name, a
    /// blank rule code, a blank PIN or a PIN listed twice.
    pub fn from_config(config: &ReportsConfig) -> Result<Self, ReportError> {
        let rule_codes = RuleCodes::with_overrides(&config.rule_codes)?;

        let mut classifications = HashMap::with_capacity(config.classifications.len());
        for entry in &config.classifications {
            let pin = normalize_pin(&entry.pin);
            if pin.is_empty() {
                return Err(ReportError::InvalidConfiguration(
                    "classification entry with blank PIN".to_string(),
                ));
            }
            if classifications
                .insert(pin.clone(), entry.label.trim().to_string())
                .is_some()
            {
                return Err(ReportError::InvalidConfiguration(format!(
                    "duplicate classification PIN: {pin}"
                )));
            }
        }

        Ok(Self {
            company_name: config.company_name.clone(),
            earliest_year: config.earliest_year,
            include_relief_column: config.include_relief_column,
            paye_rows: config.paye_rows,
            classifications,
            rule_codes,
        })
    }

    /// Adds a classification label for a tax PIN.
    #[must_use]
    pub fn with_classification(mut self, pin: &str, label: impl Into<String>) -> Self {
        self.classifications.insert(normalize_pin(pin), label.into());
        self
    }

    /// Sets the PAYE row policy.
    #[must_use]
    pub fn with_paye_rows(mut self, paye_rows: PayeRows) -> Self {
        self.paye_rows = paye_rows;
        self
    }

    /// Sets whether the housing levy report carries the relief column.
    #[must_use]
    pub fn with_relief_column(mut self, include: bool) -> Self {
        self.include_relief_column = include;
        self
    }

    /// Classification label for a tax PIN.
    #[must_use]
    pub fn classification(&self, pin: &str) -> Option<&str> {
        self.classifications
            .get(&normalize_pin(pin))
            .map(String::as_str)
    }

    /// Resolved salary rule codes.
    #[must_use]
    pub const fn rule_codes(&self) -> &RuleCodes {
        &self.rule_codes
    }

    /// Period resolver honouring `earliest_year`.
    #[must_use]
    pub const fn resolver(&self) -> PeriodResolver {
        PeriodResolver::new(self.earliest_year)
    }
}

fn normalize_pin(pin: &str) -> String {
    pin.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payroll::RuleCode;
    use paysheet_shared::ClassificationEntry;

    fn entry(pin: &str, label: &str) -> ClassificationEntry {
        ClassificationEntry {
            pin: pin.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_from_config_builds_lookup() {
        let config = ReportsConfig {
            classifications: vec![
                entry("A000000001P", "Primary Employee"),
                entry(" a000000002j ", "Secondary Employee"),
            ],
            rule_codes: HashMap::from([("paye".to_string(), "INCOME_TAX".to_string())]),
            ..ReportsConfig::default()
        };

        let settings = ReportSettings::from_config(&config).unwrap();

        assert_eq!(
            settings.classification("A000000001P"),
            Some("Primary Employee")
        );
        assert_eq!(
            settings.classification("A000000002J"),
            Some("Secondary Employee")
        );
        assert_eq!(settings.classification("A999999999Z"), None);
        assert_eq!(settings.rule_codes().code(RuleCode::Paye), "INCOME_TAX");
    }

    #[test]
    fn test_from_config_rejects_unknown_rule() {
        let config = ReportsConfig {
            rule_codes: HashMap::from([("payee".to_string(), "PAYE".to_string())]),
            ..ReportsConfig::default()
        };

        let result = ReportSettings::from_config(&config);
        assert!(matches!(result, Err(ReportError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_from_config_rejects_duplicate_pin() {
        let config = ReportsConfig {
            classifications: vec![entry("A1", "Primary"), entry("a1", "Secondary")],
            ..ReportsConfig::default()
        };

        let result = ReportSettings::from_config(&config);
        assert!(matches!(result, Err(ReportError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_from_config_rejects_blank_pin() {
        let config = ReportsConfig {
            classifications: vec![entry("  ", "Primary")],
            ..ReportsConfig::default()
        };

        assert!(ReportSettings::from_config(&config).is_err());
    }
}
