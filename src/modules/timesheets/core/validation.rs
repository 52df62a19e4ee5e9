// Field validation for submitted and revised entries.
//
// Purpose
// - Turn raw, possibly incomplete input into validated EntryFields.
// - Collect every failing field with human readable messages, keyed by field name.
//
// Rules
// - project: required, at most 255 characters after trimming.
// - hours_worked: required, between 1 and 12 inclusive, at most two decimals.
// - date: required, YYYY-MM-DD, not after today.
// - notes: optional, blank notes are dropped.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::modules::timesheets::core::entry::EntryFields;

pub const PROJECT_MAX_CHARS: usize = 255;
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const HOURS_MAX_DECIMALS: u32 = 2;

pub fn min_hours() -> Decimal {
    Decimal::ONE
}

pub fn max_hours() -> Decimal {
    Decimal::from(12)
}

/// Raw entry fields as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EntryInput {
    pub project: Option<String>,
    pub hours_worked: Option<Decimal>,
    pub date: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("the given data was invalid")]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses a `YYYY-MM-DD` date, the only date shape the API accepts.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

impl EntryInput {
    pub fn validate(self, today: NaiveDate) -> Result<EntryFields, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let project = non_blank(self.project);
        match &project {
            None => errors.add("project", "The project field is required."),
            Some(p) if p.chars().count() > PROJECT_MAX_CHARS => errors.add(
                "project",
                format!("The project field must not be greater than {PROJECT_MAX_CHARS} characters."),
            ),
            Some(_) => {}
        }

        match self.hours_worked {
            None => errors.add("hours_worked", "The hours worked field is required."),
            Some(h) if h < min_hours() => errors.add(
                "hours_worked",
                format!("The hours worked field must be at least {}.", min_hours()),
            ),
            Some(h) if h > max_hours() => errors.add(
                "hours_worked",
                format!("The hours worked field must not be greater than {}.", max_hours()),
            ),
            // Stored as NUMERIC(5, 2); finer input would be silently rounded by the database.
            Some(h) if h.normalize().scale() > HOURS_MAX_DECIMALS => errors.add(
                "hours_worked",
                format!("The hours worked field must have 0-{HOURS_MAX_DECIMALS} decimal places."),
            ),
            Some(_) => {}
        }

        let date = match non_blank(self.date) {
            None => {
                errors.add("date", "The date field is required.");
                None
            }
            Some(raw) => match parse_date(&raw) {
                None => {
                    errors.add("date", "The date field must be a valid date.");
                    None
                }
                Some(d) if d > today => {
                    errors.add("date", "The date field must be a date before or equal to today.");
                    None
                }
                Some(d) => Some(d),
            },
        };

        match (project, self.hours_worked, date) {
            (Some(project), Some(hours_worked), Some(date)) if errors.is_empty() => Ok(EntryFields {
                project,
                hours_worked,
                date,
                notes: non_blank(self.notes),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod timesheet_validation_tests {
    use super::*;
    use crate::tests::fixtures::entries::EntryInputBuilder;
    use rstest::{fixture, rstest};
    use std::str::FromStr;

    #[fixture]
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 22).unwrap()
    }

    #[rstest]
    fn it_should_accept_the_default_input(today: NaiveDate) {
        let fields = EntryInputBuilder::new().build().validate(today).unwrap();
        assert_eq!(fields.project, "Apollo");
        assert_eq!(fields.hours_worked, Decimal::from(8));
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2025, 10, 20).unwrap());
    }

    #[rstest]
    #[case("1")]
    #[case("12")]
    #[case("7.5")]
    #[case("7.25")]
    #[case("7.500")]
    fn it_should_accept_hours_within_bounds(today: NaiveDate, #[case] hours: &str) {
        let input = EntryInputBuilder::new()
            .hours_worked(Decimal::from_str(hours).unwrap())
            .build();
        assert!(input.validate(today).is_ok());
    }

    #[rstest]
    #[case("0")]
    #[case("0.99")]
    #[case("12.01")]
    #[case("24")]
    #[case("-3")]
    fn it_should_reject_hours_outside_bounds(today: NaiveDate, #[case] hours: &str) {
        let input = EntryInputBuilder::new()
            .hours_worked(Decimal::from_str(hours).unwrap())
            .build();
        let errors = input.validate(today).unwrap_err();
        assert!(errors.contains("hours_worked"));
    }

    #[rstest]
    #[case("7.123")]
    #[case("1.001")]
    fn it_should_reject_more_than_two_decimals(today: NaiveDate, #[case] hours: &str) {
        let input = EntryInputBuilder::new()
            .hours_worked(Decimal::from_str(hours).unwrap())
            .build();
        let errors = input.validate(today).unwrap_err();
        assert_eq!(
            errors.get("hours_worked"),
            Some(&["The hours worked field must have 0-2 decimal places.".to_string()][..])
        );
    }

    #[rstest]
    fn it_should_accept_today(today: NaiveDate) {
        let input = EntryInputBuilder::new().date("2025-10-22").build();
        assert_eq!(input.validate(today).unwrap().date, today);
    }

    #[rstest]
    fn it_should_reject_future_dates(today: NaiveDate) {
        let input = EntryInputBuilder::new().date("2025-10-23").build();
        let errors = input.validate(today).unwrap_err();
        assert_eq!(
            errors.get("date"),
            Some(&["The date field must be a date before or equal to today.".to_string()][..])
        );
    }

    #[rstest]
    #[case("22-10-2025")]
    #[case("2025-02-30")]
    #[case("yesterday")]
    fn it_should_reject_malformed_dates(today: NaiveDate, #[case] raw: &str) {
        let errors = EntryInputBuilder::new().date(raw).build().validate(today).unwrap_err();
        assert_eq!(
            errors.get("date"),
            Some(&["The date field must be a valid date.".to_string()][..])
        );
    }

    #[rstest]
    fn it_should_report_every_missing_field(today: NaiveDate) {
        let errors = EntryInput::default().validate(today).unwrap_err();
        assert!(errors.contains("project"));
        assert!(errors.contains("hours_worked"));
        assert!(errors.contains("date"));
        assert!(!errors.contains("notes"));
    }

    #[rstest]
    fn it_should_treat_a_blank_project_as_missing(today: NaiveDate) {
        let errors = EntryInputBuilder::new().project("   ").build().validate(today).unwrap_err();
        assert_eq!(
            errors.get("project"),
            Some(&["The project field is required.".to_string()][..])
        );
    }

    #[rstest]
    fn it_should_limit_the_project_length(today: NaiveDate) {
        let at_limit = EntryInputBuilder::new().project("p".repeat(PROJECT_MAX_CHARS)).build();
        assert!(at_limit.validate(today).is_ok());

        let over_limit = EntryInputBuilder::new().project("p".repeat(PROJECT_MAX_CHARS + 1)).build();
        assert!(over_limit.validate(today).unwrap_err().contains("project"));
    }

    #[rstest]
    fn it_should_drop_blank_notes(today: NaiveDate) {
        let fields = EntryInputBuilder::new().notes(" ").build().validate(today).unwrap();
        assert_eq!(fields.notes, None);
    }

    #[rstest]
    fn it_should_serialize_errors_as_a_field_map() {
        let mut errors = ValidationErrors::single("project", "The project field is required.");
        errors.add("date", "The date field is required.");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "date": ["The date field is required."],
                "project": ["The project field is required."],
            })
        );
    }
}
