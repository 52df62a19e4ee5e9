// Shared builders for entry input and stored entries.
// The default input is read from json/entry_input.json so that unit tests and
// HTTP tests start from the same payload.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::timesheets::core::entry::{EntryFields, TimesheetEntry};
use crate::modules::timesheets::core::validation::EntryInput;
use crate::tests::fixtures::clock::{fixed_now, fixed_today};

pub const ENTRY_INPUT_JSON: &str = include_str!("json/entry_input.json");

pub struct EntryInputBuilder {
    inner: EntryInput,
}

impl Default for EntryInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EntryInputBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(ENTRY_INPUT_JSON).unwrap(),
        }
    }

    pub fn project(mut self, v: impl Into<String>) -> Self {
        self.inner.project = Some(v.into());
        self
    }

    pub fn hours_worked(mut self, v: Decimal) -> Self {
        self.inner.hours_worked = Some(v);
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = Some(v.into());
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = Some(v.into());
        self
    }

    pub fn build(self) -> EntryInput {
        self.inner
    }
}

pub fn make_entry_fields() -> EntryFields {
    EntryInputBuilder::new().build().validate(fixed_today()).unwrap()
}

pub fn make_timesheet_entry(user_id: &str, project: &str) -> TimesheetEntry {
    make_timesheet_entry_with_hours(user_id, project, 8)
}

pub fn make_timesheet_entry_with_hours(user_id: &str, project: &str, hours: i64) -> TimesheetEntry {
    let fields = EntryInputBuilder::new()
        .project(project)
        .hours_worked(Decimal::from(hours))
        .build()
        .validate(fixed_today())
        .unwrap();
    TimesheetEntry::submit(Uuid::now_v7(), user_id, fields, fixed_now())
}

#[cfg(test)]
mod entry_input_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = EntryInputBuilder::default().build();
        assert_eq!(built.project.as_deref(), Some("Apollo"));
        assert_eq!(built.hours_worked, Some(Decimal::from(8)));
        assert_eq!(built.date.as_deref(), Some("2025-10-20"));
        assert_eq!(built.notes.as_deref(), Some("Sprint planning and code review"));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = EntryInputBuilder::new()
            .project("Gemini")
            .hours_worked(Decimal::new(75, 1))
            .date("2025-10-01")
            .notes("Incident follow-up")
            .build();
        assert_eq!(custom.project.as_deref(), Some("Gemini"));
        assert_eq!(custom.hours_worked, Some(Decimal::new(75, 1)));
        assert_eq!(custom.date.as_deref(), Some("2025-10-01"));
        assert_eq!(custom.notes.as_deref(), Some("Incident follow-up"));
    }
}
