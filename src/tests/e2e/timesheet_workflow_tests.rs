use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::timesheets::adapters::outbound::entry_store_in_memory::InMemoryEntryStore;
use crate::modules::timesheets::application::errors::ApplicationError;
use crate::modules::timesheets::core::entry::{EntryStatus, ReviewDecision};
use crate::modules::timesheets::core::filters::EntryFilters;
use crate::modules::timesheets::use_cases::delete_timesheet::handler::DeleteTimesheetHandler;
use crate::modules::timesheets::use_cases::list_timesheets::handler::ListTimesheetsHandler;
use crate::modules::timesheets::use_cases::review_timesheet::command::ReviewTimesheet;
use crate::modules::timesheets::use_cases::review_timesheet::handler::ReviewTimesheetHandler;
use crate::modules::timesheets::use_cases::submit_timesheet::command::SubmitTimesheet;
use crate::modules::timesheets::use_cases::submit_timesheet::handler::SubmitTimesheetHandler;
use crate::modules::timesheets::use_cases::timesheet_stats::handler::TimesheetStatsHandler;
use crate::modules::timesheets::use_cases::update_timesheet::command::UpdateTimesheet;
use crate::modules::timesheets::use_cases::update_timesheet::handler::UpdateTimesheetHandler;
use crate::tests::fixtures::callers::{admin, employee};
use crate::tests::fixtures::clock::fixed_now;
use crate::tests::fixtures::entries::EntryInputBuilder;

#[tokio::test]
async fn submits_reviews_revises_and_deletes_an_entry() {
    let store = Arc::new(InMemoryEntryStore::new());
    let submit = SubmitTimesheetHandler::new(store.clone());
    let list = ListTimesheetsHandler::new(store.clone());
    let review = ReviewTimesheetHandler::new(store.clone());
    let update = UpdateTimesheetHandler::new(store.clone());
    let delete = DeleteTimesheetHandler::new(store.clone());
    let stats = TimesheetStatsHandler::new(store.clone());

    let alice = employee("user-0001");
    let bob = employee("user-0002");
    let boss = admin("admin-0001");

    let mut ids = Vec::new();
    for (project, hours) in [("Apollo", 4), ("Gemini", 6), ("Mercury", 8)] {
        let entry = submit
            .handle(SubmitTimesheet {
                entry_id: Uuid::now_v7(),
                user_id: alice.user_id.clone(),
                input: EntryInputBuilder::new()
                    .project(project)
                    .hours_worked(Decimal::from(hours))
                    .build(),
                submitted_at: fixed_now(),
            })
            .await
            .unwrap();
        ids.push(entry.id);
    }
    submit
        .handle(SubmitTimesheet {
            entry_id: Uuid::now_v7(),
            user_id: bob.user_id.clone(),
            input: EntryInputBuilder::new().build(),
            submitted_at: fixed_now(),
        })
        .await
        .unwrap();

    let review_command = |entry_id, caller, decision| ReviewTimesheet {
        entry_id,
        caller,
        decision,
        reason: None,
        reviewed_at: fixed_now(),
    };

    let refused = review
        .handle(review_command(ids[0], alice.clone(), ReviewDecision::Approve))
        .await;
    assert!(matches!(refused, Err(ApplicationError::Forbidden(_))));

    for id in &ids[..2] {
        review
            .handle(review_command(*id, boss.clone(), ReviewDecision::Approve))
            .await
            .unwrap();
    }

    let summary = stats.handle(&alice).await.unwrap();
    assert_eq!((summary.total, summary.approved, summary.pending, summary.rejected), (3, 2, 1, 0));
    assert_eq!(summary.total_hours, Decimal::from(18));
    assert_eq!(summary.average_hours, Some(Decimal::from(6)));

    let bobs_view = list
        .handle(&bob, &EntryFilters::default().project("Apollo"))
        .await
        .unwrap();
    assert!(bobs_view.iter().all(|entry| entry.user_id == bob.user_id));

    let revised = update
        .handle(UpdateTimesheet {
            entry_id: ids[0],
            caller: alice.clone(),
            input: Ok(EntryInputBuilder::new()
                .project("Apollo")
                .hours_worked(Decimal::from(5))
                .build()),
            updated_at: fixed_now(),
        })
        .await
        .unwrap();
    assert_eq!(revised.status, EntryStatus::Pending);
    assert_eq!(revised.approved_by, None);
    assert_eq!(revised.approved_at, None);

    delete.handle(&alice, ids[2]).await.unwrap();
    assert!(matches!(delete.handle(&alice, ids[2]).await, Err(ApplicationError::NotFound)));

    let remaining = list.handle(&boss, &EntryFilters::default()).await.unwrap();
    assert_eq!(remaining.len(), 3);
    let pending = list.pending(&boss).await.unwrap();
    assert_eq!(pending.len(), 2);
}
