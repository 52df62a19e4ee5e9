// PostgreSQL implementation of the EntryStore port.
//
// Responsibilities
// - Map TimesheetEntry to the `timesheets` table and back.
// - Rely on the unique index on (user_id, project, date) so that concurrent submissions
//   of the same day and project surface as EntryStoreError::Duplicate.
// - Run the embedded migrations on startup.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::modules::timesheets::adapters::outbound::entry_store::{EntryStore, EntryStoreError};
use crate::modules::timesheets::core::access::Visibility;
use crate::modules::timesheets::core::entry::{EntryId, TimesheetEntry};
use crate::modules::timesheets::core::filters::EntryFilters;
use crate::modules::timesheets::core::stats::EntryTally;

const ENTRY_COLUMNS: &str = "id, user_id, project, hours_worked, date, notes, status, \
    approved_by, approved_at, rejection_reason, created_at, updated_at";

pub struct PostgresEntryStore {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct TimesheetRow {
    id: Uuid,
    user_id: String,
    project: String,
    hours_worked: Decimal,
    date: NaiveDate,
    notes: Option<String>,
    status: String,
    approved_by: Option<String>,
    approved_at: Option<DateTime<Utc>>,
    rejection_reason: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TimesheetRow {
    fn into_entry(self) -> Result<TimesheetEntry, EntryStoreError> {
        let status = self
            .status
            .parse()
            .map_err(|e| EntryStoreError::Backend(format!("row {}: {e}", self.id)))?;
        Ok(TimesheetEntry {
            id: self.id,
            user_id: self.user_id,
            project: self.project,
            hours_worked: self.hours_worked,
            date: self.date,
            notes: self.notes,
            status,
            approved_by: self.approved_by,
            approved_at: self.approved_at,
            rejection_reason: self.rejection_reason,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct TallyRow {
    total: i64,
    approved: i64,
    pending: i64,
    rejected: i64,
    total_hours: Decimal,
}

impl TallyRow {
    fn into_tally(self) -> EntryTally {
        EntryTally {
            total: self.total.max(0) as u64,
            approved: self.approved.max(0) as u64,
            pending: self.pending.max(0) as u64,
            rejected: self.rejected.max(0) as u64,
            total_hours: self.total_hours,
        }
    }
}

fn backend(error: sqlx::Error) -> EntryStoreError {
    warn!(%error, "entry store query failed");
    EntryStoreError::Backend(error.to_string())
}

fn write_error(error: sqlx::Error, entry: &TimesheetEntry) -> EntryStoreError {
    match &error {
        sqlx::Error::Database(db) if db.is_unique_violation() => EntryStoreError::Duplicate {
            user_id: entry.user_id.clone(),
            project: entry.project.clone(),
            date: entry.date,
        },
        _ => backend(error),
    }
}

/// `%needle%` for ILIKE, with the wildcard characters of the needle escaped.
fn contains_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

impl PostgresEntryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, EntryStoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(backend)?;
        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> Result<(), EntryStoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| EntryStoreError::Backend(format!("migration failed: {e}")))
    }
}

#[async_trait]
impl EntryStore for PostgresEntryStore {
    async fn insert(&self, entry: &TimesheetEntry) -> Result<(), EntryStoreError> {
        debug!(entry_id = %entry.id, user_id = %entry.user_id, "inserting timesheet entry");
        sqlx::query(
            r#"
            INSERT INTO timesheets (
                id, user_id, project, hours_worked, date, notes, status,
                approved_by, approved_at, rejection_reason, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(entry.id)
        .bind(&entry.user_id)
        .bind(&entry.project)
        .bind(entry.hours_worked)
        .bind(entry.date)
        .bind(entry.notes.as_deref())
        .bind(entry.status.as_str())
        .bind(entry.approved_by.as_deref())
        .bind(entry.approved_at)
        .bind(entry.rejection_reason.as_deref())
        .bind(entry.created_at)
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, entry))?;
        Ok(())
    }

    async fn find(&self, id: EntryId) -> Result<Option<TimesheetEntry>, EntryStoreError> {
        let sql = format!("SELECT {ENTRY_COLUMNS} FROM timesheets WHERE id = $1");
        sqlx::query_as::<_, TimesheetRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?
            .map(TimesheetRow::into_entry)
            .transpose()
    }

    async fn find_duplicate(
        &self,
        user_id: &str,
        project: &str,
        date: NaiveDate,
        excluding: Option<EntryId>,
    ) -> Result<Option<EntryId>, EntryStoreError> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT id FROM timesheets
            WHERE user_id = $1 AND project = $2 AND date = $3
              AND ($4::uuid IS NULL OR id <> $4)
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(project)
        .bind(date)
        .bind(excluding)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)
    }

    async fn list(
        &self,
        visibility: &Visibility,
        filters: &EntryFilters,
    ) -> Result<Vec<TimesheetEntry>, EntryStoreError> {
        let sql = format!(
            r#"
            SELECT {ENTRY_COLUMNS} FROM timesheets
            WHERE ($1::text IS NULL OR user_id = $1)
              AND ($2::text IS NULL OR status = $2)
              AND ($3::text IS NULL OR project ILIKE $3 ESCAPE '\')
              AND ($4::date IS NULL OR $5::date IS NULL OR date BETWEEN $4 AND $5)
            ORDER BY created_at, id
            "#
        );
        let rows = sqlx::query_as::<_, TimesheetRow>(&sql)
            .bind(visibility.owner_id())
            .bind(filters.status.as_deref())
            .bind(filters.project.as_deref().map(contains_pattern))
            .bind(filters.date_range.map(|range| range.from))
            .bind(filters.date_range.map(|range| range.to))
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;
        rows.into_iter().map(TimesheetRow::into_entry).collect()
    }

    async fn save(&self, entry: &TimesheetEntry) -> Result<(), EntryStoreError> {
        debug!(entry_id = %entry.id, status = %entry.status, "saving timesheet entry");
        let result = sqlx::query(
            r#"
            UPDATE timesheets
            SET project = $2, hours_worked = $3, date = $4, notes = $5, status = $6,
                approved_by = $7, approved_at = $8, rejection_reason = $9, updated_at = $10
            WHERE id = $1
            "#,
        )
        .bind(entry.id)
        .bind(&entry.project)
        .bind(entry.hours_worked)
        .bind(entry.date)
        .bind(entry.notes.as_deref())
        .bind(entry.status.as_str())
        .bind(entry.approved_by.as_deref())
        .bind(entry.approved_at)
        .bind(entry.rejection_reason.as_deref())
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, entry))?;
        if result.rows_affected() == 0 {
            return Err(EntryStoreError::NotFound(entry.id));
        }
        Ok(())
    }

    async fn delete(&self, id: EntryId) -> Result<bool, EntryStoreError> {
        let result = sqlx::query("DELETE FROM timesheets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(result.rows_affected() > 0)
    }

    async fn tally(&self, visibility: &Visibility) -> Result<EntryTally, EntryStoreError> {
        let row = sqlx::query_as::<_, TallyRow>(
            r#"
            SELECT COUNT(*) AS total,
                   COUNT(*) FILTER (WHERE status = 'Approved') AS approved,
                   COUNT(*) FILTER (WHERE status = 'Pending') AS pending,
                   COUNT(*) FILTER (WHERE status = 'Rejected') AS rejected,
                   COALESCE(SUM(hours_worked), 0) AS total_hours
            FROM timesheets
            WHERE ($1::text IS NULL OR user_id = $1)
            "#,
        )
        .bind(visibility.owner_id())
        .fetch_one(&self.pool)
        .await
        .map_err(backend)?;
        Ok(row.into_tally())
    }
}
