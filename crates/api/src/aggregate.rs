//! Snapshot assembly for the dashboard grid.
//!
//! Bridges the persistence layer and the pure aggregation core: fetches
//! the three source collections, normalizes rows into the canonical shapes
//! the core consumes, runs the matrix build, and packages the result for
//! the wire. Used by both the dashboard handler (on-demand rebuild) and
//! the background refresher (periodic rebuild).

use serde::Serialize;
use shifttally_core::matrix::{self, DefectMatrix, DefectTotal, EmployeeRef, EventRecord};
use shifttally_core::shift;
use shifttally_core::types::Timestamp;
use shifttally_db::models::defect_type::DefectType;
use shifttally_db::models::employee::Employee;
use shifttally_db::repositories::{DefectEventRepo, DefectTypeRepo, EmployeeRepo};
use shifttally_db::DbPool;

/// Default number of entries in the top-defects summary.
pub const TOP_DEFECT_COUNT: usize = 3;

/// One complete, immutable rebuild of the dashboard grid.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixSnapshot {
    /// When this snapshot was computed.
    pub generated_at: Timestamp,
    /// Hour-column labels in grid order.
    pub columns: Vec<String>,
    /// Employee reference list (carries display colors for the grid).
    pub employees: Vec<Employee>,
    /// Defect-type reference list in definition order.
    pub defect_types: Vec<DefectType>,
    /// The derived count matrix with row and grand totals.
    pub matrix: DefectMatrix,
    /// Top defect types by total count across all employees.
    pub top_defects: Vec<DefectTotal>,
    /// Events folded into the matrix.
    pub processed_events: usize,
    /// Events dropped by the skip-and-count policy.
    pub skipped_events: usize,
}

/// Fetch the three source collections and build a fresh snapshot.
///
/// The fetches have no ordering dependency and run concurrently; the
/// build waits for all three. A fetch failure propagates to the caller
/// and no build runs — the caller keeps whatever snapshot it already had.
pub async fn build_snapshot(pool: &DbPool, top_n: usize) -> Result<MatrixSnapshot, sqlx::Error> {
    let (employees, defect_types, events) = tokio::try_join!(
        EmployeeRepo::list_all(pool),
        DefectTypeRepo::list_all(pool),
        DefectEventRepo::list_all(pool),
    )?;

    let refs: Vec<EmployeeRef> = employees
        .iter()
        .map(|e| EmployeeRef {
            id: e.id,
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
        })
        .collect();

    let type_names: Vec<String> = defect_types.iter().map(|d| d.defect_name.clone()).collect();

    // Normalize stored rows into the canonical event shape once, here, so
    // the aggregator never guesses field names.
    let records: Vec<EventRecord> = events
        .iter()
        .map(|e| EventRecord {
            employee_name: e.employee_name.clone(),
            defect_name: e.defect_name.clone(),
            count: e.defect_count.clone(),
            time: e.event_time.clone(),
        })
        .collect();

    let build = matrix::build(&refs, &type_names, &records);
    if build.skipped > 0 {
        tracing::debug!(
            skipped = build.skipped,
            processed = build.processed,
            "Dropped unresolvable defect events during aggregation"
        );
    }

    let top_defects = matrix::top_defects(&build.matrix, top_n);

    Ok(MatrixSnapshot {
        generated_at: chrono::Utc::now(),
        columns: shift::bucket_labels(),
        employees,
        defect_types,
        matrix: build.matrix,
        top_defects,
        processed_events: build.processed,
        skipped_events: build.skipped,
    })
}
