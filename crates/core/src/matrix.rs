//! Defect matrix builder and top-N summary.
//!
//! Turns a flat list of timestamped defect events into the employee x
//! defect-type x hour-bucket grid shown on the dashboard. The matrix is a
//! derived, disposable view: `build` is a pure function of its three
//! inputs, owns no persistent state, and can be discarded and rebuilt at
//! any time. Per-event anomalies (bad time, unknown name, unknown defect
//! type) are absorbed with a skip-and-count policy; only the caller's
//! source fetches can fail.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::CoreError;
use crate::roster::NameIndex;
use crate::shift::{self, BUCKET_COUNT};
use crate::types::DbId;

/// Employee reference data fed into the build.
#[derive(Debug, Clone)]
pub struct EmployeeRef {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
}

/// A defect-tally event in the canonical shape consumed by the aggregator.
///
/// Producers store events in loosely typed shapes; the store-read boundary
/// normalizes them into this struct so the aggregator never guesses field
/// names. `count` is the raw stored string and may be malformed.
#[derive(Debug, Clone)]
pub struct EventRecord {
    pub employee_name: String,
    pub defect_name: String,
    pub count: String,
    pub time: String,
}

/// One defect-type row within an employee's section of the grid.
#[derive(Debug, Clone, Serialize)]
pub struct DefectRow {
    pub defect_name: String,
    /// Per-hour-bucket counts, column 0 = 09:00-10:00.
    pub hours: [i64; BUCKET_COUNT],
    /// Sum of `hours`; recomputed from the cells, never maintained
    /// incrementally.
    pub total: i64,
}

/// All defect rows for one employee, in defect-type input order.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeRow {
    pub employee_id: DbId,
    pub employee_name: String,
    pub defects: Vec<DefectRow>,
    /// Sum of `total` across all defect rows.
    pub grand_total: i64,
}

/// The full derived grid, one entry per employee in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DefectMatrix {
    pub rows: Vec<EmployeeRow>,
}

/// Result of a build: the matrix plus skip diagnostics.
#[derive(Debug, Clone)]
pub struct MatrixBuild {
    pub matrix: DefectMatrix,
    /// Events folded into the matrix.
    pub processed: usize,
    /// Events dropped because the time, employee name, or defect type
    /// could not be resolved.
    pub skipped: usize,
}

/// Fold `events` into the employee x defect-type x hour grid.
///
/// The matrix always contains the full cross-product of `employees` and
/// `defect_types`, zero-initialized, so every employee shows every known
/// defect type even with no events. Employee names resolve fuzzily
/// ([`NameIndex`]); defect-type names must match exactly (case-sensitive);
/// times bucket per [`shift::hour_bucket`]. An event failing any of the
/// three resolutions is skipped and counted, never an error.
pub fn build(
    employees: &[EmployeeRef],
    defect_types: &[String],
    events: &[EventRecord],
) -> MatrixBuild {
    let index = NameIndex::build(
        employees
            .iter()
            .map(|e| (e.id, e.first_name.as_str(), e.last_name.as_str())),
    );

    let mut row_index: HashMap<DbId, usize> = HashMap::new();
    let mut rows: Vec<EmployeeRow> = Vec::with_capacity(employees.len());
    for employee in employees {
        row_index.entry(employee.id).or_insert(rows.len());
        rows.push(EmployeeRow {
            employee_id: employee.id,
            employee_name: display_name(employee),
            defects: defect_types
                .iter()
                .map(|name| DefectRow {
                    defect_name: name.clone(),
                    hours: [0; BUCKET_COUNT],
                    total: 0,
                })
                .collect(),
            grand_total: 0,
        });
    }

    let mut col_index: HashMap<&str, usize> = HashMap::new();
    for (col, name) in defect_types.iter().enumerate() {
        col_index.entry(name.as_str()).or_insert(col);
    }

    let mut processed = 0;
    let mut skipped = 0;

    for event in events {
        let resolved = shift::hour_bucket(&event.time).and_then(|bucket| {
            let row = *row_index.get(&index.resolve(&event.employee_name)?)?;
            let col = *col_index.get(event.defect_name.as_str())?;
            Some((row, col, bucket))
        });

        match resolved {
            Some((row, col, bucket)) => {
                rows[row].defects[col].hours[bucket] += parse_count(&event.count);
                processed += 1;
            }
            None => skipped += 1,
        }
    }

    let mut matrix = DefectMatrix { rows };
    recompute_totals(&mut matrix);

    MatrixBuild {
        matrix,
        processed,
        skipped,
    }
}

/// Coerce a stored count field to a non-negative integer.
///
/// Malformed or negative values fall back to 0 (read-boundary policy; the
/// write boundary rejects them outright).
pub fn parse_count(raw: &str) -> i64 {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n >= 0)
        .unwrap_or(0)
}

/// Recompute every row total and grand total from the cell values.
pub fn recompute_totals(matrix: &mut DefectMatrix) {
    for row in &mut matrix.rows {
        for defect in &mut row.defects {
            defect.total = defect.hours.iter().sum();
        }
        row.grand_total = row.defects.iter().map(|d| d.total).sum();
    }
}

impl DefectMatrix {
    /// Replace a single cell outright (a direct grid edit) and recompute
    /// that row's total and that employee's grand total.
    ///
    /// Produces the same totals a full rebuild would if the edit were
    /// persisted as an event of equal count in the same bucket.
    pub fn set_cell(
        &mut self,
        employee_id: DbId,
        defect_name: &str,
        bucket: usize,
        value: i64,
    ) -> Result<(), CoreError> {
        if bucket >= BUCKET_COUNT {
            return Err(CoreError::Validation(format!(
                "Hour bucket must be below {BUCKET_COUNT}, got {bucket}"
            )));
        }

        let row = self
            .rows
            .iter_mut()
            .find(|r| r.employee_id == employee_id)
            .ok_or(CoreError::NotFound {
                entity: "employee",
                id: employee_id,
            })?;

        let defect = row
            .defects
            .iter_mut()
            .find(|d| d.defect_name == defect_name)
            .ok_or_else(|| {
                CoreError::Validation(format!("Unknown defect type: {defect_name}"))
            })?;

        defect.hours[bucket] = value;
        defect.total = defect.hours.iter().sum();
        row.grand_total = row.defects.iter().map(|d| d.total).sum();
        Ok(())
    }
}

fn display_name(employee: &EmployeeRef) -> String {
    format!("{} {}", employee.first_name.trim(), employee.last_name.trim())
        .trim()
        .to_string()
}

/// A defect type's total across all employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefectTotal {
    pub defect_name: String,
    pub total: i64,
}

/// Top `n` defect types by total count across all employees.
///
/// Sorted descending; ties keep the defect type's original column order
/// (stable sort). Returns fewer than `n` entries when fewer defect types
/// exist, and nothing for an empty matrix.
pub fn top_defects(matrix: &DefectMatrix, n: usize) -> Vec<DefectTotal> {
    let Some(first) = matrix.rows.first() else {
        return Vec::new();
    };

    let mut totals: Vec<DefectTotal> = first
        .defects
        .iter()
        .map(|d| DefectTotal {
            defect_name: d.defect_name.clone(),
            total: 0,
        })
        .collect();

    for row in &matrix.rows {
        for (slot, defect) in totals.iter_mut().zip(&row.defects) {
            slot.total += defect.total;
        }
    }

    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals.truncate(n);
    totals
}
