// Demo cleanup: log in, list every patient and delete the ones whose name
// is on the demo allow-list.

use std::io::{self, Write};

use tracing::{info, warn};

use crate::api::PatientService;
use crate::config::Settings;
use crate::error::ApiError;
use crate::report::{self, NARROW_RULE};
use crate::ui;

pub const TITLE: &str = "DELETING DEMO PATIENTS";

#[derive(Debug)]
pub enum CleanupOutcome {
    /// Login was rejected; nothing was listed or deleted.
    AuthFailed(ApiError),
    /// The patient list could not be fetched; nothing was deleted.
    ListFailed(ApiError),
    /// `matched` allow-listed patients were found and `deleted` of them
    /// were removed.
    Completed { matched: usize, deleted: usize },
}

/// Run the cleanup flow, writing progress lines to `out`. Deletion
/// failures are reported and skipped. `Err` only means `out` failed.
pub fn run<S: PatientService, W: Write>(
    service: &mut S,
    settings: &Settings,
    demo_names: &[&str],
    out: &mut W,
) -> io::Result<CleanupOutcome> {
    if let Err(e) = service.authenticate(&settings.credentials) {
        warn!(error = %e, "login rejected");
        writeln!(out, "❌ Authentication error: {}", e)?;
        return Ok(CleanupOutcome::AuthFailed(e));
    }

    let patients = match service.list_patients() {
        Ok(p) => p,
        Err(e) => {
            warn!(error = %e, "could not list patients");
            writeln!(out, "❌ Could not list patients: {}", e)?;
            return Ok(CleanupOutcome::ListFailed(e));
        }
    };

    writeln!(out, "{}", report::banner(TITLE, NARROW_RULE))?;

    let mut matched = 0;
    let mut deleted = 0;
    for patient in patients.iter().filter(|p| demo_names.contains(&p.name.as_str())) {
        matched += 1;
        let spinner = ui::spinner(format!("Deleting {}...", patient.name));
        let ok = match service.delete_patient(&patient.id) {
            Ok(()) => true,
            Err(e) => {
                warn!(patient = %patient.name, id = %patient.id, error = %e, "delete failed");
                false
            }
        };
        spinner.finish_and_clear();
        if ok {
            deleted += 1;
        }
        writeln!(out, "{}", report::deletion_line(&patient.name, ok))?;
    }

    writeln!(out, "{}", report::rule('=', NARROW_RULE))?;
    writeln!(out, "{}", report::deletion_summary(deleted, demo_names.len()))?;
    writeln!(out, "{}", report::rule('=', NARROW_RULE))?;
    info!(matched, deleted, "cleanup finished");
    Ok(CleanupOutcome::Completed { matched, deleted })
}
