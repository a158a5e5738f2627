// Sample patient population: log in, then for each sample create the
// patient, ask for a prediction and print how it compares with the
// expected risk label.

use std::io::{self, Write};

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::api::PatientService;
use crate::config::Settings;
use crate::error::{ApiError, ApiResult};
use crate::fixtures::SamplePatient;
use crate::patient::NewPatient;
use crate::report::{self, RowOutcome, Tally, WIDE_RULE};
use crate::ui;

pub const TITLE: &str = "HCT SURVIVAL PREDICTION - SAMPLE PATIENT CREATION";

/// How a population run ended.
#[derive(Debug)]
pub enum PopulationOutcome {
    /// Login was rejected; no patient was created.
    AuthFailed(ApiError),
    /// Every sample was attempted.
    Completed(Tally),
}

/// Run the whole population flow, writing the report to `out`.
///
/// Per-patient failures are reported in the table and counted as
/// "different"; only a failed login ends the run early. `Err` is
/// returned only when writing to `out` fails.
pub fn run<S: PatientService, W: Write>(
    service: &mut S,
    settings: &Settings,
    samples: &[SamplePatient],
    started_at: NaiveDateTime,
    out: &mut W,
) -> io::Result<PopulationOutcome> {
    writeln!(out)?;
    writeln!(out, "{}", report::banner(TITLE, WIDE_RULE))?;
    writeln!(out, "   Timestamp: {}", started_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "   Backend: {}", settings.backend_url)?;

    if let Err(e) = service.authenticate(&settings.credentials) {
        warn!(error = %e, "login rejected");
        writeln!(out, "   Status: ❌ Login failed - {}\n", e)?;
        return Ok(PopulationOutcome::AuthFailed(e));
    }
    writeln!(out, "   Status: ✅ Authenticated\n")?;
    writeln!(out, "{}", report::table_header())?;

    let mut tally = Tally::default();
    for (i, sample) in samples.iter().enumerate() {
        debug!(patient = sample.name, case = sample.description, "creating sample patient");
        let outcome = match create_and_predict(service, sample) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(patient = sample.name, error = %e, "sample patient failed");
                RowOutcome::Failed { error: e.to_string() }
            }
        };
        tally.record(&outcome);
        writeln!(out, "{}", report::table_row(i + 1, sample.name, &outcome))?;
    }

    writeln!(out, "{}", report::rule('-', WIDE_RULE))?;
    writeln!(out)?;
    writeln!(out, "{}", report::summary(&tally))?;
    writeln!(out, "{}\n", report::rule('=', WIDE_RULE))?;
    info!(passed = tally.passed, failed = tally.failed, "population finished");
    Ok(PopulationOutcome::Completed(tally))
}

/// Create one patient and request its prediction.
fn create_and_predict<S: PatientService>(service: &S, sample: &SamplePatient) -> ApiResult<RowOutcome> {
    let spinner = ui::spinner(format!("Creating {}...", sample.name));
    let created = service.create_patient(&NewPatient {
        name: sample.name,
        profile: &sample.profile,
    });
    let created = match created {
        Ok(p) => p,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e);
        }
    };

    spinner.set_message(format!("Predicting {}...", sample.name));
    let prediction = service.create_prediction(&created.id);
    spinner.finish_and_clear();
    let prediction = prediction?;

    Ok(RowOutcome::Predicted {
        expected: sample.expected_risk,
        actual: prediction.risk_category,
        event_probability: prediction.event_probability,
    })
}
