// Library root
// ------------
// Shared code for the two demo-data programs in `src/bin`:
// `add-sample-patients` and `delete-demo-patients`.
//
// Module responsibilities:
// - `api`: blocking HTTP client for the prediction backend and the
//   `PatientService` trait the flows are written against.
// - `patient`, `fixtures`: request/response payloads and the static demo
//   data.
// - `populate`, `cleanup`: the two linear flows.
// - `report`, `ui`: text formatting and the progress spinner.
// - `config`, `error`, `logging`: settings, error type, tracing setup.
pub mod api;
pub mod cleanup;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod patient;
pub mod populate;
pub mod report;
pub mod ui;
