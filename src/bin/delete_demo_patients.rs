// Deletes the demo patients created by `add-sample-patients`, matched by
// name against a fixed allow-list.

use anyhow::Context;
use hct_demo_cli::{api::ApiClient, cleanup, config::Settings, fixtures::DEMO_PATIENT_NAMES, logging};

fn main() -> anyhow::Result<()> {
    logging::init();

    let settings = Settings::from_env();
    let mut api = ApiClient::new(&settings)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cleanup::run(&mut api, &settings, &DEMO_PATIENT_NAMES, &mut out)
        .context("Failed to write report")?;
    Ok(())
}
