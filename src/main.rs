//! Wiring & DI. Entry point: load config, choose a report sink, run the walkthrough,
//! then optionally hand over to the interactive menu. No business logic here.

use dotenv::dotenv;
use school_registry::adapters::console::{JsonSink, TextSink};
use school_registry::adapters::export::gradebook_to_csv;
use school_registry::adapters::ui::tui::TuiInputPort;
use school_registry::domain::School;
use school_registry::ports::{InputPort, ReportSink};
use school_registry::shared::{AppConfig, OutputFormat};
use school_registry::usecases::{Registrar, run_walkthrough};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config invalid, using defaults");
        AppConfig::default()
    });

    if cfg.show_banner() {
        school_registry::adapters::ui::init_ui();
    }

    let format = cfg.output_format_or_default();
    let capacity = cfg.default_capacity_or_default();
    let policy = cfg.removal_policy_or_default();
    info!(?format, capacity, ?policy, "configuration");

    let sink: Arc<dyn ReportSink> = match format {
        OutputFormat::Json => Arc::new(JsonSink::new()),
        OutputFormat::Text | OutputFormat::Csv => Arc::new(TextSink::new()),
    };
    let mut registrar = Registrar::new(School::with_policy(policy), sink);

    // --- Scripted walkthrough: hard failures are reported here, not propagated ---
    if cfg.run_demo_or_default() {
        if let Err(e) = run_walkthrough(&mut registrar, capacity) {
            error!(error = %e, "walkthrough aborted");
            println!("{e}");
        }
    }

    if format == OutputFormat::Csv {
        let csv = gradebook_to_csv(&registrar.school().gradebook())?;
        print!("{csv}");
    }

    // --- Interactive menu ---
    if cfg.is_interactive() {
        TuiInputPort::new(&mut registrar, capacity)
            .run()
            .map_err(|e| anyhow::anyhow!("{}", e))?;
    }

    let school = registrar.into_school();
    info!(
        students = school.students().len(),
        teachers = school.teachers().len(),
        courses = school.courses().len(),
        grades = school.gradebook().len(),
        "session finished"
    );
    Ok(())
}
