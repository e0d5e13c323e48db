//! `dentra_cli`: runs the dashboard analytics over exported collections.

pub mod args;
pub mod output;

use std::env;

use dentra_config::{Config, ConfigManager};
use dentra_core::{
    Clock, CodeService, DashboardService, FixedClock, GrowthService, MonthWindow, RevenueService,
    SystemClock,
};
use dentra_domain::{timestamp::parse_timestamp, CodeConfig};
use serde::Serialize;

use crate::{
    errors::DashboardError,
    loader::{load_codes, load_collection},
    utils::{build_info, paths},
};

pub use args::{parse_args, Command, Invocation};

/// Pins the clock for scripted runs (RFC 3339).
pub const CLOCK_ENV: &str = "DENTRA_NOW";

/// Explicit state handed to every command instead of process globals.
pub struct CliContext {
    pub config: Config,
    pub manager: ConfigManager,
    pub clock: Box<dyn Clock>,
}

impl CliContext {
    /// Loads configuration from the data directory and picks the clock.
    pub fn from_env() -> Result<Self, DashboardError> {
        let manager = ConfigManager::with_base_dir(paths::app_data_dir())?;
        let config = manager.load()?;
        let clock: Box<dyn Clock> = match env::var(CLOCK_ENV) {
            Ok(raw) => Box::new(FixedClock(parse_timestamp(&raw).ok_or_else(|| {
                DashboardError::usage(format!("{CLOCK_ENV} must be a timestamp, got `{raw}`"))
            })?)),
            Err(_) => Box::new(SystemClock),
        };
        Ok(Self {
            config,
            manager,
            clock,
        })
    }

    pub fn window(&self) -> MonthWindow {
        MonthWindow::from_clock(self.clock.as_ref(), self.config.month_rollover)
    }
}

/// Parses process arguments and runs the selected command.
pub fn run_cli() -> Result<(), DashboardError> {
    let invocation = parse_args(env::args().skip(1))?;
    if matches!(invocation.command, Command::Help) {
        println!("{}", usage());
        return Ok(());
    }
    let context = CliContext::from_env()?;
    println!("{}", execute(&invocation, &context)?);
    Ok(())
}

/// Runs one command and returns what should be printed.
pub fn execute(invocation: &Invocation, context: &CliContext) -> Result<String, DashboardError> {
    let json = invocation.json;
    let currency = context.config.currency.as_str();
    match &invocation.command {
        Command::Help => Ok(usage()),
        Command::Version => Ok(build_info::current().summary_line()),
        Command::NextCode {
            source,
            kind,
            prefix,
            width,
            field,
        } => {
            let existing = load_codes(source, field)?;
            let mut config = match prefix {
                Some(prefix) => CodeConfig::new(prefix.clone(), 3).with_existing(existing),
                None => context
                    .config
                    .code_format(kind.as_deref().unwrap_or("staff"))?
                    .with_existing(existing),
            };
            if let Some(width) = width {
                config.width = *width;
            }
            let code = CodeService::next_code(&config);
            tracing::info!(prefix = %config.prefix, existing = config.existing_codes.len(), %code, "next code generated");
            if json {
                to_json(&serde_json::json!({ "code": code }))
            } else {
                Ok(code)
            }
        }
        Command::Revenue { source, query } => {
            let window = context.window();
            let summary = RevenueService::summarize_documents(load_collection(source, query)?, &window)?;
            if json {
                to_json(&summary)
            } else {
                Ok(output::render_revenue(&summary, &window, currency))
            }
        }
        Command::Growth { source, query } => {
            let window = context.window();
            let summary = GrowthService::summarize_documents(load_collection(source, query)?, &window)?;
            if json {
                to_json(&summary)
            } else {
                Ok(output::render_growth(&summary, &window, "Records"))
            }
        }
        Command::Summary {
            treatments,
            patients,
        } => {
            let everything = Default::default();
            let summary = DashboardService::snapshot_documents(
                load_collection(treatments, &everything)?,
                load_collection(patients, &everything)?,
                context.window(),
            )?;
            if json {
                to_json(&summary)
            } else {
                Ok(output::render_dashboard(&summary, currency))
            }
        }
        Command::Config { path_only: true } => {
            Ok(context.manager.config_path().display().to_string())
        }
        Command::Config { path_only: false } => to_json(&context.config),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, DashboardError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn usage() -> String {
    "Usage: dentra_cli <command> [options]\n\
     Commands:\n  \
     next-code <codes.json> [--kind <kind> | --prefix <prefix>] [--width <n>] [--field <name>]\n  \
     revenue <treatments.json> [filters]\n  \
     growth <records.json> [filters]\n  \
     summary <treatments.json> <patients.json>\n  \
     config [path]\n  \
     version\n\
     Filters:\n  \
     --where <field=value>  --contains <field~text>  --offset <n>  --limit <n>\n\
     Options:\n  \
     --json  print JSON instead of text"
        .to_string()
}
