//! Hand-rolled argument parsing for `dentra_cli`.

use std::path::PathBuf;

use dentra_domain::{serde_json::Value, DocumentQuery, Filter};

use crate::errors::DashboardError;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    NextCode {
        source: PathBuf,
        kind: Option<String>,
        prefix: Option<String>,
        width: Option<usize>,
        field: String,
    },
    Revenue {
        source: PathBuf,
        query: DocumentQuery,
    },
    Growth {
        source: PathBuf,
        query: DocumentQuery,
    },
    Summary {
        treatments: PathBuf,
        patients: PathBuf,
    },
    Config {
        path_only: bool,
    },
    Version,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub command: Command,
    pub json: bool,
}

#[derive(Debug, Default)]
struct Options {
    positional: Vec<String>,
    json: bool,
    kind: Option<String>,
    prefix: Option<String>,
    width: Option<usize>,
    field: Option<String>,
    query: DocumentQuery,
    offset: Option<usize>,
    limit: Option<usize>,
}

pub fn parse_args<I>(args: I) -> Result<Invocation, DashboardError>
where
    I: IntoIterator<Item = String>,
{
    let options = collect_options(args)?;
    let mut positional = options.positional.into_iter();
    let name = positional.next();
    let mut query = options.query;
    if options.offset.is_some() || options.limit.is_some() {
        query = query.paginate(options.offset.unwrap_or(0), options.limit.unwrap_or(usize::MAX));
    }

    let command = match name.as_deref() {
        None | Some("help") => Command::Help,
        Some("version") => Command::Version,
        Some("next-code") => {
            if options.kind.is_some() && options.prefix.is_some() {
                return Err(DashboardError::usage("use either --kind or --prefix, not both"));
            }
            Command::NextCode {
                source: next_path(&mut positional, "codes")?,
                kind: options.kind,
                prefix: options.prefix,
                width: options.width,
                field: options.field.unwrap_or_else(|| "code".into()),
            }
        }
        Some("revenue") => Command::Revenue {
            source: next_path(&mut positional, "treatments")?,
            query,
        },
        Some("growth") => Command::Growth {
            source: next_path(&mut positional, "records")?,
            query,
        },
        Some("summary") => {
            if !query.is_empty() {
                return Err(DashboardError::usage(
                    "summary does not accept --where, --contains, --offset or --limit",
                ));
            }
            Command::Summary {
                treatments: next_path(&mut positional, "treatments")?,
                patients: next_path(&mut positional, "patients")?,
            }
        }
        Some("config") => match positional.next().as_deref() {
            None => Command::Config { path_only: false },
            Some("path") => Command::Config { path_only: true },
            Some(other) => {
                return Err(DashboardError::usage(format!("unknown config action `{other}`")))
            }
        },
        Some(other) => return Err(DashboardError::usage(format!("unknown command `{other}`"))),
    };

    Ok(Invocation {
        command,
        json: options.json,
    })
}

fn collect_options<I>(args: I) -> Result<Options, DashboardError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let mut value_for = |flag: &str| {
            args.next()
                .ok_or_else(|| DashboardError::usage(format!("{flag} expects a value")))
        };
        match arg.as_str() {
            "--json" => options.json = true,
            "--kind" => options.kind = Some(value_for("--kind")?),
            "--prefix" => options.prefix = Some(value_for("--prefix")?),
            "--field" => options.field = Some(value_for("--field")?),
            "--width" => options.width = Some(parse_number("--width", &value_for("--width")?)?),
            "--offset" => options.offset = Some(parse_number("--offset", &value_for("--offset")?)?),
            "--limit" => options.limit = Some(parse_number("--limit", &value_for("--limit")?)?),
            "--where" => {
                let raw = value_for("--where")?;
                let (field, value) = split_pair(&raw, '=', "--where field=value")?;
                options.query = std::mem::take(&mut options.query)
                    .filter(Filter::equal(field, Value::String(value.to_string())));
            }
            "--contains" => {
                let raw = value_for("--contains")?;
                let (field, text) = split_pair(&raw, '~', "--contains field~text")?;
                options.query =
                    std::mem::take(&mut options.query).filter(Filter::contains(field, text));
            }
            flag if flag.starts_with("--") => {
                return Err(DashboardError::usage(format!("unknown option `{flag}`")))
            }
            other => options.positional.push(other.to_string()),
        }
    }
    Ok(options)
}

fn next_path<I>(positional: &mut I, what: &str) -> Result<PathBuf, DashboardError>
where
    I: Iterator<Item = String>,
{
    positional
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| DashboardError::usage(format!("missing {what} file")))
}

fn parse_number(flag: &str, raw: &str) -> Result<usize, DashboardError> {
    raw.parse()
        .map_err(|_| DashboardError::usage(format!("{flag} expects a non-negative number, got `{raw}`")))
}

fn split_pair<'a>(
    raw: &'a str,
    separator: char,
    expected: &str,
) -> Result<(&'a str, &'a str), DashboardError> {
    raw.split_once(separator)
        .filter(|(field, _)| !field.trim().is_empty())
        .map(|(field, value)| (field.trim(), value))
        .ok_or_else(|| DashboardError::usage(format!("expected {expected}, got `{raw}`")))
}
