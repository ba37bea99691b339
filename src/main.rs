//! Rolo CLI — export person records to `.vcf` cards and import cards back
//! into flat contact fields.
//!
//! Usage:
//!   rolo export <person.json> [--teams <teams.json>] [--dates <dates.json>]
//!               [-o <file.vcf>] [--dir <directory>]
//!   rolo import <file.vcf>

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rolo::config::load_config;
use rolo::error::CardError;
use rolo::export::save_vcard;
use rolo::import::import_vcard_file;
use rolo::types::{Person, PersonDate, TeamMap};
use rolo::util::atomic_write_str;
use rolo::vcard::{generate_vcard, ExportContext};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("export") => cmd_export(&args[1..]),
        Some("import") => cmd_import(&args[1..]),
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("command failed: {}", err);
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

const USAGE: &str = "Usage:
  rolo export <person.json> [--teams <teams.json>] [--dates <dates.json>]
              [-o <file.vcf>] [--dir <directory>]
  rolo import <file.vcf>";

fn cmd_export(args: &[String]) -> Result<(), CardError> {
    let mut person_path: Option<PathBuf> = None;
    let mut teams_path: Option<PathBuf> = None;
    let mut dates_path: Option<PathBuf> = None;
    let mut out_file: Option<PathBuf> = None;
    let mut out_dir: Option<PathBuf> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--teams" => teams_path = Some(flag_value(&mut iter, "--teams")?),
            "--dates" => dates_path = Some(flag_value(&mut iter, "--dates")?),
            "-o" | "--out" => out_file = Some(flag_value(&mut iter, "-o")?),
            "--dir" => out_dir = Some(flag_value(&mut iter, "--dir")?),
            other if person_path.is_none() => person_path = Some(PathBuf::from(other)),
            other => {
                return Err(CardError::ConfigError(format!(
                    "Unexpected argument: {}.",
                    other
                )))
            }
        }
    }

    let person_path = person_path
        .ok_or_else(|| CardError::ConfigError("Missing person record argument.".to_string()))?;
    let person: Person = read_json(&person_path)
        .map_err(|e| CardError::MissingPerson(format!("{}: {}", person_path.display(), e)))?;

    let team_map: Option<TeamMap> = match teams_path {
        Some(path) => Some(read_json(&path)?),
        None => None,
    };
    let person_dates: Option<Vec<PersonDate>> = match dates_path {
        Some(path) => Some(read_json(&path)?),
        None => None,
    };

    // Config is optional when an explicit output location is given
    let config = load_config().ok();
    let ctx = ExportContext {
        team_map: team_map.as_ref(),
        person_dates: person_dates.as_deref(),
        warn_unsupported: config
            .as_ref()
            .map(|c| c.warn_unsupported_types)
            .unwrap_or(true),
    };

    if let Some(out) = out_file {
        let content = generate_vcard(&person, &ctx);
        atomic_write_str(&out, &content)?;
        println!("Wrote {}", out.display());
        return Ok(());
    }

    let dir = match out_dir {
        Some(dir) => dir,
        None => match &config {
            Some(config) => config.export_dir(),
            None => PathBuf::from("."),
        },
    };
    let path = save_vcard(&dir, &person, &ctx, None)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn cmd_import(args: &[String]) -> Result<(), CardError> {
    let path = args
        .first()
        .ok_or_else(|| CardError::ConfigError("Missing vCard file argument.".to_string()))?;

    let parsed = import_vcard_file(Path::new(path))?;
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    if parsed.additional_contacts > 0 {
        eprintln!(
            "Note: {} additional contact(s) found; only the first was imported.",
            parsed.additional_contacts
        );
    }
    Ok(())
}

fn flag_value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<PathBuf, CardError> {
    iter.next()
        .map(PathBuf::from)
        .ok_or_else(|| CardError::ConfigError(format!("{} requires a value.", flag)))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CardError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
