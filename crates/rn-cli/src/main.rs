//! `radius-near` — command-line front end.
//!
//! Loads the dataset (and optional index payload) named by `--data` /
//! `--index` or the `RN_DATA` / `RN_INDEX` environment, runs one command,
//! and prints the result to stdout.  Logs go to stderr, filtered by
//! `RUST_LOG` (default `info`).
//!
//! ```text
//! radius-near parse "14°35'58\"N 120°59'3\"E"
//! radius-near near --at "14.5995, 120.9842" --radius 2000
//! radius-near near --facility MNL-001 --radius 500 --json
//! radius-near find makati
//! ```

mod args;
mod report;


use anyhow::{Context, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rn_query::{ReferencePoint, Session, load_session};

use crate::args::{Cli, Commands, DataArgs, ReferenceArgs};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Parse { text } => {
            let point = rn_coords::parse(&text)
                .with_context(|| format!("could not read coordinates from {text:?}"))?;
            println!("{point}");
        }
        Commands::Near { reference, radius, data, json } => {
            let session = open(&data)?;
            let reference = resolve_reference(&session, &reference)?;
            let outcome = session.query(&reference.request(radius));
            if json {
                let value = report::outcome_json(session.store(), &reference, radius, &outcome);
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print!("{}", report::outcome_text(session.store(), &reference, radius, &outcome));
            }
        }
        Commands::Find { text, data, json } => {
            let session = open(&data)?;
            let matches = session.find_facilities(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&report::matches_json(&matches))?);
            } else {
                print!("{}", report::matches_text(&matches));
            }
        }
    }

    Ok(())
}

fn open(data: &DataArgs) -> anyhow::Result<Session> {
    let session = load_session(&data.data, data.index.as_deref(), data.query_config())
        .with_context(|| format!("loading {}", data.data.display()))?;
    info!(
        facilities = session.store().len(),
        cells = session.index().bucket_count(),
        "dataset ready"
    );
    Ok(session)
}

fn resolve_reference(session: &Session, args: &ReferenceArgs) -> anyhow::Result<ReferencePoint> {
    if let Some(point) = args.gps {
        return Ok(ReferencePoint::gps(point));
    }
    if let Some(text) = &args.at {
        return ReferencePoint::from_text(text)
            .with_context(|| format!("could not read coordinates from {text:?}"));
    }
    let Some(name) = &args.facility else {
        bail!("one of --at, --facility or --gps is required");
    };

    let wanted = name.trim().to_lowercase();
    let exact = session.store().iter().find(|(_, f)| f.id.to_lowercase() == wanted);
    let chosen = match exact {
        Some((pos, _)) => pos,
        None => match session.find_facilities(name).as_slice() {
            [] => bail!("no facility matches {name:?}"),
            [(pos, _)] => *pos,
            many => bail!(
                "{name:?} matches {} facilities; run `find` and pass an exact id",
                many.len()
            ),
        },
    };
    session
        .reference_at(chosen)
        .with_context(|| format!("facility {chosen} is not in the dataset"))
}
