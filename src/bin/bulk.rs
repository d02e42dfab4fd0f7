use clap::Parser;
use serde_json::json;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use vark_profile::{calculate_profile, read_bulk, Error, MemberProfile, TeamSummary};

/// Scores a CSV of recorded VARK answer sheets.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// CSV file with a header row `id,q1,...,q16`
    path: PathBuf,

    /// Print a team summary after the per-member profiles
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vark_profile=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let reader = BufReader::new(File::open(&args.path)?);
    let mut members = Vec::new();
    for (line, row) in read_bulk(reader).enumerate() {
        match row {
            Ok((id, responses)) => {
                let profile = calculate_profile(&responses);
                println!("{}", json!({ "id": id, "profile": profile }));
                members.push(MemberProfile {
                    member_id: id,
                    profile: Some(profile),
                });
            }
            Err(e) => {
                let member_id = e
                    .record_id()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("record-{}", line + 1));
                warn!(record = line + 1, id = %member_id, error = %e, "skipping record");
                members.push(MemberProfile {
                    member_id,
                    profile: None,
                });
            }
        }
    }

    if args.summary {
        let summary = TeamSummary::from_members(&members);
        println!("{}", json!({ "summary": summary }));
    }
    Ok(())
}
