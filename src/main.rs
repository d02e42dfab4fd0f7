use std::io::{stdin, BufRead};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vark_profile::recommendation::{learning_tips, strengths, training_methods};
use vark_profile::{Error, Profile, Question, Session, SessionStore, QUESTIONS};

#[derive(Parser)]
#[command(name = "vark_profile", version, about = "VARK learning style assessment")]
struct Args {
    /// Team member taking the assessment
    #[arg(long)]
    user: String,

    /// Session name, so one member can keep separate assessments
    #[arg(long, default_value = "default")]
    session: String,

    /// Directory holding in-progress assessments
    #[arg(long, env = "VARK_SESSION_DIR", default_value = ".vark")]
    session_dir: PathBuf,

    /// Print the profile as JSON
    #[arg(long)]
    json: bool,
}

enum Input {
    Number(usize),
    Skip,
    Back,
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vark_profile=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let store = SessionStore::new(&args.session_dir);
    let mut session = store.load_or_start(&args.session, &args.user)?;
    let mut lines = stdin().lock().lines();

    if session.cursor() == 0 {
        println!("{}", QUESTIONS.title);
        println!("{}", QUESTIONS.instruction);
        println!();
    }

    while let Some(question) = session.current() {
        println!("{}/{}. {}", question.id, QUESTIONS.len(), question.text);
        for (index, choice) in question.options.iter().enumerate() {
            println!("  {} => {}", index + 1, choice.text);
        }
        loop {
            let Some(line) = lines.next() else {
                store.save(&session)?;
                println!();
                println!(
                    "Progress saved ({} of {} answered). Run again with --user {} --session {} to resume.",
                    session.answered(),
                    QUESTIONS.len(),
                    session.user_id(),
                    session.session_id()
                );
                return Ok(());
            };
            if store_answer(line?.trim(), question, &mut session).is_ok() {
                break;
            }
            println!("Answer with 1-{}, s to skip or b to go back.", question.options.len());
        }
        store.save(&session)?;
        println!();
    }

    let profile = store.complete(&session)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print_report(&profile);
    }
    Ok(())
}

fn store_answer(value: &str, question: &Question, session: &mut Session) -> Result<(), Error> {
    let input = match value {
        "s" | "S" => Input::Skip,
        "b" | "B" => Input::Back,
        _ => Input::Number(
            value
                .parse::<usize>()
                .map_err(|_| Error::IllegalAnswer(value.to_string()))?,
        ),
    };
    match input {
        Input::Number(number) => session.answer(question.id, Some(question.option(number)?)),
        Input::Skip => session.answer(question.id, None),
        Input::Back => {
            session.back();
            Ok(())
        }
    }
}

fn print_report(profile: &Profile) {
    println!("Learning type: {}", profile.learning_type);
    println!();
    for (style, percentage) in profile.percentages.iter() {
        println!(
            "  {:<12} {:>3}%  ({} answers)",
            style.name(),
            percentage,
            profile.scores.get(style)
        );
    }

    let primary = profile.primary_style();
    print_list("Strengths", strengths(primary));
    print_list("Learning tips", learning_tips(primary));
    print_list("Suggested training formats", training_methods(primary));

    for set in &profile.recommendations {
        println!();
        println!("{} ({}%)", set.style.name(), set.percentage);
        println!("  How you learn best:");
        for line in &set.strategies.learning {
            println!("    - {}", line);
        }
        println!("  How mentors can help:");
        for line in &set.strategies.mentoring {
            println!("    - {}", line);
        }
    }
}

fn print_list(title: &str, lines: &[&str]) {
    println!();
    println!("{}:", title);
    for line in lines {
        println!("  - {}", line);
    }
}
