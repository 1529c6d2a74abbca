use clap::{Parser, Subcommand};
use client::Client;
use coordinator::{format_deadline, Coordinator, Step, Submission, SurveyDraft, Tally};
use model::{Image, OptionId, Survey, SurveyId};
use std::{env, fs, path::PathBuf};
use tokio::runtime::Runtime;

/// Command-line front end for a survey service. The service is located with
/// the `SURVEY_API_URL` environment variable.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lists every survey.
    List,
    /// Shows one survey along with its current results.
    Show { survey: i64 },
    /// Shows the vote tallies of a survey.
    Results { survey: i64 },
    /// Votes for an option of a survey and prints the updated tallies.
    Vote { survey: i64, option: i64 },
    /// Submits a survey drafted as JSON.
    Create {
        draft: PathBuf,
        /// Image file to embed in the survey.
        #[arg(long)]
        image: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // Parse environment variables
    let base = env::var("SURVEY_API_URL")?;
    let client = Client::new(&base)?;
    log::debug!("Using survey service at {}", client.base_url());
    let coordinator = Coordinator::new(client);

    let runtime = Runtime::new()?;
    runtime.block_on(run(&coordinator, args.command))
}

async fn run(coordinator: &Coordinator<Client>, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List => {
            let surveys = coordinator.read_data().await?;
            if surveys.is_empty() {
                println!("There are no surveys yet.");
            }
            for survey in &surveys {
                print_survey(survey);
            }
        }
        Command::Show { survey } => {
            let id = SurveyId(survey);
            let survey = coordinator.read_survey(id).await?;
            print_survey(&survey);
            if let Some(image) = &survey.image {
                match image.decode() {
                    Ok(bytes) => println!("  image: {} bytes", bytes.len()),
                    Err(err) => log::warn!("Survey {id} has an undecodable image: {err}"),
                }
            }
            let tally = Tally::from(coordinator.get_survey_results(id).await?);
            print_tally(&tally);
        }
        Command::Results { survey } => {
            let tally = Tally::from(coordinator.get_survey_results(SurveyId(survey)).await?);
            print_tally(&tally);
        }
        Command::Vote { survey, option } => {
            let survey = SurveyId(survey);
            let mut tally = Tally::from(coordinator.get_survey_results(survey).await?);
            let ack = coordinator.cast_vote(survey, OptionId(option), &mut tally).await;
            println!("{}", ack.message);
            print_tally(&tally);
        }
        Command::Create { draft, image } => {
            let mut draft: SurveyDraft = serde_json::from_slice(&fs::read(draft)?)?;
            if let Some(path) = image {
                draft.image = Some(Image::encode(&fs::read(path)?));
            }
            let submission = coordinator.submit(&draft).await;
            print_submission(&submission);
            anyhow::ensure!(submission.is_complete(), "the survey was only partially created");
        }
    }

    Ok(())
}

fn print_survey(survey: &Survey) {
    let id = survey.id.map_or_else(|| String::from("?"), |id| id.to_string());
    print!("[{id}] {}", survey.title);
    if let Some(deadline) = &survey.deadline {
        print!(" (until {}", format_deadline(deadline));
        if let Some(time) = &survey.time {
            print!(" {time}");
        }
        print!(")");
    }
    println!();
}

fn print_tally(tally: &Tally) {
    for result in tally.results() {
        println!("{}", result.text);
        for option in &result.options {
            match tally.share(result.question, option.id) {
                Some(share) => println!("  [{}] {}: {} vote(s), {share:.1}%", option.id, option.text, option.votes),
                None => println!("  [{}] {}: {} vote(s)", option.id, option.text, option.votes),
            }
        }
    }
}

fn print_step<Id: std::fmt::Display>(label: &str, step: &Step<Id>) {
    match step {
        Step::Created(id) => println!("{label} -> {id}"),
        Step::Failed(message) => println!("{label} -> failed: {message}"),
        Step::Skipped => println!("{label} -> skipped"),
    }
}

fn print_submission(submission: &Submission) {
    print_step("survey", &submission.survey);
    for question in &submission.questions {
        print_step(&format!("  question {:?}", question.text), &question.step);
        for option in &question.options {
            print_step(&format!("    option {:?}", option.text), &option.step);
        }
    }
}
