use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use speechnote_core::audio::infrastructure::cpal_microphone::CpalMicrophone;
use speechnote_core::persistence::infrastructure::system_file_opener::SystemFileOpener;
use speechnote_core::pipeline::session::{SaveError, Session, StartOutcome};
use speechnote_core::pipeline::session_config::SessionConfig;
use speechnote_core::pipeline::session_state::SessionPhase;
use speechnote_core::pipeline::transcribe_speech_use_case::TranscribeSpeechUseCase;
use speechnote_core::recognition::domain::backend::Backend;
use speechnote_core::recognition::infrastructure::backend_factory::DefaultRecognizerFactory;
use speechnote_core::shared::constants::{
    DEFAULT_LISTEN_TIMEOUT_SECS, DEFAULT_MAX_DURATION_SECS, DEFAULT_TRANSCRIPT_FILENAME,
    SPOKEN_LANGUAGES, TRANSLATION_TARGETS,
};
use speechnote_core::translation::infrastructure::google_translator::GoogleTranslator;

/// Voice transcription and translation from the microphone.
#[derive(Parser)]
#[command(name = "speechnote")]
struct Cli {
    /// Recognition backend: google or sphinx.
    #[arg(long, default_value = "google")]
    backend: Backend,

    /// Spoken language locale code (e.g. fr-FR, en-US).
    #[arg(long, default_value = "fr-FR")]
    language: String,

    /// Translation target language code, or "none" to skip translation.
    #[arg(long, default_value = "en")]
    translate_to: String,

    /// Seconds to wait for speech to begin before giving up.
    #[arg(long, default_value_t = DEFAULT_LISTEN_TIMEOUT_SECS)]
    listen_timeout: u64,

    /// Maximum length of one recorded phrase, in seconds.
    #[arg(long, default_value_t = DEFAULT_MAX_DURATION_SECS)]
    max_duration: u64,

    /// Transcript output file.
    #[arg(long, default_value = DEFAULT_TRANSCRIPT_FILENAME)]
    output: PathBuf,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let target = match cli.translate_to.as_str() {
        "none" => None,
        other => Some(other),
    };
    let config = SessionConfig::new(
        cli.backend,
        &cli.language,
        target,
        cli.listen_timeout,
        cli.max_duration,
    )
    .map_err(|e| {
        format!(
            "{e} (languages: {}; targets: none, {})",
            SPOKEN_LANGUAGES.join(", "),
            TRANSLATION_TARGETS.join(", ")
        )
    })?;

    log::debug!(
        "session configured: backend={}, language={}, target={:?}",
        cli.backend,
        cli.language,
        target
    );

    let flow = TranscribeSpeechUseCase::new(
        Box::new(CpalMicrophone::new()),
        Box::new(DefaultRecognizerFactory),
        Box::new(GoogleTranslator::new()),
    );
    let mut session = Session::new(flow, Box::new(SystemFileOpener));

    println!(
        "speechnote: {} backend, language {}",
        cli.backend, cli.language
    );
    println!("Commands: start, pause, resume, reset, save, show, quit");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "start" => match session.start(&config) {
                StartOutcome::Blocked => {
                    println!("Recognition is paused. Type 'resume' first.");
                }
                StartOutcome::Completed => render(&session),
            },
            "pause" => {
                session.pause();
                println!("Recognition paused.");
            }
            "resume" => {
                session.resume();
                println!("Recognition resumed.");
            }
            "reset" => {
                session.reset();
                println!("Session cleared.");
            }
            "save" => match session.save(&cli.output) {
                Ok(outcome) => {
                    println!("Transcript saved to {}", outcome.path.display());
                    if let Some(message) = outcome.open_error {
                        println!("Could not open the file: {message}");
                    }
                }
                Err(SaveError::NothingToSave) => println!("No text to save."),
                Err(e) => println!("Save failed: {e}"),
            },
            "show" => render(&session),
            "quit" | "exit" => break,
            "" => {}
            other => println!("Unknown command: '{other}'"),
        }
    }

    println!("Thanks for using speechnote!");
    Ok(())
}

fn render(session: &Session) {
    let state = session.state();
    match session.phase() {
        SessionPhase::Idle => println!("Nothing recorded yet."),
        SessionPhase::Paused => println!("(paused)"),
        SessionPhase::HasResult => {}
    }
    if !state.last_transcript.is_empty() {
        println!("Transcript: {}", state.last_transcript);
    }
    if let Some(translation) = &state.last_translation {
        println!("Translation: {translation}");
    }
}
