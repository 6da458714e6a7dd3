//! Argument parsing and command execution

use anyhow::{anyhow, bail, Context};
use daywindow_core::MeetingWindowValidator;
use daywindow_domain::{Config, DayWindowError, FitOutcome};
use daywindow_infra::ConfigWindowProvider;

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Check { start: String, duration_minutes: i64 },
    Window,
    Help,
}

/// Exit code on success, including a meeting that fits
pub const EXIT_SUCCESS: u8 = 0;
/// Exit code when the meeting does not fit
pub const EXIT_DOES_NOT_FIT: u8 = 1;
/// Exit code for malformed arguments or meeting input
pub const EXIT_USAGE: u8 = 2;
/// Exit code when configuration or logging setup fails
pub const EXIT_CONFIG: u8 = 3;

/// Parse the arguments that follow the program name.
///
/// # Errors
/// Unknown commands, missing arguments and non-numeric durations.
pub fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    match args.first().map(String::as_str) {
        Some("check") => {
            let [_, start, minutes] = args else {
                bail!("Usage: daywindow check <START> <MINUTES>");
            };
            let duration_minutes = minutes
                .trim()
                .parse::<i64>()
                .with_context(|| format!("Duration is not a whole number of minutes: {minutes}"))?;
            Ok(Command::Check { start: start.clone(), duration_minutes })
        }
        Some("window") => Ok(Command::Window),
        Some("help" | "-h" | "--help") | None => Ok(Command::Help),
        Some(unknown) => Err(anyhow!("Unknown command: {unknown}")),
    }
}

/// Run `command` against `validator`, returning the output line and exit
/// code.
///
/// # Errors
/// A malformed start time or negative duration.
pub fn execute(
    command: &Command,
    validator: &MeetingWindowValidator,
) -> anyhow::Result<(String, u8)> {
    match command {
        Command::Check { start, duration_minutes } => {
            let outcome = validator.evaluate(start, *duration_minutes)?;
            tracing::info!(start = %start, duration_minutes, outcome = %outcome, "Checked meeting");
            Ok((outcome.to_string(), exit_code_for(outcome)))
        }
        Command::Window => {
            let window = validator.window();
            Ok((format!("{}-{}", window.day_start(), window.day_end()), EXIT_SUCCESS))
        }
        Command::Help => Ok((help_text().to_string(), EXIT_SUCCESS)),
    }
}

/// Build the validator from `config` and run `command` against it.
///
/// # Errors
/// An invalid configured window, or any error from [`execute`].
pub fn run_with_config(command: &Command, config: &Config) -> anyhow::Result<(String, u8)> {
    let validator = MeetingWindowValidator::from_provider(&ConfigWindowProvider::from(config))
        .context("Configured availability window is invalid")?;
    execute(command, &validator)
}

/// Exit code for an error raised while running a command.
///
/// Bad per-call input and unparseable arguments map to [`EXIT_USAGE`];
/// anything else the domain reports is a setup problem.
pub fn exit_code_for_error(err: &anyhow::Error) -> u8 {
    match err.chain().find_map(|cause| cause.downcast_ref::<DayWindowError>()) {
        Some(domain) if !domain.is_input_error() => EXIT_CONFIG,
        _ => EXIT_USAGE,
    }
}

const fn exit_code_for(outcome: FitOutcome) -> u8 {
    if outcome.fits() {
        EXIT_SUCCESS
    } else {
        EXIT_DOES_NOT_FIT
    }
}

/// Usage text printed by `daywindow help`.
pub const fn help_text() -> &'static str {
    "DayWindow - daily availability checks

USAGE:
    daywindow <COMMAND>

COMMANDS:
    check <START> <MINUTES>  Does a meeting at START (H:MM) lasting MINUTES fit?
                             Prints the outcome; exit 0 = fits, 1 = does not fit,
                             2 = malformed input, 3 = bad configuration
    window                   Print the configured window
    help                     Show this help message

CONFIGURATION:
    DAYWINDOW_DAY_START / DAYWINDOW_DAY_END, or daywindow.toml / daywindow.json
    (defaults: 07:30-17:45)"
}
