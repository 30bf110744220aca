mod commands;

use chondrite_core::domain::ChondriteError;
use clap::Parser;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let error = error.as_chondrite_error();
            eprintln!("{}", error.diagnostic_line());
            error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("chondrite".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "chondrite",
    version,
    about = "Bulk elemental compositions of meteorite classes, by mass and by moles"
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Print one composition table
    Show(commands::ShowArgs),
    /// List composition classes with their group and literature source
    Classes,
    /// List tracked elements with their standard atomic weights
    Elements,
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Show(args) => commands::run_show_command(args),
        CliCommand::Classes => commands::run_classes_command(),
        CliCommand::Elements => commands::run_elements_command(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(ChondriteError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_chondrite_error(&self) -> ChondriteError {
        match self {
            Self::Usage(message) => {
                ChondriteError::input_validation("INPUT.CLI_USAGE", message.trim_end())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => ChondriteError::internal("SYS.CLI", format!("{error:#}")),
        }
    }
}

impl From<ChondriteError> for CliError {
    fn from(error: ChondriteError) -> Self {
        Self::Compute(error)
    }
}

#[cfg(test)]
mod tests {
    use super::{CliError, run};
    use chondrite_core::domain::ChondriteErrorCategory;

    #[test]
    fn help_and_version_exit_cleanly() {
        assert_eq!(run(["--help"]).expect("help renders"), 0);
        assert_eq!(run(["--version"]).expect("version renders"), 0);
    }

    #[test]
    fn unknown_view_is_a_usage_error() {
        let error = run(["show", "--view", "volume"]).expect_err("volume is not a view");
        assert!(matches!(error, CliError::Usage(_)));
        assert_eq!(
            error.as_chondrite_error().category(),
            ChondriteErrorCategory::InputValidationError
        );
    }

    #[test]
    fn unknown_class_maps_to_input_validation_exit_code() {
        let error = run(["show", "--class", "Howardite"]).expect_err("class is not registered");
        let error = error.as_chondrite_error();
        assert_eq!(error.placeholder(), "INPUT.UNKNOWN_CLASS");
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn internal_errors_keep_their_context_chain() {
        let error = CliError::from(
            anyhow::anyhow!("broken pipe").context("failed to write composition table"),
        );
        let error = error.as_chondrite_error();
        assert_eq!(error.category(), ChondriteErrorCategory::InternalError);
        assert_eq!(error.message(), "failed to write composition table: broken pipe");
    }
}
