use crate::config::ContentionPolicy;
use crate::constants::verbosity;
use crate::prompt::{ConfirmVariant, RestoreChoice, ScopeChoice};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for larder.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file, or a directory containing `larder.json` / `larder.yaml`.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override what happens when a prompt is opened while another one is pending.
    #[arg(long = "on-busy", value_enum, global = true)]
    pub on_busy: Option<ContentionPolicy>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Ask for confirmation. Repeat `--message` to open several requests at once.
    Confirm(ConfirmArgs),
    /// Ask whether a category change applies globally or to one preparation.
    Scope(ScopeArgs),
    /// Ask how a backup should be restored.
    Restore(RestoreArgs),
    /// Check a name against existing entities.
    CheckName(CheckNameArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ConfirmArgs {
    /// Message shown to the user.
    #[arg(short, long, required = true)]
    pub message: Vec<String>,

    /// Label of the confirm button.
    #[arg(long = "save-label")]
    pub save_label: Option<String>,

    #[arg(long, value_enum, default_value_t = ConfirmVariant::Primary)]
    pub variant: ConfirmVariant,

    /// Answer without showing the prompt.
    #[arg(long, value_enum)]
    pub answer: Option<ConfirmAnswer>,
}

#[derive(Args, Debug, Clone)]
pub struct ScopeArgs {
    #[arg(long)]
    pub preparation: String,

    #[arg(long = "main-category")]
    pub main_category: String,

    #[arg(long = "new-category")]
    pub new_category: String,

    /// Answer without showing the prompt.
    #[arg(long, value_enum)]
    pub answer: Option<ScopeAnswer>,
}

#[derive(Args, Debug, Clone)]
pub struct RestoreArgs {
    /// Answer without showing the prompt.
    #[arg(long, value_enum)]
    pub answer: Option<RestoreAnswer>,
}

#[derive(Args, Debug, Clone)]
pub struct CheckNameArgs {
    /// Candidate name.
    #[arg(long)]
    pub name: String,

    /// Id of the entity being edited. Omit when creating.
    #[arg(long = "current-id")]
    pub current_id: Option<String>,

    /// JSON file holding an array of `{"id": ..., "name": ...}` objects.
    #[arg(long)]
    pub entities: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ConfirmAnswer {
    Yes,
    No,
    Dismiss,
}

impl ConfirmAnswer {
    pub fn into_answer(self) -> Option<bool> {
        match self {
            ConfirmAnswer::Yes => Some(true),
            ConfirmAnswer::No => Some(false),
            ConfirmAnswer::Dismiss => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ScopeAnswer {
    Global,
    Specific,
    Dismiss,
}

impl ScopeAnswer {
    pub fn into_answer(self) -> Option<ScopeChoice> {
        match self {
            ScopeAnswer::Global => Some(ScopeChoice::Global),
            ScopeAnswer::Specific => Some(ScopeChoice::Specific),
            ScopeAnswer::Dismiss => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum RestoreAnswer {
    Replace,
    AddNew,
    Dismiss,
}

impl RestoreAnswer {
    pub fn into_answer(self) -> Option<RestoreChoice> {
        match self {
            RestoreAnswer::Replace => Some(RestoreChoice::Replace),
            RestoreAnswer::AddNew => Some(RestoreChoice::AddNew),
            RestoreAnswer::Dismiss => None,
        }
    }
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_confirm_with_repeated_messages() {
        let cli = Cli::parse_from([
            "larder",
            "confirm",
            "-m",
            "Delete item?",
            "--message",
            "Really?",
            "--variant",
            "danger",
            "--answer",
            "yes",
            "--on-busy",
            "queue",
            "-vv",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.on_busy, Some(ContentionPolicy::Queue));
        match cli.command {
            Commands::Confirm(args) => {
                assert_eq!(args.message, vec!["Delete item?", "Really?"]);
                assert_eq!(args.variant, ConfirmVariant::Danger);
                assert_eq!(args.answer, Some(ConfirmAnswer::Yes));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_restore_answer_in_kebab_case() {
        let cli = Cli::parse_from(["larder", "restore", "--answer", "add-new"]);
        match cli.command {
            Commands::Restore(args) => assert_eq!(
                args.answer.and_then(RestoreAnswer::into_answer),
                Some(RestoreChoice::AddNew)
            ),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_check_name() {
        let cli = Cli::parse_from([
            "larder",
            "--config",
            "conf",
            "check-name",
            "--name",
            "Tomato",
            "--entities",
            "products.json",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("conf")));
        match cli.command {
            Commands::CheckName(args) => {
                assert_eq!(args.name, "Tomato");
                assert_eq!(args.current_id, None);
                assert_eq!(args.entities, PathBuf::from("products.json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn confirm_requires_a_message() {
        assert!(Cli::try_parse_from(["larder", "confirm"]).is_err());
    }

    #[test]
    fn dismiss_maps_to_none() {
        assert_eq!(ConfirmAnswer::Dismiss.into_answer(), None);
        assert_eq!(ScopeAnswer::Global.into_answer(), Some(ScopeChoice::Global));
    }
}
