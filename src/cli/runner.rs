use crate::{
    cli::args::{CheckNameArgs, Cli, Commands, ConfirmArgs, RestoreArgs, ScopeArgs},
    config::{Config, Contention},
    error::{Error, Result},
    labels::Labels,
    prompt::{AsyncPrompt, ConfirmPayload, PendingAnswer, Prompts, ScopePayload},
    render::{respond, AutomaticRenderer, DialoguerRenderer, PromptRenderer},
    validation::{is_duplicate_name, validate_name, NamedEntity},
};
use log::{debug, warn};
use serde::Serialize;
use serde_json::json;
use std::path::Path;

/// How one prompt request ended, as reported on stdout.
#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome<R> {
    Answered { answer: R },
    Dismissed,
    /// Refused at `open` because another request was pending.
    Rejected,
    Superseded,
    /// Displaced by a later request and never answered.
    Orphaned,
    Closed,
}

impl<R> Outcome<R> {
    fn settle(pending: Option<PendingAnswer<R>>) -> Self {
        let Some(mut pending) = pending else {
            return Outcome::Rejected;
        };
        match pending.try_answer() {
            None => {
                warn!("'{}' request was displaced and never answered", pending.kind());
                Outcome::Orphaned
            }
            Some(Ok(Some(answer))) => Outcome::Answered { answer },
            Some(Ok(None)) => Outcome::Dismissed,
            Some(Err(Error::PromptSuperseded { .. })) => Outcome::Superseded,
            Some(Err(_)) => Outcome::Closed,
        }
    }
}

/// Opens one request per payload, then lets `renderer` answer until the prompt closes.
///
/// All requests are opened before the first answer, so the prompt's contention
/// policy decides what happens to all but the first.
pub fn ask_all<P, R, T>(
    prompt: &mut AsyncPrompt<P, R>,
    payloads: Vec<P>,
    renderer: &T,
) -> Result<Vec<Outcome<R>>>
where
    P: Clone,
    T: PromptRenderer<P, R> + ?Sized,
{
    let mut pending = Vec::with_capacity(payloads.len());
    for payload in payloads {
        match prompt.open(payload) {
            Ok(answer) => pending.push(Some(answer)),
            Err(Error::PromptBusy { kind }) => {
                warn!("'{kind}' prompt is busy, request rejected");
                pending.push(None);
            }
            Err(e) => return Err(e),
        }
    }

    while respond(prompt, renderer)? {
        debug!("'{}' prompt answered, {} queued", prompt.kind(), prompt.queued());
    }

    Ok(pending.into_iter().map(Outcome::settle).collect())
}

/// CLI runner; it is the composition root that owns the prompt instances.
pub struct Runner {
    cli: Cli,
}

impl Runner {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub fn run(self) -> Result<()> {
        match &self.cli.command {
            Commands::Confirm(args) => {
                let (mut prompts, labels) = self.prompts()?;
                run_confirm(&mut prompts, args, labels)
            }
            Commands::Scope(args) => {
                let (mut prompts, labels) = self.prompts()?;
                run_scope(&mut prompts, args, labels)
            }
            Commands::Restore(args) => {
                let (mut prompts, labels) = self.prompts()?;
                run_restore(&mut prompts, args, labels)
            }
            Commands::CheckName(args) => run_check_name(args),
        }
    }

    /// Builds the prompt instances and labels from the configuration.
    fn prompts(&self) -> Result<(Prompts, Labels)> {
        let config = self.load_config()?;
        let prompts = Prompts::new(&self.contention(&config));
        Ok((prompts, Labels::new(config.labels)))
    }

    /// `--on-busy` applies to every prompt kind and wins over the configuration.
    fn contention(&self, config: &Config) -> Contention {
        match self.cli.on_busy {
            Some(policy) => Contention::uniform(policy),
            None => config.contention,
        }
    }

    /// Explicit `--config` must exist; otherwise the current directory is searched
    /// and defaults apply when nothing is found.
    fn load_config(&self) -> Result<Config> {
        match &self.cli.config {
            Some(path) => Config::load_config(path),
            None => match Config::load_config(".") {
                Err(Error::ConfigNotFound { .. }) => Ok(Config::default()),
                other => other,
            },
        }
    }
}

fn print_outcomes<R: Serialize>(outcomes: &[Outcome<R>]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(outcomes)?);
    Ok(())
}

fn run_confirm(prompts: &mut Prompts, args: &ConfirmArgs, labels: Labels) -> Result<()> {
    let payloads = args
        .message
        .iter()
        .map(|message| ConfirmPayload {
            message: message.clone(),
            save_label: args.save_label.clone(),
            variant: args.variant,
        })
        .collect();

    let outcomes = match args.answer {
        Some(answer) => {
            let renderer = match answer.into_answer() {
                Some(confirmed) => AutomaticRenderer::new().with_confirmation(confirmed),
                None => AutomaticRenderer::new(),
            };
            ask_all(&mut prompts.confirm, payloads, &renderer)?
        }
        None => ask_all(&mut prompts.confirm, payloads, &DialoguerRenderer::new(labels))?,
    };
    print_outcomes(&outcomes)
}

fn run_scope(prompts: &mut Prompts, args: &ScopeArgs, labels: Labels) -> Result<()> {
    let payload = ScopePayload {
        preparation_name: args.preparation.clone(),
        main_category: args.main_category.clone(),
        new_category: args.new_category.clone(),
    };

    let outcomes = match args.answer {
        Some(answer) => {
            let renderer = match answer.into_answer() {
                Some(choice) => AutomaticRenderer::new().with_scope(choice),
                None => AutomaticRenderer::new(),
            };
            ask_all(&mut prompts.scope, vec![payload], &renderer)?
        }
        None => ask_all(&mut prompts.scope, vec![payload], &DialoguerRenderer::new(labels))?,
    };
    print_outcomes(&outcomes)
}

fn run_restore(prompts: &mut Prompts, args: &RestoreArgs, labels: Labels) -> Result<()> {
    let outcomes = match args.answer {
        Some(answer) => {
            let renderer = match answer.into_answer() {
                Some(choice) => AutomaticRenderer::new().with_restore(choice),
                None => AutomaticRenderer::new(),
            };
            ask_all(&mut prompts.restore, vec![()], &renderer)?
        }
        None => ask_all(&mut prompts.restore, vec![()], &DialoguerRenderer::new(labels))?,
    };
    print_outcomes(&outcomes)
}

fn load_entities(path: &Path) -> Result<Vec<NamedEntity>> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        Error::Other(anyhow::anyhow!("Invalid entities file '{}': {e}", path.display()))
    })
}

fn run_check_name(args: &CheckNameArgs) -> Result<()> {
    let entities = load_entities(&args.entities)?;
    let current_id = args.current_id.as_deref();
    let duplicate = is_duplicate_name(&args.name, &entities, current_id);
    println!("{}", json!({ "name": args.name, "duplicate": duplicate }));

    validate_name(&args.name, &entities, current_id)?;
    Ok(())
}

/// Main entry point for CLI execution
pub fn run(cli: Cli) -> Result<()> {
    Runner::new(cli).run()
}
