//! The rendering side of a prompt
//!
//! A renderer shows an open prompt's payload to the user and reports the choice.
//! [`respond`] wires a renderer to an [`AsyncPrompt`]: it renders whatever is
//! currently open and feeds the result to `choose`.
//!
//! - `dialoguer`: terminal implementation
//! - `automatic`: scripted answers for non-interactive runs and tests

use crate::{error::Result, prompt::AsyncPrompt};

pub mod automatic;
pub mod dialoguer;

pub use automatic::AutomaticRenderer;
pub use self::dialoguer::DialoguerRenderer;

/// Shows a payload of type `P` and returns the user's answer, or `None` when the
/// prompt was dismissed without a choice.
pub trait PromptRenderer<P, R> {
    fn render(&self, payload: &P) -> Result<Option<R>>;
}

/// Renders the open prompt, if any, and resolves it with the user's answer.
///
/// Returns `false` without touching the prompt when nothing is open.
pub fn respond<P, R, T>(prompt: &mut AsyncPrompt<P, R>, renderer: &T) -> Result<bool>
where
    P: Clone,
    T: PromptRenderer<P, R> + ?Sized,
{
    let Some(payload) = prompt.payload() else {
        return Ok(false);
    };
    let answer = renderer.render(payload)?;
    prompt.choose(answer);
    Ok(true)
}
