//
//  logfire-cli
//  interactive/prompt.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Confirmation prompts for destructive commands.
//!
//! Wraps `dialoguer` so that every destructive command follows the same
//! rules:
//!
//! - `--yes` skips the prompt
//! - with prompts disabled (`--no-prompt`, `LOGFIRE_NO_PROMPT` or
//!   `prompt = "disabled"`) and no `--yes`, the command refuses to run
//! - declining the prompt yields [`Cancelled`]
//!
//! # Example
//!
//! ```no_run
//! use logfire_cli::interactive::confirm_destructive;
//!
//! confirm_destructive("Delete dashboard 'latency'?", false, true)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::Result;
use dialoguer::Confirm;
use thiserror::Error;

use crate::api::LogfireError;

/// The user declined a confirmation prompt.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Cancelled.")]
pub struct Cancelled;

/// Asks a yes/no question with a default answer.
pub fn prompt_confirm_with_default(message: &str, default: bool) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()?;
    Ok(confirmed)
}

/// Gates a destructive action.
///
/// # Parameters
///
/// * `message` - The question shown to the user
/// * `yes` - `true` when `--yes` was passed
/// * `prompts_enabled` - `false` when prompts have been disabled
///
/// # Errors
///
/// - [`LogfireError::Usage`] when prompting is disabled and `yes` is not set
/// - [`Cancelled`] when the user answers no
pub fn confirm_destructive(message: &str, yes: bool, prompts_enabled: bool) -> Result<()> {
    if yes {
        return Ok(());
    }
    if !prompts_enabled {
        return Err(LogfireError::usage(
            "Refusing to continue without confirmation while prompts are disabled; pass --yes",
        )
        .into());
    }
    if prompt_confirm_with_default(message, false)? {
        Ok(())
    } else {
        Err(Cancelled.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ErrorKind;

    #[test]
    fn test_yes_skips_prompt() {
        assert!(confirm_destructive("Delete?", true, false).is_ok());
    }

    #[test]
    fn test_disabled_prompts_without_yes_is_usage_error() {
        let err = confirm_destructive("Delete?", false, false).unwrap_err();
        let err = err.downcast_ref::<LogfireError>().unwrap();
        assert_eq!(err.kind(), ErrorKind::Usage);
    }
}
