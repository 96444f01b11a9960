//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

pub mod check;
pub mod completions;
pub mod config;
pub mod form;
pub mod rules;
pub mod tax_id;

pub use check::handle_check;
pub use completions::handle_completions;
pub use config::handle_config;
pub use form::handle_form;
pub use rules::handle_rules;
pub use tax_id::handle_tax_id;

use crate::config::Config;
use fieldcheck_core::ValidationMode;

/// Strict when requested on the command line or in the configuration
pub(crate) fn effective_mode(strict_flag: bool, config: &Config) -> ValidationMode {
    if strict_flag {
        ValidationMode::Strict
    } else {
        config.validation.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_configured_mode() {
        let mut config = Config::default();
        assert_eq!(effective_mode(false, &config), ValidationMode::Lenient);
        assert_eq!(effective_mode(true, &config), ValidationMode::Strict);

        config.validation.mode = ValidationMode::Strict;
        assert_eq!(effective_mode(false, &config), ValidationMode::Strict);
    }
}
