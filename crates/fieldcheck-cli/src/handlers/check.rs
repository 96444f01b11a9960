//! Single-value check command handler

use super::effective_mode;
use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::{redaction, timing::Timer};
use crate::output::{CheckOutcome, OutputWriter};
use fieldcheck_core::{parse_rules, Validator};
use tracing::{debug, info, instrument};

/// Handle the check command
#[instrument(skip_all, fields(rules = %args.rules, strict = args.strict))]
pub fn handle_check(args: CheckArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("check_command", &args.rules);
    let mode = effective_mode(args.strict, config);
    debug!(value = %redaction::redact_sensitive(&args.value), %mode, "Checking value");

    let rules = parse_rules(&args.rules);
    let result = Validator::new(mode).validate(&args.value, &rules)?;
    info!(valid = result.valid, "Check finished");

    let outcome = CheckOutcome {
        rules: args.rules,
        mode,
        valid: result.valid,
        message: result.error().map(str::to_string),
    };
    output.check_outcome(&outcome)?;

    if outcome.valid {
        Ok(())
    } else {
        Err(Error::ValidationFailed { failures: 1 })
    }
}
