//! Tax-ID command handler

use crate::cli::TaxIdArgs;
use crate::error::{Error, Result};
use crate::logging::redaction;
use crate::output::{OutputWriter, TaxIdOutcome};
use fieldcheck_core::validate_tax_id;
use tracing::{debug, instrument};

/// Handle the tax-id command
#[instrument(skip_all)]
pub fn handle_tax_id(args: TaxIdArgs, output: &mut OutputWriter) -> Result<()> {
    debug!(value = %redaction::redact_sensitive(&args.value), "Checking tax ID");

    let outcome = match validate_tax_id(&args.value) {
        Ok(tax_id) => TaxIdOutcome {
            valid: true,
            formatted: Some(tax_id.to_string()),
            reason: None,
        },
        Err(reason) => {
            debug!(%reason, "Tax ID rejected");
            TaxIdOutcome {
                valid: false,
                formatted: None,
                reason: Some(reason.to_string()),
            }
        }
    };
    output.tax_id_outcome(&outcome)?;

    if outcome.valid {
        Ok(())
    } else {
        Err(Error::ValidationFailed { failures: 1 })
    }
}
