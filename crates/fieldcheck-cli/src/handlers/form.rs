//! Form definition command handler

use super::effective_mode;
use crate::cli::FormArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use fieldcheck_core::form::load_values;
use fieldcheck_core::{Form, FormDefinition};
use tracing::{debug, info, instrument, warn};

/// Handle the form command
#[instrument(skip_all, fields(definition = %args.definition.display(), strict = args.strict))]
pub fn handle_form(args: FormArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let timer = Timer::with_details("form_command", &args.definition.display().to_string());

    if !args.definition.exists() {
        return Err(Error::FileNotFound {
            path: args.definition.clone(),
        });
    }

    let definition = FormDefinition::from_path(&args.definition)?;
    let mode = effective_mode(args.strict, config);
    let mut form = Form::from_definition(&definition, mode)?;

    if let Some(values_path) = &args.values {
        if !values_path.exists() {
            return Err(Error::FileNotFound {
                path: values_path.clone(),
            });
        }
        let values = load_values(values_path)?;
        debug!(count = values.len(), "Applying field values");
        for name in form.apply_values(&values) {
            warn!(field = %name, "Ignoring value for unknown field");
            output.warning(&format!("Ignoring value for unknown field '{}'", name))?;
        }
    }

    if let Some(name) = &definition.name {
        output.section(name)?;
    }

    let outcome = form.submit();
    let report = match &outcome {
        Ok(_) => form.report(),
        Err(report) => report.clone(),
    };
    info!(
        valid = report.valid,
        failures = report.failure_count(),
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "Form validated"
    );
    output.form_report(&report, config.validation.show_passing)?;

    match outcome {
        Ok(_) => Ok(()),
        Err(report) => Err(Error::ValidationFailed {
            failures: report.failure_count(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_definition(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("signup.yaml");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn quiet_output() -> OutputWriter {
        OutputWriter::with_writer(OutputFormat::Json, false, true, Box::new(std::io::sink()))
    }

    #[test]
    fn test_strict_unknown_rule_exits_like_check() {
        let dir = TempDir::new().unwrap();
        let definition = write_definition(
            &dir,
            "fields:\n  - name: postcode\n    rules: required|zip\n    value: \"01310\"\n",
        );

        let args = FormArgs {
            definition: definition.clone(),
            values: None,
            strict: true,
        };
        let err = handle_form(args, &Config::default(), &mut quiet_output()).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.should_show_help());

        // Lenient mode skips the unknown rule
        let args = FormArgs {
            definition,
            values: None,
            strict: false,
        };
        handle_form(args, &Config::default(), &mut quiet_output()).unwrap();
    }

    #[test]
    fn test_failing_fields_are_counted() {
        let dir = TempDir::new().unwrap();
        let definition = write_definition(
            &dir,
            "fields:\n  - name: name\n    rules: required\n  - name: cpf\n    rules: taxId\n    value: \"12345678900\"\n",
        );

        let args = FormArgs {
            definition,
            values: None,
            strict: false,
        };
        let err = handle_form(args, &Config::default(), &mut quiet_output()).unwrap_err();
        assert!(matches!(err, Error::ValidationFailed { failures: 2 }));
    }
}
