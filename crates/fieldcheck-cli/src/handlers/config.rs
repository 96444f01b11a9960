//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigFormat, ConfigInitArgs, ConfigShowArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Init(init_args) => handle_config_init(init_args, output),
        ConfigAction::Show(show_args) => handle_config_show(show_args, config, output),
    }
}

/// Handle config init subcommand
fn handle_config_init(args: ConfigInitArgs, output: &mut OutputWriter) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(Error::config(format!(
            "{} already exists; use --force to overwrite it",
            args.path.display()
        )));
    }

    Config::default().save(&args.path)?;
    output.success(&format!("✓ Created config at {}", args.path.display()))?;
    output.info("Edit it to customize settings for your environment.")?;

    Ok(())
}

/// Handle config show subcommand
fn handle_config_show(
    args: ConfigShowArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let content = match args.format {
        ConfigFormat::Toml => toml::to_string_pretty(config)
            .map_err(|e| Error::config(format!("Failed to serialize as TOML: {}", e)))?,
        ConfigFormat::Json => serde_json::to_string_pretty(config)
            .map_err(|e| Error::config(format!("Failed to serialize as JSON: {}", e)))?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)
            .map_err(|e| Error::config(format!("Failed to serialize as YAML: {}", e)))?,
    };

    output.writeln(content.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use tempfile::TempDir;

    fn quiet_output() -> OutputWriter {
        OutputWriter::with_writer(OutputFormat::Human, false, true, Box::new(std::io::sink()))
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".fieldcheck.yaml");
        std::fs::write(&path, "validation:\n  mode: strict\n").unwrap();

        let args = ConfigInitArgs {
            path: path.clone(),
            force: false,
        };
        let err = handle_config_init(args, &mut quiet_output()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(
            Config::from_file(&path).unwrap().validation.mode,
            fieldcheck_core::ValidationMode::Strict
        );

        let args = ConfigInitArgs {
            path: path.clone(),
            force: true,
        };
        handle_config_init(args, &mut quiet_output()).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_writes_toml_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("fieldcheck.toml");

        let args = ConfigInitArgs {
            path: path.clone(),
            force: false,
        };
        handle_config_init(args, &mut quiet_output()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[validation]"));
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());
    }
}
