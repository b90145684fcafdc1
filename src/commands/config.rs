//! Config command - inspect or initialize the config file

use crate::{NookError, cli::ConfigCommands, config::NookConfig};
use std::io::Write;
use std::path::Path;

type Result<T> = std::result::Result<T, NookError>;

/// Execute a config subcommand against the file at `path`
///
/// `config` is the already-loaded effective configuration.
///
/// # Errors
/// Returns an error if the config cannot be serialized or written, or if
/// `init` would overwrite an existing file without `force`.
pub fn execute(
    config: &NookConfig,
    command: &ConfigCommands,
    path: &Path,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            write!(out, "{}", config.to_toml()?)?;
        }
        ConfigCommands::Path => {
            writeln!(out, "{}", path.display())?;
        }
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                return Err(NookError::ConfigError(::config::ConfigError::Message(
                    format!(
                        "Config file already exists at {}. Use --force to overwrite.",
                        path.display()
                    ),
                )));
            }
            NookConfig::default().save_to(path)?;
            log::info!("config initialized path={}", path.display());
            if !quiet {
                writeln!(out, "Wrote default config to {}", path.display())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestConfigFile;

    fn run(config: &NookConfig, command: &ConfigCommands, path: &Path) -> Result<String> {
        let mut out = Vec::new();
        execute(config, command, path, false, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_show_prints_toml() {
        let file = TestConfigFile::empty();
        let text = run(&NookConfig::default(), &ConfigCommands::Show, file.path()).unwrap();
        assert!(text.contains("detail_span = 0.2"));
        assert!(text.contains("[browse_region]"));
    }

    #[test]
    fn test_path() {
        let file = TestConfigFile::empty();
        let text = run(&NookConfig::default(), &ConfigCommands::Path, file.path()).unwrap();
        assert_eq!(text.trim_end(), file.path().display().to_string());
    }

    #[test]
    fn test_init_writes_defaults_and_refuses_overwrite() {
        let file = TestConfigFile::empty();
        let init = ConfigCommands::Init { force: false };

        run(&NookConfig::default(), &init, file.path()).unwrap();
        assert_eq!(file.load(), NookConfig::default());

        let err = run(&NookConfig::default(), &init, file.path()).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        let forced = ConfigCommands::Init { force: true };
        assert!(run(&NookConfig::default(), &forced, file.path()).is_ok());
    }
}
