//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Name greeted when neither `--name` nor the config supplies one.
pub const DEFAULT_NAME: &str = "World";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "template-app", version, about = "Template application that greets a name")]
pub struct Cli {
    /// Name to greet (defaults to "World").
    #[arg(long)]
    pub name: Option<String>,

    /// TOML config file that may supply `name`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn defaults_to_no_overrides() {
        let cli = Cli::parse_from(["template-app"]);
        assert_eq!(cli.name, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn parses_name_verbatim() {
        for name in ["TestUser", "John Doe", "世界", "@User#123!", ""] {
            let cli = Cli::parse_from(["template-app", "--name", name]);
            assert_eq!(cli.name.as_deref(), Some(name));
        }
    }

    #[test]
    fn parses_config_path() {
        let cli = Cli::parse_from(["template-app", "--config", "app.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("app.toml")));
    }

    #[test]
    fn help_is_reported_as_display_help() {
        let err = Cli::try_parse_from(["template-app", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = Cli::try_parse_from(["template-app", "--nmae", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
