//! CLI argument parsing and command handler

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::annotator::annotate_file;
use crate::formatter::write_mapping;

/// apinamemap: map line numbers to the first parenthesized text on each line
///
/// Every argument counts toward the one-path rule, including ones that look
/// like flags, so clap's help and version flags are disabled and the
/// positional takes hyphenated values as-is. Logging is controlled through
/// `RUST_LOG` only.
#[derive(Parser, Debug)]
#[command(
    name = "apinamemap",
    about = "Generate an API name map from a text file",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// File to scan (exactly one)
    #[arg(
        value_name = "PATH",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Default: only warnings and errors; RUST_LOG overrides
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .init();

        match self.paths.as_slice() {
            [path] => handle_annotate(path),
            paths => {
                // Misuse is silent: no output, success status
                log::debug!("Expected exactly one path, got {}; nothing to do", paths.len());
                Ok(())
            }
        }
    }
}

fn handle_annotate(path: &Path) -> Result<()> {
    let annotations = annotate_file(path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_mapping(&mut out, &annotations).context("Failed to write mapping to stdout")?;
    out.flush().context("Failed to flush stdout")?;

    log::info!("Wrote {} entries for {}", annotations.len(), path.display());
    Ok(())
}

/// Whether an error was caused by writing to a closed pipe
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_single_path() {
        let cli = Cli::try_parse_from(["apinamemap", "apis.txt"]).unwrap();
        assert_eq!(cli.paths, vec![PathBuf::from("apis.txt")]);
    }

    #[test]
    fn test_parse_no_paths() {
        let cli = Cli::try_parse_from(["apinamemap"]).unwrap();
        assert!(cli.paths.is_empty());
    }

    #[test]
    fn test_parse_many_paths() {
        let cli = Cli::try_parse_from(["apinamemap", "a.txt", "b.txt"]).unwrap();
        assert_eq!(cli.paths.len(), 2);
    }

    #[test]
    fn test_flag_like_arguments_are_paths() {
        let cli = Cli::try_parse_from(["apinamemap", "-v", "apis.txt"]).unwrap();
        assert_eq!(cli.paths, vec![PathBuf::from("-v"), PathBuf::from("apis.txt")]);
    }

    #[test]
    fn test_trailing_flag_is_a_path() {
        let cli = Cli::try_parse_from(["apinamemap", "a.txt", "--bogus"]).unwrap();
        assert_eq!(cli.paths, vec![PathBuf::from("a.txt"), PathBuf::from("--bogus")]);
    }

    #[test]
    fn test_single_hyphenated_path() {
        let cli = Cli::try_parse_from(["apinamemap", "-x"]).unwrap();
        assert_eq!(cli.paths, vec![PathBuf::from("-x")]);

        let cli = Cli::try_parse_from(["apinamemap", "--help"]).unwrap();
        assert_eq!(cli.paths, vec![PathBuf::from("--help")]);
    }

    #[test]
    fn test_is_broken_pipe() {
        let pipe = anyhow::Error::new(io::Error::from(io::ErrorKind::BrokenPipe))
            .context("Failed to write mapping to stdout");
        assert!(is_broken_pipe(&pipe));

        let missing = anyhow::Error::new(io::Error::from(io::ErrorKind::NotFound));
        assert!(!is_broken_pipe(&missing));
    }
}
