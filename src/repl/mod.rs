//! Line-oriented read-parse-print loop
//!
//! Each input line gets a fresh [`Lexer`] and [`Parser`]. A line that parses
//! cleanly is echoed back one rendered statement per line; the first line with
//! parser errors prints them and ends the session with [`ReplError::Parse`].

pub mod render;
pub mod theme;

use std::fmt;
use std::io::{self, BufRead, Write};

use crossterm::tty::IsTty;

use crate::parser::{Lexer, ParseError, Parser};
use render::Renderer;

pub const DEFAULT_PROMPT: &str = "Enter Input:";

/// REPL settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    pub color: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            color: true,
        }
    }
}

impl ReplConfig {
    /// Build a config from command-line arguments (program name excluded).
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--no-color" => config.color = false,
                "--prompt" => {
                    config.prompt = args.next().ok_or(ConfigError::MissingValue("--prompt"))?;
                }
                "-h" | "--help" => return Err(ConfigError::HelpRequested),
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        Ok(config)
    }

    /// Turn color off when `NO_COLOR` is set or stdout is not a terminal.
    pub fn with_environment(mut self) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if no_color || !io::stdout().is_tty() {
            self.color = false;
        }
        self
    }
}

/// Command-line configuration error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    HelpRequested,
    MissingValue(&'static str),
    UnknownArgument(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HelpRequested => write!(f, "help requested"),
            ConfigError::MissingValue(flag) => write!(f, "Missing value for '{}'", flag),
            ConfigError::UnknownArgument(arg) => write!(f, "Unknown argument '{}'", arg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Why a REPL session ended early
#[derive(Debug)]
pub enum ReplError {
    Io(io::Error),
    /// Errors from the first line that failed to parse
    Parse(Vec<ParseError>),
}

impl fmt::Display for ReplError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplError::Io(err) => write!(f, "I/O error: {}", err),
            ReplError::Parse(errors) => write!(f, "parser has {} errors", errors.len()),
        }
    }
}

impl std::error::Error for ReplError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplError::Io(err) => Some(err),
            ReplError::Parse(_) => None,
        }
    }
}

impl From<io::Error> for ReplError {
    fn from(err: io::Error) -> Self {
        ReplError::Io(err)
    }
}

/// Run the loop until `input` is exhausted or a line fails to parse.
pub fn start<R, W>(input: R, mut output: W, config: &ReplConfig) -> Result<(), ReplError>
where
    R: BufRead,
    W: Write,
{
    let renderer = Renderer::new(config.color);
    let mut lines = input.lines();

    loop {
        write!(output, "{} ", renderer.prompt(&config.prompt))?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };
        let line = line?;

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            write_errors(&mut output, &renderer, parser.errors())?;
            return Err(ReplError::Parse(parser.errors().to_vec()));
        }

        for statement in &program.statements {
            writeln!(output, "{}", renderer.statement(statement))?;
        }
        writeln!(output)?;
    }
}

fn write_errors<W: Write>(
    output: &mut W,
    renderer: &Renderer,
    errors: &[ParseError],
) -> io::Result<()> {
    let header = format!("parser has {} errors", errors.len());
    writeln!(output, "{}", renderer.error(&header))?;
    for err in errors {
        let line = format!("parser error: {:?}", err.to_string());
        writeln!(output, "{}", renderer.error(&line))?;
    }
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_config() {
        let config = ReplConfig::from_args(Vec::new()).unwrap();
        assert_eq!(config, ReplConfig::default());
        assert_eq!(config.prompt, DEFAULT_PROMPT);
        assert!(config.color);
    }

    #[test]
    fn test_config_flags() {
        let config = ReplConfig::from_args(args(&["--no-color", "--prompt", ">>"])).unwrap();
        assert!(!config.color);
        assert_eq!(config.prompt, ">>");
    }

    #[test]
    fn test_config_errors() {
        assert_eq!(
            ReplConfig::from_args(args(&["--prompt"])),
            Err(ConfigError::MissingValue("--prompt"))
        );
        assert_eq!(
            ReplConfig::from_args(args(&["--verbose"])),
            Err(ConfigError::UnknownArgument("--verbose".to_string()))
        );
        assert_eq!(
            ReplConfig::from_args(args(&["--help"])),
            Err(ConfigError::HelpRequested)
        );
    }

    #[test]
    fn test_blank_line_renders_nothing() {
        let config = ReplConfig::from_args(args(&["--no-color"])).unwrap();
        let mut output = Vec::new();
        start("\n".as_bytes(), &mut output, &config).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "Enter Input: \nEnter Input: \n");
    }
}
