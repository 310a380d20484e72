//! Line scanner for the indentation-delimited tree encoding.
//!
//! Each non-blank line is split into its indentation, its node kind and an optional
//! parenthesized argument. Interpreting the argument is left to the parser.

use crate::ast::NodeKind;
use regex::Regex;
use std::sync::LazyLock;

static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<kind>[^\s(]+)[ \t]*(?:(?P<open>\()(?P<arg>[^)]*)(?P<close>\))?)?(?P<rest>.*)$")
        .expect("line pattern is valid")
});

/// Errors produced while scanning a single line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("line {line}: unknown node kind `{kind}` in `{text}`")]
    UnknownKind {
        line: usize,
        kind: String,
        text: String,
    },

    #[error("line {line}: malformed argument ({reason}) in `{text}`")]
    MalformedArgument {
        line: usize,
        reason: String,
        text: String,
    },
}

impl LexError {
    /// 1-based number of the offending line.
    pub fn line(&self) -> usize {
        match self {
            LexError::UnknownKind { line, .. } | LexError::MalformedArgument { line, .. } => *line,
        }
    }
}

/// One scanned line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number in the source
    pub number: usize,
    /// Count of leading spaces
    pub indent: usize,
    pub kind: NodeKind,
    /// Text between the parentheses, if any
    pub arg: Option<&'a str>,
    /// The line without its indentation, for diagnostics
    pub text: &'a str,
}

pub struct Lexer<'a> {
    source: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer { source }
    }

    /// Scan every non-blank line of the source.
    pub fn tokenize(&self) -> Result<Vec<Line<'a>>, LexError> {
        self.source
            .lines()
            .enumerate()
            .filter(|(_, raw)| !raw.trim().is_empty())
            .map(|(index, raw)| scan_line(index + 1, raw))
            .collect()
    }
}

/// Scan a single line. `number` is only used for diagnostics.
pub fn scan_line(number: usize, raw: &str) -> Result<Line<'_>, LexError> {
    let raw = raw.strip_suffix('\r').unwrap_or(raw);
    let indent = raw.len() - raw.trim_start_matches(' ').len();
    let text = &raw[indent..];

    let Some(captures) = LINE_PATTERN.captures(text) else {
        return Err(LexError::UnknownKind {
            line: number,
            kind: String::new(),
            text: text.to_string(),
        });
    };

    let name = &captures["kind"];
    let kind = NodeKind::from_name(name).ok_or_else(|| LexError::UnknownKind {
        line: number,
        kind: name.to_string(),
        text: text.to_string(),
    })?;

    let malformed = |reason: &str| LexError::MalformedArgument {
        line: number,
        reason: reason.to_string(),
        text: text.to_string(),
    };

    let arg = match (captures.name("open"), captures.name("close")) {
        (Some(_), Some(_)) => captures.name("arg").map(|m| m.as_str()),
        (Some(_), None) => return Err(malformed("missing closing parenthesis")),
        (None, _) => None,
    };

    if !captures["rest"].trim().is_empty() {
        return Err(malformed("unexpected text after node kind"));
    }

    Ok(Line {
        number,
        indent,
        kind,
        arg,
        text,
    })
}
