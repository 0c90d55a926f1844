//! Error types for option loading and validation.

use std::{
    cmp::{max, min},
    fmt::Write as _,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error, Clone)]
/// Errors produced while loading, parsing, or validating hotkey options.
pub enum Error {
    #[error("{message}")]
    /// I/O or filesystem read error.
    Read {
        /// Optional path associated with the read error.
        path: Option<PathBuf>,
        /// Human-readable error message.
        message: String,
    },
    #[error("{message}")]
    /// RON syntax or shape error.
    Parse {
        /// Optional path associated with the parse error.
        path: Option<PathBuf>,
        /// Parser message, including its own location.
        message: String,
    },
    #[error("{message}")]
    /// A well-formed value that is not acceptable, such as an unknown key spec.
    Validation {
        /// Optional path associated with the validation error.
        path: Option<PathBuf>,
        /// Optional 1-based line number.
        line: Option<usize>,
        /// Optional 1-based column number.
        col: Option<usize>,
        /// Human-readable error message.
        message: String,
        /// Optional excerpt including a caret at the error location.
        excerpt: Option<String>,
    },
}

impl Error {
    /// A validation error without location.
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::Validation {
            path: None,
            line: None,
            col: None,
            message: message.into(),
            excerpt: None,
        }
    }

    /// Attach a path to errors that do not carry one yet.
    pub(crate) fn with_path(mut self, p: &Path) -> Self {
        match &mut self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::Validation { path, .. } => {
                if path.is_none() {
                    *path = Some(p.to_path_buf());
                }
            }
        }
        self
    }

    /// Locate the first occurrence of `needle` in `source` and attach the
    /// position and an excerpt to a validation error.
    pub(crate) fn located_in(mut self, source: &str, needle: &str) -> Self {
        if let Self::Validation {
            line, col, excerpt, ..
        } = &mut self
            && let Some((l, c)) = locate(source, needle)
        {
            *line = Some(l);
            *col = Some(c);
            *excerpt = Some(excerpt_at(source, l, c));
        }
        self
    }

    /// Render a human-friendly error message including location and an excerpt when available.
    pub fn pretty(&self) -> String {
        match self {
            Self::Read { path, message } => match path {
                Some(p) => format!("Read error at {}: {}", p.display(), message),
                None => format!("Read error: {}", message),
            },
            Self::Parse { path, message } => match path {
                Some(p) => format!("Options parse error in {}\n{}", p.display(), message),
                None => format!("Options parse error\n{}", message),
            },
            Self::Validation {
                path,
                line,
                col,
                message,
                excerpt,
            } => {
                let loc = match (line, col) {
                    (Some(l), Some(c)) => format!("{}:{}", l, c),
                    (Some(l), None) => format!("{}", l),
                    _ => String::new(),
                };
                match (path, excerpt) {
                    (Some(p), Some(ex)) if !loc.is_empty() => format!(
                        "Options validation error at {}:{}\n{}\n{}",
                        p.display(),
                        loc,
                        message,
                        ex
                    ),
                    (Some(p), _) if !loc.is_empty() => format!(
                        "Options validation error at {}:{}\n{}",
                        p.display(),
                        loc,
                        message
                    ),
                    (Some(p), _) => {
                        format!("Options validation error at {}\n{}", p.display(), message)
                    }
                    (None, Some(ex)) if !loc.is_empty() => {
                        format!("Options validation error at {}\n{}\n{}", loc, message, ex)
                    }
                    (None, _) if !loc.is_empty() => {
                        format!("Options validation error at {}\n{}", loc, message)
                    }
                    (None, _) => format!("Options validation error\n{}", message),
                }
            }
        }
    }

    /// Access the optional path attached to this error.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::Validation { path, .. } => {
                path.as_deref()
            }
        }
    }
}

/// 1-based line and column of the first occurrence of `needle`.
fn locate(source: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    source.lines().enumerate().find_map(|(i, text)| {
        text.find(needle)
            .map(|byte| (i + 1, text[..byte].chars().count() + 1))
    })
}

/// Build a small 2-3 line excerpt with a caret at `(line_no, col_no)`.
pub fn excerpt_at(source: &str, line_no: usize, col_no: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let total = lines.len();
    let start = max(1usize, line_no.saturating_sub(2));
    let end = min(total, line_no + 1);

    let mut out = String::new();
    for n in start..=end {
        let text = lines.get(n - 1).copied().unwrap_or("");
        let _ignored = writeln!(out, " {:>4} | {}", n, text);
        if n == line_no {
            let prefix = format!(" {:>4} | ", n);
            let _ignored = writeln!(
                out,
                "{}{}^",
                " ".repeat(prefix.len()),
                " ".repeat(col_no.saturating_sub(1))
            );
        }
    }
    out
}
