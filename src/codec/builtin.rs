use crate::error::DeclarationError;
use crate::flow::{DateStyle, TimeStyle};

/// Predefined references into the host runtime's context, usable wherever a
/// user-declared variable is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Builtin {
    /// Output of the previous action.
    LastResult,
    /// Current clipboard text.
    Clipboard,
    /// Current date rendered with a date/time style pair.
    CurrentDate {
        date_style: DateStyle,
        time_style: TimeStyle,
    },
    /// Current date rendered with a custom format string.
    DateFormat(String),
    FileName,
    FileExtension,
    FullText,
    SelectedText,
    SelectedLocation,
    SelectedLength,
}

impl Builtin {
    /// Current date with the app's default rendering (medium date, no time).
    pub fn current_date() -> Self {
        Builtin::CurrentDate {
            date_style: DateStyle::MediumStyle,
            time_style: TimeStyle::NoStyle,
        }
    }

    /// Current date with a custom format. Formats containing `)` or line
    /// breaks cannot be framed inside a placeholder and are rejected here
    /// rather than at serialization time.
    pub fn date_format(format: &str) -> Result<Self, DeclarationError> {
        if format.is_empty() || format.contains(')') || format.contains('\n') || format.contains('\r')
        {
            return Err(DeclarationError::InvalidDateFormat {
                format: format.to_string(),
            });
        }
        Ok(Builtin::DateFormat(format.to_string()))
    }

    /// The wire variable identifier for this built-in.
    pub fn id(&self) -> String {
        match self {
            Builtin::LastResult => "@input".to_string(),
            Builtin::Clipboard => "@clipboard.text".to_string(),
            Builtin::CurrentDate {
                date_style,
                time_style,
            } => format!("@date.style({},{})", date_style.code(), time_style.code()),
            Builtin::DateFormat(format) => format!("@date.format({format})"),
            Builtin::FileName => "@editor.file-name".to_string(),
            Builtin::FileExtension => "@editor.file-extension".to_string(),
            Builtin::FullText => "@editor.full-text".to_string(),
            Builtin::SelectedText => "@editor.selection-text".to_string(),
            Builtin::SelectedLocation => "@editor.selection-location".to_string(),
            Builtin::SelectedLength => "@editor.selection-length".to_string(),
        }
    }
}

/// Regex fragments for every built-in id shape, matched only when anchored
/// to the session prefix.
pub(crate) const SIGNED_PATTERNS: &[&str] = &[
    "@input",
    r"@clipboard\.text",
    r"@date\.style\(\d,\d\)",
    r"@date\.format\([^)\r\n]+\)",
    r"@editor\.file-name",
    r"@editor\.file-extension",
    r"@editor\.full-text",
    r"@editor\.selection-text",
    r"@editor\.selection-location",
    r"@editor\.selection-length",
];
