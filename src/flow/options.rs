//! Option tables: named choices and the integer codes the app expects.

/// Comparison kinds for `@flow.if`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    EqualTo,
    NotEqualTo,
    Contains,
    NotContain,
    BeginsWith,
    EndsWith,
    MatchesRegex,
}

impl Comparison {
    pub fn code(self) -> u32 {
        match self {
            Comparison::EqualTo => 0,
            Comparison::NotEqualTo => 1,
            Comparison::Contains => 2,
            Comparison::NotContain => 3,
            Comparison::BeginsWith => 4,
            Comparison::EndsWith => 5,
            Comparison::MatchesRegex => 6,
        }
    }
}

/// Iteration modes for `@flow.foreach-begin`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ForEachMode {
    #[default]
    EachLine,
    EachRegexMatch,
}

impl ForEachMode {
    pub fn code(self) -> u32 {
        match self {
            ForEachMode::EachLine => 0,
            ForEachMode::EachRegexMatch => 1,
        }
    }
}

/// What `@flow.get-variable` does when the variable is undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Fallback {
    #[default]
    ReturnEmptyText,
    FinishRunning,
}

impl Fallback {
    pub fn code(self) -> u32 {
        match self {
            Fallback::ReturnEmptyText => 0,
            Fallback::FinishRunning => 1,
        }
    }
}

/// Case conversion modes for `@text.case`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCaseMode {
    UpperCase,
    LowerCase,
    Capitalize,
}

impl TextCaseMode {
    pub fn code(self) -> u32 {
        match self {
            TextCaseMode::UpperCase => 0,
            TextCaseMode::LowerCase => 1,
            TextCaseMode::Capitalize => 2,
        }
    }
}

/// Presentation styles for `@ui.toast`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastStyle {
    #[default]
    TextOnly,
    Success,
    Error,
}

impl ToastStyle {
    pub fn code(self) -> u32 {
        match self {
            ToastStyle::TextOnly => 0,
            ToastStyle::Success => 1,
            ToastStyle::Error => 2,
        }
    }
}

/// HTTP methods for `@util.request`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl RequestMethod {
    pub fn code(self) -> u32 {
        match self {
            RequestMethod::Get => 0,
            RequestMethod::Post => 1,
            RequestMethod::Put => 2,
            RequestMethod::Patch => 3,
            RequestMethod::Delete => 4,
        }
    }
}

/// Browser choice for `@util.open-url`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Browser {
    #[default]
    InAppSafari,
    Safari,
}

impl Browser {
    pub fn code(self) -> u32 {
        match self {
            Browser::InAppSafari => 0,
            Browser::Safari => 1,
        }
    }
}

/// Date rendering styles for the current-date built-in variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    NoStyle,
    ShortStyle,
    MediumStyle,
    LongStyle,
    FullStyle,
}

impl DateStyle {
    pub fn code(self) -> u32 {
        match self {
            DateStyle::NoStyle => 0,
            DateStyle::ShortStyle => 1,
            DateStyle::MediumStyle => 2,
            DateStyle::LongStyle => 3,
            DateStyle::FullStyle => 4,
        }
    }
}

/// Time rendering styles for the current-date built-in variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeStyle {
    NoStyle,
    ShortStyle,
    MediumStyle,
    LongStyle,
    FullStyle,
}

impl TimeStyle {
    pub fn code(self) -> u32 {
        match self {
            TimeStyle::NoStyle => 0,
            TimeStyle::ShortStyle => 1,
            TimeStyle::MediumStyle => 2,
            TimeStyle::LongStyle => 3,
            TimeStyle::FullStyle => 4,
        }
    }
}
