use super::variable::Variable;
use itertools::Itertools;

/// Input to any builder call that accepts interpolated text.
///
/// Replaces the source API's runtime type probing with an explicit tagged
/// variant; `impl Into<Param>` conversions keep call sites terse.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Param {
    /// Absent parameter: resolves to the last-result built-in reference.
    #[default]
    LastResult,
    Text(String),
    Bool(bool),
    Number(f64),
    Var(Variable),
    /// Elements rendered individually and joined with newlines (menu lines,
    /// recipient lists, ...).
    List(Vec<Param>),
    /// Arbitrary JSON, rendered to its JSON text form; arrays are rendered
    /// as newline-joined per-element JSON.
    Json(serde_json::Value),
}

impl Param {
    /// Renders the parameter to plain text; embedded references stay in
    /// their placeholder form for the codec to recover.
    pub(crate) fn render(&self, prefix: &str) -> String {
        match self {
            Param::LastResult => format!("{prefix}-@input"),
            Param::Text(s) => s.clone(),
            Param::Bool(b) => b.to_string(),
            Param::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Param::Var(v) => v.to_string(),
            Param::List(items) => items.iter().map(|p| p.render(prefix)).join("\n"),
            Param::Json(serde_json::Value::String(s)) => s.clone(),
            Param::Json(serde_json::Value::Array(items)) => items
                .iter()
                .map(|v| serde_json::to_string(v).unwrap_or_default())
                .join("\n"),
            Param::Json(v) => serde_json::to_string(v).unwrap_or_default(),
        }
    }
}

impl From<&str> for Param {
    fn from(s: &str) -> Self {
        Param::Text(s.to_string())
    }
}

impl From<String> for Param {
    fn from(s: String) -> Self {
        Param::Text(s)
    }
}

impl From<bool> for Param {
    fn from(b: bool) -> Self {
        Param::Bool(b)
    }
}

impl From<f64> for Param {
    fn from(n: f64) -> Self {
        Param::Number(n)
    }
}

impl From<i64> for Param {
    fn from(n: i64) -> Self {
        Param::Number(n as f64)
    }
}

impl From<Variable> for Param {
    fn from(v: Variable) -> Self {
        Param::Var(v)
    }
}

impl From<&Variable> for Param {
    fn from(v: &Variable) -> Self {
        Param::Var(v.clone())
    }
}

impl From<serde_json::Value> for Param {
    fn from(v: serde_json::Value) -> Self {
        Param::Json(v)
    }
}

impl<T: Into<Param>> From<Vec<T>> for Param {
    fn from(items: Vec<T>) -> Self {
        Param::List(items.into_iter().map(Into::into).collect())
    }
}
