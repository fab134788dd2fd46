use serde::{Deserialize, Serialize};

/// Value carried by a generation option
///
/// Mirrors the three shapes schematic options take on the command line:
/// a bare switch, a single value, or a repeatable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    String(String),
    List(Vec<String>),
}

impl OptionValue {
    /// The string form, when this is a single value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this value switches the flag on (`true` or the string `"true"`)
    pub fn is_true(&self) -> bool {
        match self {
            OptionValue::Bool(b) => *b,
            OptionValue::String(s) => s == "true",
            OptionValue::List(_) => false,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::String(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        OptionValue::List(value)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(value: Vec<&str>) -> Self {
        OptionValue::List(value.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OptionValue {
    fn from(value: [&str; N]) -> Self {
        OptionValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

/// A named option as passed to a schematic, e.g. `("changeDetection", "OnPush")`
///
/// Serialized as a two-element array so presets read like `["export", true]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, OptionValue)", into = "(String, OptionValue)")]
pub struct CliOption {
    pub name: String,
    pub value: OptionValue,
}

impl CliOption {
    pub fn new(name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// A bare switch, equivalent to `--<name>`
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// Command-line arguments for this option
    ///
    /// `true` gives `--name`, `false` gives nothing, a string (even `"false"`) gives
    /// `--name value` and a list repeats `--name v` once per element in order.
    pub fn to_args(&self) -> Vec<String> {
        let flag = format!("--{}", self.name);
        match &self.value {
            OptionValue::Bool(true) => vec![flag],
            OptionValue::Bool(false) => Vec::new(),
            OptionValue::String(s) if s == "true" => vec![flag],
            OptionValue::String(s) => vec![flag, s.clone()],
            OptionValue::List(values) => values
                .iter()
                .flat_map(|v| [flag.clone(), v.clone()])
                .collect(),
        }
    }
}

impl From<(String, OptionValue)> for CliOption {
    fn from((name, value): (String, OptionValue)) -> Self {
        Self { name, value }
    }
}

impl From<CliOption> for (String, OptionValue) {
    fn from(option: CliOption) -> Self {
        (option.name, option.value)
    }
}

impl<V: Into<OptionValue>> From<(&str, V)> for CliOption {
    fn from((name, value): (&str, V)) -> Self {
        Self::new(name, value)
    }
}
