use std::fmt;

use anyhow::Result;

use crate::error::RadError;

/// Declared type of an option. Also decides how the option renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionKind {
    /// `-<flag> <int>`
    Integer,
    /// `-<flag> <float>`
    Float,
    /// Bare `-<flag>` when true, nothing when false.
    Boolean,
    /// `-<flag> <text>`, double-quoted when it contains whitespace.
    Text,
    /// `-<flag><choice>` (e.g. `-if`), value restricted to the listed choices.
    Choice(&'static [&'static str]),
}

/// Static description of one command-line option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionSpec {
    /// Name used by setters and default records.
    pub name: &'static str,
    /// Flag without the leading dash.
    pub flag: &'static str,
    pub kind: OptionKind,
    /// Inclusive bounds for numeric options.
    pub range: Option<(f64, f64)>,
}

impl OptionSpec {
    pub const fn new(name: &'static str, flag: &'static str, kind: OptionKind) -> Self {
        Self {
            name,
            flag,
            kind,
            range: None,
        }
    }

    pub const fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }
}

/// Value held by a [`ParameterSet`] slot.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Integer(v) => write!(f, "{v}"),
            OptionValue::Float(v) => write!(f, "{v}"),
            OptionValue::Boolean(v) => write!(f, "{v}"),
            OptionValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Integer(value)
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Integer(i64::from(value))
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Boolean(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

/// Ordered mapping from option name to value over a fixed spec table.
///
/// Every value is validated when it is set, so rendering cannot fail.
/// Options render in the order of the option table; unset options render nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    label: &'static str,
    specs: &'static [OptionSpec],
    values: Vec<Option<OptionValue>>,
}

impl ParameterSet {
    pub fn new(label: &'static str, specs: &'static [OptionSpec]) -> Self {
        Self {
            label,
            specs,
            values: vec![None; specs.len()],
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn specs(&self) -> &'static [OptionSpec] {
        self.specs
    }

    pub fn spec(&self, name: &str) -> Option<&'static OptionSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.specs.iter().position(|s| s.name == name).ok_or_else(|| {
            RadError::UnknownOption {
                parameters: self.label,
                name: name.to_string(),
            }
            .into()
        })
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        let i = self.specs.iter().position(|s| s.name == name)?;
        self.values[i].as_ref()
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            OptionValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn float(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            OptionValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            OptionValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            OptionValue::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Sets an option after checking its declared type and bounds.
    ///
    /// Integers are accepted for float options. A `false` switch clears the
    /// slot, since it renders the same as an unset one. Nothing is stored on
    /// error.
    pub fn set(&mut self, name: &str, value: impl Into<OptionValue>) -> Result<()> {
        let i = self.position(name)?;
        let value = validate(&self.specs[i], value.into())?;
        self.values[i] = match value {
            OptionValue::Boolean(false) => None,
            v => Some(v),
        };
        Ok(())
    }

    /// Parses `raw` according to the declared type of the option and sets it.
    pub fn set_from_str(&mut self, name: &str, raw: &str) -> Result<()> {
        let i = self.position(name)?;
        let value = parse_value(&self.specs[i], raw)?;
        self.set(name, value)
    }

    pub fn unset(&mut self, name: &str) -> Result<()> {
        let i = self.position(name)?;
        self.values[i] = None;
        Ok(())
    }

    /// Explicitly set options, in render order.
    pub fn explicit_values(&self) -> impl Iterator<Item = (&'static str, &OptionValue)> + '_ {
        self.specs
            .iter()
            .zip(self.values.iter())
            .filter_map(|(spec, value)| value.as_ref().map(|v| (spec.name, v)))
    }

    /// Renders the set options as space separated flag tokens.
    pub fn render(&self) -> String {
        let mut tokens: Vec<String> = Vec::new();
        for (spec, value) in self.specs.iter().zip(self.values.iter()) {
            let Some(value) = value else {
                continue;
            };
            match (spec.kind, value) {
                (OptionKind::Boolean, _) => tokens.push(format!("-{}", spec.flag)),
                (OptionKind::Choice(_), v) => tokens.push(format!("-{}{}", spec.flag, v)),
                (OptionKind::Text, OptionValue::Text(v)) => {
                    tokens.push(format!("-{}", spec.flag));
                    tokens.push(quote(v));
                }
                (_, v) => {
                    tokens.push(format!("-{}", spec.flag));
                    tokens.push(v.to_string());
                }
            }
        }
        tokens.join(" ")
    }

    /// Reads back a flag string produced by [`ParameterSet::render`].
    ///
    /// Parsed values are set on top of the current ones. Radiance style
    /// `-I+` / `-I-` switches are accepted for boolean options.
    pub fn parse_flags(&mut self, flags: &str) -> Result<()> {
        let specs = self.specs;
        let tokens = split_tokens(flags)?;
        let mut iter = tokens.into_iter();
        while let Some(token) = iter.next() {
            let Some(body) = token.strip_prefix('-') else {
                return Err(self.unknown_flag(&token));
            };

            if let Some(spec) = specs.iter().find(|s| s.flag == body) {
                match spec.kind {
                    OptionKind::Boolean => self.set(spec.name, true)?,
                    OptionKind::Choice(_) => return Err(self.unknown_flag(&token)),
                    _ => {
                        let raw = iter.next().ok_or_else(|| RadError::InvalidValue {
                            name: spec.name.to_string(),
                            value: String::new(),
                            reason: format!("flag '{token}' expects a value"),
                        })?;
                        self.set_from_str(spec.name, &raw)?;
                    }
                }
                continue;
            }

            if let Some((spec, on)) = specs.iter().find_map(|s| {
                if s.kind != OptionKind::Boolean {
                    return None;
                }
                let rest = body.strip_prefix(s.flag)?;
                match rest {
                    "+" => Some((s, true)),
                    "-" => Some((s, false)),
                    _ => None,
                }
            }) {
                self.set(spec.name, on)?;
                continue;
            }

            if let Some((spec, choice)) = specs.iter().find_map(|s| match s.kind {
                OptionKind::Choice(choices) => body
                    .strip_prefix(s.flag)
                    .filter(|rest| choices.iter().any(|c| c == rest))
                    .map(|rest| (s, rest)),
                _ => None,
            }) {
                self.set(spec.name, choice)?;
                continue;
            }

            return Err(self.unknown_flag(&token));
        }
        Ok(())
    }

    fn unknown_flag(&self, token: &str) -> anyhow::Error {
        RadError::UnknownFlag {
            parameters: self.label,
            flag: token.to_string(),
        }
        .into()
    }
}

fn invalid(spec: &OptionSpec, value: &OptionValue, reason: impl Into<String>) -> anyhow::Error {
    RadError::InvalidValue {
        name: spec.name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
    .into()
}

fn validate(spec: &OptionSpec, value: OptionValue) -> Result<OptionValue> {
    let value = match (spec.kind, value) {
        (OptionKind::Integer, v @ OptionValue::Integer(_)) => v,
        (OptionKind::Float, OptionValue::Integer(i)) => OptionValue::Float(i as f64),
        (OptionKind::Float, OptionValue::Float(f)) => {
            if !f.is_finite() {
                return Err(invalid(spec, &OptionValue::Float(f), "expected a finite number"));
            }
            OptionValue::Float(f)
        }
        (OptionKind::Boolean, v @ OptionValue::Boolean(_)) => v,
        (OptionKind::Text, OptionValue::Text(t)) => {
            if t.trim().is_empty() {
                return Err(invalid(spec, &OptionValue::Text(t), "text may not be empty"));
            }
            if t.contains('"') {
                return Err(invalid(spec, &OptionValue::Text(t), "text may not contain '\"'"));
            }
            OptionValue::Text(t)
        }
        (OptionKind::Choice(choices), OptionValue::Text(t)) => {
            if !choices.iter().any(|c| *c == t) {
                let reason = format!("expected one of {}", choices.join(", "));
                return Err(invalid(spec, &OptionValue::Text(t), reason));
            }
            OptionValue::Text(t)
        }
        (kind, v) => {
            return Err(invalid(spec, &v, format!("expected {}", kind_name(kind))));
        }
    };

    if let Some((min, max)) = spec.range {
        let n = match &value {
            OptionValue::Integer(i) => Some(*i as f64),
            OptionValue::Float(f) => Some(*f),
            _ => None,
        };
        if let Some(n) = n
            && (n < min || n > max)
        {
            let reason = if max.is_infinite() {
                format!("must be at least {min}")
            } else {
                format!("must be within [{min}, {max}]")
            };
            return Err(invalid(spec, &value, reason));
        }
    }

    Ok(value)
}

fn parse_value(spec: &OptionSpec, raw: &str) -> Result<OptionValue> {
    let raw = raw.trim();
    let text = OptionValue::Text(raw.to_string());
    let value = match spec.kind {
        OptionKind::Integer => raw
            .parse::<i64>()
            .map(OptionValue::Integer)
            .map_err(|e| invalid(spec, &text, format!("expected an integer ({e})")))?,
        OptionKind::Float => raw
            .parse::<f64>()
            .map(OptionValue::Float)
            .map_err(|e| invalid(spec, &text, format!("expected a number ({e})")))?,
        OptionKind::Boolean => match raw.to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" | "1" | "+" => OptionValue::Boolean(true),
            "false" | "off" | "no" | "0" | "-" => OptionValue::Boolean(false),
            _ => return Err(invalid(spec, &text, "expected a boolean")),
        },
        OptionKind::Text | OptionKind::Choice(_) => text,
    };
    Ok(value)
}

fn kind_name(kind: OptionKind) -> &'static str {
    match kind {
        OptionKind::Integer => "an integer",
        OptionKind::Float => "a number",
        OptionKind::Boolean => "a boolean",
        OptionKind::Text => "text",
        OptionKind::Choice(_) => "one of the listed choices",
    }
}

fn quote(value: &str) -> String {
    if value.chars().any(char::is_whitespace) {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

/// Splits a flag string on whitespace, keeping double-quoted runs together.
fn split_tokens(input: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in input.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err(RadError::InvalidValue {
            name: "flags".to_string(),
            value: input.to_string(),
            reason: "unterminated quote".to_string(),
        }
        .into());
    }
    if has_token {
        tokens.push(current);
    }
    Ok(tokens)
}
