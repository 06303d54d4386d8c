use super::error::MatcherParseError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static MATCHER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([^=!~\s]*)\s*(=~|=|!=|!~)\s*((?s:.*?))\s*$").expect("valid matcher regex")
});
static LABEL_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_:][a-zA-Z0-9_:]*$").expect("valid label name regex"));

/// Comparison operator of a matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOperator {
    /// `=`
    Equal,
    /// `!=`
    NotEqual,
    /// `=~`
    RegexMatch,
    /// `!~`
    RegexNoMatch,
}

impl MatchOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOperator::Equal => "=",
            MatchOperator::NotEqual => "!=",
            MatchOperator::RegexMatch => "=~",
            MatchOperator::RegexNoMatch => "!~",
        }
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, MatchOperator::RegexMatch | MatchOperator::RegexNoMatch)
    }
}

impl FromStr for MatchOperator {
    type Err = MatcherParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(MatchOperator::Equal),
            "!=" => Ok(MatchOperator::NotEqual),
            "=~" => Ok(MatchOperator::RegexMatch),
            "!~" => Ok(MatchOperator::RegexNoMatch),
            _ => Err(MatcherParseError::BadFormat(s.to_string())),
        }
    }
}

impl fmt::Display for MatchOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single label matcher such as `severity!=critical`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    pub name: String,
    pub operator: MatchOperator,
    pub value: String,
}

impl Matcher {
    /// Parse one `label<op>value` clause.
    ///
    /// Whitespace around the label and operator is ignored. A value written as a
    /// double-quoted string literal is unquoted. Regex values must compile as a
    /// fully anchored pattern.
    pub fn parse(s: &str) -> Result<Self, MatcherParseError> {
        let caps = MATCHER_RE
            .captures(s)
            .ok_or_else(|| MatcherParseError::BadFormat(s.to_string()))?;

        let name = &caps[1];
        if !LABEL_NAME_RE.is_match(name) {
            return Err(MatcherParseError::InvalidLabelName(name.to_string()));
        }

        let operator: MatchOperator = caps[2].parse()?;
        let value = unquote(&caps[3]);

        if operator.is_regex() {
            Regex::new(&format!("^(?:{})$", value)).map_err(|e| {
                MatcherParseError::InvalidRegex {
                    label: name.to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        Ok(Matcher {
            name: name.to_string(),
            operator,
            value,
        })
    }
}

impl FromStr for Matcher {
    type Err = MatcherParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Matcher::parse(s)
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = serde_json::to_string(&self.value).map_err(|_| fmt::Error)?;
        write!(f, "{}{}{}", self.name, self.operator, quoted)
    }
}

/// Outcome of classifying one matcher group token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherGroup<'a> {
    /// The token is a complete matcher and is used verbatim
    WellFormed(&'a str),
    /// The token is not a matcher; it is taken as an alert name
    BareValue(&'a str),
}

impl<'a> MatcherGroup<'a> {
    pub fn classify(token: &'a str) -> Self {
        match Matcher::parse(token) {
            Ok(_) => MatcherGroup::WellFormed(token),
            Err(e) => {
                tracing::trace!(token, error = %e, "token is not a matcher");
                MatcherGroup::BareValue(token)
            }
        }
    }
}

/// Strip a double-quoted string literal, leaving anything else untouched
fn unquote(raw: &str) -> String {
    if raw.len() >= 2
        && raw.starts_with('"')
        && raw.ends_with('"')
        && let Ok(unquoted) = serde_json::from_str::<String>(raw)
    {
        return unquoted;
    }
    raw.to_string()
}
