use super::parser::MatcherGroup;
use std::fmt;

/// Brace-wrapped, comma-separated filter sent to the alerts endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpression(String);

impl FilterExpression {
    /// Build the filter for an ordered list of matcher groups.
    ///
    /// - no groups gives `{}`, which the server treats as "no filter"
    /// - a single group that is not itself a matcher is taken as an alert name,
    ///   so `foo` becomes `{alertname=foo}`
    /// - two or more groups are joined verbatim; the server validates them
    pub fn from_matcher_groups<S: AsRef<str>>(groups: &[S]) -> Self {
        let body = match groups {
            [] => String::new(),
            [single] => match MatcherGroup::classify(single.as_ref()) {
                MatcherGroup::WellFormed(token) => token.to_string(),
                MatcherGroup::BareValue(token) => format!("alertname={}", token),
            },
            many => many
                .iter()
                .map(|g| g.as_ref())
                .collect::<Vec<&str>>()
                .join(","),
        };

        FilterExpression(format!("{{{}}}", body))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for `{}`
    pub fn is_empty(&self) -> bool {
        self.0 == "{}"
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FilterExpression {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(groups: &[&str]) -> String {
        FilterExpression::from_matcher_groups(groups).to_string()
    }

    #[test]
    fn test_no_groups_is_empty_filter() {
        let expr = FilterExpression::from_matcher_groups::<&str>(&[]);
        assert_eq!(expr.as_str(), "{}");
        assert!(expr.is_empty());
    }

    #[test]
    fn test_single_matcher_is_used_verbatim() {
        assert_eq!(build(&["node=bar"]), "{node=bar}");
        assert_eq!(build(&["alertname=~foo.*"]), "{alertname=~foo.*}");
        assert_eq!(build(&["severity!=critical"]), "{severity!=critical}");
        assert_eq!(build(&[" job = api "]), "{ job = api }");
    }

    #[test]
    fn test_single_bare_value_becomes_alertname() {
        assert_eq!(build(&["foo"]), "{alertname=foo}");
        assert_eq!(build(&["HighMemoryUsage"]), "{alertname=HighMemoryUsage}");
    }

    #[test]
    fn test_single_invalid_regex_falls_back_to_alertname() {
        assert_eq!(build(&["alertname=~(foo"]), "{alertname=alertname=~(foo}");
    }

    #[test]
    fn test_multiple_groups_are_joined_in_order() {
        assert_eq!(
            build(&["alertname=foo", "node=bar"]),
            "{alertname=foo,node=bar}"
        );
        assert_eq!(build(&["node=bar", "alertname=foo"]), "{node=bar,alertname=foo}");
    }

    #[test]
    fn test_multiple_groups_are_not_validated() {
        assert_eq!(build(&["foo", "node=bar"]), "{foo,node=bar}");
        assert_eq!(build(&["foo", "bar"]), "{foo,bar}");
    }

    #[test]
    fn test_building_is_deterministic() {
        let groups = vec!["alertname=foo".to_string(), "node=bar".to_string()];
        assert_eq!(
            FilterExpression::from_matcher_groups(&groups),
            FilterExpression::from_matcher_groups(&groups)
        );
    }
}
