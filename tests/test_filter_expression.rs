use alert_query::matcher::{FilterExpression, MatchOperator, Matcher, MatcherGroup};

fn build(groups: &[&str]) -> String {
    FilterExpression::from_matcher_groups(groups).to_string()
}

#[test]
fn test_empty_groups_build_empty_braces() {
    assert_eq!(build(&[]), "{}");
}

#[test]
fn test_well_formed_single_matchers_are_kept_verbatim() {
    for token in [
        "node=bar",
        "alertname=~foo.*",
        "severity!=critical",
        "job!~api|web",
        r#"summary="disk full""#,
        "label_with:colon=x",
    ] {
        assert!(
            Matcher::parse(token).is_ok(),
            "{token} should be a valid matcher"
        );
        assert_eq!(build(&[token]), format!("{{{token}}}"));
    }
}

#[test]
fn test_non_matcher_single_tokens_become_alertname() {
    for token in ["foo", "HighLatency", "foo bar", "=foo", "1abc=foo"] {
        assert_eq!(
            MatcherGroup::classify(token),
            MatcherGroup::BareValue(token)
        );
        assert_eq!(build(&[token]), format!("{{alertname={token}}}"));
    }
}

#[test]
fn test_multi_token_groups_are_joined_without_validation() {
    let cases: Vec<(Vec<&str>, &str)> = vec![
        (vec!["alertname=foo", "node=bar"], "{alertname=foo,node=bar}"),
        (vec!["foo", "node=bar"], "{foo,node=bar}"),
        (vec!["a=1", "b!=2", "c=~3"], "{a=1,b!=2,c=~3}"),
        (vec!["not valid", "=also"], "{not valid,=also}"),
    ];

    for (groups, expected) in cases {
        assert_eq!(build(&groups), expected, "groups: {:?}", groups);
    }
}

#[test]
fn test_building_twice_gives_same_expression() {
    let groups = ["alertname=~foo.*", "instance=db-1"];
    assert_eq!(build(&groups), build(&groups));
    assert_eq!(build(&["foo"]), build(&["foo"]));
}

#[test]
fn test_matcher_parts_are_exposed() {
    let m: Matcher = "alertname =~ foo.*".parse().expect("valid matcher");
    assert_eq!(m.name, "alertname");
    assert_eq!(m.operator, MatchOperator::RegexMatch);
    assert_eq!(m.value, "foo.*");
}
