use super::*;

#[test]
fn builtin_table_has_four_rules() {
    let rules = RuleSet::builtin();
    assert_eq!(rules.len(), 4);
    assert!(!rules.is_empty());
}

#[test]
fn lookup_is_case_insensitive() {
    let rules = RuleSet::builtin();
    assert_eq!(rules.position("style"), rules.position("STYLE"));
    assert_eq!(rules.position("console log"), rules.position("CONSOLE LOG"));
    assert!(rules.position("nonexistent").is_none());
}

#[test]
fn style_rule_matches_inline_style_attribute() {
    let rules = RuleSet::builtin();
    let rule = rules.get(rules.position("STYLE").unwrap());
    let m = rule.pattern.find(r#"<div style="color:red">"#).unwrap();
    // 0-based 5 => reported column 6.
    assert_eq!(m.start(), 5);
}

#[test]
fn align_rule_matches_align_attribute() {
    let rules = RuleSet::builtin();
    let rule = rules.get(rules.position("ALIGN").unwrap());
    assert!(rule.pattern.is_match(r#"<td align="center">"#));
}

#[test]
fn javascript_rule_matches_inline_event_handler() {
    let rules = RuleSet::builtin();
    let rule = rules.get(rules.position("JAVASCRIPT").unwrap());
    assert!(rule.pattern.is_match(r#"<a onclick="doThing();">"#));
    assert!(!rule.pattern.is_match("<a href=\"page.html\">"));
}

#[test]
fn console_log_rule_matches_call_site() {
    let rules = RuleSet::builtin();
    let rule = rules.get(rules.position("CONSOLE LOG").unwrap());
    let m = rule.pattern.find("console.log('hi');").unwrap();
    assert_eq!(m.start(), 0);
    assert!(rule.pattern.is_match("Console.Log("));
}

#[test]
fn extension_sets_are_lowercase_and_scoped() {
    let rules = RuleSet::builtin();
    let style = rules.get(rules.position("STYLE").unwrap());
    assert!(style.applies_to("html"));
    assert!(style.applies_to("cfm"));
    assert!(!style.applies_to("js"));

    let console = rules.get(rules.position("CONSOLE LOG").unwrap());
    assert!(console.applies_to("js"));
    assert!(!console.applies_to("html"));
}

#[test]
fn builtin_patterns_are_case_insensitive() {
    let rules = RuleSet::builtin();
    let style = rules.get(rules.position("STYLE").unwrap());
    assert!(style.pattern.is_match(r#"<div STYLE="color:red">"#));
}
