//! Integration tests for scope loading and checking

use inscope_core::{filter_lines, Error, ScopeChecker, ScopeConfig, Verdict};
use proptest::prelude::*;
use std::io::Cursor;

fn load(src: &str) -> ScopeChecker {
    ScopeChecker::load(Cursor::new(src)).expect("scope should parse")
}

#[test]
fn test_scenario_suffix_inclusion() {
    let checker = load("example\\.com$\n");
    assert!(checker.in_scope("sub.example.com"));
}

#[test]
fn test_scenario_exclusion_overrides() {
    let checker = load("example\\.com$\n!evil\\.example\\.com$\n");
    assert!(!checker.in_scope("evil.example.com"));

    let config = ScopeConfig::new(".", true);
    let mut out = Vec::new();
    filter_lines(&checker, &config, Cursor::new("evil.example.com\n"), &mut out).unwrap();
    assert_eq!(out, b"evil.example.com\n");
}

#[test]
fn test_scenario_url_hostname() {
    let checker = load("^test$\n");
    assert_eq!(checker.classify("https://test/path?x=1"), Verdict::InScope);
}

#[test]
fn test_scenario_empty_scope() {
    let checker = load("");
    for domain in ["example.com", "https://example.com/", "", "localhost"] {
        assert!(!checker.in_scope(domain));
    }
}

#[test]
fn test_parse_error_reports_line() {
    let err = ScopeChecker::load(Cursor::new("a\\.com\n\n!b(\n")).unwrap_err();
    match err {
        Error::ScopeParse { line, pattern, .. } => {
            assert_eq!(line, 3);
            assert_eq!(pattern, "b(");
        }
        other => panic!("Wrong error type: {other:?}"),
    }
}

#[test]
fn test_scope_file_in_workspace() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("scope.txt"),
        "corp\\.internal$\n!vpn\\.corp\\.internal$\n",
    )
    .unwrap();

    let config = ScopeConfig::new(dir.path(), false);
    let checker = ScopeChecker::from_file(config.scope_file()).unwrap();

    assert_eq!(checker.inclusions().len(), 1);
    assert_eq!(checker.exclusions().len(), 1);
    assert!(checker.in_scope("http://git.corp.internal:3000/repo"));
    assert!(!checker.in_scope("vpn.corp.internal"));
}

#[test]
fn test_url_matches_host_as_written() {
    let checker = load("^API\\.Example\\.com$\nbücher\\.de$\n^a\\.com$\n");

    for (url, host) in [
        ("https://API.Example.com/x", "API.Example.com"),
        ("https://bücher.de/katalog", "bücher.de"),
        ("https://a.com:99999/x", "a.com"),
    ] {
        assert!(checker.in_scope(host), "{host}");
        assert_eq!(checker.classify(url), Verdict::InScope, "{url}");
    }

    assert!(!checker.in_scope("https://api.example.com/x"));
}

proptest! {
    #[test]
    fn prop_exclusion_always_wins(label in "[a-z]{1,12}", tld in "(com|org|net)") {
        let domain = format!("{label}.example.{tld}");
        let checker = load(&format!("example\\.{tld}$\n!^{label}\\."));
        prop_assert!(!checker.in_scope(&domain));
    }

    #[test]
    fn prop_unmatched_is_out_of_scope(label in "[a-z]{1,12}") {
        let checker = load("\\.example\\.com$\n");
        let domain = format!("{label}.example.org");
        prop_assert!(!checker.in_scope(&domain));
    }

    #[test]
    fn prop_url_classified_by_hostname(
        path in "(/[a-z0-9]{0,8}){0,3}",
        query in "[a-z]{1,5}=[a-z0-9]{0,5}",
        fragment in "[a-z]{0,5}"
    ) {
        let checker = load("a\\.com$\n!^b\\.a\\.com$\n");
        let url = format!("https://a.com{path}?{query}#{fragment}");
        prop_assert_eq!(checker.in_scope(&url), checker.in_scope("a.com"));

        let excluded = format!("https://b.a.com{path}?{query}");
        prop_assert!(!checker.in_scope(&excluded));
    }

    #[test]
    fn prop_url_and_bare_host_agree(
        label in "[a-zA-Z][a-zA-Z0-9]{0,11}",
        port in proptest::option::of(0u32..200_000),
        path in "(/[a-zA-Z0-9]{0,8}){0,3}"
    ) {
        let checker = load("^[a-z]+\\.Example\\.com$\n!^[A-Z]\n");
        let host = format!("{label}.Example.com");
        let port = port.map(|p| format!(":{p}")).unwrap_or_default();
        let url = format!("https://{host}{port}{path}");
        prop_assert_eq!(checker.classify(&url), checker.classify(&host));
    }
}
