//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - namespace matching (order independence, case insensitivity)
//! - evaluation accounting and deterministic ordering

use crate::engine::evaluate;
use crate::filter::ReportFilter;
use crate::model::Diagnostic;
use crate::test_support::config;
use proptest::prelude::*;
use strictuse_types::{DiagnosticKind, Location, RepoPath, Severity};

/// Strategy for namespace-like prefixes, e.g. `Foo\Bar\`.
fn arb_namespace() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z][A-Za-z0-9_]{0,6}", 1..4)
        .prop_map(|segments| format!("{}\\", segments.join("\\")))
}

fn arb_kind() -> impl Strategy<Value = DiagnosticKind> {
    prop_oneof![
        Just(DiagnosticKind::Class),
        Just(DiagnosticKind::Property),
        Just(DiagnosticKind::Method),
        Just(DiagnosticKind::Function),
        Just(DiagnosticKind::Argument),
        Just(DiagnosticKind::Other),
    ]
}

fn arb_diagnostic() -> impl Strategy<Value = Diagnostic> {
    (
        arb_kind(),
        prop::option::of("[A-Za-z\\\\]{1,16}"),
        "[A-Z][A-Za-z]{2,12}",
        prop::option::of(("[a-z]{1,6}\\.php", 1u32..500)),
    )
        .prop_map(|(kind, subject, issue_type, loc)| Diagnostic {
            kind,
            subject,
            message: format!("{issue_type} happened"),
            issue_type,
            location: loc.map(|(path, line)| Location {
                path: RepoPath::new(path),
                line: Some(line),
                col: None,
            }),
        })
}

proptest! {
    #[test]
    fn match_is_independent_of_namespace_order(
        namespaces in prop::collection::vec(arb_namespace(), 0..6),
        subject in "[A-Za-z\\\\]{0,24}",
    ) {
        let forward = ReportFilter::new(namespaces.clone());
        let mut reversed_namespaces = namespaces;
        reversed_namespaces.reverse();
        let reversed = ReportFilter::new(reversed_namespaces);

        prop_assert_eq!(forward.matches(&subject), reversed.matches(&subject));
    }

    #[test]
    fn match_ignores_ascii_case(namespace in arb_namespace(), suffix in "[A-Za-z]{0,8}") {
        let filter = ReportFilter::new(vec![namespace.clone()]);
        let subject = format!("{namespace}{suffix}");

        prop_assert!(filter.matches(&subject.to_ascii_uppercase()));
        prop_assert!(filter.matches(&subject.to_ascii_lowercase()));
    }

    #[test]
    fn evaluation_accounts_for_every_diagnostic(
        namespaces in prop::collection::vec(arb_namespace(), 0..4),
        diagnostics in prop::collection::vec(arb_diagnostic(), 0..32),
    ) {
        let filter = ReportFilter::new(namespaces);
        let report = evaluate(&diagnostics, &filter, &config(Severity::Error));

        prop_assert_eq!(report.data.diagnostics_total as usize, diagnostics.len());
        prop_assert_eq!(
            (report.data.findings_total + report.data.diagnostics_suppressed) as usize,
            diagnostics.len()
        );
        for finding in &report.findings {
            prop_assert!(finding.kind != DiagnosticKind::Other);
            prop_assert!(finding.subject.is_some());
        }
    }

    #[test]
    fn evaluation_is_order_insensitive(
        namespaces in prop::collection::vec(arb_namespace(), 0..4),
        diagnostics in prop::collection::vec(arb_diagnostic(), 0..16),
    ) {
        let filter = ReportFilter::new(namespaces);
        let cfg = config(Severity::Error);

        let mut reversed = diagnostics.clone();
        reversed.reverse();

        let a = evaluate(&diagnostics, &filter, &cfg);
        let b = evaluate(&reversed, &filter, &cfg);

        prop_assert_eq!(a.findings, b.findings);
        prop_assert_eq!(a.verdict, b.verdict);
    }
}
