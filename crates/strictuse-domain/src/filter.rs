//! Namespace-scoped suppression of analyzer diagnostics.
//!
//! A diagnostic is only worth reporting when its subject belongs to a package that asked for
//! strict usage checks. Matching is a case-insensitive (ASCII) textual prefix test, so a
//! prefix `Foo\Ba` also admits `Foo\Bar\Baz`.

use crate::model::Diagnostic;
use crate::policy::ReportingLevel;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportFilter {
    namespaces: Vec<String>,
    lowered: Vec<String>,
}

impl ReportFilter {
    pub fn new(namespaces: Vec<String>) -> Self {
        let lowered = namespaces.iter().map(|ns| ns.to_ascii_lowercase()).collect();
        Self {
            namespaces,
            lowered,
        }
    }

    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    /// Does `identifier` start with any of the configured prefixes?
    pub fn matches(&self, identifier: &str) -> bool {
        let identifier = identifier.to_ascii_lowercase();
        self.lowered
            .iter()
            .any(|prefix| identifier.starts_with(prefix.as_str()))
    }

    /// Suppress the diagnostic unless its subject is in a checked namespace, in which case
    /// `default_level` decides.
    pub fn reporting_level<F>(&self, diagnostic: &Diagnostic, default_level: F) -> ReportingLevel
    where
        F: FnOnce(&Diagnostic) -> ReportingLevel,
    {
        match diagnostic.checked_subject() {
            Some(subject) if self.matches(subject) => default_level(diagnostic),
            _ => ReportingLevel::Suppress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::diagnostic;
    use strictuse_types::{DiagnosticKind, Severity};

    const ERROR: ReportingLevel = ReportingLevel::Report(Severity::Error);

    fn level(filter: &ReportFilter, kind: DiagnosticKind, subject: Option<&str>) -> ReportingLevel {
        filter.reporting_level(&diagnostic(kind, subject, "InvalidArgument"), |_| ERROR)
    }

    fn filter(namespaces: &[&str]) -> ReportFilter {
        ReportFilter::new(namespaces.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn every_kind_with_a_subject_follows_the_namespace_list() {
        let cases = [
            (DiagnosticKind::Class, "Foo\\Bar\\Baz"),
            (DiagnosticKind::Property, "Foo\\Bar\\Baz$property"),
            (DiagnosticKind::Method, "Foo\\Bar\\Baz::method"),
            (DiagnosticKind::Function, "Foo\\Bar\\Baz\\function_name"),
            (DiagnosticKind::Argument, "Foo\\Bar\\Baz\\function_name"),
        ];

        for (kind, subject) in cases {
            assert_eq!(
                level(&filter(&[]), kind, Some(subject)),
                ReportingLevel::Suppress,
                "no namespaces, {kind:?}"
            );
            assert_eq!(
                level(&filter(&["AAA\\BBB", "AAA\\BBB\\", "Bar\\"]), kind, Some(subject)),
                ReportingLevel::Suppress,
                "non-matching namespaces, {kind:?}"
            );
            assert_eq!(
                level(&filter(&["AAA\\BBB", "AAA\\BBB\\", "Foo\\Bar\\"]), kind, Some(subject)),
                ERROR,
                "matching namespaces, {kind:?}"
            );
            assert_eq!(
                level(&filter(&["AAA\\BBB", "AAA\\BBB\\", "foo\\"]), kind, Some(subject)),
                ERROR,
                "case-insensitive matching namespaces, {kind:?}"
            );
        }
    }

    #[test]
    fn anonymous_argument_is_suppressed() {
        let f = filter(&["Foo\\"]);
        assert_eq!(
            level(&f, DiagnosticKind::Argument, None),
            ReportingLevel::Suppress
        );
        assert_eq!(
            level(&f, DiagnosticKind::Function, None),
            ReportingLevel::Suppress
        );
    }

    #[test]
    fn unrecognized_kind_is_suppressed_even_when_subject_matches() {
        let f = filter(&["Foo\\"]);
        assert_eq!(
            level(&f, DiagnosticKind::Other, Some("Foo\\Bar")),
            ReportingLevel::Suppress
        );
    }

    #[test]
    fn prefix_match_is_not_namespace_boundary_aware() {
        let f = filter(&["Foo\\Ba"]);
        assert!(f.matches("Foo\\Bar\\Baz"));
        assert!(f.matches("FOO\\BAZ"));
        assert!(!f.matches("Foo\\B"));
    }

    #[test]
    fn default_level_decides_for_matching_subjects() {
        let f = filter(&["Foo\\"]);
        let d = diagnostic(DiagnosticKind::Class, Some("Foo\\Bar"), "MixedAssignment");
        let got = f.reporting_level(&d, |d| {
            assert_eq!(d.issue_type, "MixedAssignment");
            ReportingLevel::Report(Severity::Info)
        });
        assert_eq!(got, ReportingLevel::Report(Severity::Info));
    }

    #[test]
    fn empty_prefix_admits_every_subject() {
        let f = filter(&[""]);
        assert!(f.matches("Anything\\At\\All"));
        assert_eq!(
            level(&f, DiagnosticKind::Class, Some("Anything")),
            ERROR
        );
    }
}
