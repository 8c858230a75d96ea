//! Architecture contract tests.

mod support;

use support::architecture::{find_non_export_lines_in_mod_files, find_non_test_lines_containing};

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = find_non_test_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "tokio::",
            "tracing::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn ports_depend_only_on_domain() {
    let hits = find_non_test_lines_containing(
        "src/port",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
        ],
    );

    assert!(hits.is_empty(), "found outer-layer imports in ports: {hits:#?}");
}

#[test]
fn application_does_not_reach_into_adapters() {
    let hits = find_non_test_lines_containing(
        "src/application",
        &["crate::adapter", "crate::infrastructure"],
    );

    assert!(
        hits.is_empty(),
        "application services should go through ports: {hits:#?}"
    );
}

#[test]
fn mod_rs_is_export_only() {
    let violations = find_non_export_lines_in_mod_files("src");
    assert!(
        violations.is_empty(),
        "found non-export content in mod.rs files: {violations:#?}"
    );
}
