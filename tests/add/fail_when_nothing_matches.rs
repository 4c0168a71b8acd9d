use crate::common::repository;
use pretty_assertions::assert_eq;
use rstest::rstest;
use wit::areas::repository::Repository;
use wit::artifacts::core::EngineError;

#[rstest]
fn fail_when_nothing_matches(mut repository: Repository) {
    repository.write_file("x1.go", "package one");

    let err = repository.add("nomatch").unwrap_err();

    assert!(matches!(err, EngineError::NoMatch { .. }));
    assert_eq!(err.to_string(), "no files matched add pattern: nomatch");
    assert!(repository.index().is_empty());
}
