use crate::common::repository;
use pretty_assertions::assert_eq;
use rstest::rstest;
use wit::areas::repository::Repository;
use wit::artifacts::branch::branch_name::BranchName;
use wit::artifacts::core::EngineError;

#[rstest]
fn fail_without_current_commit(mut repository: Repository) {
    // a brand-new repository has a main branch but no commits
    let err = repository
        .create_branch(BranchName::from("feature"))
        .unwrap_err();

    assert!(matches!(err, EngineError::NoCurrentCommit));
    assert_eq!(
        repository.branches().count(),
        1,
        "no branch record may be created"
    );
}
