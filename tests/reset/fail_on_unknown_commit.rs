use crate::common::committed_repository;
use pretty_assertions::assert_eq;
use rstest::rstest;
use wit::areas::repository::Repository;
use wit::artifacts::core::EngineError;
use wit::artifacts::objects::commit_id::CommitId;

#[rstest]
fn fail_on_unknown_commit(committed_repository: Repository) {
    let mut repository = committed_repository;
    let tip = repository.current_commit().unwrap().id().clone();
    let bogus = CommitId::new("commit-999");

    let err = repository.reset(&bogus).unwrap_err();

    assert!(matches!(err, EngineError::NoSuchCommit { .. }));
    assert_eq!(err.to_string(), "no such commit: commit-999");

    // nothing moved
    assert_eq!(repository.refs().read_head(), Some(&tip));
    assert_eq!(repository.workspace().len(), 3);
}
