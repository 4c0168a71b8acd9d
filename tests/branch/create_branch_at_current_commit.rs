use crate::common::committed_repository;
use pretty_assertions::assert_eq;
use rstest::rstest;
use wit::areas::repository::Repository;
use wit::artifacts::branch::branch_name::BranchName;

#[rstest]
fn create_branch_at_current_commit(
    committed_repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut repository = committed_repository;
    let current = repository.current_commit().unwrap().id().clone();
    let files_before = repository.workspace().len();

    repository.create_branch(BranchName::from("feature/new-feature"))?;

    let branch = repository
        .refs()
        .branch(&BranchName::from("feature/new-feature"))
        .unwrap();
    assert_eq!(branch.target(), Some(&current));

    // HEAD stays put; neither index nor working directory is touched
    assert_eq!(
        repository.refs().head().branch_name(),
        Some(&BranchName::from("main"))
    );
    assert!(repository.index().is_empty());
    assert_eq!(repository.workspace().len(), files_before);

    Ok(())
}
