use crate::common::{fixed_instant, repository};
use pretty_assertions::assert_eq;
use rstest::rstest;
use wit::areas::repository::Repository;
use wit::artifacts::branch::branch_name::BranchName;

#[rstest]
fn create_root_commit_from_staged_files(
    mut repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    repository.write_file("a.txt", "1");
    repository.add("a.txt")?;

    let id = repository.commit("first")?;

    let commit = repository.database().commit(&id).unwrap();
    assert_eq!(commit.id(), &id);
    assert!(commit.parents().is_empty());
    assert_eq!(commit.message(), "first");
    assert_eq!(commit.timestamp(), fixed_instant());
    assert_eq!(commit.tree().get("a.txt"), Some(&"1".to_string()));

    // the branch moved, the index emptied
    let main = repository.refs().branch(&BranchName::from("main")).unwrap();
    assert_eq!(main.target(), Some(&id));
    assert!(repository.index().is_empty());

    Ok(())
}
