use crate::common::repository;
use pretty_assertions::assert_eq;
use rstest::rstest;
use wit::areas::repository::Repository;
use wit::artifacts::branch::branch_name::BranchName;

#[rstest]
fn hard_reset_branch_workspace_and_index(
    mut repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    repository.write_file("a.txt", "1");
    repository.add("a.txt")?;
    let first = repository.commit("c1")?;

    repository.write_file("b.txt", "2");
    repository.add("b.txt")?;
    repository.commit("c2")?;

    // leave junk in both mutable stores before resetting
    repository.write_file("junk.txt", "junk");
    repository.add("junk.txt")?;

    repository.reset(&first)?;

    let main = repository.refs().branch(&BranchName::from("main")).unwrap();
    assert_eq!(main.target(), Some(&first));

    let files = repository.workspace().files().collect::<Vec<_>>();
    assert_eq!(files, vec![("a.txt", "1")]);
    assert!(repository.index().is_empty());

    let history = repository.log();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, first);

    Ok(())
}
