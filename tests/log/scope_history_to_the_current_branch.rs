use crate::common::repository;
use pretty_assertions::assert_eq;
use rstest::rstest;
use wit::areas::repository::Repository;
use wit::artifacts::branch::branch_name::BranchName;

#[rstest]
fn scope_history_to_the_current_branch(
    mut repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    repository.write_file("a.txt", "1");
    repository.add("a.txt")?;
    repository.commit("c1")?;

    repository.create_branch(BranchName::from("feat"))?;
    repository.checkout(&BranchName::from("feat"))?;
    repository.write_file("b.txt", "2");
    repository.add("b.txt")?;
    repository.commit("c2")?;

    assert_eq!(repository.log().len(), 2);

    repository.checkout(&BranchName::from("main"))?;
    let main_history = repository.log();

    assert_eq!(main_history.len(), 1);
    assert_eq!(main_history[0].message, "c1");

    Ok(())
}
