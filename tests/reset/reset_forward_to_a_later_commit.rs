use crate::common::repository;
use pretty_assertions::assert_eq;
use rstest::rstest;
use wit::areas::repository::Repository;

// Reset is not constrained to ancestors: any commit in the graph is a
// legal target, including one ahead of the branch pointer.
#[rstest]
fn reset_forward_to_a_later_commit(
    mut repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    repository.write_file("a.txt", "1");
    repository.add("a.txt")?;
    let first = repository.commit("c1")?;

    repository.write_file("b.txt", "2");
    repository.add("b.txt")?;
    let second = repository.commit("c2")?;

    repository.reset(&first)?;
    repository.reset(&second)?;

    assert_eq!(repository.refs().read_head(), Some(&second));
    assert_eq!(repository.workspace().len(), 2);
    assert_eq!(repository.log().len(), 2);

    Ok(())
}
