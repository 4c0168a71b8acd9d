use crate::common::committed_repository;
use pretty_assertions::assert_eq;
use rstest::rstest;
use wit::areas::repository::Repository;

#[rstest]
fn overlay_staged_entries_on_parent_tree(
    committed_repository: Repository,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut repository = committed_repository;

    // one edit over a committed path, one brand-new path
    repository.write_file("1.txt", "one-revised");
    repository.write_file("4.txt", "four");
    repository.add("1.txt")?;
    repository.add("4.txt")?;

    let id = repository.commit("overlay")?;
    let tree = repository.database().commit(&id).unwrap().tree();

    // staged entries win on collision
    assert_eq!(tree.get("1.txt"), Some(&"one-revised".to_string()));
    assert_eq!(tree.get("4.txt"), Some(&"four".to_string()));
    // non-overlapping parent entries survive unchanged
    assert_eq!(tree.get("a/2.txt"), Some(&"two".to_string()));
    assert_eq!(tree.get("a/b/3.txt"), Some(&"three".to_string()));
    assert_eq!(tree.len(), 4);

    Ok(())
}
