use crate::common::repository;
use pretty_assertions::assert_eq;
use rstest::rstest;
use wit::areas::repository::Repository;

#[rstest]
fn restaging_a_path_overwrites_staged_content(mut repository: Repository) {
    repository.write_file("a.txt", "first");
    repository.add("a.txt").unwrap();

    repository.write_file("a.txt", "second");
    repository.add("a.txt").unwrap();

    assert_eq!(repository.index().len(), 1);
    assert_eq!(repository.index().entry_by_path("a.txt"), Some("second"));
}
