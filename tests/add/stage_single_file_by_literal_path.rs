use crate::common::repository;
use pretty_assertions::assert_eq;
use rstest::rstest;
use wit::areas::repository::Repository;

#[rstest]
fn stage_single_file_by_literal_path(mut repository: Repository) {
    repository.write_file("a.txt", "1");
    repository.write_file("b.txt", "2");

    repository.add("a.txt").unwrap();

    assert_eq!(repository.index().len(), 1);
    assert_eq!(repository.index().entry_by_path("a.txt"), Some("1"));

    // staging never touches the working directory
    assert_eq!(repository.workspace().read_file("a.txt"), Some("1"));
    assert_eq!(repository.workspace().read_file("b.txt"), Some("2"));
}
