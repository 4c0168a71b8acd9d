use crate::common::{committed_repository, write_generated_files};
use pretty_assertions::assert_eq;
use rstest::rstest;
use wit::areas::repository::Repository;

#[rstest]
fn classify_untracked_files(committed_repository: Repository) {
    let mut repository = committed_repository;
    let generated = write_generated_files(&mut repository, 3);

    let report = repository.status();

    for (path, _) in &generated {
        let file = report.file(path).expect("every seeded path is reported");
        assert!(file.untracked, "{path} must be untracked");
        assert!(!file.staged);
        assert_eq!(file.porcelain_code(), "??");
    }
}
