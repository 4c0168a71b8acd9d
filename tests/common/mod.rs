#![allow(dead_code)]

use rstest::fixture;
use wit::areas::repository::Repository;
use wit::artifacts::objects::identity::{FixedClock, SequentialIdGenerator};

/// The instant every deterministic test clock is frozen at
pub fn fixed_instant() -> chrono::DateTime<chrono::FixedOffset> {
    chrono::DateTime::parse_from_rfc3339("2024-01-01T12:00:00+00:00").expect("valid timestamp")
}

/// A fresh repository with deterministic collaborators
///
/// Commit ids come out as `commit-1`, `commit-2`, … and every commit is
/// stamped with [`fixed_instant`], so scenarios can assert on exact values.
#[fixture]
pub fn repository() -> Repository {
    Repository::new(
        Box::new(SequentialIdGenerator::default()),
        Box::new(FixedClock::new(fixed_instant())),
    )
}

/// A repository with one commit on `main` covering three files
#[fixture]
pub fn committed_repository(mut repository: Repository) -> Repository {
    repository.write_file("1.txt", "one");
    repository.write_file("a/2.txt", "two");
    repository.write_file("a/b/3.txt", "three");

    repository.add(".").expect("seeded files should stage");
    repository
        .commit("Initial commit")
        .expect("staged files should commit");

    repository
}

/// Seed `count` lorem-named files into the working directory
pub fn write_generated_files(repository: &mut Repository, count: usize) -> Vec<(String, String)> {
    use fake::Fake;
    use fake::faker::lorem::en::{Word, Words};

    (0..count)
        .map(|i| {
            let file_name = format!("{}-{i}.txt", Word().fake::<String>());
            let file_content = Words(5..10).fake::<Vec<String>>().join(" ");

            repository.write_file(file_name.clone(), file_content.clone());

            (file_name, file_content)
        })
        .collect::<Vec<_>>()
}
