use crate::areas::repository::Repository;
use crate::artifacts::core::EngineError;

impl Repository {
    /// Stage working-directory files into the index
    ///
    /// A literal working-directory path stages exactly that file. Anything
    /// else is compiled as a regular expression and every working-directory
    /// path whose full string matches is staged, so `add ".go$"` behaves
    /// like a glob over tracked-to-be files. Staging is an upsert; content
    /// already staged for a path is overwritten. The working directory is
    /// never touched.
    pub fn add(&mut self, pattern: &str) -> Result<(), EngineError> {
        // literal match wins before the string is ever treated as a pattern
        if let Some(content) = self.workspace().read_file(pattern) {
            let (path, content) = (pattern.to_string(), content.to_string());
            log::debug!("staging literal path {path}");
            self.index_mut().add(path, content);
            return Ok(());
        }

        let regex = regex::Regex::new(pattern).map_err(|source| EngineError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let matched = self
            .workspace()
            .files()
            .filter(|(path, _)| regex.is_match(path))
            .map(|(path, content)| (path.to_string(), content.to_string()))
            .collect::<Vec<_>>();

        if matched.is_empty() {
            return Err(EngineError::NoMatch {
                pattern: pattern.to_string(),
            });
        }

        log::debug!("staging {} file(s) matching {pattern}", matched.len());
        for (path, content) in matched {
            self.index_mut().add(path, content);
        }

        Ok(())
    }
}
