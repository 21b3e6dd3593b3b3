//! Grouping of directory entries into a two-level hierarchy.

use crate::error::Result;
use crate::io::ReadStream;
use crate::zip::ZipEntryStream;

use super::path::{child_of, is_at_most_second_level, is_directory, root_of};

/// Root directories of an archive and the second-level directories
/// beneath each of them.
///
/// Roots iterate in the order they were first seen. Children keep archive
/// order, duplicates included: an archive that lists `app/bin/` twice
/// yields `bin/` twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryGroup {
    roots: Vec<(String, Vec<String>)>,
}

impl DirectoryGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one entry name into the group.
    ///
    /// Files and directories deeper than two levels are ignored.
    pub fn record(&mut self, path: &str) {
        if !is_directory(path) || !is_at_most_second_level(path) {
            return;
        }

        let root = root_of(path);
        let index = match self.roots.iter().position(|(key, _)| key == root) {
            Some(index) => index,
            None => {
                self.roots.push((root.to_string(), Vec::new()));
                self.roots.len() - 1
            }
        };

        if let Some(child) = child_of(path) {
            self.roots[index].1.push(child.to_string());
        }
    }

    /// Number of root directories.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Root directories with their children, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.roots
            .iter()
            .map(|(root, children)| (root.as_str(), children.as_slice()))
    }

    /// Children of the given root directory.
    pub fn children(&self, root: &str) -> Option<&[String]> {
        self.iter()
            .find(|(key, _)| *key == root)
            .map(|(_, children)| children)
    }

    /// The only root directory, if there is exactly one.
    pub fn single_root(&self) -> Option<(&str, &[String])> {
        match self.roots.as_slice() {
            [(root, children)] => Some((root.as_str(), children.as_slice())),
            _ => None,
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for DirectoryGroup {
    fn from_iter<I: IntoIterator<Item = S>>(paths: I) -> Self {
        paths.into_iter().fold(Self::new(), |mut group, path| {
            group.record(path.as_ref());
            group
        })
    }
}

/// Group a fallible sequence of entry names.
///
/// The sequence is drained to its end. The first error is returned as is
/// and no partial group survives it.
pub fn group<I, P, E>(paths: I) -> std::result::Result<DirectoryGroup, E>
where
    I: IntoIterator<Item = std::result::Result<P, E>>,
    P: AsRef<str>,
{
    paths
        .into_iter()
        .try_fold(DirectoryGroup::new(), |mut group, path| {
            group.record(path?.as_ref());
            Ok(group)
        })
}

/// Read every entry name from the stream and group them.
///
/// # Errors
///
/// Returns the stream's error unchanged if reading fails before the end
/// of the entries.
pub async fn read_directory_group<S: ReadStream>(
    entries: &mut ZipEntryStream<S>,
) -> Result<DirectoryGroup> {
    let mut group = DirectoryGroup::new();

    while let Some(name) = entries.next_name().await? {
        group.record(&name);
    }

    tracing::debug!(
        entries = entries.entries_read(),
        roots = group.len(),
        "grouped directories"
    );

    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArchiveReadError;
    use crate::test_utils::*;

    fn grouped(paths: &[&str]) -> DirectoryGroup {
        paths.iter().collect()
    }

    #[test]
    fn keeps_children_in_archive_order() {
        let group = grouped(&["x/", "x/bin/", "x/lib/"]);
        assert_eq!(group.len(), 1);
        assert_eq!(group.children("x/").unwrap(), ["bin/", "lib/"]);
    }

    #[test]
    fn root_without_children_has_empty_sequence() {
        let group = grouped(&["app/", "app/README"]);
        assert_eq!(group.single_root(), Some(("app/", &[][..])));
    }

    #[test]
    fn ignores_files_and_deep_directories() {
        let group = grouped(&[
            "a/",
            "a/b/",
            "a/b/c/",
            "a/b/c/d/",
            "a/b/run",
            "README",
            "a/NOTICE",
        ]);
        assert_eq!(group.children("a/").unwrap(), ["b/"]);
        assert!(group.iter().all(|(root, children)| {
            root != "a/b/c/d/" && children.iter().all(|child| !child.contains("c/"))
        }));
    }

    #[test]
    fn roots_iterate_in_first_seen_order() {
        let group = grouped(&["zeta/", "alpha/", "zeta/bin/", "alpha/lib/"]);
        let roots: Vec<_> = group.iter().map(|(root, _)| root).collect();
        assert_eq!(roots, ["zeta/", "alpha/"]);
        assert_eq!(group.children("zeta/").unwrap(), ["bin/"]);
        assert_eq!(group.children("alpha/").unwrap(), ["lib/"]);
        assert!(group.single_root().is_none());
    }

    #[test]
    fn second_level_entry_creates_its_root() {
        let group = grouped(&["app/bin/"]);
        assert_eq!(group.single_root(), Some(("app/", &["bin/".to_string()][..])));
    }

    #[test]
    fn keeps_duplicate_entries() {
        let group = grouped(&["app/", "app/bin/", "app/", "app/bin/"]);
        assert_eq!(group.len(), 1);
        assert_eq!(group.children("app/").unwrap(), ["bin/", "bin/"]);
    }

    #[test]
    fn grouping_is_repeatable() {
        let paths = ["app/", "other/", "app/bin/", "other/lib/", "app/bin/run"];
        assert_eq!(grouped(&paths), grouped(&paths));
    }

    #[test]
    fn no_directories_gives_empty_group() {
        let group = grouped(&["README", "run.sh"]);
        assert!(group.is_empty());
    }

    #[test]
    fn group_propagates_the_first_error() {
        let paths: Vec<std::result::Result<&str, &str>> =
            vec![Ok("app/"), Err("connection reset"), Ok("app/bin/")];
        assert_eq!(group(paths), Err("connection reset"));

        let paths: Vec<std::result::Result<&str, &str>> = vec![Ok("app/"), Ok("app/bin/")];
        assert_eq!(group(paths).unwrap().children("app/").unwrap(), ["bin/"]);
    }

    #[tokio::test]
    async fn reads_group_from_archive() {
        let data = zip_with_entries(&["app/", "app/bin/", "app/bin/run", "app/lib/", "app/lib/x/"]);
        let mut entries = ZipEntryStream::new(MemoryStream::new(data));

        let group = read_directory_group(&mut entries).await.unwrap();
        assert_eq!(group.children("app/").unwrap(), ["bin/", "lib/"]);
        assert!(entries.next_entry().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn read_error_yields_no_group() {
        let data = zip_with_entries(&["app/", "app/bin/", "app/bin/run"]);
        let mut entries = ZipEntryStream::new(FailingStream::new(data, 50));

        let err = read_directory_group(&mut entries).await.unwrap_err();
        assert!(matches!(err, ArchiveReadError::Io(_)));
    }
}
