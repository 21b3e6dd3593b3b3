//! Classification of archive entry paths.
//!
//! Entry names are relative POSIX-style paths; directories end with `/`.

/// Path separator used by ZIP entry names.
pub const SEPARATOR: char = '/';

/// Whether the entry names a directory.
pub fn is_directory(path: &str) -> bool {
    path.ends_with(SEPARATOR)
}

/// Number of separators in the path.
pub fn depth(path: &str) -> usize {
    path.matches(SEPARATOR).count()
}

pub fn is_at_most_second_level(path: &str) -> bool {
    depth(path) <= 2
}

/// Whether the path is a single non-empty segment followed by the
/// trailing separator, e.g. `app/`.
pub fn is_root_directory(path: &str) -> bool {
    match path.strip_suffix(SEPARATOR) {
        Some(segment) => !segment.is_empty() && !segment.contains(SEPARATOR),
        None => false,
    }
}

/// The root directory a path belongs to: `app/bin/` becomes `app/`.
///
/// The final `segment/` is removed when a separator precedes it. Any
/// other path, root directories included, is returned unchanged.
pub fn root_of(path: &str) -> &str {
    let Some(body) = path.strip_suffix(SEPARATOR) else {
        return path;
    };

    match body.rfind(SEPARATOR) {
        Some(index) if index + 1 < body.len() => &path[..=index],
        _ => path,
    }
}

/// The path below its root segment: `app/bin/` becomes `bin/`.
///
/// Root directories are group keys rather than members, so they have no
/// child.
pub fn child_of(path: &str) -> Option<&str> {
    if is_root_directory(path) {
        return None;
    }

    match path.find(SEPARATOR) {
        Some(index) if index > 0 => Some(&path[index + 1..]),
        _ => Some(path),
    }
}

/// Final segment name, ignoring a trailing separator.
pub fn last_segment(path: &str) -> &str {
    let body = path.strip_suffix(SEPARATOR).unwrap_or(path);
    body.rsplit(SEPARATOR).next().unwrap_or(body)
}
