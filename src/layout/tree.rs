use std::fmt::Write;

use super::DirectoryGroup;

const BRANCH: &str = "├─ ";
const LAST_BRANCH: &str = "└─ ";
const PIPE: &str = "│  ";
const SPACE: &str = "   ";

/// Render the group as a listing tree under `caption`.
///
/// ```text
/// app-1.0.zip
/// └─ app-1.0/
///    ├─ bin/
///    └─ lib/
/// ```
pub fn render_tree(caption: &str, group: &DirectoryGroup) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{caption}");

    let roots = group.len();
    for (i, (root, children)) in group.iter().enumerate() {
        let last_root = i + 1 == roots;
        let _ = writeln!(out, "{}{root}", if last_root { LAST_BRANCH } else { BRANCH });

        let indent = if last_root { SPACE } else { PIPE };
        for (j, child) in children.iter().enumerate() {
            let branch = if j + 1 == children.len() { LAST_BRANCH } else { BRANCH };
            let _ = writeln!(out, "{indent}{branch}{child}");
        }
    }

    out
}
