use std::ffi::OsStr;
use std::path::{Component, Path};

/// Root `file_path` under `base_path` unless its first segment already is `base_path`.
///
/// The first segment is taken after lexical normalization (`.` dropped, `..`
/// folded into its parent), so `files/../x` is still prefixed. Only that
/// segment is inspected: `bar/files/x` is still prefixed.
/// Leading `/` separators are dropped so the result never escapes the base.
pub fn prepend_base_path(base_path: &str, file_path: &str) -> String {
    let relative = file_path.trim_start_matches('/');

    match first_normalized_segment(relative) {
        Some(segment) if segment == base_path => relative.to_string(),
        _ => format!("{}/{}", base_path, relative),
    }
}

/// First segment after resolving `.` and `..` without touching the filesystem.
///
/// A `..` that climbs above the start is kept, so `../x` yields `..`.
fn first_normalized_segment(path: &str) -> Option<&OsStr> {
    let mut segments: Vec<&OsStr> = Vec::new();

    for component in Path::new(path).components() {
        match component {
            Component::Normal(segment) => segments.push(segment),
            Component::ParentDir => match segments.last() {
                Some(last) if *last != OsStr::new("..") => {
                    segments.pop();
                }
                _ => segments.push(OsStr::new("..")),
            },
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    segments.first().copied()
}
