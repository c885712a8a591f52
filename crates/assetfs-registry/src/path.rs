//! Canonical asset paths.
//!
//! Canonical form:
//! - Slash-separated, no leading or trailing slash
//! - No empty segments and no `.` segments
//! - `..` removes the previous segment and never climbs above the root
//! - The root is the empty string

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// Keys a source may use for the root directory, in lookup order.
pub const ROOT_KEYS: &[&str] = &["", "."];

/// Canonicalize a path.
///
/// # Examples
///
/// ```
/// use assetfs_registry::path::normalize;
///
/// assert_eq!(normalize("/hello/world.txt"), "hello/world.txt");
/// assert_eq!(normalize("hello//./world.txt/"), "hello/world.txt");
/// assert_eq!(normalize("/../hello"), "hello");
/// assert_eq!(normalize("/"), "");
/// ```
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments.join("/")
}

/// Join a directory and a child name, then canonicalize.
pub fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        return normalize(name);
    }
    normalize(&format!("{dir}{SEPARATOR}{name}"))
}

/// Last segment of a path, or `"/"` for the root.
///
/// # Examples
///
/// ```
/// use assetfs_registry::path::base_name;
///
/// assert_eq!(base_name("hello/world.txt"), "world.txt");
/// assert_eq!(base_name("/hello/"), "hello");
/// assert_eq!(base_name(""), "/");
/// ```
pub fn base_name(path: &str) -> String {
    let canonical = normalize(path);
    match canonical.rsplit(SEPARATOR).next() {
        Some(last) if !last.is_empty() => last.to_string(),
        _ => SEPARATOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_slashes() {
        assert_eq!(normalize("hello.txt"), "hello.txt");
        assert_eq!(normalize("/hello.txt"), "hello.txt");
        assert_eq!(normalize("hello/"), "hello");
        assert_eq!(normalize("//hello///world.txt"), "hello/world.txt");
    }

    #[test]
    fn drops_dot_segments() {
        assert_eq!(normalize("./hello/./world.txt"), "hello/world.txt");
        assert_eq!(normalize("."), "");
    }

    #[test]
    fn parent_segments_stay_inside_root() {
        assert_eq!(normalize("hello/../world.txt"), "world.txt");
        assert_eq!(normalize("../../etc/passwd"), "etc/passwd");
        assert_eq!(normalize("a/b/../../.."), "");
    }

    #[test]
    fn join_paths() {
        assert_eq!(join("", "hello.txt"), "hello.txt");
        assert_eq!(join("hello", "world.txt"), "hello/world.txt");
        assert_eq!(join("static/", "/css/site.css"), "static/css/site.css");
    }

    #[test]
    fn base_names() {
        assert_eq!(base_name("hello.txt"), "hello.txt");
        assert_eq!(base_name("a/b/c"), "c");
        assert_eq!(base_name("/"), "/");
        assert_eq!(base_name("."), "/");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(path in "[a-z./]{0,24}") {
            let once = normalize(&path);
            prop_assert_eq!(normalize(&once), once.clone());
            prop_assert!(!once.starts_with('/'));
            prop_assert!(!once.ends_with('/'));
            prop_assert!(!once.contains("//"));
        }
    }
}
