//! Package manifest scanning.
//!
//! The Swift package manifest is source code, not data, so the package name
//! is pulled out with a line scan: the first line that starts with `name`
//! (ignoring surrounding spaces) and the first double-quoted string on it.

use std::fs;
use std::path::Path;

use crate::error::{Result, ToolboxError};

/// Manifest file name at the project root.
pub const MANIFEST_FILE: &str = "Package.swift";

/// Extract the package name from manifest source.
pub fn package_name(contents: &str) -> Option<String> {
    let line = contents
        .lines()
        .map(|line| line.trim_matches(' '))
        .find(|line| line.starts_with("name"))?;

    let start = line.find('"')? + 1;
    let len = line[start..].find('"')?;
    Some(line[start..start + len].to_string())
}

/// Read the package name from the manifest in `project_root`.
pub fn read_package_name(project_root: &Path) -> Result<String> {
    let path = project_root.join(MANIFEST_FILE);
    let contents = fs::read_to_string(&path).map_err(|_| {
        ToolboxError::failed(format!("Could not read {}.", MANIFEST_FILE))
    })?;

    package_name(&contents).ok_or_else(|| {
        ToolboxError::failed(format!("Could not find a package name in {}.", MANIFEST_FILE))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"import PackageDescription

let package = Package(
    name: "HelloWorld",
    dependencies: [
        .Package(url: "https://github.com/qutheory/vapor.git", majorVersion: 0, minor: 8)
    ]
)
"#;

    #[test]
    fn finds_name_in_manifest() {
        assert_eq!(package_name(MANIFEST), Some("HelloWorld".to_string()));
    }

    #[test]
    fn uses_first_name_line() {
        let contents = "name: \"First\"\nname: \"Second\"\n";
        assert_eq!(package_name(contents), Some("First".to_string()));
    }

    #[test]
    fn name_line_without_quotes_is_none() {
        assert_eq!(package_name("    name: Unquoted\n"), None);
    }

    #[test]
    fn unterminated_quote_is_none() {
        assert_eq!(package_name("name: \"Broken\n"), None);
    }

    #[test]
    fn missing_name_line_is_none() {
        assert_eq!(package_name("let package = Package()\n"), None);
    }

    #[test]
    fn only_spaces_are_trimmed() {
        // A tab-indented line does not start with `name` after trimming spaces.
        assert_eq!(package_name("\tname: \"Tabbed\"\n"), None);
    }

    #[test]
    fn reads_manifest_from_disk() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join(MANIFEST_FILE), MANIFEST).unwrap();
        assert_eq!(read_package_name(temp.path()).unwrap(), "HelloWorld");
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = read_package_name(temp.path()).unwrap_err();
        assert!(err.to_string().contains(MANIFEST_FILE));
    }
}
