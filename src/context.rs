//! Collects a small, targeted slice of repository context for the model:
//! the connectivity spec, workflow definitions, and README files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CONNECTIVITY_SPEC: &str = "connectivity.md";
const CONNECTIVITY_SPEC_BUDGET: usize = 4000;
const SECTION_BUDGET: usize = 3000;
const SEPARATOR: &str = "\n\n---\n\n";

const README_CANDIDATES: [&str; 2] = ["README.md", "README-HCB.md"];

/// One candidate file that exists on disk, with the outcome of reading it.
/// Read failures are kept as explicit outcomes so the caller can decide
/// that partial context is acceptable (it is, by policy).
#[derive(Debug)]
pub struct GatheredFile {
    /// Path relative to the repository root, used as the section label.
    pub path: PathBuf,
    pub outcome: io::Result<String>,
}

fn truncate_bytes(content: &str, budget: usize) -> &str {
    if content.len() <= budget {
        return content;
    }
    let mut end = budget;
    while !content.is_char_boundary(end) {
        end -= 1;
    }
    &content[..end]
}

fn read_truncated(root: &Path, relative: &Path, budget: usize) -> io::Result<String> {
    let bytes = fs::read(root.join(relative))?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(truncate_bytes(&content, budget).to_string())
}

fn workflow_files(root: &Path) -> Vec<PathBuf> {
    let workflows_dir = root.join(".github").join("workflows");
    let Ok(entries) = fs::read_dir(workflows_dir) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "yml"))
        .filter_map(|path| {
            path.file_name()
                .map(|name| Path::new(".github").join("workflows").join(name))
        })
        .collect();
    files.sort();
    files
}

/// Read every candidate file that exists under `root`, truncated to its
/// byte budget. Missing candidates are skipped entirely.
pub fn gather(root: &Path) -> Vec<GatheredFile> {
    let mut candidates: Vec<(PathBuf, usize)> =
        vec![(PathBuf::from(CONNECTIVITY_SPEC), CONNECTIVITY_SPEC_BUDGET)];
    candidates.extend(
        workflow_files(root)
            .into_iter()
            .map(|path| (path, SECTION_BUDGET)),
    );
    candidates.extend(
        README_CANDIDATES
            .iter()
            .map(|name| (PathBuf::from(name), SECTION_BUDGET)),
    );

    candidates
        .into_iter()
        .filter(|(path, _)| root.join(path).exists())
        .map(|(path, budget)| {
            let outcome = read_truncated(root, &path, budget);
            GatheredFile { path, outcome }
        })
        .collect()
}

/// Render the successfully read sections as a single labeled text blob.
/// Output length is bounded by the number of candidates times the
/// per-file budget, plus separators.
pub fn render(files: &[GatheredFile]) -> String {
    let sections: Vec<String> = files
        .iter()
        .filter_map(|file| {
            file.outcome
                .as_ref()
                .ok()
                .map(|content| format!("# File: {}\n{content}", file.path.display()))
        })
        .collect();
    sections.join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn empty_repository_yields_empty_blob() {
        let dir = TempDir::new().unwrap();
        let files = gather(dir.path());
        assert!(files.is_empty());
        assert_eq!(render(&files), "");
    }

    #[test]
    fn oversized_file_is_truncated_to_budget() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "connectivity.md", &"a".repeat(5000));

        let files = gather(dir.path());
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].outcome.as_ref().unwrap().len(), 4000);
    }

    #[test]
    fn truncation_respects_utf8_boundaries() {
        assert_eq!(truncate_bytes("héllo", 2), "h");
        assert_eq!(truncate_bytes("héllo", 3), "hé");
        assert_eq!(truncate_bytes("héllo", 100), "héllo");
    }

    #[test]
    fn workflows_are_sorted_and_labeled() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), ".github/workflows/deploy.yml", "on: push");
        write(dir.path(), ".github/workflows/ci.yml", "on: pull_request");
        write(dir.path(), ".github/workflows/notes.txt", "ignored");

        let files = gather(dir.path());
        let labels: Vec<String> = files.iter().map(|f| f.path.display().to_string()).collect();
        assert_eq!(
            labels,
            vec![".github/workflows/ci.yml", ".github/workflows/deploy.yml"]
        );

        let blob = render(&files);
        assert!(blob.contains("# File: .github/workflows/ci.yml\non: pull_request"));
        assert!(blob.contains(SEPARATOR));
    }

    #[test]
    fn readme_sections_follow_workflows() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "connectivity.md", "spec");
        write(dir.path(), ".github/workflows/ci.yml", "on: push");
        write(dir.path(), "README.md", "readme");

        let files = gather(dir.path());
        let labels: Vec<String> = files.iter().map(|f| f.path.display().to_string()).collect();
        assert_eq!(
            labels,
            vec!["connectivity.md", ".github/workflows/ci.yml", "README.md"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_candidate_keeps_an_error_outcome() {
        let dir = TempDir::new().unwrap();
        // A directory where a file is expected makes the read fail while
        // the existence check passes.
        fs::create_dir(dir.path().join("README.md")).unwrap();
        write(dir.path(), "connectivity.md", "spec");

        let files = gather(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.outcome.is_err()));

        // Partial context still renders from the readable files.
        let blob = render(&files);
        assert!(blob.contains("# File: connectivity.md"));
        assert!(!blob.contains("# File: README.md"));
    }
}
