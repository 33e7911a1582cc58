//! Prompt loading and tag extraction
//!
//! A prompt is one line of text: a subject followed by tags, separated by
//! `;`, `|` or `,`:
//!
//! ```text
//! .imagine the color clash ; HDR ; hyperrealistic ; contest winner
//! ```
//!
//! The subject is dropped; the remaining segments are the tags.

use crate::error::{TagnetError, TagnetResult};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

fn is_separator(c: char) -> bool {
    matches!(c, ';' | '|' | ',')
}

/// Tags of a single prompt, in order, trimmed, empty segments removed
pub fn extract_tags(prompt: &str) -> Vec<String> {
    match prompt.split_once(is_separator) {
        Some((_subject, rest)) => rest
            .split(is_separator)
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

/// Load every prompt from the files directly inside `dir`.
///
/// Subdirectories are not visited; symlinks to files are read. Lines are
/// trimmed before deduplication, so lines differing only in surrounding
/// whitespace count as one prompt. Blank lines are dropped and the result
/// is sorted.
pub fn load_prompts(dir: &Path) -> TagnetResult<Vec<String>> {
    if !dir.is_dir() {
        return Err(TagnetError::NotADirectory(dir.to_path_buf()));
    }

    let mut prompts = BTreeSet::new();
    let mut files = 0usize;
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        // Follows symlinks; dangling links are not files
        if !entry.path().is_file() {
            continue;
        }
        let content = match std::fs::read_to_string(entry.path()) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                warn!(path = %entry.path().display(), "skipping file that is not valid UTF-8");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        files += 1;
        prompts.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    debug!(files, prompts = prompts.len(), dir = %dir.display(), "loaded prompts");
    Ok(prompts.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn extracts_tags_after_subject() {
        assert_eq!(
            extract_tags(".imagine the color clash ; HDR ; hyperrealistic ; contest winner"),
            vec!["HDR", "hyperrealistic", "contest winner"]
        );
    }

    #[test]
    fn all_separators_split() {
        assert_eq!(
            extract_tags(".imagine the Fresnel lens ; in fine detail , rendered in charcoal | realistic"),
            vec!["in fine detail", "rendered in charcoal", "realistic"]
        );
    }

    #[test]
    fn first_separator_may_be_any_kind() {
        assert_eq!(extract_tags("subject | a ; b"), vec!["a", "b"]);
        assert_eq!(extract_tags("subject, a"), vec!["a"]);
    }

    #[test]
    fn prompt_without_separator_has_no_tags() {
        assert!(extract_tags(".imagine the night").is_empty());
        assert!(extract_tags("").is_empty());
    }

    #[test]
    fn empty_segments_are_dropped() {
        assert_eq!(extract_tags("subject ;; vray ; ; | PBR ;"), vec!["vray", "PBR"]);
    }

    #[test]
    fn non_ascii_tags_survive() {
        assert_eq!(
            extract_tags(".imagine α-pinene pool ; vray ; PBR"),
            vec!["vray", "PBR"]
        );
        assert_eq!(extract_tags("x ; α-pinene"), vec!["α-pinene"]);
    }

    #[test]
    fn loads_sorted_unique_prompts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "b ; two\na ; one\n\n").unwrap();
        fs::write(dir.path().join("b.txt"), "  a ; one  \nc ; three").unwrap();

        let prompts = load_prompts(dir.path()).unwrap();
        assert_eq!(prompts, vec!["a ; one", "b ; two", "c ; three"]);
    }

    #[test]
    fn subdirectories_are_not_visited() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("top.txt"), "top ; tag").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.txt"), "deep ; tag").unwrap();

        let prompts = load_prompts(dir.path()).unwrap();
        assert_eq!(prompts, vec!["top ; tag"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_are_read() {
        let dir = TempDir::new().unwrap();
        let store = TempDir::new().unwrap();
        let real = store.path().join("real.txt");
        fs::write(&real, "s ; linked").unwrap();
        std::os::unix::fs::symlink(&real, dir.path().join("link.txt")).unwrap();
        std::os::unix::fs::symlink(store.path().join("gone.txt"), dir.path().join("dangling.txt"))
            .unwrap();

        assert_eq!(load_prompts(dir.path()).unwrap(), vec!["s ; linked"]);
    }

    #[test]
    fn lines_differing_in_outer_whitespace_are_one_prompt() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "x ; vray\nx ; vray \n").unwrap();

        assert_eq!(load_prompts(dir.path()).unwrap(), vec!["x ; vray"]);
    }

    #[test]
    fn missing_directory_is_rejected() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            load_prompts(&missing),
            Err(TagnetError::NotADirectory(_))
        ));
    }

    #[test]
    fn file_path_is_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("prompts.txt");
        fs::write(&file, "a ; b").unwrap();
        assert!(matches!(
            load_prompts(&file),
            Err(TagnetError::NotADirectory(_))
        ));
    }

    #[test]
    fn binary_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("blob.bin"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(dir.path().join("ok.txt"), "s ; t").unwrap();

        assert_eq!(load_prompts(dir.path()).unwrap(), vec!["s ; t"]);
    }
}
