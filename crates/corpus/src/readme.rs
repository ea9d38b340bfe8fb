use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CorpusError, Result};

// Badge images keep CI noise on the same line; drop the whole remainder.
static BADGE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[.*?(shields\.io|badge)\S*\).*").expect("valid badge regex"));

static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[.*?\]\(.*?\)").expect("valid image regex"));

static INLINE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid link regex"));

static BARE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").expect("valid url regex"));

/// Strip Markdown plumbing from a README so only prose remains.
///
/// Removes badge lines, images, and bare URLs, and replaces inline links
/// with their link text. The output is what gets tokenized or sent off for
/// a one-paragraph summary; the prose itself is left untouched.
#[must_use]
pub fn clean_readme(markdown: &str) -> String {
    let no_badges = BADGE_LINE.replace_all(markdown, "");
    let no_images = IMAGE.replace_all(&no_badges, "");
    let no_links = INLINE_LINK.replace_all(&no_images, "$1");
    BARE_URL.replace_all(&no_links, "").into_owned()
}

/// Read `README.md` from a repository root.
pub fn load_readme(repo_dir: impl AsRef<Path>) -> Result<String> {
    let path: PathBuf = repo_dir.as_ref().join("README.md");
    if !path.is_file() {
        return Err(CorpusError::ReadmeMissing(repo_dir.as_ref().to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}
