//! Speaker cue and dialogue extraction from screenplay-formatted text.

use crate::NameMatcher;
use crate::denylist::{is_denied, is_scene_prefix};
use regex::Regex;
use std::sync::LazyLock;

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[(\[][^)\]]*[)\]]").expect("Valid parenthetical regex"));

/// Extracts speaker names and dialogue from loosely formatted scene text.
///
/// A line is a speaker cue when, after trimming, it is entirely upper-case,
/// is longer than 2 and shorter than 30 characters, and does not open with a
/// scene heading or transition. Parenthetical extensions such as `(CONT'D)`
/// or `(V.O.)` are stripped from the accepted name.
///
/// # Examples
///
/// ```
/// use callsheet_screenplay::ScreenplayTextScanner;
///
/// let text = "INT. DOCKS - NIGHT\n\nJACE\nWe leave at dawn.\n\nMARISOL (V.O.)\nNot without me.\n";
/// let scanner = ScreenplayTextScanner::new();
///
/// assert_eq!(scanner.speakers(text), vec!["JACE", "MARISOL"]);
/// assert_eq!(scanner.dialogue(text, "Jace Castro"), vec!["We leave at dawn."]);
/// ```
#[derive(Debug, Clone)]
pub struct ScreenplayTextScanner {
    dialogue_limit: usize,
}

impl Default for ScreenplayTextScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenplayTextScanner {
    /// Default cap on dialogue lines returned per call.
    pub const DEFAULT_DIALOGUE_LIMIT: usize = 40;

    /// Scanner with the default dialogue cap.
    pub fn new() -> Self {
        Self::with_dialogue_limit(Self::DEFAULT_DIALOGUE_LIMIT)
    }

    /// Scanner returning at most `limit` dialogue lines per call.
    pub fn with_dialogue_limit(limit: usize) -> Self {
        Self {
            dialogue_limit: limit,
        }
    }

    /// Parse one line as a speaker cue, returning the bare name.
    pub fn speaker_cue(line: &str) -> Option<String> {
        let line = line.trim();
        let len = line.chars().count();
        if len <= 2 || len >= 30 {
            return None;
        }
        if line != line.to_uppercase() || is_scene_prefix(line) {
            return None;
        }

        let name = PARENTHETICAL.replace_all(line, "");
        let name = name.trim().trim_end_matches(':').trim();
        if !name.chars().any(char::is_alphabetic) || is_denied(name) {
            return None;
        }
        Some(name.to_string())
    }

    /// Distinct speaker names in order of first appearance.
    pub fn speakers(&self, text: &str) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for name in text.lines().filter_map(Self::speaker_cue) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Dialogue lines spoken under every cue matching `name`.
    ///
    /// Collection after a matching cue skips blank lines, bracketed
    /// parentheticals and other all-caps lines, and ends at the next speaker
    /// cue, scene heading or transition. Returns at most the configured number of lines; an unknown name
    /// yields an empty list.
    pub fn dialogue(&self, text: &str, name: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let mut speaking = false;

        for raw in text.lines() {
            if lines.len() >= self.dialogue_limit {
                break;
            }
            if let Some(cue) = Self::speaker_cue(raw) {
                speaking = NameMatcher::matches(&cue, name);
                continue;
            }
            if !speaking {
                continue;
            }
            let line = raw.trim();
            if is_scene_prefix(line) {
                speaking = false;
                continue;
            }
            if line.is_empty() || is_parenthetical(line) || is_all_caps(line) {
                continue;
            }
            lines.push(line.to_string());
        }
        lines
    }
}

fn is_parenthetical(line: &str) -> bool {
    (line.starts_with('(') && line.ends_with(')')) || (line.starts_with('[') && line.ends_with(']'))
}

fn is_all_caps(line: &str) -> bool {
    line.chars().any(char::is_alphabetic) && line == line.to_uppercase()
}
