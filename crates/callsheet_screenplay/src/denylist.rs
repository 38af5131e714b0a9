//! Tokens that look like speaker cues but are not characters.
//!
//! Screenplay text interleaves slug lines, transitions and onomatopoeia with
//! dialogue headers. Extend these tables to suppress new false positives.

/// Line prefixes marking scene headings and transitions.
pub const SCENE_PREFIXES: &[&str] = &[
    "INT.",
    "EXT.",
    "INT/EXT",
    "EXT/INT",
    "I/E",
    "FADE",
    "CUT TO",
    "SMASH CUT",
    "MATCH CUT",
    "JUMP CUT",
    "DISSOLVE",
    "BACK TO",
    "INTERCUT",
    "FLASHBACK",
    "MONTAGE",
    "TITLE",
    "SUPER",
    "CONTINUED",
    "THE END",
    "END OF",
];

/// Whole-line tokens rejected as speaker names.
pub const NON_SPEAKER_TOKENS: &[&str] = &[
    // sound effects
    "BANG",
    "BOOM",
    "CRASH",
    "CRACK",
    "THUD",
    "SLAM",
    "SMASH",
    "WHAM",
    "THWACK",
    "CLICK",
    "CLANG",
    "KNOCK KNOCK",
    "BUZZ",
    "RING",
    "SPLASH",
    "WHOOSH",
    "SCREECH",
    "POP",
    "BEEP",
    // directions and timing
    "BEAT",
    "PAUSE",
    "SILENCE",
    "LATER",
    "MOMENTS LATER",
    "CONTINUOUS",
    "SAME",
    "DAY",
    "NIGHT",
    "MORNING",
    "EVENING",
    "DAWN",
    "DUSK",
    "BLACK",
    "BLACKOUT",
    "BLACK SCREEN",
    "WHITE",
    "END",
    "CREDITS",
    "OPENING CREDITS",
    "END CREDITS",
    "COLD OPEN",
    "TEASER",
    "TAG",
    "ACT ONE",
    "ACT TWO",
    "ACT THREE",
    "ACT FOUR",
    "ACT FIVE",
    "INSERT",
    "CLOSE ON",
    "ANGLE ON",
    "WIDE",
    "POV",
    "SCENE",
    "OFF",
    // shouted interjections
    "YES",
    "HEY",
    "WHAT",
    "STOP",
    "HELP",
    "RUN",
    "WAIT",
    "OKAY",
];

/// Whether a trimmed line starts with a heading or transition prefix.
pub fn is_scene_prefix(line: &str) -> bool {
    SCENE_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}

/// Whether a candidate name is a deny-listed token.
///
/// The candidate is compared after trimming surrounding punctuation, so
/// `"BANG!"` and `"...SILENCE..."` are both rejected.
pub fn is_denied(candidate: &str) -> bool {
    let key = candidate.trim_matches(|c: char| !c.is_alphanumeric());
    key.chars().count() < 3 || NON_SPEAKER_TOKENS.contains(&key)
}
