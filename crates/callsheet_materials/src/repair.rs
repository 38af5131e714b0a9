//! Best-effort repair of malformed JSON emitted by generation providers.

/// Repair common defects in model-written JSON in a single string-aware pass.
///
/// Fixes applied:
/// - raw control characters inside strings are escaped
/// - curly double quotes delimiting strings become `"`
/// - trailing commas before `}` or `]` are dropped
/// - missing commas between adjacent values or members are inserted
/// - an unterminated string is closed
/// - unbalanced braces and brackets are closed in stack order
///
/// Valid JSON passes through unchanged. The output is not guaranteed to
/// parse; callers re-parse and fall back on failure.
///
/// # Examples
///
/// ```
/// use callsheet_materials::repair_json;
///
/// let broken = "{\"beats\": [\"a\" \"b\",], \"note\": \"line one\nline two\"";
/// let fixed = repair_json(broken);
/// let value: serde_json::Value = serde_json::from_str(&fixed).unwrap();
/// assert_eq!(value["beats"][1], "b");
/// assert_eq!(value["note"], "line one\nline two");
/// ```
pub fn repair_json(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 16);
    let mut stack: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut curly_string = false;
    let mut escape_next = false;

    for ch in input.chars() {
        if in_string {
            if escape_next {
                escape_next = false;
                out.push(ch);
                continue;
            }
            match ch {
                '\\' => {
                    escape_next = true;
                    out.push(ch);
                }
                '"' => {
                    in_string = false;
                    out.push(ch);
                }
                '\u{201C}' | '\u{201D}' if curly_string => {
                    in_string = false;
                    out.push('"');
                }
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
                c => out.push(c),
            }
            continue;
        }

        let curly = matches!(ch, '\u{201C}' | '\u{201D}');
        let ch = if curly { '"' } else { ch };

        match ch {
            '"' => {
                insert_missing_comma(&mut out);
                out.push('"');
                in_string = true;
                curly_string = curly;
            }
            '{' | '[' => {
                insert_missing_comma(&mut out);
                out.push(ch);
                stack.push(if ch == '{' { '}' } else { ']' });
            }
            '}' | ']' => {
                if !stack.contains(&ch) {
                    // stray closer
                    continue;
                }
                drop_trailing_comma(&mut out);
                while let Some(expected) = stack.pop() {
                    out.push(expected);
                    if expected == ch {
                        break;
                    }
                }
            }
            c if c.is_whitespace() => out.push(c),
            ',' | ':' => out.push(ch),
            c => {
                if out.chars().last().is_some_and(char::is_whitespace) {
                    insert_missing_comma(&mut out);
                }
                out.push(c);
            }
        }
    }

    if in_string {
        if escape_next {
            out.pop();
        }
        out.push('"');
    }

    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    if out.ends_with(':') {
        out.push_str("null");
    }
    drop_trailing_comma(&mut out);
    while let Some(closer) = stack.pop() {
        out.push(closer);
    }
    out
}

/// Last non-whitespace character written so far.
fn last_significant(out: &str) -> Option<char> {
    out.chars().rev().find(|c| !c.is_whitespace())
}

/// Insert a comma when a new value starts right after a completed one.
fn insert_missing_comma(out: &mut String) {
    let ends_value = match last_significant(out) {
        Some('"') | Some('}') | Some(']') => true,
        Some(c) => c.is_ascii_alphanumeric() || c == '.',
        None => false,
    };
    if ends_value {
        let trimmed_len = out.trim_end().len();
        out.insert(trimmed_len, ',');
    }
}

/// Remove a comma left dangling before a closer or the end of input.
fn drop_trailing_comma(out: &mut String) {
    let trimmed_len = out.trim_end().len();
    if out[..trimmed_len].ends_with(',') {
        out.remove(trimmed_len - 1);
    }
}
