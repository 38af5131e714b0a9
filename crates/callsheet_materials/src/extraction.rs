//! Utilities for extracting JSON payloads from generation responses.
//!
//! Responses often wrap JSON in markdown code fences or surround it with
//! explanatory text, and long responses are sometimes cut off mid-object.

use callsheet_error::JsonError;

/// Extract the JSON object text from a response that may contain markdown or extra text.
///
/// Strategies, in order:
/// 1. A ```json fenced block (an unclosed fence runs to the end of the text)
/// 2. Any fenced block
/// 3. The first balanced `{ ... }`
/// 4. Everything from the first `{` to the end (truncated output)
///
/// # Errors
///
/// Returns an error if the response contains no `{` at all.
///
/// # Examples
///
/// ```
/// use callsheet_materials::extract_json;
///
/// let response = "Here's the guide:\n\
///     \n\
///     ```json\n\
///     {\"studyGuide\": {\"overview\": \"Guarded\"}}\n\
///     ```\n";
///
/// let json = extract_json(response).unwrap();
/// assert!(json.starts_with('{'));
/// assert!(json.contains("Guarded"));
/// ```
pub fn extract_json(response: &str) -> Result<String, JsonError> {
    if let Some(block) = extract_from_code_block(response, "json") {
        if block.contains('{') {
            return Ok(block);
        }
    }

    if let Some(block) = extract_from_code_block(response, "") {
        if block.contains('{') {
            return Ok(block);
        }
    }

    if let Some(json) = extract_balanced(response, '{', '}') {
        return Ok(json);
    }

    if let Some(start) = response.find('{') {
        tracing::debug!(
            response_length = response.len(),
            "No balanced object found, using truncated tail"
        );
        return Ok(response[start..].trim().to_string());
    }

    tracing::warn!(
        response_length = response.len(),
        "No JSON object found in generation response"
    );

    Err(JsonError::new(format!(
        "No JSON object found in response (length: {})",
        response.len()
    )))
}

/// Extract content from markdown code blocks.
///
/// An empty `language` matches any fence, skipping its language tag.
fn extract_from_code_block(response: &str, language: &str) -> Option<String> {
    let pattern = format!("```{}", language);
    let start = response.find(&pattern)?;

    let mut content_start = start + pattern.len();
    if language.is_empty() {
        content_start = response[content_start..]
            .find('\n')
            .map(|n| content_start + n + 1)
            .unwrap_or(content_start);
    }

    let content = match response[content_start..].find("```") {
        Some(end) => &response[content_start..content_start + end],
        // No closing fence, likely a truncated response
        None => &response[content_start..],
    };
    Some(content.trim().to_string())
}

/// Extract content between balanced delimiters.
///
/// Finds the first occurrence of `open` and extracts content up to
/// the matching `close`, ignoring delimiters inside strings.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(response[start..start + i + ch.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}
