const MAX_API_ERROR_CHARS: usize = 200;

/// Markers whose trailing token must never reach logs or error chains.
const SECRET_MARKERS: [&str; 7] = [
    "Bearer ",
    "ghp_",
    "github_pat_",
    "sk-",
    "eyJ",
    "api_key=",
    "access_token=",
];

fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '+' | '/' | '=')
}

fn token_end(input: &str, from: usize) -> usize {
    let mut end = from;
    for (i, c) in input[from..].char_indices() {
        if is_secret_char(c) {
            end = from + i + c.len_utf8();
        } else {
            break;
        }
    }
    end
}

fn scrub_after_marker(scrubbed: &mut String, marker: &str) {
    let mut search_from = 0;
    loop {
        let Some(rel) = scrubbed[search_from..].find(marker) else {
            break;
        };

        let start = search_from + rel;
        // Prefix markers (ghp_, sk-, eyJ) are part of the secret; key=value
        // markers are kept and only the value is replaced.
        let content_start = if marker.ends_with(['=', ' ']) {
            start + marker.len()
        } else {
            start
        };
        let end = token_end(scrubbed, start + marker.len());

        // Skip bare markers without a token value.
        if end <= content_start {
            search_from = start + marker.len();
            continue;
        }

        scrubbed.replace_range(content_start..end, "[REDACTED]");
        search_from = content_start + "[REDACTED]".len();
    }
}

fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &input[..byte_index],
        None => input,
    }
}

/// Redact token-shaped substrings, then bound the length.
pub fn scrub_secret_patterns(input: &str) -> String {
    let mut scrubbed = input.to_string();
    for marker in SECRET_MARKERS {
        if scrubbed.contains(marker) {
            scrub_after_marker(&mut scrubbed, marker);
        }
    }
    scrubbed
}

/// Sanitize an API error body for inclusion in an error chain.
pub fn sanitize_api_error(body: &str) -> String {
    truncate_chars(&scrub_secret_patterns(body), MAX_API_ERROR_CHARS).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_bearer_header_value() {
        let out = sanitize_api_error("unauthorized: Bearer abc-123.def");
        assert!(!out.contains("abc-123.def"));
        assert!(out.contains("Bearer [REDACTED]"));
    }

    #[test]
    fn redacts_github_token_prefixes() {
        let out = sanitize_api_error("bad credentials ghp_abcdef0123456789");
        assert!(!out.contains("ghp_abcdef0123456789"));
        assert!(out.contains("[REDACTED]"));
    }

    #[test]
    fn redacts_key_value_pairs_keeping_the_key() {
        let out = sanitize_api_error("{\"error\":\"api_key=raw-secret-123 rejected\"}");
        assert!(!out.contains("raw-secret-123"));
        assert!(out.contains("api_key=[REDACTED]"));
    }

    #[test]
    fn redacts_jwt_shaped_tokens() {
        let out = sanitize_api_error("token eyJhbGciOiJIUzI1Ni.payload expired");
        assert!(!out.contains("eyJhbGciOiJIUzI1Ni"));
        assert!(out.contains("[REDACTED]"));
    }

    #[test]
    fn bare_marker_is_left_alone() {
        let out = sanitize_api_error("send the api_key= parameter");
        assert!(out.contains("api_key="));
    }

    #[test]
    fn truncates_long_bodies() {
        let body = "x".repeat(1000);
        assert_eq!(sanitize_api_error(&body).chars().count(), 200);
    }

    #[test]
    fn clean_input_passes_through() {
        assert_eq!(sanitize_api_error("model not found"), "model not found");
    }
}
