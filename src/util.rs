use indexmap::IndexSet;

#[doc(hidden)]
pub fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        let mut owned = value.to_owned();
        owned.make_ascii_lowercase();
        owned
    } else {
        lowercase_unicode_if_needed(value).unwrap_or_else(|| value.to_owned())
    }
}

/// Returns `value` in header-name case: the first letter and every letter
/// following a hyphen upper-cased, everything else lower-cased.
///
/// Values that are not valid HTTP tokens (spaces, separators, non-ASCII) are
/// returned unchanged, so the result is always safe to canonicalize again.
pub fn canonical_header_key(value: &str) -> String {
    if !is_http_token(value) {
        return value.to_owned();
    }

    let mut canonical = String::with_capacity(value.len());
    let mut upper = true;
    for byte in value.bytes() {
        let converted = if upper {
            byte.to_ascii_uppercase()
        } else {
            byte.to_ascii_lowercase()
        };
        canonical.push(char::from(converted));
        upper = byte == b'-';
    }
    canonical
}

/// Splits a comma-separated header-name list such as the value of
/// `Access-Control-Request-Headers`.
///
/// Tokens are trimmed, empty tokens dropped, each survivor canonicalized and
/// duplicates removed while keeping first-seen order.
pub fn parse_header_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| token.trim_matches(|ch: char| ch.is_ascii_whitespace()))
        .filter(|token| !token.is_empty())
        .map(canonical_header_key)
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

/// Applies `transform` to every element, preserving order and length.
pub fn convert<S, F>(values: &[S], transform: F) -> Vec<String>
where
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    values
        .iter()
        .map(|value| transform(value.as_ref()))
        .collect()
}

pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

pub(crate) fn lowercase_unicode_if_needed(value: &str) -> Option<String> {
    for (idx, ch) in value.char_indices() {
        if ch.is_uppercase() {
            let mut lowered = String::with_capacity(value.len());
            lowered.push_str(&value[..idx]);
            lowered.extend(ch.to_lowercase());

            let tail_start = idx + ch.len_utf8();
            for tail_ch in value[tail_start..].chars() {
                if tail_ch.is_uppercase() {
                    lowered.extend(tail_ch.to_lowercase());
                } else {
                    lowered.push(tail_ch);
                }
            }

            return Some(lowered);
        }
    }

    None
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
