//! Color-code translation for display strings.
//!
//! Configuration strings use `&` as a shorthand marker for color and format
//! codes. Display consumers expect the internal section-sign marker instead,
//! with 6-digit hex colors expanded into the verbose per-nibble encoding.
//! Translation is a single left-to-right scan with one character of
//! lookahead (eight for hex runs); it is pure and total.

/// Internal marker character display formats use for escape sequences.
pub const FORMAT_MARKER: char = '\u{00A7}';

/// Returns true for the single-character color and format codes.
const fn is_format_code(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), '0'..='9' | 'a'..='f' | 'k'..='o' | 'r')
}

/// Translates `&`-shorthand markup into internal escape sequences.
///
/// - `&` followed by a recognized code emits the marker plus the lowercased
///   code.
/// - `&#RRGGBB` (exactly six hex digits) emits `marker x` followed by each
///   digit individually prefixed with the marker.
/// - Any other `&` sequence, including a trailing `&`, passes through
///   literally; scanning resumes at the next character so `&&a` still
///   translates the second pair.
#[must_use]
pub fn translate_color_codes(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '&' {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        match chars.get(i + 1) {
            Some('#') => {
                if let Some(window) = chars.get(i + 2..i + 8) {
                    if window.iter().all(char::is_ascii_hexdigit) {
                        out.push(FORMAT_MARKER);
                        out.push('x');
                        for &digit in window {
                            out.push(FORMAT_MARKER);
                            out.push(digit);
                        }
                        i += 8;
                        continue;
                    }
                }
                out.push('&');
                i += 1;
            }
            Some(&code) if is_format_code(code) => {
                out.push(FORMAT_MARKER);
                out.push(code.to_ascii_lowercase());
                i += 2;
            }
            _ => {
                // Unrecognized or trailing marker: literal, re-scan follower.
                out.push('&');
                i += 1;
            }
        }
    }

    out
}
