//! Chat markup stripping.
//!
//! Host chat messages arrive decorated with inline markup introduced by
//! the `|` escape character: color codes, hyperlinks, textures, and
//! `||` self-escapes. Stripping runs in four phases, in order:
//!
//! 1. color codes (`|c` + 8 hex digits) and reset markers (`|r`)
//! 2. hyperlinks (`|H<data>|h<visible>|h` -> visible text)
//! 3. textures (`|T<data>|t` -> removed)
//! 4. doubled escapes (`||` -> `|`)
//!
//! The first three phases copy `||` pairs through untouched so an
//! escaped literal escape is never read as markup; the collapse must
//! therefore run last. Malformed or truncated sequences pass through
//! unchanged. Every phase is total: no input can fail.

/// Strip all chat markup from `text`, returning plain text.
///
/// Total over its input: empty in, empty out; markup-free input is
/// returned unchanged.
pub fn strip_markup(text: &str) -> String {
    // Fast path: the overwhelming majority of messages carry no markup.
    if memchr::memchr(b'|', text.as_bytes()).is_none() {
        return text.to_owned();
    }
    collapse_escapes(&strip_textures(&strip_links(&strip_colors(text))))
}

/// Remove `|c` + 8 hex digit color openers and `|r` reset markers.
fn strip_colors(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while let Some(off) = memchr::memchr(b'|', &bytes[i..]) {
        let at = i + off;
        out.push_str(&s[i..at]);
        let rest = &bytes[at + 1..];
        match rest.first() {
            Some(b'|') => {
                out.push_str("||");
                i = at + 2;
            }
            Some(b'c') if rest.len() >= 9 && rest[1..9].iter().all(u8::is_ascii_hexdigit) => {
                i = at + 10;
            }
            Some(b'r') => {
                i = at + 2;
            }
            _ => {
                out.push('|');
                i = at + 1;
            }
        }
    }
    out.push_str(&s[i..]);
    out
}

/// Replace `|H<data>|h<visible>|h` sequences with the visible text.
///
/// Surrounding `[` `]` brackets on the visible text are dropped; the
/// visible text may be empty. A `|H` with no closing pieces is left
/// in place.
fn strip_links(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while let Some(off) = memchr::memchr(b'|', &bytes[i..]) {
        let at = i + off;
        out.push_str(&s[i..at]);
        match bytes.get(at + 1) {
            Some(b'|') => {
                out.push_str("||");
                i = at + 2;
            }
            Some(b'H') => match link_visible(&s[at..]) {
                Some((visible, consumed)) => {
                    out.push_str(visible);
                    i = at + consumed;
                }
                None => {
                    out.push('|');
                    i = at + 1;
                }
            },
            _ => {
                out.push('|');
                i = at + 1;
            }
        }
    }
    out.push_str(&s[i..]);
    out
}

/// Parse one hyperlink at the head of `s` (which starts with `|H`).
///
/// Returns the visible text (sans surrounding brackets, when both are
/// present) and the total bytes consumed, or `None` when the closing
/// `|h` markers are missing.
fn link_visible(s: &str) -> Option<(&str, usize)> {
    let data_end = s.find("|h")?;
    let vis_start = data_end + 2;
    let vis_len = s[vis_start..].find("|h")?;
    let visible = &s[vis_start..vis_start + vis_len];
    let consumed = vis_start + vis_len + 2;
    let visible = visible
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(visible);
    Some((visible, consumed))
}

/// Remove `|T<data>|t` texture sequences entirely.
fn strip_textures(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while let Some(off) = memchr::memchr(b'|', &bytes[i..]) {
        let at = i + off;
        out.push_str(&s[i..at]);
        match bytes.get(at + 1) {
            Some(b'|') => {
                out.push_str("||");
                i = at + 2;
            }
            Some(b'T') => match s[at + 2..].find("|t") {
                Some(end) => {
                    i = at + 2 + end + 2;
                }
                None => {
                    out.push('|');
                    i = at + 1;
                }
            },
            _ => {
                out.push('|');
                i = at + 1;
            }
        }
    }
    out.push_str(&s[i..]);
    out
}

/// Collapse every doubled escape into a single literal escape.
fn collapse_escapes(s: &str) -> String {
    s.replace("||", "|")
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod tests;
