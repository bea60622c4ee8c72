/// A run of the input document: either a complete tag (including the
/// angle brackets) or the text between tags. Text inside an open
/// anchor is flagged so callers can leave it alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Tag(&'a str),
    Text { raw: &'a str, in_anchor: bool },
}

/// Split HTML into tag and text runs. Malformed input is handled
/// best-effort: a `<` that does not start a tag, or a tag that never
/// closes, is kept as text so nothing is dropped.
pub fn tokenize(html: &str) -> Vec<Token<'_>> {
    let bytes = html.as_bytes();
    let mut tokens = Vec::new();
    let mut anchor_depth = 0usize;
    let mut text_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] == b'<' && starts_tag(&bytes[pos + 1..]) {
            match find_tag_end(bytes, pos) {
                Some(end) => {
                    if text_start < pos {
                        tokens.push(Token::Text {
                            raw: &html[text_start..pos],
                            in_anchor: anchor_depth > 0,
                        });
                    }
                    let tag = &html[pos..=end];
                    if is_anchor_open(tag) {
                        anchor_depth += 1;
                    } else if is_anchor_close(tag) {
                        anchor_depth = anchor_depth.saturating_sub(1);
                    }
                    tokens.push(Token::Tag(tag));
                    pos = end + 1;
                    text_start = pos;
                    continue;
                }
                // unterminated tag: the rest of the input is text
                None => break,
            }
        }
        pos += 1;
    }

    if text_start < html.len() {
        tokens.push(Token::Text {
            raw: &html[text_start..],
            in_anchor: anchor_depth > 0,
        });
    }
    tokens
}

fn starts_tag(rest: &[u8]) -> bool {
    matches!(rest.first(), Some(c) if c.is_ascii_alphabetic() || *c == b'/' || *c == b'!' || *c == b'?')
}

fn find_tag_end(bytes: &[u8], open: usize) -> Option<usize> {
    // comments may contain '>', so they only end at '-->'
    if bytes[open..].starts_with(b"<!--") {
        return bytes[open..]
            .windows(3)
            .position(|w| w == b"-->")
            .map(|i| open + i + 2);
    }
    bytes[open..].iter().position(|&b| b == b'>').map(|i| open + i)
}

fn is_anchor_open(tag: &str) -> bool {
    let inner = tag.trim_start_matches('<');
    let named = inner.len() >= 1
        && inner[..1].eq_ignore_ascii_case("a")
        && matches!(inner.as_bytes().get(1), None | Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') | Some(b'/'));
    named && !tag.ends_with("/>") && !inner.starts_with('/')
}

fn is_anchor_close(tag: &str) -> bool {
    let inner = tag.trim_start_matches('<').trim_end_matches('>').trim();
    inner.eq_ignore_ascii_case("/a")
}
