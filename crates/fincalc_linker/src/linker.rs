use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::tokenizer::{tokenize, Token};
use fincalc_core::{Error, InternalLink, Result};

/// How many occurrences of each keyword get linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkMode {
    /// Link only the first occurrence of each keyword (the site
    /// convention: one internal link per keyword per page).
    #[default]
    FirstMatch,
    /// Link every occurrence.
    AllMatches,
}

struct CompiledLink {
    keyword: String,
    url: String,
    pattern: Regex,
}

/// The internal link table, compiled for matching. Keywords are
/// ordered longest first so a phrase ("SIP Calculator") is never
/// pre-empted by one of its substrings ("SIP").
pub struct LinkTable {
    entries: Vec<CompiledLink>,
}

impl LinkTable {
    pub fn new(links: Vec<InternalLink>) -> Result<Self> {
        let mut links = links;
        links.sort_by(|a, b| b.keyword.chars().count().cmp(&a.keyword.chars().count()));

        let mut entries = Vec::with_capacity(links.len());
        for link in links {
            if link.keyword.trim().is_empty() {
                return Err(Error::Linker(format!(
                    "empty keyword for url {}",
                    link.url
                )));
            }
            let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(&link.keyword)))
                .case_insensitive(true)
                .build()
                .map_err(|e| Error::Linker(format!("keyword {:?}: {}", link.keyword, e)))?;
            entries.push(CompiledLink {
                keyword: link.keyword,
                url: link.url,
                pattern,
            });
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Working segments of a document under rewriting. `Raw` text may
/// still be linked; `Locked` holds tags, text already inside an
/// anchor, and anchors inserted by earlier keywords.
enum Seg {
    Raw(String),
    Locked(String),
}

pub struct AutoLinker {
    table: LinkTable,
    mode: LinkMode,
}

impl AutoLinker {
    pub fn new(table: LinkTable) -> Self {
        Self {
            table,
            mode: LinkMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: LinkMode) -> Self {
        self.mode = mode;
        self
    }

    /// Rewrite keyword occurrences in `html` into anchors. Markup and
    /// existing anchor text are never touched; unmatched keywords are
    /// skipped. The visible text keeps the casing found in the input.
    pub fn rewrite(&self, html: &str) -> String {
        self.rewrite_counting(html).0
    }

    /// Like [`rewrite`](Self::rewrite), also reporting how many links
    /// were inserted.
    pub fn rewrite_counting(&self, html: &str) -> (String, usize) {
        let mut segs: Vec<Seg> = tokenize(html)
            .into_iter()
            .map(|token| match token {
                Token::Tag(raw) => Seg::Locked(raw.to_string()),
                Token::Text { raw, in_anchor: true } => Seg::Locked(raw.to_string()),
                Token::Text { raw, in_anchor: false } => Seg::Raw(raw.to_string()),
            })
            .collect();

        let mut inserted = 0;
        for entry in &self.table.entries {
            inserted += self.apply(&mut segs, entry);
        }
        debug!("inserted {} internal links", inserted);

        let out = segs
            .iter()
            .map(|seg| match seg {
                Seg::Raw(s) | Seg::Locked(s) => s.as_str(),
            })
            .collect();
        (out, inserted)
    }

    fn apply(&self, segs: &mut Vec<Seg>, entry: &CompiledLink) -> usize {
        let mut inserted = 0;
        let mut i = 0;
        while i < segs.len() {
            let text = match &segs[i] {
                Seg::Raw(s) => s.clone(),
                Seg::Locked(_) => {
                    i += 1;
                    continue;
                }
            };

            let m = match entry.pattern.find(&text) {
                Some(m) => m,
                None => {
                    i += 1;
                    continue;
                }
            };

            let anchor = format!(
                r#"<a href="{}">{}</a>"#,
                entry.url,
                &text[m.start()..m.end()]
            );
            let before = &text[..m.start()];
            let after = &text[m.end()..];

            let mut replacement = Vec::with_capacity(3);
            if !before.is_empty() {
                replacement.push(Seg::Raw(before.to_string()));
            }
            replacement.push(Seg::Locked(anchor));
            if !after.is_empty() {
                replacement.push(Seg::Raw(after.to_string()));
            }
            let advance = replacement.len();
            segs.splice(i..=i, replacement);
            inserted += 1;

            if self.mode == LinkMode::FirstMatch {
                return inserted;
            }
            // continue in the remainder after the inserted anchor
            i += advance.saturating_sub(1).max(1);
        }
        if inserted == 0 {
            debug!("keyword {:?} not found, skipped", entry.keyword);
        }
        inserted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fincalc_core::InternalLink;
    use scraper::{Html, Selector};

    fn linker(pairs: &[(&str, &str)]) -> AutoLinker {
        let links = pairs
            .iter()
            .map(|(k, u)| InternalLink::new(*k, *u))
            .collect();
        AutoLinker::new(LinkTable::new(links).unwrap())
    }

    #[test]
    fn links_first_whole_word_occurrence() {
        let l = linker(&[("EMI", "/emi-calculator")]);
        let out = l.rewrite("Your EMI depends on tenure. A lower EMI helps.");
        assert_eq!(
            out,
            r#"Your <a href="/emi-calculator">EMI</a> depends on tenure. A lower EMI helps."#
        );
    }

    #[test]
    fn longer_phrase_wins_over_substring_keyword() {
        let l = linker(&[("SIP", "/sip"), ("SIP Calculator", "/sip-calculator")]);
        let out = l.rewrite("Use SIP Calculator now");
        assert_eq!(
            out,
            r#"Use <a href="/sip-calculator">SIP Calculator</a> now"#
        );
    }

    #[test]
    fn matching_is_case_insensitive_and_preserves_casing() {
        let l = linker(&[("SIP Calculator", "/sip-calculator")]);
        let out = l.rewrite("try the sip calculator today");
        assert_eq!(
            out,
            r#"try the <a href="/sip-calculator">sip calculator</a> today"#
        );
    }

    #[test]
    fn whole_word_only() {
        let l = linker(&[("SIP", "/sip")]);
        assert_eq!(l.rewrite("Office GOSSIP column"), "Office GOSSIP column");
    }

    #[test]
    fn attributes_are_never_rewritten() {
        let l = linker(&[("SIP", "/sip")]);
        let input = r#"<img alt="SIP benefits" src="/x.png">"#;
        assert_eq!(l.rewrite(input), input);
    }

    #[test]
    fn existing_anchor_text_is_left_alone() {
        let l = linker(&[("EMI", "/emi")]);
        let input = r#"<a href="/loans">EMI guide</a> without links"#;
        assert_eq!(l.rewrite(input), input);
    }

    #[test]
    fn rewriting_twice_is_a_no_op() {
        let l = linker(&[("SIP", "/sip"), ("EMI", "/emi")]);
        let once = l.rewrite("<p>Compare SIP and EMI options. SIP wins.</p>");
        let twice = l.rewrite(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn no_nested_anchors_in_output() {
        let l = linker(&[("SIP", "/sip"), ("SIP Calculator", "/sip-calculator")]);
        let once = l.rewrite("<p>SIP Calculator and SIP basics</p>");
        let twice = l.rewrite(&once);
        let doc = Html::parse_fragment(&twice);
        let nested = Selector::parse("a a").unwrap();
        assert_eq!(doc.select(&nested).count(), 0);
        let anchors = Selector::parse("a").unwrap();
        assert_eq!(doc.select(&anchors).count(), 2);
    }

    #[test]
    fn all_matches_mode_links_every_occurrence() {
        let l = linker(&[("FD", "/fd")]).with_mode(LinkMode::AllMatches);
        let (out, count) = l.rewrite_counting("FD rates, FD tenure, FD safety");
        assert_eq!(count, 3);
        assert_eq!(out.matches("<a href=\"/fd\">FD</a>").count(), 3);
    }

    #[test]
    fn unmatched_keywords_are_skipped() {
        let l = linker(&[("gratuity", "/gratuity")]);
        let (out, count) = l.rewrite_counting("nothing relevant here");
        assert_eq!(out, "nothing relevant here");
        assert_eq!(count, 0);
    }

    #[test]
    fn malformed_html_passes_through() {
        let l = linker(&[("EMI", "/emi")]);
        let out = l.rewrite("rates < 9% for EMI <b>offers");
        assert_eq!(out, r#"rates < 9% for <a href="/emi">EMI</a> <b>offers"#);
    }

    #[test]
    fn comment_text_is_never_linked() {
        let l = linker(&[("SIP", "/sip")]);
        let out = l.rewrite("<!-- SIP > draft note -->SIP basics");
        assert_eq!(
            out,
            r#"<!-- SIP > draft note --><a href="/sip">SIP</a> basics"#
        );
    }

    #[test]
    fn empty_keyword_is_rejected() {
        let err = LinkTable::new(vec![InternalLink::new("  ", "/x")]);
        assert!(err.is_err());
    }
}
