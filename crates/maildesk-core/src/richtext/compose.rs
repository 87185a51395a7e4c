//! Composer markup to raw content.
//!
//! One line per block. Line prefixes pick the block type:
//! `# `, `## `, `### ` headings, `- ` bullets, `1. ` numbered items,
//! `> ` quotes, and lines between two `` ``` `` fences are code. List items
//! nest one level per two spaces of indentation.
//!
//! Inline markers: `**bold**`, `*italic*`, `__underline__`, `~~strike~~`,
//! `` `code` ``. A marker without a closing partner stays literal.

use std::collections::HashSet;

use rand::Rng;
use serde_json::Map;

use super::{BlockKind, InlineStyle, InlineStyleRange, MAX_DEPTH, RawBlock, RawContent};

const KEY_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const KEY_LEN: usize = 5;
const FENCE: &str = "```";

/// Longer markers first so `**` is not read as two `*`.
const MARKERS: [(&str, InlineStyle); 5] = [
    ("**", InlineStyle::Bold),
    ("__", InlineStyle::Underline),
    ("~~", InlineStyle::Strikethrough),
    ("`", InlineStyle::Code),
    ("*", InlineStyle::Italic),
];

/// Converts composer markup into raw content.
///
/// Empty input yields a single empty paragraph, like an untouched editor.
#[must_use]
pub fn from_markup(markup: &str) -> RawContent {
    let mut keys = KeyGen::default();
    let mut blocks = Vec::new();
    let mut in_fence = false;

    for line in markup.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.trim_end() == FENCE {
            in_fence = !in_fence;
            continue;
        }

        let mut inline = InlineBuilder::default();
        let (kind, depth) = if in_fence {
            inline.push_str(line);
            (BlockKind::Code, 0)
        } else {
            let (kind, depth, body) = classify(line);
            inline.parse(body);
            (kind, depth)
        };

        blocks.push(RawBlock {
            key: keys.next_key(),
            text: inline.text,
            block_type: kind.as_str().to_string(),
            depth,
            inline_style_ranges: inline.ranges,
            entity_ranges: Vec::new(),
            data: Map::new(),
        });
    }

    RawContent {
        blocks,
        entity_map: Map::new(),
    }
}

fn classify(line: &str) -> (BlockKind, u32, &str) {
    for (prefix, kind) in [
        ("### ", BlockKind::HeadingThree),
        ("## ", BlockKind::HeadingTwo),
        ("# ", BlockKind::HeadingOne),
        ("> ", BlockKind::Quote),
    ] {
        if let Some(body) = line.strip_prefix(prefix) {
            return (kind, 0, body);
        }
    }

    let trimmed = line.trim_start_matches(' ');
    let indent = u32::try_from(line.len() - trimmed.len()).unwrap_or(u32::MAX);
    let depth = (indent / 2).min(MAX_DEPTH);

    if let Some(body) = trimmed.strip_prefix("- ") {
        return (BlockKind::BulletItem, depth, body);
    }

    let digits = trimmed.len() - trimmed.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0
        && let Some(body) = trimmed[digits..].strip_prefix(". ")
    {
        return (BlockKind::NumberedItem, depth, body);
    }

    (BlockKind::Paragraph, 0, line)
}

/// Accumulates block text and style ranges in UTF-16 units.
#[derive(Default)]
struct InlineBuilder {
    text: String,
    units: usize,
    ranges: Vec<InlineStyleRange>,
}

impl InlineBuilder {
    fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
        self.units += s.encode_utf16().count();
    }

    fn parse(&mut self, src: &str) {
        let mut rest = src;
        while let Some(ch) = rest.chars().next() {
            if let Some((style, inner, after)) = split_styled(rest) {
                let start = self.units;
                if style == InlineStyle::Code {
                    self.push_str(inner);
                } else {
                    self.parse(inner);
                }
                self.ranges.push(InlineStyleRange {
                    offset: start,
                    length: self.units - start,
                    style: style.as_str().to_string(),
                });
                rest = after;
            } else {
                let (literal, after) = rest.split_at(ch.len_utf8());
                self.push_str(literal);
                rest = after;
            }
        }
    }
}

/// Splits `src` into `(style, inner, after)` when it opens with a marker
/// that is closed later with non-empty content in between.
fn split_styled(src: &str) -> Option<(InlineStyle, &str, &str)> {
    MARKERS.iter().find_map(|&(marker, style)| {
        let body = src.strip_prefix(marker)?;
        let end = find_closing(body, marker)?;
        Some((style, &body[..end], &body[end + marker.len()..]))
    })
}

fn find_closing(body: &str, marker: &str) -> Option<usize> {
    body.match_indices(marker).map(|(i, _)| i).find(|&i| {
        if i == 0 {
            return false;
        }
        // A lone `*` must not be half of a `**`.
        if marker == "*" {
            let before = body[..i].ends_with('*');
            let after = body[i + 1..].starts_with('*');
            return !before && !after;
        }
        true
    })
}

/// Block keys unique within one document.
#[derive(Default)]
struct KeyGen {
    used: HashSet<String>,
}

impl KeyGen {
    fn next_key(&mut self) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let key: String = (0..KEY_LEN)
                .map(|_| char::from(KEY_ALPHABET[rng.gen_range(0..KEY_ALPHABET.len())]))
                .collect();
            if self.used.insert(key.clone()) {
                return key;
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn styles(block: &RawBlock) -> Vec<(usize, usize, &str)> {
        let mut ranges: Vec<_> = block
            .inline_style_ranges
            .iter()
            .map(|r| (r.offset, r.length, r.style.as_str()))
            .collect();
        ranges.sort_unstable();
        ranges
    }

    #[test]
    fn test_empty_markup_is_one_empty_paragraph() {
        let content = from_markup("");
        assert_eq!(content.blocks.len(), 1);
        assert_eq!(content.blocks[0].text, "");
        assert_eq!(content.blocks[0].block_type, "unstyled");
        assert_eq!(content.blocks[0].key.len(), KEY_LEN);
    }

    #[test]
    fn test_block_prefixes() {
        let content = from_markup("# Title\n## Sub\n### Small\n- one\n  - nested\n2. two\n> quoted\nplain");
        let kinds: Vec<_> = content.blocks.iter().map(RawBlock::kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::HeadingOne,
                BlockKind::HeadingTwo,
                BlockKind::HeadingThree,
                BlockKind::BulletItem,
                BlockKind::BulletItem,
                BlockKind::NumberedItem,
                BlockKind::Quote,
                BlockKind::Paragraph,
            ]
        );
        assert_eq!(content.blocks[0].text, "Title");
        assert_eq!(content.blocks[4].text, "nested");
        assert_eq!(content.blocks[4].depth, 1);
        assert_eq!(content.blocks[5].text, "two");
    }

    #[test]
    fn test_code_fence() {
        let content = from_markup("before\n```\nlet x = **1**;\n```\nafter");
        assert_eq!(content.blocks.len(), 3);
        assert_eq!(content.blocks[1].kind(), BlockKind::Code);
        assert_eq!(content.blocks[1].text, "let x = **1**;");
        assert!(content.blocks[1].inline_style_ranges.is_empty());
    }

    #[test]
    fn test_inline_styles() {
        let content = from_markup("a **b** *c* __d__ ~~e~~ `f`");
        let block = &content.blocks[0];
        assert_eq!(block.text, "a b c d e f");
        assert_eq!(
            styles(block),
            vec![
                (2, 1, "BOLD"),
                (4, 1, "ITALIC"),
                (6, 1, "UNDERLINE"),
                (8, 1, "STRIKETHROUGH"),
                (10, 1, "CODE"),
            ]
        );
    }

    #[test]
    fn test_nested_styles() {
        let content = from_markup("*it **bold** it*");
        let block = &content.blocks[0];
        assert_eq!(block.text, "it bold it");
        assert_eq!(styles(block), vec![(0, 10, "ITALIC"), (3, 4, "BOLD")]);
    }

    #[test]
    fn test_unmatched_markers_stay_literal() {
        let content = from_markup("2 * 3 = 6 and **open");
        assert_eq!(content.blocks[0].text, "2 * 3 = 6 and **open");
        assert!(content.blocks[0].inline_style_ranges.is_empty());
    }

    #[test]
    fn test_offsets_count_utf16_units() {
        let content = from_markup("😀 **hé**");
        let block = &content.blocks[0];
        assert_eq!(block.text, "😀 hé");
        assert_eq!(styles(block), vec![(3, 2, "BOLD")]);
    }

    #[test]
    fn test_keys_are_unique() {
        let markup = vec!["line"; 200].join("\n");
        let content = from_markup(&markup);
        let keys: HashSet<_> = content.blocks.iter().map(|b| b.key.clone()).collect();
        assert_eq!(keys.len(), 200);
    }

    #[test]
    fn test_output_parses_back() {
        let content = from_markup("# Hi\n**there**");
        let json = content.to_json().unwrap();
        assert_eq!(RawContent::parse(&json).unwrap(), content);
    }

    proptest! {
        #[test]
        fn ranges_stay_inside_text(markup in "[a-z *_~`#>\\-\n😀]{0,60}") {
            let content = from_markup(&markup);
            for block in &content.blocks {
                let units = block.text.encode_utf16().count();
                for range in &block.inline_style_ranges {
                    prop_assert!(range.length > 0);
                    prop_assert!(range.offset + range.length <= units);
                }
            }
        }
    }
}
