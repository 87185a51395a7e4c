//! Raw content to styled runs.

use super::{BlockKind, InlineStyle, MAX_DEPTH, RawBlock, RawContent, StyleSet};

/// Display-ready document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// Blocks in order.
    pub blocks: Vec<RenderedBlock>,
}

/// One rendered block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    /// Block kind; unknown raw types are paragraphs.
    pub kind: BlockKind,
    /// Nesting level.
    pub depth: u32,
    /// Running number for numbered items.
    pub number: Option<u32>,
    /// Text runs sharing one style set each.
    pub spans: Vec<StyledSpan>,
}

/// A run of text with uniform styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    /// Run text.
    pub text: String,
    /// Styles applied to the whole run.
    pub styles: StyleSet,
}

impl StyledSpan {
    /// Whether `style` applies to this run.
    #[must_use]
    pub const fn has(&self, style: InlineStyle) -> bool {
        self.styles.contains(style)
    }
}

impl RenderedBlock {
    /// Concatenated run text.
    #[must_use]
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// List marker to show before the block, if any.
    #[must_use]
    pub fn marker(&self) -> Option<String> {
        match self.kind {
            BlockKind::BulletItem => Some("•".to_string()),
            BlockKind::NumberedItem => self.number.map(|n| format!("{n}.")),
            _ => None,
        }
    }
}

/// Renders raw content into styled runs.
///
/// Numbered items count up within a run of consecutive numbered items at
/// the same depth; any other block at that depth or shallower restarts the
/// count. Depths past [`MAX_DEPTH`] are clamped. Unknown styles are ignored.
#[must_use]
pub fn render(content: &RawContent) -> Document {
    let mut counters: Vec<u32> = Vec::new();
    let blocks = content
        .blocks
        .iter()
        .map(|block| {
            let kind = block.kind();
            let depth = block.depth.min(MAX_DEPTH);
            let level = usize::try_from(depth).unwrap_or_default();

            let number = if kind == BlockKind::NumberedItem {
                if counters.len() <= level {
                    counters.resize(level + 1, 0);
                }
                counters.truncate(level + 1);
                counters[level] += 1;
                Some(counters[level])
            } else {
                counters.truncate(level);
                None
            };

            RenderedBlock {
                kind,
                depth,
                number,
                spans: spans(block),
            }
        })
        .collect();

    Document { blocks }
}

fn spans(block: &RawBlock) -> Vec<StyledSpan> {
    let ranges: Vec<(usize, usize, InlineStyle)> = block
        .inline_style_ranges
        .iter()
        .filter_map(|r| {
            InlineStyle::from_name(&r.style).map(|s| (r.offset, r.offset.saturating_add(r.length), s))
        })
        .collect();

    let mut spans: Vec<StyledSpan> = Vec::new();
    let mut unit = 0usize;
    for ch in block.text.chars() {
        let styles = ranges
            .iter()
            .filter(|&&(start, end, _)| start <= unit && unit < end)
            .fold(StyleSet::EMPTY, |set, &(_, _, style)| set.with(style));
        unit += ch.len_utf16();

        match spans.last_mut() {
            Some(last) if last.styles == styles => last.text.push(ch),
            _ => spans.push(StyledSpan {
                text: ch.to_string(),
                styles,
            }),
        }
    }
    spans
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::richtext::from_markup;

    #[test]
    fn test_spans_split_on_style_change() {
        let doc = render(&from_markup("plain **bold ~~both~~** end"));
        let spans = &doc.blocks[0].spans;
        let texts: Vec<_> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["plain ", "bold ", "both", " end"]);
        assert!(!spans[0].has(InlineStyle::Bold));
        assert!(spans[1].has(InlineStyle::Bold));
        assert!(spans[2].has(InlineStyle::Bold) && spans[2].has(InlineStyle::Strikethrough));
        assert!(spans[3].styles.is_empty());
    }

    #[test]
    fn test_numbering_restarts() {
        let doc = render(&from_markup("1. a\n1. b\n  1. inner\n1. c\npara\n1. d"));
        let numbers: Vec<_> = doc.blocks.iter().map(|b| b.number).collect();
        assert_eq!(
            numbers,
            vec![Some(1), Some(2), Some(1), Some(3), None, Some(1)]
        );
        assert_eq!(doc.blocks[1].marker().as_deref(), Some("2."));
    }

    #[test]
    fn test_unknown_style_and_type_degrade() {
        let json = r#"{"blocks": [{"key": "k", "text": "hi", "type": "atomic",
            "inlineStyleRanges": [{"offset": 0, "length": 2, "style": "HIGHLIGHT"}]}], "entityMap": {}}"#;
        let doc = render(&RawContent::parse(json).unwrap());
        assert_eq!(doc.blocks[0].kind, BlockKind::Paragraph);
        assert_eq!(doc.blocks[0].spans.len(), 1);
        assert!(doc.blocks[0].spans[0].styles.is_empty());
    }

    #[test]
    fn test_ranges_past_end_are_clamped() {
        let json = r#"{"blocks": [{"key": "k", "text": "ab", "type": "unstyled",
            "inlineStyleRanges": [{"offset": 1, "length": 99, "style": "BOLD"}]}], "entityMap": {}}"#;
        let doc = render(&RawContent::parse(json).unwrap());
        assert_eq!(doc.blocks[0].text(), "ab");
        assert!(doc.blocks[0].spans[1].has(InlineStyle::Bold));
    }

    #[test]
    fn test_utf16_offsets() {
        let doc = render(&from_markup("😀 **x**"));
        let spans = &doc.blocks[0].spans;
        assert_eq!(spans[0].text, "😀 ");
        assert_eq!(spans[1].text, "x");
        assert!(spans[1].has(InlineStyle::Bold));
    }

    #[test]
    fn test_server_depth_is_clamped() {
        let json = r#"{"blocks": [
            {"key": "a", "text": "x", "type": "ordered-list-item", "depth": 4000000000},
            {"key": "b", "text": "y", "type": "ordered-list-item", "depth": 4294967295},
            {"key": "c", "text": "z", "type": "unordered-list-item", "depth": 4000000000}
        ], "entityMap": {}}"#;
        let doc = render(&RawContent::parse(json).unwrap());
        assert!(doc.blocks.iter().all(|b| b.depth == MAX_DEPTH));
        assert_eq!(doc.blocks[0].number, Some(1));
        assert_eq!(doc.blocks[1].number, Some(2));
        assert_eq!(doc.blocks[2].marker().as_deref(), Some("•"));
    }
}
