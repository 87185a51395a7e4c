//! Rich-text email bodies.
//!
//! Bodies travel as the web editor's raw content JSON: a list of blocks,
//! each with its text, block type, nesting depth and inline style ranges,
//! plus an entity map. Offsets and lengths count UTF-16 code units.
//!
//! [`from_markup`] builds raw content from the composer's light markup and
//! [`render`] turns raw content into styled runs for display.

mod compose;
mod render;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use compose::from_markup;
pub use render::{Document, RenderedBlock, StyledSpan, render};

/// Deepest list nesting kept; deeper blocks are shown at this level.
pub const MAX_DEPTH: u32 = 4;

/// Error type for rich-text operations.
#[derive(Debug, thiserror::Error)]
pub enum RichTextError {
    /// Body is not valid raw content JSON.
    #[error("Invalid rich text: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw editor content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawContent {
    /// Blocks in document order.
    pub blocks: Vec<RawBlock>,
    /// Entities referenced by `entityRanges`. Carried through untouched.
    #[serde(rename = "entityMap", default)]
    pub entity_map: Map<String, Value>,
}

/// One paragraph-level block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBlock {
    /// Editor-assigned block key.
    #[serde(default)]
    pub key: String,
    /// Block text without markup.
    #[serde(default)]
    pub text: String,
    /// Block type, e.g. `unstyled` or `header-one`.
    #[serde(rename = "type", default = "unstyled")]
    pub block_type: String,
    /// Nesting level for list items.
    #[serde(default)]
    pub depth: u32,
    /// Inline style ranges over `text`.
    #[serde(rename = "inlineStyleRanges", default)]
    pub inline_style_ranges: Vec<InlineStyleRange>,
    /// Entity ranges over `text`.
    #[serde(rename = "entityRanges", default)]
    pub entity_ranges: Vec<EntityRange>,
    /// Block metadata.
    #[serde(default)]
    pub data: Map<String, Value>,
}

/// A style applied to `length` UTF-16 units starting at `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineStyleRange {
    /// Start, in UTF-16 code units.
    pub offset: usize,
    /// Length, in UTF-16 code units.
    pub length: usize,
    /// Style name, e.g. `BOLD`.
    pub style: String,
}

/// An entity reference over `length` UTF-16 units starting at `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRange {
    /// Start, in UTF-16 code units.
    pub offset: usize,
    /// Length, in UTF-16 code units.
    pub length: usize,
    /// Key into the entity map.
    pub key: Value,
}

fn unstyled() -> String {
    BlockKind::Paragraph.as_str().to_string()
}

/// Block types the client understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Plain paragraph (`unstyled`). Unknown types map here.
    Paragraph,
    /// `header-one`.
    HeadingOne,
    /// `header-two`.
    HeadingTwo,
    /// `header-three`.
    HeadingThree,
    /// `unordered-list-item`.
    BulletItem,
    /// `ordered-list-item`.
    NumberedItem,
    /// `blockquote`.
    Quote,
    /// `code-block`.
    Code,
}

impl BlockKind {
    /// Maps a raw block type, degrading unknown types to a paragraph.
    #[must_use]
    pub fn from_type(block_type: &str) -> Self {
        match block_type {
            "header-one" => Self::HeadingOne,
            "header-two" => Self::HeadingTwo,
            "header-three" => Self::HeadingThree,
            "unordered-list-item" => Self::BulletItem,
            "ordered-list-item" => Self::NumberedItem,
            "blockquote" => Self::Quote,
            "code-block" => Self::Code,
            _ => Self::Paragraph,
        }
    }

    /// Raw block type string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paragraph => "unstyled",
            Self::HeadingOne => "header-one",
            Self::HeadingTwo => "header-two",
            Self::HeadingThree => "header-three",
            Self::BulletItem => "unordered-list-item",
            Self::NumberedItem => "ordered-list-item",
            Self::Quote => "blockquote",
            Self::Code => "code-block",
        }
    }
}

/// Inline styles the client understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineStyle {
    /// `BOLD`.
    Bold,
    /// `ITALIC`.
    Italic,
    /// `UNDERLINE`.
    Underline,
    /// `STRIKETHROUGH`.
    Strikethrough,
    /// `CODE`.
    Code,
}

impl InlineStyle {
    /// Maps a raw style name. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "BOLD" => Some(Self::Bold),
            "ITALIC" => Some(Self::Italic),
            "UNDERLINE" => Some(Self::Underline),
            "STRIKETHROUGH" => Some(Self::Strikethrough),
            "CODE" => Some(Self::Code),
            _ => None,
        }
    }

    /// Raw style name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bold => "BOLD",
            Self::Italic => "ITALIC",
            Self::Underline => "UNDERLINE",
            Self::Strikethrough => "STRIKETHROUGH",
            Self::Code => "CODE",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Bold => 1,
            Self::Italic => 1 << 1,
            Self::Underline => 1 << 2,
            Self::Strikethrough => 1 << 3,
            Self::Code => 1 << 4,
        }
    }
}

/// A set of [`InlineStyle`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleSet(u8);

impl StyleSet {
    /// No styles.
    pub const EMPTY: Self = Self(0);

    /// Returns the set with `style` added.
    #[must_use]
    pub const fn with(self, style: InlineStyle) -> Self {
        Self(self.0 | style.bit())
    }

    /// Whether `style` is in the set.
    #[must_use]
    pub const fn contains(self, style: InlineStyle) -> bool {
        self.0 & style.bit() != 0
    }

    /// Whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl RawContent {
    /// Parses a serialized body.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not raw content.
    pub fn parse(json: &str) -> Result<Self, RichTextError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the content for sending.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, RichTextError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl RawBlock {
    /// Block type as a [`BlockKind`].
    #[must_use]
    pub fn kind(&self) -> BlockKind {
        BlockKind::from_type(&self.block_type)
    }
}
