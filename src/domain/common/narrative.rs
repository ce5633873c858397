//! Section narrative blocks
//!
//! A [`StrucDocText`] is both what a caller supplies as a custom narrative
//! and what a narrative generator produces; the generator renders either one
//! into the section's `<text>` element.

use crate::core::validation::Presence;
use serde::{Deserialize, Serialize};

/// Narrative content of one section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrucDocText {
    pub blocks: Vec<NarrativeBlock>,
}

impl StrucDocText {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            blocks: vec![NarrativeBlock::Paragraph { text: text.into() }],
        }
    }

    pub fn table(table: NarrativeTable) -> Self {
        Self {
            blocks: vec![NarrativeBlock::Table(table)],
        }
    }

    pub fn push(&mut self, block: NarrativeBlock) {
        self.blocks.push(block);
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Presence for StrucDocText {
    fn is_present(&self) -> bool {
        !self.blocks.is_empty()
    }
}

/// One block of narrative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum NarrativeBlock {
    Paragraph { text: String },
    List { items: Vec<String> },
    Table(NarrativeTable),
}

/// A captioned table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeTable {
    pub caption: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl NarrativeTable {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            caption: None,
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn push_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_builder() {
        let mut table = NarrativeTable::new(["Substance", "Manifestation"]).with_caption("Reactions");
        table.push_row(["Penicillin", "Rash"]);
        let text = StrucDocText::table(table);
        assert!(text.is_present());
        match &text.blocks[0] {
            NarrativeBlock::Table(t) => {
                assert_eq!(t.headers.len(), 2);
                assert_eq!(t.rows[0][1], "Rash");
            }
            other => panic!("unexpected block {other:?}"),
        }
    }

    #[test]
    fn test_block_serde_tag() {
        let json = serde_json::to_value(StrucDocText::paragraph("None known")).unwrap();
        assert_eq!(json["blocks"][0]["block"], "paragraph");
        assert!(!StrucDocText::default().is_present());
    }
}
