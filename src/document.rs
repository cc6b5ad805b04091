/*!
 * Document handling and position normalization.
 *
 * A document is an ordered sequence of opaque text units (sentences,
 * paragraphs, subtitle lines). The core never inspects unit contents; it only
 * tracks where each unit sits relative to the whole document.
 */

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::AlignError;

/// An ordered sequence of text units to be aligned against another document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The units in document order
    units: Vec<String>,
}

impl Document {
    /// Create a document from a vector of units
    pub fn new(units: Vec<String>) -> Self {
        Self { units }
    }

    /// Create a document from anything iterable over string-likes
    pub fn from_units<I, S>(units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            units: units.into_iter().map(|unit| unit.into()).collect(),
        }
    }

    /// Number of units in the document
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the document has no units
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The units in document order
    pub fn units(&self) -> &[String] {
        &self.units
    }

    /// Pair every unit with its relative position in the document.
    ///
    /// The unit at index `i` of a document with `n` units gets position
    /// `i / n`, so positions grow strictly with the index and stay within
    /// `[0, 1)`. An empty document has no defined positions and fails with
    /// [`AlignError::EmptyDocument`].
    pub fn normalized_items(&self) -> Result<Vec<NormalizedItem>, AlignError> {
        if self.units.is_empty() {
            return Err(AlignError::EmptyDocument);
        }

        let len = self.units.len() as f64;
        Ok(self
            .units
            .iter()
            .enumerate()
            .map(|(idx, unit)| NormalizedItem::new(unit.clone(), idx as f64 / len))
            .collect())
    }
}

impl From<Vec<String>> for Document {
    fn from(units: Vec<String>) -> Self {
        Self::new(units)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Document with {} units", self.units.len())
    }
}

/// One unit together with its relative position within its document
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedItem {
    /// The unit text
    pub unit: String,

    /// Relative position in `[0, 1)`
    pub position: f64,
}

impl NormalizedItem {
    /// Create a normalized item
    pub fn new(unit: String, position: f64) -> Self {
        Self { unit, position }
    }
}
