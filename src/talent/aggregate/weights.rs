//! Evidence-presence weight tables

use serde::{Deserialize, Serialize};

use crate::talent::types::EvidenceKind;

/// Share of the repository score reserved for the structural bonus
pub const STRUCTURE_WEIGHT: f64 = 0.15;

/// Per-kind weights used for one repository
///
/// Present-kind weights sum to at most 0.85.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct WeightTable {
    pub code: f64,
    pub markup: f64,
    pub stylesheet: f64,
    pub structure: f64,
}

impl WeightTable {
    const fn new(code: f64, markup: f64, stylesheet: f64) -> Self {
        Self {
            code,
            markup,
            stylesheet,
            structure: STRUCTURE_WEIGHT,
        }
    }

    /// Reported when no content evidence exists and nothing was blended
    pub const EMPTY: WeightTable = WeightTable {
        code: 0.0,
        markup: 0.0,
        stylesheet: 0.0,
        structure: 0.0,
    };

    #[must_use]
    pub fn weight(&self, kind: EvidenceKind) -> f64 {
        match kind {
            EvidenceKind::Code => self.code,
            EvidenceKind::Markup => self.markup,
            EvidenceKind::Stylesheet => self.stylesheet,
        }
    }

    /// Sum of the content weights, excluding the structural share
    #[must_use]
    pub fn content_total(&self) -> f64 {
        self.code + self.markup + self.stylesheet
    }
}

/// Which evidence kinds a repository produced, one variant per combination
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvidencePresence {
    All,
    CodeMarkup,
    CodeStylesheet,
    CodeOnly,
    MarkupStylesheet,
    MarkupOnly,
    StylesheetOnly,
    Nothing,
}

impl EvidencePresence {
    #[must_use]
    pub fn from_flags(has_code: bool, has_markup: bool, has_stylesheet: bool) -> Self {
        match (has_code, has_markup, has_stylesheet) {
            (true, true, true) => Self::All,
            (true, true, false) => Self::CodeMarkup,
            (true, false, true) => Self::CodeStylesheet,
            (true, false, false) => Self::CodeOnly,
            (false, true, true) => Self::MarkupStylesheet,
            (false, true, false) => Self::MarkupOnly,
            (false, false, true) => Self::StylesheetOnly,
            (false, false, false) => Self::Nothing,
        }
    }

    /// Weight table for this combination; `None` when there is nothing to blend
    #[must_use]
    pub fn weights(self) -> Option<WeightTable> {
        let table = match self {
            Self::All => WeightTable::new(0.35, 0.25, 0.25),
            Self::CodeMarkup => WeightTable::new(0.5, 0.35, 0.0),
            Self::CodeStylesheet => WeightTable::new(0.5, 0.0, 0.35),
            Self::CodeOnly => WeightTable::new(0.85, 0.0, 0.0),
            Self::MarkupStylesheet => WeightTable::new(0.0, 0.45, 0.4),
            Self::MarkupOnly => WeightTable::new(0.0, 0.85, 0.0),
            Self::StylesheetOnly => WeightTable::new(0.0, 0.0, 0.85),
            Self::Nothing => return None,
        };
        Some(table)
    }

    #[must_use]
    pub fn has(self, kind: EvidenceKind) -> bool {
        self.weights().is_some_and(|w| w.weight(kind) > 0.0)
    }
}
