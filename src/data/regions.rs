//! Federative units and their macro-region labels.

use crate::config::LabelSet;
use crate::data::columns;
use polars::prelude::*;

/// The 27 state codes accepted by the filter.
pub const STATE_CODES: [&str; 27] = [
    "AC", "AL", "AM", "AP", "BA", "CE", "DF", "ES", "GO", "MA", "MG", "MS", "MT", "PA", "PB", "PE",
    "PI", "PR", "RJ", "RN", "RO", "RR", "RS", "SC", "SE", "SP", "TO",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MacroRegion {
    North,
    Northeast,
    CentralWest,
    Southeast,
    South,
}

impl MacroRegion {
    pub const ALL: [MacroRegion; 5] = [
        MacroRegion::North,
        MacroRegion::Northeast,
        MacroRegion::CentralWest,
        MacroRegion::Southeast,
        MacroRegion::South,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        let region = match code {
            "AC" | "AP" | "AM" | "PA" | "RO" | "RR" | "TO" => MacroRegion::North,
            "AL" | "BA" | "CE" | "MA" | "PB" | "PE" | "PI" | "RN" | "SE" => MacroRegion::Northeast,
            "DF" | "GO" | "MT" | "MS" => MacroRegion::CentralWest,
            "ES" | "MG" | "RJ" | "SP" => MacroRegion::Southeast,
            "PR" | "RS" | "SC" => MacroRegion::South,
            _ => return None,
        };
        Some(region)
    }

    pub fn label(self, set: LabelSet) -> &'static str {
        match (set, self) {
            (LabelSet::English, MacroRegion::North) => "North",
            (LabelSet::English, MacroRegion::Northeast) => "Northeast",
            (LabelSet::English, MacroRegion::CentralWest) => "Central-West",
            (LabelSet::English, MacroRegion::Southeast) => "Southeast",
            (LabelSet::English, MacroRegion::South) => "South",
            (LabelSet::Portuguese, MacroRegion::North) => "Norte",
            (LabelSet::Portuguese, MacroRegion::Northeast) => "Nordeste",
            (LabelSet::Portuguese, MacroRegion::CentralWest) => "Centro-Oeste",
            (LabelSet::Portuguese, MacroRegion::Southeast) => "Sudeste",
            (LabelSet::Portuguese, MacroRegion::South) => "Sul",
        }
    }

    /// Position in the label palette.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Macro-region label of a state code, `None` outside the allow-list.
pub fn region_label(code: &str, set: LabelSet) -> Option<&'static str> {
    MacroRegion::from_code(code).map(|r| r.label(set))
}

/// Palette index for a label of either language.
pub fn label_index(label: &str) -> Option<usize> {
    MacroRegion::ALL.iter().find_map(|r| {
        (r.label(LabelSet::English) == label || r.label(LabelSet::Portuguese) == label)
            .then(|| r.index())
    })
}

/// Two-column lookup frame (code, label) used to join labels onto the data.
pub fn label_frame(set: LabelSet) -> PolarsResult<DataFrame> {
    let labels: Vec<&str> = STATE_CODES
        .iter()
        .filter_map(|code| region_label(code, set))
        .collect();

    df!(
        columns::REGION_CODE => STATE_CODES.to_vec(),
        columns::REGION_LABEL => labels
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_state_has_exactly_one_label() {
        for set in [LabelSet::English, LabelSet::Portuguese] {
            for code in STATE_CODES {
                let first = region_label(code, set);
                assert!(first.is_some(), "{} has no label", code);
                assert_eq!(first, region_label(code, set));
            }
        }
    }

    #[test]
    fn codes_are_unique_and_cover_five_regions() {
        let unique: HashSet<_> = STATE_CODES.iter().collect();
        assert_eq!(unique.len(), 27);

        let labels: HashSet<_> = STATE_CODES
            .iter()
            .filter_map(|c| region_label(c, LabelSet::English))
            .collect();
        assert_eq!(labels.len(), 5);
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(region_label("BR", LabelSet::English), None);
        assert_eq!(region_label("sp", LabelSet::English), None);
        assert_eq!(region_label("", LabelSet::Portuguese), None);
    }

    #[test]
    fn label_languages_agree_on_region() {
        assert_eq!(region_label("DF", LabelSet::English), Some("Central-West"));
        assert_eq!(region_label("DF", LabelSet::Portuguese), Some("Centro-Oeste"));
        assert_eq!(label_index("Centro-Oeste"), label_index("Central-West"));
        assert_eq!(label_index("Atlantis"), None);
    }

    #[test]
    fn label_frame_has_one_row_per_state() {
        let frame = label_frame(LabelSet::Portuguese).unwrap();
        assert_eq!(frame.height(), 27);
        assert_eq!(frame.width(), 2);
    }
}
