//! Built-in duration presets, loaded from the embedded `presets.csv`.

use log::info;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::num::NonZeroU32;

use crate::PresetCatalogError;

const BUILTIN_CSV: &str = include_str!("presets.csv");

// The embedded catalog is covered by tests; a parse failure here is a build defect.
static BUILTIN: Lazy<Vec<DurationPreset>> =
    Lazy::new(|| read_presets_from_csv_string(BUILTIN_CSV).unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetCategory {
    Eggs,
    Tea,
}

impl PresetCategory {
    pub const ALL: [PresetCategory; 2] = [PresetCategory::Eggs, PresetCategory::Tea];

    pub fn heading(&self) -> &'static str {
        match self {
            PresetCategory::Eggs => "Eggs",
            PresetCategory::Tea => "Tea",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DurationPreset {
    pub category: PresetCategory,
    pub label: String,
    pub minutes: NonZeroU32,
}

/// Parse a preset catalog with a `category,label,minutes` header row.
pub fn read_presets_from_csv_string(
    csv_content: &str,
) -> Result<Vec<DurationPreset>, PresetCatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());

    let presets = reader
        .deserialize()
        .collect::<Result<Vec<DurationPreset>, csv::Error>>()?;

    if presets.is_empty() {
        return Err(PresetCatalogError::Empty);
    }
    info!("Loaded {} duration presets", presets.len());
    Ok(presets)
}

/// Presets of one category, in catalog order.
pub fn list_presets(category: PresetCategory) -> Vec<DurationPreset> {
    BUILTIN
        .iter()
        .filter(|p| p.category == category)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes_of(category: PresetCategory) -> Vec<u32> {
        list_presets(category)
            .iter()
            .map(|p| p.minutes.get())
            .collect()
    }

    #[test]
    fn test_builtin_catalog() {
        assert_eq!(minutes_of(PresetCategory::Eggs), vec![3, 8, 10, 13]);
        assert_eq!(minutes_of(PresetCategory::Tea), vec![2, 3, 3, 5, 10]);

        let eggs = list_presets(PresetCategory::Eggs);
        assert_eq!(eggs[0].label, "\u{1f95a} Runny yolk (3 min)");
        assert!(list_presets(PresetCategory::Tea)
            .iter()
            .all(|p| p.category == PresetCategory::Tea));
    }

    #[test]
    fn test_rejects_zero_minutes() {
        let csv = "category,label,minutes\neggs,Raw,0\n";
        assert!(matches!(
            read_presets_from_csv_string(csv),
            Err(PresetCatalogError::Csv(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_category() {
        let csv = "category,label,minutes\ncoffee,Espresso,1\n";
        assert!(read_presets_from_csv_string(csv).is_err());
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let csv = "category,label,minutes\n";
        assert!(matches!(
            read_presets_from_csv_string(csv),
            Err(PresetCatalogError::Empty)
        ));
    }
}
