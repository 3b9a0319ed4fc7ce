//! Heir categories and their static catalog
//!
//! The catalog is a fixed table: which heirs exist, how the input layer
//! groups them, whether more than one can be present, and which gender of
//! deceased they apply to. The engine keys every share by `HeirId`, so an
//! id outside this enumeration cannot reach a calculation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::MeerasError;
use crate::core::types::DeceasedGender;

/// Largest count accepted for a plural category
pub const MAX_PLURAL_COUNT: u32 = 99;

/// Unique heir category identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeirId {
    Husband,
    Wives,
    Sons,
    Daughters,
    Father,
    Mother,
    Grandsons,
    Granddaughters,
    Grandfather,
    PaternalGrandmother,
    MaternalGrandmother,
    FullBrothers,
    FullSisters,
    PaternalBrothers,
    PaternalSisters,
    MaternalBrothers,
    MaternalSisters,
    FullNephews,
    PaternalNephews,
    FullNephewSons,
    PaternalNephewSons,
    FullPaternalUncles,
    PaternalPaternalUncles,
    FullCousins,
    PaternalCousins,
    FullCousinSons,
    PaternalCousinSons,
    FullCousinGrandsons,
    PaternalCousinGrandsons,
}

/// Input grouping of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeirGroup {
    Immediate,
    Descendants,
    Ascendants,
    Siblings,
    Extended,
}

impl HeirGroup {
    /// All groups in display order
    pub const ALL: [HeirGroup; 5] = [
        HeirGroup::Immediate,
        HeirGroup::Descendants,
        HeirGroup::Ascendants,
        HeirGroup::Siblings,
        HeirGroup::Extended,
    ];
}

impl HeirId {
    /// All ids in catalog order
    pub const ALL: [HeirId; 29] = [
        HeirId::Husband,
        HeirId::Wives,
        HeirId::Sons,
        HeirId::Daughters,
        HeirId::Father,
        HeirId::Mother,
        HeirId::Grandsons,
        HeirId::Granddaughters,
        HeirId::Grandfather,
        HeirId::PaternalGrandmother,
        HeirId::MaternalGrandmother,
        HeirId::FullBrothers,
        HeirId::FullSisters,
        HeirId::PaternalBrothers,
        HeirId::PaternalSisters,
        HeirId::MaternalBrothers,
        HeirId::MaternalSisters,
        HeirId::FullNephews,
        HeirId::PaternalNephews,
        HeirId::FullNephewSons,
        HeirId::PaternalNephewSons,
        HeirId::FullPaternalUncles,
        HeirId::PaternalPaternalUncles,
        HeirId::FullCousins,
        HeirId::PaternalCousins,
        HeirId::FullCousinSons,
        HeirId::PaternalCousinSons,
        HeirId::FullCousinGrandsons,
        HeirId::PaternalCousinGrandsons,
    ];

    /// The six sibling categories
    pub const SIBLINGS: [HeirId; 6] = [
        HeirId::FullBrothers,
        HeirId::FullSisters,
        HeirId::PaternalBrothers,
        HeirId::PaternalSisters,
        HeirId::MaternalBrothers,
        HeirId::MaternalSisters,
    ];

    /// Catalog key, as used by the input layer
    pub fn as_str(&self) -> &'static str {
        self.descriptor().id_str
    }

    /// English label used in the calculation trace
    pub fn label(&self) -> &'static str {
        match self {
            HeirId::Husband => "Husband",
            HeirId::Wives => "Wives",
            HeirId::Sons => "Sons",
            HeirId::Daughters => "Daughters",
            HeirId::Father => "Father",
            HeirId::Mother => "Mother",
            HeirId::Grandsons => "Grandsons",
            HeirId::Granddaughters => "Granddaughters",
            HeirId::Grandfather => "Grandfather",
            HeirId::PaternalGrandmother => "Paternal Grandmother",
            HeirId::MaternalGrandmother => "Maternal Grandmother",
            HeirId::FullBrothers => "Full Brothers",
            HeirId::FullSisters => "Full Sisters",
            HeirId::PaternalBrothers => "Paternal Brothers",
            HeirId::PaternalSisters => "Paternal Sisters",
            HeirId::MaternalBrothers => "Maternal Brothers",
            HeirId::MaternalSisters => "Maternal Sisters",
            HeirId::FullNephews => "Full Nephews",
            HeirId::PaternalNephews => "Paternal Nephews",
            HeirId::FullNephewSons => "Full Nephew's Sons",
            HeirId::PaternalNephewSons => "Paternal Nephew's Sons",
            HeirId::FullPaternalUncles => "Full Paternal Uncles",
            HeirId::PaternalPaternalUncles => "Paternal Paternal Uncles",
            HeirId::FullCousins => "Full Cousins",
            HeirId::PaternalCousins => "Paternal Cousins",
            HeirId::FullCousinSons => "Full Cousin's Sons",
            HeirId::PaternalCousinSons => "Paternal Cousin's Sons",
            HeirId::FullCousinGrandsons => "Full Cousin's Grandsons",
            HeirId::PaternalCousinGrandsons => "Paternal Cousin's Grandsons",
        }
    }

    /// Static catalog entry for this id
    pub fn descriptor(&self) -> &'static HeirCategory {
        // HEIR_CATEGORIES is laid out in the same order as the enum
        &HEIR_CATEGORIES[*self as usize]
    }

    pub fn is_plural(&self) -> bool {
        self.descriptor().is_plural
    }

    pub fn group(&self) -> HeirGroup {
        self.descriptor().group
    }

    pub fn is_spouse(&self) -> bool {
        matches!(self, HeirId::Husband | HeirId::Wives)
    }

    /// Largest count the input layer accepts for this category
    pub fn max_count(&self) -> u32 {
        if self.is_plural() {
            MAX_PLURAL_COUNT
        } else {
            1
        }
    }

    /// Whether this category can inherit from a deceased of `gender`
    pub fn applies_to(&self, gender: DeceasedGender) -> bool {
        self.descriptor()
            .gender_restriction
            .map_or(true, |restricted| restricted == gender)
    }
}

impl fmt::Display for HeirId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeirId {
    type Err = MeerasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HEIR_CATEGORIES
            .iter()
            .find(|c| c.id_str == s)
            .map(|c| c.id)
            .ok_or_else(|| MeerasError::UnknownHeir(s.to_string()))
    }
}

/// Static descriptor of an heir category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeirCategory {
    pub id: HeirId,
    #[serde(skip)]
    pub id_str: &'static str,
    /// Key of the display name in the presentation layer's string table
    pub name_key: &'static str,
    /// Key of the description in the presentation layer's string table
    pub desc_key: &'static str,
    pub is_plural: bool,
    pub group: HeirGroup,
    /// Only offered when the deceased has this gender
    pub gender_restriction: Option<DeceasedGender>,
}

impl HeirCategory {
    /// Every catalog entry in display order
    pub fn all() -> &'static [HeirCategory] {
        &HEIR_CATEGORIES
    }

    /// Entries belonging to one input group
    pub fn for_group(group: HeirGroup) -> impl Iterator<Item = &'static HeirCategory> {
        HEIR_CATEGORIES.iter().filter(move |c| c.group == group)
    }

    /// Entries a deceased of `gender` can leave an estate to
    pub fn eligible_for(gender: DeceasedGender) -> impl Iterator<Item = &'static HeirCategory> {
        HEIR_CATEGORIES.iter().filter(move |c| c.id.applies_to(gender))
    }
}

const fn entry(
    id: HeirId,
    id_str: &'static str,
    name_key: &'static str,
    desc_key: &'static str,
    is_plural: bool,
    group: HeirGroup,
    gender_restriction: Option<DeceasedGender>,
) -> HeirCategory {
    HeirCategory {
        id,
        id_str,
        name_key,
        desc_key,
        is_plural,
        group,
        gender_restriction,
    }
}

use HeirGroup::{Ascendants, Descendants, Extended, Immediate, Siblings};

static HEIR_CATEGORIES: [HeirCategory; 29] = [
    entry(HeirId::Husband, "husband", "name_husband", "desc_husband", false, Immediate, Some(DeceasedGender::Female)),
    entry(HeirId::Wives, "wives", "name_wives", "desc_wives", true, Immediate, Some(DeceasedGender::Male)),
    entry(HeirId::Sons, "sons", "name_sons", "desc_sons", true, Immediate, None),
    entry(HeirId::Daughters, "daughters", "name_daughters", "desc_daughters", true, Immediate, None),
    entry(HeirId::Father, "father", "name_father", "desc_father", false, Immediate, None),
    entry(HeirId::Mother, "mother", "name_mother", "desc_mother", false, Immediate, None),
    entry(HeirId::Grandsons, "grandsons", "name_grandsons", "desc_grandsons", true, Descendants, None),
    entry(HeirId::Granddaughters, "granddaughters", "name_granddaughters", "desc_granddaughters", true, Descendants, None),
    entry(HeirId::Grandfather, "grandfather", "name_grandfather", "desc_grandfather", false, Ascendants, None),
    entry(HeirId::PaternalGrandmother, "paternalGrandmother", "name_paternalGrandmother", "desc_paternalGrandmother", false, Ascendants, None),
    entry(HeirId::MaternalGrandmother, "maternalGrandmother", "name_maternalGrandmother", "desc_maternalGrandmother", false, Ascendants, None),
    entry(HeirId::FullBrothers, "fullBrothers", "name_fullBrothers", "desc_fullBrothers", true, Siblings, None),
    entry(HeirId::FullSisters, "fullSisters", "name_fullSisters", "desc_fullSisters", true, Siblings, None),
    entry(HeirId::PaternalBrothers, "paternalBrothers", "name_paternalBrothers", "desc_paternalBrothers", true, Siblings, None),
    entry(HeirId::PaternalSisters, "paternalSisters", "name_paternalSisters", "desc_paternalSisters", true, Siblings, None),
    entry(HeirId::MaternalBrothers, "maternalBrothers", "name_maternalBrothers", "desc_maternalBrothers", true, Siblings, None),
    entry(HeirId::MaternalSisters, "maternalSisters", "name_maternalSisters", "desc_maternalSisters", true, Siblings, None),
    entry(HeirId::FullNephews, "fullNephews", "name_fullNephews", "desc_fullNephews", true, Extended, None),
    entry(HeirId::PaternalNephews, "paternalNephews", "name_paternalNephews", "desc_paternalNephews", true, Extended, None),
    entry(HeirId::FullNephewSons, "fullNephewSons", "name_fullNephewSons", "desc_fullNephewSons", true, Extended, None),
    entry(HeirId::PaternalNephewSons, "paternalNephewSons", "name_paternalNephewSons", "desc_paternalNephewSons", true, Extended, None),
    entry(HeirId::FullPaternalUncles, "fullPaternalUncles", "name_fullPaternalUncles", "desc_fullPaternalUncles", true, Extended, None),
    entry(HeirId::PaternalPaternalUncles, "paternalPaternalUncles", "name_paternalPaternalUncles", "desc_paternalPaternalUncles", true, Extended, None),
    entry(HeirId::FullCousins, "fullCousins", "name_fullCousins", "desc_fullCousins", true, Extended, None),
    entry(HeirId::PaternalCousins, "paternalCousins", "name_paternalCousins", "desc_paternalCousins", true, Extended, None),
    entry(HeirId::FullCousinSons, "fullCousinSons", "name_fullCousinSons", "desc_fullCousinSons", true, Extended, None),
    entry(HeirId::PaternalCousinSons, "paternalCousinSons", "name_paternalCousinSons", "desc_paternalCousinSons", true, Extended, None),
    entry(HeirId::FullCousinGrandsons, "fullCousinGrandsons", "name_fullCousinGrandsons", "desc_fullCousinGrandsons", true, Extended, None),
    entry(HeirId::PaternalCousinGrandsons, "paternalCousinGrandsons", "name_paternalCousinGrandsons", "desc_paternalCousinGrandsons", true, Extended, None),
];
