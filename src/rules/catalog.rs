//! Numbered rule texts shown alongside calculations
//!
//! A read-only bilingual reference table. The engine never consults it for
//! its decisions; trace steps only carry rule numbers that resolve here.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::core::error::MeerasError;

/// Number of entries in the rule-text catalog
pub const RULE_COUNT: usize = 44;

/// Display language of the rule texts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ur,
}

impl FromStr for Language {
    type Err = MeerasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "ur" | "urdu" => Ok(Language::Ur),
            _ => Err(MeerasError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Heading a rule is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleCategory {
    PrescribedShares,
    Blocking,
    Taseeb,
    SpecialCases,
    FarRelatives,
    OtherPrinciples,
    GeneralPrinciples,
}

impl RuleCategory {
    pub fn name(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (RuleCategory::PrescribedShares, Language::En) => "Prescribed Shares",
            (RuleCategory::PrescribedShares, Language::Ur) => "مقررہ حصے",
            (RuleCategory::Blocking, Language::En) => "Blocking Rules",
            (RuleCategory::Blocking, Language::Ur) => "محرومی کے قوانین",
            (RuleCategory::Taseeb, Language::En) => "Ta'seeb (Residue)",
            (RuleCategory::Taseeb, Language::Ur) => "تعصیب",
            (RuleCategory::SpecialCases, Language::En) => "Special Cases",
            (RuleCategory::SpecialCases, Language::Ur) => "خصوصی حالات",
            (RuleCategory::FarRelatives, Language::En) => "Far Relatives",
            (RuleCategory::FarRelatives, Language::Ur) => "دور کے رشتہ دار",
            (RuleCategory::OtherPrinciples, Language::En) => "Other Principles",
            (RuleCategory::OtherPrinciples, Language::Ur) => "دیگر اصول",
            (RuleCategory::GeneralPrinciples, Language::En) => "General Principles",
            (RuleCategory::GeneralPrinciples, Language::Ur) => "عمومی اصول",
        }
    }
}

/// One numbered rule with its English and Urdu text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleText {
    pub id: u8,
    pub category: RuleCategory,
    pub title_en: &'static str,
    pub title_ur: &'static str,
    pub content_en: &'static str,
    pub content_ur: &'static str,
}

impl RuleText {
    /// Every rule in catalog order
    pub fn all() -> &'static [RuleText] {
        &RULE_TEXTS
    }

    /// Look up a rule by its number
    pub fn by_id(id: u8) -> Option<&'static RuleText> {
        RULE_TEXTS.iter().find(|r| r.id == id)
    }

    pub fn title(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.title_en,
            Language::Ur => self.title_ur,
        }
    }

    pub fn content(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.content_en,
            Language::Ur => self.content_ur,
        }
    }

    /// Rules whose title or body in `lang` contains `query` (case-insensitive),
    /// or whose number contains it. An empty query matches everything.
    pub fn search(query: &str, lang: Language) -> Vec<&'static RuleText> {
        let needle = query.trim().to_lowercase();
        RULE_TEXTS
            .iter()
            .filter(|r| {
                needle.is_empty()
                    || r.title(lang).to_lowercase().contains(&needle)
                    || r.content(lang).to_lowercase().contains(&needle)
                    || r.id.to_string().contains(&needle)
            })
            .collect()
    }

    /// Group rules by category, categories in order of first appearance
    pub fn grouped<'a>(rules: &[&'a RuleText]) -> Vec<(RuleCategory, Vec<&'a RuleText>)> {
        let mut groups: Vec<(RuleCategory, Vec<&'a RuleText>)> = Vec::new();
        for &rule in rules {
            match groups.iter_mut().find(|(cat, _)| *cat == rule.category) {
                Some((_, members)) => members.push(rule),
                None => groups.push((rule.category, vec![rule])),
            }
        }
        groups
    }
}

impl fmt::Display for RuleText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.id, self.title_en)
    }
}

const fn rule(
    id: u8,
    category: RuleCategory,
    title_en: &'static str,
    title_ur: &'static str,
    content_en: &'static str,
    content_ur: &'static str,
) -> RuleText {
    RuleText {
        id,
        category,
        title_en,
        title_ur,
        content_en,
        content_ur,
    }
}

use RuleCategory::{
    Blocking, FarRelatives, GeneralPrinciples, OtherPrinciples, PrescribedShares, SpecialCases,
    Taseeb,
};

#[rustfmt::skip]
static RULE_TEXTS: [RuleText; RULE_COUNT] = [
    rule(1, PrescribedShares, "Husband [AnNisa 4:12]", "شوہر", "a. Gets 1/2 (No offspring)\nb. Gets 1/4 (Has offspring)", "الف۔ 1/2 (اولاد نہ ہو)\nب۔ 1/4 (اولاد ہو)"),
    rule(2, PrescribedShares, "Wife [AnNisa 4:12]", "بیوی", "a. Gets 1/4 (No offspring)\nb. Gets 1/8 (Has offspring)", "الف۔ 1/4 (اولاد نہ ہو)\nب۔ 1/8 (اولاد ہو)"),
    rule(3, PrescribedShares, "Daughter", "بیٹی", "a. Gets 1/2 (1 daughter, no son)\nb. Gets 2/3 (Multiple, no son)", "الف۔ 1/2 (ایک بیٹی)\nب۔ 2/3 (زیادہ بیٹیاں)"),
    rule(4, PrescribedShares, "Grand Daughter", "پوتی", "a. 1/2, b. 2/3, c. 1/6 (if 1 daughter present)", "الف۔ 1/2، ب۔ 2/3، ج۔ 1/6"),
    rule(5, PrescribedShares, "Father", "والد", "a. Gets 1/6 (Has offspring)", "الف۔ 1/6 (اولاد ہو)"),
    rule(6, PrescribedShares, "Mother", "والدہ", "a. 1/3 (No offspring/siblings)\nb. 1/6 (Offspring/multiple siblings)", "الف۔ 1/3، ب۔ 1/6"),
    rule(7, PrescribedShares, "Paternal Grand Father", "دادا", "a. 1/6 (No father, has offspring)", "الف۔ 1/6 (والد نہ ہو، اولاد ہو)"),
    rule(8, PrescribedShares, "Paternal Grand Mother", "دادی", "a. 1/6 (No father/mother/maternal grandma)\nb. 1/12 (With maternal grandma)", "الف۔ 1/6، ب۔ 1/12"),
    rule(9, PrescribedShares, "Maternal Grand Mother", "نانی", "a. 1/6 (No mother)\nb. 1/12 (With paternal grandma)", "الف۔ 1/6، ب۔ 1/12"),
    rule(10, PrescribedShares, "Full Sister", "سگی بہن", "a. 1/2 (1 sister), b. 2/3 (Multiple)", "الف۔ 1/2، ب۔ 2/3"),
    rule(11, PrescribedShares, "Paternal Sister", "علاتی بہن", "a. 1/2, b. 2/3, c. 1/6 (with 1 full sister)", "الف۔ 1/2، ب۔ 2/3، ج۔ 1/6"),
    rule(12, PrescribedShares, "Maternal Sibling", "اخیافی بہن بھائی", "a. 1/6 (Single), b. 1/3 (Multiple)", "الف۔ 1/6، ب۔ 1/3"),
    rule(13, Blocking, "Blocking Hierarchy", "محرومی کی ترتیب", "Son, Grandson, Father, Mother etc. block lower relatives.", "بیٹا، پوتا، والد اور والدہ دوسروں کو محروم کرتے ہیں۔"),
    rule(14, Taseeb, "Tasib ranking", "عصبہ کی ترتیب", "1) Son, 2) Grandson, 3) Father, 4) Full Brother...", "1) بیٹا، 2) پوتا، 3) والد، 4) سگا بھائی..."),
    rule(15, Taseeb, "2:1 Ratio", "2:1 تناسب", "Male gets twice as much as female in same class.", "مرد کو عورت سے دوگنا ملے گا۔"),
    rule(16, Taseeb, "Drop from Ta'seeb", "تعصیب سے اخراج", "Prescribed heir drops if other aaseebs exist (excl. father).", "مقررہ وارث دوسرے عصبہ کی موجودگی میں خارج ہو جاتا ہے۔"),
    rule(17, Taseeb, "Never cutoff", "ناقابل محرومی", "Father/Grandfather never cutoff by prescribed shares.", "والد/دادا کبھی محروم نہیں ہوتے۔"),
    rule(18, SpecialCases, "'Awal", "عول", "Proportional reduction if total > 1.", "مجموعہ 1 سے زیادہ ہونے پر کمی۔"),
    rule(19, SpecialCases, "Radd", "رد", "Proportional increase if total < 1 (excl. spouse).", "مجموعہ 1 سے کم ہونے پر اضافہ۔"),
    rule(20, SpecialCases, "Double Status", "دوہری حیثیت", "Treat as separate individuals for each qualification.", "دوہری حیثیت کے وارث کو دونوں حصوں کی ادائیگی۔"),
    rule(21, SpecialCases, "Umar's Case", "عامریہ", "Parents share remainder 2:1 after spouse.", "میاں/بیوی کے بعد والدین بقیہ کا 2:1 پائیں گے۔"),
    rule(22, SpecialCases, "Full vs Maternal", "سگا بمقابلہ اخیافی", "Full brother >= maternal sibling share.", "سگے بھائی کا حصہ اخیافی سے کم نہیں ہو سکتا۔"),
    rule(23, SpecialCases, "Grandfather vs Sibling", "دادا اور بہن بھائی", "Grandfather gets max of 1/6 total, 1/3 residue or equal share.", "دادا اور بہن بھائیوں میں تقسیم کا قاعدہ۔"),
    rule(24, SpecialCases, "Grandfather vs Sister", "دادا اور بہن", "Adjust if sister gets more than grandfather.", "بقیہ میں 1:2 کا تناسب۔"),
    rule(25, FarRelatives, "Replacement link", "متبادل واسطہ", "Far relatives replace the link they are attached to.", "دور کے رشتہ دار اپنے اصل واسطے کی جگہ لیں گے۔"),
    rule(26, FarRelatives, "Spouse residue", "زوج کو بقیہ", "Remaining can go to spouse if no other relatives.", "کوئی رشتہ دار نہ ہو تو زوج کو بقیہ۔"),
    rule(27, OtherPrinciples, "Islamic State", "اسلامی ریاست", "Bait-ul-Mal takes if no heirs survive.", "کوئی وارث نہ ہو تو ترکہ بیت المال کا۔"),
    rule(28, OtherPrinciples, "Female heirs stop", "خواتین کا سلسلہ", "Inheritance stops at females, doesn't move to children (excl. certain cases).", "خواتین پر سلسلہ وارث رک جاتا ہے۔"),
    rule(29, OtherPrinciples, "Grandchildren replace", "پوتوں کا مقام", "Grandchildren replace children if deceased.", "اولاد کی جگہ پوتے پوتیاں لیں گے۔"),
    rule(30, GeneralPrinciples, "2/3 Zone", "2/3 زون", "Specific female relatives share max 2/3.", "دنی، پوتی، بہن کا 2/3 زمرہ۔"),
    rule(31, GeneralPrinciples, "2/3 split", "2/3 کی تقسیم", "2/3 shared between offspring OR siblings only.", "2/3 کی محدودیت۔"),
    rule(32, GeneralPrinciples, "Maternals reduce Mother", "والدہ کا حصہ کم ہونا", "Maternal siblings reduce mother's share to 1/6.", "اخیافی بھائی والدہ کا حصہ کم کرتے ہیں۔"),
    rule(33, GeneralPrinciples, "Maternal ratio 1:1", "اخیافی تناسب", "Maternal siblings share equally (no 2:1).", "اخیافی بھائی بہن برابر حصہ پاتے ہیں۔"),
    rule(34, GeneralPrinciples, "Father blocks all siblings", "والد کا مکمل حجب", "Father blocks full, paternal, and maternal siblings.", "والد تمام بہن بھائیوں کو محروم کرتا ہے۔"),
    rule(35, GeneralPrinciples, "Non-Blockable 6", "چھ لازمی وارث", "Husband, Wife, Father, Mother, Son, Daughter.", "وہ چھ وارث جو کبھی محروم نہیں ہوتے۔"),
    rule(36, GeneralPrinciples, "Spouse Blocking", "زوجین اور حجب", "Spouse neither blocked nor blocks others.", "میاں بیوی کا حجب سے استثنیٰ۔"),
    rule(37, GeneralPrinciples, "Spouse Increase", "زوجین اور رد", "Spouse share normally not increased by Radd.", "زوجین پر رد نہیں ہوتا۔"),
    rule(38, GeneralPrinciples, "Role Promotion", "قائم مقامی", "Grandpa -> Father; Grandma -> Mother; etc.", "قائم مقامی کے اصول۔"),
    rule(39, GeneralPrinciples, "Maternal Grandpa", "نانا", "Maternal grandfather blocked from inheritance.", "نانا وراثت سے محروم ہے۔"),
    rule(40, GeneralPrinciples, "Female Chain", "مادری سلسلہ", "Mother's mother's chain continues indefinitely.", "نانی کا سلسلہ جاری رہتا ہے۔"),
    rule(41, GeneralPrinciples, "Father blocks Grandma", "والد اور دادی", "Father blocks paternal grandmother (Consensus).", "والد دادی کو محروم کرتا ہے۔"),
    rule(42, GeneralPrinciples, "Grandfather vs Siblings", "دادا اور بھائی", "Difference of opinion on grandfather blocking siblings.", "دادا اور بہن بھائیوں میں اختلاف۔"),
    rule(43, GeneralPrinciples, "No Ta'seeb for 7", "عصبہ سے استثنیٰ", "Mother, Grandmothers, Spouses, Maternals don't get Ta'seeb.", "وہ وارث جو عصبہ نہیں بنتے۔"),
    rule(44, Taseeb, "Joint Ta'seeb cases", "مشترکہ تعصیب", "Daughter, Sister, Paternal Sister, Granddaughter.", "مشترکہ تعصیب کی صورتیں۔"),
];
