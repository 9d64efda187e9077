//! Funding reference rows and funder identifier normalization.

use crate::server::model::{author::non_empty, form::FormData};

/// Identifier type recorded for every normalized funder id
pub const FUNDER_ID_TYPE: &str = "Crossref Funder ID";

/// Number of trailing digits kept from a funder identifier
const FUNDER_ID_DIGITS: usize = 10;

/// Funding reference row as submitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FundingReferenceRow {
    pub funder: String,
    pub funder_id: String,
    pub grant_number: String,
    pub grant_name: String,
    pub award_uri: String,
}

impl FundingReferenceRow {
    pub fn parse_all(form: &FormData) -> Vec<Self> {
        (0..form.row_count("funder"))
            .map(|i| Self {
                funder: form.text_at("funder", i),
                funder_id: form.text_at("funderId", i),
                grant_number: form.text_at("grantNummer", i),
                grant_name: form.text_at("grantName", i),
                award_uri: form.text_at("awardURI", i),
            })
            .collect()
    }

    pub fn is_blank(&self) -> bool {
        self.funder.is_empty()
            && self.funder_id.is_empty()
            && self.grant_number.is_empty()
            && self.grant_name.is_empty()
            && self.award_uri.is_empty()
    }

    /// Builds the natural key persisted for this row
    pub fn to_reference(&self) -> FundingReference {
        let funder_id = normalize_funder_id(&self.funder_id);
        let funder_id_type = funder_id.as_ref().map(|_| FUNDER_ID_TYPE.to_string());

        FundingReference {
            funder: self.funder.clone(),
            funder_id,
            funder_id_type,
            grant_number: non_empty(&self.grant_number),
            grant_name: non_empty(&self.grant_name),
            award_uri: non_empty(&self.award_uri),
        }
    }
}

/// Full six-column natural key of a funding reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FundingReference {
    pub funder: String,
    pub funder_id: Option<String>,
    pub funder_id_type: Option<String>,
    pub grant_number: Option<String>,
    pub grant_name: Option<String>,
    pub award_uri: Option<String>,
}

/// Strips every non-digit and keeps the last ten digits, `None` when no digit remains.
///
/// `https://doi.org/10.13039/100000001` becomes `9100000001`.
pub fn normalize_funder_id(raw: &str) -> Option<String> {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    let start = digits.len().saturating_sub(FUNDER_ID_DIGITS);
    Some(digits[start..].iter().collect())
}
