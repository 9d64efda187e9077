//! Author rows parsed from the author form group.

use crate::server::model::form::FormData;

/// Natural key of a person, shared by authors and contributor persons
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonKey {
    pub familyname: String,
    pub givenname: String,
    pub orcid: Option<String>,
}

impl PersonKey {
    pub fn new(familyname: &str, givenname: &str, orcid: &str) -> Self {
        Self {
            familyname: familyname.trim().to_string(),
            givenname: givenname.trim().to_string(),
            orcid: non_empty(orcid),
        }
    }
}

/// Natural key of an institution
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstitutionKey {
    pub name: String,
}

impl InstitutionKey {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }
}

/// An author is either a person or an institution, never both
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorEntity {
    Person(PersonKey),
    Institution(InstitutionKey),
}

/// One author row with the affiliation text submitted alongside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRow {
    pub entity: AuthorEntity,
    pub affiliation: String,
    pub ror_ids: String,
}

/// The author group of a submission
///
/// Person rows without both a family and a given name are dropped while parsing, so a row
/// carrying only an ORCID never reaches persistence. Institution rows without a name are
/// dropped the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorForm {
    pub persons: Vec<AuthorRow>,
    pub institutions: Vec<AuthorRow>,
}

impl AuthorForm {
    pub fn from_form(form: &FormData) -> Self {
        let persons = (0..form.row_count("familynames"))
            .filter_map(|i| {
                let familyname = form.text_at("familynames", i);
                let givenname = form.text_at("givennames", i);
                if familyname.is_empty() || givenname.is_empty() {
                    return None;
                }

                Some(AuthorRow {
                    entity: AuthorEntity::Person(PersonKey::new(
                        &familyname,
                        &givenname,
                        &form.text_at("orcids", i),
                    )),
                    affiliation: form.text_at("personAffiliation", i),
                    ror_ids: form.text_at("authorPersonRorIds", i),
                })
            })
            .collect();

        let institutions = (0..form.row_count("authorinstitutionName"))
            .filter_map(|i| {
                let name = form.text_at("authorinstitutionName", i);
                if name.is_empty() {
                    return None;
                }

                Some(AuthorRow {
                    entity: AuthorEntity::Institution(InstitutionKey::new(&name)),
                    affiliation: form.text_at("institutionAffiliation", i),
                    ror_ids: form.text_at("authorInstitutionRorIds", i),
                })
            })
            .collect();

        Self {
            persons,
            institutions,
        }
    }

    /// True when at least one named person or institution was submitted
    pub fn is_valid(&self) -> bool {
        !self.persons.is_empty() || !self.institutions.is_empty()
    }

    /// Person rows first, then institution rows
    pub fn rows(&self) -> impl Iterator<Item = &AuthorRow> {
        self.persons.iter().chain(self.institutions.iter())
    }
}

pub(crate) fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn drops_person_rows_without_full_name() {
        let form = FormData::from_json(json!({
            "familynames": ["Curie", "", "Noether"],
            "givennames": ["Marie", "Ada", ""],
            "orcids": ["", "0000-0002-1825-0097", ""],
            "personAffiliation": ["Sorbonne", "", ""],
            "authorPersonRorIds": ["", "", ""],
        }))
        .unwrap();

        let authors = AuthorForm::from_form(&form);

        assert_eq!(authors.persons.len(), 1);
        assert_eq!(
            authors.persons[0].entity,
            AuthorEntity::Person(PersonKey {
                familyname: "Curie".to_string(),
                givenname: "Marie".to_string(),
                orcid: None,
            })
        );
        assert_eq!(authors.persons[0].affiliation, "Sorbonne");
    }

    #[test]
    fn institution_only_submission_is_valid() {
        let form = FormData::from_json(json!({
            "authorinstitutionName": ["GFZ Potsdam"],
        }))
        .unwrap();

        let authors = AuthorForm::from_form(&form);

        assert!(authors.is_valid());
        assert_eq!(authors.rows().count(), 1);
    }

    #[test]
    fn empty_submission_is_invalid() {
        let form = FormData::from_json(json!({
            "familynames": [""],
            "givennames": ["Ada"],
            "authorinstitutionName": ["  "],
        }))
        .unwrap();

        assert!(!AuthorForm::from_form(&form).is_valid());
    }
}
