//! Contributor rows parsed from the contributor person and institution form groups.
//!
//! Rows are kept as submitted text so the dependency checks can see exactly what was filled in.
//! The natural keys are derived only once a row has passed those checks.

use serde_json::Value;

use crate::server::model::{
    author::{InstitutionKey, PersonKey},
    form::FormData,
    role::RoleNames,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributorPersonRow {
    pub familyname: String,
    pub givenname: String,
    pub orcid: String,
    pub affiliation: String,
    pub ror_ids: String,
    pub roles: RoleNames,
}

impl ContributorPersonRow {
    pub fn parse_all(form: &FormData) -> Vec<Self> {
        (0..form.row_count("cbPersonLastname"))
            .map(|i| Self {
                familyname: form.text_at("cbPersonLastname", i),
                givenname: form.text_at("cbPersonFirstname", i),
                orcid: form.text_at("cbORCID", i),
                affiliation: form.text_at("cbAffiliation", i),
                ror_ids: form.text_at("cbpRorIds", i),
                roles: RoleNames::parse(form.value_at("cbPersonRoles", i).unwrap_or(&Value::Null)),
            })
            .collect()
    }

    /// No name, no role and no affiliation: the row was left intentionally blank
    pub fn is_blank(&self) -> bool {
        self.familyname.is_empty()
            && self.givenname.is_empty()
            && self.orcid.is_empty()
            && self.affiliation.is_empty()
            && self.ror_ids.is_empty()
            && self.roles.is_empty()
    }

    pub fn key(&self) -> PersonKey {
        PersonKey::new(&self.familyname, &self.givenname, &self.orcid)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributorInstitutionRow {
    pub name: String,
    pub affiliation: String,
    pub ror_ids: String,
    pub roles: RoleNames,
}

impl ContributorInstitutionRow {
    pub fn parse_all(form: &FormData) -> Vec<Self> {
        (0..form.row_count("cbOrganisationName"))
            .map(|i| Self {
                name: form.text_at("cbOrganisationName", i),
                affiliation: form.text_at("OrganisationAffiliation", i),
                ror_ids: form.text_at("hiddenOrganisationRorId", i),
                roles: RoleNames::parse(
                    form.value_at("cbOrganisationRoles", i)
                        .unwrap_or(&Value::Null),
                ),
            })
            .collect()
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.affiliation.is_empty()
            && self.ror_ids.is_empty()
            && self.roles.is_empty()
    }

    pub fn key(&self) -> InstitutionKey {
        InstitutionKey::new(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_person_rows_with_roles() {
        let form = FormData::from_json(json!({
            "cbPersonLastname": ["Gauss", ""],
            "cbPersonFirstname": ["Carl", ""],
            "cbORCID": ["", ""],
            "cbAffiliation": ["", ""],
            "cbpRorIds": ["", ""],
            "cbPersonRoles": [r#"[{"value":"Researcher"}]"#, ""],
        }))
        .unwrap();

        let rows = ContributorPersonRow::parse_all(&form);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].roles.iter().collect::<Vec<_>>(), vec!["Researcher"]);
        assert!(!rows[0].is_blank());
        assert!(rows[1].is_blank());
        assert_eq!(rows[0].key().orcid, None);
    }

    #[test]
    fn institution_row_with_only_roles_is_not_blank() {
        let form = FormData::from_json(json!({
            "cbOrganisationName": [""],
            "cbOrganisationRoles": [["Sponsor"]],
        }))
        .unwrap();

        let rows = ContributorInstitutionRow::parse_all(&form);

        assert!(!rows[0].is_blank());
    }
}
