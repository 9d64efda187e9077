//! Structural dependency checks for form group rows.
//!
//! Each check runs before a row touches the database. A failure marks the row, and with it the
//! group, as unsuccessful without raising.

use chrono::{NaiveDate, NaiveTime};

use crate::server::{
    error::validation::ValidationError,
    model::{
        affiliation::AffiliationInput,
        contributor::{ContributorInstitutionRow, ContributorPersonRow},
        coverage::{Coverage, CoverageRow},
        funding_reference::FundingReferenceRow,
        resource::DATE_FORMAT,
    },
};

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Contributor persons need a full name and at least one role; a ROR id needs affiliation text
pub fn check_contributor_person(
    row_index: usize,
    row: &ContributorPersonRow,
) -> Result<(), ValidationError> {
    let fail = |reason: &str| dependency("contributor person", row_index, reason);

    if row.familyname.is_empty() || row.givenname.is_empty() {
        return Err(fail("family name and given name are required"));
    }
    if row.roles.is_empty() {
        return Err(fail("at least one role is required"));
    }
    if AffiliationInput::parse(&row.affiliation, &row.ror_ids).has_identifier_without_name() {
        return Err(fail("a ROR id requires an affiliation"));
    }

    Ok(())
}

/// Contributor institutions need a name and at least one role; a ROR id needs affiliation text
pub fn check_contributor_institution(
    row_index: usize,
    row: &ContributorInstitutionRow,
) -> Result<(), ValidationError> {
    let fail = |reason: &str| dependency("contributor institution", row_index, reason);

    if row.name.is_empty() {
        return Err(fail("institution name is required"));
    }
    if row.roles.is_empty() {
        return Err(fail("at least one role is required"));
    }
    if AffiliationInput::parse(&row.affiliation, &row.ror_ids).has_identifier_without_name() {
        return Err(fail("a ROR id requires an affiliation"));
    }

    Ok(())
}

/// Funder id, grant number, grant name and award URI all require a funder name
pub fn check_funding_reference(
    row_index: usize,
    row: &FundingReferenceRow,
) -> Result<(), ValidationError> {
    if row.funder.is_empty() {
        return Err(dependency(
            "funding reference",
            row_index,
            "funder name is required",
        ));
    }

    Ok(())
}

/// Checks ranges, pairings and ordering of a coverage row and returns its typed form.
///
/// - Latitudes lie within [-90, 90], longitudes within [-180, 180]
/// - `latitudeMax` and `longitudeMax` are given together and `latitudeMax` is not below
///   `latitudeMin`. A `longitudeMax` below `longitudeMin` describes a box crossing the
///   antimeridian.
/// - Dates parse as `YYYY-MM-DD` and the end is not before the start
/// - Times are optional and parse as `HH:MM[:SS]`
/// - Description and timezone are not empty
pub fn check_coverage(row_index: usize, row: &CoverageRow) -> Result<Coverage, ValidationError> {
    let fail = |reason: String| ValidationError::Dependency {
        group: "spatial temporal coverage",
        row: row_index,
        reason,
    };

    let latitude_min = coordinate("latitudeMin", &row.latitude_min, 90.0).map_err(&fail)?;
    let longitude_min = coordinate("longitudeMin", &row.longitude_min, 180.0).map_err(&fail)?;

    let (latitude_max, longitude_max) = match (
        row.latitude_max.is_empty(),
        row.longitude_max.is_empty(),
    ) {
        (true, true) => (None, None),
        (false, false) => {
            let latitude_max =
                coordinate("latitudeMax", &row.latitude_max, 90.0).map_err(&fail)?;
            let longitude_max =
                coordinate("longitudeMax", &row.longitude_max, 180.0).map_err(&fail)?;
            if latitude_max < latitude_min {
                return Err(fail("latitudeMax is below latitudeMin".to_string()));
            }
            (Some(latitude_max), Some(longitude_max))
        }
        _ => {
            return Err(fail(
                "latitudeMax and longitudeMax must be given together".to_string(),
            ))
        }
    };

    if row.description.is_empty() {
        return Err(fail("description is required".to_string()));
    }
    if row.timezone.is_empty() {
        return Err(fail("timezone is required".to_string()));
    }

    let date_start = date("dateStart", &row.date_start).map_err(&fail)?;
    let date_end = date("dateEnd", &row.date_end).map_err(&fail)?;
    if date_end < date_start {
        return Err(fail("dateEnd is before dateStart".to_string()));
    }

    Ok(Coverage {
        latitude_min,
        latitude_max,
        longitude_min,
        longitude_max,
        description: row.description.clone(),
        date_start,
        date_end,
        time_start: time("timeStart", &row.time_start).map_err(&fail)?,
        time_end: time("timeEnd", &row.time_end).map_err(&fail)?,
        timezone: row.timezone.clone(),
    })
}

fn dependency(group: &'static str, row: usize, reason: &str) -> ValidationError {
    ValidationError::Dependency {
        group,
        row,
        reason: reason.to_string(),
    }
}

fn coordinate(field: &str, raw: &str, bound: f64) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("{field} {raw:?} is not a number"))?;
    if !(-bound..=bound).contains(&value) {
        return Err(format!("{field} {value} is outside [-{bound}, {bound}]"));
    }
    Ok(value)
}

fn date(field: &str, raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| format!("{field} {raw:?} is not a YYYY-MM-DD date"))
}

fn time(field: &str, raw: &str) -> Result<Option<NaiveTime>, String> {
    if raw.is_empty() {
        return Ok(None);
    }

    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
        .map(Some)
        .ok_or_else(|| format!("{field} {raw:?} is not a HH:MM[:SS] time"))
}

#[cfg(test)]
mod tests;
