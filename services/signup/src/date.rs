//! Birth date conversion between the form format and the API format
//!
//! Users type dates as `DD/MM/YYYY`; the registration API expects
//! `YYYY-MM-DD`. Any non-digit separator is accepted in place of `/`, as
//! are packed `DDMMYYYY` digits. Day and month may be written with one digit, and a
//! two-digit year is expanded the usual way (`69`..`99` -> 19xx,
//! `00`..`68` -> 20xx).

use chrono::NaiveDate;
use thiserror::Error;

/// Format sent to the registration API
pub const OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// Placeholder produced by [`reformat_birth_date`] for unparseable input
pub const INVALID_DATE: &str = "Invalid date";

const TWO_DIGIT_YEAR_PIVOT: i32 = 68;

/// Birth date could not be read as `DD/MM/YYYY`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Date is empty")]
    Empty,

    #[error("Date '{0}' does not match DD/MM/YYYY")]
    Malformed(String),

    #[error("Date '{0}' is not a calendar date")]
    OutOfRange(String),
}

fn number(part: &str, max_digits: usize) -> Option<u32> {
    if part.is_empty() || part.len() > max_digits || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Split the input into day, month and year digit groups
///
/// Any run of non-digits separates groups. A single packed group of six or
/// eight digits is read as `DDMMYY` / `DDMMYYYY`.
fn date_parts(input: &str) -> Option<(&str, &str, &str)> {
    let groups: Vec<&str> = input
        .split(|c: char| !c.is_ascii_digit())
        .filter(|group| !group.is_empty())
        .collect();

    match groups.as_slice() {
        [day, month, year] => Some((*day, *month, *year)),
        [packed] if packed.len() == 6 || packed.len() == 8 => {
            let packed: &str = *packed;
            Some((&packed[..2], &packed[2..4], &packed[4..]))
        }
        _ => None,
    }
}

/// Parse a `DD/MM/YYYY` birth date
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, DateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DateError::Empty);
    }

    let malformed = || DateError::Malformed(trimmed.to_string());

    let (day, month, year_part) = date_parts(trimmed).ok_or_else(malformed)?;

    let day = number(day, 2).ok_or_else(malformed)?;
    let month = number(month, 2).ok_or_else(malformed)?;
    let mut year = number(year_part, 4).ok_or_else(malformed)? as i32;

    if year_part.len() == 2 {
        year += if year > TWO_DIGIT_YEAR_PIVOT { 1900 } else { 2000 };
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DateError::OutOfRange(trimmed.to_string()))
}

/// Rewrite a `DD/MM/YYYY` birth date as `YYYY-MM-DD`
///
/// Never fails: input that cannot be parsed yields [`INVALID_DATE`].
pub fn reformat_birth_date(input: &str) -> String {
    match parse_birth_date(input) {
        Ok(date) => date.format(OUTPUT_FORMAT).to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reformat_birth_date() {
        assert_eq!(reformat_birth_date("15/03/1990"), "1990-03-15");
        assert_eq!(reformat_birth_date(" 1/3/1990 "), "1990-03-01");
        assert_eq!(reformat_birth_date("29/02/2000"), "2000-02-29");
    }

    #[test]
    fn test_other_separators_and_packed_digits() {
        assert_eq!(reformat_birth_date("15-03-1990"), "1990-03-15");
        assert_eq!(reformat_birth_date("15.03.1990"), "1990-03-15");
        assert_eq!(reformat_birth_date("15 / 3 / 1990"), "1990-03-15");
        assert_eq!(reformat_birth_date("15031990"), "1990-03-15");
        assert_eq!(reformat_birth_date("150390"), "1990-03-15");
        assert!(parse_birth_date("15-03-1990").is_ok());
    }

    #[test]
    fn test_two_digit_years() {
        assert_eq!(reformat_birth_date("15/03/90"), "1990-03-15");
        assert_eq!(reformat_birth_date("15/03/05"), "2005-03-15");
        assert_eq!(reformat_birth_date("15/03/68"), "2068-03-15");
        assert_eq!(reformat_birth_date("15/03/69"), "1969-03-15");
    }

    #[test]
    fn test_malformed_input_yields_placeholder() {
        let inputs = [
            "not-a-date",
            "",
            "15/03",
            "15/03/1990/1",
            "aa/bb/cccc",
            "1990-03-15",
            "1503199",
        ];
        for input in inputs {
            assert_eq!(reformat_birth_date(input), INVALID_DATE, "input: {:?}", input);
        }
    }

    #[test]
    fn test_impossible_dates() {
        assert_eq!(
            parse_birth_date("31/02/1990"),
            Err(DateError::OutOfRange("31/02/1990".to_string()))
        );
        assert_eq!(
            parse_birth_date("01/13/1990"),
            Err(DateError::OutOfRange("01/13/1990".to_string()))
        );
        assert_eq!(reformat_birth_date("29/02/1999"), INVALID_DATE);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_birth_date("   "), Err(DateError::Empty));
        assert_eq!(
            parse_birth_date("not-a-date"),
            Err(DateError::Malformed("not-a-date".to_string()))
        );
        assert_eq!(
            parse_birth_date("15/03/1990"),
            Ok(NaiveDate::from_ymd_opt(1990, 3, 15).unwrap())
        );
    }
}
