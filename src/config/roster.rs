use crate::domain::model::Person;
use crate::utils::error::{Result, TourError};
use crate::utils::validation::{validate_non_empty_string, validate_range};
use std::io::Read;
use std::path::Path;

pub const MAX_AGE: u32 = 150;

/// 從 CSV 檔案載入名單，標題列為 `first_name,last_name,age`
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<Person>> {
    let file = std::fs::File::open(path)?;
    read_roster(file)
}

pub fn read_roster<R: Read>(reader: R) -> Result<Vec<Person>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut roster = Vec::new();
    for record in reader.deserialize() {
        let person: Person = record?;
        roster.push(person);
    }

    tracing::debug!("Loaded {} persons from CSV roster", roster.len());
    validate_roster(&roster)?;
    Ok(roster)
}

pub fn validate_roster(roster: &[Person]) -> Result<()> {
    if roster.is_empty() {
        return Err(TourError::ConfigError {
            message: "roster is present but has no entries".to_string(),
        });
    }

    for person in roster {
        validate_non_empty_string("roster.first_name", person.first_name())?;
        validate_non_empty_string("roster.last_name", person.last_name())?;
        validate_range("roster.age", person.age(), 0, MAX_AGE)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_roster_keeps_order() {
        let csv = "first_name,last_name,age\nh7,7,7\na1, 1 ,1\n";
        let roster = read_roster(csv.as_bytes()).unwrap();

        assert_eq!(roster, vec![Person::new("h7", "7", 7), Person::new("a1", "1", 1)]);
    }

    #[test]
    fn test_header_only_roster_rejected() {
        let csv = "first_name,last_name,age\n";
        assert!(matches!(read_roster(csv.as_bytes()), Err(TourError::ConfigError { .. })));
    }

    #[test]
    fn test_malformed_age() {
        let csv = "first_name,last_name,age\nh7,7,seven\n";
        assert!(matches!(read_roster(csv.as_bytes()), Err(TourError::CsvError(_))));
    }

    #[test]
    fn test_invalid_entries_rejected() {
        let csv = "first_name,last_name,age\n,7,7\n";
        assert!(matches!(
            read_roster(csv.as_bytes()),
            Err(TourError::InvalidConfigValueError { .. })
        ));

        let too_old = vec![Person::new("m", "m", 200)];
        assert!(validate_roster(&too_old).is_err());
    }

    #[test]
    fn test_load_roster_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"first_name,last_name,age\nc3,3,3\n")
            .unwrap();

        let roster = load_roster(temp_file.path()).unwrap();
        assert_eq!(roster, vec![Person::new("c3", "3", 3)]);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_roster("/definitely/not/here.csv"),
            Err(TourError::IoError(_))
        ));
    }
}
