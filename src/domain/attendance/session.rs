//! Session entity - one dated meeting of a class and its attendee set.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::foundation::{SessionNumber, ValidationError};

/// One scheduled meeting of a class.
///
/// # Invariants
///
/// - `attendees` never contains the same name twice (exact string match)
/// - `attendees` keeps insertion order for display
/// - attendee names are never blank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    session_number: SessionNumber,

    #[serde(default)]
    date: String,

    #[serde(default, deserialize_with = "deserialize_attendees")]
    attendees: Vec<String>,
}

impl Session {
    /// Creates a session with no attendees.
    pub fn new(session_number: SessionNumber, date: impl Into<String>) -> Self {
        Self {
            session_number,
            date: date.into(),
            attendees: Vec::new(),
        }
    }

    /// Returns the caller-assigned session number.
    pub fn session_number(&self) -> SessionNumber {
        self.session_number
    }

    /// Returns the date label.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns attendee names in check-in order.
    pub fn attendees(&self) -> &[String] {
        &self.attendees
    }

    /// Returns true if `name` is already recorded.
    pub fn has_attendee(&self, name: &str) -> bool {
        self.attendees.iter().any(|a| a == name)
    }

    /// Records `name` as present.
    ///
    /// Returns `Ok(false)` when the name was already recorded; the set is
    /// left untouched in that case.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `name` is empty or whitespace
    pub fn add_attendee(&mut self, name: &str) -> Result<bool, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("studentName"));
        }
        if self.has_attendee(name) {
            return Ok(false);
        }
        self.attendees.push(name.to_string());
        Ok(true)
    }

    /// Removes `name` from the attendee set.
    ///
    /// Returns `false` when the name was not recorded.
    pub fn remove_attendee(&mut self, name: &str) -> bool {
        let before = self.attendees.len();
        self.attendees.retain(|a| a != name);
        self.attendees.len() != before
    }
}

/// Drops blank and repeated names from persisted attendee lists.
fn deserialize_attendees<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    let mut attendees: Vec<String> = Vec::with_capacity(raw.len());
    for name in raw {
        if !name.trim().is_empty() && !attendees.contains(&name) {
            attendees.push(name);
        }
    }
    Ok(attendees)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(SessionNumber::new(1), "2025-11-20")
    }

    #[test]
    fn new_session_has_no_attendees() {
        let s = session();
        assert!(s.attendees().is_empty());
        assert_eq!(s.date(), "2025-11-20");
    }

    #[test]
    fn add_attendee_appends_in_order() {
        let mut s = session();
        assert_eq!(s.add_attendee("Jane Doe"), Ok(true));
        assert_eq!(s.add_attendee("John Roe"), Ok(true));
        assert_eq!(s.attendees(), &["Jane Doe".to_string(), "John Roe".to_string()]);
    }

    #[test]
    fn add_attendee_twice_keeps_one_entry() {
        let mut s = session();
        s.add_attendee("Jane Doe").unwrap();
        assert_eq!(s.add_attendee("Jane Doe"), Ok(false));
        assert_eq!(s.attendees().len(), 1);
    }

    #[test]
    fn add_attendee_is_case_sensitive() {
        let mut s = session();
        s.add_attendee("Jane Doe").unwrap();
        s.add_attendee("JANE DOE").unwrap();
        assert_eq!(s.attendees().len(), 2);
    }

    #[test]
    fn add_attendee_rejects_blank_names() {
        let mut s = session();
        assert!(matches!(
            s.add_attendee(""),
            Err(ValidationError::EmptyField { .. })
        ));
        assert!(s.add_attendee("   ").is_err());
        assert!(s.attendees().is_empty());
    }

    #[test]
    fn remove_absent_attendee_is_noop() {
        let mut s = session();
        s.add_attendee("Jane Doe").unwrap();
        assert!(!s.remove_attendee("Nobody"));
        assert_eq!(s.attendees().len(), 1);
    }

    #[test]
    fn remove_attendee_keeps_remaining_order() {
        let mut s = session();
        for name in ["A", "B", "C"] {
            s.add_attendee(name).unwrap();
        }
        assert!(s.remove_attendee("B"));
        assert_eq!(s.attendees(), &["A".to_string(), "C".to_string()]);
    }

    #[test]
    fn deserializes_camel_case_and_drops_duplicates() {
        let json = r#"{"sessionNumber": 2, "date": "2025-11-21", "attendees": ["A", "B", "A", ""]}"#;
        let s: Session = serde_json::from_str(json).unwrap();
        assert_eq!(s.session_number(), SessionNumber::new(2));
        assert_eq!(s.attendees(), &["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(session()).unwrap();
        assert_eq!(value["sessionNumber"], 1);
        assert!(value["attendees"].as_array().unwrap().is_empty());
    }
}
