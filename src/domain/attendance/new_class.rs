//! Validated input for creating a class.

use crate::domain::foundation::ValidationError;

/// Section assigned when the caller does not supply one.
pub const DEFAULT_SECTION: u32 = 1;

/// Highest accepted section number.
pub const MAX_SECTION: u32 = 999;

/// Typed record for a class about to be created.
///
/// `title` is required; `code` and `semester` are optional and stored as
/// absent when blank. All text fields are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClass {
    title: String,
    code: Option<String>,
    section: u32,
    semester: Option<String>,
}

impl NewClass {
    /// Validates raw input into a `NewClass`.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `title` is blank
    /// - `OutOfRange` if `section` is outside `1..=999`
    pub fn new(
        title: &str,
        code: Option<&str>,
        section: Option<u32>,
        semester: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }

        let section = section.unwrap_or(DEFAULT_SECTION);
        if !(1..=MAX_SECTION).contains(&section) {
            return Err(ValidationError::out_of_range(
                "section",
                1,
                i64::from(MAX_SECTION),
                i64::from(section),
            ));
        }

        Ok(Self {
            title: title.to_string(),
            code: non_blank(code),
            section,
            semester: non_blank(semester),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn section(&self) -> u32 {
        self.section
    }

    pub fn semester(&self) -> Option<&str> {
        self.semester.as_deref()
    }

    pub(super) fn into_parts(self) -> (String, Option<String>, u32, Option<String>) {
        (self.title, self.code, self.section, self.semester)
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
