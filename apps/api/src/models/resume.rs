use serde::{Deserialize, Serialize};

/// Contact block shown at the top of the resume.
/// Every field is free-form text; nothing here is validated or required.
/// Browser clients send camelCase keys, so those are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    #[serde(alias = "fullName")]
    pub full_name: String,
    #[serde(alias = "jobTitle")]
    pub job_title: String,
    pub location: String,
    #[serde(alias = "mobileNumber")]
    pub mobile_number: String,
    pub email: String,
    #[serde(alias = "linkedIn")]
    pub linked_in: String,
    pub github: String,
}

/// Names a single `PersonalInfo` field for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalInfoField {
    #[serde(alias = "fullName")]
    FullName,
    #[serde(alias = "jobTitle")]
    JobTitle,
    Location,
    #[serde(alias = "mobileNumber")]
    MobileNumber,
    Email,
    #[serde(alias = "linkedIn")]
    LinkedIn,
    Github,
}

impl PersonalInfo {
    pub fn get(&self, field: PersonalInfoField) -> &str {
        match field {
            PersonalInfoField::FullName => &self.full_name,
            PersonalInfoField::JobTitle => &self.job_title,
            PersonalInfoField::Location => &self.location,
            PersonalInfoField::MobileNumber => &self.mobile_number,
            PersonalInfoField::Email => &self.email,
            PersonalInfoField::LinkedIn => &self.linked_in,
            PersonalInfoField::Github => &self.github,
        }
    }

    /// Replaces exactly one field.
    pub fn set(&mut self, field: PersonalInfoField, value: String) {
        let slot = match field {
            PersonalInfoField::FullName => &mut self.full_name,
            PersonalInfoField::JobTitle => &mut self.job_title,
            PersonalInfoField::Location => &mut self.location,
            PersonalInfoField::MobileNumber => &mut self.mobile_number,
            PersonalInfoField::Email => &mut self.email,
            PersonalInfoField::LinkedIn => &mut self.linked_in,
            PersonalInfoField::Github => &mut self.github,
        };
        *slot = value;
    }
}

/// One resume category with the user's raw text and its enhanced rewrite.
///
/// `id` is stable for the lifetime of the session. `enhanced` stays empty
/// until an enhancement pass has written it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub content: String,
    pub enhanced: String,
}

impl Section {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            content: String::new(),
            enhanced: String::new(),
        }
    }
}

/// The fixed section lineup, in display order: (id, title).
pub const DEFAULT_SECTIONS: &[(&str, &str)] = &[
    ("summary", "Summary"),
    ("skills", "Skills"),
    ("experience", "Work Experience"),
    ("education", "Education"),
    ("certifications", "Certifications"),
    ("achievements", "Achievements"),
];

pub fn default_sections() -> Vec<Section> {
    DEFAULT_SECTIONS
        .iter()
        .map(|(id, title)| Section::new(id, title))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FIELDS: [PersonalInfoField; 7] = [
        PersonalInfoField::FullName,
        PersonalInfoField::JobTitle,
        PersonalInfoField::Location,
        PersonalInfoField::MobileNumber,
        PersonalInfoField::Email,
        PersonalInfoField::LinkedIn,
        PersonalInfoField::Github,
    ];

    #[test]
    fn test_set_touches_only_the_named_field() {
        for field in ALL_FIELDS {
            let mut info = PersonalInfo::default();
            info.set(field, "value".to_string());

            assert_eq!(info.get(field), "value");
            for other in ALL_FIELDS.iter().filter(|&&f| f != field) {
                assert_eq!(info.get(*other), "", "{other:?} changed when setting {field:?}");
            }
        }
    }

    #[test]
    fn test_field_accepts_snake_and_camel_case() {
        let snake: PersonalInfoField = serde_json::from_str("\"linked_in\"").unwrap();
        let camel: PersonalInfoField = serde_json::from_str("\"linkedIn\"").unwrap();
        assert_eq!(snake, PersonalInfoField::LinkedIn);
        assert_eq!(camel, PersonalInfoField::LinkedIn);
    }

    #[test]
    fn test_default_sections_have_unique_ids_and_empty_text() {
        let sections = default_sections();
        assert_eq!(sections.len(), 6);

        let mut ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);

        assert!(sections
            .iter()
            .all(|s| s.content.is_empty() && s.enhanced.is_empty()));
        assert_eq!(sections[2].title, "Work Experience");
    }

    #[test]
    fn test_personal_info_accepts_camel_case_and_missing_fields() {
        let json = r#"{"fullName": "Jane Doe", "linkedIn": "linkedin.com/in/jane"}"#;
        let info: PersonalInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.full_name, "Jane Doe");
        assert_eq!(info.linked_in, "linkedin.com/in/jane");
        assert_eq!(info.github, "");

        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["full_name"], "Jane Doe");
    }
}
