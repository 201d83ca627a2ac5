pub mod notification;
pub mod resume;

pub use notification::{Notification, Severity};
pub use resume::{default_sections, PersonalInfo, PersonalInfoField, Section};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_cover_form_building_blocks() {
        let sections = default_sections();
        assert_eq!(sections.len(), 6);
        assert!(sections.iter().all(|s| s.content.is_empty()));

        let mut info = PersonalInfo::default();
        info.set(PersonalInfoField::FullName, "Jane Doe".to_string());
        assert_eq!(info.get(PersonalInfoField::FullName), "Jane Doe");

        assert_eq!(Notification::error("t", "m").severity, Severity::Error);
    }
}
