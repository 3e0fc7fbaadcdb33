pub mod resume;

pub use resume::{Contact, ExperienceEntry, ResumeRecord, SkillsEntry};
