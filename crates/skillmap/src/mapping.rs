//! Builds Korean to Taiwanese name mappings by pairing the two datasets positionally.
//!
//! Both datasets are assumed to list students, and each student's skills, in the same order.
//! Pairing stops at the end of the shorter sequence.

use crate::input::Student;
use indexmap::IndexMap;
use serde::Serialize;

/// What kind of names a mapping translates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingKind {
    Skills,
    Students,
}

impl MappingKind {
    /// The file the mapping is written to when no output path is given.
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Skills => "skill_name_mapping.json",
            Self::Students => "students_mapping.json",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Skills => "Skill name mappings",
            Self::Students => "Student name mappings",
        }
    }
}

/// Korean name to Taiwanese name.
/// Keys keep the position of their first insertion, later values overwrite earlier ones.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameMapping {
    pub names: IndexMap<String, String>,
}

impl NameMapping {
    pub fn derive(kind: MappingKind, kr: &[Student], tw: &[Student]) -> Self {
        match kind {
            MappingKind::Skills => Self::from_skills(kr, tw),
            MappingKind::Students => Self::from_students(kr, tw),
        }
    }

    pub fn from_skills(kr: &[Student], tw: &[Student]) -> Self {
        log_length_mismatch(kr.len(), tw.len());

        let mut mapping = Self::default();
        for (idx, (kr_student, tw_student)) in kr.iter().zip(tw).enumerate() {
            if kr_student.skills.len() != tw_student.skills.len() {
                tracing::debug!(
                    "student {idx} has {} korean and {} taiwanese skills",
                    kr_student.skills.len(),
                    tw_student.skills.len()
                );
            }
            for (kr_skill, tw_skill) in kr_student.skills.iter().zip(&tw_student.skills) {
                mapping.insert(kr_skill.name.as_deref(), tw_skill.name.as_deref());
            }
        }
        mapping
    }

    pub fn from_students(kr: &[Student], tw: &[Student]) -> Self {
        log_length_mismatch(kr.len(), tw.len());

        let mut mapping = Self::default();
        for (kr_student, tw_student) in kr.iter().zip(tw) {
            mapping.insert(kr_student.name.as_deref(), tw_student.name.as_deref());
        }
        mapping
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, kr: &str) -> Option<&str> {
        self.names.get(kr).map(String::as_str)
    }

    fn insert(&mut self, kr: Option<&str>, tw: Option<&str>) {
        match (kr, tw) {
            (Some(kr), Some(tw)) if !kr.is_empty() && !tw.is_empty() => {
                if let Some(previous) = self.names.insert(kr.to_string(), tw.to_string()) {
                    if previous != tw {
                        tracing::trace!("{kr}: replaced {previous} with {tw}");
                    }
                }
            }
            _ => tracing::trace!("skipping pair {kr:?} / {tw:?}"),
        }
    }
}

fn log_length_mismatch(kr: usize, tw: usize) {
    if kr != tw {
        tracing::debug!(
            "{kr} korean and {tw} taiwanese students, only the first {} are paired",
            kr.min(tw)
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::input::Skill;

    fn student(name: Option<&str>, skills: &[Option<&str>]) -> Student {
        Student {
            name: name.map(String::from),
            skills: skills
                .iter()
                .map(|s| Skill {
                    name: s.map(String::from),
                })
                .collect(),
        }
    }

    fn skills(skills: &[&str]) -> Student {
        let skills = skills.iter().map(|s| Some(*s)).collect::<Vec<_>>();
        student(None, &skills)
    }

    #[test]
    fn maps_aligned_skills() {
        let kr = [skills(&["강습", "사격"]), skills(&["회복"])];
        let tw = [skills(&["強襲", "射擊"]), skills(&["回復"])];
        let mapping = NameMapping::from_skills(&kr, &tw);
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.get("강습"), Some("強襲"));
        assert_eq!(mapping.get("사격"), Some("射擊"));
        assert_eq!(mapping.get("회복"), Some("回復"));
    }

    #[test]
    fn truncates_to_shorter_student_list() {
        let kr = [skills(&["강습"]), skills(&["회복"])];
        let tw = [skills(&["強襲"])];
        let mapping = NameMapping::from_skills(&kr, &tw);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("회복"), None);
    }

    #[test]
    fn truncates_to_shorter_skill_list() {
        let kr = [skills(&["강습"])];
        let tw = [skills(&["強襲", "射擊"])];
        let mapping = NameMapping::from_skills(&kr, &tw);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("강습"), Some("強襲"));
    }

    #[test]
    fn skips_missing_names() {
        let kr = [student(None, &[None, Some("사격"), Some(""), Some("회복")])];
        let tw = [student(None, &[Some("強襲"), None, Some("治癒"), Some("回復")])];
        let mapping = NameMapping::from_skills(&kr, &tw);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("회복"), Some("回復"));
    }

    #[test]
    fn later_duplicate_overwrites() {
        let kr = [skills(&["강습", "사격"]), skills(&["강습"])];
        let tw = [skills(&["強襲", "射擊"]), skills(&["突襲"])];
        let mapping = NameMapping::from_skills(&kr, &tw);
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("강습"), Some("突襲"));
        // overwritten key keeps its original position
        let keys = mapping.names.keys().collect::<Vec<_>>();
        assert_eq!(keys, &["강습", "사격"]);
    }

    #[test]
    fn students_without_skills() {
        let kr = [Student::default(), skills(&["강습"])];
        let tw = [skills(&["強襲"]), skills(&["強襲"])];
        let mapping = NameMapping::from_skills(&kr, &tw);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("강습"), Some("強襲"));
    }

    #[test]
    fn maps_student_names() {
        let kr = [
            student(Some("아루"), &[]),
            student(None, &[]),
            student(Some("무츠키"), &[]),
            student(Some("카요코"), &[]),
        ];
        let tw = [
            student(Some("亞瑠"), &[]),
            student(Some("佳代子"), &[]),
            student(Some("睦月"), &[]),
        ];
        let mapping = NameMapping::derive(MappingKind::Students, &kr, &tw);
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("아루"), Some("亞瑠"));
        assert_eq!(mapping.get("무츠키"), Some("睦月"));
    }

    #[test]
    fn empty_inputs() {
        let mapping = NameMapping::derive(MappingKind::Skills, &[], &[skills(&["強襲"])]);
        assert!(mapping.is_empty());
    }
}
