use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a navigable section.
///
/// The string form doubles as the DOM anchor id and as the value of the
/// active section state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Summary,
    Competencies,
    Experience,
    Achievements,
    Languages,
}

impl SectionId {
    /// All ids in declared (render and tie-break) order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Summary,
        SectionId::Competencies,
        SectionId::Experience,
        SectionId::Achievements,
        SectionId::Languages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Summary => "summary",
            SectionId::Competencies => "competencies",
            SectionId::Experience => "experience",
            SectionId::Achievements => "achievements",
            SectionId::Languages => "languages",
        }
    }

    /// Position of this id in declared order.
    pub fn index(&self) -> usize {
        match self {
            SectionId::Summary => 0,
            SectionId::Competencies => 1,
            SectionId::Experience => 2,
            SectionId::Achievements => 3,
            SectionId::Languages => 4,
        }
    }

    pub fn section(&self) -> &'static Section {
        &SECTIONS[self.index()]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the view registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: SectionId,
    /// Navigation button text
    pub label: &'static str,
    /// Card heading
    pub title: &'static str,
}

/// The view registry. Fixed for the lifetime of the page.
pub static SECTIONS: [Section; 5] = [
    Section {
        id: SectionId::Summary,
        label: "Professional Summary",
        title: "Professional Summary",
    },
    Section {
        id: SectionId::Competencies,
        label: "Core Competencies",
        title: "Core Competencies",
    },
    Section {
        id: SectionId::Experience,
        label: "Experience",
        title: "Professional Experience",
    },
    Section {
        id: SectionId::Achievements,
        label: "Key Achievements",
        title: "Key Achievements",
    },
    Section {
        id: SectionId::Languages,
        label: "Languages",
        title: "Languages",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_matches_declared_order() {
        let ids: Vec<SectionId> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());

        for (index, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(id.index(), index);
            assert_eq!(id.section().id, *id);
        }
    }

    #[test]
    fn test_section_id_serializes_as_anchor_key() {
        let json = serde_json::to_string(&SectionId::Achievements).unwrap();
        assert_eq!(json, "\"achievements\"");

        let parsed: SectionId = serde_json::from_str("\"competencies\"").unwrap();
        assert_eq!(parsed, SectionId::Competencies);
        assert_eq!(parsed.to_string(), "competencies");

        // Anchor keys are case sensitive
        assert!(serde_json::from_str::<SectionId>("\"Summary\"").is_err());
    }

    #[test]
    fn test_labels_and_titles() {
        assert_eq!(SectionId::Experience.section().label, "Experience");
        assert_eq!(SectionId::Experience.section().title, "Professional Experience");
        assert_eq!(SectionId::Summary.section().label, "Professional Summary");
    }
}
