//! Static profile content rendered by the page.

/// A run of text, optionally emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSpan {
    Plain(&'static str),
    Strong(&'static str),
}

impl TextSpan {
    pub fn text(&self) -> &'static str {
        match self {
            TextSpan::Plain(text) | TextSpan::Strong(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

impl ContactInfo {
    /// Single-line contact string shown under the tagline
    pub fn line(&self) -> String {
        format!(
            "Email: {} | Phone: {} | {}",
            self.email, self.phone, self.location
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub organization: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSkill {
    pub language: &'static str,
    pub proficiency: &'static str,
}

impl LanguageSkill {
    pub fn display(&self) -> String {
        format!("{} — {}", self.language, self.proficiency)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub contact: ContactInfo,
    pub summary: &'static [TextSpan],
    pub competencies: &'static [&'static str],
    pub experience: &'static [ExperienceEntry],
    pub achievements: &'static [&'static str],
    pub languages: &'static [LanguageSkill],
}

pub static PROFILE: Profile = Profile {
    name: "Ihsan Abdi Hassen",
    tagline: "Financial Analyst | Procurement & Logistics Specialist | Researcher",
    contact: ContactInfo {
        email: "ihsanabdi58@gmail.com",
        phone: "+251 919 527 436",
        location: "Ethiopia",
    },
    summary: &[
        TextSpan::Plain("I am a results-oriented "),
        TextSpan::Strong("Financial Analyst"),
        TextSpan::Plain(" with extensive experience in "),
        TextSpan::Strong("Procurement, Logistics, Accounting, and Entrepreneurship"),
        TextSpan::Plain(
            ". I specialize in financial reporting, supply chain optimization, and strategic \
             business planning. My diverse background has equipped me with strong analytical, \
             organizational, and leadership skills that drive efficiency, transparency, and \
             sustainable growth.",
        ),
    ],
    competencies: &[
        "Financial Analysis & Reporting",
        "Procurement & Supply Chain Management",
        "Logistics & Inventory Control",
        "Accounting & Auditing",
        "Budgeting & Forecasting",
        "Risk Assessment & Management",
        "Business Strategy & Entrepreneurship",
        "Leadership & Mentorship",
    ],
    experience: &[
        ExperienceEntry {
            role: "Financial Analyst",
            organization: "Various Organizations & Banks — Ethiopia",
            highlights: &[
                "Conducted financial analyses, audits, and performance assessments.",
                "Prepared reports and forecasts to guide strategic decisions.",
                "Ensured compliance with financial policies and standards.",
            ],
        },
        ExperienceEntry {
            role: "Procurement and Logistics Officer",
            organization: "Various Organizations — Ethiopia",
            highlights: &[
                "Oversaw procurement operations and supplier management.",
                "Implemented logistics systems and optimized inventory control.",
                "Achieved cost savings through strategic sourcing and planning.",
            ],
        },
        ExperienceEntry {
            role: "Entrepreneur & Business Founder",
            organization: "Self-Founded Ventures — Ethiopia",
            highlights: &[
                "Established and managed small and medium enterprises.",
                "Supervised procurement, financial, and logistics operations.",
                "Promoted youth entrepreneurship and financial literacy.",
            ],
        },
    ],
    achievements: &[
        "Improved financial accountability and reporting standards.",
        "Strengthened procurement and logistics efficiency frameworks.",
        "Enhanced operational transparency and cost control.",
        "Contributed to research on community-based risk management.",
    ],
    languages: &[
        LanguageSkill {
            language: "Somali",
            proficiency: "Native",
        },
        LanguageSkill {
            language: "Amharic",
            proficiency: "Fluent",
        },
        LanguageSkill {
            language: "English",
            proficiency: "Fluent",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_line() {
        assert_eq!(
            PROFILE.contact.line(),
            "Email: ihsanabdi58@gmail.com | Phone: +251 919 527 436 | Ethiopia"
        );
    }

    #[test]
    fn test_summary_emphasis() {
        let strong: Vec<&str> = PROFILE
            .summary
            .iter()
            .filter(|span| matches!(span, TextSpan::Strong(_)))
            .map(|span| span.text())
            .collect();
        assert_eq!(
            strong,
            vec![
                "Financial Analyst",
                "Procurement, Logistics, Accounting, and Entrepreneurship"
            ]
        );

        let full: String = PROFILE.summary.iter().map(|span| span.text()).collect();
        assert!(full.starts_with("I am a results-oriented Financial Analyst with"));
        assert!(full.ends_with("sustainable growth."));
    }

    #[test]
    fn test_content_counts() {
        assert_eq!(PROFILE.competencies.len(), 8);
        assert_eq!(PROFILE.experience.len(), 3);
        assert!(PROFILE.experience.iter().all(|e| e.highlights.len() == 3));
        assert_eq!(PROFILE.achievements.len(), 4);
        assert_eq!(PROFILE.languages.len(), 3);
    }

    #[test]
    fn test_language_display() {
        assert_eq!(PROFILE.languages[0].display(), "Somali — Native");
    }
}
