// SPDX-License-Identifier: MPL-2.0
//! Profile dataset backing the about section and the resume export.
//!
//! Pure data, assembled once at startup next to the project catalog.

/// Skill proficiency in percent.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillLevel(u8);

impl SkillLevel {
    /// Creates a new skill level, clamping to the valid range.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Returns the value as u8.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the level as a 0.0–1.0 fraction for progress bars.
    #[must_use]
    pub fn fraction(self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

/// One skill row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

impl Skill {
    #[must_use]
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level: SkillLevel::new(level),
        }
    }
}

/// One work experience entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

/// One education entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub period: String,
}

/// The full profile shown in the about section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub years_experience: u32,
    pub projects_completed: u32,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
}

impl Profile {
    /// The built-in profile.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            name: "Rahul Tiwari".to_string(),
            tagline: "Graphic Designer & UI/UX Expert".to_string(),
            location: "San Francisco, California".to_string(),
            email: "rahul.tiwari@example.com".to_string(),
            years_experience: 5,
            projects_completed: 50,
            skills: vec![
                Skill::new("Adobe Creative Suite", 95),
                Skill::new("Figma", 90),
                Skill::new("UI/UX Design", 85),
                Skill::new("Brand Identity", 90),
                Skill::new("Typography", 80),
                Skill::new("Motion Design", 75),
                Skill::new("Web Design", 85),
                Skill::new("Print Design", 80),
            ],
            experiences: vec![
                Experience {
                    title: "Senior Designer".to_string(),
                    company: "Creative Studio".to_string(),
                    period: "2020 - Present".to_string(),
                    description: "Lead designer for major brand projects, managing client \
                                  relationships and mentoring junior designers."
                        .to_string(),
                },
                Experience {
                    title: "UI Designer".to_string(),
                    company: "Tech Corp".to_string(),
                    period: "2018 - 2020".to_string(),
                    description: "Designed user interfaces for web and mobile applications, \
                                  collaborating with product and development teams."
                        .to_string(),
                },
                Experience {
                    title: "Freelance Designer".to_string(),
                    company: "Self-employed".to_string(),
                    period: "2016 - 2018".to_string(),
                    description: "Provided design services for various clients, specializing \
                                  in branding and digital design."
                        .to_string(),
                },
            ],
            education: vec![
                Education {
                    degree: "Master of Arts in Design".to_string(),
                    school: "Design Institute".to_string(),
                    period: "2014 - 2016".to_string(),
                },
                Education {
                    degree: "Bachelor of Fine Arts".to_string(),
                    school: "State University".to_string(),
                    period: "2010 - 2014".to_string(),
                },
            ],
        }
    }

    /// Renders the profile as a Markdown resume for export.
    #[must_use]
    pub fn resume_markdown(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("# {}\n\n", self.name));
        out.push_str(&format!("{}\n\n", self.tagline));
        out.push_str(&format!("- Location: {}\n", self.location));
        out.push_str(&format!("- Email: {}\n\n", self.email));

        out.push_str("## Experience\n\n");
        for exp in &self.experiences {
            out.push_str(&format!(
                "### {} - {} ({})\n\n{}\n\n",
                exp.title, exp.company, exp.period, exp.description
            ));
        }

        out.push_str("## Education\n\n");
        for edu in &self.education {
            out.push_str(&format!(
                "- {} - {} ({})\n",
                edu.degree, edu.school, edu.period
            ));
        }
        out.push('\n');

        out.push_str("## Skills\n\n");
        for skill in &self.skills {
            out.push_str(&format!("- {} ({}%)\n", skill.name, skill.level.value()));
        }

        out
    }
}
