//! Everything the page says, as compiled-in records.
//!
//! Renderers receive slices of these and never mutate them. [`validate`]
//! checks the invariants the renderers rely on (non-empty program lists,
//! staggered stat delays) so a bad edit shows up in the console instead of
//! as a silently broken section.

use crate::error::ContentError;
use crate::icons::Icon;

pub const ORGANIZATION: &str = "Eleimon Christ Ministries";
pub const BRAND_INITIAL: &str = "E";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgramEntry {
    pub title: &'static str,
    pub icon: Icon,
    pub bullet_items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatEntry {
    /// Pre-formatted, e.g. "300+".
    pub value: &'static str,
    pub label: &'static str,
    pub reveal_delay_seconds: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactEntry {
    pub icon: Icon,
    pub heading: &'static str,
    pub detail: &'static str,
}

impl ContactEntry {
    /// Link target for the detail text, picked by what kind of contact it is.
    pub fn href(&self) -> Option<String> {
        match self.icon {
            Icon::Phone => {
                let digits: String = self.detail.chars().filter(|c| !c.is_whitespace()).collect();
                Some(format!("tel:{}", digits))
            }
            Icon::Mail => Some(format!("mailto:{}", self.detail)),
            Icon::MapPin => Some(format!(
                "https://www.google.com/maps/search/?api=1&query={}",
                urlencoding::encode(self.detail)
            )),
            _ => None,
        }
    }
}

/// A short value statement shown under the about copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueEntry {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// Same-page jump targets. Nav links and section ids both come from here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionAnchor {
    About,
    Programs,
    Contact,
}

impl SectionAnchor {
    pub fn id(self) -> &'static str {
        match self {
            SectionAnchor::About => "about",
            SectionAnchor::Programs => "programs",
            SectionAnchor::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

pub mod hero {
    pub const BADGE: &str = "Faith-Based Charitable Organization";
    pub const HEADLINE_LEAD: &str = "Establishing ";
    pub const HEADLINE_EMPHASIS: &str = "Spiritually Strong";
    pub const HEADLINE_TAIL: &str = " & Socially Empowered Communities";
    pub const LEDE: &str = "Committed to spiritual growth and holistic community development among marginalized groups in Punjab, India.";
    pub const PRIMARY_CTA: &str = "Our Mission";
    pub const SECONDARY_CTA: &str = "Learn More";
}

pub mod scripture {
    pub const QUOTE: &str = "\"Blessed are the merciful, for they shall obtain mercy.\"";
    pub const CITATION: &str = "— Matthew 5:7";
}

pub mod about {
    use super::StatEntry;

    pub const SUBTITLE: &str = "About the Organization";
    pub const HEADING: &str = "Our Heart & Vision";
    pub const PARAGRAPHS: &[&str] = &[
        "Eleimon Christ Ministries is a faith-driven charitable organization committed to spiritual growth and holistic community development. We work among marginalized communities, including economically weaker sections, socially excluded groups, and underprivileged children.",
        "Our vision is to establish spiritually strong and socially empowered communities through the love, mercy, and teachings of Jesus Christ. We integrate spiritual guidance with social welfare to ensure sustainable transformation.",
    ];
    pub const FEATURED_STAT: StatEntry = StatEntry {
        value: "300+",
        label: "Families Supported",
        reveal_delay_seconds: 0.0,
    };
}

pub mod programs {
    pub const SUBTITLE: &str = "What We Do";
    pub const HEADING: &str = "Core Program Areas";
}

pub mod contact {
    pub const SUBTITLE: &str = "Get In Touch";
    pub const HEADING: &str = "Contact Information";
    pub const COLLABORATION: &str = "We welcome collaboration with government departments, CSR initiatives, philanthropic organizations, and community leaders.";
    pub const DONATION_HEADING: &str = "Support Our Mission";
    pub const DONATION_BLURB: &str = "Your voluntary donations help us sustain youth programs, women empowerment, and community welfare projects.";
}

pub const VALUES: &[ValueEntry] = &[
    ValueEntry {
        icon: Icon::ShieldCheck,
        title: "Transparency",
        description: "Ethical governance and proper activity documentation.",
    },
    ValueEntry {
        icon: Icon::Heart,
        title: "Compassion",
        description: "Driven by the love and mercy of Jesus Christ.",
    },
];

pub const PROGRAMS: &[ProgramEntry] = &[
    ProgramEntry {
        title: "Spiritual Development",
        icon: Icon::BookOpen,
        bullet_items: &[
            "Bible teaching programs",
            "Leadership training seminars",
            "House fellowship gatherings",
            "Youth spiritual mentoring",
        ],
    },
    ProgramEntry {
        title: "Youth Development",
        icon: Icon::Users,
        bullet_items: &[
            "Drug awareness campaigns",
            "Career counseling sessions",
            "Personality workshops",
            "Leadership training",
        ],
    },
    ProgramEntry {
        title: "Women Empowerment",
        icon: Icon::Sun,
        bullet_items: &[
            "Skill training initiatives",
            "Self-help group formation",
            "Financial literacy workshops",
            "Confidence-building programs",
        ],
    },
    ProgramEntry {
        title: "Child Development",
        icon: Icon::GraduationCap,
        bullet_items: &[
            "Educational support",
            "Moral value education",
            "Child dedication & counseling",
            "Seasonal camps & workshops",
        ],
    },
    ProgramEntry {
        title: "Social Welfare",
        icon: Icon::HandHeart,
        bullet_items: &[
            "Food distribution drives",
            "Clothing distribution",
            "Medical awareness camps",
            "Educational assistance",
        ],
    },
    ProgramEntry {
        title: "Rural Support",
        icon: Icon::Sprout,
        bullet_items: &[
            "Agricultural awareness",
            "Rural livelihood support",
            "Slum community outreach",
            "Relief for weaker families",
        ],
    },
];

pub const STATS: &[StatEntry] = &[
    StatEntry { value: "250+", label: "Youth Engaged", reveal_delay_seconds: 0.0 },
    StatEntry { value: "90+", label: "Women Trained", reveal_delay_seconds: 0.1 },
    StatEntry { value: "300+", label: "Families Supported", reveal_delay_seconds: 0.2 },
    StatEntry { value: "10+", label: "House Fellowships", reveal_delay_seconds: 0.3 },
];

pub const CONTACTS: &[ContactEntry] = &[
    ContactEntry {
        icon: Icon::MapPin,
        heading: "Our Location",
        detail: "Arniwala Sheikh Sunhan, Fazilka, Punjab, India - 152124",
    },
    ContactEntry {
        icon: Icon::Phone,
        heading: "Phone Number",
        detail: "+91 98885 56659",
    },
    ContactEntry {
        icon: Icon::Mail,
        heading: "Email Address",
        detail: "jameswarval0432@gmail.com",
    },
];

pub fn validate_programs(programs: &[ProgramEntry]) -> Vec<ContentError> {
    programs
        .iter()
        .filter(|program| program.bullet_items.is_empty())
        .map(|program| ContentError::EmptyProgram {
            title: program.title.to_string(),
        })
        .collect()
}

pub fn validate_stats(stats: &[StatEntry]) -> Vec<ContentError> {
    let mut errors = Vec::new();
    let mut previous: Option<f32> = None;

    for stat in stats {
        let delay = stat.reveal_delay_seconds;
        if delay.is_nan() || delay < 0.0 {
            errors.push(ContentError::NegativeDelay {
                label: stat.label.to_string(),
                delay,
            });
        }
        if let Some(previous) = previous {
            if delay.is_nan() || delay <= previous {
                errors.push(ContentError::DelayOutOfOrder {
                    label: stat.label.to_string(),
                    delay,
                    previous,
                });
            }
        }
        previous = Some(delay);
    }

    errors
}

/// Checks the configured content. An empty result means every invariant holds.
pub fn validate() -> Vec<ContentError> {
    let mut errors = validate_programs(PROGRAMS);
    errors.extend(validate_stats(STATS));
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_content_is_valid() {
        assert_eq!(validate(), Vec::new());
    }

    #[test]
    fn every_program_lists_something() {
        assert_eq!(PROGRAMS.len(), 6);
        for program in PROGRAMS {
            assert!(!program.bullet_items.is_empty(), "{} has no bullets", program.title);
        }
    }

    #[test]
    fn stat_delays_are_staggered() {
        let delays: Vec<f32> = STATS.iter().map(|s| s.reveal_delay_seconds).collect();
        assert_eq!(delays, vec![0.0, 0.1, 0.2, 0.3]);
        assert!(delays.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn contact_details_are_literal() {
        let details: Vec<&str> = CONTACTS.iter().map(|c| c.detail).collect();
        assert_eq!(
            details,
            vec![
                "Arniwala Sheikh Sunhan, Fazilka, Punjab, India - 152124",
                "+91 98885 56659",
                "jameswarval0432@gmail.com",
            ]
        );
    }

    #[test]
    fn empty_program_is_reported() {
        let programs = [ProgramEntry {
            title: "Placeholder",
            icon: Icon::Heart,
            bullet_items: &[],
        }];
        assert_eq!(
            validate_programs(&programs),
            vec![ContentError::EmptyProgram { title: "Placeholder".to_string() }]
        );
    }

    #[test]
    fn unordered_and_negative_delays_are_reported() {
        let stats = [
            StatEntry { value: "1", label: "a", reveal_delay_seconds: 0.2 },
            StatEntry { value: "2", label: "b", reveal_delay_seconds: 0.2 },
            StatEntry { value: "3", label: "c", reveal_delay_seconds: -0.1 },
        ];
        let errors = validate_stats(&stats);
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], ContentError::DelayOutOfOrder { ref label, .. } if label == "b"));
        assert!(matches!(errors[1], ContentError::NegativeDelay { ref label, .. } if label == "c"));
        assert!(matches!(errors[2], ContentError::DelayOutOfOrder { ref label, .. } if label == "c"));
    }

    #[test]
    fn nan_delay_is_reported() {
        let stats = [
            StatEntry { value: "1", label: "a", reveal_delay_seconds: 0.1 },
            StatEntry { value: "2", label: "b", reveal_delay_seconds: f32::NAN },
        ];
        let errors = validate_stats(&stats);
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ContentError::NegativeDelay { ref label, .. } if label == "b"));
        assert!(matches!(errors[1], ContentError::DelayOutOfOrder { ref label, .. } if label == "b"));
    }

    #[test]
    fn contact_links_follow_the_kind_of_contact() {
        assert_eq!(CONTACTS[1].href().as_deref(), Some("tel:+919888556659"));
        assert_eq!(
            CONTACTS[2].href().as_deref(),
            Some("mailto:jameswarval0432@gmail.com")
        );
        let map = CONTACTS[0].href().unwrap_or_default();
        assert!(map.ends_with("Arniwala%20Sheikh%20Sunhan%2C%20Fazilka%2C%20Punjab%2C%20India%20-%20152124"));

        let other = ContactEntry { icon: Icon::Heart, heading: "h", detail: "d" };
        assert_eq!(other.href(), None);
    }

    #[test]
    fn anchors_match_nav_targets() {
        assert_eq!(SectionAnchor::About.href(), "#about");
        assert_eq!(SectionAnchor::Programs.href(), "#programs");
        assert_eq!(SectionAnchor::Contact.href(), "#contact");
    }
}
