use serde::{Deserialize, Serialize};

/// Display asset for a program card. The renderer decides what each one looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Briefcase,
    BookOpen,
    Heart,
    Dumbbell,
}

impl Icon {
    /// Stable CSS class suffix for the icon.
    pub fn css_name(&self) -> &'static str {
        match self {
            Icon::Briefcase => "briefcase",
            Icon::BookOpen => "book-open",
            Icon::Heart => "heart",
            Icon::Dumbbell => "dumbbell",
        }
    }
}

/// The four core offerings of the organisation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgramArea {
    CareerGuidance,
    SchoolWorkHelp,
    MentalHealth,
    SportsRecreation,
}

impl ProgramArea {
    pub const ALL: [ProgramArea; 4] = [
        ProgramArea::CareerGuidance,
        ProgramArea::SchoolWorkHelp,
        ProgramArea::MentalHealth,
        ProgramArea::SportsRecreation,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ProgramArea::CareerGuidance => "Career Guidance",
            ProgramArea::SchoolWorkHelp => "School Work Help",
            ProgramArea::MentalHealth => "Mental Health",
            ProgramArea::SportsRecreation => "Sports & Recreation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProgramArea::CareerGuidance => {
                "Workshops and personalized mentorship connect students with professionals, \
                 helping them explore diverse career paths and build essential skills for their \
                 future endeavors."
            }
            ProgramArea::SchoolWorkHelp => {
                "Comprehensive tutoring services and organized study groups provide academic \
                 support across all subjects, enabling students to excel in their coursework."
            }
            ProgramArea::MentalHealth => {
                "Supportive workshops and peer counseling sessions promote emotional well-being, \
                 resilience, and positive coping mechanisms for managing stress and social \
                 pressures."
            }
            ProgramArea::SportsRecreation => {
                "Information about forming school teams and participating in community \
                 tournaments provides physical activity, teamwork, and healthy lifestyles among \
                 students."
            }
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            ProgramArea::CareerGuidance => Icon::Briefcase,
            ProgramArea::SchoolWorkHelp => Icon::BookOpen,
            ProgramArea::MentalHealth => Icon::Heart,
            ProgramArea::SportsRecreation => Icon::Dumbbell,
        }
    }

    /// Map an event category tag onto the program it belongs to.
    pub fn from_category(category: &str) -> Option<Self> {
        match category.trim().to_ascii_lowercase().as_str() {
            "career" => Some(ProgramArea::CareerGuidance),
            "academic" => Some(ProgramArea::SchoolWorkHelp),
            "wellness" => Some(ProgramArea::MentalHealth),
            "sports" => Some(ProgramArea::SportsRecreation),
            _ => None,
        }
    }
}
