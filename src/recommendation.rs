//! Static advice copy keyed by learning style.
//!
//! Strategy sets are attached to every style a profile scores at least
//! [`THRESHOLD`] percent on. Strengths, tips and training methods describe the
//! primary style only and fall back to the multimodal copy when a profile has
//! no single dominant style.

use serde::{Deserialize, Serialize};

use crate::{LearningStyle, ScoreTally};

/// Minimum percentage for a style to receive a strategy set.
pub const THRESHOLD: f64 = 25.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategies {
    pub learning: Vec<String>,
    pub mentoring: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    /// Serialized as the display name, `Visual` or `Read/Write`.
    #[serde(with = "display_name")]
    pub style: LearningStyle,
    pub percentage: f64,
    pub strategies: Strategies,
}

mod display_name {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::LearningStyle;

    pub fn serialize<S: Serializer>(style: &LearningStyle, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(style.name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LearningStyle, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

pub(crate) fn recommendations(percentages: &ScoreTally<f64>) -> Vec<RecommendationSet> {
    let mut sets = percentages
        .iter()
        .filter(|&(_, percentage)| percentage >= THRESHOLD)
        .map(|(style, percentage)| RecommendationSet {
            style,
            percentage,
            strategies: strategies(style),
        })
        .collect::<Vec<RecommendationSet>>();
    // stable: equal percentages keep V, A, R, K order
    sets.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    sets
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

pub fn strategies(style: LearningStyle) -> Strategies {
    match style {
        LearningStyle::Visual => Strategies {
            learning: owned(&[
                "Use diagrams, flowcharts and mind maps to organise new material",
                "Colour-code notes, working papers and checklists",
                "Watch video walkthroughs before trying a new process",
                "Turn figures into charts to spot trends in client data",
                "Sketch the structure of a topic before reading the detail",
            ]),
            mentoring: owned(&[
                "Explain concepts with whiteboard sketches or annotated screenshots",
                "Share worked examples that show the finished layout",
                "Review progress against a visual tracker or dashboard",
                "Highlight key points directly on the documents being reviewed",
            ]),
        },
        LearningStyle::Auditory => Strategies {
            learning: owned(&[
                "Discuss new topics with colleagues or in study groups",
                "Listen to podcasts and recorded webinars on technical updates",
                "Talk through a problem aloud before writing it up",
                "Explain what you have learned to someone else",
                "Ask questions during training rather than saving them for later",
            ]),
            mentoring: owned(&[
                "Hold regular one-to-one conversations instead of written feedback only",
                "Talk through the reasoning behind review points",
                "Encourage them to present findings back to the team",
                "Use calls for briefings on new clients and engagements",
            ]),
        },
        LearningStyle::ReadWrite => Strategies {
            learning: owned(&[
                "Take detailed written notes during training sessions",
                "Read standards, manuals and guidance in full",
                "Write summaries and checklists to reinforce learning",
                "Rewrite key rules in your own words",
                "Keep a written log of lessons learned on each engagement",
            ]),
            mentoring: owned(&[
                "Provide written briefs and reading lists",
                "Leave clear written review points on their work",
                "Agree objectives in a written development plan",
                "Point them to reference material before explaining in person",
            ]),
        },
        LearningStyle::Kinesthetic => Strategies {
            learning: owned(&[
                "Learn by doing: practise on real or sample client files",
                "Work through case studies and practical exercises",
                "Try new software features in a sandbox before using them live",
                "Apply new rules to actual returns straight after learning them",
                "Take short breaks during long learning sessions",
            ]),
            mentoring: owned(&[
                "Sit alongside them and work through tasks together",
                "Give them hands-on ownership of real engagements early",
                "Use role plays for client meetings and difficult conversations",
                "Debrief straight after a task while the experience is fresh",
            ]),
        },
    }
}

pub fn strengths(primary: Option<LearningStyle>) -> &'static [&'static str] {
    match primary {
        Some(LearningStyle::Visual) => &[
            "Remembers faces and places well",
            "Good at reading maps and diagrams",
            "Notices visual details",
            "Thinks in pictures",
        ],
        Some(LearningStyle::Auditory) => &[
            "Remembers conversations easily",
            "Learns well from lectures and discussions",
            "Good at explaining concepts verbally",
            "Enjoys group learning",
        ],
        Some(LearningStyle::ReadWrite) => &[
            "Excellent note-taker",
            "Learns well from written materials",
            "Good at written communication",
            "Organised in documentation",
        ],
        Some(LearningStyle::Kinesthetic) => &[
            "Learns by doing",
            "Good at hands-on tasks",
            "Understands through real examples",
            "Remembers experiences well",
        ],
        None => &[
            "Flexible learning approach",
            "Adapts to different training methods",
            "Benefits from varied learning resources",
            "Well-rounded understanding",
        ],
    }
}

pub fn learning_tips(primary: Option<LearningStyle>) -> &'static [&'static str] {
    match primary {
        Some(LearningStyle::Visual) => &[
            "Use flowcharts and diagrams",
            "Highlight key points in colour",
            "Watch video demonstrations",
            "Create visual summaries",
        ],
        Some(LearningStyle::Auditory) => &[
            "Join study groups",
            "Record and listen to notes",
            "Discuss topics with others",
            "Use verbal repetition",
        ],
        Some(LearningStyle::ReadWrite) => &[
            "Take comprehensive notes",
            "Rewrite key concepts",
            "Create lists and outlines",
            "Read supplementary materials",
        ],
        Some(LearningStyle::Kinesthetic) => &[
            "Practise immediately",
            "Use real-world examples",
            "Take frequent breaks",
            "Learn through case studies",
        ],
        None => &[
            "Combine different learning methods",
            "Use multimedia resources",
            "Vary your study approach",
            "Engage multiple senses",
        ],
    }
}

/// Training formats that suit the primary style, for planning CPD.
pub fn training_methods(primary: Option<LearningStyle>) -> &'static [&'static str] {
    match primary {
        Some(LearningStyle::Visual) => &[
            "Video tutorials",
            "Diagrams",
            "Infographics",
            "Screen sharing",
        ],
        Some(LearningStyle::Auditory) => &["Podcasts", "Webinars", "Discussions", "Verbal coaching"],
        Some(LearningStyle::ReadWrite) => &[
            "Documentation",
            "Written guides",
            "Note-taking",
            "Reports",
        ],
        Some(LearningStyle::Kinesthetic) => &[
            "Hands-on practice",
            "Simulations",
            "Live projects",
            "Pair working",
        ],
        None => &[
            "Blended learning",
            "Mixed media",
            "Interactive workshops",
            "Project-based",
        ],
    }
}
