use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::recommendation::{recommendations, RecommendationSet};
use crate::{Error, LearningStyle, Response};

/// One value per learning style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreTally<T> {
    pub visual: T,
    pub auditory: T,
    pub read_write: T,
    pub kinesthetic: T,
}

impl<T: Copy> ScoreTally<T> {
    pub fn from_fn(mut f: impl FnMut(LearningStyle) -> T) -> Self {
        Self {
            visual: f(LearningStyle::Visual),
            auditory: f(LearningStyle::Auditory),
            read_write: f(LearningStyle::ReadWrite),
            kinesthetic: f(LearningStyle::Kinesthetic),
        }
    }

    pub fn get(&self, style: LearningStyle) -> T {
        match style {
            LearningStyle::Visual => self.visual,
            LearningStyle::Auditory => self.auditory,
            LearningStyle::ReadWrite => self.read_write,
            LearningStyle::Kinesthetic => self.kinesthetic,
        }
    }

    /// Pairs in V, A, R, K order.
    pub fn iter(&self) -> impl Iterator<Item = (LearningStyle, T)> + '_ {
        LearningStyle::ALL
            .into_iter()
            .map(move |style| (style, self.get(style)))
    }
}

impl ScoreTally<u32> {
    fn count(responses: &[Response]) -> Self {
        let mut tally = Self::default();
        for style in responses.iter().filter_map(|response| response.style) {
            match style {
                LearningStyle::Visual => tally.visual += 1,
                LearningStyle::Auditory => tally.auditory += 1,
                LearningStyle::ReadWrite => tally.read_write += 1,
                LearningStyle::Kinesthetic => tally.kinesthetic += 1,
            }
        }
        tally
    }

    pub fn total(&self) -> u32 {
        self.iter().map(|(_, count)| count).sum()
    }
}

/// Classification of the dominant style set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LearningType {
    Strong(LearningStyle),
    Bimodal(LearningStyle, LearningStyle),
    Trimodal,
    Multimodal,
}

impl LearningType {
    fn from_dominant(dominant: &[LearningStyle]) -> Self {
        match *dominant {
            [style] => LearningType::Strong(style),
            [first, second] => LearningType::Bimodal(first, second),
            [_, _, _] => LearningType::Trimodal,
            _ => LearningType::Multimodal,
        }
    }
}

impl fmt::Display for LearningType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearningType::Strong(style) => write!(f, "Strong {}", style.name()),
            LearningType::Bimodal(first, second) => {
                write!(f, "Bimodal ({} + {})", first.initial(), second.initial())
            }
            LearningType::Trimodal => f.write_str("Trimodal"),
            LearningType::Multimodal => f.write_str("Multimodal (VARK)"),
        }
    }
}

impl FromStr for LearningType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Trimodal" => return Ok(LearningType::Trimodal),
            "Multimodal (VARK)" => return Ok(LearningType::Multimodal),
            _ => {}
        }
        if let Some(style) = s.strip_prefix("Strong ") {
            return Ok(LearningType::Strong(style.parse()?));
        }
        if let Some((first, second)) = s
            .strip_prefix("Bimodal (")
            .and_then(|rest| rest.strip_suffix(')'))
            .and_then(|pair| pair.split_once(" + "))
        {
            return Ok(LearningType::Bimodal(first.parse()?, second.parse()?));
        }
        Err(Error::IllegalAnswer(s.to_string()))
    }
}

impl TryFrom<String> for LearningType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LearningType> for String {
    fn from(value: LearningType) -> Self {
        value.to_string()
    }
}

/// Result of a completed (or partially completed) assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub scores: ScoreTally<u32>,
    pub percentages: ScoreTally<f64>,
    pub dominant_styles: Vec<LearningStyle>,
    pub learning_type: LearningType,
    pub recommendations: Vec<RecommendationSet>,
}

impl Profile {
    /// The single dominant style, or `None` when several styles share the top tally.
    pub fn primary_style(&self) -> Option<LearningStyle> {
        match self.learning_type {
            LearningType::Strong(style) => Some(style),
            _ => None,
        }
    }
}

/// Scores a response sheet.
///
/// Skipped questions (`style: None`) count toward no style. Question ids are
/// not checked: tallies are keyed by style only, so unknown or repeated ids
/// are counted like any other answer.
///
/// An empty sheet is not an error. Every percentage is 0 and all four styles
/// tie on a zero tally, which classifies as [`LearningType::Multimodal`].
pub fn calculate_profile(responses: &[Response]) -> Profile {
    let scores = ScoreTally::count(responses);
    let total = scores.total();

    let percentages = ScoreTally::from_fn(|style| {
        if total > 0 {
            (scores.get(style) as f64 / total as f64 * 100.0).round()
        } else {
            0.0
        }
    });

    let max = scores.iter().map(|(_, count)| count).max().unwrap_or(0);
    let dominant_styles = scores
        .iter()
        .filter(|&(_, count)| count == max)
        .map(|(style, _)| style)
        .collect::<Vec<LearningStyle>>();
    let learning_type = LearningType::from_dominant(&dominant_styles);

    debug!(?scores, total, %learning_type, "calculated VARK profile");

    Profile {
        scores,
        percentages,
        dominant_styles,
        learning_type,
        recommendations: recommendations(&percentages),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use LearningStyle::*;

    fn sheet(styles: &[Option<LearningStyle>]) -> Vec<Response> {
        styles
            .iter()
            .enumerate()
            .map(|(index, &style)| Response::new(index as u32 + 1, style))
            .collect()
    }

    fn repeat(pattern: &[(LearningStyle, usize)]) -> Vec<Response> {
        let styles = pattern
            .iter()
            .flat_map(|&(style, times)| std::iter::repeat(Some(style)).take(times))
            .collect::<Vec<_>>();
        sheet(&styles)
    }

    #[test]
    fn test_all_visual() {
        let profile = calculate_profile(&repeat(&[(Visual, 16)]));
        assert_eq!(
            profile.scores,
            ScoreTally {
                visual: 16,
                auditory: 0,
                read_write: 0,
                kinesthetic: 0
            }
        );
        assert_eq!(profile.percentages.visual, 100.0);
        assert_eq!(profile.percentages.auditory, 0.0);
        assert_eq!(profile.dominant_styles, vec![Visual]);
        assert_eq!(profile.learning_type.to_string(), "Strong Visual");
        assert_eq!(profile.primary_style(), Some(Visual));
        assert_eq!(profile.recommendations.len(), 1);
        assert_eq!(profile.recommendations[0].style, Visual);
        assert_eq!(profile.recommendations[0].percentage, 100.0);
    }

    #[test]
    fn test_bimodal() {
        let profile = calculate_profile(&repeat(&[(Visual, 8), (Auditory, 8)]));
        assert_eq!(profile.scores.total(), 16);
        assert_eq!(profile.scores.visual, 8);
        assert_eq!(profile.scores.auditory, 8);
        assert_eq!(profile.percentages.visual, 50.0);
        assert_eq!(profile.percentages.auditory, 50.0);
        assert_eq!(profile.percentages.read_write, 0.0);
        assert_eq!(profile.dominant_styles, vec![Visual, Auditory]);
        assert_eq!(profile.learning_type.to_string(), "Bimodal (V + A)");
        assert_eq!(profile.primary_style(), None);
        let styles = profile
            .recommendations
            .iter()
            .map(|set| (set.style, set.percentage))
            .collect::<Vec<_>>();
        assert_eq!(styles, vec![(Visual, 50.0), (Auditory, 50.0)]);
    }

    #[test]
    fn test_unanswered() {
        let profile = calculate_profile(&Response::blank_sheet());
        assert_eq!(profile.scores.total(), 0);
        assert!(profile.percentages.iter().all(|(_, p)| p == 0.0));
        assert_eq!(profile.dominant_styles, LearningStyle::ALL.to_vec());
        assert_eq!(profile.learning_type, LearningType::Multimodal);
        assert!(profile.recommendations.is_empty());

        let profile = calculate_profile(&[]);
        assert_eq!(profile.learning_type.to_string(), "Multimodal (VARK)");
    }

    #[test]
    fn test_even_split() {
        let profile = calculate_profile(&repeat(&[
            (Kinesthetic, 4),
            (ReadWrite, 4),
            (Auditory, 4),
            (Visual, 4),
        ]));
        assert!(profile.percentages.iter().all(|(_, p)| p == 25.0));
        assert_eq!(profile.dominant_styles, LearningStyle::ALL.to_vec());
        assert_eq!(profile.learning_type.to_string(), "Multimodal (VARK)");
        let styles = profile
            .recommendations
            .iter()
            .map(|set| set.style)
            .collect::<Vec<_>>();
        assert_eq!(styles, LearningStyle::ALL.to_vec());
    }

    #[test]
    fn test_trimodal() {
        let profile = calculate_profile(&repeat(&[
            (Visual, 5),
            (ReadWrite, 5),
            (Kinesthetic, 5),
            (Auditory, 1),
        ]));
        assert_eq!(profile.dominant_styles, vec![Visual, ReadWrite, Kinesthetic]);
        assert_eq!(profile.learning_type, LearningType::Trimodal);
        // 5/16 = 31.25
        assert_eq!(profile.percentages.visual, 31.0);
        assert_eq!(profile.percentages.auditory, 6.0);
        assert_eq!(profile.recommendations.len(), 3);
    }

    #[test]
    fn test_skipped_questions_are_not_counted() {
        let profile = calculate_profile(&sheet(&[
            Some(Visual),
            None,
            Some(Visual),
            None,
            Some(Kinesthetic),
        ]));
        assert_eq!(profile.scores.total(), 3);
        assert_eq!(profile.percentages.visual, 67.0);
        assert_eq!(profile.percentages.kinesthetic, 33.0);
        assert_eq!(profile.learning_type.to_string(), "Strong Visual");
    }

    #[test]
    fn test_percentages_are_rounded_per_field() {
        let profile = calculate_profile(&sheet(&[Some(Visual), Some(Auditory), Some(ReadWrite)]));
        let sum: f64 = profile.percentages.iter().map(|(_, p)| p).sum();
        assert_eq!(sum, 99.0);

        // 1/8 = 12.5 rounds half up
        let profile = calculate_profile(&repeat(&[(Visual, 7), (Auditory, 1)]));
        assert_eq!(profile.percentages.auditory, 13.0);
        assert_eq!(profile.percentages.visual, 88.0);
    }

    #[test]
    fn test_question_ids_are_not_validated() {
        let responses = vec![
            Response::new(99, Some(Auditory)),
            Response::new(99, Some(Auditory)),
            Response::new(0, Some(Visual)),
        ];
        let profile = calculate_profile(&responses);
        assert_eq!(profile.scores.auditory, 2);
        assert_eq!(profile.scores.visual, 1);
    }

    #[test]
    fn test_invariants_over_sheets() {
        let styles = [None, Some(Visual), Some(Auditory), Some(ReadWrite), Some(Kinesthetic)];
        for seed in 0..200usize {
            let responses = (0..16)
                .map(|index| styles[(seed * 7 + index * index * 3 + seed / 5) % styles.len()])
                .collect::<Vec<_>>();
            let responses = sheet(&responses);
            let profile = calculate_profile(&responses);
            let answered = responses.iter().filter(|r| r.style.is_some()).count() as u32;

            assert_eq!(profile.scores.total(), answered);
            for (style, percentage) in profile.percentages.iter() {
                let expected = if answered > 0 {
                    (profile.scores.get(style) as f64 / answered as f64 * 100.0).round()
                } else {
                    0.0
                };
                assert_eq!(percentage, expected);
            }
            assert!(!profile.dominant_styles.is_empty());
            assert!(profile.dominant_styles.len() <= 4);
            assert!(profile
                .recommendations
                .iter()
                .all(|set| set.percentage >= 25.0));
            assert!(profile
                .recommendations
                .windows(2)
                .all(|pair| pair[0].percentage >= pair[1].percentage));
            assert_eq!(profile, calculate_profile(&responses));
        }
    }

    #[test]
    fn test_learning_type_labels() {
        for label in [
            "Strong Visual",
            "Strong Read/Write",
            "Bimodal (A + K)",
            "Trimodal",
            "Multimodal (VARK)",
        ] {
            assert_eq!(label.parse::<LearningType>().unwrap().to_string(), label);
        }
        assert!("Bimodal (V)".parse::<LearningType>().is_err());
        assert!("Quadmodal".parse::<LearningType>().is_err());
    }

    #[test]
    fn test_profile_json() {
        let profile = calculate_profile(&repeat(&[(Visual, 8), (Auditory, 8)]));
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["scores"]["readWrite"], 0);
        assert_eq!(value["percentages"]["visual"], 50.0);
        assert_eq!(value["dominantStyles"][1], "auditory");
        assert_eq!(value["learningType"], "Bimodal (V + A)");
        assert_eq!(value["recommendations"][0]["style"], "Visual");
        assert_eq!(value["recommendations"][1]["style"], "Auditory");
        assert_eq!(
            value["recommendations"][0]["strategies"]["learning"]
                .as_array()
                .map(|a| a.len()),
            Some(5)
        );

        let parsed: Profile = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, profile);
    }
}
