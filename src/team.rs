use serde::{Deserialize, Serialize};

use crate::{LearningStyle, Profile};

/// A team member and their assessment result, if they have completed one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    pub member_id: String,
    pub profile: Option<Profile>,
}

/// Number of members per primary style. Members without a single dominant
/// style are counted as multimodal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDistribution {
    pub visual: u32,
    pub auditory: u32,
    pub read_write: u32,
    pub kinesthetic: u32,
    pub multimodal: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub total: u32,
    pub completed: u32,
    /// Whole percent of members with a profile, 0 for an empty team.
    pub completion_rate: u32,
    pub distribution: StyleDistribution,
}

impl TeamSummary {
    pub fn from_members(members: &[MemberProfile]) -> Self {
        let mut distribution = StyleDistribution::default();
        let mut completed: u32 = 0;
        for profile in members.iter().filter_map(|member| member.profile.as_ref()) {
            completed += 1;
            match profile.primary_style() {
                Some(LearningStyle::Visual) => distribution.visual += 1,
                Some(LearningStyle::Auditory) => distribution.auditory += 1,
                Some(LearningStyle::ReadWrite) => distribution.read_write += 1,
                Some(LearningStyle::Kinesthetic) => distribution.kinesthetic += 1,
                None => distribution.multimodal += 1,
            }
        }
        let total = members.len() as u32;
        let completion_rate = if total > 0 {
            (completed as f64 / total as f64 * 100.0).round() as u32
        } else {
            0
        };
        Self {
            total,
            completed,
            completion_rate,
            distribution,
        }
    }
}
