use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LearningStyle {
    #[serde(alias = "V")]
    Visual,
    #[serde(alias = "A")]
    Auditory,
    #[serde(alias = "R")]
    ReadWrite,
    #[serde(alias = "K")]
    Kinesthetic,
}

impl LearningStyle {
    /// V, A, R, K. Every per-style iteration in the crate follows this order.
    pub const ALL: [LearningStyle; 4] = [
        LearningStyle::Visual,
        LearningStyle::Auditory,
        LearningStyle::ReadWrite,
        LearningStyle::Kinesthetic,
    ];

    pub fn initial(self) -> char {
        match self {
            LearningStyle::Visual => 'V',
            LearningStyle::Auditory => 'A',
            LearningStyle::ReadWrite => 'R',
            LearningStyle::Kinesthetic => 'K',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LearningStyle::Visual => "Visual",
            LearningStyle::Auditory => "Auditory",
            LearningStyle::ReadWrite => "Read/Write",
            LearningStyle::Kinesthetic => "Kinesthetic",
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LearningStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v" | "visual" => Ok(LearningStyle::Visual),
            "a" | "auditory" => Ok(LearningStyle::Auditory),
            "r" | "read/write" | "readwrite" | "read_write" | "reading_writing" => {
                Ok(LearningStyle::ReadWrite)
            }
            "k" | "kinesthetic" => Ok(LearningStyle::Kinesthetic),
            _ => Err(Error::IllegalAnswer(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("V".parse::<LearningStyle>().unwrap(), LearningStyle::Visual);
        assert_eq!("a".parse::<LearningStyle>().unwrap(), LearningStyle::Auditory);
        assert_eq!(
            "Read/Write".parse::<LearningStyle>().unwrap(),
            LearningStyle::ReadWrite
        );
        assert_eq!(
            "reading_writing".parse::<LearningStyle>().unwrap(),
            LearningStyle::ReadWrite
        );
        assert_eq!(
            " Kinesthetic ".parse::<LearningStyle>().unwrap(),
            LearningStyle::Kinesthetic
        );
        assert!("x".parse::<LearningStyle>().is_err());
        assert!("".parse::<LearningStyle>().is_err());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&LearningStyle::ReadWrite).unwrap(),
            "\"readWrite\""
        );
        assert_eq!(
            serde_json::from_str::<LearningStyle>("\"K\"").unwrap(),
            LearningStyle::Kinesthetic
        );
        assert_eq!(
            serde_json::from_str::<LearningStyle>("\"visual\"").unwrap(),
            LearningStyle::Visual
        );
    }

    #[test]
    fn test_initials() {
        let initials: String = LearningStyle::ALL.iter().map(|s| s.initial()).collect();
        assert_eq!(initials, "VARK");
    }
}
