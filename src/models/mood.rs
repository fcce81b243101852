use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Mood levels in the order the picker shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Great,
    Good,
    Okay,
    Low,
    Struggling,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Great,
        Mood::Good,
        Mood::Okay,
        Mood::Low,
        Mood::Struggling,
    ];

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            5 => Some(Self::Great),
            4 => Some(Self::Good),
            3 => Some(Self::Okay),
            2 => Some(Self::Low),
            1 => Some(Self::Struggling),
            _ => None,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }

    pub fn value(self) -> i32 {
        match self {
            Self::Great => 5,
            Self::Good => 4,
            Self::Okay => 3,
            Self::Low => 2,
            Self::Struggling => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Okay => "Okay",
            Self::Low => "Low",
            Self::Struggling => "Struggling",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Great => "😊",
            Self::Good => "🙂",
            Self::Okay => "😐",
            Self::Low => "😟",
            Self::Struggling => "😢",
        }
    }
}

// Moods travel over the wire as their numeric level.
impl Serialize for Mood {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.value())
    }
}

impl<'de> Deserialize<'de> for Mood {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i32::deserialize(deserializer)?;
        Mood::from_value(value).ok_or_else(|| {
            serde::de::Error::custom(format!("mood must be between 1 and 5, got {}", value))
        })
    }
}

/// Self-reported day label. Not derived from the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Position in `Day::ALL`, Monday first.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown day: {0}")]
pub struct UnknownDay(pub String);

impl FromStr for Day {
    type Err = UnknownDay;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| UnknownDay(s.to_string()))
    }
}

#[derive(Debug, Serialize)]
pub struct MoodOption {
    pub value: i32,
    pub label: &'static str,
    pub emoji: &'static str,
}

/// Picker contents served to the widget.
#[derive(Debug, Serialize)]
pub struct Vocabulary {
    pub days: Vec<Day>,
    pub moods: Vec<MoodOption>,
}

impl Vocabulary {
    pub fn current() -> Self {
        Self {
            days: Day::ALL.to_vec(),
            moods: Mood::ALL
                .into_iter()
                .map(|m| MoodOption {
                    value: m.value(),
                    label: m.label(),
                    emoji: m.emoji(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_values_cover_one_to_five() {
        let mut values: Vec<i32> = Mood::ALL.iter().map(|m| m.value()).collect();
        values.sort();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        for m in Mood::ALL {
            assert_eq!(Mood::from_value(m.value()), Some(m));
            assert_eq!(Mood::from_label(m.label()), Some(m));
        }
    }

    #[test]
    fn test_mood_out_of_range() {
        assert_eq!(Mood::from_value(0), None);
        assert_eq!(Mood::from_value(6), None);
        assert_eq!(Mood::from_label("great"), None);
    }

    #[test]
    fn test_mood_serializes_as_level() {
        assert_eq!(serde_json::to_value(Mood::Great).unwrap(), serde_json::json!(5));
        let m: Mood = serde_json::from_value(serde_json::json!(1)).unwrap();
        assert_eq!(m, Mood::Struggling);
        assert!(serde_json::from_value::<Mood>(serde_json::json!(9)).is_err());
    }

    #[test]
    fn test_day_parse_is_exact() {
        assert_eq!("Friday".parse::<Day>().unwrap(), Day::Friday);
        assert!("friday".parse::<Day>().is_err());
        assert!("Funday".parse::<Day>().is_err());
        assert_eq!(Day::Sunday.index(), 6);
    }

    #[test]
    fn test_vocabulary_order() {
        let v = Vocabulary::current();
        assert_eq!(v.days.len(), 7);
        assert_eq!(v.days[0], Day::Monday);
        assert_eq!(v.moods[0].label, "Great");
        assert_eq!(v.moods[4].value, 1);
    }
}
