//! Mood scale definitions
//!
//! The five-point mood scale is an exhaustive sum type so that every
//! mood-to-label/color/advice lookup is total; no call site can index
//! past the table.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One step on the 1-5 daily mood scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mood {
    /// 1 - worst
    Rough,
    /// 2
    Meh,
    /// 3
    Fine,
    /// 4
    Great,
    /// 5 - best
    Peak,
}

impl Mood {
    /// All moods in ascending order
    pub const ALL: [Mood; 5] = [Mood::Rough, Mood::Meh, Mood::Fine, Mood::Great, Mood::Peak];

    /// Numeric value on the 1-5 scale
    pub fn value(&self) -> u8 {
        match self {
            Mood::Rough => 1,
            Mood::Meh => 2,
            Mood::Fine => 3,
            Mood::Great => 4,
            Mood::Peak => 5,
        }
    }

    /// Exact conversion from a 1-5 value
    pub fn from_value(value: u8) -> Option<Mood> {
        match value {
            1 => Some(Mood::Rough),
            2 => Some(Mood::Meh),
            3 => Some(Mood::Fine),
            4 => Some(Mood::Great),
            5 => Some(Mood::Peak),
            _ => None,
        }
    }

    /// Lossy conversion clamping out-of-range values to the nearest bound.
    /// Used when reading persisted data that may have been edited or
    /// corrupted outside the application.
    pub fn clamped(value: i64) -> Mood {
        match value {
            i64::MIN..=1 => Mood::Rough,
            2 => Mood::Meh,
            3 => Mood::Fine,
            4 => Mood::Great,
            _ => Mood::Peak,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Rough => "Rough",
            Mood::Meh => "Meh",
            Mood::Fine => "Fine",
            Mood::Great => "Great",
            Mood::Peak => "Peak",
        }
    }

    /// Emoji used in calendar cells and history lines
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Rough => "😢",
            Mood::Meh => "😔",
            Mood::Fine => "😐",
            Mood::Great => "😊",
            Mood::Peak => "😄",
        }
    }

    /// Hex color associated with this mood
    pub fn color(&self) -> &'static str {
        match self {
            Mood::Rough => "#f87171",
            Mood::Meh => "#fb923c",
            Mood::Fine => "#fbbf24",
            Mood::Great => "#34d399",
            Mood::Peak => "#10b981",
        }
    }

    /// Journal prompt shown when logging this mood
    pub fn journal_prompt(&self) -> &'static str {
        match self {
            Mood::Rough => "What's bringing you down right now?",
            Mood::Meh => "What's making you sad today?",
            Mood::Fine => "How are you feeling and why?",
            Mood::Great => "What's making you happy today?",
            Mood::Peak => "What's bringing you so much joy?",
        }
    }

    /// Advice lines for this mood; one is snapshotted into each saved entry
    pub fn advice(&self) -> &'static [&'static str] {
        match self {
            Mood::Rough => &[
                "Take deep breaths and remember this feeling will pass",
                "Reach out to someone you trust and talk about your feelings",
                "Try gentle movement like stretching or a short walk",
                "Practice self-compassion - treat yourself like a good friend would",
                "Consider professional support if these feelings persist",
                "Create a cozy, safe space for yourself right now",
            ],
            Mood::Meh => &[
                "Go for a walk outside and get some fresh air",
                "Make your bed and tidy up your immediate space",
                "Listen to music that comforts you",
                "Do something creative, even if it's just doodling",
                "Call a friend or family member for connection",
                "Take a warm shower or bath to reset your energy",
            ],
            Mood::Fine => &[
                "Set a small, achievable goal for today",
                "Practice gratitude by writing down 3 good things",
                "Try a new activity or hobby you've been curious about",
                "Take time to reflect on what you need right now",
                "Go for a walk and observe your surroundings mindfully",
                "Do something kind for someone else",
            ],
            Mood::Great => &[
                "Share your good mood with someone you care about",
                "Capture this moment with a photo or journal entry",
                "Use this energy to tackle something you've been putting off",
                "Try something new while you're feeling confident",
                "Help someone else - spread the positive energy",
                "Take time to appreciate what's going well in your life",
            ],
            Mood::Peak => &[
                "Celebrate this feeling - you deserve it!",
                "Plan something fun for your future self to look forward to",
                "Share your joy - call someone and spread the happiness",
                "Document what led to this feeling so you can recreate it",
                "Use this high energy for a meaningful project or goal",
                "Practice gratitude for this moment of pure joy",
            ],
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Mood {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

impl<'de> Deserialize<'de> for Mood {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // Persisted data may hold out-of-range values written by older
        // builds or external edits; clamp rather than fail the whole read.
        let value = i64::deserialize(deserializer)?;
        Ok(Mood::clamped(value))
    }
}
