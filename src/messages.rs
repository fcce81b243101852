//! Canned copy shown after a mood is logged, keyed by (day, mood).

use serde::Serialize;

use crate::models::mood::{Day, Mood};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Message {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Rows follow `Day::ALL`; columns are mood levels 1 through 5.
pub struct MessageTable {
    rows: [[Message; 5]; 7],
}

impl MessageTable {
    /// Total over the vocabulary: every (day, mood) pair has a message.
    pub fn lookup(&self, day: Day, mood: Mood) -> Message {
        self.rows[day.index()][(mood.value() - 1) as usize]
    }
}

pub static CURATED: MessageTable = MessageTable {
    rows: [
        // Monday
        [
            // 1
            Message {
                heading: "Be Extra Kind Today 🤍",
                body: "Struggling on a Monday is tough. Please remember you don't have to carry it all. Be gentle with yourself and know that showing up today is enough.",
            },
            // 2
            Message {
                heading: "Gently Navigating Monday ☁️",
                body: "Feeling a bit 'Low' on a Monday is completely understandable. The start of the week can be heavy. Take things one step at a time today.",
            },
            // 3
            Message {
                heading: "Finding Your Monday Flow 🌊",
                body: "An 'Okay' Monday is a win. You're showing up and easing into the week. Give yourself grace as you find your rhythm today.",
            },
            // 4
            Message {
                heading: "Steady and Strong Monday! ☀️",
                body: "You're starting the week on a 'Good' note. That's a solid foundation. Keep this positive momentum going as you navigate your Monday tasks.",
            },
            // 5
            Message {
                heading: "Unstoppable Monday Energy! 🚀",
                body: "Starting the week with a 'Great' mood is a superpower. You've set an incredible tone that will ripple through your entire week. Use this momentum to tackle your biggest goals today!",
            },
        ],
        // Tuesday
        [
            // 1
            Message {
                heading: "Sending You Strength 🫂",
                body: "Struggling on a Tuesday can feel isolating, but you're not alone. Reach out if you need to, and prioritize your peace above all else today.",
            },
            // 2
            Message {
                heading: "Patience with Yourself today 🌿",
                body: "If Tuesday feels a bit 'Low', remember that progress isn't always linear. Listen to what your body and mind need right now.",
            },
            // 3
            Message {
                heading: "Tuesday Tranquility 🍃",
                body: "An 'Okay' Tuesday is perfectly fine. You're keeping a steady pace. Take a moment to appreciate the small wins today.",
            },
            // 4
            Message {
                heading: "Tuesday's Looking Bright 🌤️",
                body: "A 'Good' mood today is a gift. You're past the Monday hump and maintaining a positive outlook. Enjoy this steady energy!",
            },
            // 5
            Message {
                heading: "Tuesday Triumph! ✨",
                body: "You're absolutely thriving today! Carrying that 'Great' energy into Tuesday means you're building real momentum. Keep shining!",
            },
        ],
        // Wednesday
        [
            // 1
            Message {
                heading: "You're Not Alone Today 💜",
                body: "Struggling in the middle of the week is hard. Give yourself permission to slow down. The weekend will be here before you know it.",
            },
            // 2
            Message {
                heading: "Midweek Softness ☁️",
                body: "If Wednesday feels 'Low', try to find one tiny thing to look forward to this evening. You've worked hard this week; it's okay to feel tired.",
            },
            // 3
            Message {
                heading: "Midweek Balance ⚖️",
                body: "An 'Okay' Wednesday is a steady anchor. You're balanced and moving forward. Take a deep breath — you're halfway there.",
            },
            // 4
            Message {
                heading: "Hump Day Happiness 🐫",
                body: "You've made it to Wednesday with a 'Good' vibe. The weekend is coming into view! Keep that positive spirit as you cross the midweek line.",
            },
            // 5
            Message {
                heading: "Midweek Masterclass! 🏅",
                body: "Halfway through the week and feeling 'Great'! You're crushing it. Use this mid-week peak to do something that makes you truly happy.",
            },
        ],
        // Thursday
        [
            // 1
            Message {
                heading: "Gentle Thursday Hug 🧸",
                body: "Struggling on a Thursday is a sign the week has been long. Be your own best friend today. You're almost at the weekend finish line.",
            },
            // 2
            Message {
                heading: "Thursday Reflection 🍂",
                body: "If you're feeling 'Low' today, look back at how much you've already accomplished this week. You've come so far; it's okay to be weary.",
            },
            // 3
            Message {
                heading: "Steady into Thursday 🕰️",
                body: "An 'Okay' Thursday is a job well done. You've put in the work all week. Just a little further to go — keep that steady pace.",
            },
            // 4
            Message {
                heading: "Almost There, Thursday! 🌅",
                body: "A 'Good' Thursday sets you up for a fantastic weekend. You can feel the finish line! Keep that smile going through today's finish.",
            },
            // 5
            Message {
                heading: "Thursday Thrill! 🎡",
                body: "Feeling 'Great' with the weekend so close? That's the best! Finish your week strong with this incredible burst of energy.",
            },
        ],
        // Friday
        [
            // 1
            Message {
                heading: "Healing Friday Energy ✨",
                body: "Struggling as the week ends is a lot to handle. Be proud of yourself for making it to Friday. This weekend is for your recovery.",
            },
            // 2
            Message {
                heading: "Friday Release 🌊",
                body: "If Friday feels 'Low', let yourself sink into rest tonight. You've carried a lot this week. It's time to put the heavy things down.",
            },
            // 3
            Message {
                heading: "Friday Ease 😌",
                body: "An 'Okay' Friday means you've made it through. The pressure is lifting. Take tonight to unwind and let go of the week's stress.",
            },
            // 4
            Message {
                heading: "Friday Feeling Good! 🎊",
                body: "A 'Good' Friday is the perfect bridge to the weekend. You've navigated the week successfully. Enjoy the transition into your time.",
            },
            // 5
            Message {
                heading: "Fantastic Friday! 🥳",
                body: "Closing the week in a 'Great' mood — what a victory! You've earned this joy. Let the weekend celebrations begin with this spark!",
            },
        ],
        // Saturday
        [
            // 1
            Message {
                heading: "Comforting Saturday 🕯️",
                body: "Struggling on a weekend can feel extra hard. Please be gentle with your heart today. There's no right way to feel, even on a Saturday.",
            },
            // 2
            Message {
                heading: "Saturday Softness 💤",
                body: "If Saturday feels 'Low', don't feel pressured to 'do the weekend'. If you need to stay in and rest, that is a perfectly valid choice.",
            },
            // 3
            Message {
                heading: "Simple Saturday 🍵",
                body: "An 'Okay' Saturday is a peaceful plateau. No rush, no pressure. Just existing is enough today. Enjoy the quiet moments.",
            },
            // 4
            Message {
                heading: "Serene Saturday 🏖️",
                body: "Feeling 'Good' on your day off is a blessing. Whether you're active or resting, enjoy every moment of this positive weekend vibe.",
            },
            // 5
            Message {
                heading: "Saturday Splendor! 🌈",
                body: "A 'Great' Saturday is pure magic. This is your time to shine and enjoy the freedom of the weekend. Make some beautiful memories today!",
            },
        ],
        // Sunday
        [
            // 1
            Message {
                heading: "Sunday Self-Care 💖",
                body: "Struggling on a Sunday is more common than you think. Treat yourself with extreme tenderness today. You are worth the extra care.",
            },
            // 2
            Message {
                heading: "Sunday Scaries, Begone 🌙",
                body: "If Sunday feels 'Low', try to focus on the present moment rather than tomorrow's work. You are safe and supported right now.",
            },
            // 3
            Message {
                heading: "Sunday Settling 🍂",
                body: "An 'Okay' Sunday is a perfect time for reflection and prep. You're steady and ready for whatever comes next. Stay grounded.",
            },
            // 4
            Message {
                heading: "Gentle Sunday Vibes 🕊️",
                body: "Feeling 'Good' today sets a peaceful tone for the week ahead. Enjoy the last bit of the weekend with a grateful heart.",
            },
            // 5
            Message {
                heading: "Sunday Sunshine! 🌻",
                body: "A 'Great' Sunday is the ultimate recharge. You're heading into next week with a full heart. Savor this beautiful energy today!",
            },
        ],
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_pair_has_copy() {
        let mut headings = HashSet::new();
        for day in Day::ALL {
            for mood in Mood::ALL {
                let msg = CURATED.lookup(day, mood);
                assert!(!msg.heading.is_empty(), "{} / {} heading", day, mood.label());
                assert!(!msg.body.is_empty(), "{} / {} body", day, mood.label());
                headings.insert(msg.heading);
            }
        }
        assert_eq!(headings.len(), 35);
    }

    #[test]
    fn test_lookup_uses_mood_level_not_picker_position() {
        assert_eq!(
            CURATED.lookup(Day::Friday, Mood::Great).heading,
            "Fantastic Friday! 🥳"
        );
        assert_eq!(
            CURATED.lookup(Day::Monday, Mood::Struggling).heading,
            "Be Extra Kind Today 🤍"
        );
        assert!(CURATED.lookup(Day::Wednesday, Mood::Low).body.contains("'Low'"));
    }
}
