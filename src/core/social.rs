//! Share and challenge texts. They are shown in a banner; nothing is sent.

use super::modes::GameMode;

pub fn share_message(score: u32, mode: GameMode) -> String {
    let mode = mode.name();
    match score {
        s if s > 30 => format!(
            "I just scored {s} points in {mode} mode on #FlyVibe! I'm unstoppable! Can you beat that?"
        ),
        s if s > 20 => format!("Just scored {s} in #FlyVibe {mode} mode! So addictive! Try to beat me."),
        s if s > 10 => format!(
            "Got {s} points in #FlyVibe {mode} mode. Not bad, but I know I can do better!"
        ),
        s => format!("This game is HARD! Only got {s} points in #FlyVibe {mode} mode. Can you do better?"),
    }
}

pub fn challenge_message(score: u32, mode: GameMode) -> String {
    format!(
        "I challenge you to beat my score of {score} in #FlyVibe {} mode!",
        mode.name()
    )
}

/// Rotating taglines for the start screen.
pub const TAGLINES: [&str; 6] = [
    "Just one more try... #FlyVibe",
    "3am and still flying. Send help! #FlyVibe",
    "My boss caught me playing #FlyVibe again...",
    "Relationship status: in love with #FlyVibe",
    "Harder than it looks! #FlyVibe",
    "This game should come with a warning label! #FlyVibe",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_message_tiers() {
        assert!(share_message(45, GameMode::Extreme).contains("unstoppable"));
        assert!(share_message(25, GameMode::Normal).contains("addictive"));
        assert!(share_message(11, GameMode::Normal).contains("Not bad"));
        assert!(share_message(10, GameMode::Normal).starts_with("This game is HARD"));
    }

    #[test]
    fn test_challenge_names_score_and_mode() {
        let text = challenge_message(17, GameMode::Stormy);
        assert!(text.contains("17"));
        assert!(text.contains("STORMY"));
    }
}
