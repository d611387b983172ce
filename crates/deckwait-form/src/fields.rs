//! Field vocabulary for the waitlist form
//!
//! Every choice field is an enumerated tag set:
//! - a stable wire tag (`as_str`) used in payloads and error maps
//! - a human-readable label used by whatever surface renders the form
//! - an ordered `OPTIONS` descriptor list driving checkbox/radio groups
//!
//! Multi-select membership is manipulated through the pure [`toggle`]
//! function rather than ad-hoc set mutation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Toggle membership of `tag` in `set`
///
/// Pure function: returns the updated set. Inserting an absent tag adds it,
/// toggling a present tag removes it.
#[inline]
#[must_use]
pub fn toggle<T: Ord>(mut set: BTreeSet<T>, tag: T) -> BTreeSet<T> {
    if !set.remove(&tag) {
        set.insert(tag);
    }
    set
}

/// Age bracket of the respondent
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AgeGroup {
    /// Younger than 18
    #[serde(rename = "under-18")]
    Under18,
    /// 18 to 24
    #[serde(rename = "18-24")]
    From18To24,
    /// 25 to 34
    #[serde(rename = "25-34")]
    From25To34,
    /// 35 to 44
    #[serde(rename = "35-44")]
    From35To44,
    /// 45 and older
    #[serde(rename = "45+")]
    From45Up,
}

impl AgeGroup {
    /// Ordered option descriptors for rendering the bracket radio group
    pub const OPTIONS: &'static [(Self, &'static str)] = &[
        (Self::Under18, "Under 18"),
        (Self::From18To24, "18-24"),
        (Self::From25To34, "25-34"),
        (Self::From35To44, "35-44"),
        (Self::From45Up, "45 and up"),
    ];

    /// Stable wire tag
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Under18 => "under-18",
            Self::From18To24 => "18-24",
            Self::From25To34 => "25-34",
            Self::From35To44 => "35-44",
            Self::From45Up => "45+",
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform the respondent games on
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Platform {
    /// iPhone / iPad
    #[serde(rename = "ios")]
    Ios,
    /// Android phone or tablet
    #[serde(rename = "android")]
    Android,
    /// Desktop / laptop
    #[serde(rename = "pc")]
    Pc,
    /// Dedicated console
    #[serde(rename = "console")]
    Console,
}

impl Platform {
    /// Ordered option descriptors for the platform checkbox group
    pub const OPTIONS: &'static [(Self, &'static str)] = &[
        (Self::Ios, "iOS"),
        (Self::Android, "Android"),
        (Self::Pc, "PC"),
        (Self::Console, "Console"),
    ];

    /// Stable wire tag
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Pc => "pc",
            Self::Console => "console",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often the respondent plays
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PlayFrequency {
    /// Every day
    #[serde(rename = "daily")]
    Daily,
    /// Several times a week
    #[serde(rename = "few-times-week")]
    FewTimesAWeek,
    /// About once a week
    #[serde(rename = "weekly")]
    Weekly,
    /// Now and then
    #[serde(rename = "occasionally")]
    Occasionally,
    /// Almost never
    #[serde(rename = "rarely")]
    Rarely,
}

impl PlayFrequency {
    /// Ordered option descriptors for the frequency radio group
    pub const OPTIONS: &'static [(Self, &'static str)] = &[
        (Self::Daily, "Every day"),
        (Self::FewTimesAWeek, "A few times a week"),
        (Self::Weekly, "Once a week"),
        (Self::Occasionally, "Occasionally"),
        (Self::Rarely, "Rarely"),
    ];

    /// Stable wire tag
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::FewTimesAWeek => "few-times-week",
            Self::Weekly => "weekly",
            Self::Occasionally => "occasionally",
            Self::Rarely => "rarely",
        }
    }
}

impl std::fmt::Display for PlayFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card games the respondent has played recently
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum GameTag {
    #[serde(rename = "solitaire")]
    Solitaire,
    #[serde(rename = "uno")]
    Uno,
    #[serde(rename = "poker")]
    Poker,
    #[serde(rename = "rummy")]
    Rummy,
    #[serde(rename = "hearthstone")]
    Hearthstone,
    #[serde(rename = "exploding-kittens")]
    ExplodingKittens,
}

impl GameTag {
    /// Ordered option descriptors for the recent-games checkbox group
    pub const OPTIONS: &'static [(Self, &'static str)] = &[
        (Self::Solitaire, "Solitaire"),
        (Self::Uno, "UNO"),
        (Self::Poker, "Poker"),
        (Self::Rummy, "Rummy"),
        (Self::Hearthstone, "Hearthstone"),
        (Self::ExplodingKittens, "Exploding Kittens"),
    ];

    /// Stable wire tag
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solitaire => "solitaire",
            Self::Uno => "uno",
            Self::Poker => "poker",
            Self::Rummy => "rummy",
            Self::Hearthstone => "hearthstone",
            Self::ExplodingKittens => "exploding-kittens",
        }
    }
}

impl std::fmt::Display for GameTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What keeps the respondent coming back to a game
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RetentionFactor {
    #[serde(rename = "daily-rewards")]
    DailyRewards,
    #[serde(rename = "new-content")]
    NewContent,
    #[serde(rename = "friends")]
    PlayingWithFriends,
    #[serde(rename = "tournaments")]
    Tournaments,
    #[serde(rename = "progression")]
    Progression,
}

impl RetentionFactor {
    /// Ordered option descriptors for the retention checkbox group
    pub const OPTIONS: &'static [(Self, &'static str)] = &[
        (Self::DailyRewards, "Daily rewards"),
        (Self::NewContent, "Regular new content"),
        (Self::PlayingWithFriends, "Playing with friends"),
        (Self::Tournaments, "Tournaments and events"),
        (Self::Progression, "Levels and progression"),
    ];

    /// Stable wire tag
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DailyRewards => "daily-rewards",
            Self::NewContent => "new-content",
            Self::PlayingWithFriends => "friends",
            Self::Tournaments => "tournaments",
            Self::Progression => "progression",
        }
    }
}

impl std::fmt::Display for RetentionFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Features the respondent wants in the product
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum DesiredFeature {
    #[serde(rename = "offline-mode")]
    OfflineMode,
    #[serde(rename = "multiplayer")]
    Multiplayer,
    #[serde(rename = "tournaments")]
    Tournaments,
    #[serde(rename = "customization")]
    Customization,
    #[serde(rename = "chat")]
    Chat,
}

impl DesiredFeature {
    /// Ordered option descriptors for the features checkbox group
    pub const OPTIONS: &'static [(Self, &'static str)] = &[
        (Self::OfflineMode, "Offline mode"),
        (Self::Multiplayer, "Online multiplayer"),
        (Self::Tournaments, "Tournaments"),
        (Self::Customization, "Card and table customization"),
        (Self::Chat, "In-game chat"),
    ];

    /// Stable wire tag
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OfflineMode => "offline-mode",
            Self::Multiplayer => "multiplayer",
            Self::Tournaments => "tournaments",
            Self::Customization => "customization",
            Self::Chat => "chat",
        }
    }
}

impl std::fmt::Display for DesiredFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channel over which the respondent wants to be contacted
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ContactChannel {
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "sms")]
    Sms,
    #[serde(rename = "whatsapp")]
    WhatsApp,
}

impl ContactChannel {
    /// Ordered option descriptors for the contact checkbox group
    pub const OPTIONS: &'static [(Self, &'static str)] = &[
        (Self::Email, "Email"),
        (Self::Sms, "SMS"),
        (Self::WhatsApp, "WhatsApp"),
    ];

    /// Stable wire tag
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
            Self::WhatsApp => "whatsapp",
        }
    }
}

impl std::fmt::Display for ContactChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Willingness to refer a friend
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Referral {
    #[serde(rename = "yes")]
    Yes,
    #[serde(rename = "no")]
    No,
    #[serde(rename = "maybe")]
    Maybe,
}

impl Referral {
    /// Ordered option descriptors for the referral radio group
    pub const OPTIONS: &'static [(Self, &'static str)] = &[
        (Self::Yes, "Yes"),
        (Self::No, "No"),
        (Self::Maybe, "Maybe"),
    ];

    /// Stable wire tag
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Maybe => "maybe",
        }
    }
}

impl std::fmt::Display for Referral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_absent_tag() {
        let set = BTreeSet::new();
        let set = toggle(set, Platform::Ios);
        assert!(set.contains(&Platform::Ios));
    }

    #[test]
    fn toggle_removes_present_tag() {
        let set = toggle(BTreeSet::new(), Platform::Ios);
        let set = toggle(set, Platform::Ios);
        assert!(set.is_empty());
    }

    #[test]
    fn toggle_is_involutive() {
        let original: BTreeSet<_> = [ContactChannel::Email, ContactChannel::Sms].into();
        let twice = toggle(toggle(original.clone(), ContactChannel::WhatsApp), ContactChannel::WhatsApp);
        assert_eq!(original, twice);
    }

    #[test]
    fn age_group_wire_tags() {
        assert_eq!(AgeGroup::Under18.as_str(), "under-18");
        assert_eq!(AgeGroup::From45Up.as_str(), "45+");
    }

    #[test]
    fn option_lists_match_wire_tags() {
        // Descriptor order drives rendering and payload join order alike.
        assert_eq!(Platform::OPTIONS.len(), 4);
        assert_eq!(Platform::OPTIONS[0].0.as_str(), "ios");
        assert_eq!(ContactChannel::OPTIONS[2].1, "WhatsApp");
    }

    #[test]
    fn serde_round_trip_uses_tags() {
        let json = serde_json::to_string(&PlayFrequency::FewTimesAWeek).unwrap();
        assert_eq!(json, "\"few-times-week\"");
        let back: PlayFrequency = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PlayFrequency::FewTimesAWeek);
    }
}
