mod page;

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::FetchError;

pub use page::scrape;

/// Placeholder shown for a field the profile owner keeps private.
pub const UNDISCLOSED: &str = "hidden";
/// Appended to the display name of a profile that hides everything else.
pub const HIDDEN_MARKER: &str = "(hidden profile)";

/// A single value of a snapshot, either scraped or withheld by the
/// profile's privacy settings.
#[derive(Eq, PartialEq, Clone, Debug, Deserialize, Serialize)]
pub enum Field {
    Value(String),
    Undisclosed,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Value(value) => f.write_str(value),
            Field::Undisclosed => f.write_str(UNDISCLOSED),
        }
    }
}

/// Raw text pulled out of a profile page. An empty string means the
/// selector matched nothing.
#[derive(Eq, PartialEq, Clone, Debug, Default)]
pub struct ScrapedFields {
    pub name: String,
    pub friends: String,
    pub level: String,
    pub avatar: String,
    pub games: String,
    pub groups: String,
    pub badges: String,
}

impl ScrapedFields {
    /// Decide which of the outcomes the page represents.
    ///
    /// Rules are checked in order: no name and no level is a failure,
    /// a name without a level is a hidden profile, a missing friend
    /// count hides only the friends, anything else is fully visible.
    pub fn classify(
        self,
        source: Url,
    ) -> std::result::Result<ProfileSnapshot, FetchError> {
        let profile = match (
            self.name.is_empty(),
            self.level.is_empty(),
            self.friends.is_empty(),
        ) {
            (true, true, _) => return Err(FetchError::FetchFailed),
            (false, true, _) => Profile::Hidden {
                name: self.name,
                avatar: self.avatar,
            },
            (false, false, true) => Profile::PartiallyHidden {
                name: self.name,
                level: self.level,
                avatar: self.avatar,
                games: self.games,
                groups: self.groups,
                badges: self.badges,
            },
            // A level without a name is shown as scraped, empty fields and all.
            (_, false, _) => Profile::FullyVisible {
                name: self.name,
                friends: self.friends,
                level: self.level,
                avatar: self.avatar,
                games: self.games,
                groups: self.groups,
                badges: self.badges,
            },
        };
        Ok(ProfileSnapshot { source, profile })
    }
}

/// What a successful lookup found, by visibility.
#[derive(Eq, PartialEq, Clone, Debug, Deserialize, Serialize)]
pub enum Profile {
    FullyVisible {
        name: String,
        friends: String,
        level: String,
        avatar: String,
        games: String,
        groups: String,
        badges: String,
    },
    PartiallyHidden {
        name: String,
        level: String,
        avatar: String,
        games: String,
        groups: String,
        badges: String,
    },
    Hidden {
        name: String,
        avatar: String,
    },
}

#[derive(Eq, PartialEq, Clone, Copy, Debug, Deserialize, Serialize)]
pub enum Visibility {
    FullyVisible,
    PartiallyHidden,
    Hidden,
}

impl Profile {
    pub fn visibility(&self) -> Visibility {
        match self {
            Profile::FullyVisible { .. } => Visibility::FullyVisible,
            Profile::PartiallyHidden { .. } => Visibility::PartiallyHidden,
            Profile::Hidden { .. } => Visibility::Hidden,
        }
    }
}

#[derive(Eq, PartialEq, Clone, Debug, Deserialize, Serialize)]
pub struct ProfileSnapshot {
    /// Page the snapshot was scraped from
    pub source: Url,
    pub profile: Profile,
}

/// Flat, render-ready strings for one snapshot.
#[derive(Eq, PartialEq, Clone, Debug, Deserialize, Serialize)]
pub struct DisplayFields {
    pub visibility: Visibility,
    pub name: String,
    pub friends: Field,
    pub level: Field,
    pub avatar: String,
    pub games: Field,
    pub groups: Field,
    pub badges: Field,
    pub source: Url,
}

impl ProfileSnapshot {
    pub fn visibility(&self) -> Visibility {
        self.profile.visibility()
    }

    pub fn fields(&self) -> DisplayFields {
        let value = |s: &String| Field::Value(s.clone());
        let source = self.source.clone();
        let visibility = self.visibility();
        match &self.profile {
            Profile::FullyVisible {
                name,
                friends,
                level,
                avatar,
                games,
                groups,
                badges,
            } => DisplayFields {
                visibility,
                name: name.clone(),
                friends: value(friends),
                level: value(level),
                avatar: avatar.clone(),
                games: value(games),
                groups: value(groups),
                badges: value(badges),
                source,
            },
            Profile::PartiallyHidden {
                name,
                level,
                avatar,
                games,
                groups,
                badges,
            } => DisplayFields {
                visibility,
                name: name.clone(),
                friends: Field::Undisclosed,
                level: value(level),
                avatar: avatar.clone(),
                games: value(games),
                groups: value(groups),
                badges: value(badges),
                source,
            },
            Profile::Hidden { name, avatar } => DisplayFields {
                visibility,
                name: format!("{} {}", name, HIDDEN_MARKER),
                friends: Field::Undisclosed,
                level: Field::Undisclosed,
                avatar: avatar.clone(),
                games: Field::Undisclosed,
                groups: Field::Undisclosed,
                badges: Field::Undisclosed,
                source,
            },
        }
    }
}
