use std::fmt;

/// The three kinds of entity owned by the store
///
/// Used to label identifiers in errors and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Song,
    Playlist,
}

impl EntityKind {
    /// Lower-case name, as used mid-sentence ("Duplicate user ID 3")
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Song => "song",
            EntityKind::Playlist => "playlist",
        }
    }

    /// Capitalized name, as used at the start of a message ("User ID x is invalid")
    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::User => "User",
            EntityKind::Song => "Song",
            EntityKind::Playlist => "Playlist",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
