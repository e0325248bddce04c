/// The four input collections, in ingestion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Songs,
    Playlists,
    Changes,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Users,
        Collection::Songs,
        Collection::Playlists,
        Collection::Changes,
    ];

    /// File name relative to the source root
    pub fn file_name(&self) -> &'static str {
        match self {
            Collection::Users => "users.json",
            Collection::Songs => "songs.json",
            Collection::Playlists => "playLists.json",
            Collection::Changes => "changes.json",
        }
    }

    /// Capitalized plural used in progress and summary lines
    pub fn label(&self) -> &'static str {
        match self {
            Collection::Users => "Users",
            Collection::Songs => "Songs",
            Collection::Playlists => "Playlists",
            Collection::Changes => "Changes",
        }
    }

    /// Operation name used in log fields
    pub fn op_name(&self) -> &'static str {
        match self {
            Collection::Users => "ingest_users",
            Collection::Songs => "ingest_songs",
            Collection::Playlists => "ingest_playlists",
            Collection::Changes => "ingest_changes",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}
