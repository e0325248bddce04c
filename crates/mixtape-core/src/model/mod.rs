pub mod change;
pub mod entity;
pub mod playlist;
pub mod song;
pub mod user;

pub use change::Change;
pub use entity::EntityKind;
pub use playlist::Playlist;
pub use song::Song;
pub use user::User;
