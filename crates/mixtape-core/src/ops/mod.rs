pub mod playlist_ops;
pub mod song_ops;
pub mod store;
pub mod user_ops;

pub use store::Store;
