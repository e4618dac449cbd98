pub mod config;
pub mod session;
pub mod store;

pub use config::AppConfig;
pub use session::{Session, Theme};
pub use store::{
    load_favorites, load_theme, save_favorites, save_theme, FileStore, KeyValueStore, MemoryStore,
    StoreError, FAVORITES_KEY, THEME_KEY,
};
