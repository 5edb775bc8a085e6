pub mod banners;
pub mod images;
pub mod suggestions;

// Re-exports
pub use banners::{Banner, BannerFields};
pub use images::ImageResult;
pub use suggestions::Suggestions;
