pub mod fetcher;
pub mod traits;

pub use fetcher::feed_from_location;
pub use traits::FeedSource;
