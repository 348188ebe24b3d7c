pub mod engineers;
pub mod feed;
pub mod products;
pub mod shops;

pub use engineers::EngineerFeed;
pub use feed::{PagedFeed, PAGE_SIZE};
pub use products::ProductFeed;
pub use shops::ShopFeed;
