//! Core data types.

mod api_url;
mod character;
mod filter;
mod page;

pub use api_url::{ApiUrl, DEFAULT_API_URL};
pub use character::{Character, Gender, Place, Status};
pub use filter::CharacterFilter;
pub use page::{Page, PageInfo};
