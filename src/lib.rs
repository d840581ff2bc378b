pub mod bitopro;
pub mod credentials;
pub mod error;
pub mod worth;

pub use bitopro::BitoPro;
pub use credentials::Credentials;
pub use error::WorthError;
pub use worth::{AssetValue, AssetWorth};
