pub mod credentials;
pub(crate) mod extractors;
pub mod password;

pub use credentials::Credentials;
pub use extractors::AuthUser;
