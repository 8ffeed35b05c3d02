pub use self::error::*;
pub use self::security_headers::*;
pub use self::sentry::*;

mod error;
mod security_headers;
mod sentry;
