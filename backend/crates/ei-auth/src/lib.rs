pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod password;
pub mod session;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::{JwtValidator, bearer_token};
pub use password::{hash_password, verify_password};
pub use session::Session;
