pub mod error;
pub mod outreach;
pub mod password_reset;

pub use error::ErrorResponse;
pub use outreach::*;
pub use password_reset::*;
