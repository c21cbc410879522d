mod error;
mod session_user;
