//! `ecorp-auth` — role selection and the login session.
//!
//! There is no credential check: logging in means picking a role. The session
//! is an explicit value owned by the shell and lent to whoever needs the
//! current user.

pub mod roles;
pub mod session;
pub mod user;

pub use roles::Role;
pub use session::{Session, SessionError};
pub use user::User;
