//! Typed repositories over the document store.

pub mod session;
pub mod users;

pub use session::SessionRepository;
pub use users::UserRepository;
