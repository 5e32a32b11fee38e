mod session;

pub use session::MAX_PENDING_LOGINS;
pub use session::PENDING_LOGIN_TTL;
pub use session::SessionManager;
