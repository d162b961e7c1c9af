mod cookie;
mod log_in;
mod log_out;
mod middleware;
mod session;
mod user;

pub use cookie::{CookieSessionStorage, DEFAULT_COOKIE_DURATION};
pub use log_in::{get_index_page, post_demo_log_in, post_log_in, post_sign_up};
pub use log_out::get_log_out;
pub use middleware::{AuthState, auth_guard, auth_guard_hx};
pub use session::{
    AuthConfig, AuthOutcome, AuthRequest, DEFAULT_LOGIN_DELAY, MemorySessionStorage, PendingAuth,
    SessionManager, SessionState, SessionStorage,
};
pub use user::{DEMO_EMAIL, DEMO_PASSWORD, User};

#[cfg(test)]
pub(crate) use cookie::{COOKIE_USER, set_session_cookie};
