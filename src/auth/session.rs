//! The session state machine.
//!
//! A session starts [SessionState::Unresolved] and becomes
//! [SessionState::Authenticated] or [SessionState::Anonymous] once the
//! persisted session has been read. Logging in or signing up is a two step
//! operation: [SessionManager::begin] hands out a [PendingAuth] that waits for
//! the simulated network delay, and [SessionManager::commit] applies the
//! result. Logging out in between invalidates the pending result.

use std::time::Duration;

use crate::{
    Error,
    auth::user::{DEMO_EMAIL, DEMO_PASSWORD, User},
};

/// How long the simulated authentication request takes by default.
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(1000);

/// Settings for the simulated authentication backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// The artificial delay before a log-in or sign-up completes.
    pub login_delay: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_delay: DEFAULT_LOGIN_DELAY,
        }
    }
}

/// Who, if anyone, is signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// The persisted session has not been read yet.
    Unresolved,
    /// Nobody is signed in.
    Anonymous,
    /// The user is signed in.
    Authenticated(User),
}

/// Where a session is persisted between requests.
pub trait SessionStorage {
    /// Read the persisted user. Missing, unreadable or expired values are `None`.
    fn load(&self) -> Option<User>;

    /// Persist `user`, replacing any previous session.
    ///
    /// # Errors
    ///
    /// Returns [Error::JSONSerializationError] if the user cannot be serialized.
    fn save(&mut self, user: &User) -> Result<(), Error>;

    /// Erase the persisted session.
    fn clear(&mut self);
}

/// Keeps the serialized session in memory, the way a browser keeps a value in
/// local storage.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStorage {
    value: Option<String>,
}

impl MemorySessionStorage {
    /// The serialized session, if any.
    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> Option<User> {
        let value = self.value.as_deref()?;

        serde_json::from_str(value)
            .inspect_err(|error| tracing::warn!("Discarding unreadable session: {error}"))
            .ok()
    }

    fn save(&mut self, user: &User) -> Result<(), Error> {
        let value = serde_json::to_string(user)
            .map_err(|error| Error::JSONSerializationError(error.to_string()))?;
        self.value = Some(value);

        Ok(())
    }

    fn clear(&mut self) {
        self.value = None;
    }
}

/// What the user asked the authentication backend to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    /// Only the demo credentials are accepted.
    LogIn {
        /// The address typed into the form.
        email: String,
        /// The password typed into the form.
        password: String,
    },
    /// Any name, email and password create an account.
    SignUp {
        /// The display name, must not be blank.
        name: String,
        /// Taken as given.
        email: String,
        /// Not checked.
        password: String,
    },
}

impl AuthRequest {
    fn verify(self) -> Result<User, Error> {
        match self {
            AuthRequest::LogIn { email, password } => {
                if email == DEMO_EMAIL && password == DEMO_PASSWORD {
                    Ok(User::demo())
                } else {
                    Err(Error::InvalidCredentials)
                }
            }
            AuthRequest::SignUp { name, email, .. } => Ok(User::from_sign_up(&name, &email)?),
        }
    }
}

/// An authentication request that has been started but not yet applied.
#[derive(Debug)]
#[must_use = "a pending log-in does nothing until it is resolved and committed"]
pub struct PendingAuth {
    request: AuthRequest,
    generation: u64,
    delay: Duration,
}

impl PendingAuth {
    /// Wait for the simulated backend and produce its answer.
    pub async fn resolve(self) -> AuthOutcome {
        tokio::time::sleep(self.delay).await;

        AuthOutcome {
            generation: self.generation,
            result: self.request.verify(),
        }
    }
}

/// The answer to a [PendingAuth], ready to be committed.
#[derive(Debug)]
pub struct AuthOutcome {
    generation: u64,
    result: Result<User, Error>,
}

/// Owns the session state and its persisted copy.
#[derive(Debug)]
pub struct SessionManager<S> {
    storage: S,
    state: SessionState,
    config: AuthConfig,
    /// Bumped by every log-out so that older pending requests cannot commit.
    generation: u64,
    pending: Option<u64>,
}

impl<S: SessionStorage> SessionManager<S> {
    /// An unresolved session persisted in `storage`.
    pub fn new(storage: S, config: AuthConfig) -> Self {
        Self {
            storage,
            state: SessionState::Unresolved,
            config,
            generation: 0,
            pending: None,
        }
    }

    /// Resolve the state from storage if that has not happened yet.
    pub fn restore(&mut self) -> &SessionState {
        if self.state == SessionState::Unresolved {
            self.state = match self.storage.load() {
                Some(user) => SessionState::Authenticated(user),
                None => SessionState::Anonymous,
            };
        }

        &self.state
    }

    /// The current state, without reading storage.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether navigation decisions must wait: the state is unresolved or an
    /// authentication request is in flight.
    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Unresolved || self.pending.is_some()
    }

    /// The signed in user, if any.
    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Start an authentication request.
    pub fn begin(&mut self, request: AuthRequest) -> PendingAuth {
        self.pending = Some(self.generation);

        PendingAuth {
            request,
            generation: self.generation,
            delay: self.config.login_delay,
        }
    }

    /// Apply the result of a request started with [SessionManager::begin].
    ///
    /// On success the user is persisted and the session becomes authenticated.
    ///
    /// # Errors
    ///
    /// - [Error::SessionSuperseded] if the session was logged out after the
    ///   request started. The state is left untouched.
    /// - [Error::InvalidCredentials] or [Error::Validation] if the backend
    ///   rejected the request. A failed request never leaves the session
    ///   unresolved.
    /// - [Error::JSONSerializationError] if the session could not be persisted.
    pub fn commit(&mut self, outcome: AuthOutcome) -> Result<User, Error> {
        if outcome.generation != self.generation {
            tracing::warn!("Discarding authentication result from a superseded session");
            return Err(Error::SessionSuperseded);
        }

        self.pending = None;
        self.restore();

        let user = outcome.result?;
        self.storage.save(&user)?;
        self.state = SessionState::Authenticated(user.clone());

        Ok(user)
    }

    /// Log in with an email and password, waiting for the simulated backend.
    ///
    /// # Errors
    ///
    /// See [SessionManager::commit].
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, Error> {
        let pending = self.begin(AuthRequest::LogIn {
            email: email.to_owned(),
            password: password.to_owned(),
        });

        self.commit(pending.resolve().await)
    }

    /// Create an account and log in as it.
    ///
    /// # Errors
    ///
    /// See [SessionManager::commit].
    pub async fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<User, Error> {
        let pending = self.begin(AuthRequest::SignUp {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        });

        self.commit(pending.resolve().await)
    }

    /// End the session and erase the persisted copy. Always succeeds.
    pub fn logout(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.storage.clear();
        self.state = SessionState::Anonymous;
    }

    /// The backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage, e.g. to return a cookie jar in a response.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
