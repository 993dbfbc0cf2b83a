//! Authentication session: restore at startup, login, logout.
//! The client owns the bearer token; the session owns the persisted `user`.

use crate::api::Backend;
use crate::client_log;
use crate::error::ClientError;
use crate::models::{LoginCredentials, User};
use crate::storage::{KeyValueStore, TOKEN_KEY, USER_KEY};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Cheap to clone; clones share the same state.
pub struct Session<B> {
    backend: Rc<B>,
    storage: Rc<dyn KeyValueStore>,
    state: Rc<RefCell<SessionState>>,
}

impl<B> Clone for Session<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Rc::clone(&self.backend),
            storage: Rc::clone(&self.storage),
            state: Rc::clone(&self.state),
        }
    }
}

impl<B: Backend> Session<B> {
    pub fn new(backend: Rc<B>, storage: Rc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            storage,
            state: Rc::new(RefCell::new(SessionState::default())),
        }
    }

    pub fn state(&self) -> Ref<'_, SessionState> {
        self.state.borrow()
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().user.is_some()
    }

    /// Picks up a previous login. A stored user that no longer parses clears the
    /// stored credential as well.
    pub fn restore(&self) -> Result<Option<User>, ClientError> {
        if self.storage.get(TOKEN_KEY)?.is_none() {
            return Ok(None);
        }
        let Some(raw) = self.storage.get(USER_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                client_log!(Info, "[bankdash] session restored user={}", user.username);
                self.state.borrow_mut().user = Some(user.clone());
                Ok(Some(user))
            }
            Err(e) => {
                client_log!(Warn, "[bankdash] session: stored user is invalid ({}), clearing", e);
                self.storage.remove(USER_KEY)?;
                self.backend.clear_token()?;
                Ok(None)
            }
        }
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> Result<User, ClientError> {
        {
            let mut s = self.state.borrow_mut();
            s.is_loading = true;
            s.error = None;
        }
        let result = self.login_inner(credentials).await;
        let mut s = self.state.borrow_mut();
        match &result {
            Ok(user) => s.user = Some(user.clone()),
            Err(e) => {
                client_log!(Warn, "[bankdash] session login failed: {}", e);
                s.error = Some(e.to_string());
            }
        }
        s.is_loading = false;
        result
    }

    async fn login_inner(&self, credentials: &LoginCredentials) -> Result<User, ClientError> {
        let response = self.backend.login(credentials).await?;
        let json = serde_json::to_string(&response.user)
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        self.storage.set(USER_KEY, &json)?;
        Ok(response.user)
    }

    pub fn logout(&self) -> Result<(), ClientError> {
        self.backend.clear_token()?;
        self.storage.remove(USER_KEY)?;
        let mut s = self.state.borrow_mut();
        s.user = None;
        s.error = None;
        client_log!(Info, "[bankdash] session logged out");
        Ok(())
    }
}
