//! Trait seams between the controller and its environment.
//!
//! Storage backends live in `quizhub-store`; the authenticator and the
//! confirmation prompt are supplied by whatever front end drives the app.

// ---------------------------------------------------------------------------
// Key-value storage
// ---------------------------------------------------------------------------

/// A persistent string-keyed store of text records.
pub trait KeyValueStore {
    /// Read the record under `key`, or `None` if nothing has been saved.
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Replace the record under `key`.
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set(key, value)
    }
}

// ---------------------------------------------------------------------------
// Admin authentication
// ---------------------------------------------------------------------------

/// Checks admin credentials.
pub trait Authenticator {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Fixed username/password pair compared in plaintext.
///
/// Note: this is a client-side check only and offers no real access control.
#[derive(Clone)]
pub struct StaticAuthenticator {
    username: String,
    password: String,
}

/// Built-in admin username.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Built-in admin password.
pub const DEFAULT_ADMIN_PASSWORD: &str = "Admin@123";

impl StaticAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
    }
}

impl std::fmt::Debug for StaticAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticAuthenticator")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Authenticator for StaticAuthenticator {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

// ---------------------------------------------------------------------------
// Interactive confirmation
// ---------------------------------------------------------------------------

/// Asks the acting user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_credentials() {
        let auth = StaticAuthenticator::default();
        assert!(auth.verify("admin", "Admin@123"));
        assert!(!auth.verify("admin", "admin@123"));
        assert!(!auth.verify("Admin", "Admin@123"));
        assert!(!auth.verify("", ""));
    }

    #[test]
    fn debug_masks_password() {
        let auth = StaticAuthenticator::new("root", "hunter2");
        let dbg = format!("{auth:?}");
        assert!(dbg.contains("root"));
        assert!(!dbg.contains("hunter2"));
    }

    #[test]
    fn closures_confirm() {
        let mut asked = Vec::new();
        let mut confirm = |msg: &str| {
            asked.push(msg.to_string());
            false
        };
        assert!(!Confirm::confirm(&mut confirm, "Delete?"));
        assert_eq!(asked, vec!["Delete?"]);
    }
}
