// Identity resolver - which subject this page load shows
use crate::domain::identity::{NavigationContext, SubjectId, USER_ID_KEY};

/// Key/value storage that survives page loads.
pub trait IdentityStore {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

pub struct IdentityResolver<S> {
    store: S,
}

impl<S: IdentityStore> IdentityResolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Navigation parameter wins over the stored value, which wins over the
    /// default. The result is always written back to the store.
    pub fn resolve(&self, navigation: &NavigationContext) -> SubjectId {
        let subject = match navigation.get(USER_ID_KEY) {
            Some(id) => SubjectId::new(id),
            None => self.stored().unwrap_or_default(),
        };

        if let Err(e) = self.store.save(USER_ID_KEY, subject.as_str()) {
            tracing::warn!(subject = %subject, error = %e, "failed to persist subject identifier");
        }

        tracing::info!(subject = %subject, "dashboard subject resolved");
        subject
    }

    fn stored(&self) -> Option<SubjectId> {
        match self.store.load(USER_ID_KEY) {
            Ok(value) => value.filter(|v| !v.is_empty()).map(SubjectId::new),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored subject identifier");
                None
            }
        }
    }
}
