//! Example Registry: ordered name -> example mapping
//!
//! Names are unique. Registering a name that already exists replaces the
//! example but keeps the entry at its original position, so `list()` order
//! is always first-registration order.
use crate::error::{HarnessError, HarnessResult};
use crate::example::Example;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
pub struct Registry {
    entries: IndexMap<String, Arc<dyn Example>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `example` under `name` (trimmed). Replaces in place when the
    /// name is already taken.
    pub fn register(
        &mut self,
        name: &str,
        example: Arc<dyn Example>,
    ) -> HarnessResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HarnessError::InvalidArgument(
                "example name cannot be empty".to_string(),
            ));
        }

        if self.entries.insert(name.to_string(), example).is_some() {
            tracing::debug!(example = name, "replaced registered example");
        } else {
            tracing::debug!(example = name, "registered example");
        }
        Ok(())
    }

    /// Registers an example under its own name
    pub fn register_example<E>(&mut self, example: E) -> HarnessResult<()>
    where
        E: Example + 'static,
    {
        let name = example.name().to_string();
        self.register(&name, Arc::new(example))
    }

    pub fn get(&self, name: &str) -> HarnessResult<Arc<dyn Example>> {
        self.entries
            .get(name.trim())
            .cloned()
            .ok_or_else(|| HarnessError::NotFound(name.trim().to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name.trim())
    }

    /// Names in registry order. Each call walks the current entries afresh.
    pub fn list(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Examples in registry order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Example>)> + '_ {
        self.entries.iter().map(|(name, example)| (name.as_str(), example))
    }

    /// Removes `name` if present; unknown names are ignored.
    pub fn unregister(&mut self, name: &str) {
        if self.entries.shift_remove(name.trim()).is_some() {
            tracing::debug!(example = name.trim(), "unregistered example");
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.list()).finish()
    }
}

/// Registry behind a single lock, for callers that share it across threads.
#[derive(Clone, Default, Debug)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Read guard; a poisoned lock is recovered since entries are never
    /// left half-written.
    pub fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn register(&self, name: &str, example: Arc<dyn Example>) -> HarnessResult<()> {
        self.write().register(name, example)
    }

    pub fn unregister(&self, name: &str) {
        self.write().unregister(name)
    }

    pub fn get(&self, name: &str) -> HarnessResult<Arc<dyn Example>> {
        self.read().get(name)
    }
}

static GLOBAL: Lazy<SharedRegistry> = Lazy::new(SharedRegistry::default);

/// Process-wide registry, created empty on first use and never torn down.
pub fn global() -> &'static SharedRegistry {
    &GLOBAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::example::FnExample;
    use crate::transcript::Transcript;

    fn noop(name: &str) -> Arc<dyn Example> {
        Arc::new(FnExample::new(name, |_| Ok(())))
    }

    fn tagged(name: &str, tag: &'static str) -> Arc<dyn Example> {
        Arc::new(FnExample::new(name, move |out| {
            out.line(tag);
            Ok(())
        }))
    }

    #[test]
    fn test_register_rejects_blank_name() {
        let mut registry = Registry::new();
        let err = registry.register("", noop("")).unwrap_err();
        assert!(matches!(err, HarnessError::InvalidArgument(_)));

        let err = registry.register("   ", noop("   ")).unwrap_err();
        assert!(matches!(err, HarnessError::InvalidArgument(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_get_unknown_is_not_found() {
        let registry = Registry::new();
        let err = registry.get("proxy").err().unwrap();
        assert_eq!(err, HarnessError::NotFound("proxy".to_string()));
    }

    #[test]
    fn test_replacement_keeps_position_and_size() {
        let mut registry = Registry::new();
        registry.register("a", tagged("a", "first")).unwrap();
        registry.register("b", noop("b")).unwrap();
        registry.register("a", tagged("a", "second")).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.list().collect::<Vec<_>>(), ["a", "b"]);

        let mut out = Transcript::new();
        registry.get("a").unwrap().run(&mut out).unwrap();
        assert_eq!(out.lines(), ["second"]);
    }

    #[test]
    fn test_unregister_is_noop_when_absent() {
        let mut registry = Registry::new();
        registry.register("a", noop("a")).unwrap();
        registry.register("b", noop("b")).unwrap();
        registry.register("c", noop("c")).unwrap();

        registry.unregister("missing");
        assert_eq!(registry.len(), 3);

        registry.unregister("b");
        assert_eq!(registry.list().collect::<Vec<_>>(), ["a", "c"]);
        assert!(!registry.contains("b"));
    }

    #[test]
    fn test_names_are_trimmed() {
        let mut registry = Registry::new();
        registry.register("  facade ", noop("facade")).unwrap();
        assert!(registry.contains("facade"));
        assert!(registry.get(" facade").is_ok());
    }

    #[test]
    fn test_register_example_uses_own_name() {
        let mut registry = Registry::new();
        registry
            .register_example(FnExample::new("decorator", |_| Ok(())))
            .unwrap();
        assert_eq!(registry.list().collect::<Vec<_>>(), ["decorator"]);
    }

    #[test]
    fn test_shared_registry_across_threads() {
        let shared = SharedRegistry::default();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    let name = format!("example-{}", i);
                    shared.register(&name, noop(&name)).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.read().len(), 4);
        shared.unregister("example-0");
        assert_eq!(shared.read().len(), 3);
        assert!(shared.get("example-0").is_err());
    }

    #[test]
    fn test_global_is_one_instance() {
        assert!(std::ptr::eq(global(), global()));
    }
}
