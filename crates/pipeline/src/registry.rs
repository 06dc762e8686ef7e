//! Runtime registry mapping filter names to strategy constructors.
//!
//! Names are case-normalized to uppercase. Registration always succeeds and
//! silently replaces any prior factory under the same name (last write
//! wins). Lookup is a pure factory call: every hit constructs a fresh
//! strategy, and a miss is an explicit `None`, never a default.
//!
//! The registry is an explicit value owned by the caller and injected where
//! it is needed; there is no process-global instance. Single-threaded use
//! only; concurrent registration/lookup would need a lock around the map.

use crate::error::{FilterError, Result};
use crate::strategy::FilterStrategy;
use std::collections::HashMap;

/// A zero-argument constructor for a [`FilterStrategy`].
///
/// Parameterized variants bake their parameter into the closure at
/// registration time.
pub type StrategyFactory = Box<dyn Fn() -> FilterStrategy>;

/// Name-keyed, overwrite-on-conflict mapping from filter name to constructor.
pub struct FilterRegistry {
    factories: HashMap<String, StrategyFactory>,
}

impl FilterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry with the built-in stateless filters (`EVEN`, `ODD`)
    /// pre-registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("EVEN", || FilterStrategy::Even);
        registry.register("ODD", || FilterStrategy::Odd);
        registry
    }

    /// Store `factory` under the normalized `name`.
    ///
    /// Always succeeds. An existing entry under the same name is replaced
    /// with no error and no warning.
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> FilterStrategy + 'static,
    {
        self.factories.insert(normalize(name), Box::new(factory));
    }

    /// Construct a fresh strategy for `name`.
    ///
    /// # Returns
    /// * `Some(FilterStrategy)` - a newly constructed instance on every call
    /// * `None` - nothing is registered under the normalized name
    pub fn create(&self, name: &str) -> Option<FilterStrategy> {
        self.factories.get(&normalize(name)).map(|factory| factory())
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(name: &str) -> String {
    name.to_uppercase()
}

/// Resolve a user-supplied filter token against `registry`.
///
/// Tokens are case-insensitive. A token with the `GT` prefix carries its
/// threshold as a signed decimal suffix (`GT15`, `gt-3`); the suffix is
/// parsed here, ahead of any registry interaction, and a factory capturing
/// it is registered on demand under the composite key `"GT"`.
///
/// The threshold is NOT part of the key, so only one GT threshold is active
/// per registry at a time: resolving a second GT token replaces the factory
/// the first one registered.
///
/// # Returns
/// * `Ok(FilterStrategy)` - the freshly constructed strategy
/// * `Err(FilterError::InvalidThreshold)` - malformed or empty GT suffix
/// * `Err(FilterError::UnknownFilter)` - no entry under the token
pub fn resolve_strategy(registry: &mut FilterRegistry, token: &str) -> Result<FilterStrategy> {
    let normalized = normalize(token);

    let name = if let Some(suffix) = normalized.strip_prefix("GT") {
        let threshold: i64 = suffix
            .parse()
            .map_err(|source| FilterError::InvalidThreshold {
                token: token.to_string(),
                source,
            })?;
        registry.register("GT", move || FilterStrategy::GreaterThan(threshold));
        tracing::debug!("Registered GT filter with threshold {}", threshold);
        "GT".to_string()
    } else {
        normalized
    };

    registry
        .create(&name)
        .ok_or(FilterError::UnknownFilter { name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = FilterRegistry::with_builtins();
        assert_eq!(registry.create("even"), registry.create("EVEN"));
        assert_eq!(registry.create("Odd"), Some(FilterStrategy::Odd));
    }

    #[test]
    fn test_registration_normalizes_name() {
        let mut registry = FilterRegistry::new();
        registry.register("quux", || FilterStrategy::Even);
        assert_eq!(registry.create("QUUX"), Some(FilterStrategy::Even));
    }

    #[test]
    fn test_unknown_name_is_none_not_default() {
        let registry = FilterRegistry::with_builtins();
        assert_eq!(registry.create("bogus"), None);
    }

    #[test]
    fn test_reregistration_overwrites() {
        let mut registry = FilterRegistry::new();
        registry.register("F", || FilterStrategy::Even);
        registry.register("F", || FilterStrategy::Odd);
        // Only the second factory is resolvable.
        assert_eq!(registry.create("F"), Some(FilterStrategy::Odd));
    }

    #[test]
    fn test_create_returns_fresh_instance_per_call() {
        let registry = FilterRegistry::with_builtins();
        let first = registry.create("EVEN").unwrap();
        let second = registry.create("EVEN").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_bare_tokens() {
        let mut registry = FilterRegistry::with_builtins();
        assert_eq!(
            resolve_strategy(&mut registry, "even").unwrap(),
            FilterStrategy::Even
        );
        assert_eq!(
            resolve_strategy(&mut registry, "ODD").unwrap(),
            FilterStrategy::Odd
        );
    }

    #[test]
    fn test_resolve_gt_token_captures_threshold() {
        let mut registry = FilterRegistry::with_builtins();
        assert_eq!(
            resolve_strategy(&mut registry, "GT15").unwrap(),
            FilterStrategy::GreaterThan(15)
        );
        // Signed suffix, lowercase prefix.
        assert_eq!(
            resolve_strategy(&mut registry, "gt-3").unwrap(),
            FilterStrategy::GreaterThan(-3)
        );
    }

    #[test]
    fn test_gt_registration_overwrites_previous_threshold() {
        // The composite key is always "GT": resolving a second GT token
        // replaces the factory from the first. Pins the observed behavior.
        let mut registry = FilterRegistry::with_builtins();
        resolve_strategy(&mut registry, "GT10").unwrap();
        resolve_strategy(&mut registry, "GT20").unwrap();
        assert_eq!(registry.create("GT"), Some(FilterStrategy::GreaterThan(20)));
    }

    #[test]
    fn test_resolve_malformed_gt_suffix_is_fatal() {
        let mut registry = FilterRegistry::with_builtins();
        let err = resolve_strategy(&mut registry, "GTabc").unwrap_err();
        assert!(matches!(err, FilterError::InvalidThreshold { .. }));
        // No GT entry was registered on the failed path.
        assert_eq!(registry.create("GT"), None);
    }

    #[test]
    fn test_resolve_empty_gt_suffix_is_fatal() {
        let mut registry = FilterRegistry::with_builtins();
        let err = resolve_strategy(&mut registry, "gt").unwrap_err();
        assert!(matches!(err, FilterError::InvalidThreshold { .. }));
    }

    #[test]
    fn test_resolve_unknown_token() {
        let mut registry = FilterRegistry::with_builtins();
        let err = resolve_strategy(&mut registry, "bogus").unwrap_err();
        assert!(matches!(err, FilterError::UnknownFilter { .. }));
    }
}
