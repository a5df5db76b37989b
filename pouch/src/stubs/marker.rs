//! Marking contexts as eligible for stubbing.

use std::sync::Arc;

use super::StubStorage;
use crate::context::{Context, ContextKey};

/// Key of the stub marker binding.
///
/// The type is private to this module, so nothing outside it can read or
/// write the binding directly.
struct StubMarker;

impl ContextKey for StubMarker {
    type Value = Arc<StubStorage>;
}

/// Creates a background context marked for stubbing, with empty storage.
#[must_use]
pub fn new_stubbed_context() -> Context {
    enable_stubs(&Context::background())
}

/// Derives a context from `parent` that is marked for stubbing.
///
/// Every binding of `parent` stays readable on the returned context.
#[must_use]
pub fn enable_stubs(parent: &Context) -> Context {
    enable_stubs_with_data(parent, Arc::new(StubStorage::new()))
}

/// Derives a marked context that carries the given storage.
///
/// The storage is shared, not copied. The same instance can back several
/// contexts, and values written to it later are seen by the stub generator.
#[must_use]
pub fn enable_stubs_with_data(parent: &Context, storage: Arc<StubStorage>) -> Context {
    parent.with_value::<StubMarker>(storage)
}

/// Returns the storage of the nearest stub marker, if the context has one.
#[must_use]
pub fn stub_storage(context: &Context) -> Option<Arc<StubStorage>> {
    context.value::<StubMarker>().cloned()
}

/// Checks if requests carrying `context` will be stubbed.
#[must_use]
pub fn is_stub_eligible(context: &Context) -> bool {
    context.contains::<StubMarker>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct TraceId;

    impl ContextKey for TraceId {
        type Value = String;
    }

    #[test]
    fn test_new_stubbed_context_has_empty_storage() {
        let ctx = new_stubbed_context();
        let storage = stub_storage(&ctx).unwrap();

        assert!(storage.is_empty());
        assert!(is_stub_eligible(&ctx));
    }

    #[test]
    fn test_enable_stubs_keeps_parent_bindings() {
        let parent = Context::background().with_value::<TraceId>("abc".to_string());
        let ctx = enable_stubs(&parent);

        assert!(stub_storage(&ctx).is_some());
        assert_eq!(ctx.value::<TraceId>().map(String::as_str), Some("abc"));
        assert!(!is_stub_eligible(&parent));
    }

    #[test]
    fn test_plain_context_is_not_marked() {
        let ctx = Context::background().with_value::<TraceId>("abc".to_string());
        assert!(stub_storage(&ctx).is_none());
        assert!(!is_stub_eligible(&Context::background()));
    }

    #[test]
    fn test_enable_stubs_with_data_shares_storage() {
        let storage = Arc::new(StubStorage::new());
        storage.set("user_id", serde_json::json!("42"));

        let first = enable_stubs_with_data(&Context::background(), storage.clone());
        let second = enable_stubs_with_data(&Context::background(), storage.clone());

        let seen = stub_storage(&first).unwrap();
        assert!(Arc::ptr_eq(&seen, &storage));
        assert_eq!(seen.get_str("user_id"), Some("42".to_string()));

        // Writes after marking are visible through every context.
        storage.set("role", serde_json::json!("admin"));
        assert_eq!(
            stub_storage(&second).unwrap().get_str("role"),
            Some("admin".to_string())
        );
    }

    #[test]
    fn test_marker_is_inherited_by_descendants() {
        let marked = new_stubbed_context();
        let child = marked.with_value::<TraceId>("xyz".to_string());

        let parent_storage = stub_storage(&marked).unwrap();
        let child_storage = stub_storage(&child).unwrap();
        assert!(Arc::ptr_eq(&parent_storage, &child_storage));
    }

    #[test]
    fn test_remarking_shadows_earlier_storage() {
        let first = Arc::new(StubStorage::new());
        let second = Arc::new(StubStorage::new());

        let ctx = enable_stubs_with_data(&Context::background(), first.clone());
        let remarked = enable_stubs_with_data(&ctx, second.clone());

        assert!(Arc::ptr_eq(&stub_storage(&remarked).unwrap(), &second));
        assert!(Arc::ptr_eq(&stub_storage(&ctx).unwrap(), &first));
    }

    #[test]
    fn test_each_marking_gets_fresh_storage() {
        let a = new_stubbed_context();
        let b = new_stubbed_context();

        stub_storage(&a).unwrap().set("k", serde_json::json!(1));
        assert!(stub_storage(&b).unwrap().is_empty());
    }
}
