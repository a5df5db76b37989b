//! Immutable, derivable execution contexts.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// A typed key for a context binding.
///
/// The key's identity is its type, so two crates can never collide on a
/// binding unless they share the key type. Keeping a key type private keeps
/// its binding private as well.
///
/// ```rust,ignore
/// struct TraceId;
///
/// impl ContextKey for TraceId {
///     type Value = String;
/// }
///
/// let ctx = Context::background().with_value::<TraceId>("abc".to_string());
/// assert_eq!(ctx.value::<TraceId>().map(String::as_str), Some("abc"));
/// ```
pub trait ContextKey: 'static {
    /// The type stored under this key.
    type Value: Send + Sync + 'static;
}

struct Binding {
    key: TypeId,
    key_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
    parent: Option<Arc<Binding>>,
}

/// An immutable chain of typed key-value bindings for one call.
///
/// Deriving a context never changes the parent: `with_value` returns a new
/// context that sees every parent binding plus the new one. Clones share the
/// same chain.
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Binding>>,
}

impl Context {
    /// Returns the empty root context.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Derives a child context with one more binding.
    ///
    /// A binding for a key already present in the chain shadows the older one.
    #[must_use]
    pub fn with_value<K: ContextKey>(&self, value: K::Value) -> Self {
        Self {
            head: Some(Arc::new(Binding {
                key: TypeId::of::<K>(),
                key_name: std::any::type_name::<K>(),
                value: Arc::new(value),
                parent: self.head.clone(),
            })),
        }
    }

    /// Reads the nearest binding for `K`.
    #[must_use]
    pub fn value<K: ContextKey>(&self) -> Option<&K::Value> {
        let wanted = TypeId::of::<K>();
        self.bindings()
            .find(|binding| binding.key == wanted)
            .and_then(|binding| binding.value.downcast_ref::<K::Value>())
    }

    /// Checks if a binding for `K` exists anywhere in the chain.
    #[must_use]
    pub fn contains<K: ContextKey>(&self) -> bool {
        self.value::<K>().is_some()
    }

    /// Returns the number of bindings in the chain, shadowed ones included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.bindings().count()
    }

    /// Returns true for a context without bindings.
    #[must_use]
    pub fn is_background(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the key type names, nearest first.
    #[must_use]
    pub fn key_names(&self) -> Vec<&'static str> {
        self.bindings().map(|binding| binding.key_name).collect()
    }

    fn bindings(&self) -> impl Iterator<Item = &Binding> {
        std::iter::successors(self.head.as_deref(), |binding| binding.parent.as_deref())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("keys", &self.key_names())
            .finish()
    }
}
