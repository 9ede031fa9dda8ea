//! Query Cache
//!
//! Data fetching keyed by a logical query identifier. A page gets a uniform
//! loading / failed / ready state; previously fetched data for the same key
//! is shown immediately while a fresh request runs.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiError;
use crate::context::use_app_context;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Appeals,
    Analytics { days: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Failed(ApiError),
    Ready(T),
}

/// Last successful result per key
#[derive(Clone, Default)]
pub struct QueryCache {
    entries: Rc<RefCell<HashMap<QueryKey, Box<dyn Any>>>>,
}

impl QueryCache {
    pub fn get<T: Clone + 'static>(&self, key: &QueryKey) -> Option<T> {
        self.entries
            .borrow()
            .get(key)
            .and_then(|entry| entry.downcast_ref::<T>())
            .cloned()
    }

    pub fn insert<T: 'static>(&self, key: QueryKey, value: T) {
        self.entries.borrow_mut().insert(key, Box::new(value));
    }

    /// Drop a key so the next mount starts from the loading state
    pub fn invalidate(&self, key: &QueryKey) {
        self.entries.borrow_mut().remove(key);
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Initial state for a mount: cached data if any
    pub fn initial_state<T: Clone + 'static>(&self, key: &QueryKey) -> QueryState<T> {
        self.get(key).map(QueryState::Ready).unwrap_or(QueryState::Loading)
    }

    /// Fold a finished fetch into the cache and produce the next state.
    ///
    /// A failure keeps showing cached data when there is some.
    pub fn settle<T: Clone + 'static>(&self, key: QueryKey, result: Result<T, ApiError>) -> QueryState<T> {
        match result {
            Ok(data) => {
                self.insert(key, data.clone());
                QueryState::Ready(data)
            }
            Err(err) => match self.get::<T>(&key) {
                Some(stale) => {
                    tracing::warn!(?key, error = %err, "refetch failed, keeping cached data");
                    QueryState::Ready(stale)
                }
                None => QueryState::Failed(err),
            },
        }
    }
}

/// Fetch on mount through the app-wide cache
pub fn use_query<T, F, Fut>(key: QueryKey, fetch: F) -> ReadSignal<QueryState<T>>
where
    T: Clone + Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let cache = use_app_context().queries();
    let (state, set_state) = signal(cache.initial_state::<T>(&key));

    Effect::new(move |_| {
        let cache = cache.clone();
        let request = fetch();
        spawn_local(async move {
            let result = request.await;
            set_state.set(cache.settle(key, result));
        });
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_uses_cache() {
        let cache = QueryCache::default();
        assert_eq!(cache.initial_state::<Vec<u32>>(&QueryKey::Appeals), QueryState::Loading);

        cache.insert(QueryKey::Appeals, vec![1u32, 2]);
        assert_eq!(cache.initial_state(&QueryKey::Appeals), QueryState::Ready(vec![1u32, 2]));
    }

    #[test]
    fn test_keys_are_independent() {
        let cache = QueryCache::default();
        cache.insert(QueryKey::Analytics { days: 30 }, 30u32);
        assert_eq!(cache.get::<u32>(&QueryKey::Analytics { days: 7 }), None);
        assert_eq!(cache.get::<u32>(&QueryKey::Analytics { days: 30 }), Some(30));
        // Wrong type for the key reads as a miss
        assert_eq!(cache.get::<String>(&QueryKey::Analytics { days: 30 }), None);
    }

    #[test]
    fn test_settle_failure_without_cache() {
        let cache = QueryCache::default();
        let err = ApiError::Network("offline".to_string());
        let state = cache.settle::<u32>(QueryKey::Appeals, Err(err.clone()));
        assert_eq!(state, QueryState::Failed(err));
    }

    #[test]
    fn test_settle_failure_keeps_stale_data() {
        let cache = QueryCache::default();
        cache.settle(QueryKey::Appeals, Ok(5u32));
        let state = cache.settle::<u32>(QueryKey::Appeals, Err(ApiError::Network("offline".to_string())));
        assert_eq!(state, QueryState::Ready(5));
    }

    #[test]
    fn test_invalidate_and_clear() {
        let cache = QueryCache::default();
        cache.insert(QueryKey::Appeals, 1u32);
        cache.insert(QueryKey::Analytics { days: 30 }, 2u32);
        cache.invalidate(&QueryKey::Appeals);
        assert_eq!(cache.get::<u32>(&QueryKey::Appeals), None);
        cache.clear();
        assert_eq!(cache.get::<u32>(&QueryKey::Analytics { days: 30 }), None);
    }
}
