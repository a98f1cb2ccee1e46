use crate::api::{ApiClient, SessionStore};
use crate::query::QueryCache;
use std::rc::Rc;
use yew::html::Scope;
use yew::{Callback, Component, Context};

/// The shared service handles, constructed once in `App::create` and
/// passed down through a context provider instead of living as ambient
/// globals.
#[derive(Clone)]
pub struct DataContext {
    pub api: Rc<ApiClient>,
    pub cache: Rc<QueryCache>,
    pub session: Rc<SessionStore>,
}

impl DataContext {
    pub fn new() -> Self {
        let session = Rc::new(SessionStore::load());
        DataContext {
            api: Rc::new(ApiClient::new(session.clone())),
            cache: Rc::new(QueryCache::new()),
            session,
        }
    }
}

impl PartialEq for DataContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cache, &other.cache)
    }
}

impl DataContext {
    /// Grabs the context from a struct component. The handles never
    /// change after startup, so no change listener is registered.
    pub fn of<C: Component>(ctx: &Context<C>) -> DataContext {
        ctx.link()
            .context::<DataContext>(Callback::noop())
            .expect("data context missing")
            .0
    }

    pub fn of_scope<C: Component>(scope: &Scope<C>) -> DataContext {
        scope
            .context::<DataContext>(Callback::noop())
            .expect("data context missing")
            .0
    }
}
