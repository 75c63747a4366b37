//! Page-session state.
//!
//! One `App` is built at startup and shared by `Rc` with every handler that
//! needs it. The catalog store sits in a write-once cell: the loader fills it,
//! the auto-fill handler only reads it.

use crate::config::SiteConfig;
use crate::quote::EmailJsRelay;
use hmv_catalog::{SharedStore, shared_store};
use hmv_quote::{AutofillController, SubmissionController};
use std::rc::Rc;

pub struct App {
    pub config: SiteConfig,
    pub store: SharedStore,
    pub autofill: AutofillController,
    pub submitter: SubmissionController,
    pub relay: EmailJsRelay,
}

impl App {
    pub fn new(config: SiteConfig) -> Rc<Self> {
        let store = shared_store();
        Rc::new(Self {
            autofill: AutofillController::new(store.clone()),
            submitter: SubmissionController::new(config.relay.clone()),
            relay: EmailJsRelay::new(&config.relay),
            store,
            config,
        })
    }
}
