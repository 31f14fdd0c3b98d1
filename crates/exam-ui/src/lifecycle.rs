//! Page-ready lifecycle
//!
//! Startup behaviors are registered on a [`PageLifecycle`] and run once, in
//! registration order, when the page is mounted.

use std::rc::Rc;

use tracing::{debug, info};

use crate::behaviors::dismiss_alerts;
use crate::config::BehaviorConfig;
use crate::dom::Page;
use crate::timers::Scheduler;

/// Line logged when the page behaviors are up
pub const READY_MESSAGE: &str = "Sınav Programı Uygulaması Yüklendi!";

/// A behavior run when the page becomes ready
pub type StartupHook = Box<dyn FnOnce()>;

/// Ordered list of startup hooks, run at most once
#[derive(Default)]
pub struct PageLifecycle {
    hooks: Vec<(&'static str, StartupHook)>,
    mounted: bool,
}

impl std::fmt::Debug for PageLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.hooks.iter().map(|(name, _)| *name).collect();
        f.debug_struct("PageLifecycle")
            .field("hooks", &names)
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl PageLifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook; hooks registered after mounting never run
    #[must_use]
    pub fn with_hook(mut self, name: &'static str, hook: impl FnOnce() + 'static) -> Self {
        self.hooks.push((name, Box::new(hook)));
        self
    }

    /// Names of the hooks still waiting to run
    #[must_use]
    pub fn hook_names(&self) -> Vec<&'static str> {
        self.hooks.iter().map(|(name, _)| *name).collect()
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Run every registered hook; later calls do nothing
    ///
    /// Returns the number of hooks run.
    pub fn mount(&mut self) -> usize {
        if self.mounted {
            debug!("page lifecycle already mounted");
            return 0;
        }
        self.mounted = true;

        let hooks = std::mem::take(&mut self.hooks);
        let count = hooks.len();
        for (name, hook) in hooks {
            debug!(hook = name, "running startup hook");
            hook();
        }
        count
    }
}

/// The startup hooks every page gets: the ready line, then alert dismissal
pub fn default_lifecycle<P, S>(page: Rc<P>, scheduler: S, config: BehaviorConfig) -> PageLifecycle
where
    P: Page + 'static,
    S: Scheduler,
{
    PageLifecycle::new()
        .with_hook("announce-ready", || info!("{READY_MESSAGE}"))
        .with_hook("dismiss-alerts", move || {
            dismiss_alerts(&page, &scheduler, &config);
        })
}
