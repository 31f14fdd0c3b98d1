//! Alert auto-dismissal
//!
//! Every alert present when the page becomes ready is faded out after
//! `alert_delay_ms` and removed from the page `alert_fade_ms` later.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::config::BehaviorConfig;
use crate::dom::Page;
use crate::timers::Scheduler;

/// What [`dismiss_alerts`] scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DismissalPlan {
    /// Number of alerts given a fade-then-remove timer
    pub scheduled: usize,
}

/// Schedule the fade and removal of every alert currently on the page
///
/// Each timer owns its own element handle, so alerts are dismissed
/// independently. An alert already gone when its timer fires is left alone.
pub fn dismiss_alerts<P, S>(page: &Rc<P>, scheduler: &S, config: &BehaviorConfig) -> DismissalPlan
where
    P: Page + 'static,
    S: Scheduler,
{
    let alerts = match page.select_all(&config.alert_selector) {
        Ok(alerts) => alerts,
        Err(e) => {
            warn!(selector = %config.alert_selector, "cannot look up alerts: {e}");
            return DismissalPlan::default();
        }
    };

    for alert in &alerts {
        schedule_dismissal(page, scheduler, config, alert.clone());
    }

    debug!(count = alerts.len(), "alert dismissal scheduled");
    DismissalPlan {
        scheduled: alerts.len(),
    }
}

fn schedule_dismissal<P, S>(page: &Rc<P>, scheduler: &S, config: &BehaviorConfig, alert: P::Element)
where
    P: Page + 'static,
    S: Scheduler,
{
    let page = Rc::clone(page);
    let timers = scheduler.clone();
    let fade_ms = config.alert_fade_ms;
    let transition = config.fade_transition();

    scheduler.schedule(
        config.alert_delay_ms,
        Box::new(move || {
            fade_out(page.as_ref(), &alert, &transition);
            timers.schedule(fade_ms, Box::new(move || page.remove(&alert)));
        }),
    );
}

fn fade_out<P: Page>(page: &P, alert: &P::Element, transition: &str) {
    if !page.is_attached(alert) {
        return;
    }
    let faded = page
        .set_style_property(alert, "opacity", "0")
        .and_then(|()| page.set_style_property(alert, "transition", transition));
    if let Err(e) = faded {
        debug!("alert fade skipped: {e}");
    }
}
