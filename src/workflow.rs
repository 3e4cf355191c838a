//! Delete Workflow
//!
//! `Idle -> Confirming -> (Aborted | Submitting) -> (Succeeded | Failed) -> Idle`
//!
//! The parent's submitting flag is raised before the request is sent and
//! lowered by a drop guard, so every exit path (including an unwinding
//! panic) puts it back to `false`.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::Post;
use crate::services::{Dialogs, PostApi};

type LocalFuture = Pin<Box<dyn Future<Output = ()>>>;

/// Parent-supplied async action that re-fetches the post list
#[derive(Clone)]
pub struct ReloadAction(Arc<dyn Fn() -> LocalFuture + Send + Sync>);

impl ReloadAction {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        Self(Arc::new(move || -> LocalFuture { Box::pin(f()) }))
    }

    pub async fn run(&self) {
        (self.0)().await
    }
}

/// Parent-supplied setter for its submitting flag
#[derive(Clone)]
pub struct SetSubmitting(Arc<dyn Fn(bool) + Send + Sync>);

impl SetSubmitting {
    pub fn new(f: impl Fn(bool) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn set(&self, value: bool) {
        (self.0)(value)
    }
}

/// Callbacks the parent container hands to each post widget
#[derive(Clone)]
pub struct ParentHooks {
    pub reload: ReloadAction,
    pub set_submitting: SetSubmitting,
}

/// Per-widget marker for a delete request that has not settled yet
#[derive(Debug, Clone, Default)]
pub struct InFlight(Arc<AtomicBool>);

impl InFlight {
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn begin(&self) -> Option<InFlightGuard<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(self))
    }
}

struct InFlightGuard<'a>(&'a InFlight);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        (self.0).0.store(false, Ordering::Release);
    }
}

/// Holds the parent's submitting flag at `true` until dropped
struct Submitting<'a>(&'a SetSubmitting);

impl<'a> Submitting<'a> {
    fn raise(setter: &'a SetSubmitting) -> Self {
        setter.set(true);
        Self(setter)
    }
}

impl Drop for Submitting<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Administrator declined the confirmation
    Aborted,
    /// A delete for this widget was still in flight; nothing was done
    Busy,
    Succeeded,
    /// Already alerted and logged
    Failed(ApiError),
}

pub fn confirm_message(post: &Post) -> String {
    format!("Really delete the post \"{}\"?", post.title)
}

/// Run the delete workflow for `post`.
///
/// Errors are handled here: they are logged, shown with `dialogs.alert`
/// and returned as `DeleteOutcome::Failed`.
pub async fn delete_post<A, D>(
    post: &Post,
    api: &A,
    dialogs: &D,
    hooks: &ParentHooks,
    in_flight: &InFlight,
) -> DeleteOutcome
where
    A: PostApi + ?Sized,
    D: Dialogs + ?Sized,
{
    if in_flight.is_busy() {
        log::debug!("Delete of post {} ignored, previous request still running", post.id);
        return DeleteOutcome::Busy;
    }

    if !dialogs.confirm(&confirm_message(post)) {
        return DeleteOutcome::Aborted;
    }

    let Some(_in_flight) = in_flight.begin() else {
        return DeleteOutcome::Busy;
    };
    let _submitting = Submitting::raise(&hooks.set_submitting);

    match api.delete_post(&post.id).await {
        Ok(()) => {
            log::info!("Deleted post {}", post.id);
            hooks.reload.run().await;
            DeleteOutcome::Succeeded
        }
        Err(e) => {
            let message = e.delete_alert_message();
            log::error!("{}", message);
            dialogs.alert(&message);
            DeleteOutcome::Failed(e)
        }
    }
}
