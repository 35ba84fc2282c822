//! Lifecycle hooks for observing and delaying bridge operations.
//!
//! Production code invokes these hooks at fixed extension points (package
//! reloads and request dispatch) and awaits the registered callback before
//! continuing. An unset slot is a no-op, so production behaves identically
//! whether or not a registry was wired in. Test harnesses populate slots to
//! observe or delay specific operations; production code itself never checks
//! whether it is under test.
//!
//! Each slot is an optional `Arc`'d async closure. A callback that needs to
//! signal failure should panic; the failure then surfaces through whatever
//! harness invoked the operation. The registry itself defines no error kind,
//! does not retry, and does not catch.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::trace;

/// Boxed future returned by hook callbacks.
pub type HookFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Callback slot for lifecycle events that carry no payload.
pub type LifecycleHook = Arc<dyn Fn() -> HookFuture + Send + Sync>;

/// Callback slot for request dispatch.
///
/// The callback receives a shared reference to the request, so it can
/// observe the request but never mutate or replace it.
pub type RequestHook<R> = Arc<dyn Fn(&R) -> HookFuture + Send + Sync>;

/// Optional callback slots invoked at well-defined extension points.
///
/// `R` is whatever request representation the surrounding protocol layer
/// uses; this crate never inspects it. All slots default to unset, which is
/// the production configuration. The registry is a plain value: cloning it
/// clones the callback references, not the callbacks themselves, and slots
/// are never mutated after construction.
///
/// Callbacks are `Fn + Send + Sync`, so one registry may be invoked from any
/// number of concurrent tasks. No ordering is imposed across distinct
/// invocations; a caller simply awaits each invocation before carrying on
/// with the step it guards.
pub struct TestHooks<R> {
  /// Awaited immediately before a package (re)load begins.
  pub package_reload_start: Option<LifecycleHook>,

  /// Awaited immediately after a package (re)load completes, whether it
  /// succeeded or failed.
  pub package_reload_finish: Option<LifecycleHook>,

  /// Awaited before a request is dispatched to its handler.
  pub handle_request: Option<RequestHook<R>>,
}

impl<R> TestHooks<R> {
  /// Run the package-reload-start hook, if one is registered.
  ///
  /// The reload must not proceed until this returns.
  pub async fn on_package_reload_start(&self) {
    if let Some(hook) = &self.package_reload_start {
      trace!("running package reload start hook");
      hook().await;
    }
  }

  /// Run the package-reload-finish hook, if one is registered.
  pub async fn on_package_reload_finish(&self) {
    if let Some(hook) = &self.package_reload_finish {
      trace!("running package reload finish hook");
      hook().await;
    }
  }

  /// Run the handle-request hook, if one is registered.
  ///
  /// Dispatch of `request` must not proceed until this returns.
  pub async fn on_handle_request(&self, request: &R) {
    if let Some(hook) = &self.handle_request {
      trace!("running handle request hook");
      hook(request).await;
    }
  }
}

// Manual impls: derives would put bounds on `R`, which only ever appears
// behind a shared reference in the callback signature.

impl<R> Default for TestHooks<R> {
  fn default() -> Self {
    Self {
      package_reload_start: None,
      package_reload_finish: None,
      handle_request: None,
    }
  }
}

impl<R> Clone for TestHooks<R> {
  fn clone(&self) -> Self {
    Self {
      package_reload_start: self.package_reload_start.clone(),
      package_reload_finish: self.package_reload_finish.clone(),
      handle_request: self.handle_request.clone(),
    }
  }
}

impl<R> fmt::Debug for TestHooks<R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // Closures are opaque; report which slots are populated.
    f.debug_struct("TestHooks")
      .field("package_reload_start", &self.package_reload_start.is_some())
      .field("package_reload_finish", &self.package_reload_finish.is_some())
      .field("handle_request", &self.handle_request.is_some())
      .finish()
  }
}

/// Wrap a plain async closure as a [`LifecycleHook`] slot value.
pub fn lifecycle_hook<F, Fut>(f: F) -> LifecycleHook
where
  F: Fn() -> Fut + Send + Sync + 'static,
  Fut: Future<Output = ()> + Send + 'static,
{
  Arc::new(move || -> HookFuture { Box::pin(f()) })
}

/// Wrap a plain async closure as a [`RequestHook`] slot value.
///
/// The closure gets a shared reference to the request and must return a
/// future that does not borrow from it; clone whatever the future needs
/// before constructing it.
pub fn request_hook<R, F, Fut>(f: F) -> RequestHook<R>
where
  F: Fn(&R) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = ()> + Send + 'static,
{
  Arc::new(move |request: &R| -> HookFuture { Box::pin(f(request)) })
}
