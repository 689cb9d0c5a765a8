//! Application-root wiring
//!
//! [`ThemeTransition`] is built once at the application root and owns the
//! controller. Views receive a [`ThemeToggle`] handle by parameter; the
//! overlay layer receives a [`CompositorRenderer`].

use crate::compositor::CompositorRenderer;
use crate::config::{ConfigError, TransitionConfig};
use crate::controller::TransitionController;
use crate::error::Result;
use crate::host::{SnapshotCapture, Viewport};
use crate::state::TransitionState;
use dusk_theme::{initial_theme, NoStatusBar, StatusBar, SystemPreference, ThemeName};
use std::future::Future;
use std::sync::{Arc, Weak};
use tokio::sync::watch;

/// Builder for [`ThemeTransition`]
pub struct ThemeTransitionBuilder<C> {
    capture: C,
    viewport: Arc<dyn Viewport>,
    status_bar: Arc<dyn StatusBar>,
    theme: Option<ThemeName>,
    config: TransitionConfig,
}

impl<C: SnapshotCapture> ThemeTransitionBuilder<C> {
    pub fn new(capture: C, viewport: Arc<dyn Viewport>) -> Self {
        Self {
            capture,
            viewport,
            status_bar: Arc::new(NoStatusBar),
            theme: None,
            config: TransitionConfig::default(),
        }
    }

    pub fn status_bar(mut self, status_bar: Arc<dyn StatusBar>) -> Self {
        self.status_bar = status_bar;
        self
    }

    /// Start in the system's preferred scheme (light when it has none)
    pub fn preference(mut self, preference: &dyn SystemPreference) -> Self {
        self.theme = Some(initial_theme(preference));
        self
    }

    /// Start in an explicit scheme
    pub fn theme(mut self, theme: ThemeName) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn config(mut self, config: TransitionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> std::result::Result<ThemeTransition<C>, ConfigError> {
        self.config.validate()?;
        let controller = TransitionController::new(
            self.capture,
            self.viewport,
            self.status_bar,
            self.config,
            self.theme.unwrap_or_default(),
        );
        Ok(ThemeTransition {
            controller: Arc::new(controller),
        })
    }
}

/// Owner of the one transition controller of an application root
pub struct ThemeTransition<C> {
    controller: Arc<TransitionController<C>>,
}

impl<C: SnapshotCapture> ThemeTransition<C> {
    pub fn builder(capture: C, viewport: Arc<dyn Viewport>) -> ThemeTransitionBuilder<C> {
        ThemeTransitionBuilder::new(capture, viewport)
    }

    /// Handle for views that read the theme or start a transition
    pub fn handle(&self) -> ThemeToggle<C> {
        ThemeToggle {
            controller: Arc::downgrade(&self.controller),
        }
    }

    /// Overlay renderer bound to this root's state and progress
    pub fn renderer(&self) -> CompositorRenderer {
        CompositorRenderer::new(
            self.controller.subscribe(),
            self.controller.progress(),
            self.controller.config().fit,
        )
    }

    pub fn subscribe(&self) -> watch::Receiver<TransitionState> {
        self.controller.subscribe()
    }

    pub fn state(&self) -> TransitionState {
        self.controller.state()
    }

    pub fn controller(&self) -> &TransitionController<C> {
        &self.controller
    }
}

/// What views see: the current theme, whether a transition is running, and
/// a way to start one.
///
/// A handle does not keep its [`ThemeTransition`] alive. Using a handle after
/// the root was dropped is a programming error and panics.
pub struct ThemeToggle<C> {
    controller: Weak<TransitionController<C>>,
}

impl<C> Clone for ThemeToggle<C> {
    fn clone(&self) -> Self {
        Self {
            controller: Weak::clone(&self.controller),
        }
    }
}

impl<C: SnapshotCapture> ThemeToggle<C> {
    fn controller(&self) -> Arc<TransitionController<C>> {
        self.controller
            .upgrade()
            .expect("ThemeToggle used outside its ThemeTransition: the root was dropped")
    }

    pub fn current_theme(&self) -> ThemeName {
        self.controller().theme()
    }

    pub fn active(&self) -> bool {
        self.controller().is_active()
    }

    /// See [`TransitionController::toggle`].
    ///
    /// Panics on the call itself, not on first poll, if the root was dropped.
    pub fn toggle(&self, x: f32, y: f32) -> impl Future<Output = Result<ThemeName>> + Send {
        let controller = self.controller();
        async move { controller.toggle(x, y).await }
    }
}
