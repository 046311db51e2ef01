//! The lottery wheel widget.
//!
//! `WheelRenderer` binds a [`RenderBackend`] to one surface and draws the
//! configured lottery's grid onto it:
//! - one circle and label per number, selected numbers in strategy colors
//! - a shared glow filter for the selection
//! - a legend naming the strategy
//!
//! A renderer never fails towards its caller. A missing surface leaves it
//! inert and an unknown lottery type aborts the draw; both are logged and
//! kept in [`WheelRenderer::last_error`].

mod scene;

#[cfg(target_arch = "wasm32")]
mod bindings;

use std::sync::Arc;

pub use scene::{build_scene, scene_for, LEGEND_OFFSET, LEGEND_PREFIX, MARKER_STROKE_WIDTH};

#[cfg(target_arch = "wasm32")]
pub use bindings::{init_wheel_visualization_js, LotteryWheel};

use crate::error::WheelError;
use crate::render::RenderBackend;
use crate::types::{ProfileTable, Scene, Strategy, WheelConfig};

pub struct WheelRenderer<B: RenderBackend> {
    backend: B,
    profiles: Arc<ProfileTable>,
    surface_id: String,
    config: WheelConfig,
    attached: bool,
    scene: Option<Scene>,
    last_error: Option<WheelError>,
}

impl<B: RenderBackend> WheelRenderer<B> {
    /// Bind to `surface_id` and draw immediately.
    ///
    /// When the surface does not exist the renderer is returned inert: the
    /// error is logged and recorded, nothing is drawn, and later updates are
    /// ignored.
    pub fn new(
        backend: B,
        profiles: Arc<ProfileTable>,
        surface_id: impl Into<String>,
        config: WheelConfig,
    ) -> Self {
        let mut renderer = Self {
            backend,
            profiles,
            surface_id: surface_id.into(),
            config,
            attached: false,
            scene: None,
            last_error: None,
        };

        match renderer.backend.attach(&renderer.surface_id) {
            Ok(()) => {
                renderer.attached = true;
                renderer.draw_wheel();
            }
            Err(err) => renderer.fail(err),
        }
        renderer
    }

    /// Clear the surface and draw the current config from scratch.
    pub fn draw_wheel(&mut self) {
        if !self.attached {
            return;
        }

        let Some(profile) = self.profiles.get(&self.config.lottery_type) else {
            let key = self.config.lottery_type.clone();
            self.fail(WheelError::UnsupportedLottery(key));
            return;
        };

        let stray = self.config.out_of_range(profile);
        if !stray.is_empty() {
            console_warn!(
                "{} highlighted numbers outside {}-{}: {:?}",
                profile.name,
                profile.min(),
                profile.max(),
                stray
            );
        }
        let scene = scene::build_scene(profile, &self.config);

        self.backend.clear();
        self.scene = None;
        match self.backend.draw(&scene) {
            Ok(()) => {
                self.scene = Some(scene);
                self.last_error = None;
            }
            Err(err) => self.fail(err),
        }
    }

    /// Replace the highlighted numbers, and the strategy when one is given,
    /// then redraw everything.
    pub fn update_highlighted_numbers<I, N>(&mut self, numbers: I, strategy: Option<Strategy>)
    where
        I: IntoIterator<Item = N>,
        N: Into<i64>,
    {
        if !self.attached {
            return;
        }
        let previous = std::mem::take(&mut self.config);
        self.config = WheelConfig {
            highlighted_numbers: numbers.into_iter().map(Into::into).collect(),
            strategy: strategy.unwrap_or_else(|| previous.strategy.clone()),
            ..previous
        };
        self.draw_wheel();
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Scene currently shown on the surface.
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Error from the most recent construction or draw, if it failed.
    pub fn last_error(&self) -> Option<&WheelError> {
        self.last_error.as_ref()
    }

    /// True when the target surface was missing at construction.
    pub fn is_inert(&self) -> bool {
        !self.attached
    }

    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    pub fn profiles(&self) -> &ProfileTable {
        &self.profiles
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn fail(&mut self, err: WheelError) {
        console_error!("{err}");
        self.last_error = Some(err);
    }
}

/// Build a renderer with default dimensions for the given selection.
pub fn init_wheel_visualization<B, I, N>(
    backend: B,
    profiles: Arc<ProfileTable>,
    surface_id: &str,
    lottery_type: &str,
    highlighted_numbers: I,
    strategy: Strategy,
) -> WheelRenderer<B>
where
    B: RenderBackend,
    I: IntoIterator<Item = N>,
    N: Into<i64>,
{
    let config = WheelConfig::new(lottery_type, highlighted_numbers, strategy);
    WheelRenderer::new(backend, profiles, surface_id, config)
}
