use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::api::config::OrreryConfig;
use crate::api::error::{OrreryError, Result};
use crate::api::types::{SimEvent, Theme};
use crate::bodies::registry::BodyRegistry;
use crate::core::orbit;
use crate::core::time::{FrameTimer, SimulationClock};
use crate::extensions::tween::TweenState;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::camera::{Camera3D, Viewport};
use crate::renderer::instance::InstanceBuffer;
use crate::renderer::traits::{FrameData, Renderer};
use crate::systems::focus::{FocusController, FocusRequest};
use crate::systems::interaction::InteractionController;

/// Owns every piece of session state and drives it one frame at a time.
///
/// The host pushes input as it arrives and calls `tick` once per display
/// frame. Within a tick, queued input is applied before the orbit update, so
/// a pointer event picks against the positions the user last saw.
pub struct OrreryRunner<R: Renderer> {
    config: OrreryConfig,
    renderer: R,
    bodies: BodyRegistry,
    rng: SmallRng,
    clock: SimulationClock,
    timer: FrameTimer,
    camera: Camera3D,
    viewport: Viewport,
    tweens: TweenState,
    focus: FocusController,
    interaction: InteractionController,
    input: InputQueue,
    instances: InstanceBuffer,
    /// Side effects produced by the latest tick.
    events: Vec<SimEvent>,
    theme: Theme,
}

impl<R: Renderer> OrreryRunner<R> {
    /// Validate `config`, create the bodies and place the camera at its home
    /// view. `seed` fixes the initial orbital angles.
    pub fn new(config: OrreryConfig, renderer: R, viewport: Viewport, seed: u64) -> Result<Self> {
        config.validate()?;
        if !viewport.is_valid() {
            return Err(OrreryError::InvalidConfig(format!(
                "viewport {}x{} must have a positive size",
                viewport.width, viewport.height
            )));
        }

        let mut rng = SmallRng::seed_from_u64(seed);
        let bodies = BodyRegistry::create(&config.bodies, config.speed_bounds, &mut rng);
        let camera = Camera3D::new(&config.camera, viewport.aspect());
        let focus = FocusController::new(config.focus, &config.camera);
        let instances = InstanceBuffer::with_capacity(bodies.len());

        log::info!("orrery: {} bodies, seed {}", bodies.len(), seed);

        Ok(Self {
            config,
            renderer,
            bodies,
            rng,
            clock: SimulationClock::new(),
            timer: FrameTimer::new(),
            camera,
            viewport,
            tweens: TweenState::new(),
            focus,
            interaction: InteractionController::new(),
            input: InputQueue::new(),
            instances,
            events: Vec::with_capacity(16),
            theme: Theme::default(),
        })
    }

    /// Queue an input event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame. `now` is the host's frame timestamp in seconds.
    pub fn tick(&mut self, now: f64) {
        self.events.clear();

        let elapsed = self.clock.advance(now);
        if let Some(fps) = self.timer.record(elapsed) {
            self.events.push(SimEvent::Fps(fps));
        }
        let dt = if elapsed.is_finite() && elapsed > 0.0 {
            elapsed as f32
        } else {
            0.0
        };

        for event in self.input.drain() {
            self.dispatch(event);
        }

        if self.clock.is_running() {
            orbit::advance(
                &mut self.bodies,
                dt,
                self.config.time_scaling,
                self.config.star_rotation_step,
            );
        }

        let step = dt.min(self.config.focus.max_step);
        self.tweens.tick(step, &mut self.camera);
        self.focus.advance(step);

        self.instances.rebuild(
            self.bodies.iter(),
            self.interaction.hovered(),
            self.interaction.selected(),
        );
        self.renderer.render(&FrameData {
            bodies: self.bodies.as_slice(),
            instances: &self.instances,
            camera: &self.camera,
            theme: self.theme,
            frame: self.timer.frames(),
        });
    }

    fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => {
                self.interaction.on_pointer_move(
                    Vec2::new(x, y),
                    &self.viewport,
                    &self.camera,
                    &self.bodies,
                    &mut self.events,
                );
            }
            InputEvent::PointerClick { x, y } => {
                let clicked = self.interaction.on_click(
                    Vec2::new(x, y),
                    &self.viewport,
                    &self.camera,
                    &self.bodies,
                    &mut self.events,
                );
                if let Some(index) = clicked {
                    self.request_focus(FocusRequest::Body(index));
                }
            }
            InputEvent::SpeedChanged { index, value } => match self.bodies.set_speed(index, value) {
                Ok(value) => self.events.push(SimEvent::SpeedApplied { index, value }),
                Err(e) => log::warn!("speed change ignored: {}", e),
            },
            InputEvent::ToggleRunning => {
                let running = self.clock.toggle();
                log::info!("simulation {}", if running { "running" } else { "paused" });
                self.events.push(SimEvent::RunningChanged(running));
            }
            InputEvent::ResetRequested => {
                self.bodies.reset(&mut self.rng);
                self.interaction.reset();
                log::info!("simulation reset");
                self.events.push(SimEvent::SpeedsReset(self.bodies.speeds()));
            }
            InputEvent::FocusRequested(Some(index)) => self.request_focus(FocusRequest::Body(index)),
            InputEvent::FocusRequested(None) => self.request_focus(FocusRequest::ResetView),
            InputEvent::TopView => self.request_focus(FocusRequest::TopView),
            InputEvent::Resize { width, height } => {
                let viewport = Viewport::new(width, height);
                if viewport.is_valid() {
                    self.viewport = viewport;
                    self.camera.set_aspect(viewport.aspect());
                } else {
                    log::warn!("ignoring resize to {}x{}", width, height);
                }
            }
            InputEvent::ToggleTheme => {
                self.theme = self.theme.toggled();
                self.events.push(SimEvent::ThemeChanged {
                    theme: self.theme,
                    background: self.theme.background(),
                });
            }
        }
    }

    fn request_focus(&mut self, request: FocusRequest) {
        if let Err(e) = self.focus.focus_on(request, &self.camera, &self.bodies, &mut self.tweens) {
            log::warn!("focus request ignored: {}", e);
        }
    }

    // ---- Accessors ----

    /// Events produced by the latest tick, in emission order.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Latest tick's events as a JSON array.
    pub fn events_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.events)?)
    }

    pub fn bodies(&self) -> &BodyRegistry {
        &self.bodies
    }

    pub fn camera(&self) -> &Camera3D {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn focus(&self) -> &FocusController {
        &self.focus
    }

    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    pub fn instances(&self) -> &InstanceBuffer {
        &self.instances
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn fps(&self) -> Option<u32> {
        self.timer.fps()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
