//! Carousel facade
//!
//! Owns the item sequence and wires the components together:
//!
//! ```text
//!   resize ──debounce──> classify → size → normalize heights → buttons
//!   touch / nav ───────> gesture → loop scroller ──recycle/settle tasks──> tick()
//! ```
//!
//! The host drives time: every input carries a millisecond timestamp and
//! [`Carousel::tick`] runs scheduled work whose deadline has passed.
//!
//! # Example
//!
//! ```rust
//! use loopdeck_carousel::prelude::*;
//!
//! let blocks = ["A", "B", "C", "D", "E"]
//!     .into_iter()
//!     .map(|label| MemoryBlock::new(label, 80))
//!     .collect();
//! let mut carousel = Carousel::new(MemoryHost::new(1016.0), blocks, CarouselConfig::default())?;
//!
//! carousel.scroll_forward(0.0)?;
//! carousel.tick(500.0);
//!
//! let order: Vec<&str> = carousel.items().iter().map(|b| b.label()).collect();
//! assert_eq!(order, ["B", "C", "D", "E", "A"]);
//! # Ok::<(), CarouselError>(())
//! ```

use loopdeck_animation::{TaskId, TaskScheduler};
use loopdeck_core::events::event_types;
use loopdeck_core::{
    CarouselError, Direction, Event, Result, Signal, SignalDispatcher, SignalKind,
};

use crate::block::{CarouselHost, ContentBlock};
use crate::buttons::{ButtonController, ButtonVisibility};
use crate::config::CarouselConfig;
use crate::gesture::{GestureRecognizer, SwipeThresholds};
use crate::height::normalize_heights;
use crate::layout::CarouselGeometry;
use crate::scroller::{LoopScroller, ScrollPhase, ScrollPlan};
use crate::sequence::ItemSequence;

/// Deferred work owned by the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CarouselTask {
    Recycle,
    Settle,
    Relayout,
}

/// A looping carousel over host-provided blocks
pub struct Carousel<H, B> {
    host: H,
    items: ItemSequence<B>,
    config: CarouselConfig,
    geometry: Option<CarouselGeometry>,
    scroller: LoopScroller,
    gestures: GestureRecognizer,
    buttons: ButtonController,
    scheduler: TaskScheduler<CarouselTask>,
    pending_resize: Option<TaskId>,
    relayout_deferred: bool,
    signals: SignalDispatcher,
}

impl<H: CarouselHost, B: ContentBlock> Carousel<H, B> {
    /// Build a carousel and lay it out immediately.
    ///
    /// A host that is not laid out yet (zero width) is accepted; sizing
    /// waits for the first resize that reports a usable width.
    pub fn new(host: H, blocks: Vec<B>, config: CarouselConfig) -> Result<Self> {
        config.validate()?;

        let mut carousel = Self {
            host,
            items: ItemSequence::new(blocks),
            config,
            geometry: None,
            scroller: LoopScroller::new(config.track_transition()),
            gestures: GestureRecognizer::new(SwipeThresholds::from_config(&config)),
            buttons: ButtonController::new(),
            scheduler: TaskScheduler::new(),
            pending_resize: None,
            relayout_deferred: false,
            signals: SignalDispatcher::new(),
        };

        tracing::debug!("carousel mounted with {} item(s)", carousel.items.len());
        if let Err(err) = carousel.relayout() {
            tracing::debug!("initial layout deferred: {}", err);
        }
        Ok(carousel)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn items(&self) -> &ItemSequence<B> {
        &self.items
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Current steady-state geometry, if the container has been measured
    pub fn geometry(&self) -> Option<&CarouselGeometry> {
        self.geometry.as_ref()
    }

    pub fn phase(&self) -> ScrollPhase {
        self.scroller.phase()
    }

    pub fn is_busy(&self) -> bool {
        self.scroller.is_busy()
    }

    /// Roles of the scroll in flight
    pub fn scroll_plan(&self) -> Option<ScrollPlan> {
        self.scroller.plan()
    }

    pub fn button_visibility(&self) -> ButtonVisibility {
        self.buttons.current()
    }

    /// Track translation at `now_ms` as the host should be showing it
    pub fn track_offset_at(&self, now_ms: f64) -> f32 {
        self.scroller.offset_at(now_ms)
    }

    /// Earliest deadline of scheduled work, for hosts that sleep between frames
    pub fn next_deadline(&self) -> Option<f64> {
        self.scheduler.next_deadline()
    }

    /// Register a listener for a kind of signal
    pub fn on_signal<F>(&mut self, kind: SignalKind, handler: F)
    where
        F: Fn(&Signal) + Send + Sync + 'static,
    {
        self.signals.register(kind, handler);
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    pub fn scroll_forward(&mut self, now_ms: f64) -> Result<()> {
        self.scroll(Direction::Forward, now_ms)
    }

    pub fn scroll_backward(&mut self, now_ms: f64) -> Result<()> {
        self.scroll(Direction::Backward, now_ms)
    }

    /// Start a scroll; rejected while another one is in flight
    pub fn scroll(&mut self, direction: Direction, now_ms: f64) -> Result<()> {
        let result = self.try_scroll(direction, now_ms);
        if let Err(err) = &result {
            tracing::debug!("{:?} scroll ignored: {}", direction, err);
        }
        result
    }

    fn try_scroll(&mut self, direction: Direction, now_ms: f64) -> Result<()> {
        // A resize still inside its debounce window is applied now, so the
        // scroll never animates with the previous mode and stride
        if !self.scroller.is_busy() {
            if let Some(id) = self.pending_resize.take() {
                self.scheduler.cancel(id);
                self.relayout()?;
            }
        }

        let geometry = self
            .geometry
            .ok_or_else(|| CarouselError::GeometryNotReady(self.host.container_width()))?;

        let styles = self
            .scroller
            .begin(direction, &mut self.items, &geometry, now_ms)?;
        for style in &styles {
            self.host.apply_track_style(style);
        }

        let recycle_at = now_ms + self.config.recycle_delay_ms() as f64;
        let settle_at = now_ms + self.config.animation_duration_ms as f64;
        self.scheduler.schedule_at(recycle_at, CarouselTask::Recycle);
        self.scheduler.schedule_at(settle_at, CarouselTask::Settle);
        Ok(())
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Note a container resize; the relayout runs once resizes stop for
    /// `resize_debounce_ms`
    pub fn handle_resize(&mut self, now_ms: f64) {
        if let Some(id) = self.pending_resize.take() {
            self.scheduler.cancel(id);
        }
        let id = self.scheduler.schedule(
            now_ms,
            self.config.resize_debounce_ms as f64,
            CarouselTask::Relayout,
        );
        self.pending_resize = Some(id);
    }

    pub fn handle_touch_start(&mut self, x: f32, timestamp_ms: f64) {
        self.gestures.touch_start(x, timestamp_ms);
    }

    pub fn handle_touch_move(&mut self, x: f32) {
        self.gestures.touch_move(x);
    }

    /// Finish a touch. Returns the direction of the scroll it started, if
    /// the touch was a swipe.
    pub fn handle_touch_end(&mut self, x: f32, timestamp_ms: f64) -> Result<Option<Direction>> {
        match self.gestures.touch_end(x, timestamp_ms) {
            Some(direction) => {
                self.scroll(direction, timestamp_ms)?;
                Ok(Some(direction))
            }
            None => Ok(None),
        }
    }

    pub fn handle_touch_cancel(&mut self) {
        self.gestures.cancel();
    }

    /// Route a host event to the matching operation
    pub fn handle_event(&mut self, event: &Event) -> Result<()> {
        match event.event_type {
            event_types::TOUCH_START => {
                if let Some(x) = event.touch_x() {
                    self.handle_touch_start(x, event.timestamp);
                }
            }
            event_types::TOUCH_END => {
                if let Some(x) = event.touch_x() {
                    self.handle_touch_end(x, event.timestamp)?;
                }
            }
            event_types::TOUCH_CANCEL => self.handle_touch_cancel(),
            event_types::RESIZE => self.handle_resize(event.timestamp),
            event_types::NAV_FORWARD => self.scroll_forward(event.timestamp)?,
            event_types::NAV_BACKWARD => self.scroll_backward(event.timestamp)?,
            other => tracing::trace!("carousel ignoring event type {}", other),
        }
        Ok(())
    }

    // =========================================================================
    // Scheduled work
    // =========================================================================

    /// Run every task due at or before `now_ms`; returns how many ran
    pub fn tick(&mut self, now_ms: f64) -> usize {
        let mut ran = 0;
        loop {
            let due = self.scheduler.take_due(now_ms);
            if due.is_empty() {
                break;
            }
            for (id, task) in due {
                if self.pending_resize == Some(id) {
                    self.pending_resize = None;
                }
                self.run_task(task);
                ran += 1;
            }
        }
        ran
    }

    fn run_task(&mut self, task: CarouselTask) {
        match task {
            CarouselTask::Recycle => {
                if let Some(style) = self.scroller.recycle(&mut self.items) {
                    self.host.apply_track_style(&style);
                }
            }
            CarouselTask::Settle => {
                let Some(direction) = self.scroller.settle() else {
                    return;
                };
                if self.relayout_deferred {
                    self.relayout_deferred = false;
                    if let Err(err) = self.relayout() {
                        tracing::debug!("deferred relayout skipped: {}", err);
                    }
                } else {
                    self.update_buttons();
                }
                self.signals.dispatch(&Signal::ScrollSettled { direction });
            }
            CarouselTask::Relayout => {
                if let Err(err) = self.relayout() {
                    tracing::debug!("relayout skipped: {}", err);
                }
            }
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Recompute geometry from the container and resize every block.
    ///
    /// While a scroll is in flight nothing is touched; the relayout is
    /// remembered and runs when the scroll settles.
    pub fn relayout(&mut self) -> Result<CarouselGeometry> {
        if self.scroller.is_busy() {
            self.relayout_deferred = true;
            return Err(CarouselError::Busy);
        }

        let geometry = CarouselGeometry::compute(self.host.container_width(), &self.config)?;

        geometry.apply_widths(&mut self.items);
        normalize_heights(&mut self.items, self.config.height_floor_px);
        self.host.apply_track_style(&geometry.steady_style());

        if self.geometry.map(|g| g.mode) != Some(geometry.mode) {
            tracing::debug!(
                "viewport mode {:?}, {} visible",
                geometry.mode,
                geometry.visible_count
            );
        }
        self.geometry = Some(geometry);
        self.update_buttons();

        Ok(geometry)
    }

    fn update_buttons(&mut self) {
        let Some(geometry) = self.geometry else {
            return;
        };
        let next = ButtonVisibility::compute(self.items.len(), geometry.mode, &self.config);
        if let Some(changed) = self.buttons.update(next) {
            tracing::debug!("buttons visible: {}", changed.any());
            self.signals.dispatch(&Signal::ButtonsVisibilityChanged {
                forward: changed.forward,
                backward: changed.backward,
            });
        }
    }
}

impl<H: std::fmt::Debug, B> std::fmt::Debug for Carousel<H, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("host", &self.host)
            .field("items", &self.items.len())
            .field("geometry", &self.geometry)
            .field("phase", &self.scroller.phase())
            .field("scheduler", &self.scheduler)
            .finish()
    }
}
