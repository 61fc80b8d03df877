//! Loop scroller
//!
//! Executes one directional scroll with the rotate-and-recycle trick: the
//! track is stretched to reveal one extra block, its transform is animated
//! by one stride, and shortly before the transition ends the leaving block
//! is recycled (duplicated onto the far edge, original removed) and the
//! track snaps back to rest without a transition. A finite sequence thus
//! scrolls forever while its length never changes.
//!
//! # Phases
//!
//! ```text
//!   Idle --SCROLL_REQUEST--> Expanding --RECYCLE_DUE--> Settling --SETTLE_DUE--> Idle
//! ```
//!
//! Every phase but `Idle` counts as busy; scroll requests are rejected
//! until the machine is back at rest.

use loopdeck_animation::{Transition, Tween};
use loopdeck_core::events::{event_types, EventType};
use loopdeck_core::{CarouselError, Direction, Result, StateMachine, StateTransitions};
use smallvec::{smallvec, SmallVec};

use crate::block::{ContentBlock, TrackStyle};
use crate::layout::CarouselGeometry;
use crate::sequence::ItemSequence;

/// Loop scroller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollPhase {
    /// At rest, accepting scroll requests
    #[default]
    Idle,
    /// Track stretched and transform animating
    Expanding,
    /// Recycle done, waiting for the transition window to close
    Settling,
}

impl StateTransitions for ScrollPhase {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (ScrollPhase::Idle, event_types::SCROLL_REQUEST) => Some(ScrollPhase::Expanding),
            (ScrollPhase::Expanding, event_types::RECYCLE_DUE) => Some(ScrollPhase::Settling),
            (ScrollPhase::Settling, event_types::SETTLE_DUE) => Some(ScrollPhase::Idle),
            _ => None,
        }
    }
}

impl ScrollPhase {
    pub fn is_busy(&self) -> bool {
        !matches!(self, ScrollPhase::Idle)
    }
}

/// Which blocks play which role during one scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollPlan {
    pub direction: Direction,
    /// Index of the block entering the window, after staging
    pub incoming: usize,
    /// Index of the block that will be removed at recycle, after staging
    pub leaving: usize,
    /// The sequence holds exactly one off-window block, which therefore
    /// both enters and gets recycled
    pub single_spare: bool,
}

/// State of the scroll currently in flight
#[derive(Debug, Clone, Copy)]
struct ActiveScroll {
    plan: ScrollPlan,
    geometry: CarouselGeometry,
    tween: Tween,
}

/// The scroll state machine
#[derive(Debug, Clone)]
pub struct LoopScroller {
    fsm: StateMachine<ScrollPhase>,
    active: Option<ActiveScroll>,
    transition: Transition,
}

impl LoopScroller {
    pub fn new(transition: Transition) -> Self {
        Self {
            fsm: StateMachine::new(ScrollPhase::Idle),
            active: None,
            transition,
        }
    }

    pub fn phase(&self) -> ScrollPhase {
        self.fsm.current_state()
    }

    pub fn is_busy(&self) -> bool {
        self.phase().is_busy()
    }

    /// Direction of the scroll in flight
    pub fn direction(&self) -> Option<Direction> {
        self.active.map(|a| a.plan.direction)
    }

    /// Roles of the scroll in flight
    pub fn plan(&self) -> Option<ScrollPlan> {
        self.active.map(|a| a.plan)
    }

    /// Track translation at `now_ms` (0 at rest)
    pub fn offset_at(&self, now_ms: f64) -> f32 {
        match self.active {
            Some(active) if self.phase() == ScrollPhase::Expanding => {
                active.tween.value_at(now_ms)
            }
            _ => 0.0,
        }
    }

    /// Start a scroll.
    ///
    /// Stages the incoming block, then returns the track styles to apply in
    /// order: an instant stretch/placement followed by the animated move.
    pub fn begin<B: ContentBlock>(
        &mut self,
        direction: Direction,
        items: &mut ItemSequence<B>,
        geometry: &CarouselGeometry,
        now_ms: f64,
    ) -> Result<SmallVec<[TrackStyle; 2]>> {
        if self.is_busy() {
            return Err(CarouselError::Busy);
        }

        let visible = geometry.visible_count;
        let have = items.len();
        let need = geometry.min_scrollable_items();
        if have < need {
            return Err(CarouselError::InsufficientItems { have, need });
        }

        let single_spare = have == need;
        let stride = geometry.stride();
        let stretched = geometry.track_width_transitional();

        let (plan, styles, tween) = match direction {
            Direction::Forward => {
                // The first off-window block slides in from the right
                if let Some(next) = items.get_mut(visible) {
                    next.set_visible(true);
                }
                let plan = ScrollPlan {
                    direction,
                    incoming: visible,
                    leaving: 0,
                    single_spare,
                };
                let tween = Tween::new(0.0, -stride, now_ms, self.transition);
                let styles: SmallVec<[TrackStyle; 2]> = smallvec![
                    TrackStyle::instant(stretched, 0.0),
                    TrackStyle::animated(stretched, -stride, self.transition),
                ];
                (plan, styles, tween)
            }
            Direction::Backward => {
                // A copy of the tail enters from the left; with a single
                // spare the tail is that spare, so it fills both roles
                let Some(mut incoming) = items.duplicate_back() else {
                    return Err(CarouselError::InsufficientItems { have, need });
                };
                incoming.set_visible(true);
                items.push_front(incoming);
                let plan = ScrollPlan {
                    direction,
                    incoming: 0,
                    leaving: items.len() - 1,
                    single_spare,
                };
                let tween = Tween::new(-stride, 0.0, now_ms, self.transition);
                let styles: SmallVec<[TrackStyle; 2]> = smallvec![
                    TrackStyle::instant(stretched, -stride),
                    TrackStyle::animated(stretched, 0.0, self.transition),
                ];
                (plan, styles, tween)
            }
        };

        if single_spare {
            tracing::debug!(
                "{:?} scroll with a single spare block ({} item(s), {} visible)",
                direction,
                items.len(),
                visible
            );
        }

        self.fsm.send(event_types::SCROLL_REQUEST);
        self.active = Some(ActiveScroll {
            plan,
            geometry: *geometry,
            tween,
        });

        tracing::debug!(
            "scroll {:?} started at {:.1}ms, stride={:.1}px",
            direction,
            now_ms,
            stride
        );
        Ok(styles)
    }

    /// Recycle the leaving block and return the steady track style.
    ///
    /// Runs as one unit: duplicate, add, remove, reset. Returns `None` when
    /// no scroll is expanding.
    pub fn recycle<B: ContentBlock>(&mut self, items: &mut ItemSequence<B>) -> Option<TrackStyle> {
        let active = self.active?;
        if !self.fsm.can_send(event_types::RECYCLE_DUE) {
            return None;
        }

        let before = items.len();
        match active.plan.direction {
            Direction::Forward => {
                // Clone first so the sequence never loses an item
                if let Some(copy) = items.duplicate_front() {
                    items.push_back(copy);
                    items.pop_front();
                }
            }
            Direction::Backward => {
                items.pop_back();
            }
        }
        items.show_window(active.geometry.visible_count);

        self.fsm.send(event_types::RECYCLE_DUE);
        tracing::debug!(
            "recycled {:?}: {} -> {} item(s)",
            active.plan.direction,
            before,
            items.len()
        );

        Some(active.geometry.steady_style())
    }

    /// Close the transition window; returns the direction that settled
    pub fn settle(&mut self) -> Option<Direction> {
        self.fsm.send(event_types::SETTLE_DUE)?;
        self.active.take().map(|a| a.plan.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CarouselConfig;
    use crate::memory::MemoryBlock;
    use loopdeck_animation::Easing;

    fn labels(items: &ItemSequence<MemoryBlock>) -> Vec<String> {
        items.iter().map(|b| b.label().to_string()).collect()
    }

    fn setup(labels: &[&str], width: f32) -> (ItemSequence<MemoryBlock>, CarouselGeometry) {
        let config = CarouselConfig::default();
        let geometry = CarouselGeometry::compute(width, &config).unwrap();
        let mut items = ItemSequence::new(labels.iter().map(|l| MemoryBlock::new(*l, 20)).collect());
        geometry.apply_widths(&mut items);
        (items, geometry)
    }

    fn scroller() -> LoopScroller {
        LoopScroller::new(Transition::new(500, Easing::Linear))
    }

    #[test]
    fn test_phase_transitions() {
        let mut fsm = StateMachine::new(ScrollPhase::Idle);
        assert_eq!(fsm.send(event_types::RECYCLE_DUE), None);
        assert_eq!(fsm.send(event_types::SCROLL_REQUEST), Some(ScrollPhase::Expanding));
        assert_eq!(fsm.send(event_types::SCROLL_REQUEST), None);
        assert_eq!(fsm.send(event_types::RECYCLE_DUE), Some(ScrollPhase::Settling));
        assert_eq!(fsm.send(event_types::SETTLE_DUE), Some(ScrollPhase::Idle));
    }

    #[test]
    fn test_forward_cycle() {
        let (mut items, geometry) = setup(&["A", "B", "C", "D", "E"], 1016.0);
        let mut scroller = scroller();

        let styles = scroller
            .begin(Direction::Forward, &mut items, &geometry, 0.0)
            .unwrap();
        assert_eq!(scroller.phase(), ScrollPhase::Expanding);
        assert_eq!(styles.len(), 2);
        assert_eq!(styles[0], TrackStyle::instant(1524.0, 0.0));
        assert_eq!(styles[1].translate_x, -516.0);
        assert!(styles[1].is_animated());
        assert_eq!(items.visible_len(), 3);
        assert_eq!(items.len(), 5);

        let steady = scroller.recycle(&mut items).unwrap();
        assert_eq!(steady, TrackStyle::instant(1016.0, 0.0));
        assert_eq!(labels(&items), vec!["B", "C", "D", "E", "A"]);
        assert_eq!(items.visible_len(), 2);
        assert_eq!(scroller.phase(), ScrollPhase::Settling);

        assert_eq!(scroller.settle(), Some(Direction::Forward));
        assert_eq!(scroller.phase(), ScrollPhase::Idle);
    }

    #[test]
    fn test_backward_cycle() {
        let (mut items, geometry) = setup(&["A", "B", "C", "D", "E"], 1016.0);
        let mut scroller = scroller();

        let styles = scroller
            .begin(Direction::Backward, &mut items, &geometry, 0.0)
            .unwrap();
        assert_eq!(styles[0], TrackStyle::instant(1524.0, -516.0));
        assert_eq!(styles[1].translate_x, 0.0);
        // Transient sixth block: the tail copy at the head
        assert_eq!(labels(&items), vec!["E", "A", "B", "C", "D", "E"]);

        scroller.recycle(&mut items).unwrap();
        assert_eq!(labels(&items), vec!["E", "A", "B", "C", "D"]);
        assert_eq!(items.visible_len(), 2);
        scroller.settle();
    }

    #[test]
    fn test_busy_rejects_second_scroll() {
        let (mut items, geometry) = setup(&["A", "B", "C"], 1016.0);
        let mut scroller = scroller();

        scroller
            .begin(Direction::Forward, &mut items, &geometry, 0.0)
            .unwrap();
        let err = scroller
            .begin(Direction::Backward, &mut items, &geometry, 10.0)
            .unwrap_err();
        assert!(matches!(err, CarouselError::Busy));
        assert_eq!(items.len(), 3);

        scroller.recycle(&mut items);
        assert!(matches!(
            scroller.begin(Direction::Forward, &mut items, &geometry, 460.0),
            Err(CarouselError::Busy)
        ));
    }

    #[test]
    fn test_insufficient_items_is_noop() {
        let (mut items, geometry) = setup(&["A", "B"], 1016.0);
        let mut scroller = scroller();

        let err = scroller
            .begin(Direction::Forward, &mut items, &geometry, 0.0)
            .unwrap_err();
        assert!(matches!(
            err,
            CarouselError::InsufficientItems { have: 2, need: 3 }
        ));
        assert_eq!(scroller.phase(), ScrollPhase::Idle);
        assert_eq!(items.visible_len(), 2);
    }

    #[test]
    fn test_insufficient_items_backward_reports_actual_count() {
        let (mut items, geometry) = setup(&["A", "B"], 1016.0);
        let mut scroller = scroller();

        let err = scroller
            .begin(Direction::Backward, &mut items, &geometry, 0.0)
            .unwrap_err();
        assert!(matches!(
            err,
            CarouselError::InsufficientItems { have: 2, need: 3 }
        ));
        assert_eq!(labels(&items), vec!["A", "B"]);
        assert!(scroller.plan().is_none());
    }

    #[test]
    fn test_recycle_without_scroll_does_nothing() {
        let (mut items, _) = setup(&["A", "B", "C"], 1016.0);
        let mut scroller = scroller();
        assert!(scroller.recycle(&mut items).is_none());
        assert!(scroller.settle().is_none());
        assert_eq!(labels(&items), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_single_spare_in_compact_mode() {
        let (mut items, geometry) = setup(&["A", "B"], 375.0);
        let mut scroller = scroller();

        scroller
            .begin(Direction::Backward, &mut items, &geometry, 0.0)
            .unwrap();
        let plan = scroller.plan().unwrap();
        assert!(plan.single_spare);
        // The spare B is copied in as the incoming block and the original
        // B is the one recycled
        assert_eq!(labels(&items), vec!["B", "A", "B"]);
        assert_eq!(plan.incoming, 0);
        assert_eq!(plan.leaving, 2);
        assert!(items.get(0).unwrap().is_visible());
        assert!(items.get(1).unwrap().is_visible());

        scroller.recycle(&mut items);
        assert_eq!(labels(&items), vec!["B", "A"]);
    }

    #[test]
    fn test_offset_follows_tween() {
        let (mut items, geometry) = setup(&["A", "B", "C"], 1016.0);
        let mut scroller = scroller();
        scroller
            .begin(Direction::Forward, &mut items, &geometry, 1000.0)
            .unwrap();

        assert_eq!(scroller.offset_at(1000.0), 0.0);
        assert!((scroller.offset_at(1250.0) + 258.0).abs() < 1e-3);

        scroller.recycle(&mut items);
        assert_eq!(scroller.offset_at(1460.0), 0.0);
    }
}
