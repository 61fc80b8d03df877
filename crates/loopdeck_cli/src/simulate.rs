//! Headless carousel simulation on a virtual clock

use std::fmt::Write as _;

use loopdeck_carousel::prelude::*;

use crate::config::SimulationConfig;
use crate::script::ScriptStep;

/// Label for the block at `index`: A..Z, then #27, #28, ...
fn label(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        format!("#{}", index + 1)
    }
}

/// A carousel over in-memory blocks driven by scripted input
pub struct Simulation {
    carousel: Carousel<MemoryHost, MemoryBlock>,
    clock_ms: f64,
}

impl Simulation {
    pub fn new(sim: &SimulationConfig, config: CarouselConfig) -> Result<Self, CarouselError> {
        // Vary text length so normalization has something to do
        let blocks: Vec<MemoryBlock> = (0..sim.items)
            .map(|i| MemoryBlock::new(label(i), sim.text_len * (i % 3 + 1)))
            .collect();
        let carousel = Carousel::new(MemoryHost::new(sim.width), blocks, config)?;
        Ok(Self {
            carousel,
            clock_ms: 0.0,
        })
    }

    pub fn carousel(&self) -> &Carousel<MemoryHost, MemoryBlock> {
        &self.carousel
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Apply one step, then run the clock until nothing is pending.
    ///
    /// Recoverable rejections (busy, too few items) are reported in the
    /// returned line instead of aborting the run.
    pub fn apply(&mut self, step: ScriptStep) -> String {
        let outcome = match step {
            ScriptStep::Forward => {
                let result = self.carousel.scroll_forward(self.clock_ms);
                self.report(result)
            }
            ScriptStep::Backward => {
                let result = self.carousel.scroll_backward(self.clock_ms);
                self.report(result)
            }
            ScriptStep::Resize(width) => {
                self.carousel.host_mut().set_width(width);
                self.carousel.handle_resize(self.clock_ms);
                format!("resize to {width}")
            }
            ScriptStep::Swipe { x, dx, duration_ms } => {
                self.carousel.handle_touch_start(x, self.clock_ms);
                self.clock_ms += duration_ms;
                match self.carousel.handle_touch_end(x + dx, self.clock_ms) {
                    Ok(Some(direction)) => format!("swipe {dx}px -> {direction:?}"),
                    Ok(None) => format!("swipe {dx}px ignored"),
                    Err(err) => format!("swipe {dx}px rejected: {err}"),
                }
            }
        };
        self.settle();
        outcome
    }

    fn report(&self, result: Result<(), CarouselError>) -> String {
        match (result, self.carousel.scroll_plan()) {
            (Ok(()), Some(plan)) => format!("scroll {:?}", plan.direction),
            (Ok(()), None) => "scroll".to_string(),
            (Err(err), _) => format!("rejected: {err}"),
        }
    }

    /// Advance virtual time through every pending deadline
    pub fn settle(&mut self) {
        while let Some(deadline) = self.carousel.next_deadline() {
            self.clock_ms = self.clock_ms.max(deadline);
            let ran = self.carousel.tick(self.clock_ms);
            tracing::trace!("t={:.0}ms ran {} task(s)", self.clock_ms, ran);
        }
    }

    /// Human-readable state of the carousel
    pub fn snapshot(&self) -> String {
        let items = self.carousel.items();
        let mut out = String::new();

        let order: Vec<&str> = items.iter().map(|b| b.label()).collect();
        let visible: Vec<&str> = items
            .iter()
            .filter(|b| b.is_visible())
            .map(|b| b.label())
            .collect();
        let _ = writeln!(out, "  order:    {}", order.join(" "));
        let _ = writeln!(out, "  visible:  {}", visible.join(" "));

        match self.carousel.geometry() {
            Some(g) => {
                let _ = writeln!(
                    out,
                    "  geometry: {:?} x{} item={:.1}px track={:.1}px",
                    g.mode,
                    g.visible_count,
                    g.item_width,
                    g.track_width_steady()
                );
            }
            None => {
                let _ = writeln!(out, "  geometry: not ready");
            }
        }
        if let Some(block) = items.front() {
            let _ = writeln!(out, "  height:   {:.1}px", block.height());
        }
        let _ = writeln!(
            out,
            "  motion:   {}",
            self.carousel.config().track_transition().to_css("transform")
        );

        let buttons = self.carousel.button_visibility();
        let _ = write!(
            out,
            "  buttons:  forward={} backward={}",
            if buttons.forward { "shown" } else { "hidden" },
            if buttons.backward { "shown" } else { "hidden" }
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(items: usize, width: f32) -> Simulation {
        let config = SimulationConfig {
            items,
            width,
            ..Default::default()
        };
        Simulation::new(&config, CarouselConfig::default()).unwrap()
    }

    fn order(sim: &Simulation) -> Vec<String> {
        sim.carousel()
            .items()
            .iter()
            .map(|b| b.label().to_string())
            .collect()
    }

    #[test]
    fn test_labels() {
        assert_eq!(label(0), "A");
        assert_eq!(label(25), "Z");
        assert_eq!(label(26), "#27");
    }

    #[test]
    fn test_steps_settle_fully() {
        let mut s = sim(5, 1016.0);
        assert_eq!(s.apply(ScriptStep::Forward), "scroll Forward");
        assert_eq!(s.carousel().phase(), ScrollPhase::Idle);
        assert_eq!(s.clock_ms(), 500.0);
        assert_eq!(order(&s), vec!["B", "C", "D", "E", "A"]);

        s.apply(ScriptStep::Backward);
        assert_eq!(order(&s), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_rejection_is_reported() {
        let mut s = sim(2, 1016.0);
        let line = s.apply(ScriptStep::Forward);
        assert!(line.starts_with("rejected:"), "{line}");
    }

    #[test]
    fn test_resize_and_swipe() {
        let mut s = sim(3, 1016.0);
        s.apply(ScriptStep::Resize(375.0));
        assert_eq!(s.carousel().geometry().unwrap().visible_count, 1);

        let line = s.apply(ScriptStep::Swipe {
            x: 200.0,
            dx: -40.0,
            duration_ms: 50.0,
        });
        assert_eq!(line, "swipe -40px -> Forward");
        assert_eq!(order(&s), vec!["B", "C", "A"]);

        let line = s.apply(ScriptStep::Swipe {
            x: 200.0,
            dx: 10.0,
            duration_ms: 50.0,
        });
        assert_eq!(line, "swipe 10px ignored");
    }

    #[test]
    fn test_snapshot() {
        let s = sim(3, 1016.0);
        let text = s.snapshot();
        assert!(text.contains("order:    A B C"));
        assert!(text.contains("visible:  A B"));
        assert!(text.contains("item=500.0px track=1016.0px"));
        assert!(text.contains("buttons:  forward=shown backward=shown"));
        assert!(text.contains("motion:   transform 500ms ease"));
    }
}
