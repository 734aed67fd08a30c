//! Focus index for the horizontally scrolling versions strip.
//!
//! Two inputs move the index and they deliberately disagree at the ends:
//!
//! - passive scrolling derives the index from the strip offset and clamps
//!   it to `[0, N-1]`
//! - the prev/next arrows (and swipes) step the index and wrap modulo `N`
//!
//! Every programmatic scroll the controller asks for is remembered until
//! the strip settles on it, so the scroll events it causes do not drag the
//! index back to whatever the offset formula says mid-animation.

/// Number of versions in the strip.
pub const VERSION_COUNT: usize = 3;

/// Version highlighted on load (the current one).
pub const DEFAULT_VERSION_INDEX: usize = 1;

/// Intersection ratio at which the news section counts as "in view".
pub const MAJORITY_VISIBLE: f64 = 0.5;

/// Horizontal touch travel that counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Distance from a programmatic target at which the strip counts as settled.
pub const SETTLE_EPSILON_PX: f64 = 1.0;

/// Measurements of the strip at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripMetrics {
    /// Visible width of the strip (`clientWidth`)
    pub container_width: f64,
    /// Full scrollable width of the strip (`scrollWidth`)
    pub scroll_width: f64,
    /// `window.innerWidth`, picks the item width ratio
    pub viewport_width: f64,
}

impl StripMetrics {
    /// Largest reachable scroll offset.
    pub fn max_offset(&self) -> f64 {
        (self.scroll_width - self.container_width).max(0.0)
    }
}

/// Item sizing rules of the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselLayout {
    /// Item width as a share of the container on wide viewports
    pub wide_ratio: f64,
    /// Item width as a share of the container on narrow viewports
    pub narrow_ratio: f64,
    /// Gap between items in px
    pub gap: f64,
    /// Viewport width from which the wide ratio applies
    pub wide_breakpoint: f64,
}

impl Default for CarouselLayout {
    fn default() -> Self {
        Self {
            wide_ratio: 0.45,
            narrow_ratio: 0.8,
            gap: 32.0,
            wide_breakpoint: 768.0,
        }
    }
}

impl CarouselLayout {
    /// Width of one item.
    pub fn item_width(&self, metrics: &StripMetrics) -> f64 {
        let ratio = if metrics.viewport_width >= self.wide_breakpoint {
            self.wide_ratio
        } else {
            self.narrow_ratio
        };
        metrics.container_width * ratio
    }

    /// Distance between the starts of two neighbouring items.
    pub fn stride(&self, metrics: &StripMetrics) -> f64 {
        self.item_width(metrics) + self.gap
    }

    /// Item nearest the strip's horizontal center, clamped to `[0, count-1]`.
    pub fn index_for_offset(&self, offset: f64, metrics: &StripMetrics, count: usize) -> usize {
        let stride = self.stride(metrics);
        let last = count.saturating_sub(1);
        if stride <= 0.0 {
            return 0;
        }
        let raw = ((offset + metrics.container_width / 2.0) / stride).round();
        if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(last)
        }
    }

    /// Horizontal center of item `index`, measured from the strip start.
    pub fn item_center(&self, index: usize, metrics: &StripMetrics) -> f64 {
        index as f64 * self.stride(metrics) + self.item_width(metrics) / 2.0
    }

    /// Offset that centers `index`, limited to the reachable range. Rounds
    /// back to `index` under [`index_for_offset`](Self::index_for_offset).
    pub fn offset_for_index(&self, index: usize, metrics: &StripMetrics) -> f64 {
        let target = self.item_center(index, metrics) - metrics.container_width / 2.0;
        target.clamp(0.0, metrics.max_offset())
    }
}

/// Inputs to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// Strip mounted.
    Mounted(StripMetrics),
    /// Intersection notification for the section holding the strip.
    SectionVisibility {
        /// `IntersectionObserverEntry.intersectionRatio`
        ratio: f64,
        /// Strip measurements
        metrics: StripMetrics,
    },
    /// The strip scrolled.
    Scrolled {
        /// `scrollLeft`
        offset: f64,
        /// Strip measurements
        metrics: StripMetrics,
    },
    /// The user grabbed the strip (wheel, touch or pointer down).
    UserScrollStarted,
    /// "Previous" arrow.
    Previous(StripMetrics),
    /// "Next" arrow.
    Next(StripMetrics),
    /// An item was clicked.
    Select {
        /// Item index
        index: usize,
        /// Strip measurements
        metrics: StripMetrics,
    },
    /// A touch gesture ended.
    Swipe {
        /// `endX - startX`; negative means the finger moved left
        delta_x: f64,
        /// Strip measurements
        metrics: StripMetrics,
    },
}

/// Side effect requested by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselCommand {
    /// Set the strip's `scrollLeft`.
    ScrollTo {
        /// Target offset
        offset: f64,
        /// Animate instead of jumping
        smooth: bool,
    },
}

/// Visual state of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Centered item: full opacity and scale, raised shadow
    Active,
    /// Every other item: faded and shrunk
    Muted,
}

impl Emphasis {
    /// CSS classes for a version card.
    pub fn class(&self) -> &'static str {
        match self {
            Emphasis::Active => "version-card is-active",
            Emphasis::Muted => "version-card is-muted",
        }
    }
}

/// Focus index state machine for the versions strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselController {
    active: usize,
    count: usize,
    default_index: usize,
    layout: CarouselLayout,
    pending_target: Option<f64>,
}

impl Default for CarouselController {
    fn default() -> Self {
        Self::new(VERSION_COUNT, DEFAULT_VERSION_INDEX, CarouselLayout::default())
    }
}

impl CarouselController {
    /// Controller for `count` items that highlights `default_index` on load.
    pub fn new(count: usize, default_index: usize, layout: CarouselLayout) -> Self {
        let count = count.max(1);
        let default_index = default_index.min(count - 1);
        Self {
            active: default_index,
            count,
            default_index,
            layout,
            pending_target: None,
        }
    }

    /// Index of the emphasized item.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Number of items.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sizing rules in use.
    pub fn layout(&self) -> &CarouselLayout {
        &self.layout
    }

    /// How item `index` should look.
    pub fn emphasis(&self, index: usize) -> Emphasis {
        if index == self.active {
            Emphasis::Active
        } else {
            Emphasis::Muted
        }
    }

    /// Apply one event, possibly asking for a scroll.
    pub fn reduce(self, event: CarouselEvent) -> (Self, Option<CarouselCommand>) {
        match event {
            CarouselEvent::Mounted(metrics) => self.focus(self.default_index, &metrics, false),
            CarouselEvent::SectionVisibility { ratio, metrics } => {
                if ratio >= MAJORITY_VISIBLE {
                    self.focus(self.default_index, &metrics, false)
                } else {
                    (self, None)
                }
            }
            CarouselEvent::Scrolled { offset, metrics } => (self.scrolled(offset, &metrics), None),
            CarouselEvent::UserScrollStarted => (
                Self {
                    pending_target: None,
                    ..self
                },
                None,
            ),
            CarouselEvent::Previous(metrics) => {
                let index = (self.active + self.count - 1) % self.count;
                self.focus(index, &metrics, true)
            }
            CarouselEvent::Next(metrics) => {
                let index = (self.active + 1) % self.count;
                self.focus(index, &metrics, true)
            }
            CarouselEvent::Select { index, metrics } => {
                let index = index.min(self.count - 1);
                self.focus(index, &metrics, true)
            }
            CarouselEvent::Swipe { delta_x, metrics } => {
                if delta_x <= -SWIPE_THRESHOLD_PX {
                    self.reduce(CarouselEvent::Next(metrics))
                } else if delta_x >= SWIPE_THRESHOLD_PX {
                    self.reduce(CarouselEvent::Previous(metrics))
                } else {
                    (self, None)
                }
            }
        }
    }

    fn focus(self, index: usize, metrics: &StripMetrics, smooth: bool) -> (Self, Option<CarouselCommand>) {
        let offset = self.layout.offset_for_index(index, metrics);
        let next = Self {
            active: index,
            pending_target: Some(offset),
            ..self
        };
        (next, Some(CarouselCommand::ScrollTo { offset, smooth }))
    }

    fn scrolled(self, offset: f64, metrics: &StripMetrics) -> Self {
        if metrics.container_width <= 0.0 {
            return self;
        }
        if let Some(target) = self.pending_target {
            let settled = (offset - target).abs() <= SETTLE_EPSILON_PX;
            return Self {
                pending_target: if settled { None } else { Some(target) },
                ..self
            };
        }
        Self {
            active: self.layout.index_for_offset(offset, metrics, self.count),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DESKTOP: StripMetrics = StripMetrics {
        container_width: 1000.0,
        scroll_width: 2500.0,
        viewport_width: 1280.0,
    };

    const PHONE: StripMetrics = StripMetrics {
        container_width: 375.0,
        scroll_width: 1400.0,
        viewport_width: 375.0,
    };

    fn settled() -> CarouselController {
        // Mounted and the instant jump already landed.
        let (controller, command) = CarouselController::default().reduce(CarouselEvent::Mounted(DESKTOP));
        let Some(CarouselCommand::ScrollTo { offset, .. }) = command else {
            panic!("mount must scroll");
        };
        controller
            .reduce(CarouselEvent::Scrolled {
                offset,
                metrics: DESKTOP,
            })
            .0
    }

    fn scroll(controller: CarouselController, offset: f64) -> CarouselController {
        controller
            .reduce(CarouselEvent::Scrolled {
                offset,
                metrics: DESKTOP,
            })
            .0
    }

    #[test]
    fn item_width_depends_on_viewport() {
        let layout = CarouselLayout::default();
        assert_eq!(layout.item_width(&DESKTOP), 450.0);
        assert_eq!(layout.stride(&DESKTOP), 482.0);
        assert_eq!(layout.item_width(&PHONE), 300.0);
        assert_eq!(layout.stride(&PHONE), 332.0);
    }

    #[test]
    fn offset_482_on_a_1000px_strip_is_item_2() {
        let layout = CarouselLayout::default();
        // (482 + 500) / 482 = 2.04
        assert_eq!(layout.index_for_offset(482.0, &DESKTOP, 3), 2);
    }

    #[test]
    fn scroll_derived_index_is_clamped_not_wrapped() {
        let layout = CarouselLayout::default();
        assert_eq!(layout.index_for_offset(5000.0, &DESKTOP, 3), 2);
        assert_eq!(layout.index_for_offset(-800.0, &DESKTOP, 3), 0);
    }

    #[test]
    fn index_derivation_is_idempotent() {
        let controller = settled();
        for offset in [0.0, 120.0, 241.0, 482.0, 900.0] {
            let once = scroll(controller, offset);
            let twice = scroll(once, offset);
            assert_eq!(once.active_index(), twice.active_index(), "offset={offset}");
        }
    }

    #[test]
    fn offsets_stop_at_the_end_of_the_strip() {
        let layout = CarouselLayout::default();
        assert_eq!(layout.offset_for_index(10, &DESKTOP), DESKTOP.max_offset());
    }

    fn target(command: Option<CarouselCommand>) -> f64 {
        match command {
            Some(CarouselCommand::ScrollTo { offset, .. }) => offset,
            None => panic!("expected a scroll command"),
        }
    }

    fn assert_centered(controller: &CarouselController, offset: f64, metrics: &StripMetrics) {
        let center = controller.layout().item_center(controller.active_index(), metrics);
        let midline = offset + metrics.container_width / 2.0;
        assert!(
            (center - midline).abs() < 1e-9,
            "item {} center {center} vs strip midline {midline}",
            controller.active_index()
        );
    }

    #[test]
    fn programmatic_targets_center_the_active_item_on_a_phone() {
        let (mounted, command) = CarouselController::default().reduce(CarouselEvent::Mounted(PHONE));
        assert_eq!(mounted.active_index(), 1);
        let offset = target(command);
        assert_eq!(offset, 294.5);
        assert_centered(&mounted, offset, &PHONE);

        // Landing on the target releases the strip to passive tracking.
        let landed = mounted
            .reduce(CarouselEvent::Scrolled {
                offset,
                metrics: PHONE,
            })
            .0;
        assert_eq!(landed.active_index(), 1);

        let (next, command) = landed.reduce(CarouselEvent::Next(PHONE));
        assert_eq!(next.active_index(), 2);
        assert_centered(&next, target(command), &PHONE);

        let (previous, command) = next.reduce(CarouselEvent::Previous(PHONE));
        assert_eq!(previous.active_index(), 1);
        assert_centered(&previous, target(command), &PHONE);
    }

    #[test]
    fn centered_offsets_round_back_to_their_item() {
        let layout = CarouselLayout::default();
        for metrics in [DESKTOP, PHONE] {
            for index in 1..3 {
                let offset = layout.offset_for_index(index, &metrics);
                assert_eq!(layout.index_for_offset(offset, &metrics, 3), index);
            }
            // The first item cannot be centered; the strip stops at 0.
            assert_eq!(layout.offset_for_index(0, &metrics), 0.0);
        }
    }

    #[test]
    fn mount_focuses_default_item_without_animation() {
        let (controller, command) = CarouselController::default().reduce(CarouselEvent::Mounted(DESKTOP));
        assert_eq!(controller.active_index(), DEFAULT_VERSION_INDEX);
        assert_eq!(
            command,
            Some(CarouselCommand::ScrollTo {
                offset: 207.0,
                smooth: false
            })
        );
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut controller = settled();
        let mut seen = vec![];
        for _ in 0..4 {
            controller = controller.reduce(CarouselEvent::Next(DESKTOP)).0;
            seen.push(controller.active_index());
        }
        assert_eq!(seen, vec![2, 0, 1, 2]);

        let at_zero = CarouselController::new(3, 0, CarouselLayout::default());
        let (prev, _) = at_zero.reduce(CarouselEvent::Previous(DESKTOP));
        assert_eq!(prev.active_index(), 2);
    }

    #[test]
    fn arrows_scroll_smoothly() {
        let (_, command) = settled().reduce(CarouselEvent::Next(DESKTOP));
        assert_eq!(
            command,
            Some(CarouselCommand::ScrollTo {
                offset: 689.0,
                smooth: true
            })
        );
    }

    #[test]
    fn programmatic_scroll_is_not_undone_while_settling() {
        let (controller, _) = settled().reduce(CarouselEvent::Previous(DESKTOP));
        assert_eq!(controller.active_index(), 0);

        // Animation frames on the way to offset 0, then the landing.
        let controller = scroll(controller, 180.0);
        let controller = scroll(controller, 40.0);
        let controller = scroll(controller, 0.0);
        assert_eq!(controller.active_index(), 0);

        // Afterwards the user is back in charge.
        let controller = scroll(controller, 482.0);
        assert_eq!(controller.active_index(), 2);
    }

    #[test]
    fn grabbing_the_strip_cancels_the_pending_target() {
        let (controller, _) = settled().reduce(CarouselEvent::Next(DESKTOP));
        let controller = controller.reduce(CarouselEvent::UserScrollStarted).0;
        let controller = scroll(controller, 0.0);
        assert_eq!(controller.active_index(), 1);
    }

    #[test]
    fn majority_visibility_resets_to_default() {
        let (moved, _) = settled().reduce(CarouselEvent::Next(DESKTOP));
        assert_eq!(moved.active_index(), 2);

        let (unchanged, command) = moved.reduce(CarouselEvent::SectionVisibility {
            ratio: 0.3,
            metrics: DESKTOP,
        });
        assert_eq!(unchanged.active_index(), 2);
        assert_eq!(command, None);

        let (reset, command) = moved.reduce(CarouselEvent::SectionVisibility {
            ratio: 0.5,
            metrics: DESKTOP,
        });
        assert_eq!(reset.active_index(), DEFAULT_VERSION_INDEX);
        assert!(command.is_some());
    }

    #[test]
    fn select_clamps_out_of_range_items() {
        let (controller, _) = settled().reduce(CarouselEvent::Select {
            index: 9,
            metrics: DESKTOP,
        });
        assert_eq!(controller.active_index(), 2);
    }

    #[test]
    fn swipes_step_like_the_arrows() {
        let start = CarouselController::new(3, 2, CarouselLayout::default());
        let (left, _) = start.reduce(CarouselEvent::Swipe {
            delta_x: -80.0,
            metrics: PHONE,
        });
        assert_eq!(left.active_index(), 0);

        let (right, _) = left.reduce(CarouselEvent::Swipe {
            delta_x: 80.0,
            metrics: PHONE,
        });
        assert_eq!(right.active_index(), 2);

        let (tap, command) = right.reduce(CarouselEvent::Swipe {
            delta_x: 12.0,
            metrics: PHONE,
        });
        assert_eq!(tap.active_index(), 2);
        assert_eq!(command, None);
    }

    #[test]
    fn emphasis_follows_active_index() {
        let controller = settled();
        let classes: Vec<_> = (0..3).map(|i| controller.emphasis(i)).collect();
        assert_eq!(classes, vec![Emphasis::Muted, Emphasis::Active, Emphasis::Muted]);
        assert_eq!(Emphasis::Active.class(), "version-card is-active");
    }

    #[test]
    fn zero_width_strip_is_ignored() {
        let hidden = StripMetrics {
            container_width: 0.0,
            scroll_width: 0.0,
            viewport_width: 1280.0,
        };
        let controller = settled()
            .reduce(CarouselEvent::Scrolled {
                offset: 300.0,
                metrics: hidden,
            })
            .0;
        assert_eq!(controller.active_index(), DEFAULT_VERSION_INDEX);
    }
}
