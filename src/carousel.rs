use std::time::Duration;

use thiserror::Error;

use crate::slide::SlideRecord;
use crate::surface::{IndicatorHost, PanelHost, Scheduler};

/// Why a carousel did not come up. The page treats every variant as "feature
/// not present".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
    #[error("panel mount point is missing")]
    MissingPanelHost,
    #[error("indicator mount point is missing")]
    MissingIndicatorHost,
    #[error("no slides configured")]
    EmptyConfig,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("slide {target} is out of range for {len} slides")]
    OutOfRange { target: usize, len: usize },
}

/// Input the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// The user picked an indicator.
    Select(usize),
    /// The advance interval elapsed.
    AdvanceTick,
}

/// Cycles visibility among a fixed set of panels, kept in step with a row of
/// indicators.
///
/// Exactly one panel and one indicator are active at any time. The active
/// index is private; hosts observe it through the visibility and highlight
/// calls they receive.
#[derive(Debug)]
pub struct Carousel<P, I> {
    panels: P,
    indicators: I,
    len: usize,
    current: usize,
}

impl<P: PanelHost, I: IndicatorHost> Carousel<P, I> {
    /// Render every slide into the mount points and arm the advance timer.
    ///
    /// Nothing is rendered and the timer stays unarmed unless both mount
    /// points exist and `slides` is non-empty.
    pub fn try_mount<S: Scheduler>(
        slides: &[SlideRecord],
        interval: Duration,
        panels: Option<P>,
        indicators: Option<I>,
        scheduler: &mut S,
    ) -> Result<Self, MountError> {
        let mut panels = panels.ok_or(MountError::MissingPanelHost)?;
        let mut indicators = indicators.ok_or(MountError::MissingIndicatorHost)?;
        if slides.is_empty() {
            return Err(MountError::EmptyConfig);
        }

        for (index, record) in slides.iter().enumerate() {
            panels.append_panel(record, index == 0);
            indicators.append_indicator(index, index == 0);
        }

        scheduler.set_interval(interval);

        Ok(Self {
            panels,
            indicators,
            len: slides.len(),
            current: 0,
        })
    }

    /// Like [`Carousel::try_mount`], silently disabling the feature on any
    /// unmet precondition.
    pub fn mount<S: Scheduler>(
        slides: &[SlideRecord],
        interval: Duration,
        panels: Option<P>,
        indicators: Option<I>,
        scheduler: &mut S,
    ) -> Option<Self> {
        Self::try_mount(slides, interval, panels, indicators, scheduler).ok()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Hide the active pair and show the pair at `target`.
    pub fn go_to(&mut self, target: usize) -> Result<(), CarouselError> {
        if target >= self.len {
            return Err(CarouselError::OutOfRange {
                target,
                len: self.len,
            });
        }

        self.panels.set_panel_visible(self.current, false);
        self.indicators
            .set_indicator_highlighted(self.current, false);

        self.current = target;

        self.panels.set_panel_visible(self.current, true);
        self.indicators.set_indicator_highlighted(self.current, true);
        Ok(())
    }

    pub fn on_select(&mut self, index: usize) -> Result<(), CarouselError> {
        self.go_to(index)
    }

    pub fn on_advance_tick(&mut self) {
        let next = (self.current + 1) % self.len;
        // `next` is always in range since `len > 0` once mounted.
        let _ = self.go_to(next);
    }

    pub fn handle(&mut self, event: CarouselEvent) -> Result<(), CarouselError> {
        match event {
            CarouselEvent::Select(index) => self.on_select(index),
            CarouselEvent::AdvanceTick => {
                self.on_advance_tick();
                Ok(())
            }
        }
    }

    pub fn panels(&self) -> &P {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut P {
        &mut self.panels
    }

    pub fn indicators(&self) -> &I {
        &self.indicators
    }

    pub fn indicators_mut(&mut self) -> &mut I {
        &mut self.indicators
    }
}
