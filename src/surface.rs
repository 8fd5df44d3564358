use std::time::Duration;

use crate::slide::SlideRecord;

/// Mount point that receives one panel per slide.
pub trait PanelHost {
    fn append_panel(&mut self, record: &SlideRecord, visible: bool);
    fn set_panel_visible(&mut self, index: usize, visible: bool);
}

/// Mount point that receives one selectable indicator per slide.
pub trait IndicatorHost {
    fn append_indicator(&mut self, index: usize, highlighted: bool);
    fn set_indicator_highlighted(&mut self, index: usize, highlighted: bool);
}

/// Source of recurring advance ticks.
///
/// There is no cancel: once armed, the interval keeps firing for the life of
/// the host.
pub trait Scheduler {
    fn set_interval(&mut self, period: Duration);
}
