use super::services::AxisDomainCalculator;
use super::value_objects::{ReleaseOutcome, SelectionDraft, SelectionState, ZoomWindow};
use crate::domain::balance::{Channel, DataPoint, PeriodDataset};
use crate::domain::errors::InvalidDatasetError;
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Drag-to-zoom state machine.
///
/// `Idle` has no draft and a full window, `Selecting` holds a draft, and
/// `Zoomed` holds a committed window. The renderer only reads
/// [`zoom_window`](Self::zoom_window) and [`draft`](Self::draft).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeSelectionEngine {
    draft: Option<SelectionDraft>,
    window: ZoomWindow,
}

impl RangeSelectionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        if self.draft.is_some() {
            SelectionState::Selecting
        } else if self.window.committed {
            SelectionState::Zoomed
        } else {
            SelectionState::Idle
        }
    }

    pub fn zoom_window(&self) -> &ZoomWindow {
        &self.window
    }

    pub fn draft(&self) -> Option<&SelectionDraft> {
        self.draft.as_ref()
    }

    pub fn highlight(&self) -> Option<(i64, i64)> {
        self.draft.as_ref().and_then(SelectionDraft::highlight)
    }

    pub fn is_zoomed(&self) -> bool {
        self.window.committed
    }

    /// Start a new drag at `time`. A committed window stays visible until the
    /// drag is released.
    pub fn press(&mut self, time: i64) {
        log_debug!(LogComponent::Domain("Selection"), "press at {}", time);
        self.draft = Some(SelectionDraft::new(time));
    }

    /// Track the pointer. `None` means it left the plot area. Ignored without
    /// a draft.
    pub fn move_to(&mut self, time: Option<i64>) {
        if let Some(draft) = self.draft.as_mut() {
            draft.current = time;
        }
    }

    /// Finish the drag against `dataset`.
    ///
    /// Zero-width drags and endpoints that are not sample times fall back to
    /// the full view.
    pub fn release(&mut self, dataset: &PeriodDataset) -> ReleaseOutcome {
        let Some(draft) = self.draft.take() else {
            return ReleaseOutcome::Ignored;
        };

        match Self::resolve(&draft, dataset) {
            Some(window) => {
                log_debug!(
                    LogComponent::Domain("Selection"),
                    "zoom committed to {:?}",
                    window.x_range()
                );
                self.window = window;
                ReleaseOutcome::Committed(window)
            }
            None => {
                log_debug!(LogComponent::Domain("Selection"), "degenerate drag {:?} discarded", draft);
                self.window = ZoomWindow::full();
                ReleaseOutcome::Discarded
            }
        }
    }

    fn resolve(draft: &SelectionDraft, dataset: &PeriodDataset) -> Option<ZoomWindow> {
        let (anchor, current) = (draft.anchor?, draft.current?);
        if anchor == current {
            return None;
        }

        let (left, right) = (anchor.min(current), anchor.max(current));
        let left_idx = dataset.index_of_time(left)?;
        let right_idx = dataset.index_of_time(right)?;
        let (from, to) = (left_idx.min(right_idx), left_idx.max(right_idx));

        // from < to always holds here, so both ranges are non-empty
        let usdt = AxisDomainCalculator::compute(dataset, from, to, Channel::Usdt, 0)
            .unwrap_or_else(|err| unreachable!("resolved selection produced {err}"));
        let btc = AxisDomainCalculator::compute(dataset, from, to, Channel::Btc, 0)
            .unwrap_or_else(|err| unreachable!("resolved selection produced {err}"));

        Some(ZoomWindow::committed(left, right, usdt, btc))
    }

    /// Drop an in-progress drag, keeping whatever window was committed
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Back to the full, auto-scaled view
    pub fn reset(&mut self) {
        self.draft = None;
        self.window = ZoomWindow::full();
    }
}

/// Domain entity - one balance chart: the loaded period and its selection.
///
/// Loading a new period always resets the selection, since indices into the
/// old dataset mean nothing against the new one.
#[derive(Debug, Clone, Default)]
pub struct BalanceChart {
    dataset: PeriodDataset,
    selection: RangeSelectionEngine,
}

impl BalanceChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&mut self, points: Vec<DataPoint>) -> Result<usize, InvalidDatasetError> {
        let count = self.dataset.load(points)?;
        self.selection.reset();
        Ok(count)
    }

    pub fn dataset(&self) -> &PeriodDataset {
        &self.dataset
    }

    pub fn selection(&self) -> &RangeSelectionEngine {
        &self.selection
    }

    pub fn press(&mut self, time: i64) {
        self.selection.press(time);
    }

    pub fn move_to(&mut self, time: Option<i64>) {
        self.selection.move_to(time);
    }

    pub fn release(&mut self) -> ReleaseOutcome {
        self.selection.release(&self.dataset)
    }

    pub fn cancel(&mut self) {
        self.selection.cancel();
    }

    pub fn reset(&mut self) {
        self.selection.reset();
    }
}
