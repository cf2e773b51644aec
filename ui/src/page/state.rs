//! Controller state for the dashboard: modal visibility and the log form.
//!
//! ```text
//! modal:  Closed --open--> Open --close--> Closed      (both idempotent)
//! form:   Idle --begin_submit--> Submitting --release_submit--> Idle
//! ```
//!
//! The network call and timers live in the view; this type only records
//! transitions so they can be exercised without a renderer.

use crate::api::log::SubmitOutcome;

use super::UiTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    pub modal: ModalState,
    pub form: FormState,
    /// Current text of the entry field.
    pub entry: String,
    /// Last settled submission, shown in the result area.
    pub result: Option<SubmitOutcome>,
    /// Open trigger is pulsing.
    pub pulse: bool,
    /// Set once a successful save has scheduled a reload.
    pub reload_in_ms: Option<u64>,
}

impl PageState {
    /// Returns how long the trigger pulse should last, when it started one.
    pub fn open_modal(&mut self, tier: UiTier) -> Option<u64> {
        self.modal = ModalState::Open;
        let pulse = tier.pulse_ms();
        if pulse.is_some() {
            self.pulse = true;
        }
        pulse
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    pub fn end_pulse(&mut self) {
        self.pulse = false;
    }

    pub fn is_open(&self) -> bool {
        self.modal == ModalState::Open
    }

    pub fn is_busy(&self) -> bool {
        self.form == FormState::Submitting
    }

    pub fn set_entry(&mut self, text: String) {
        self.entry = text;
    }

    /// Enter `Submitting` and hand back the text to send. A second submit
    /// while one is in flight is dropped, like a click on the disabled button.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.is_busy() {
            return None;
        }
        self.form = FormState::Submitting;
        Some(self.entry.clone())
    }

    /// Record the outcome. Returns the reload delay after a successful save.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome, tier: UiTier) -> Option<u64> {
        let reload = match &outcome {
            SubmitOutcome::Saved(_) => {
                self.entry.clear();
                Some(tier.reload_delay_ms())
            }
            SubmitOutcome::Failed { .. } => None,
        };
        if reload.is_some() {
            self.reload_in_ms = reload;
        }
        self.result = Some(outcome);
        reload
    }

    pub fn release_submit(&mut self) {
        self.form = FormState::Idle;
    }
}
