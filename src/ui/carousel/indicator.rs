// SPDX-License-Identifier: MPL-2.0
//! Transient "n / N" page indicator shown during touch interaction.

/// Indicator visibility. The hide delay itself is a component timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    visible: bool,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    TouchStarted,
    TouchEnded,
    /// The hide delay elapsed.
    HideElapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Drop any pending hide.
    CancelHide,
    /// Start the hide delay.
    ScheduleHide,
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::TouchStarted => {
                self.visible = true;
                Effect::CancelHide
            }
            Message::TouchEnded => {
                if self.visible {
                    Effect::ScheduleHide
                } else {
                    Effect::None
                }
            }
            Message::HideElapsed => {
                self.visible = false;
                Effect::None
            }
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_start_shows_and_cancels_pending_hide() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::TouchStarted), Effect::CancelHide);
        assert!(state.is_visible());
    }

    #[test]
    fn touch_end_schedules_hide() {
        let mut state = State::default();
        state.handle(Message::TouchStarted);
        assert_eq!(state.handle(Message::TouchEnded), Effect::ScheduleHide);
        assert!(state.is_visible());

        state.handle(Message::HideElapsed);
        assert!(!state.is_visible());
    }

    #[test]
    fn touch_end_while_hidden_does_nothing() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::TouchEnded), Effect::None);
    }
}
