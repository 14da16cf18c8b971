// SPDX-License-Identifier: MPL-2.0
//! Loading state sub-component with an animated ellipsis indicator.

/// Number of animation frames; the indicator cycles zero to three dots.
const FRAME_COUNT: usize = 4;

/// Loading state for the gallery while a range query is in flight.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Current animation frame.
    frame: usize,
}

impl State {
    /// Advances the indicator by one animation frame.
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAME_COUNT;
    }

    /// The animated suffix appended to the loading message.
    #[must_use]
    pub fn dots(&self) -> &'static str {
        match self.frame {
            0 => "",
            1 => ".",
            2 => "..",
            _ => "...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_and_wraps() {
        let mut state = State::default();
        assert_eq!(state.dots(), "");

        state.tick();
        assert_eq!(state.dots(), ".");

        state.tick();
        state.tick();
        assert_eq!(state.dots(), "...");

        state.tick();
        assert_eq!(state.dots(), "");
    }
}
