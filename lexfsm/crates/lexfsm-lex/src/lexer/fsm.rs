//! Table-driven finite-state machines.
//!
//! A recognizer is described by its start state, an input classifier and a
//! transition table of `(state, input, next)` triples. [`Lexer::run_machine`]
//! walks the table over the shared cursor, consuming one character per
//! transition, and stops at the first character with no transition. That
//! character is left in place for the next token.

use crate::Lexer;

/// A recognizer described as a transition table.
pub(crate) trait Machine {
    /// Machine states.
    type State: Copy + Eq + std::fmt::Debug + 'static;

    /// Input categories the table is keyed on.
    type Input: Copy + Eq + 'static;

    /// State every invocation starts in.
    const START: Self::State;

    /// `(state, input, next)` triples. Pairs absent from the table halt.
    const TRANSITIONS: &'static [(Self::State, Self::Input, Self::State)];

    /// Maps a character to an input category, or `None` if no entry of the
    /// table can ever consume it.
    fn input_of(c: char) -> Option<Self::Input>;

    /// Looks up the transition for `(state, input)`.
    fn next_state(state: Self::State, input: Self::Input) -> Option<Self::State> {
        Self::TRANSITIONS
            .iter()
            .find(|&&(from, on, _)| from == state && on == input)
            .map(|&(_, _, to)| to)
    }
}

impl<'a> Lexer<'a> {
    /// Runs `M` from its start state and returns the state it halted in.
    ///
    /// The characters consumed are `cursor.slice_from(start)` where `start`
    /// is the position before the call.
    pub(crate) fn run_machine<M: Machine>(&mut self) -> M::State {
        let mut state = M::START;

        while let Some(c) = self.cursor.current_char() {
            let Some(next) = M::input_of(c).and_then(|input| M::next_state(state, input)) else {
                break;
            };
            state = next;
            self.cursor.advance();
        }

        state
    }
}
