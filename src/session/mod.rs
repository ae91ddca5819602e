//! The calculator session and its event transitions.
//!
//! A [`Session`] is the single mutable entity of the crate: display text,
//! a latched first operand, a pending operator, and two flags steering
//! entry. It is created once, mutated in place by every event, and never
//! destroyed; `Clear` resets the fields without recreating it.
//!
//! Transitions run synchronously to completion. Rendering is pushed
//! through the [`Surface`] environment passed to [`Session::apply`], so
//! the machine itself never touches a concrete output.

mod builder;
mod input;
mod tape;

pub use builder::{Features, SessionBuilder};
pub use input::Input;
pub use tape::{Tape, TapeEntry};

use crate::core::{evaluate, format_number, round_result, Operator, Phase};
use crate::render::{preview, Surface};
use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Display contents of a fresh or cleared session.
const DEFAULT_DISPLAY: &str = "0";

/// Mutable calculator session state.
///
/// # Example
///
/// ```rust
/// use reckon::render::TextSurface;
/// use reckon::session::Session;
///
/// let mut session = Session::new();
/// let mut surface = TextSurface::new();
///
/// for key in ["5", "+", "3", "="] {
///     session.press(key, &mut surface);
/// }
///
/// assert_eq!(surface.result(), "8");
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    id: Uuid,
    features: Features,
    display_text: String,
    first_operand: Option<f64>,
    pending_operator: Option<Operator>,
    awaiting_second_operand: bool,
    reset_on_next_input: bool,
    tape: Tape,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session with the full feature set.
    pub fn new() -> Self {
        Self::with_features(Features::full())
    }

    /// Create a reduced session: no preview, no percent key.
    pub fn basic() -> Self {
        Self::with_features(Features::basic())
    }

    /// Create a session with an explicit feature set.
    pub fn with_features(features: Features) -> Self {
        Self {
            id: Uuid::new_v4(),
            features,
            display_text: DEFAULT_DISPLAY.to_string(),
            first_operand: None,
            pending_operator: None,
            awaiting_second_operand: false,
            reset_on_next_input: false,
            tape: Tape::new(),
        }
    }

    /// Start building a session with custom features.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Identity used to correlate log events.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The session's feature set.
    pub fn features(&self) -> Features {
        self.features
    }

    /// The text currently on display.
    ///
    /// Always parses to a finite number unless it holds the
    /// divide-by-zero message.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// The latched first operand, if an operator has been chosen.
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// The operator awaiting its second operand.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// True between an operator press and the first digit that follows.
    pub fn awaiting_second_operand(&self) -> bool {
        self.awaiting_second_operand
    }

    /// True after a result, error, or percent; the next entry starts fresh.
    pub fn reset_on_next_input(&self) -> bool {
        self.reset_on_next_input
    }

    /// The keystroke journal.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Classify the session into its conceptual phase (pure).
    pub fn phase(&self) -> Phase {
        if self.reset_on_next_input {
            Phase::ShowingResult
        } else if self.awaiting_second_operand {
            Phase::AwaitingSecond
        } else if self.pending_operator.is_some() {
            Phase::EnteringSecond
        } else if self.first_operand.is_some() {
            Phase::HasFirst
        } else {
            Phase::Empty
        }
    }

    /// Apply one keypad event, rendering into `surfaces`.
    ///
    /// Every applied event is journaled on the tape, including silent
    /// no-ops.
    pub fn apply<E: Surface>(&mut self, input: Input, surfaces: &mut E) {
        let from = self.phase();

        match input {
            Input::Digit(digit) => self.input_digit(digit, surfaces),
            Input::Decimal => self.input_decimal(surfaces),
            Input::Operator(operator) => self.press_operator(operator, surfaces),
            Input::Equals => self.press_equals(surfaces),
            Input::Percent => self.press_percent(surfaces),
            Input::Backspace => self.press_backspace(surfaces),
            Input::Clear => self.press_clear(surfaces),
            Input::Parentheses => self.press_parentheses(),
        }

        let to = self.phase();
        debug!(
            session = %self.id,
            ?input,
            from = from.name(),
            to = to.name(),
            display = %self.display_text,
            "applied input"
        );
        self.tape = self.tape.record(TapeEntry {
            input,
            from,
            to,
            display: self.display_text.clone(),
            timestamp: Utc::now(),
        });
    }

    /// Apply the event behind a labeled keypad control.
    ///
    /// Unknown labels are ignored, mirroring a keypad with unwired keys.
    pub fn press<E: Surface>(&mut self, key: &str, surfaces: &mut E) {
        if let Some(input) = Input::from_key(key) {
            self.apply(input, surfaces);
        }
    }

    fn input_digit<E: Surface>(&mut self, digit: u8, surfaces: &mut E) {
        let Some(digit) = char::from_digit(u32::from(digit), 10) else {
            return;
        };

        if self.reset_on_next_input {
            self.start_fresh(surfaces);
        }

        if self.awaiting_second_operand {
            self.display_text = digit.to_string();
            self.awaiting_second_operand = false;
            self.clear_preview(surfaces);
        } else if self.display_text == DEFAULT_DISPLAY {
            self.display_text = digit.to_string();
        } else {
            self.display_text.push(digit);
        }
        surfaces.show_result(&self.display_text);
    }

    fn input_decimal<E: Surface>(&mut self, surfaces: &mut E) {
        if self.reset_on_next_input {
            self.start_fresh(surfaces);
        }

        if self.awaiting_second_operand {
            self.display_text = "0.".to_string();
            self.awaiting_second_operand = false;
            self.clear_preview(surfaces);
        } else if !self.display_text.contains('.') {
            self.display_text.push('.');
        }
        surfaces.show_result(&self.display_text);
    }

    fn press_operator<E: Surface>(&mut self, operator: Operator, surfaces: &mut E) {
        let Some(entry) = self.parsed_display() else {
            return;
        };

        self.reset_on_next_input = false;

        // Consecutive operator presses replace the pending operator
        // without evaluating.
        if self.pending_operator.is_some() && self.awaiting_second_operand {
            self.pending_operator = Some(operator);
            if let Some(first) = self.first_operand {
                self.render_preview(surfaces, &preview::pending(first, operator));
            }
            return;
        }

        if self.first_operand.is_none() {
            self.first_operand = Some(entry);
        } else if let (Some(first), Some(pending)) = (self.first_operand, self.pending_operator) {
            match evaluate(pending, first, entry) {
                Ok(result) => {
                    let result = round_result(result);
                    self.display_text = format_number(result);
                    surfaces.show_result(&self.display_text);
                    self.first_operand = Some(result);
                }
                Err(error) => {
                    warn!(session = %self.id, operator = pending.name(), %error, "evaluation failed");
                    self.show_error(surfaces, &error.to_string());
                    return;
                }
            }
        }

        self.awaiting_second_operand = true;
        self.pending_operator = Some(operator);
        if let Some(first) = self.first_operand {
            self.render_preview(surfaces, &preview::pending(first, operator));
        }
    }

    fn press_equals<E: Surface>(&mut self, surfaces: &mut E) {
        let (Some(first), Some(pending)) = (self.first_operand, self.pending_operator) else {
            return;
        };
        if self.awaiting_second_operand {
            return;
        }
        let Some(entry) = self.parsed_display() else {
            return;
        };

        match evaluate(pending, first, entry) {
            Ok(result) => {
                let result = round_result(result);
                self.render_preview(surfaces, &preview::complete(first, pending, entry));
                self.display_text = format_number(result);
                surfaces.show_result(&self.display_text);
                self.reset_entry_state();
                self.reset_on_next_input = true;
            }
            Err(error) => {
                warn!(session = %self.id, operator = pending.name(), %error, "evaluation failed");
                self.show_error(surfaces, &error.to_string());
            }
        }
    }

    fn press_percent<E: Surface>(&mut self, surfaces: &mut E) {
        if !self.features.percent {
            return;
        }
        let Some(value) = self.parsed_display() else {
            return;
        };

        self.display_text = format_number(value / 100.0);
        surfaces.show_result(&self.display_text);
        self.reset_on_next_input = true;
    }

    fn press_backspace<E: Surface>(&mut self, surfaces: &mut E) {
        if self.awaiting_second_operand
            || self.reset_on_next_input
            || self.parsed_display().is_none()
        {
            return;
        }

        if self.display_text.len() > 1 {
            self.display_text.pop();
        } else {
            self.display_text = DEFAULT_DISPLAY.to_string();
        }
        surfaces.show_result(&self.display_text);
    }

    fn press_clear<E: Surface>(&mut self, surfaces: &mut E) {
        self.display_text = DEFAULT_DISPLAY.to_string();
        self.reset_entry_state();
        self.reset_on_next_input = false;
        surfaces.show_result(&self.display_text);
        self.clear_preview(surfaces);
    }

    fn press_parentheses(&self) {
        // Grouping is outside the two-operand machine; the key is wired
        // but inert.
        debug!(session = %self.id, "parentheses key not implemented");
    }

    /// Parse the display as a number; `None` when it holds an error
    /// message.
    fn parsed_display(&self) -> Option<f64> {
        self.display_text
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }

    /// Full clear performed when entry resumes after a result or error.
    fn start_fresh<E: Surface>(&mut self, surfaces: &mut E) {
        self.display_text = DEFAULT_DISPLAY.to_string();
        self.reset_entry_state();
        self.reset_on_next_input = false;
        self.clear_preview(surfaces);
    }

    /// Show an evaluation error in place of a result and leave the
    /// session reset-pending.
    fn show_error<E: Surface>(&mut self, surfaces: &mut E, message: &str) {
        self.display_text = message.to_string();
        surfaces.show_result(&self.display_text);
        self.reset_entry_state();
        self.reset_on_next_input = true;
        self.clear_preview(surfaces);
    }

    fn reset_entry_state(&mut self) {
        self.first_operand = None;
        self.pending_operator = None;
        self.awaiting_second_operand = false;
    }

    fn render_preview<E: Surface>(&self, surfaces: &mut E, text: &str) {
        if self.features.preview {
            surfaces.show_preview(text);
        }
    }

    fn clear_preview<E: Surface>(&self, surfaces: &mut E) {
        if self.features.preview {
            surfaces.show_preview("");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{NullSurface, TextSurface};

    fn feed(session: &mut Session, surface: &mut TextSurface, keys: &[&str]) {
        for key in keys {
            session.press(key, surface);
        }
    }

    #[test]
    fn digits_append_and_leading_zero_collapses() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["0", "1", "2", "3"]);

        assert_eq!(session.display_text(), "123");
        assert_eq!(surface.result(), "123");
    }

    #[test]
    fn operator_latches_first_operand_and_awaits() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["5", "+"]);

        assert_eq!(session.first_operand(), Some(5.0));
        assert_eq!(session.pending_operator(), Some(Operator::Add));
        assert!(session.awaiting_second_operand());
        assert_eq!(session.phase(), Phase::AwaitingSecond);
        assert_eq!(surface.preview(), "5 +");
    }

    #[test]
    fn consecutive_operators_replace_without_evaluating() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["5", "+", "×"]);

        assert_eq!(session.first_operand(), Some(5.0));
        assert_eq!(session.pending_operator(), Some(Operator::Multiply));
        assert_eq!(session.display_text(), "5");
        assert_eq!(surface.preview(), "5 ×");
    }

    #[test]
    fn chained_operators_evaluate_left_to_right() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["2", "+", "3", "×"]);

        // 2 + 3 evaluated on the second operator press; 5 chains on.
        assert_eq!(session.display_text(), "5");
        assert_eq!(session.first_operand(), Some(5.0));
        assert_eq!(session.pending_operator(), Some(Operator::Multiply));
        assert_eq!(surface.preview(), "5 ×");
    }

    #[test]
    fn equals_displays_the_result_and_resets() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["5", "+", "3", "="]);

        assert_eq!(session.display_text(), "8");
        assert_eq!(surface.result(), "8");
        assert_eq!(surface.preview(), "5 + 3");
        assert!(session.first_operand().is_none());
        assert!(session.pending_operator().is_none());
        assert!(session.reset_on_next_input());
        assert_eq!(session.phase(), Phase::ShowingResult);
    }

    #[test]
    fn equals_is_a_no_op_without_a_second_operand() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["5", "+", "="]);

        assert_eq!(session.display_text(), "5");
        assert!(session.awaiting_second_operand());
        assert_eq!(session.pending_operator(), Some(Operator::Add));
    }

    #[test]
    fn equals_is_a_no_op_with_no_pending_operation() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["5", "="]);

        assert_eq!(session.display_text(), "5");
        assert!(!session.reset_on_next_input());
    }

    #[test]
    fn divide_by_zero_shows_the_message_and_recovers() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["7", "/", "0", "="]);

        assert_eq!(surface.result(), "Cannot divide by zero");
        assert!(session.first_operand().is_none());
        assert!(session.pending_operator().is_none());
        assert!(session.reset_on_next_input());
        assert_eq!(surface.preview(), "");

        session.press("2", &mut surface);
        assert_eq!(surface.result(), "2");
        assert_eq!(session.display_text(), "2");
    }

    #[test]
    fn divide_by_zero_on_operator_press_recovers_the_same_way() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["7", "/", "0", "+"]);

        assert_eq!(surface.result(), "Cannot divide by zero");
        assert!(session.pending_operator().is_none());
        assert!(session.reset_on_next_input());
    }

    #[test]
    fn digit_after_result_starts_a_fresh_entry() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["5", "+", "3", "=", "9"]);

        assert_eq!(session.display_text(), "9");
        assert!(session.first_operand().is_none());
        assert_eq!(surface.preview(), "");
        assert_eq!(session.phase(), Phase::Empty);
    }

    #[test]
    fn operator_after_result_chains_it() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["5", "+", "3", "=", "×", "2", "="]);

        assert_eq!(session.display_text(), "16");
    }

    #[test]
    fn percent_divides_the_display_by_one_hundred() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["9", "%"]);

        assert_eq!(session.display_text(), "0.09");
        assert!(session.first_operand().is_none());
        assert!(session.pending_operator().is_none());
        assert!(session.reset_on_next_input());
    }

    #[test]
    fn percent_is_inert_in_the_reduced_variant() {
        let mut session = Session::basic();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["9", "%"]);

        assert_eq!(session.display_text(), "9");
        assert!(!session.reset_on_next_input());
    }

    #[test]
    fn reduced_variant_never_touches_the_preview() {
        let mut session = Session::basic();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["5", "+", "3", "="]);

        assert_eq!(surface.result(), "8");
        assert_eq!(surface.preview(), "");
    }

    #[test]
    fn decimal_appends_once_per_entry() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["3", ".", "."]);

        assert_eq!(session.display_text(), "3.");

        feed(&mut session, &mut surface, &["1", "4"]);
        assert_eq!(session.display_text(), "3.14");
    }

    #[test]
    fn decimal_starts_the_second_operand_at_zero_point() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["5", "+", "."]);

        assert_eq!(session.display_text(), "0.");
        assert!(!session.awaiting_second_operand());
    }

    #[test]
    fn backspace_edits_the_current_entry() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["1", "2", "3", "⌫"]);
        assert_eq!(session.display_text(), "12");
    }

    #[test]
    fn backspace_collapses_a_single_digit_to_zero() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["5", "⌫"]);
        assert_eq!(session.display_text(), "0");
    }

    #[test]
    fn backspace_is_inert_after_equals_and_while_awaiting() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["5", "+", "3", "=", "⌫"]);
        assert_eq!(session.display_text(), "8");

        feed(&mut session, &mut surface, &["+", "⌫"]);
        assert_eq!(session.display_text(), "8");
        assert!(session.awaiting_second_operand());
    }

    #[test]
    fn clear_resets_everything() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["5", "+", "3", "AC"]);

        assert_eq!(session.display_text(), "0");
        assert!(session.first_operand().is_none());
        assert!(session.pending_operator().is_none());
        assert!(!session.awaiting_second_operand());
        assert!(!session.reset_on_next_input());
        assert_eq!(surface.result(), "0");
        assert_eq!(surface.preview(), "");
        assert_eq!(session.phase(), Phase::Empty);
    }

    #[test]
    fn parentheses_change_nothing() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["5", "()", "+", "(", ")"]);

        assert_eq!(session.display_text(), "5");
        assert_eq!(session.pending_operator(), Some(Operator::Add));
    }

    #[test]
    fn results_are_rounded_to_eight_decimals() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["0", ".", "1", "+", "0", ".", "2", "="]);

        assert_eq!(session.display_text(), "0.3");
    }

    #[test]
    fn tape_records_every_applied_event() {
        let mut session = Session::new();
        let mut surface = NullSurface;

        for input in [Input::Digit(5), Input::Parentheses, Input::Equals] {
            session.apply(input, &mut surface);
        }

        assert_eq!(session.tape().len(), 3);
        assert_eq!(session.tape().last().unwrap().display, "5");
    }

    #[test]
    fn pending_operator_is_set_whenever_awaiting() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        for key in ["5", "+", "×", "3", "=", "−", "2", "/", "0", "=", "1"] {
            session.press(key, &mut surface);
            if session.awaiting_second_operand() {
                assert!(session.pending_operator().is_some());
            }
        }
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut session = Session::new();
        let mut surface = TextSurface::new();

        feed(&mut session, &mut surface, &["5", "sin", "MC", "+"]);

        assert_eq!(session.first_operand(), Some(5.0));
        assert_eq!(session.tape().len(), 2);
    }
}
