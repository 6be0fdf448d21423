// User events on the calculator screen and how they change ScreenState

use crate::engine::{BmiEngine, HeightUnit, WeightUnit};
use crate::screen::state::ScreenState;
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    SetWeight(String),
    SetHeight(String),
    SelectWeightUnit(WeightUnit),
    SelectHeightUnit(HeightUnit),
    Calculate,
    /// Dismiss the result overlay, which also clears the screen
    CloseModal,
    /// Refresh button
    Reset,
}

pub fn update(state: &mut ScreenState, action: ScreenAction, engine: &BmiEngine) {
    debug!("Screen action: {:?}", action);

    // The overlay gates input until it is dismissed
    if state.modal_visible && !matches!(action, ScreenAction::CloseModal | ScreenAction::Reset) {
        debug!("Ignoring action while result is shown");
        return;
    }

    match action {
        ScreenAction::SetWeight(text) => state.weight_text = text,
        ScreenAction::SetHeight(text) => state.height_text = text,
        ScreenAction::SelectWeightUnit(unit) => state.weight_unit = unit,
        ScreenAction::SelectHeightUnit(unit) => state.height_unit = unit,
        ScreenAction::Calculate => calculate(state, engine),
        ScreenAction::CloseModal | ScreenAction::Reset => state.reset(),
    }
}

fn calculate(state: &mut ScreenState, engine: &BmiEngine) {
    state.error = None;

    match engine.compute(
        &state.weight_text,
        state.weight_unit,
        &state.height_text,
        state.height_unit,
    ) {
        Ok(result) => {
            state.result = Some(result);
            state.modal_visible = true;
        }
        Err(e) => {
            state.result = None;
            state.error = Some(e.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: &mut ScreenState, actions: Vec<ScreenAction>) {
        let engine = BmiEngine::default();
        for action in actions {
            update(state, action, &engine);
        }
    }

    #[test]
    fn test_calculate_metric() {
        let mut state = ScreenState::new();
        apply(
            &mut state,
            vec![
                ScreenAction::SetWeight("70".to_string()),
                ScreenAction::SetHeight("1.75".to_string()),
                ScreenAction::SelectHeightUnit(HeightUnit::Meter),
                ScreenAction::Calculate,
            ],
        );

        assert!(state.modal_visible);
        assert!(state.error.is_none());
        let result = state.result.expect("result should be set");
        assert_eq!(result.display_value(), "22.86");
    }

    #[test]
    fn test_calculate_failure_shows_error_without_result() {
        let mut state = ScreenState::new();
        apply(
            &mut state,
            vec![
                ScreenAction::SetWeight("80".to_string()),
                ScreenAction::SetHeight("6'x".to_string()),
                ScreenAction::Calculate,
            ],
        );

        assert!(!state.modal_visible);
        assert!(state.result.is_none());
        assert_eq!(
            state.error.as_deref(),
            Some("Please enter a valid height in feet and inches (e.g., 6'1\").")
        );
    }

    #[test]
    fn test_retry_after_failure_clears_error() {
        let mut state = ScreenState::new();
        apply(
            &mut state,
            vec![
                ScreenAction::SetWeight("abc".to_string()),
                ScreenAction::SetHeight("5'9".to_string()),
                ScreenAction::Calculate,
            ],
        );
        assert!(state.error.is_some());

        apply(
            &mut state,
            vec![
                ScreenAction::SetWeight("154".to_string()),
                ScreenAction::SelectWeightUnit(WeightUnit::Pound),
                ScreenAction::Calculate,
            ],
        );
        assert!(state.error.is_none());
        assert_eq!(state.result.map(|r| r.rounded()), Some(22.74));
    }

    #[test]
    fn test_modal_gates_input() {
        let mut state = ScreenState::new();
        apply(
            &mut state,
            vec![
                ScreenAction::SetWeight("70".to_string()),
                ScreenAction::SetHeight("5'9".to_string()),
                ScreenAction::Calculate,
                ScreenAction::SetWeight("999".to_string()),
                ScreenAction::Calculate,
            ],
        );

        assert!(state.modal_visible);
        assert_eq!(state.weight_text, "70");
    }

    #[test]
    fn test_close_modal_resets() {
        let mut state = ScreenState::new();
        apply(
            &mut state,
            vec![
                ScreenAction::SetWeight("70".to_string()),
                ScreenAction::SetHeight("5'9".to_string()),
                ScreenAction::SelectWeightUnit(WeightUnit::Pound),
                ScreenAction::Calculate,
                ScreenAction::CloseModal,
            ],
        );

        assert_eq!(state, ScreenState::default());
    }

    #[test]
    fn test_reset_after_error() {
        let mut state = ScreenState::new();
        apply(
            &mut state,
            vec![
                ScreenAction::SetWeight("x".to_string()),
                ScreenAction::Calculate,
                ScreenAction::Reset,
            ],
        );

        assert_eq!(state, ScreenState::default());
    }
}
