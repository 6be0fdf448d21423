// Calculator screen state owned by the UI, changed only through screen::update
// `result` and `error` are never both set

use crate::engine::{BmiResult, HeightUnit, Outcome, WeightUnit};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenState {
    pub weight_text: String,
    pub height_text: String,
    pub weight_unit: WeightUnit,
    pub height_unit: HeightUnit,
    pub result: Option<BmiResult>,
    pub error: Option<String>,
    pub modal_visible: bool,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the initial screen: empty fields, default units, nothing shown
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn weight_placeholder(&self) -> String {
        self.weight_unit.placeholder()
    }

    pub fn height_placeholder(&self) -> String {
        self.height_unit.placeholder()
    }

    /// Payload for the result overlay, if one should be shown
    pub fn modal_outcome(&self) -> Option<Outcome> {
        if !self.modal_visible {
            return None;
        }
        self.result.as_ref().map(Outcome::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_bmi;

    #[test]
    fn test_initial_state() {
        let state = ScreenState::new();
        assert!(state.weight_text.is_empty());
        assert!(state.height_text.is_empty());
        assert_eq!(state.weight_unit, WeightUnit::Kilogram);
        assert_eq!(state.height_unit, HeightUnit::FeetInches);
        assert!(state.result.is_none());
        assert!(state.error.is_none());
        assert!(!state.modal_visible);
        assert_eq!(state.weight_placeholder(), "Enter weight in kg");
        assert_eq!(state.height_placeholder(), "Enter height in feet");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = ScreenState {
            weight_text: "154".to_string(),
            height_text: "1.8".to_string(),
            weight_unit: WeightUnit::Pound,
            height_unit: HeightUnit::Meter,
            result: compute_bmi("70", WeightUnit::Kilogram, "1.75", HeightUnit::Meter).ok(),
            error: None,
            modal_visible: true,
        };

        state.reset();
        assert_eq!(state, ScreenState::default());
    }

    #[test]
    fn test_modal_outcome_only_when_visible() {
        let mut state = ScreenState::new();
        state.result = compute_bmi("70", WeightUnit::Kilogram, "1.75", HeightUnit::Meter).ok();
        assert!(state.modal_outcome().is_none());

        state.modal_visible = true;
        assert!(matches!(
            state.modal_outcome(),
            Some(Outcome::Success { value, .. }) if value == 22.86
        ));
    }
}
