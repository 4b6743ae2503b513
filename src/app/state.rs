//! Mixer state
//!
//! Owns the base colors, the derived mixed color and the palette. Every
//! mutation goes through a method here so the mixed color can never go
//! stale.

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{MixerConfig, BASE_COLOR_COUNT, INITIAL_MIXED_COLOR};
use crate::utils::color::{self, ColorError, Rgb};

/// Errors from state operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("base color index {index} out of range")]
    BaseIndexOutOfRange { index: usize },

    #[error("palette index {index} out of range (palette has {len} colors)")]
    PaletteIndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Complete mixer state
#[derive(Debug, Clone, PartialEq)]
pub struct MixerState {
    base_colors: [Rgb; BASE_COLOR_COUNT],
    mixed_color: Rgb,
    palette: Vec<Rgb>,
}

impl MixerState {
    /// Create state seeded from `config`, with the mixed color already computed
    ///
    /// Fails if any seed color is not a well-formed `#rrggbb` string.
    pub fn from_config(config: &MixerConfig) -> Result<Self, StateError> {
        let mut base_colors = [Rgb::default(); BASE_COLOR_COUNT];
        for (slot, hex) in base_colors.iter_mut().zip(&config.base_colors) {
            *slot = hex.parse()?;
        }

        let palette = config
            .palette
            .iter()
            .map(|hex| hex.parse::<Rgb>())
            .collect::<Result<Vec<_>, _>>()?;

        let mut state = Self {
            base_colors,
            mixed_color: INITIAL_MIXED_COLOR,
            palette,
        };
        state.remix();
        Ok(state)
    }

    pub fn base_colors(&self) -> &[Rgb; BASE_COLOR_COUNT] {
        &self.base_colors
    }

    pub fn mixed_color(&self) -> Rgb {
        self.mixed_color
    }

    pub fn palette(&self) -> &[Rgb] {
        &self.palette
    }

    /// Replace the base color at `index` and recompute the mixed color
    pub fn set_base_color_at(&mut self, index: usize, color: Rgb) -> Result<(), StateError> {
        let slot = self
            .base_colors
            .get_mut(index)
            .ok_or(StateError::BaseIndexOutOfRange { index })?;
        *slot = color;
        debug!("Base color {} set to {}", index, color);
        self.remix();
        Ok(())
    }

    /// Append the current mixed color to the end of the palette
    pub fn add_current_mixed_color(&mut self) {
        self.palette.push(self.mixed_color);
        info!(
            "Added {} to palette ({} colors)",
            self.mixed_color,
            self.palette.len()
        );
    }

    /// Remove the palette entry at `index`, shifting later entries left
    pub fn remove_at(&mut self, index: usize) -> Result<Rgb, StateError> {
        let len = self.palette.len();
        if index >= len {
            return Err(StateError::PaletteIndexOutOfRange { index, len });
        }
        let removed = self.palette.remove(index);
        info!("Removed {} from palette at {} ({} colors)", removed, index, len - 1);
        Ok(removed)
    }

    fn remix(&mut self) {
        self.mixed_color = color::mix(&self.base_colors);
        debug!("Mixed color recomputed: {}", self.mixed_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::color::{decode, encode};

    fn seeded() -> MixerState {
        MixerState::from_config(&MixerConfig::get_default()).unwrap()
    }

    fn hex_list(colors: &[Rgb]) -> Vec<String> {
        colors.iter().copied().map(encode).collect()
    }

    #[test]
    fn test_initial_mix_overwrites_default() {
        let state = seeded();
        assert_eq!(hex_list(state.base_colors()), ["#ff0000", "#00ff00", "#0000ff"]);
        assert_eq!(encode(state.mixed_color()), "#555555");
        assert_ne!(state.mixed_color(), INITIAL_MIXED_COLOR);
    }

    #[test]
    fn test_set_base_color_remixes() {
        let mut state = seeded();
        state.set_base_color_at(1, decode("#ffffff").unwrap()).unwrap();
        assert_eq!(hex_list(state.base_colors()), ["#ff0000", "#ffffff", "#0000ff"]);
        assert_eq!(encode(state.mixed_color()), "#aa55aa");
    }

    #[test]
    fn test_set_base_color_leaves_others_unchanged() {
        let mut state = seeded();
        state.set_base_color_at(2, Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(hex_list(state.base_colors()), ["#ff0000", "#00ff00", "#010203"]);
    }

    #[test]
    fn test_noop_edit_keeps_mix() {
        let mut state = seeded();
        let before = state.mixed_color();
        let current = state.base_colors()[0];
        state.set_base_color_at(0, current).unwrap();
        assert_eq!(state.mixed_color(), before);
    }

    #[test]
    fn test_invalid_edits_are_rejected() {
        let mut state = seeded();
        let before = state.clone();

        assert_eq!(
            state.set_base_color_at(3, Rgb::new(0, 0, 0)),
            Err(StateError::BaseIndexOutOfRange { index: 3 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_add_appends_mixed_color() {
        let mut state = seeded();
        let len = state.palette().len();

        state.add_current_mixed_color();
        assert_eq!(state.palette().len(), len + 1);
        assert_eq!(state.palette().last(), Some(&state.mixed_color()));

        // Duplicates are kept
        state.add_current_mixed_color();
        assert_eq!(state.palette().len(), len + 2);
        assert_eq!(state.palette()[len], state.palette()[len + 1]);
    }

    #[test]
    fn test_add_uses_mix_at_call_time() {
        let mut state = seeded();
        state.add_current_mixed_color();
        state.set_base_color_at(1, decode("#ffffff").unwrap()).unwrap();
        state.add_current_mixed_color();

        let tail = &state.palette()[state.palette().len() - 2..];
        assert_eq!(hex_list(tail), ["#555555", "#aa55aa"]);
    }

    #[test]
    fn test_remove_at() {
        let mut state = seeded();
        assert_eq!(hex_list(state.palette()), ["#3498db", "#e74c3c", "#2ecc71"]);

        let removed = state.remove_at(1).unwrap();
        assert_eq!(encode(removed), "#e74c3c");
        assert_eq!(hex_list(state.palette()), ["#3498db", "#2ecc71"]);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut state = seeded();
        state.add_current_mixed_color();
        let mut expected = state.palette().to_vec();

        state.remove_at(0).unwrap();
        expected.remove(0);
        assert_eq!(state.palette(), expected.as_slice());

        state.remove_at(expected.len() - 1).unwrap();
        expected.pop();
        assert_eq!(state.palette(), expected.as_slice());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut state = seeded();
        assert_eq!(
            state.remove_at(3),
            Err(StateError::PaletteIndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(state.palette().len(), 3);

        for _ in 0..3 {
            state.remove_at(0).unwrap();
        }
        assert!(state.palette().is_empty());
        assert!(state.remove_at(0).is_err());
    }

    #[test]
    fn test_from_config() {
        let mut config = MixerConfig::get_default();
        config.base_colors = ["#0A141E", "#0a141e", "#0a141e"].map(String::from);
        config.palette.clear();

        let state = MixerState::from_config(&config).unwrap();
        assert_eq!(state.mixed_color(), Rgb::new(10, 20, 30));
        assert!(state.palette().is_empty());
    }

    #[test]
    fn test_from_config_rejects_malformed_seeds() {
        let mut config = MixerConfig::get_default();
        config.base_colors[1] = "#12345".to_string();
        assert!(matches!(
            MixerState::from_config(&config),
            Err(StateError::Color(ColorError::InvalidLength { digits: 5, .. }))
        ));

        let mut config = MixerConfig::get_default();
        config.palette.push("#zzzzzz".to_string());
        assert!(matches!(
            MixerState::from_config(&config),
            Err(StateError::Color(ColorError::InvalidDigit(_)))
        ));
    }
}
