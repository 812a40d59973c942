//! Tweak panel: the authoritative parameter set behind the controls.

use galaxy_common::ConfigError;
use tracing::debug;

use crate::colors::{parse_color, validate_color};
use crate::schema::GalaxyParams;

use super::types::{ControlId, ControlKind, Trigger, COLOR_PRESETS};

/// Outcome of a control interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// Nothing changed.
    Unchanged,
    /// The value changed but regeneration waits for the commit.
    Pending,
    /// Regenerate with this snapshot of the parameters.
    Regenerate(GalaxyParams),
}

/// Holds the authoritative [`GalaxyParams`] and applies control bindings.
///
/// Consumers never share the parameter set; every regeneration request
/// carries an owned snapshot.
#[derive(Debug, Clone)]
pub struct TweakPanel {
    params: GalaxyParams,
    /// Parameters of the last regeneration request.
    committed: GalaxyParams,
}

/// Numeric value of slider `id` in `params`, `None` for color controls.
fn slider_value(params: &GalaxyParams, id: ControlId) -> Option<f64> {
    match id {
        ControlId::Count => Some(params.count as f64),
        ControlId::Size => Some(params.size),
        ControlId::Radius => Some(params.radius),
        ControlId::Branches => Some(params.branches as f64),
        ControlId::Spin => Some(params.spin),
        ControlId::Randomness => Some(params.randomness),
        ControlId::RandomnessPower => Some(params.randomness_power),
        ControlId::InsideColor | ControlId::OutsideColor => None,
    }
}

impl TweakPanel {
    pub fn new(params: GalaxyParams) -> Self {
        Self {
            committed: params.clone(),
            params,
        }
    }

    /// Current parameters.
    pub fn params(&self) -> &GalaxyParams {
        &self.params
    }

    /// Owned copy of the current parameters.
    pub fn snapshot(&self) -> GalaxyParams {
        self.params.clone()
    }

    /// Whether a slider differs from its value at the last commit.
    ///
    /// Dragging away and back within one interaction leaves nothing to commit.
    pub fn is_uncommitted(&self, id: ControlId) -> bool {
        slider_value(&self.params, id) != slider_value(&self.committed, id)
    }

    /// Record the current parameters as committed and hand out a snapshot.
    fn commit(&mut self) -> ControlEvent {
        self.committed = self.params.clone();
        ControlEvent::Regenerate(self.snapshot())
    }

    /// Numeric value of a slider, `None` for color controls.
    pub fn number(&self, id: ControlId) -> Option<f64> {
        slider_value(&self.params, id)
    }

    /// Color string of a color control, `None` for sliders.
    pub fn color(&self, id: ControlId) -> Option<&str> {
        match id {
            ControlId::InsideColor => Some(&self.params.inside_color),
            ControlId::OutsideColor => Some(&self.params.outside_color),
            _ => None,
        }
    }

    /// Set a slider value (snapped and clamped to the control bounds).
    ///
    /// Mutates the parameter immediately; regeneration is deferred to
    /// [`Self::finish_change`].
    pub fn set_number(&mut self, id: ControlId, value: f64) -> ControlEvent {
        let spec = id.spec();
        let Some(current) = self.number(id) else {
            return ControlEvent::Unchanged;
        };
        if !value.is_finite() {
            return ControlEvent::Unchanged;
        }

        let value = spec.snap_clamp(value);
        if value == current {
            return ControlEvent::Unchanged;
        }

        let p = &mut self.params;
        match id {
            ControlId::Count => p.count = value as u32,
            ControlId::Size => p.size = value,
            ControlId::Radius => p.radius = value,
            ControlId::Branches => p.branches = value as u32,
            ControlId::Spin => p.spin = value,
            ControlId::Randomness => p.randomness = value,
            ControlId::RandomnessPower => p.randomness_power = value,
            ControlId::InsideColor | ControlId::OutsideColor => {
                return ControlEvent::Unchanged;
            }
        }

        debug!(control = spec.key, value, "control changed");
        match spec.kind.trigger() {
            Trigger::OnCommit => ControlEvent::Pending,
            Trigger::Immediate => self.commit(),
        }
    }

    /// Move a slider by a whole number of steps.
    pub fn nudge(&mut self, id: ControlId, steps: i32) -> ControlEvent {
        let (Some(current), ControlKind::Slider { step, .. }) = (self.number(id), id.spec().kind)
        else {
            return ControlEvent::Unchanged;
        };
        self.set_number(id, current + steps as f64 * step)
    }

    /// Set a color control. Regenerates immediately when the color changes.
    pub fn set_color(&mut self, id: ControlId, color: &str) -> Result<ControlEvent, ConfigError> {
        let key = id.spec().key;
        if !validate_color(color) {
            return Err(ConfigError::ValidationError(format!(
                "{key} = {color:?} is not a valid color"
            )));
        }
        let normalized = parse_color(color)?.to_hex();

        let slot = match id {
            ControlId::InsideColor => &mut self.params.inside_color,
            ControlId::OutsideColor => &mut self.params.outside_color,
            _ => return Ok(ControlEvent::Unchanged),
        };
        if slot.eq_ignore_ascii_case(&normalized) {
            return Ok(ControlEvent::Unchanged);
        }
        *slot = normalized;

        debug!(control = key, color, "color changed");
        Ok(self.commit())
    }

    /// Step a color control through [`COLOR_PRESETS`].
    pub fn cycle_color(&mut self, id: ControlId, delta: i32) -> ControlEvent {
        let Some(current) = self.color(id) else {
            return ControlEvent::Unchanged;
        };
        let len = COLOR_PRESETS.len() as i32;
        let position = COLOR_PRESETS
            .iter()
            .position(|preset| preset.eq_ignore_ascii_case(current));
        let next = match position {
            Some(i) => (i as i32 + delta).rem_euclid(len),
            None => 0,
        };
        self.set_color(id, COLOR_PRESETS[next as usize])
            .unwrap_or(ControlEvent::Unchanged)
    }

    /// End an interaction with a control.
    ///
    /// Returns a regeneration request only if the slider differs from its
    /// value at the previous commit.
    pub fn finish_change(&mut self, id: ControlId) -> ControlEvent {
        if !self.is_uncommitted(id) {
            return ControlEvent::Unchanged;
        }
        debug!(control = id.spec().key, "control committed");
        self.commit()
    }

    /// Replace every parameter at once (config reload).
    pub fn replace(&mut self, params: GalaxyParams) -> ControlEvent {
        if params == self.params && params == self.committed {
            return ControlEvent::Unchanged;
        }
        self.params = params;
        self.commit()
    }

    /// Display string for a control's current value.
    pub fn value_label(&self, id: ControlId) -> String {
        match self.number(id) {
            Some(value) => format!("{:.*}", id.spec().decimals(), value),
            None => self.color(id).unwrap_or_default().to_string(),
        }
    }
}

impl Default for TweakPanel {
    fn default() -> Self {
        Self::new(GalaxyParams::default())
    }
}
