//! Control identifiers, bounds, and the declared control table.

/// One control per galaxy parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Count,
    Size,
    Radius,
    Branches,
    Spin,
    Randomness,
    RandomnessPower,
    InsideColor,
    OutsideColor,
}

/// When a control asks for the galaxy to be regenerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Only when the interaction finishes.
    OnCommit,
    /// On every value change.
    Immediate,
}

/// Widget kind and bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlKind {
    Slider { min: f64, max: f64, step: f64 },
    Color,
}

impl ControlKind {
    pub fn trigger(&self) -> Trigger {
        match self {
            ControlKind::Slider { .. } => Trigger::OnCommit,
            ControlKind::Color => Trigger::Immediate,
        }
    }
}

/// A labeled control bound to one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSpec {
    pub id: ControlId,
    /// Config key, e.g. `galaxy.count`.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ControlKind,
}

impl ControlSpec {
    /// Slider bounds, or `None` for color controls.
    pub fn bounds(&self) -> Option<(f64, f64, f64)> {
        match self.kind {
            ControlKind::Slider { min, max, step } => Some((min, max, step)),
            ControlKind::Color => None,
        }
    }

    /// Snap to the step grid, then clamp into `[min, max]`.
    ///
    /// Color controls pass the value through unchanged.
    pub fn snap_clamp(&self, value: f64) -> f64 {
        let Some((min, max, step)) = self.bounds() else {
            return value;
        };
        let snapped = (value / step).round() * step;
        // Drop float noise such as 0.030000000000000002.
        let snapped = (snapped * 1e9).round() / 1e9;
        snapped.clamp(min, max)
    }

    /// Number of decimals needed to display a value of this control.
    pub fn decimals(&self) -> usize {
        match self.bounds() {
            Some((_, _, step)) if step < 1.0 => {
                let mut decimals = 0;
                let mut s = step;
                while s < 1.0 - 1e-9 && decimals < 9 {
                    s *= 10.0;
                    decimals += 1;
                }
                decimals
            }
            _ => 0,
        }
    }
}

/// The control table, in panel order.
pub const CONTROLS: [ControlSpec; 9] = [
    ControlSpec {
        id: ControlId::Count,
        key: "galaxy.count",
        label: "Star count",
        kind: ControlKind::Slider {
            min: 100.0,
            max: 1_000_000.0,
            step: 100.0,
        },
    },
    ControlSpec {
        id: ControlId::Size,
        key: "galaxy.size",
        label: "Star size",
        kind: ControlKind::Slider {
            min: 0.01,
            max: 0.1,
            step: 0.01,
        },
    },
    ControlSpec {
        id: ControlId::Radius,
        key: "galaxy.radius",
        label: "Galaxy radius",
        kind: ControlKind::Slider {
            min: 0.01,
            max: 20.0,
            step: 0.01,
        },
    },
    ControlSpec {
        id: ControlId::Branches,
        key: "galaxy.branches",
        label: "Branches",
        kind: ControlKind::Slider {
            min: 3.0,
            max: 20.0,
            step: 1.0,
        },
    },
    ControlSpec {
        id: ControlId::Spin,
        key: "galaxy.spin",
        label: "Spin",
        kind: ControlKind::Slider {
            min: -5.0,
            max: 5.0,
            step: 0.001,
        },
    },
    ControlSpec {
        id: ControlId::Randomness,
        key: "galaxy.randomness",
        label: "Randomness",
        kind: ControlKind::Slider {
            min: -2.0,
            max: 2.0,
            step: 0.001,
        },
    },
    ControlSpec {
        id: ControlId::RandomnessPower,
        key: "galaxy.randomness_power",
        label: "Randomness power",
        kind: ControlKind::Slider {
            min: 1.0,
            max: 10.0,
            step: 0.001,
        },
    },
    ControlSpec {
        id: ControlId::InsideColor,
        key: "galaxy.inside_color",
        label: "Inside color",
        kind: ControlKind::Color,
    },
    ControlSpec {
        id: ControlId::OutsideColor,
        key: "galaxy.outside_color",
        label: "Outside color",
        kind: ControlKind::Color,
    },
];

impl ControlId {
    /// The declared spec for this control.
    pub fn spec(self) -> &'static ControlSpec {
        // CONTROLS is laid out in declaration order of `ControlId`.
        &CONTROLS[self as usize]
    }

    /// Position in panel order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Control at `index` in panel order.
    pub fn from_index(index: usize) -> Option<Self> {
        CONTROLS.get(index).map(|spec| spec.id)
    }
}

/// Palette cycled through by keyboard color controls.
pub const COLOR_PRESETS: [&str; 8] = [
    "#ff6030", "#1b3984", "#ffffff", "#ffd27f", "#7fdbff", "#b10dc9", "#2ecc40", "#ff4136",
];
