use std::str::FromStr;

use crate::error::ScriptError;

/// Axis magnitude at or below which the stick counts as released.
pub const AXIS_DEAD_ZONE: f32 = 0.05;

/// Logical actions the locomotion core polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Movement,
}

/// One frame's reading of an analog axis, clamped to `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisSample {
    pub value: f32,
}

impl AxisSample {
    pub fn new(value: f32) -> Self {
        Self {
            value: value.clamp(-1.0, 1.0),
        }
    }

    pub fn has_input(&self) -> bool {
        self.value.abs() > AXIS_DEAD_ZONE
    }
}

/// Per-frame polling interface of the input layer.
pub trait InputSource {
    fn sample_axis(&self, action: InputAction) -> AxisSample;
}

impl InputSource for AxisSample {
    fn sample_axis(&self, _action: InputAction) -> AxisSample {
        *self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

/// Movement-axis timeline: the axis holds each keyframe's value from its
/// time until the next keyframe. Before the first keyframe the axis reads 0.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScriptedInput {
    keyframes: Vec<Keyframe>,
    now: f32,
}

impl ScriptedInput {
    pub fn new(mut keyframes: Vec<Keyframe>) -> Self {
        keyframes.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self {
            keyframes,
            now: 0.0,
        }
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn set_time(&mut self, now: f32) {
        self.now = now;
    }

    pub fn advance(&mut self, dt: f32) {
        self.now += dt;
    }

    fn value_at(&self, time: f32) -> f32 {
        self.keyframes
            .iter()
            .take_while(|k| k.time <= time)
            .last()
            .map_or(0.0, |k| k.value)
    }
}

impl InputSource for ScriptedInput {
    fn sample_axis(&self, action: InputAction) -> AxisSample {
        match action {
            InputAction::Movement => AxisSample::new(self.value_at(self.now)),
        }
    }
}

impl FromStr for ScriptedInput {
    type Err = ScriptError;

    /// Parses `time:value` pairs separated by commas, e.g. `0:1,1.5:-1,3:0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut keyframes = Vec::new();
        for raw in s.split(',').map(str::trim).filter(|k| !k.is_empty()) {
            let (time, value) = raw
                .split_once(':')
                .ok_or_else(|| ScriptError::Malformed(raw.to_string()))?;
            let parse = |field: &str| {
                field.trim().parse::<f32>().map_err(|source| ScriptError::Number {
                    keyframe: raw.to_string(),
                    source,
                })
            };
            let time = parse(time)?;
            let value = parse(value)?;
            if !time.is_finite() || time < 0.0 {
                return Err(ScriptError::Time(time));
            }
            if !value.is_finite() {
                return Err(ScriptError::Value(value));
            }
            keyframes.push(Keyframe { time, value });
        }
        Ok(Self::new(keyframes))
    }
}
