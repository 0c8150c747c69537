use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Failures loading or validating a [`Tuning`](crate::config::Tuning).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Failures parsing a scripted input timeline such as `0:1,1.5:-1,3:0`.
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("malformed keyframe `{0}`, expected `time:value`")]
    Malformed(String),

    #[error("invalid number in keyframe `{keyframe}`: {source}")]
    Number {
        keyframe: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("keyframe time must be finite and non-negative, got {0}")]
    Time(f32),

    #[error("axis value must be finite, got {0}")]
    Value(f32),
}
