//! Simulation scripts
//!
//! A script is a comma-separated list of steps:
//!
//! - `f` / `b`: press the forward / backward control
//! - `r:<width>`: resize the container
//! - `t:<x>:<dx>:<ms>`: touch at `x`, release `dx` px away after `ms`

use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ScriptError {
    #[error("empty step at position {0}")]
    EmptyStep(usize),

    #[error("unknown step '{0}'")]
    UnknownStep(String),

    #[error("step '{step}' expects {expected} argument(s)")]
    Arity { step: String, expected: usize },

    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptStep {
    Forward,
    Backward,
    Resize(f32),
    Swipe { x: f32, dx: f32, duration_ms: f64 },
}

fn number<T: FromStr>(raw: &str) -> Result<T, ScriptError> {
    raw.trim()
        .parse()
        .map_err(|_| ScriptError::InvalidNumber(raw.to_string()))
}

impl FromStr for ScriptStep {
    type Err = ScriptError;

    fn from_str(step: &str) -> Result<Self, Self::Err> {
        let mut parts = step.trim().split(':');
        let head = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let arity = |expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(ScriptError::Arity {
                    step: step.to_string(),
                    expected,
                })
            }
        };

        match head {
            "f" | "forward" => arity(0).map(|_| ScriptStep::Forward),
            "b" | "backward" => arity(0).map(|_| ScriptStep::Backward),
            "r" | "resize" => {
                arity(1)?;
                Ok(ScriptStep::Resize(number(args[0])?))
            }
            "t" | "touch" => {
                arity(3)?;
                Ok(ScriptStep::Swipe {
                    x: number(args[0])?,
                    dx: number(args[1])?,
                    duration_ms: number(args[2])?,
                })
            }
            other => Err(ScriptError::UnknownStep(other.to_string())),
        }
    }
}

/// Parse a whole script. An empty script has no steps.
pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    if script.trim().is_empty() {
        return Ok(Vec::new());
    }
    script
        .split(',')
        .enumerate()
        .map(|(i, step)| {
            if step.trim().is_empty() {
                Err(ScriptError::EmptyStep(i))
            } else {
                step.parse()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let steps = parse_script("f, b,r:640,t:300:-40:50").unwrap();
        assert_eq!(
            steps,
            vec![
                ScriptStep::Forward,
                ScriptStep::Backward,
                ScriptStep::Resize(640.0),
                ScriptStep::Swipe {
                    x: 300.0,
                    dx: -40.0,
                    duration_ms: 50.0
                },
            ]
        );
    }

    #[test]
    fn test_long_names() {
        assert_eq!(
            parse_script("forward,resize:500").unwrap(),
            vec![ScriptStep::Forward, ScriptStep::Resize(500.0)]
        );
    }

    #[test]
    fn test_empty_script() {
        assert!(parse_script("  ").unwrap().is_empty());
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_script("f,,b"), Err(ScriptError::EmptyStep(1)));
        assert_eq!(
            parse_script("x"),
            Err(ScriptError::UnknownStep("x".to_string()))
        );
        assert_eq!(
            parse_script("r"),
            Err(ScriptError::Arity {
                step: "r".to_string(),
                expected: 1
            })
        );
        assert_eq!(
            parse_script("r:wide"),
            Err(ScriptError::InvalidNumber("wide".to_string()))
        );
        assert!(matches!(
            parse_script("f:1"),
            Err(ScriptError::Arity { expected: 0, .. })
        ));
    }
}
