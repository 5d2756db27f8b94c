//! Mamdani-style fuzzy inference engine.
//!
//! One evaluation runs four stages over an immutable [`EngineConfig`]:
//!
//! 1. **Fuzzification** — closed-form trapezoid evaluation of the measured
//!    temperature against all five comfort levels.
//! 2. **Rule evaluation** — one generative rule per comfort level: the rank
//!    distance to the requested level selects the actuator (heater when the
//!    current level is colder, fan when hotter) and the duration level; the
//!    firing weight clips the consequent membership (fuzzy AND via minimum).
//! 3. **Aggregation & defuzzification** — elementwise maximum across clipped
//!    vectors per actuator (fuzzy OR), reduced to crisp minutes by the
//!    centroid method.
//! 4. **Command selection** — whichever actuator domain produced a nonzero
//!    duration wins; both zero means no action.
//!
//! A comfort level equal to the requested one contributes nothing: being
//! already at the desired category is silent rather than an explicit OFF
//! clip.

use std::cmp::Ordering;

use crate::command::ControlCommand;
use crate::error::{ComfortError, InconsistencyError, OutOfRangeError};
use crate::level::{ComfortLevel, DurationLevel};
use crate::membership::{DurationDomain, Trapezoid};

/// Lower bound of the supported temperature domain, in degrees Celsius.
pub const TEMPERATURE_MIN_C: f64 = 0.0;
/// Upper bound of the supported temperature domain, in degrees Celsius.
pub const TEMPERATURE_MAX_C: f64 = 40.0;

/// Sampling interval for both duration domains, in minutes.
const TIME_STEP_MINUTES: f64 = 0.25;

/// How to treat temperatures outside `[TEMPERATURE_MIN_C, TEMPERATURE_MAX_C]`.
///
/// Clamping preserves the shoulder semantics already present at both domain
/// ends (anything below 0 °C is fully cold, anything above 40 °C fully hot)
/// and is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfRangePolicy {
    /// Clamp to the nearest domain boundary before fuzzification.
    #[default]
    Clamp,
    /// Fail the call with [`OutOfRangeError`].
    Reject,
}

impl OutOfRangePolicy {
    fn apply(self, value: f64) -> Result<f64, OutOfRangeError> {
        let out_of_range = OutOfRangeError {
            value,
            min: TEMPERATURE_MIN_C,
            max: TEMPERATURE_MAX_C,
        };
        // Non-finite readings are rejected under either policy; clamping a
        // NaN would silently poison the whole inference.
        if !value.is_finite() {
            return Err(out_of_range);
        }
        match self {
            Self::Clamp => Ok(value.clamp(TEMPERATURE_MIN_C, TEMPERATURE_MAX_C)),
            Self::Reject => {
                if (TEMPERATURE_MIN_C..=TEMPERATURE_MAX_C).contains(&value) {
                    Ok(value)
                } else {
                    Err(out_of_range)
                }
            }
        }
    }
}

/// The complete, immutable membership-function table.
///
/// Built exactly once at process start by [`EngineConfig::build`] and shared
/// read-only by every evaluation; no call mutates it or recomputes
/// breakpoints.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    temperature: [Trapezoid; 5],
    fan: [Trapezoid; 5],
    heater: [Trapezoid; 5],
    fan_domain: DurationDomain,
    heater_domain: DurationDomain,
    policy: OutOfRangePolicy,
}

impl EngineConfig {
    /// Build the fixed membership-function table with the default
    /// out-of-range policy ([`OutOfRangePolicy::Clamp`]).
    #[must_use]
    pub fn build() -> Self {
        Self::with_policy(OutOfRangePolicy::default())
    }

    /// Build the fixed membership-function table with an explicit
    /// out-of-range policy.
    #[must_use]
    pub fn with_policy(policy: OutOfRangePolicy) -> Self {
        Self {
            // Temperature scale over [0, 40] °C. Rank-adjacent shapes share
            // exactly their transition interval, where their degrees sum to 1.
            temperature: [
                Trapezoid::shoulder_left(TEMPERATURE_MIN_C, 5.0, 10.0),
                Trapezoid::new(5.0, 10.0, 15.0, 20.0),
                Trapezoid::peak(15.0, 20.0, 25.0),
                Trapezoid::new(20.0, 25.0, 30.0, 35.0),
                Trapezoid::shoulder_right(30.0, 35.0, TEMPERATURE_MAX_C),
            ],
            // Fan run-time scale over [0, 30] minutes.
            fan: [
                Trapezoid::singleton(0.0),
                Trapezoid::shoulder_left(0.0, 5.0, 7.5),
                Trapezoid::new(5.0, 7.5, 15.0, 17.5),
                Trapezoid::new(15.0, 17.5, 20.0, 25.0),
                Trapezoid::shoulder_right(20.0, 25.0, 30.0),
            ],
            // Heater run-time scale over [0, 40] minutes.
            heater: [
                Trapezoid::singleton(0.0),
                Trapezoid::shoulder_left(0.0, 7.5, 10.0),
                Trapezoid::new(7.5, 10.0, 17.5, 20.0),
                Trapezoid::new(17.5, 20.0, 27.5, 30.0),
                Trapezoid::shoulder_right(27.5, 30.0, 40.0),
            ],
            fan_domain: DurationDomain::new(30.0, TIME_STEP_MINUTES),
            heater_domain: DurationDomain::new(40.0, TIME_STEP_MINUTES),
            policy,
        }
    }

    /// Membership function of a temperature comfort level.
    #[must_use]
    pub fn temperature_membership(&self, level: ComfortLevel) -> &Trapezoid {
        &self.temperature[usize::from(level.rank())]
    }

    /// Membership function of a fan run-time level.
    #[must_use]
    pub fn fan_membership(&self, level: DurationLevel) -> &Trapezoid {
        &self.fan[usize::from(level.rank())]
    }

    /// Membership function of a heater run-time level.
    #[must_use]
    pub fn heater_membership(&self, level: DurationLevel) -> &Trapezoid {
        &self.heater[usize::from(level.rank())]
    }

    /// The sampled fan duration domain.
    #[must_use]
    pub fn fan_domain(&self) -> DurationDomain {
        self.fan_domain
    }

    /// The sampled heater duration domain.
    #[must_use]
    pub fn heater_domain(&self) -> DurationDomain {
        self.heater_domain
    }

    /// The configured out-of-range policy.
    #[must_use]
    pub fn policy(&self) -> OutOfRangePolicy {
        self.policy
    }
}

/// Degree to which `temperature_c` belongs to each comfort level, indexed by
/// rank.
///
/// Expects an in-domain temperature; [`compute_control_action`] applies the
/// out-of-range policy before calling this. By construction of the breakpoint
/// table, at most two rank-adjacent levels are nonzero at once.
#[must_use]
pub fn fuzzify(config: &EngineConfig, temperature_c: f64) -> [f64; 5] {
    let mut degrees = [0.0; 5];
    for level in ComfortLevel::ALL {
        degrees[usize::from(level.rank())] =
            config.temperature_membership(level).degree(temperature_c);
    }
    degrees
}

/// Centroid defuzzification of a degree vector sampled every `step` minutes
/// from the domain origin.
///
/// An all-zero vector yields `0.0` rather than an error or NaN.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn defuzzify(vector: &[f64], step: f64) -> f64 {
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, degree) in vector.iter().enumerate() {
        numerator += degree * (i as f64) * step;
        denominator += degree;
    }
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Clip a consequent membership function by `weight` and fold the result into
/// `aggregate` via elementwise maximum.
fn clip_into(aggregate: &mut [f64], weight: f64, consequent: &Trapezoid, domain: DurationDomain) {
    for (i, slot) in aggregate.iter_mut().enumerate() {
        let clipped = weight.min(consequent.degree(domain.value(i)));
        if clipped > *slot {
            *slot = clipped;
        }
    }
}

/// Resolve the two defuzzified durations into a single command.
///
/// Both durations being nonzero cannot arise from the rule structure (the at
/// most two firing levels are rank-adjacent, so they never straddle the
/// requested rank); if numerics produce it anyway, the actuator with the
/// larger aggregated weight wins, and an exact tie is reported as an
/// internal inconsistency.
fn select_command(
    heater_minutes: f64,
    fan_minutes: f64,
    heater_weight: f64,
    fan_weight: f64,
) -> Result<ControlCommand, InconsistencyError> {
    match (heater_minutes > 0.0, fan_minutes > 0.0) {
        (true, false) => Ok(ControlCommand::Heater {
            minutes: heater_minutes,
        }),
        (false, true) => Ok(ControlCommand::Fan {
            minutes: fan_minutes,
        }),
        (false, false) => Ok(ControlCommand::Idle),
        (true, true) => {
            if heater_weight > fan_weight {
                Ok(ControlCommand::Heater {
                    minutes: heater_minutes,
                })
            } else if fan_weight > heater_weight {
                Ok(ControlCommand::Fan {
                    minutes: fan_minutes,
                })
            } else {
                Err(InconsistencyError {
                    heater_minutes,
                    fan_minutes,
                })
            }
        }
    }
}

/// Compute the actuator command for a measured temperature and a requested
/// comfort level.
///
/// Pure function of its inputs: no side effects, idempotent, safe to call
/// concurrently from any number of tasks.
///
/// # Errors
///
/// Returns [`ComfortError::OutOfRange`] for a non-finite reading, or for a
/// reading outside the supported domain under [`OutOfRangePolicy::Reject`];
/// [`ComfortError::Inconsistent`] in the (unexpected) tie case described on
/// [`select_command`].
pub fn compute_control_action(
    config: &EngineConfig,
    temperature_c: f64,
    requested: ComfortLevel,
) -> Result<ControlCommand, ComfortError> {
    let temperature = config.policy.apply(temperature_c)?;
    let degrees = fuzzify(config, temperature);

    let mut fan_aggregate = vec![0.0; config.fan_domain.len()];
    let mut heater_aggregate = vec![0.0; config.heater_domain.len()];

    for level in ComfortLevel::ALL {
        let weight = degrees[usize::from(level.rank())];
        if weight == 0.0 {
            continue;
        }
        match level.rank().cmp(&requested.rank()) {
            // Already at the requested category: silent, no OFF clip.
            Ordering::Equal => {}
            Ordering::Less => {
                let duration = DurationLevel::from_distance(requested.rank() - level.rank());
                clip_into(
                    &mut heater_aggregate,
                    weight,
                    config.heater_membership(duration),
                    config.heater_domain,
                );
            }
            Ordering::Greater => {
                let duration = DurationLevel::from_distance(level.rank() - requested.rank());
                clip_into(
                    &mut fan_aggregate,
                    weight,
                    config.fan_membership(duration),
                    config.fan_domain,
                );
            }
        }
    }

    let heater_minutes = defuzzify(&heater_aggregate, config.heater_domain.step());
    let fan_minutes = defuzzify(&fan_aggregate, config.fan_domain.step());
    let heater_weight: f64 = heater_aggregate.iter().sum();
    let fan_weight: f64 = fan_aggregate.iter().sum();

    Ok(select_command(
        heater_minutes,
        fan_minutes,
        heater_weight,
        fan_weight,
    )?)
}
