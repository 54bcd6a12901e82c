// Named checks built on top of the dice pool. Each one picks a pool size and reads the
// hits its own way; none of them changes how the pool itself is rolled.
use crate::dice::{DiceSource, RollOutcome, roll_pool};
use crate::error::GameError;
use crate::tracks::ScalarTrack;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

// region:  --- Opposed contest

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Attacker,
    Defender,
    Tie,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpposedResult {
    pub attacker: RollOutcome,
    pub defender: RollOutcome,
    pub winner: Winner,
    pub margin: i64, // attacker hits minus defender hits
}

impl OpposedResult {
    // A tie keeps the status quo, so the defender holds on anything but an attacker win.
    pub fn defender_holds(&self) -> bool {
        self.winner != Winner::Attacker
    }
}

pub fn resolve_opposed<D: DiceSource + ?Sized>(
    attacker_pool: i32,
    defender_pool: i32,
    source: &mut D,
) -> OpposedResult {
    let attacker = roll_pool(attacker_pool, false, source);
    let defender = roll_pool(defender_pool, false, source);

    let attacker_hits = attacker.total_hits;
    let defender_hits = defender.total_hits;
    let margin = i64::from(attacker_hits) - i64::from(defender_hits);

    // An attacker without a single hit never wins, not even a 0-0.
    let winner = if attacker_hits == 0 {
        Winner::Defender
    } else if attacker_hits > defender_hits {
        Winner::Attacker
    } else if defender_hits > attacker_hits {
        Winner::Defender
    } else {
        Winner::Tie
    };

    log::debug!("Opposed contest {attacker_hits} vs {defender_hits}: {winner}");

    OpposedResult {
        attacker,
        defender,
        winner,
        margin,
    }
}

// endregion:  --- Opposed contest

// region:  --- Infection exposure

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum InfectionOutcome {
    Infected,
    Fighting,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfectionResult {
    pub result: RollOutcome,
    pub outcome: InfectionOutcome,
    pub symptoms_in_minutes: Option<u32>,
    pub turned_in_minutes: Option<u32>,
}

pub fn resolve_infection<D: DiceSource + ?Sized>(
    grit: i32,
    endure: i32,
    source: &mut D,
) -> InfectionResult {
    let result = roll_pool(grit.saturating_add(endure), false, source);

    // Timer dice are thrown after the pool, symptoms first.
    let (outcome, symptoms_in_minutes, turned_in_minutes) = match result.total_hits {
        0 => {
            let symptoms = u32::from(source.roll_die());
            let turned = u32::from(source.roll_die()) + u32::from(source.roll_die());
            (InfectionOutcome::Infected, Some(symptoms), Some(turned))
        }
        1 => {
            let symptoms = u32::from(source.roll_die()) * 10;
            (InfectionOutcome::Fighting, Some(symptoms), None)
        }
        _ => (InfectionOutcome::Clear, None, None),
    };

    log::info!(
        "Infection check with {} hits: {outcome} (symptoms {symptoms_in_minutes:?}, turned {turned_in_minutes:?})",
        result.total_hits
    );

    InfectionResult {
        result,
        outcome,
        symptoms_in_minutes,
        turned_in_minutes,
    }
}

// endregion:  --- Infection exposure

// region:  --- Breaking point

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum BreakingPointOutcome {
    Hold,
    Panic,
    Breakdown,
}

// How much stress a breaking-point check takes off. `All` is not a number on purpose:
// it always empties the track, whatever its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressCleared {
    Amount(u8),
    All,
}

impl StressCleared {
    pub fn apply_to(self, track: ScalarTrack) -> ScalarTrack {
        match self {
            StressCleared::Amount(amount) => track.apply(-i32::from(amount)),
            StressCleared::All => track.set(track.min),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakingPointResult {
    pub result: RollOutcome,
    pub outcome: BreakingPointOutcome,
    pub stress_cleared: StressCleared,
}

pub fn resolve_breaking_point<D: DiceSource + ?Sized>(
    nerve: i32,
    resolve: i32,
    source: &mut D,
) -> BreakingPointResult {
    let result = roll_pool(nerve.saturating_add(resolve), false, source);

    let (outcome, stress_cleared) = match result.total_hits {
        0 => (BreakingPointOutcome::Breakdown, StressCleared::All),
        1 => (BreakingPointOutcome::Panic, StressCleared::Amount(2)),
        _ => (BreakingPointOutcome::Hold, StressCleared::Amount(1)),
    };

    log::info!(
        "Breaking point with {} hits: {outcome}",
        result.total_hits
    );

    BreakingPointResult {
        result,
        outcome,
        stress_cleared,
    }
}

// endregion:  --- Breaking point

// region:  --- Check requests

// A check as the Game Master asks for it, e.g. `{"check": "infection", "grit": 3, "endure": 1}`.
#[enum_dispatch]
pub trait Resolve {
    fn resolve(&self, source: &mut dyn DiceSource) -> CheckReport;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRoll {
    pub pool: i32,
    #[serde(default)]
    pub push: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpposedContest {
    pub attacker_pool: i32,
    pub defender_pool: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfectionExposure {
    pub grit: i32,
    pub endure: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakingPoint {
    pub nerve: i32,
    pub resolve: i32,
}

impl Resolve for PoolRoll {
    fn resolve(&self, source: &mut dyn DiceSource) -> CheckReport {
        CheckReport::Pool(roll_pool(self.pool, self.push, source))
    }
}

impl Resolve for OpposedContest {
    fn resolve(&self, source: &mut dyn DiceSource) -> CheckReport {
        CheckReport::Opposed(resolve_opposed(
            self.attacker_pool,
            self.defender_pool,
            source,
        ))
    }
}

impl Resolve for InfectionExposure {
    fn resolve(&self, source: &mut dyn DiceSource) -> CheckReport {
        CheckReport::Infection(resolve_infection(self.grit, self.endure, source))
    }
}

impl Resolve for BreakingPoint {
    fn resolve(&self, source: &mut dyn DiceSource) -> CheckReport {
        CheckReport::BreakingPoint(resolve_breaking_point(self.nerve, self.resolve, source))
    }
}

#[enum_dispatch(Resolve)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum CheckRequest {
    #[serde(rename = "pool")]
    PoolRoll(PoolRoll),
    #[serde(rename = "opposed")]
    OpposedContest(OpposedContest),
    #[serde(rename = "infection")]
    InfectionExposure(InfectionExposure),
    BreakingPoint(BreakingPoint),
}

impl CheckRequest {
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(|e| GameError::UnknownCheck(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum CheckReport {
    Pool(RollOutcome),
    Opposed(OpposedResult),
    Infection(InfectionResult),
    BreakingPoint(BreakingPointResult),
}

impl CheckReport {
    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }
}

// Parse a check request coming from the Game Master and resolve it.
pub fn perform_check(json: &str, source: &mut dyn DiceSource) -> Result<CheckReport, GameError> {
    let request = CheckRequest::from_json(json)?;
    log::debug!("Performing check: {request:?}");
    Ok(request.resolve(source))
}

// endregion:  --- Check requests
