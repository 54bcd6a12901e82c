// Import required modules and crates.
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

pub const HIT_THRESHOLD: u8 = 5; // A die showing 5 or 6 is a hit.
pub const EXPLODING_FACE: u8 = 6; // A 6 grants one bonus die.
pub const EXPLOSION_CAP: usize = 3; // Bonus dice allowed across a whole resolution.

// Anything that can throw a six-sided die. The engine never reaches for a global RNG,
// every roll goes through one of these.
pub trait DiceSource {
    // Returns a value in 1..=6.
    fn roll_die(&mut self) -> u8;
}

// Dice backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomDice<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomDice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDice<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RandomDice<StdRng> {
    // Same seed, same sequence of dice.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DiceSource for RandomDice<R> {
    fn roll_die(&mut self) -> u8 {
        self.rng.random_range(1..=6)
    }
}

/// A fixed sequence of die faces, replayed in order.
///
/// Values outside 1..=6 are clamped into range. When the script runs out it starts
/// over from the beginning; an empty script always rolls 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    pub fn new(faces: impl Into<Vec<u8>>) -> Self {
        Self {
            faces: faces.into(),
            cursor: 0,
        }
    }

    // Number of dice drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        if self.faces.is_empty() {
            self.cursor += 1;
            return 1;
        }
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face.clamp(1, 6)
    }
}

// A single die after it has been rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    pub value: u8,
    pub is_hit: bool,
    pub is_explosion: bool,    // Bonus die granted by an earlier 6.
    pub is_critical_one: bool, // A 1 in a pushed pool; costs the player stress.
}

impl DieResult {
    fn initial(value: u8, is_push: bool) -> Self {
        Self {
            value,
            is_hit: value >= HIT_THRESHOLD,
            is_explosion: false,
            is_critical_one: is_push && value == 1,
        }
    }

    fn bonus(value: u8) -> Self {
        Self {
            value,
            is_hit: value >= HIT_THRESHOLD,
            is_explosion: true,
            is_critical_one: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum RollDescription {
    #[strum(serialize = "Critical Failure")]
    CriticalFailure,
    #[strum(serialize = "Failure")]
    Failure,
    #[strum(serialize = "Partial Success")]
    PartialSuccess,
    #[strum(serialize = "Success")]
    Success,
    #[strum(serialize = "Strong Success")]
    StrongSuccess,
}

impl RollDescription {
    // Classification by hit count alone; critical failure is decided by the caller.
    pub fn from_hits(hits: u32) -> Self {
        match hits {
            0 => RollDescription::Failure,
            1 => RollDescription::PartialSuccess,
            2 => RollDescription::Success,
            _ => RollDescription::StrongSuccess,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(
            self,
            RollDescription::PartialSuccess
                | RollDescription::Success
                | RollDescription::StrongSuccess
        )
    }
}

// Structure to hold the results of a dice roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    pub dice: Vec<DieResult>,
    pub bonus_dice: Vec<DieResult>,
    pub total_hits: u32,
    pub is_critical_failure: bool,
    pub description: RollDescription,
}

impl RollOutcome {
    // Every die of the roll, initial dice first.
    pub fn all_dice(&self) -> impl Iterator<Item = &DieResult> {
        self.dice.iter().chain(self.bonus_dice.iter())
    }

    pub fn critical_ones(&self) -> usize {
        self.dice.iter().filter(|die| die.is_critical_one).count()
    }

    pub fn faces(&self) -> Vec<u8> {
        self.all_dice().map(|die| die.value).collect()
    }
}

// Roll a pool of six-sided dice.
//
// Pools smaller than one die are rolled as a single die. Every initial 6 explodes into
// a bonus die, bonus 6s explode again, and the whole roll never grants more than
// `EXPLOSION_CAP` bonus dice.
pub fn roll_pool<D: DiceSource + ?Sized>(size: i32, is_push: bool, source: &mut D) -> RollOutcome {
    let size = size.max(1) as usize;

    let dice: Vec<DieResult> = (0..size)
        .map(|_| DieResult::initial(source.roll_die(), is_push))
        .collect();

    // Explosions are resolved after the initial throw, sharing one cap.
    let mut pending = dice.iter().filter(|die| die.value == EXPLODING_FACE).count();
    let mut bonus_dice = Vec::new();
    while pending > 0 && bonus_dice.len() < EXPLOSION_CAP {
        pending -= 1;
        let bonus = DieResult::bonus(source.roll_die());
        if bonus.value == EXPLODING_FACE {
            pending += 1;
        }
        bonus_dice.push(bonus);
    }

    let total_hits = count_hits(&dice).saturating_add(count_hits(&bonus_dice));
    let ones = dice.iter().filter(|die| die.value == 1).count();
    let is_critical_failure = !is_push && total_hits == 0 && ones * 2 > size;

    let description = if is_critical_failure {
        RollDescription::CriticalFailure
    } else {
        RollDescription::from_hits(total_hits)
    };

    log::debug!(
        "Rolled pool of {size} (push: {is_push}): {:?} + bonus {:?} -> {total_hits} hits, {description}",
        dice.iter().map(|d| d.value).collect::<Vec<_>>(),
        bonus_dice.iter().map(|d| d.value).collect::<Vec<_>>(),
    );

    RollOutcome {
        dice,
        bonus_dice,
        total_hits,
        is_critical_failure,
        description,
    }
}

fn count_hits(dice: &[DieResult]) -> u32 {
    let hits = dice.iter().filter(|die| die.is_hit).count();
    u32::try_from(hits).unwrap_or(u32::MAX)
}

// Stress paid for every push, on top of one per critical one.
pub const PUSH_STRESS: u8 = 1;

// Result of pushing a roll: the hits that were kept and the reroll of everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushOutcome {
    pub kept: Vec<DieResult>,
    pub reroll: Option<RollOutcome>,
    pub total_hits: u32,
    pub description: RollDescription,
    pub stress_cost: u8,
}

// Push a finished roll: keep every hit, reroll the initial dice that missed as a pushed
// pool. A roll with nothing left to reroll is returned unchanged and costs nothing.
pub fn push_roll<D: DiceSource + ?Sized>(previous: &RollOutcome, source: &mut D) -> PushOutcome {
    let kept: Vec<DieResult> = previous.all_dice().filter(|die| die.is_hit).copied().collect();
    let misses = previous.dice.iter().filter(|die| !die.is_hit).count();

    if misses == 0 {
        return PushOutcome {
            total_hits: previous.total_hits,
            description: RollDescription::from_hits(previous.total_hits),
            kept,
            reroll: None,
            stress_cost: 0,
        };
    }

    let reroll = roll_pool(misses as i32, true, source);
    let total_hits = count_hits(&kept).saturating_add(reroll.total_hits);
    let stress_cost = PUSH_STRESS.saturating_add(u8::try_from(reroll.critical_ones()).unwrap_or(u8::MAX));

    log::debug!("Pushed {misses} dice: {total_hits} hits, stress cost {stress_cost}");

    PushOutcome {
        kept,
        total_hits,
        description: RollDescription::from_hits(total_hits),
        stress_cost,
        reroll: Some(reroll),
    }
}
