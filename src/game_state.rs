// A game session as the rules see it, and the step that moves it forward.
use crate::ai_response::{StateDelta, ThreatChange, WoundChange};
use crate::character::CharacterSheet;
use crate::checks::BreakingPointResult;
use crate::dice::PushOutcome;
use crate::error::GameError;
use crate::ledger::{Item, Objective, apply_inventory, apply_objectives};
use crate::settings::Settings;
use crate::tracks::ScalarTrack;
use crate::wounds::{Wounds, apply_wound, apply_wound_cascading};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub character: CharacterSheet,
    #[serde(default)]
    pub wounds: Wounds,
    pub stress: ScalarTrack,
    pub threat: ScalarTrack,
    pub guts: ScalarTrack,
    #[serde(default)]
    pub inventory: Vec<Item>,
    #[serde(default)]
    pub objectives: Vec<Objective>,
}

// The next snapshot plus what the caller has to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedDelta {
    pub snapshot: GameSnapshot,
    pub breaking_point: bool, // Stress hit its cap: a breaking-point check is due.
}

impl GameSnapshot {
    pub fn new(character: CharacterSheet, settings: &Settings) -> Self {
        Self {
            character,
            wounds: Wounds::default(),
            stress: ScalarTrack::stress(settings.max_stress),
            threat: ScalarTrack::threat().with_max(settings.max_threat),
            guts: ScalarTrack::new(settings.max_guts, 0, settings.max_guts),
            inventory: Vec::new(),
            objectives: Vec::new(),
        }
    }

    pub fn with_inventory(mut self, inventory: Vec<Item>) -> Self {
        self.inventory = inventory;
        self
    }

    fn apply_wound_change(&self, change: WoundChange, settings: &Settings) -> Wounds {
        if settings.cascade_wounds {
            let capacity = self.character.wound_capacity(settings);
            apply_wound_cascading(self.wounds, change.tier, change.change, &capacity)
        } else {
            apply_wound(self.wounds, change.tier, change.change)
        }
    }

    // Apply the narrator's changes in a fixed order: wounds, stress, threat, guts,
    // inventory, objectives. `self` is left untouched.
    pub fn apply(&self, delta: &StateDelta, settings: &Settings) -> AppliedDelta {
        let mut next = self.clone();

        if let Some(change) = delta.wounds {
            next.wounds = self.apply_wound_change(change, settings);
        }

        if let Some(stress) = delta.stress {
            next.stress = next.stress.apply(stress);
        }

        match delta.threat {
            Some(ThreatChange::Delta(change)) => next.threat = next.threat.apply(change),
            Some(ThreatChange::Absolute { set }) => next.threat = next.threat.set(set),
            None => {}
        }

        if let Some(guts) = delta.guts {
            next.guts = next.guts.apply(guts);
        }

        next.inventory = apply_inventory(&next.inventory, &delta.inventory.add, &delta.inventory.remove);
        next.objectives = apply_objectives(
            &next.objectives,
            &delta.objectives.add,
            &delta.objectives.complete,
        );

        let breaking_point = delta.stress.is_some_and(|s| s > 0) && next.stress.is_maxed();
        if breaking_point {
            log::info!("{} reached their breaking point", next.character.name);
        }

        AppliedDelta {
            snapshot: next,
            breaking_point,
        }
    }

    pub fn apply_breaking_point(&self, check: &BreakingPointResult) -> GameSnapshot {
        GameSnapshot {
            stress: check.stress_cleared.apply_to(self.stress),
            ..self.clone()
        }
    }

    // Pushing costs stress, which can itself trigger a breaking point.
    pub fn apply_push_cost(&self, push: &PushOutcome) -> AppliedDelta {
        let stress = self.stress.apply(i32::from(push.stress_cost));
        let breaking_point = push.stress_cost > 0 && stress.is_maxed();
        AppliedDelta {
            snapshot: GameSnapshot {
                stress,
                ..self.clone()
            },
            breaking_point,
        }
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }
}
