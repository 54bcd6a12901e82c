// src/ai_response.rs
//
// What the Game Master sends back after a turn. The JSON is loose: every field is
// optional and names are free text. `RawStateDelta` mirrors it as-is, `StateDelta` is the
// checked version the rules work with.
use crate::checks::CheckRequest;
use crate::error::GameError;
use crate::wounds::WoundTier;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GameMessage {
    #[serde(default)]
    pub reasoning: String,
    pub narration: String,
    #[serde(default)]
    pub state_changes: Option<RawStateDelta>,
    #[serde(default)]
    pub check: Option<CheckRequest>,
}

impl GameMessage {
    pub fn new(reasoning: String, narration: String) -> Self {
        GameMessage {
            reasoning,
            narration,
            state_changes: None,
            check: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }

    // The validated changes, if the message carries any.
    pub fn state_delta(&self) -> Result<Option<StateDelta>, GameError> {
        self.state_changes
            .clone()
            .map(StateDelta::try_from)
            .transpose()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RawWoundChange {
    #[serde(rename = "type")]
    pub kind: String,
    pub change: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(untagged)]
pub enum ThreatChange {
    Delta(i32),            // `"threat": 2`
    Absolute { set: i32 }, // `"threat": {"set": 7}`
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct InventoryChange {
    #[serde(default)]
    pub add: Vec<String>,
    #[serde(default)]
    pub remove: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ObjectiveChange {
    #[serde(default)]
    pub add: Vec<String>,
    #[serde(default)]
    pub complete: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RawStateDelta {
    pub wounds: Option<RawWoundChange>,
    pub stress: Option<i32>,
    pub threat: Option<ThreatChange>,
    pub guts: Option<i32>,
    pub inventory: Option<InventoryChange>,
    pub objectives: Option<ObjectiveChange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WoundChange {
    pub tier: WoundTier,
    pub change: i32,
}

// State changes the rules can apply as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateDelta {
    pub wounds: Option<WoundChange>,
    pub stress: Option<i32>,
    pub threat: Option<ThreatChange>,
    pub guts: Option<i32>,
    pub inventory: InventoryChange,
    pub objectives: ObjectiveChange,
}

impl StateDelta {
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let raw: RawStateDelta = serde_json::from_str(json)?;
        StateDelta::try_from(raw)
    }

    pub fn is_empty(&self) -> bool {
        *self == StateDelta::default()
    }
}

impl TryFrom<RawStateDelta> for StateDelta {
    type Error = GameError;

    fn try_from(raw: RawStateDelta) -> Result<Self, Self::Error> {
        let wounds = raw
            .wounds
            .map(|wound| {
                let tier = WoundTier::from_str(wound.kind.trim()).map_err(|_| {
                    GameError::InvalidDelta(format!("unknown wound type '{}'", wound.kind))
                })?;
                Ok::<_, GameError>(WoundChange {
                    tier,
                    change: wound.change,
                })
            })
            .transpose()?;

        Ok(StateDelta {
            wounds,
            stress: raw.stress,
            threat: raw.threat,
            guts: raw.guts,
            inventory: raw.inventory.unwrap_or_default(),
            objectives: raw.objectives.unwrap_or_default(),
        })
    }
}
