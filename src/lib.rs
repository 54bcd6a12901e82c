pub mod ai_response;
pub mod character;
pub mod checks;
pub mod dice;
pub mod error;
pub mod game_state;
pub mod ledger;
pub mod logging;
pub mod settings;
pub mod tracks;
pub mod wounds;

// Re-export commonly used items for easier access
pub use ai_response::{GameMessage, StateDelta, ThreatChange};
pub use character::{Attribute, Attributes, Background, CharacterSheet, CharacterSheetBuilder, Skill, Skills};
pub use checks::{CheckReport, CheckRequest, Resolve, StressCleared, Winner, perform_check};
pub use dice::{DiceSource, DieResult, RandomDice, RollDescription, RollOutcome, ScriptedDice, push_roll, roll_pool};
pub use error::GameError;
pub use game_state::{AppliedDelta, GameSnapshot};
pub use ledger::{Item, Objective, apply_inventory, apply_objectives};
pub use settings::Settings;
pub use tracks::ScalarTrack;
pub use wounds::{WoundCapacity, WoundTier, Wounds, apply_wound, damage, severity_of};
