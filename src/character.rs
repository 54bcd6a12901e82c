// Import necessary modules from external crates.
use crate::checks::{BreakingPointResult, InfectionResult, resolve_breaking_point, resolve_infection};
use crate::dice::{DiceSource, RollOutcome, roll_pool};
use crate::error::GameError;
use crate::settings::Settings;
use crate::wounds::WoundCapacity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

pub const ATTRIBUTE_BUDGET: u8 = 12;
pub const SKILL_BUDGET: u8 = 12;
pub const MIN_ATTRIBUTE: u8 = 1;
pub const MAX_ATTRIBUTE: u8 = 4;
pub const MAX_SKILL: u8 = 3;
pub const MAX_BONUS_SKILL: u8 = 4;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Attribute {
    Grit,
    Reflex,
    Wits,
    Nerve,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Skill {
    // Grit
    Athletics,
    Endure,
    Melee,
    Might,
    // Reflex
    Dodge,
    Drive,
    Firearms,
    Stealth,
    // Wits
    Medicine,
    Notice,
    Scavenge,
    Survival,
    Tech,
    // Nerve
    Empathy,
    Intimidate,
    Persuade,
    Resolve,
}

impl Skill {
    pub fn attribute(self) -> Attribute {
        match self {
            Skill::Athletics | Skill::Endure | Skill::Melee | Skill::Might => Attribute::Grit,
            Skill::Dodge | Skill::Drive | Skill::Firearms | Skill::Stealth => Attribute::Reflex,
            Skill::Medicine | Skill::Notice | Skill::Scavenge | Skill::Survival | Skill::Tech => {
                Attribute::Wits
            }
            Skill::Empathy | Skill::Intimidate | Skill::Persuade | Skill::Resolve => {
                Attribute::Nerve
            }
        }
    }
}

// Who the survivor was before the outbreak. Each background lets one skill go past the
// usual cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Background {
    Soldier,
    Nurse,
    Mechanic,
    Athlete,
    Hustler,
    Ranger,
    Cop,
}

impl Background {
    pub fn bonus_skill(self) -> Skill {
        match self {
            Background::Soldier => Skill::Firearms,
            Background::Nurse => Skill::Medicine,
            Background::Mechanic => Skill::Tech,
            Background::Athlete => Skill::Athletics,
            Background::Hustler => Skill::Persuade,
            Background::Ranger => Skill::Survival,
            Background::Cop => Skill::Intimidate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub grit: u8,
    pub reflex: u8,
    pub wits: u8,
    pub nerve: u8,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            grit: 3,
            reflex: 3,
            wits: 3,
            nerve: 3,
        }
    }
}

impl Attributes {
    pub fn get(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Grit => self.grit,
            Attribute::Reflex => self.reflex,
            Attribute::Wits => self.wits,
            Attribute::Nerve => self.nerve,
        }
    }

    pub fn total(&self) -> u32 {
        Attribute::iter().map(|a| u32::from(self.get(a))).sum()
    }

    pub fn validate(&self) -> Result<(), GameError> {
        for attribute in Attribute::iter() {
            let value = self.get(attribute);
            if !(MIN_ATTRIBUTE..=MAX_ATTRIBUTE).contains(&value) {
                return Err(GameError::InvalidCharacter(format!(
                    "{attribute} is {value}, must be between {MIN_ATTRIBUTE} and {MAX_ATTRIBUTE}"
                )));
            }
        }
        if self.total() != u32::from(ATTRIBUTE_BUDGET) {
            return Err(GameError::InvalidCharacter(format!(
                "attributes add up to {}, must be exactly {ATTRIBUTE_BUDGET}",
                self.total()
            )));
        }
        Ok(())
    }
}

// Skill ratings, untrained skills are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills(pub BTreeMap<Skill, u8>);

impl Skills {
    pub fn get(&self, skill: Skill) -> u8 {
        self.0.get(&skill).copied().unwrap_or(0)
    }

    pub fn set(&mut self, skill: Skill, rating: u8) {
        if rating == 0 {
            self.0.remove(&skill);
        } else {
            self.0.insert(skill, rating);
        }
    }

    pub fn total(&self) -> u32 {
        self.0.values().map(|&r| u32::from(r)).sum()
    }

    pub fn validate(&self, background: Background) -> Result<(), GameError> {
        let bonus = background.bonus_skill();
        for (&skill, &rating) in &self.0 {
            let cap = if skill == bonus { MAX_BONUS_SKILL } else { MAX_SKILL };
            if rating > cap {
                return Err(GameError::InvalidCharacter(format!(
                    "{skill} is {rating}, a {background} can have at most {cap}"
                )));
            }
        }
        if self.total() != u32::from(SKILL_BUDGET) {
            return Err(GameError::InvalidCharacter(format!(
                "skills add up to {}, must be exactly {SKILL_BUDGET}",
                self.total()
            )));
        }
        Ok(())
    }
}

impl FromIterator<(Skill, u8)> for Skills {
    fn from_iter<I: IntoIterator<Item = (Skill, u8)>>(iter: I) -> Self {
        let mut skills = Skills::default();
        for (skill, rating) in iter {
            skills.set(skill, rating);
        }
        skills
    }
}

// A survivor's sheet. Only what the rules need; narrative fields stay with the narrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub name: String,
    pub background: Background,
    pub attributes: Attributes,
    pub skills: Skills,
}

impl CharacterSheet {
    // Dice pool for an action: attribute + skill + modifiers, never below one die.
    pub fn dice_pool(&self, attribute: Attribute, skill: Skill, modifier: i32) -> i32 {
        let rating = i32::from(self.attributes.get(attribute)) + i32::from(self.skills.get(skill));
        rating.saturating_add(modifier).max(1)
    }

    // Pool for a skill rolled with the attribute that governs it.
    pub fn skill_pool(&self, skill: Skill, modifier: i32) -> i32 {
        self.dice_pool(skill.attribute(), skill, modifier)
    }

    pub fn roll<D: DiceSource + ?Sized>(&self, skill: Skill, modifier: i32, source: &mut D) -> RollOutcome {
        roll_pool(self.skill_pool(skill, modifier), false, source)
    }

    pub fn wound_capacity(&self, settings: &Settings) -> WoundCapacity {
        settings.wound_capacity(self.attributes.grit)
    }

    pub fn infection_check<D: DiceSource + ?Sized>(&self, source: &mut D) -> InfectionResult {
        resolve_infection(
            i32::from(self.attributes.grit),
            i32::from(self.skills.get(Skill::Endure)),
            source,
        )
    }

    pub fn breaking_point_check<D: DiceSource + ?Sized>(&self, source: &mut D) -> BreakingPointResult {
        resolve_breaking_point(
            i32::from(self.attributes.nerve),
            i32::from(self.skills.get(Skill::Resolve)),
            source,
        )
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.name.trim().is_empty() {
            return Err(GameError::InvalidCharacter("name is empty".to_string()));
        }
        self.attributes.validate()?;
        self.skills.validate(self.background)
    }
}

pub struct CharacterSheetBuilder {
    name: String,
    background: Background,
    attributes: Attributes,
    skills: Skills,
}

impl CharacterSheetBuilder {
    pub fn new(name: impl Into<String>, background: Background) -> Self {
        Self {
            name: name.into(),
            background,
            attributes: Attributes::default(),
            skills: Skills::default(),
        }
    }

    pub fn grit(mut self, value: u8) -> Self {
        self.attributes.grit = value;
        self
    }

    pub fn reflex(mut self, value: u8) -> Self {
        self.attributes.reflex = value;
        self
    }

    pub fn wits(mut self, value: u8) -> Self {
        self.attributes.wits = value;
        self
    }

    pub fn nerve(mut self, value: u8) -> Self {
        self.attributes.nerve = value;
        self
    }

    pub fn skill(mut self, skill: Skill, rating: u8) -> Self {
        self.skills.set(skill, rating);
        self
    }

    pub fn skills(mut self, skills: Skills) -> Self {
        self.skills = skills;
        self
    }

    // Runs the creation rules; a sheet that breaks the budgets is never handed out.
    pub fn build(self) -> Result<CharacterSheet, GameError> {
        let sheet = CharacterSheet {
            name: self.name,
            background: self.background,
            attributes: self.attributes,
            skills: self.skills,
        };
        sheet.validate()?;
        log::info!("Created survivor {} ({})", sheet.name, sheet.background);
        Ok(sheet)
    }
}
