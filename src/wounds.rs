use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WoundTier {
    Bruised,
    Bleeding,
    Broken,
    Critical,
}

impl WoundTier {
    // The tier that takes the overflow once this one is full.
    pub fn next_worse(self) -> Option<WoundTier> {
        match self {
            WoundTier::Bruised => Some(WoundTier::Bleeding),
            WoundTier::Bleeding => Some(WoundTier::Broken),
            WoundTier::Broken => Some(WoundTier::Critical),
            WoundTier::Critical => None,
        }
    }
}

// Damage dealt by a successful attack: the weapon's base, plus one per extra hit up to
// four hits.
pub fn damage(base: u8, hits: u8) -> u8 {
    match hits {
        0 => 0,
        hits => base.saturating_add(hits.min(4) - 1),
    }
}

pub fn severity_of(damage: u8) -> Option<WoundTier> {
    match damage {
        0 => None,
        1..=2 => Some(WoundTier::Bruised),
        3..=4 => Some(WoundTier::Bleeding),
        5..=6 => Some(WoundTier::Broken),
        _ => Some(WoundTier::Critical),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wounds {
    pub bruised: u32,
    pub bleeding: u32,
    pub broken: u32,
    pub critical: bool,
}

impl Wounds {
    pub fn count(&self, tier: WoundTier) -> u32 {
        match tier {
            WoundTier::Bruised => self.bruised,
            WoundTier::Bleeding => self.bleeding,
            WoundTier::Broken => self.broken,
            WoundTier::Critical => u32::from(self.critical),
        }
    }

    fn with_count(mut self, tier: WoundTier, count: u32) -> Self {
        match tier {
            WoundTier::Bruised => self.bruised = count,
            WoundTier::Bleeding => self.bleeding = count,
            WoundTier::Broken => self.broken = count,
            WoundTier::Critical => self.critical = count > 0,
        }
        self
    }

    // Most severe tier holding at least one wound.
    pub fn worst(&self) -> Option<WoundTier> {
        if self.critical {
            Some(WoundTier::Critical)
        } else if self.broken > 0 {
            Some(WoundTier::Broken)
        } else if self.bleeding > 0 {
            Some(WoundTier::Bleeding)
        } else if self.bruised > 0 {
            Some(WoundTier::Bruised)
        } else {
            None
        }
    }

    pub fn is_unwounded(&self) -> bool {
        self.worst().is_none()
    }
}

pub const BLEEDING_CAPACITY: u8 = 3;
pub const BROKEN_CAPACITY: u8 = 2;
pub const BRUISED_BASE: u8 = 2;

// Wound slots per tier. Critical is a single yes/no slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WoundCapacity {
    pub bruised: u8,
    pub bleeding: u8,
    pub broken: u8,
}

impl WoundCapacity {
    // Tougher survivors shrug off more bruises; the deeper tiers are the same for everyone.
    pub fn for_grit(grit: u8) -> Self {
        Self {
            bruised: grit.saturating_add(BRUISED_BASE),
            bleeding: BLEEDING_CAPACITY,
            broken: BROKEN_CAPACITY,
        }
    }

    pub fn slots(&self, tier: WoundTier) -> u8 {
        match tier {
            WoundTier::Bruised => self.bruised,
            WoundTier::Bleeding => self.bleeding,
            WoundTier::Broken => self.broken,
            WoundTier::Critical => 1,
        }
    }
}

// Apply a wound change to a single tier.
//
// Critical is a flag: any positive change sets it, anything else clears it. The other
// tiers heal on negative changes without ever dropping below zero, and grow without a
// cap; capacity is `apply_wound_cascading`'s business.
pub fn apply_wound(current: Wounds, tier: WoundTier, delta: i32) -> Wounds {
    match tier {
        WoundTier::Critical => Wounds {
            critical: delta > 0,
            ..current
        },
        tier => {
            let next = if delta < 0 {
                current.count(tier).saturating_sub(delta.unsigned_abs())
            } else {
                current.count(tier).saturating_add(delta.unsigned_abs())
            };
            current.with_count(tier, next)
        }
    }
}

// Apply a wound change, spilling whatever a full tier cannot hold into the next worse
// one. Overflow past broken leaves the survivor critical. Healing is identical to
// `apply_wound`.
pub fn apply_wound_cascading(
    current: Wounds,
    tier: WoundTier,
    delta: i32,
    capacity: &WoundCapacity,
) -> Wounds {
    if delta <= 0 || tier == WoundTier::Critical {
        return apply_wound(current, tier, delta);
    }

    let mut wounds = current;
    let mut tier = tier;
    let mut remaining = delta.unsigned_abs();
    loop {
        if tier == WoundTier::Critical {
            log::warn!("Wounds overflowed into critical");
            return Wounds {
                critical: true,
                ..wounds
            };
        }

        let room = u32::from(capacity.slots(tier)).saturating_sub(wounds.count(tier));
        let absorbed = remaining.min(room);
        wounds = wounds.with_count(tier, wounds.count(tier) + absorbed);
        remaining -= absorbed;

        if remaining == 0 {
            return wounds;
        }
        match tier.next_worse() {
            Some(next) => {
                log::debug!("{tier} is full, {remaining} wound(s) spill into {next}");
                tier = next;
            }
            None => return wounds,
        }
    }
}
