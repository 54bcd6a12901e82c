// Inventory and objective bookkeeping. Names coming from the Game Master are loose, so
// matching is case-insensitive and unknown names are ignored instead of rejected.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Define a structure for items that can be part of a survivor's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub is_significant: bool, // Story items the narrator should keep in mind.
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity: 1,
            is_significant: false,
        }
    }

    pub fn significant(mut self) -> Self {
        self.is_significant = true;
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Objective {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
        }
    }

    // Either text contains the other, ignoring case. A blank objective matches nothing.
    fn matches(&self, text: &str) -> bool {
        let own = self.text.trim().to_lowercase();
        if own.is_empty() {
            return false;
        }
        let other = text.to_lowercase();
        own.contains(&other) || other.contains(&own)
    }
}

fn cleaned<S: AsRef<str>>(names: &[S]) -> impl Iterator<Item = &str> {
    names
        .iter()
        .map(|name| name.as_ref().trim())
        .filter(|name| !name.is_empty())
}

// Merge added and removed item names into the inventory.
pub fn apply_inventory<S: AsRef<str>>(items: &[Item], add: &[S], remove: &[S]) -> Vec<Item> {
    let mut items = items.to_vec();

    for name in cleaned(add) {
        match items.iter_mut().find(|item| item.is_named(name)) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => {
                log::debug!("New item in inventory: {name}");
                items.push(Item::new(name));
            }
        }
    }

    for name in cleaned(remove) {
        let Some(index) = items.iter().position(|item| item.is_named(name)) else {
            log::debug!("Nothing named {name} to remove, ignoring");
            continue;
        };
        let item = &mut items[index];
        item.quantity = item.quantity.saturating_sub(1);
        if item.quantity == 0 {
            items.remove(index);
        }
    }

    items
}

// Merge new and completed objectives into the list.
pub fn apply_objectives<S: AsRef<str>>(
    objectives: &[Objective],
    add: &[S],
    complete: &[S],
) -> Vec<Objective> {
    let mut objectives = objectives.to_vec();

    for text in cleaned(add) {
        let lowered = text.to_lowercase();
        if objectives
            .iter()
            .any(|objective| objective.text.to_lowercase() == lowered)
        {
            continue;
        }
        objectives.push(Objective::new(text));
    }

    for text in cleaned(complete) {
        match objectives.iter_mut().find(|objective| objective.matches(text)) {
            Some(objective) => objective.completed = true,
            None => log::debug!("No objective matches {text}, ignoring"),
        }
    }

    objectives
}
