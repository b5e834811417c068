use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scope {
    Project,
    Global,
}

/// Lowercases an item name. Every write of a name and every lookup key goes
/// through here so stored names and queries always compare in the same form.
pub fn normalize_name(name: &str) -> String {
    single_line(name).to_lowercase()
}

/// Folds line breaks into single spaces. A record occupies exactly one line of
/// the inventory file, so no stored field may contain one.
pub fn single_line(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

/// Outcome of a single increment or decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountChange {
    Incremented(u32),
    Decremented(u32),
    /// Decrement requested on an empty stock; nothing changed.
    AtZero,
    /// Increment requested at `u32::MAX`; nothing changed.
    AtCapacity,
}

impl AmountChange {
    pub fn is_change(&self) -> bool {
        matches!(
            self,
            AmountChange::Incremented(_) | AmountChange::Decremented(_)
        )
    }
}

/// One inventory record.
///
/// Fields are private so the lowercase-name and single-line invariants cannot
/// be bypassed.
/// `Serialize` is derived for JSON listings only; reading records back always
/// goes through [`Item::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    description: String,
    amount: u32,
    image_path: String,
}

impl Item {
    pub fn new(
        name: impl AsRef<str>,
        description: impl Into<String>,
        amount: u32,
        image_path: impl Into<String>,
    ) -> Self {
        Self {
            name: normalize_name(name.as_ref()),
            description: single_line(&description.into()),
            amount,
            image_path: single_line(&image_path.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = normalize_name(name);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = single_line(&description.into());
    }

    pub fn set_image_path(&mut self, image_path: impl Into<String>) {
        self.image_path = single_line(&image_path.into());
    }

    pub fn increment(&mut self) -> AmountChange {
        match self.amount.checked_add(1) {
            Some(next) => {
                self.amount = next;
                AmountChange::Incremented(next)
            }
            None => AmountChange::AtCapacity,
        }
    }

    pub fn decrement(&mut self) -> AmountChange {
        if self.amount == 0 {
            return AmountChange::AtZero;
        }
        self.amount -= 1;
        AmountChange::Decremented(self.amount)
    }
}
