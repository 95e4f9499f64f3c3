//! Move workflow: relocate part of a date group, or a whole item group.

use serde::Serialize;

use freezo_core::error::AppError;
use freezo_core::result::AppResult;
use freezo_entity::freezer::Freezer;
use freezo_entity::inventory::{DateGroup, DateKey, ItemGroup};
use freezo_entity::item::Item;

use super::destination::{default_destination, destination_choices};
use super::selection::WeightSelection;

/// Where a move plan currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveStep {
    /// Several weights exist; one must be chosen.
    SelectWeight,
    /// Choose destination and quantity, then submit.
    SelectDetails,
    /// Every record of the item group moves; only the destination is open.
    ConfirmMoveAll,
}

/// What a move plan operates on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum MoveScope {
    /// A weight bucket of one date/freezer group.
    Batch {
        /// Date key of the group.
        date: DateKey,
        /// Source freezer of the group.
        freezer_id: i64,
        /// Weight and quantity selection.
        selection: WeightSelection,
    },
    /// Every record sharing the item name.
    All {
        /// Snapshot of the records to move.
        items: Vec<Item>,
    },
}

/// Plan to reassign records to another freezer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovePlan {
    name: String,
    scope: MoveScope,
    destinations: Vec<Freezer>,
    destination: Option<i64>,
}

impl MovePlan {
    /// Open a plan on a snapshot of one date/freezer group.
    pub fn batch(name: &str, group: &DateGroup, freezers: &[Freezer]) -> AppResult<Self> {
        let selection = WeightSelection::new(group.items.clone())?;
        Ok(Self {
            name: name.to_string(),
            destinations: destination_choices(&group.items, freezers),
            destination: default_destination(&group.items, freezers),
            scope: MoveScope::Batch {
                date: group.date.clone(),
                freezer_id: group.freezer_id,
                selection,
            },
        })
    }

    /// Open a plan moving every record of `group`.
    pub fn all(group: &ItemGroup, freezers: &[Freezer]) -> AppResult<Self> {
        let items = group.items();
        if items.is_empty() {
            return Err(AppError::validation("There are no items to move"));
        }
        Ok(Self {
            name: group.name.clone(),
            destinations: destination_choices(&items, freezers),
            destination: default_destination(&items, freezers),
            scope: MoveScope::All { items },
        })
    }

    /// Item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// What is being moved.
    pub fn scope(&self) -> &MoveScope {
        &self.scope
    }

    /// Current step.
    pub fn step(&self) -> MoveStep {
        match &self.scope {
            MoveScope::All { .. } => MoveStep::ConfirmMoveAll,
            MoveScope::Batch { selection, .. } => match selection.selected() {
                Some(_) => MoveStep::SelectDetails,
                None => MoveStep::SelectWeight,
            },
        }
    }

    /// Freezers offered as destinations.
    pub fn destinations(&self) -> &[Freezer] {
        &self.destinations
    }

    /// Chosen destination, initially the default.
    pub fn destination(&self) -> Option<i64> {
        self.destination
    }

    /// Choose a destination from [`Self::destinations`].
    pub fn set_destination(&mut self, freezer_id: i64) -> AppResult<()> {
        if !self.destinations.iter().any(|f| f.id == freezer_id) {
            return Err(AppError::validation(format!(
                "Freezer {freezer_id} is not a valid destination"
            )));
        }
        self.destination = Some(freezer_id);
        Ok(())
    }

    /// Weight selection for a batch move; `None` for move-all.
    pub fn selection(&self) -> Option<&WeightSelection> {
        match &self.scope {
            MoveScope::Batch { selection, .. } => Some(selection),
            MoveScope::All { .. } => None,
        }
    }

    /// Mutable weight selection for a batch move; `None` for move-all.
    pub fn selection_mut(&mut self) -> Option<&mut WeightSelection> {
        match &mut self.scope {
            MoveScope::Batch { selection, .. } => Some(selection),
            MoveScope::All { .. } => None,
        }
    }

    /// Choose a weight bucket, moving to [`MoveStep::SelectDetails`].
    pub fn select_weight(&mut self, weight: Option<&str>) -> AppResult<()> {
        match self.selection_mut() {
            Some(selection) => selection.select(weight),
            None => Err(AppError::validation("Moving all items does not take a weight")),
        }
    }

    /// Number of records the plan will move.
    pub fn quantity(&self) -> usize {
        match &self.scope {
            MoveScope::Batch { selection, .. } => selection.quantity(),
            MoveScope::All { items } => items.len(),
        }
    }

    /// Resolve ids and destination against live records.
    ///
    /// Move-all only counts live records that still carry the item name.
    pub fn targets(&self, live: &[Item]) -> AppResult<(Vec<i64>, i64)> {
        let dest = self
            .destination
            .ok_or_else(|| AppError::validation("Select a destination freezer"))?;

        let ids = match &self.scope {
            MoveScope::Batch { selection, .. } => selection.resolve(live)?,
            MoveScope::All { items } => {
                let ids: Vec<i64> = live
                    .iter()
                    .filter(|l| items.iter().any(|i| i.id == l.id && i.name == l.name))
                    .map(|l| l.id)
                    .collect();
                if ids.len() < items.len() {
                    return Err(AppError::insufficient_quantity(items.len(), ids.len()));
                }
                ids
            }
        };
        Ok((ids, dest))
    }
}
