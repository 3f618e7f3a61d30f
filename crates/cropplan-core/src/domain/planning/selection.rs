//! Candidate selection: season filter, exclusions, estimation, and the
//! "best plant per category" reduction.

use std::collections::HashMap;

use crate::domain::{
    entities::plant::{EstimatedPlant, PlantRecord},
    value_objects::{Category, Season},
};

use super::EmptyReason;

/// One representative plant per category, in first-seen category order.
///
/// The order matters: it is the tie-break when two categories' yields are
/// equal during ranking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestByCategory {
    plants: Vec<EstimatedPlant>,
    index: HashMap<Category, usize>,
}

impl BestByCategory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a candidate. It becomes its category's representative if the
    /// category is new, or if its yield is *strictly* greater than the
    /// current representative's. Equal yields keep the first-seen plant.
    pub fn offer(&mut self, candidate: EstimatedPlant) {
        match self.index.get(&candidate.category) {
            Some(&slot) => {
                if candidate.yield_kg > self.plants[slot].yield_kg {
                    self.plants[slot] = candidate;
                }
            }
            None => {
                self.index
                    .insert(candidate.category.clone(), self.plants.len());
                self.plants.push(candidate);
            }
        }
    }

    pub fn get(&self, category: &Category) -> Option<&EstimatedPlant> {
        self.index.get(category).map(|&slot| &self.plants[slot])
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EstimatedPlant> {
        self.plants.iter()
    }

    pub fn into_vec(self) -> Vec<EstimatedPlant> {
        self.plants
    }
}

/// Filter the dataset down to one estimated representative per category.
///
/// 1. keep records whose season matches (case-insensitively)
/// 2. drop excluded names
/// 3. estimate each survivor and drop non-viable estimates
/// 4. keep the highest-yield plant per category
///
/// An `Err` is not a failure: it names why the resulting plan is empty.
pub fn select_candidates(
    records: &[PlantRecord],
    season: Season,
    is_excluded: impl Fn(&str) -> bool,
) -> Result<BestByCategory, EmptyReason> {
    let in_season: Vec<&PlantRecord> = records
        .iter()
        .filter(|record| season.matches(&record.season))
        .collect();

    if in_season.is_empty() {
        return Err(EmptyReason::NoSeasonMatch);
    }

    let mut best = BestByCategory::new();
    for record in in_season {
        if is_excluded(&record.name) {
            continue;
        }
        let candidate = EstimatedPlant::from_record(record);
        if !candidate.is_viable() {
            continue;
        }
        best.offer(candidate);
    }

    if best.is_empty() {
        return Err(EmptyReason::NoViableCandidates);
    }
    Ok(best)
}
