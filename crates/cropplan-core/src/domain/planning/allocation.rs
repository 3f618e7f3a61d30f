//! Category ranking and the round-robin space-filling allocator.
//!
//! The allocator is a greedy heuristic, not an optimiser. Each pass walks
//! the selected categories in rank order and gives one more unit to every
//! category that still fits. A cheap category early in the order can use
//! up space a higher-yield category later in the order needed. Diversity
//! wins over total yield here; keep it that way.

use crate::domain::entities::{plan::CategorySelection, plant::EstimatedPlant};

use super::selection::BestByCategory;

/// Sort representatives by yield per plant, highest first, and keep the
/// first `max_categories`. The sort is stable, so equal yields keep
/// first-seen category order.
pub fn rank_categories(best: BestByCategory, max_categories: usize) -> Vec<EstimatedPlant> {
    let mut ranked = best.into_vec();
    ranked.sort_by(|a, b| b.yield_kg.total_cmp(&a.yield_kg));
    ranked.truncate(max_categories);
    ranked
}

/// Result of the fill: every ranked entry with its unit count (zero
/// included) and the running totals accumulated while placing units.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    entries: Vec<CategorySelection>,
    used_area_m2: f64,
    total_yield_kg: f64,
}

impl Allocation {
    /// Every ranked entry in rank order, including those that got no units.
    pub fn entries(&self) -> &[CategorySelection] {
        &self.entries
    }

    /// Entries that received at least one unit, in rank order.
    pub fn placed(&self) -> impl Iterator<Item = &CategorySelection> {
        self.entries.iter().filter(|entry| entry.units > 0)
    }

    /// Area consumed, summed in placement order (unrounded).
    pub fn used_area_m2(&self) -> f64 {
        self.used_area_m2
    }

    /// Yield of all placed units, summed in placement order (unrounded).
    pub fn total_yield_kg(&self) -> f64 {
        self.total_yield_kg
    }

    pub fn into_placed(self) -> Vec<CategorySelection> {
        self.entries
            .into_iter()
            .filter(|entry| entry.units > 0)
            .collect()
    }
}

/// Round-robin fill of `total_area_m2`.
///
/// A unit fits when `used + area <= total`, compared exactly with no
/// epsilon. The loop ends after the first pass that places nothing.
/// Every ranked plant is viable (area > 0), so each productive pass
/// consumes space and the loop terminates. Callers pass a validated
/// area, at most
/// [`MAX_TOTAL_AREA_M2`](crate::domain::entities::MAX_TOTAL_AREA_M2).
pub fn allocate(ranked: Vec<EstimatedPlant>, total_area_m2: f64) -> Allocation {
    let mut units = vec![0u32; ranked.len()];
    let mut used_area_m2 = 0.0_f64;
    let mut total_yield_kg = 0.0_f64;

    loop {
        let mut placed_any = false;
        for (slot, plant) in ranked.iter().enumerate() {
            if used_area_m2 + plant.area_m2 <= total_area_m2 {
                units[slot] += 1;
                used_area_m2 += plant.area_m2;
                total_yield_kg += plant.yield_kg;
                placed_any = true;
            }
        }
        if !placed_any {
            break;
        }
    }

    let entries = ranked
        .into_iter()
        .zip(units)
        .map(|(plant, units)| CategorySelection::new(plant, units))
        .collect();

    Allocation {
        entries,
        used_area_m2,
        total_yield_kg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::plant::PlantRecord;

    fn plant(name: &str, category: &str, shelf: f64) -> EstimatedPlant {
        EstimatedPlant::from_record(
            &PlantRecord::new(name, category, "Summer").with_shelf_life(shelf),
        )
    }

    fn best(plants: Vec<EstimatedPlant>) -> BestByCategory {
        let mut best = BestByCategory::new();
        for p in plants {
            best.offer(p);
        }
        best
    }

    #[test]
    fn ranking_sorts_by_yield_descending_and_truncates() {
        let ranked = rank_categories(
            best(vec![
                plant("Basil", "Herb", 20.0),     // 0.1
                plant("Tomato", "Fruit", 20.0),   // 2.2
                plant("Potato", "Tuber", 20.0),   // 1.65
            ]),
            2,
        );
        let names: Vec<_> = ranked.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Tomato", "Potato"]);
    }

    #[test]
    fn ranking_ties_keep_first_seen_order() {
        // Leafy has no yield row and an unknown category uses defaults:
        // both come out at 0.2 kg.
        let ranked = rank_categories(
            best(vec![
                plant("Lettuce", "Leafy", 20.0), // 45 days → 0.2
                plant("Mystery", "Other", 20.0), // defaults → 0.2
            ]),
            5,
        );
        let names: Vec<_> = ranked.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Lettuce", "Mystery"]);
    }

    #[test]
    fn single_herb_fills_one_square_metre_with_six_units() {
        let allocation = allocate(vec![plant("Basil", "Herb", 20.0)], 1.0);
        assert_eq!(allocation.entries()[0].units, 6);
        assert!(allocation.used_area_m2() <= 1.0);
        assert!((allocation.used_area_m2() - 0.9).abs() < 1e-9);
        assert!((allocation.total_yield_kg() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn zero_area_places_nothing() {
        let allocation = allocate(vec![plant("Basil", "Herb", 20.0)], 0.0);
        assert_eq!(allocation.entries()[0].units, 0);
        assert_eq!(allocation.placed().count(), 0);
        assert_eq!(allocation.used_area_m2(), 0.0);
    }

    #[test]
    fn round_robin_gives_small_plants_leftover_space() {
        // Fruit 0.5 m², Herb 0.15 m², 1.0 m² total.
        // Pass 1: fruit (0.5), herb (0.65). Pass 2: fruit does not fit
        // (1.15), herb (0.8). Pass 3: herb (0.95). Pass 4: nothing.
        let allocation = allocate(
            vec![plant("Tomato", "Fruit", 20.0), plant("Basil", "Herb", 20.0)],
            1.0,
        );
        let units: Vec<_> = allocation.entries().iter().map(|e| e.units).collect();
        assert_eq!(units, [1, 3]);
    }

    #[test]
    fn entries_that_never_fit_are_dropped_from_placed() {
        // 0.3 m²: herb fits twice, cactus (0.8 m²) never does.
        let allocation = allocate(
            vec![plant("Saguaro", "Cactus", 20.0), plant("Basil", "Herb", 20.0)],
            0.3,
        );
        assert_eq!(allocation.entries().len(), 2);
        let placed: Vec<_> = allocation
            .placed()
            .map(|e| (e.plant.name.as_str(), e.units))
            .collect();
        assert_eq!(placed, [("Basil", 2)]);
    }

    #[test]
    fn never_over_allocates() {
        for area in [0.1, 0.7, 1.0, 3.3, 20.0, 57.25] {
            let allocation = allocate(
                vec![
                    plant("Tomato", "Fruit", 20.0),
                    plant("Potato", "Tuber", 20.0),
                    plant("Carrot", "Root", 20.0),
                    plant("Basil", "Herb", 20.0),
                ],
                area,
            );
            assert!(allocation.used_area_m2() <= area, "area {area}");
        }
    }

    #[test]
    fn largest_accepted_area_fills_without_overflow() {
        use crate::domain::entities::MAX_TOTAL_AREA_M2;

        let allocation = allocate(vec![plant("Basil", "Herb", 20.0)], MAX_TOTAL_AREA_M2);
        let units = allocation.entries()[0].units;
        // 1e6 / 0.15 ≈ 6.67 million herbs; float drift may cost one.
        assert!((6_666_665..=6_666_666).contains(&units), "units {units}");
        assert!(allocation.used_area_m2() <= MAX_TOTAL_AREA_M2);
    }
}
