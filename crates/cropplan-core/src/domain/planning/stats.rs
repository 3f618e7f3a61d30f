//! Reduce an allocation to the six summary statistics.

use crate::domain::entities::plan::GardenStats;

use super::{allocation::Allocation, round_to};

/// Summarise the placed entries of an allocation.
///
/// Area and yield totals come from the running sums kept during the fill.
/// An allocation where nothing was placed summarises to all zeros.
pub fn summarize(allocation: &Allocation, people: u32) -> GardenStats {
    let mut plant_types = 0usize;
    let mut total_plants = 0u64;
    let mut growth_days_sum = 0.0_f64;

    for entry in allocation.placed() {
        plant_types += 1;
        total_plants += u64::from(entry.units);
        growth_days_sum += entry.plant.growth_days;
    }

    if plant_types == 0 {
        return GardenStats::default();
    }

    let total_yield = allocation.total_yield_kg();
    let yield_per_person_kg = if people > 0 {
        round_to(total_yield / f64::from(people), 2)
    } else {
        0.0
    };

    GardenStats {
        plant_types,
        total_plants,
        used_area_m2: round_to(allocation.used_area_m2(), 2),
        total_yield_kg: round_to(total_yield, 2),
        yield_per_person_kg,
        average_growth_days: round_to(growth_days_sum / plant_types as f64, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::plant::{EstimatedPlant, PlantRecord},
        planning::allocation::allocate,
    };

    fn plant(name: &str, category: &str, shelf: f64) -> EstimatedPlant {
        EstimatedPlant::from_record(
            &PlantRecord::new(name, category, "Spring").with_shelf_life(shelf),
        )
    }

    #[test]
    fn herb_scenario_statistics() {
        let allocation = allocate(vec![plant("Basil", "Herb", 20.0)], 1.0);
        let stats = summarize(&allocation, 2);
        assert_eq!(stats.plant_types, 1);
        assert_eq!(stats.total_plants, 6);
        assert_eq!(stats.used_area_m2, 0.9);
        assert_eq!(stats.total_yield_kg, 0.6);
        assert_eq!(stats.yield_per_person_kg, 0.3);
        assert_eq!(stats.average_growth_days, 40.0);
    }

    #[test]
    fn zero_people_means_zero_yield_per_person() {
        let allocation = allocate(vec![plant("Basil", "Herb", 20.0)], 1.0);
        let stats = summarize(&allocation, 0);
        assert_eq!(stats.yield_per_person_kg, 0.0);
        assert_eq!(stats.total_yield_kg, 0.6);
    }

    #[test]
    fn average_growth_is_unweighted_by_units() {
        // Tomato 80 days x1, Basil 40 days x3 → (80 + 40) / 2 = 60.
        let allocation = allocate(
            vec![plant("Tomato", "Fruit", 20.0), plant("Basil", "Herb", 20.0)],
            1.0,
        );
        let stats = summarize(&allocation, 1);
        assert_eq!(stats.total_plants, 4);
        assert_eq!(stats.average_growth_days, 60.0);
        assert_eq!(stats.used_area_m2, 0.95);
        assert_eq!(stats.total_yield_kg, 2.5);
    }

    #[test]
    fn unplaced_entries_do_not_count() {
        let allocation = allocate(
            vec![plant("Saguaro", "Cactus", 20.0), plant("Basil", "Herb", 20.0)],
            0.3,
        );
        let stats = summarize(&allocation, 1);
        assert_eq!(stats.plant_types, 1);
        assert_eq!(stats.average_growth_days, 40.0);
    }

    #[test]
    fn nothing_placed_is_all_zero() {
        let allocation = allocate(vec![plant("Basil", "Herb", 20.0)], 0.0);
        assert!(summarize(&allocation, 4).is_zero());
    }
}
