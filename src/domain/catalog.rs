//! Fixed reference tables.

use crate::domain::model::Season;

/// Start of each season as (season, month, day), in calendar order.
pub const SEASON_BOUNDARIES: [(Season, u32, u32); 4] = [
    (Season::Spring, 3, 20),
    (Season::Summer, 6, 21),
    (Season::Fall, 9, 22),
    (Season::Winter, 12, 21),
];

/// Typical harvest per plant in pounds over one season.
pub const DEFAULT_YIELDS: &[(&str, f64)] = &[
    ("tomato", 8.0),
    ("pepper", 3.0),
    ("cucumber", 5.0),
    ("zucchini", 6.0),
    ("squash", 5.0),
    ("eggplant", 4.0),
    ("bean", 0.5),
    ("pea", 0.3),
    ("lettuce", 0.5),
    ("spinach", 0.3),
    ("kale", 1.0),
    ("carrot", 0.25),
    ("beet", 0.3),
    ("radish", 0.1),
    ("onion", 0.3),
    ("garlic", 0.1),
    ("potato", 2.0),
    ("broccoli", 1.0),
    ("cabbage", 3.0),
    ("strawberry", 1.0),
    ("basil", 0.5),
];

/// Default yield for a plant type, matched case-insensitively.
pub fn default_yield(plant_type: &str) -> Option<f64> {
    let key = plant_type.trim();
    DEFAULT_YIELDS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|&(_, pounds)| pounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_yield_lookup() {
        assert_eq!(default_yield("tomato"), Some(8.0));
        assert_eq!(default_yield(" Tomato "), Some(8.0));
        assert_eq!(default_yield("dragonfruit"), None);
    }

    #[test]
    fn test_boundaries_in_calendar_order() {
        let mut previous = (0, 0);
        for &(_, month, day) in SEASON_BOUNDARIES.iter() {
            assert!((month, day) > previous);
            previous = (month, day);
        }
    }
}
