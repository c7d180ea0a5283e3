//! Property-based tests for the view pipeline and the detail navigator.
//!
//! Catalogs are generated with short names over a tiny alphabet and coarse
//! ratings so that ties are common and sort stability actually gets exercised.

use std::cmp::Ordering;
use std::sync::Arc;

use botanical::core::catalog::{
    Accent, Catalog, Difficulty, Plant, PlantId, TemperatureRange,
};
use botanical::core::error::InvalidSelection;
use botanical::core::navigator::{DetailNavigator, DetailTab, NavigatorState};
use botanical::core::view::{DifficultyFilter, SortKey, SortOrder, ViewState, derive};
use chrono::NaiveDate;
use proptest::prelude::*;

fn make_plant(id: u32, name: String, difficulty: Difficulty, rating_tenths: u8) -> Plant {
    Plant {
        id: PlantId(id),
        name,
        care: "Water when dry".to_string(),
        description: "Generated.".to_string(),
        difficulty,
        rating: f32::from(rating_tenths) / 10.0,
        water_needs: 1,
        light_needs: 3,
        humidity: 40,
        temperature: TemperatureRange { min: 10, max: 28 },
        icon: "*".to_string(),
        accent: Accent::YellowGreen,
        last_watered: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    }
}

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(Difficulty::ALL.to_vec())
}

fn catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(("[a-cA-C]{1,4}", difficulty(), 0u8..=50), 1..12).prop_map(|rows| {
        let plants = rows
            .into_iter()
            .enumerate()
            .map(|(i, (name, d, r))| make_plant(i as u32 + 1, name, d, r))
            .collect();
        Catalog::new(plants).unwrap()
    })
}

fn filter() -> impl Strategy<Value = DifficultyFilter> {
    prop::sample::select(DifficultyFilter::CHIPS.to_vec())
}

fn field_key() -> impl Strategy<Value = SortKey> {
    prop::sample::select(vec![SortKey::Name, SortKey::Difficulty, SortKey::Rating])
}

fn view(term: &str, filter: DifficultyFilter, key: SortKey, order: SortOrder) -> ViewState {
    let mut view = ViewState::new();
    view.set_search_term(term);
    view.set_difficulty_filter(filter);
    view.set_sort_key(key).unwrap();
    view.set_sort_order(order);
    view
}

fn compare(key: SortKey, a: &Plant, b: &Plant) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Difficulty => a.difficulty.label().cmp(b.difficulty.label()),
        SortKey::Rating => a.rating.total_cmp(&b.rating),
        SortKey::Random => Ordering::Equal,
    }
}

proptest! {
    #[test]
    fn derived_list_is_exactly_the_matching_plants(
        catalog in catalog(),
        term in "[a-cA-C]{0,2}",
        filter in filter(),
        key in field_key(),
    ) {
        let view = view(&term, filter, key, SortOrder::Ascending);
        let derived = derive(&catalog, &view);
        let needle = term.to_lowercase();
        let matches = |p: &Plant| {
            p.name.to_lowercase().contains(&needle) && filter.matches(p.difficulty)
        };

        for plant in &derived {
            prop_assert!(matches(plant), "{} should have been filtered out", plant.name);
        }
        let expected = catalog.plants().iter().filter(|p| matches(p)).count();
        prop_assert_eq!(derived.len(), expected);
    }

    #[test]
    fn field_sort_is_ordered_and_stable(
        catalog in catalog(),
        key in field_key(),
        descending in any::<bool>(),
    ) {
        let order = if descending { SortOrder::Descending } else { SortOrder::Ascending };
        let derived = derive(&catalog, &view("", DifficultyFilter::All, key, order));

        for pair in derived.windows(2) {
            let ord = compare(key, pair[0], pair[1]);
            match order {
                SortOrder::Ascending => prop_assert_ne!(ord, Ordering::Greater),
                SortOrder::Descending => prop_assert_ne!(ord, Ordering::Less),
            }
            if ord == Ordering::Equal {
                prop_assert!(
                    catalog.position(pair[0].id) < catalog.position(pair[1].id),
                    "ties must keep catalog order"
                );
            }
        }
    }

    #[test]
    fn derive_is_idempotent(
        catalog in catalog(),
        term in "[a-c]{0,1}",
        filter in filter(),
        key in field_key(),
    ) {
        let view = view(&term, filter, key, SortOrder::Descending);
        let first: Vec<PlantId> = derive(&catalog, &view).iter().map(|p| p.id).collect();
        let second: Vec<PlantId> = derive(&catalog, &view).iter().map(|p| p.id).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn descending_reverses_the_key_sequence(catalog in catalog(), key in field_key()) {
        let asc = derive(&catalog, &view("", DifficultyFilter::All, key, SortOrder::Ascending));
        let desc = derive(&catalog, &view("", DifficultyFilter::All, key, SortOrder::Descending));
        prop_assert_eq!(asc.len(), desc.len());
        for (a, d) in asc.iter().zip(desc.iter().rev()) {
            prop_assert_eq!(compare(key, a, d), Ordering::Equal);
        }
    }

    #[test]
    fn n_steps_return_to_start(catalog in catalog(), start in any::<prop::sample::Index>()) {
        let catalog = Arc::new(catalog);
        let n = catalog.len();
        let id = catalog.plants()[start.index(n)].id;
        let mut nav = DetailNavigator::new(catalog.clone());
        nav.open(id).unwrap();

        for _ in 0..n {
            nav.next().unwrap();
        }
        prop_assert_eq!(nav.current_selection().map(|p| p.id), Some(id));

        for _ in 0..n {
            nav.previous().unwrap();
        }
        prop_assert_eq!(nav.current_selection().map(|p| p.id), Some(id));
    }

    #[test]
    fn reopening_resets_tab(
        catalog in catalog(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
        tab in prop::sample::select(DetailTab::ALL.to_vec()),
    ) {
        let catalog = Arc::new(catalog);
        let n = catalog.len();
        let mut nav = DetailNavigator::new(catalog.clone());
        nav.open(catalog.plants()[a.index(n)].id).unwrap();
        nav.select_tab(tab).unwrap();
        nav.open(catalog.plants()[b.index(n)].id).unwrap();
        prop_assert_eq!(nav.current_tab(), Some(DetailTab::Info));
    }

    #[test]
    fn closed_navigator_rejects_without_change(catalog in catalog()) {
        let mut nav = DetailNavigator::new(Arc::new(catalog));
        prop_assert_eq!(nav.next(), Err(InvalidSelection::Closed));
        prop_assert_eq!(nav.previous(), Err(InvalidSelection::Closed));
        prop_assert_eq!(nav.select_tab(DetailTab::Care), Err(InvalidSelection::Closed));
        prop_assert_eq!(nav.state(), NavigatorState::Closed);
        prop_assert!(nav.current_selection().is_none());
    }
}
