use minigames_core::{FieldInput, GemName, MineInput, Registry, slugify};
use std::collections::HashSet;

fn mine_named(name: &str) -> MineInput {
    MineInput {
        name: name.to_string(),
        length: 40.0,
        gem_rates: vec![(GemName::Opal, 0.1)],
        description: None,
    }
}

#[test]
fn added_mine_gets_slugged_id() {
    let mut registry = Registry::seeded();
    let mine = registry.add_mine(mine_named("Gem Garden 2"));
    assert_eq!(mine.id, "gem-garden-2");
    assert_eq!(mine.name, "Gem Garden 2");
    assert!(registry.mine("gem-garden-2").is_some());
}

#[test]
fn colliding_names_get_incrementing_suffixes() {
    let mut registry = Registry::seeded();
    let ids: Vec<String> = (0..4)
        .map(|_| registry.add_mine(mine_named("Mine")).id.clone())
        .collect();
    assert_eq!(ids, ["mine", "mine-1", "mine-2", "mine-3"]);
}

#[test]
fn adding_over_a_seeded_id_suffixes_it() {
    let mut registry = Registry::seeded();
    let field = registry.add_field(FieldInput {
        name: "Grove".into(),
        length: 10.0,
        fruit_chance: 0.4,
        description: None,
    });
    assert_eq!(field.id, "grove-1");
    assert_eq!(registry.field("grove").map(|f| f.name.as_str()), Some("Quiet Grove"));
}

#[test]
fn every_added_id_is_unique_and_derived_from_its_name() {
    let mut registry = Registry::seeded();
    let names = [
        "Shallow Vein",
        "shallow",
        "Shallow!",
        "  shallow  ",
        "Deep Crystal",
        "deep crystal",
        "",
        "***",
    ];
    for name in names {
        let id = registry.add_mine(mine_named(name)).id.clone();
        let base = slugify(name);
        let base = if base.is_empty() { "mine".to_string() } else { base };
        assert!(
            id == base || id.starts_with(&format!("{base}-")),
            "{id} should derive from {base}"
        );
    }
    let all: Vec<&str> = registry.mines().iter().map(|m| m.id.as_str()).collect();
    let unique: HashSet<&str> = all.iter().copied().collect();
    assert_eq!(all.len(), unique.len());
}

#[test]
fn runtime_input_is_clamped_not_rejected() {
    let mut registry = Registry::seeded();
    let mine = registry.add_mine(MineInput {
        name: "Broken Numbers".into(),
        length: f64::INFINITY,
        gem_rates: vec![(GemName::Ruby, f64::NAN), (GemName::Jade, -2.0)],
        description: None,
    });
    assert_eq!(mine.length, 1);
    assert!(mine.gem_rates.values().all(|rate| *rate == 0.0));
    let field = registry.add_field(FieldInput {
        name: "Tiny".into(),
        length: 0.4,
        fruit_chance: -1.0,
        description: Some("barely there".into()),
    });
    assert_eq!(field.length, 1);
    assert!(field.fruit_chance == 0.0);
}

#[test]
fn added_definitions_are_playable() {
    let mut registry = Registry::seeded();
    let id = registry
        .add_field(FieldInput {
            name: "Fresh Orchard".into(),
            length: 3.0,
            fruit_chance: 1.0,
            description: None,
        })
        .id
        .clone();
    let mut rng = <rand::rngs::SmallRng as rand::SeedableRng>::seed_from_u64(8);
    let grid = registry.generate_field(&id, &mut rng).expect("field exists");
    assert_eq!(grid.row_count(), 3);
    assert!(grid.cells().all(|tree| !tree.is_remainder()));
}
