use delve_blocks::{AIR, BlockRegistry, PaletteRole, Shape};
use proptest::prelude::*;

const SMALL_CATALOG: &str = r#"
    [[blocks]]
    name = "air"
    id = -1
    break_time = -1.0

    [[blocks]]
    name = "stone"
    id = 0
    value = 3
    break_time = 0.0

    [[blocks]]
    name = "barrier"
    id = 1
    break_time = -1.0

    [[blocks]]
    name = "metal"
    id = 2

    [[blocks]]
    name = "wood"
    id = 3

    [[blocks]]
    name = "moss"
    id = 4
    transparent = true
    texture = 9

    [[palettes]]
    name = "only"
    ground = "stone"
    ore0 = "stone"
    ore1 = "stone"
    ore2 = "stone"
    ground_decor = "moss"
    ceiling_decor = "moss"
"#;

#[test]
fn builtin_catalog_loads() {
    let reg = BlockRegistry::builtin();
    assert!(reg.lookup(AIR).is_air());
    let barrier = reg.lookup(reg.barrier());
    assert_eq!(barrier.name, "barrier");
    assert!(!barrier.is_breakable());
    assert_eq!(barrier.value, 777);
    assert_eq!(reg.lookup(reg.scaffold()).name, "metal");
    assert_eq!(reg.lookup(reg.enemy_scaffold()).name, "wood");
    assert!(reg.palettes().len() >= 2);
}

#[test]
fn builtin_ore_values_follow_rarity() {
    let reg = BlockRegistry::builtin();
    for p in reg.palettes() {
        let v0 = reg.lookup(p.block(PaletteRole::Ore0)).value;
        let v2 = reg.lookup(p.block(PaletteRole::Ore2)).value;
        assert!(v2 > v0, "palette {} rarest ore should be worth most", p.name);
        assert_eq!(reg.lookup(p.ground_decor).shape(), Shape::Cross);
        assert_eq!(reg.lookup(p.ceiling_decor).shape(), Shape::Cross);
    }
}

#[test]
fn texture_layer_defaults_to_id() {
    let reg = BlockRegistry::from_toml_str(SMALL_CATALOG).expect("registry");
    let stone = reg.id_by_name("stone").unwrap();
    assert_eq!(reg.lookup(stone).texture_layer, 0);
    let moss = reg.id_by_name("moss").unwrap();
    assert_eq!(reg.lookup(moss).texture_layer, 9);
}

#[test]
fn occupancy_respects_transparency() {
    let reg = BlockRegistry::from_toml_str(SMALL_CATALOG).expect("registry");
    let stone = reg.id_by_name("stone").unwrap();
    let moss = reg.id_by_name("moss").unwrap();
    assert!(!reg.occupies(AIR, true));
    assert!(!reg.occupies(AIR, false));
    assert!(reg.occupies(stone, false));
    assert!(reg.occupies(moss, true));
    assert!(!reg.occupies(moss, false));
}

#[test]
fn rejects_gaps_duplicates_and_missing_air() {
    let gap = r#"
        [[blocks]]
        name = "air"
        id = -1
        [[blocks]]
        name = "stone"
        id = 1
    "#;
    assert!(BlockRegistry::from_toml_str(gap).is_err());

    let dup = SMALL_CATALOG.replace("name = \"wood\"", "name = \"metal\"");
    assert!(BlockRegistry::from_toml_str(&dup).is_err());

    let no_air = SMALL_CATALOG.replace("id = -1", "id = 5");
    assert!(BlockRegistry::from_toml_str(&no_air).is_err());

    let bad_palette = SMALL_CATALOG.replace("ore2 = \"stone\"", "ore2 = \"gold\"");
    assert!(BlockRegistry::from_toml_str(&bad_palette).is_err());
}

#[test]
#[should_panic(expected = "unknown block id")]
fn lookup_of_unregistered_id_is_fatal() {
    let reg = BlockRegistry::builtin();
    let _ = reg.lookup(i16::MAX);
}

proptest! {
    // get() is total: registered ids resolve to themselves, everything else is None
    #[test]
    fn get_is_total(id in any::<i16>()) {
        let reg = BlockRegistry::builtin();
        match reg.get(id) {
            Some(ty) => prop_assert_eq!(ty.id, id),
            None => prop_assert!(id < AIR || reg.blocks().all(|b| b.id != id)),
        }
    }

    #[test]
    fn palette_for_level_cycles(level in 0u32..10_000) {
        let reg = BlockRegistry::builtin();
        let n = reg.palettes().len() as u32;
        prop_assert_eq!(reg.palette_for_level(level), reg.palette_for_level(level + n));
    }
}
