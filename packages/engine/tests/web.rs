//! Browser smoke test: `wasm-pack test --headless --chrome packages/engine`
#![cfg(target_arch = "wasm32")]

use accretion_engine::World;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn world_steps_in_the_browser() {
    accretion_engine::init();
    let mut world = World::new(400, 300);
    world.spawn_galaxy();
    world.step();
    assert_eq!(world.frame(), 1);
    assert!(world.primitive_count() > 0);
}

#[wasm_bindgen_test]
fn bad_config_is_a_js_error() {
    let result = World::with_config(400, 300, r#"{"spawn_interval": 0}"#.to_string());
    assert!(result.is_err());
}
