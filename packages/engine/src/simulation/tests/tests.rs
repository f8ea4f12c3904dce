use super::*;
use crate::domain::color::Color;
use crate::domain::constants::{GEOMETRY_STRIDE, GLOW_RINGS, PRIM_DISK, PRIM_POINT, PRIM_RING};

fn config_with(json: &str) -> SimConfig {
    SimConfig::from_json(json).expect("test config should parse")
}

#[test]
fn default_scene_on_800_by_600() {
    let sim = Simulation::new(800, 600);
    let a = sim.attractor();

    assert_eq!(a.position(), Vec2::new(400.0, 300.0));
    assert_eq!(a.mass(), 10_000.0);
    assert_eq!(a.radius(), 30.0);
    assert_eq!(a.event_horizon_radius(), 30.0);
    assert_eq!(a.photon_sphere_radius(), 45.0);

    assert_eq!(sim.field().len(), 200);
    for p in sim.field().iter() {
        let d = a.distance_to(p.position);
        assert!(d >= 80.0 - 1e-3 && d <= 400.0 + 1e-3, "spawned at distance {}", d);
        assert!((1.0..=3.0).contains(&p.mass));
        assert!(p.velocity.x.abs() <= 1.0 && p.velocity.y.abs() <= 1.0);
    }
    assert!(sim.bodies().is_empty());
    assert_eq!(sim.frame(), 0);
}

#[test]
fn press_adds_mass_but_keeps_radii() {
    let mut sim = Simulation::new(800, 600);
    sim.press();

    let a = sim.attractor();
    assert_eq!(a.mass(), 15_000.0);
    assert_eq!(a.event_horizon_radius(), 30.0);
    assert_eq!(a.photon_sphere_radius(), 45.0);

    sim.increase_attractor_mass(2_500.0);
    assert_eq!(sim.attractor().mass(), 17_500.0);
}

#[test]
fn mass_never_drops_below_floor() {
    let mut sim = Simulation::new(800, 600);
    sim.increase_attractor_mass(-1.0e9);
    assert_eq!(sim.attractor().mass(), 1.0);

    sim.increase_attractor_mass(f32::NAN);
    assert_eq!(sim.attractor().mass(), 1.0);
}

#[test]
fn huge_mass_increment_keeps_every_coordinate_finite() {
    let mut sim = Simulation::new(800, 600);
    sim.spawn_galaxy();
    sim.increase_attractor_mass(1.0e36);
    assert!(sim.attractor().mass().is_finite());

    for _ in 0..3 {
        sim.advance_frame();
    }

    let lost_particles = sim.field().iter().filter(|p| !p.position.is_finite()).count();
    let lost_components: usize = sim
        .bodies()
        .iter()
        .map(|b| b.component_positions().filter(|c| !c.is_finite()).count())
        .sum();
    let lost_bodies = sim.bodies().iter().filter(|b| !b.position.is_finite()).count();
    assert_eq!((lost_particles, lost_bodies, lost_components), (0, 0, 0));
    assert!(sim.primitive_geometry().iter().all(|v| v.is_finite()));
}

#[test]
fn configured_mass_matches_the_running_attractor() {
    assert!(Simulation::from_config_json(800, 600, r#"{"attractor_mass": 0.5}"#).is_err());

    let sim = Simulation::from_config_json(800, 600, r#"{"attractor_mass": 2.5}"#)
        .expect("valid config");
    assert_eq!(sim.attractor().mass(), sim.config().attractor_mass);
}

#[test]
fn disk_population_follows_removed_and_spawned() {
    let mut sim = Simulation::new(800, 600);
    sim.enable_perf_metrics(true);

    for _ in 0..60 {
        let before = sim.field().len() as i64;
        sim.step();
        let stats = sim.get_perf_stats();

        let after = sim.field().len() as i64;
        assert_eq!(
            after,
            before - stats.particles_removed() as i64 + stats.particles_spawned() as i64
        );
        let expected_spawns = if sim.frame() % 10 == 0 { 1 } else { 0 };
        assert_eq!(stats.particles_spawned(), expected_spawns, "frame {}", sim.frame());
    }
    assert_eq!(sim.frame(), 60);
}

#[test]
fn light_attractor_only_adds_particles() {
    // Particles start at least 50 units outside the horizon with speed <= 1
    // and a near-massless attractor cannot pull them in within a few frames.
    let mut sim = Simulation::with_config(800, 600, config_with(r#"{"attractor_mass": 1.0}"#))
        .expect("valid config");

    for _ in 0..30 {
        sim.step();
    }
    assert_eq!(sim.field().len(), 203);
}

#[test]
fn disk_cap_limits_growth() {
    let config = config_with(r#"{"max_disk_particles": 200, "attractor_mass": 1.0}"#);
    let mut sim = Simulation::with_config(800, 600, config).expect("valid config");

    for _ in 0..30 {
        sim.step();
    }
    assert_eq!(sim.field().len(), 200);
}

#[test]
fn frame_buffers_follow_draw_order() {
    let mut sim = Simulation::new(800, 600);
    sim.spawn_star();
    sim.advance_frame();

    let particles = sim.field().len();
    let components = sim.bodies().component_count();
    let lensing = sim.lensing_sample_count();
    let glow = GLOW_RINGS as usize;
    let total = 1 + glow + particles + 1 + components + lensing;

    assert_eq!(sim.primitive_count(), total);
    assert_eq!(sim.primitive_kinds().len(), total);
    assert_eq!(sim.primitive_geometry().len(), total * GEOMETRY_STRIDE);
    assert_eq!(sim.primitive_colors().len(), total);

    let kinds = sim.primitive_kinds();
    let colors = sim.primitive_colors();

    // Horizon disk, then the glow
    assert_eq!(kinds[0], PRIM_DISK);
    assert_eq!(colors[0], Color::BLACK.packed());
    assert_eq!(sim.primitive_geometry()[2], 30.0);
    for i in 1..=glow {
        assert_eq!(kinds[i], PRIM_DISK);
        assert_eq!(Color::from_packed(colors[i]).r, 255);
    }

    let disk_start = 1 + glow;
    for i in disk_start..disk_start + particles {
        assert_eq!(kinds[i], PRIM_DISK);
        assert_eq!(colors[i], Color::DISK_BLUE.packed());
    }

    let ring = disk_start + particles;
    assert_eq!(kinds[ring], PRIM_RING);
    assert_eq!(colors[ring], Color::PHOTON_RING.packed());
    let g = &sim.primitive_geometry()[ring * GEOMETRY_STRIDE..(ring + 1) * GEOMETRY_STRIDE];
    assert_eq!(g, &[400.0, 300.0, 45.0, 2.0]);

    for i in ring + 1..ring + 1 + components {
        assert_eq!(kinds[i], PRIM_DISK);
        assert_eq!(colors[i], Color::STAR_YELLOW.packed());
    }

    for &kind in &kinds[ring + 1 + components..] {
        assert_eq!(kind, PRIM_POINT);
    }
}

#[test]
fn lensing_count_for_default_canvas() {
    let mut sim = Simulation::new(800, 600);
    sim.advance_frame();
    // 40 x 30 grid minus the 9 lattice points inside the horizon
    assert_eq!(sim.lensing_sample_count(), 1191);
}

#[test]
fn step_alone_leaves_render_buffers_untouched() {
    let mut sim = Simulation::new(800, 600);
    sim.step();
    assert_eq!(sim.primitive_count(), 0);
    assert_eq!(sim.frame(), 1);
}

#[test]
fn star_and_galaxy_component_counts() {
    let mut sim = Simulation::new(800, 600);
    let star = sim.spawn_star();
    let galaxy = sim.spawn_galaxy();

    assert_ne!(star, galaxy);
    assert_eq!(sim.bodies().len(), 2);
    assert_eq!(sim.bodies().get(star).map(|b| b.components.len()), Some(100));
    assert_eq!(sim.bodies().get(galaxy).map(|b| b.components.len()), Some(500));
    assert_eq!(sim.bodies().component_count(), 600);

    assert!(sim.remove_body(star));
    assert!(!sim.remove_body(star));
    assert_eq!(sim.bodies().component_count(), 500);
}

#[test]
fn positions_stay_finite_over_many_frames() {
    let mut sim = Simulation::new(800, 600);
    sim.spawn_star();
    sim.spawn_galaxy();

    for i in 0..600 {
        if i % 100 == 0 {
            sim.press();
        }
        sim.advance_frame();
    }

    assert!(sim.field().iter().all(|p| p.position.is_finite() && p.velocity.is_finite()));
    for body in sim.bodies().iter() {
        assert!(body.position.is_finite());
        assert!(body.component_positions().all(|c| c.is_finite()));
    }
    assert!(sim.primitive_geometry().iter().all(|v| v.is_finite()));
}

#[test]
fn same_seed_same_inputs_same_state() {
    let mut a = Simulation::new(640, 480);
    let mut b = Simulation::new(640, 480);

    for i in 0..120 {
        if i == 5 {
            a.spawn_galaxy();
            b.spawn_galaxy();
        }
        if i == 40 {
            a.press();
            b.press();
        }
        a.advance_frame();
        b.advance_frame();
    }

    assert_eq!(a.field().particles(), b.field().particles());
    assert!(a.bodies().iter().eq(b.bodies().iter()));
    assert_eq!(a.primitive_geometry(), b.primitive_geometry());
}

#[test]
fn different_seeds_diverge() {
    let a = Simulation::new(800, 600);
    let b = Simulation::with_config(800, 600, config_with(r#"{"seed": 99}"#)).expect("valid config");
    assert_ne!(a.field().particles(), b.field().particles());
}

#[test]
fn reset_replays_the_initial_scene() {
    let mut sim = Simulation::new(800, 600);
    let initial: Vec<_> = sim.field().particles().to_vec();

    sim.spawn_star();
    sim.press();
    for _ in 0..25 {
        sim.advance_frame();
    }

    sim.reset();
    assert_eq!(sim.frame(), 0);
    assert_eq!(sim.attractor().mass(), 10_000.0);
    assert!(sim.bodies().is_empty());
    assert_eq!(sim.primitive_count(), 0);
    assert_eq!(sim.field().particles(), initial.as_slice());
}

#[test]
fn perf_stats_only_when_enabled() {
    let mut sim = Simulation::new(800, 600);
    sim.advance_frame();
    assert_eq!(sim.get_perf_stats(), PerfStats::default());

    sim.enable_perf_metrics(true);
    sim.spawn_star();
    sim.advance_frame();
    let stats = sim.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.render_ms() >= 0.0);
    assert_eq!(stats.primitives() as usize, sim.primitive_count());
    assert_eq!(stats.lensing_samples() as usize, sim.lensing_sample_count());
    assert_eq!(stats.disk_particles() as usize, sim.field().len());
    assert_eq!(stats.bodies(), 1);
    assert_eq!(stats.components(), 100);

    sim.enable_perf_metrics(false);
    assert_eq!(sim.get_perf_stats(), PerfStats::default());
}

#[test]
fn scene_json_mirrors_buffers() {
    let mut sim = Simulation::new(800, 600);
    sim.advance_frame();

    let value: serde_json::Value = serde_json::from_str(&sim.scene_json()).expect("scene json");
    assert_eq!(value["frame"], 1);
    assert_eq!(value["attractor"]["event_horizon_radius"], 30.0);

    let primitives = value["primitives"].as_array().expect("primitives array");
    assert_eq!(primitives.len(), sim.primitive_count());
    assert_eq!(primitives[0]["kind"], "disk");
    assert_eq!(primitives[0]["color"]["a"], 255);
    assert_eq!(primitives.last().map(|p| p["kind"].clone()), Some("point".into()));
}

#[test]
fn config_errors_surface_as_strings() {
    let err = Simulation::from_config_json(800, 600, r#"{"lensing_stride": -1}"#)
        .err()
        .expect("negative stride must fail");
    assert!(err.contains("lensing_stride"));

    let mut bad = SimConfig::default();
    bad.attractor_radius = 0.0;
    assert!(Simulation::with_config(800, 600, bad).is_err());
}

#[test]
fn config_json_round_trips_through_the_aggregate() {
    let sim = Simulation::from_config_json(800, 600, r#"{"seed": 3, "spawn_interval": 4}"#)
        .expect("valid config");
    let config = SimConfig::from_json(&sim.config_json()).expect("config json");
    assert_eq!(&config, sim.config());
    assert_eq!(config.spawn_interval, 4);
}

#[test]
fn abi_layout_matches_buffers() {
    let mut sim = Simulation::new(320, 240);
    sim.advance_frame();
    let layout = sim.abi_layout_data();

    assert_eq!(layout.kinds_len_elements, sim.primitive_count());
    assert_eq!(layout.kinds_len_bytes, sim.primitive_count());
    assert_eq!(layout.geometry_len_elements, sim.primitive_count() * GEOMETRY_STRIDE);
    assert_eq!(layout.geometry_len_bytes, layout.geometry_len_elements * 4);
    assert_eq!(layout.colors_len_bytes, layout.colors_len_elements * 4);
    assert_eq!(layout.kinds_ptr, sim.primitive_kinds().as_ptr());
}
