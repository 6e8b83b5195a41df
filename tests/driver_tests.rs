use squish::driver::{GRAVITY_ON, MOLE_STEP};
use squish::{BodyConfig, Command, Simulation, Vec2};

fn sim() -> Simulation<f64> {
    Simulation::new(&BodyConfig::new()).unwrap()
}

#[test]
fn gravity_toggles_on_and_off() {
    let mut sim = sim();
    assert_eq!(sim.body().gravity(), Vec2::zero());
    sim.handle(Command::ToggleGravity).unwrap();
    assert_eq!(sim.body().gravity(), Vec2::new(0.0, GRAVITY_ON));
    sim.handle(Command::ToggleGravity).unwrap();
    assert_eq!(sim.body().gravity(), Vec2::zero());
}

#[test]
fn mole_commands_step_by_ten() {
    let mut sim = sim();
    sim.handle(Command::IncreaseMoles).unwrap();
    sim.handle(Command::IncreaseMoles).unwrap();
    sim.handle(Command::DecreaseMoles).unwrap();
    assert_eq!(sim.body().mole_amount(), MOLE_STEP);
    let expected = MOLE_STEP * 8.31 * 300.0;
    assert!((sim.body().gas().mole_energy() - expected).abs() < 1e-6);
}

#[test]
fn frames_use_elapsed_time() {
    let mut sim = sim();
    sim.handle(Command::ToggleGravity).unwrap();
    let start = sim.body().centroid();

    assert_eq!(sim.frame(10.0), 0.0);
    assert!((sim.frame(10.5) - 0.5).abs() < 1e-12);
    assert_eq!(sim.frame(10.25), 0.0);
    sim.frame(10.5);

    // Centroid is refreshed at the start of each step, so take one more.
    sim.frame(10.5);
    assert!(sim.body().centroid().y > start.y, "gravity should pull the body down");
}

#[test]
fn clock_reset_skips_pause() {
    let mut sim = sim();
    sim.frame(1.0);
    sim.clock_mut().reset();
    assert_eq!(sim.frame(100.0), 0.0);
}

#[test]
fn outline_is_closed() {
    let sim = sim();
    let positions = sim.body().vertex_positions();
    let outline = sim.outline();
    assert_eq!(outline.len(), positions.len());
    assert_eq!(outline[0], (positions[positions.len() - 1], positions[0]));
    for pair in outline.windows(2) {
        assert_eq!(pair[0].1, pair[1].0);
    }
}

#[test]
fn floor_segment_spans_viewport() {
    let sim = sim();
    assert_eq!(
        sim.floor_segment(600.0),
        (Vec2::new(0.0, 370.0), Vec2::new(600.0, 370.0))
    );
}

#[test]
fn hud_reports_moles_and_volume() {
    let mut sim = sim();
    sim.handle(Command::IncreaseMoles).unwrap();
    let hud = sim.hud();
    assert_eq!(hud.mole_amount, 10.0);
    assert_eq!(hud.volume, sim.body().volume());
    assert!(hud.to_string().starts_with("n: 10\nvolume: "));
}

#[test]
fn body_mut_changes_reach_the_next_frame() {
    let mut sim = sim();
    sim.body_mut().set_floor_y(0.0).unwrap();
    sim.frame(0.0);
    assert!(sim.body().vertex_positions().iter().all(|p| p.y <= 0.0));
}
