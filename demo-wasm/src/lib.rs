use squish::{BodyConfig, Command, Simulation, Vec2};
use wasm_bindgen::prelude::*;

// ---- Blob Demo ----

#[wasm_bindgen]
pub struct BlobDemo {
    sim: Simulation<f32>,
    width: f32,
}

#[wasm_bindgen]
impl BlobDemo {
    /// A 30-vertex blob above a floor 30 px from the bottom of the canvas.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<BlobDemo, JsError> {
        let config = BodyConfig::new()
            .with_center(Vec2::new(width / 2.0, height / 2.0 - 100.0))
            .with_floor_y(height - 30.0);
        let sim = Simulation::new(&config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(BlobDemo { sim, width })
    }

    /// Advance to `now_ms` (e.g. `performance.now()`).
    pub fn update(&mut self, now_ms: f64) -> f32 {
        self.sim.frame((now_ms / 1000.0) as f32)
    }

    /// Key handling: `g` toggles gravity, arrow up/down add or remove gas.
    pub fn key(&mut self, key: &str) -> Result<(), JsError> {
        let command = match key {
            "g" | "G" => Command::ToggleGravity,
            "ArrowUp" => Command::IncreaseMoles,
            "ArrowDown" => Command::DecreaseMoles,
            _ => return Ok(()),
        };
        self.sim.handle(command).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions
    pub fn positions(&self) -> Vec<f32> {
        let pos = self.sim.body().vertex_positions();
        let mut out = Vec::with_capacity(pos.len() * 2);
        for p in &pos {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    /// Returns [x0, y0, x1, y1] of the floor line
    pub fn floor(&self) -> Vec<f32> {
        let (a, b) = self.sim.floor_segment(self.width);
        vec![a.x, a.y, b.x, b.y]
    }

    /// HUD text, one line per value.
    pub fn hud(&self) -> String {
        self.sim.hud().to_string()
    }

    pub fn volume(&self) -> f32 {
        self.sim.body().volume()
    }

    pub fn vertex_count(&self) -> usize {
        self.sim.body().vertex_count()
    }
}
