#[cfg(not(target_arch = "wasm32"))]
pub mod app;
pub mod model;
pub mod ui;

#[cfg(target_arch = "wasm32")]
use crate::model::config::AppConfig;
#[cfg(target_arch = "wasm32")]
use crate::model::engine::PopulationEngine;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Browser binding: the page owns the canvas and the `setInterval` timer
/// and calls [`Simulation::tick`] on every beat.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct Simulation {
    engine: PopulationEngine,
    grid_size: i32,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl Simulation {
    #[wasm_bindgen(constructor)]
    pub fn new(
        grid_size: i32,
        iterations: u32,
        total_count: usize,
        density: u32,
        predator_life_period: u32,
        reproductive_period: u32,
    ) -> Result<Simulation, JsValue> {
        console_error_panic_hook::set_once();

        let mut config = AppConfig::default();
        config.simulation.grid_size = grid_size;
        config.simulation.iterations = iterations;
        config.simulation.total_count = total_count;
        config.simulation.density = density;
        config.simulation.predator_life_period = predator_life_period;
        config.simulation.reproductive_period = reproductive_period;
        config
            .simulation
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let mut engine = PopulationEngine::new();
        engine
            .start(&config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Simulation { engine, grid_size })
    }

    /// Advances one tick and redraws. Returns `false` once the run is over.
    pub fn tick(&mut self, ctx: &web_sys::CanvasRenderingContext2d) -> bool {
        use crate::ui::web_renderer::CanvasSink;
        let mut sink = CanvasSink::new(ctx, self.grid_size);
        matches!(
            self.engine.advance(&mut sink),
            Some(crate::model::termination::Termination::Continue)
        )
    }

    pub fn stop(&mut self) {
        self.engine.stop();
    }

    pub fn get_stats(&self) -> js_sys::Object {
        let obj = js_sys::Object::new();
        if let Some(state) = self.engine.state() {
            let _ = js_sys::Reflect::set(
                &obj,
                &JsValue::from_str("tick"),
                &JsValue::from_f64(state.tick as f64),
            );
            let _ = js_sys::Reflect::set(
                &obj,
                &JsValue::from_str("predators"),
                &JsValue::from_f64(state.predators.len() as f64),
            );
            let _ = js_sys::Reflect::set(
                &obj,
                &JsValue::from_str("victims"),
                &JsValue::from_f64(state.victims.len() as f64),
            );
        }
        obj
    }
}
