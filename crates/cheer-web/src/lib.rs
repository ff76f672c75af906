pub mod runner;

pub use runner::GameRunner;
pub use cheer_engine;

/// Seed for the engine's random source, drawn from the browser's `Math.random()`.
/// Only meaningful on wasm32; native callers should pass an explicit seed.
pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

/// Generate the `#[wasm_bindgen]` surface for a game.
///
/// Produces an exported `GameHandle` struct owning a `GameRunner` and a
/// `game_init(seed)` function that sets up logging, builds and initializes
/// the runner, and hands ownership of it to the host page. The host keeps
/// the handle alive and drives it from its `requestAnimationFrame` loop.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// cheer_web::export_game!(MyGame, "my-game");
/// ```
///
/// The calling crate must depend on `wasm-bindgen`, `log`, `console_log` and
/// `console_error_panic_hook`, and `$game_type` must provide `new()`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        /// Owned handle to the running game, returned by `game_init`.
        #[wasm_bindgen]
        pub struct GameHandle {
            runner: $crate::GameRunner<$game_type>,
        }

        #[wasm_bindgen]
        impl GameHandle {
            /// Advance one animation frame. `timestamp_ms` is the value passed to
            /// the `requestAnimationFrame` callback.
            pub fn frame(&mut self, timestamp_ms: f64) {
                self.runner.frame(timestamp_ms);
            }

            /// Report the measured size of the game's container.
            pub fn resize(&mut self, width: f32, height: f32) {
                self.runner.resize(width, height);
            }

            /// Report a click or touch at viewport coordinates.
            pub fn pointer_down(&mut self, x: f32, y: f32) {
                self.runner
                    .push_input($crate::cheer_engine::InputEvent::PointerDown { x, y });
            }

            // ---- Data accessors ----

            pub fn image_url(&self) -> String {
                self.runner.image_url()
            }

            pub fn message_active(&self) -> bool {
                self.runner.message_active()
            }

            pub fn snapshot_json(&self) -> String {
                self.runner.snapshot_json()
            }

            pub fn preload_urls_json(&self) -> String {
                self.runner.preload_urls_json()
            }
        }

        /// Create and initialize the game. Call once; keep the returned handle.
        /// Without a seed, one is drawn from `Math.random()`.
        #[wasm_bindgen]
        pub fn game_init(seed: Option<u32>) -> GameHandle {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let seed = seed.map(u64::from).unwrap_or_else($crate::random_seed);
            let mut runner = $crate::GameRunner::with_seed(<$game_type>::new(), seed);
            runner.init();

            log::info!("{}: initialized (seed {})", $game_name, seed);
            GameHandle { runner }
        }
    };
}
