use cheer_engine::{
    Game, GameConfig, EngineContext, RenderContext,
    InputEvent, InputQueue, FrameSnapshot, FrameClock, Viewport,
};
use cheer_engine::systems::render::build_snapshot;

/// Generic game runner that wires up the engine loop.
///
/// wasm-bindgen cannot export generic structs, so `export_game!` wraps a
/// concrete `GameRunner<MyGame>` in a generated handle type.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    clock: FrameClock,
    snapshot: FrameSnapshot,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let seed = game.config().seed;
        Self::with_seed(game, seed)
    }

    /// Like `new`, but overrides the configured RNG seed.
    pub fn with_seed(game: G, seed: u64) -> Self {
        let mut config = game.config();
        config.seed = seed;
        Self {
            game,
            ctx: EngineContext::with_config(&config),
            input: InputQueue::new(),
            clock: FrameClock::new(),
            snapshot: FrameSnapshot::new(),
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        if self.initialized {
            log::warn!("GameRunner::init called twice, ignoring");
            return;
        }
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.rebuild_snapshot();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Record a new viewport size. Takes effect immediately for the
    /// bounds and is also queued so the game can react to it.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.ctx.viewport = Viewport::new(width, height);
        self.input.push(InputEvent::Resize { width, height });
    }

    /// Run one animation frame: update the game, then rebuild the snapshot.
    pub fn frame(&mut self, timestamp_ms: f64) {
        if !self.initialized {
            log::warn!("GameRunner::frame before init, ignoring");
            return;
        }

        let dt_ms = self.clock.advance(timestamp_ms);
        self.game.update(&mut self.ctx, &self.input, dt_ms);

        // Drain input after update
        self.input.drain();

        self.rebuild_snapshot();
    }

    fn rebuild_snapshot(&mut self) {
        build_snapshot(self.ctx.scene.iter(), &mut self.snapshot);

        let mut render_ctx = RenderContext {
            snapshot: &mut self.snapshot,
            viewport: self.ctx.viewport,
        };
        self.game.render(&mut render_ctx);
    }

    // ---- Read-only accessors ----

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn snapshot(&self) -> &FrameSnapshot {
        &self.snapshot
    }

    /// Snapshot as JSON. Serialization failures are logged and reported as `{}`.
    pub fn snapshot_json(&self) -> String {
        match self.snapshot.to_json() {
            Ok(json) => json,
            Err(err) => {
                log::error!("failed to serialize frame snapshot: {}", err);
                "{}".to_string()
            }
        }
    }

    /// Preload URLs as a JSON array.
    pub fn preload_urls_json(&self) -> String {
        match serde_json::to_string(&self.snapshot.preload) {
            Ok(json) => json,
            Err(err) => {
                log::error!("failed to serialize preload list: {}", err);
                "[]".to_string()
            }
        }
    }

    /// Image of the first drawn sprite, or an empty string if nothing is drawn.
    pub fn image_url(&self) -> String {
        self.snapshot
            .sprites
            .first()
            .map(|s| s.url.clone())
            .unwrap_or_default()
    }

    pub fn message_active(&self) -> bool {
        self.snapshot.message.is_some()
    }

    pub fn viewport(&self) -> Viewport {
        self.ctx.viewport
    }

    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }
}
