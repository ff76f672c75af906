use crate::api::types::{EntityId, Viewport};
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::snapshot::FrameSnapshot;
use crate::systems::rng::Rng;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Viewport assumed until the host reports its first measurement.
    pub viewport: Viewport,
    /// Seed for the engine's random source (default: 42).
    pub seed: u64,
    /// Initial entity capacity of the scene (default: 16).
    pub max_entities: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            seed: 42,
            max_entities: 16,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The frame tick. `dt_ms` is the time since the previous animation frame
    /// in milliseconds and is never negative.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt_ms: f32);

    /// Optional read-only pass that adds game-specific data to the frame snapshot.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub rng: Rng,
    pub viewport: Viewport,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// Create a context seeded and sized from the game's configuration.
    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::with_capacity(config.max_entities),
            rng: Rng::new(config.seed),
            viewport: config.viewport,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for the game's snapshot pass.
pub struct RenderContext<'a> {
    pub snapshot: &'a mut FrameSnapshot,
    pub viewport: Viewport,
}
