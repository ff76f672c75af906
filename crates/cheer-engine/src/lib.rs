pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{EntityId, Viewport};
pub use components::entity::Entity;
pub use components::sprite::{SpriteComponent, Facing};
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use renderer::snapshot::{FrameSnapshot, SpriteDraw};
pub use input::queue::{InputEvent, InputQueue};
pub use systems::render::build_snapshot;
pub use systems::rng::Rng;
pub use systems::text::{TextStyle, MessagePanel, layout_message};
