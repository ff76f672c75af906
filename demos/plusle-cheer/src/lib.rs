use wasm_bindgen::prelude::*;

pub mod animator;
pub mod game;
pub mod messages;

pub use animator::{AnimatorError, SpriteAnimator};
pub use game::PlusleCheer;

cheer_web::export_game!(PlusleCheer, "plusle-cheer");
