use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::sprite::SpriteComponent;

/// Fat Entity: a single struct with optional components.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Centre position in viewport pixels.
    pub pos: Vec2,
    /// Rendered width and height in pixels.
    pub size: Vec2,
    /// Sprite component (optional; entities without sprites are invisible).
    pub sprite: Option<SpriteComponent>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            size: Vec2::ONE,
            sprite: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }

    /// Top-left corner of the entity's box.
    pub fn top_left(&self) -> Vec2 {
        self.pos - self.size / 2.0
    }

    /// Whether a point lies inside the entity's box (edges inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        let min = self.top_left();
        let max = min + self.size;
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}
