use cheer_engine::*;
use glam::Vec2;

use crate::animator::SpriteAnimator;

const SPRITE_TAG: &str = "plusle";

/// A single cheerful sprite wandering the page.
pub struct PlusleCheer {
    animator: SpriteAnimator,
    sprite_id: Option<EntityId>,
    text_style: TextStyle,
}

impl PlusleCheer {
    pub fn new() -> Self {
        Self {
            animator: SpriteAnimator::new(),
            sprite_id: None,
            text_style: TextStyle::default(),
        }
    }

    pub fn animator(&self) -> &SpriteAnimator {
        &self.animator
    }

    /// Copy the animator state onto the scene entity.
    fn sync_entity(&self, ctx: &mut EngineContext) {
        let Some(entity) = self.sprite_id.and_then(|id| ctx.scene.get_mut(id)) else {
            return;
        };
        entity.pos = self.animator.pos;
        entity.size = self.animator.size;
        if let Some(sprite) = entity.sprite.as_mut() {
            sprite.dex = self.animator.dex;
            sprite.facing = self.animator.displayed_facing();
            sprite.frame2 = self.animator.walk_toggle();
        }
    }
}

impl Default for PlusleCheer {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for PlusleCheer {
    fn init(&mut self, ctx: &mut EngineContext) {
        self.animator.roll_dex(&mut ctx.rng);
        self.animator.pos = ctx.viewport.center();

        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(SPRITE_TAG)
                .with_pos(self.animator.pos)
                .with_size(self.animator.size)
                .with_sprite(SpriteComponent::new(self.animator.dex)),
        );
        self.sprite_id = Some(id);
        self.sync_entity(ctx);
        log::info!("PlusleCheer: spawned dex {} at centre", self.animator.dex);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt_ms: f32) {
        for event in input.iter() {
            match *event {
                InputEvent::Resize { width, height } => {
                    self.animator.recenter(Viewport::new(width, height));
                    self.sync_entity(ctx);
                }
                InputEvent::PointerDown { x, y } => {
                    let hit = ctx.scene.hit_test(Vec2::new(x, y));
                    if hit.is_some() && hit == self.sprite_id {
                        self.animator.activate_message();
                    }
                }
            }
        }

        self.animator.on_frame(dt_ms, ctx.viewport, &mut ctx.rng);
        self.sync_entity(ctx);
    }

    fn render(&self, ctx: &mut RenderContext) {
        if !self.animator.message_active() {
            return;
        }
        ctx.snapshot.message = Some(layout_message(
            self.animator.message(),
            self.animator.message_chars(),
            ctx.viewport.width,
            &self.text_style,
        ));
    }
}
