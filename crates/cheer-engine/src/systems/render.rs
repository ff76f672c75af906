use crate::components::entity::Entity;
use crate::renderer::snapshot::{FrameSnapshot, SpriteDraw};

/// Build the sprite part of the snapshot from a set of entities.
/// Inactive entities and entities without a sprite are skipped. Preload
/// URLs are collected once per distinct image set.
pub fn build_snapshot<'a>(entities: impl Iterator<Item = &'a Entity>, snapshot: &mut FrameSnapshot) {
    snapshot.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }

        let sprite = match &entity.sprite {
            Some(s) => s,
            None => continue,
        };

        let top_left = entity.top_left();
        snapshot.push(SpriteDraw {
            url: sprite.image_url(),
            left: top_left.x,
            top: top_left.y,
            width: entity.size.x,
            height: entity.size.y,
        });

        for url in sprite.preload_urls() {
            if !snapshot.preload.contains(&url) {
                snapshot.preload.push(url);
            }
        }
    }
}
