//! Per-frame state machine for the wandering sprite.
//!
//! The sprite alternates between two modes. While walking it flips its walk
//! frame, picks a random facing every second, steers away from the viewport
//! edges and moves at a constant speed. Every five seconds it stops and types
//! out the next cheer one character at a time, holds the full message, then
//! walks on.

use cheer_engine::{Facing, Rng, Viewport};
use glam::Vec2;
use thiserror::Error;

use crate::messages;

/// Rendered width and height of the sprite in pixels.
pub const SPRITE_SIZE: f32 = 64.0;
/// Walking speed in pixels per millisecond.
pub const WALK_SPEED: f32 = 0.05;
/// Walk frame toggles after this much walking time.
pub const WALK_FRAME_MS: f32 = 200.0;
/// A new random facing is picked after this much walking time.
pub const FACING_CHANGE_MS: f32 = 1000.0;
/// Idle time before the next message appears.
pub const MESSAGE_INTERVAL_MS: f32 = 5000.0;
/// Typewriter delay per character.
pub const REVEAL_CHAR_MS: f32 = 100.0;
/// How long a fully typed message stays up.
pub const MESSAGE_HOLD_MS: f32 = 2000.0;
/// Extra space kept free at the bottom of the viewport for the message box.
pub const BOTTOM_MARGIN: f32 = 64.0;
/// Number of dex entries with overworld images.
pub const DEX_COUNT: u32 = 494;
/// Plusle.
pub const PLUSLE_DEX: u32 = 311;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnimatorError {
    #[error("the message list must contain at least one message")]
    NoMessages,
}

/// The single wandering sprite.
#[derive(Debug, Clone)]
pub struct SpriteAnimator {
    /// Centre position in viewport pixels.
    pub pos: Vec2,
    pub size: Vec2,
    /// Walking facing. See `displayed_facing` for the one that is drawn.
    pub facing: Facing,
    /// Dex number of the image set.
    pub dex: u32,
    walk_toggle: bool,
    message_active: bool,
    message_index: usize,
    message_chars: usize,
    walk_timer: f32,
    facing_timer: f32,
    message_timer: f32,
    messages: Vec<String>,
}

impl SpriteAnimator {
    /// Plusle at the origin, facing down, with the default cheers.
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::splat(SPRITE_SIZE),
            facing: Facing::Down,
            dex: PLUSLE_DEX,
            walk_toggle: false,
            message_active: false,
            message_index: 0,
            message_chars: 0,
            walk_timer: 0.0,
            facing_timer: 0.0,
            message_timer: 0.0,
            messages: messages::cheers(),
        }
    }

    /// Same as `new` but with a custom, non-empty message list.
    pub fn with_messages<S: Into<String>>(messages: Vec<S>) -> Result<Self, AnimatorError> {
        if messages.is_empty() {
            return Err(AnimatorError::NoMessages);
        }
        Ok(Self {
            messages: messages.into_iter().map(Into::into).collect(),
            ..Self::new()
        })
    }

    /// Advance the sprite by `dt_ms` milliseconds.
    pub fn on_frame(&mut self, dt_ms: f32, viewport: Viewport, rng: &mut Rng) {
        self.message_timer += dt_ms;
        let len = self.message_len();
        if !self.message_active && self.message_timer > MESSAGE_INTERVAL_MS {
            self.message_active = true;
            self.message_timer = 0.0;
            log::debug!("showing message {}", self.message_index);
        } else if self.message_active && self.message_chars < len && self.message_timer > REVEAL_CHAR_MS {
            self.message_chars += 1;
            self.message_timer = 0.0;
        } else if self.message_active && self.message_chars == len && self.message_timer > MESSAGE_HOLD_MS {
            self.message_active = false;
            self.message_chars = 0;
            self.message_timer = 0.0;
            self.message_index = (self.message_index + 1) % self.messages.len();
            log::debug!("message done, next is {}", self.message_index);
        }

        if self.message_active {
            return;
        }

        self.walk_timer += dt_ms;
        if self.walk_timer > WALK_FRAME_MS {
            self.walk_toggle = !self.walk_toggle;
            self.walk_timer = 0.0;
        }

        self.facing_timer += dt_ms;
        if self.facing_timer > FACING_CHANGE_MS {
            if let Some(facing) = rng.pick(&Facing::ALL) {
                self.facing = facing;
            }
            self.facing_timer = 0.0;
        }

        if let Some(facing) = self.edge_facing(viewport) {
            self.facing = facing;
        }

        let step = dt_ms * WALK_SPEED;
        match self.facing {
            Facing::Up => self.pos.y -= step,
            Facing::Down => self.pos.y += step,
            Facing::Left => self.pos.x -= step,
            Facing::Right => self.pos.x += step,
        }
    }

    /// Facing that turns the sprite back from a viewport edge, top first.
    fn edge_facing(&self, viewport: Viewport) -> Option<Facing> {
        if self.pos.y < self.size.y {
            Some(Facing::Down)
        } else if self.pos.y > viewport.height - self.size.y - BOTTOM_MARGIN {
            Some(Facing::Up)
        } else if self.pos.x < self.size.x {
            Some(Facing::Right)
        } else if self.pos.x > viewport.width - self.size.x {
            Some(Facing::Left)
        } else {
            None
        }
    }

    /// Show the current message now, as when the sprite is tapped.
    pub fn activate_message(&mut self) {
        if !self.message_active {
            self.message_active = true;
            log::debug!("message {} shown on tap", self.message_index);
        }
    }

    /// Move to the centre of a freshly measured viewport and become Plusle.
    pub fn recenter(&mut self, viewport: Viewport) {
        self.pos = viewport.center();
        self.dex = PLUSLE_DEX;
    }

    /// Pick a random image set.
    pub fn roll_dex(&mut self, rng: &mut Rng) {
        self.dex = rng.next_int(DEX_COUNT);
    }

    /// Facing of the drawn image: the sprite looks at the viewer while talking.
    pub fn displayed_facing(&self) -> Facing {
        if self.message_active {
            Facing::Down
        } else {
            self.facing
        }
    }

    pub fn walk_toggle(&self) -> bool {
        self.walk_toggle
    }

    pub fn message_active(&self) -> bool {
        self.message_active
    }

    pub fn message_index(&self) -> usize {
        self.message_index
    }

    /// Characters of the current message revealed so far.
    pub fn message_chars(&self) -> usize {
        self.message_chars
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// The current message in full.
    pub fn message(&self) -> &str {
        &self.messages[self.message_index]
    }

    fn message_len(&self) -> usize {
        self.message().chars().count()
    }
}

impl Default for SpriteAnimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport { width: 800.0, height: 600.0 };

    fn centred() -> SpriteAnimator {
        let mut a = SpriteAnimator::new();
        a.recenter(VIEW);
        a
    }

    #[test]
    fn empty_message_list_is_rejected() {
        let err = SpriteAnimator::with_messages(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, AnimatorError::NoMessages);
    }

    #[test]
    fn message_starts_after_interval() {
        let mut a = centred();
        let mut rng = Rng::new(1);
        a.on_frame(5001.0, VIEW, &mut rng);
        assert!(a.message_active());
        assert_eq!(a.message_chars(), 0);
    }

    #[test]
    fn message_waits_for_full_interval() {
        let mut a = centred();
        let mut rng = Rng::new(1);
        a.on_frame(5000.0, VIEW, &mut rng);
        assert!(!a.message_active());
        a.on_frame(1.0, VIEW, &mut rng);
        assert!(a.message_active());
    }

    #[test]
    fn typewriter_stops_at_message_length() {
        let mut a = SpriteAnimator::with_messages(vec!["Hi"]).unwrap();
        a.recenter(VIEW);
        a.activate_message();
        let mut rng = Rng::new(1);
        let mut seen = Vec::new();
        for _ in 0..6 {
            a.on_frame(101.0, VIEW, &mut rng);
            seen.push(a.message_chars());
        }
        assert_eq!(seen, vec![1, 2, 2, 2, 2, 2]);
        assert!(a.message_active());
    }

    #[test]
    fn hold_then_advance_index() {
        let mut a = SpriteAnimator::with_messages(vec!["Hi", "Yo"]).unwrap();
        a.recenter(VIEW);
        let mut rng = Rng::new(1);
        a.on_frame(5001.0, VIEW, &mut rng);
        a.on_frame(101.0, VIEW, &mut rng);
        a.on_frame(101.0, VIEW, &mut rng);
        assert_eq!(a.message_chars(), 2);
        a.on_frame(2000.0, VIEW, &mut rng);
        assert!(a.message_active());
        a.on_frame(1.0, VIEW, &mut rng);
        assert!(!a.message_active());
        assert_eq!(a.message_chars(), 0);
        assert_eq!(a.message_index(), 1);
    }

    #[test]
    fn index_wraps_after_last_message() {
        let mut a = SpriteAnimator::with_messages(vec!["A"]).unwrap();
        a.recenter(VIEW);
        let mut rng = Rng::new(1);
        for _ in 0..3 {
            a.on_frame(5001.0, VIEW, &mut rng);
            a.on_frame(101.0, VIEW, &mut rng);
            a.on_frame(2001.0, VIEW, &mut rng);
            assert!(!a.message_active());
            assert_eq!(a.message_index(), 0);
        }
    }

    #[test]
    fn no_movement_while_message_shown() {
        let mut a = centred();
        let mut rng = Rng::new(5);
        a.activate_message();
        let start = a.pos;
        for _ in 0..20 {
            a.on_frame(150.0, VIEW, &mut rng);
            assert_eq!(a.pos, start);
        }
    }

    #[test]
    fn tap_does_not_reset_timer() {
        let mut a = centred();
        let mut rng = Rng::new(5);
        a.on_frame(150.0, VIEW, &mut rng);
        a.activate_message();
        a.activate_message();
        assert!(a.message_active());
        assert_eq!(a.message_chars(), 0);
        // 150 already on the timer, so the first character shows immediately.
        a.on_frame(1.0, VIEW, &mut rng);
        assert_eq!(a.message_chars(), 1);
    }

    #[test]
    fn top_edge_forces_down() {
        let mut a = centred();
        a.pos = Vec2::new(400.0, 0.0);
        a.facing = Facing::Down;
        let mut rng = Rng::new(11);
        // Long enough to trigger a random pick, which the edge rule overrides.
        a.on_frame(1001.0, VIEW, &mut rng);
        assert_eq!(a.facing, Facing::Down);
        assert!((a.pos.y - 1001.0 * WALK_SPEED).abs() < 1e-3);
        assert_eq!(a.pos.x, 400.0);
    }

    #[test]
    fn edges_steer_back_inside() {
        let mut rng = Rng::new(2);

        let mut a = centred();
        a.pos = Vec2::new(400.0, 500.0); // below 600 - 64 - 64
        a.on_frame(16.0, VIEW, &mut rng);
        assert_eq!(a.facing, Facing::Up);

        let mut a = centred();
        a.pos = Vec2::new(10.0, 300.0);
        a.on_frame(16.0, VIEW, &mut rng);
        assert_eq!(a.facing, Facing::Right);

        let mut a = centred();
        a.pos = Vec2::new(790.0, 300.0);
        a.on_frame(16.0, VIEW, &mut rng);
        assert_eq!(a.facing, Facing::Left);

        // Top wins over left when both apply.
        let mut a = centred();
        a.pos = Vec2::new(10.0, 10.0);
        a.on_frame(16.0, VIEW, &mut rng);
        assert_eq!(a.facing, Facing::Down);
    }

    #[test]
    fn moves_at_constant_speed() {
        let mut a = centred();
        a.facing = Facing::Left;
        let mut rng = Rng::new(3);
        a.on_frame(100.0, VIEW, &mut rng);
        assert_eq!(a.pos, Vec2::new(395.0, 300.0));
    }

    #[test]
    fn walk_toggle_flips_once_per_interval() {
        let mut rng = Rng::new(4);

        let mut a = centred();
        for _ in 0..4 {
            a.on_frame(51.0, VIEW, &mut rng);
        }
        assert!(a.walk_toggle());

        let mut b = centred();
        b.on_frame(204.0, VIEW, &mut rng);
        assert!(b.walk_toggle());

        // The threshold is strict: exactly 200ms is not enough.
        let mut c = centred();
        for _ in 0..4 {
            c.on_frame(50.0, VIEW, &mut rng);
        }
        assert!(!c.walk_toggle());
        c.on_frame(50.0, VIEW, &mut rng);
        assert!(c.walk_toggle());
    }

    #[test]
    fn displayed_facing_is_down_while_talking() {
        let mut a = centred();
        a.facing = Facing::Left;
        assert_eq!(a.displayed_facing(), Facing::Left);
        a.activate_message();
        assert_eq!(a.displayed_facing(), Facing::Down);
        assert_eq!(a.facing, Facing::Left);
    }

    #[test]
    fn recenter_sets_plusle() {
        let mut a = SpriteAnimator::new();
        a.roll_dex(&mut Rng::new(8));
        assert!(a.dex < DEX_COUNT);
        a.recenter(Viewport::new(1000.0, 500.0));
        assert_eq!(a.pos, Vec2::new(500.0, 250.0));
        assert_eq!(a.dex, PLUSLE_DEX);
    }

    #[test]
    fn invariants_hold_for_random_deltas() {
        let mut deltas = Rng::new(2024);
        let mut rng = Rng::new(7);
        let mut a = centred();
        let count = a.message_count();
        let mut prev_index = a.message_index();

        for _ in 0..20_000 {
            let was_active = a.message_active();
            let before = a.pos;
            let dt = deltas.next_int(400) as f32;

            a.on_frame(dt, VIEW, &mut rng);

            assert!(a.message_chars() <= a.message().chars().count());
            assert!(a.message_index() < count);
            if was_active && a.message_active() {
                assert_eq!(a.pos, before);
            }
            if a.message_index() != prev_index {
                assert_eq!(a.message_index(), (prev_index + 1) % count);
                prev_index = a.message_index();
            }
        }
    }

    #[test]
    fn stays_roughly_inside_viewport() {
        let mut rng = Rng::new(99);
        let mut a = centred();
        for _ in 0..50_000 {
            a.on_frame(16.0, VIEW, &mut rng);
            // Steering reacts within one frame, so overshoot is at most one step.
            assert!(a.pos.x > SPRITE_SIZE - 1.0 && a.pos.x < VIEW.width - SPRITE_SIZE + 1.0);
            assert!(a.pos.y > SPRITE_SIZE - 1.0);
            assert!(a.pos.y < VIEW.height - SPRITE_SIZE - BOTTOM_MARGIN + 1.0);
        }
    }
}
