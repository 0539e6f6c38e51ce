//! Characters: shared kinematics plus a role (hero or patrolling enemy)
//!
//! Every character owns a position/velocity body, a 50x50 hit box centered on
//! its position, and a looping sprite animation. The role decides how the
//! velocity is chosen each tick and which constraints apply afterwards.

use crate::config::GameConfig;
use crate::input::Controls;
use crate::ui::Rect;

/// Width and height of every character's hit box
pub const CHARACTER_SIZE: f32 = 50.0;

/// Hero animation frames, in playback order
pub const HERO_FRAMES: [&str; 4] = ["hero_l1", "hero_l2", "hero_r1", "hero_r2"];

/// Animation frames for enemy sprite variant `variant` (1-based)
pub fn enemy_frames(variant: u32) -> Vec<String> {
    vec![format!("enemy{}_1", variant), format!("enemy{}_2", variant)]
}

/// Cycles through sprite ids, one step every `period` ticks
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frames: Vec<String>,
    index: usize,
    counter: u32,
    period: u32,
}

impl Animation {
    /// `frames` must not be empty
    pub fn new(frames: Vec<String>, period: u32) -> Self {
        debug_assert!(!frames.is_empty(), "animation needs at least one frame");
        Self {
            frames,
            index: 0,
            counter: 0,
            period: period.max(1),
        }
    }

    pub fn tick(&mut self) {
        self.counter += 1;
        if self.counter >= self.period {
            self.index = (self.index + 1) % self.frames.len();
            self.counter = 0;
        }
    }

    /// Sprite id of the current frame
    pub fn current(&self) -> &str {
        &self.frames[self.index]
    }
}

/// Position, velocity and the hit box derived from them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub rect: Rect,
}

impl Body {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            rect: Rect::centered(x, y, CHARACTER_SIZE, CHARACTER_SIZE),
        }
    }

    fn integrate(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    fn sync_rect(&mut self) {
        self.rect = Rect::centered(self.x, self.y, CHARACTER_SIZE, CHARACTER_SIZE);
    }
}

/// Player-only state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroState {
    pub on_ground: bool,
}

/// Enemy-only state: back-and-forth patrol between two bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Patrol {
    /// +1 = moving right, -1 = moving left
    pub direction: f32,
    pub left_bound: f32,
    pub right_bound: f32,
    /// Set once the hero has passed this enemy (counted exactly once)
    pub jumped: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Role {
    Hero(HeroState),
    Enemy(Patrol),
}

/// Things a character update wants the game to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterEvent {
    Jumped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub body: Body,
    pub anim: Animation,
    pub role: Role,
}

impl Character {
    /// A hero standing in mid-air; the first tick settles it onto the ground
    pub fn hero(x: f32, y: f32, animation_period: u32) -> Self {
        let frames = HERO_FRAMES.iter().map(|f| f.to_string()).collect();
        Self {
            body: Body::at(x, y),
            anim: Animation::new(frames, animation_period),
            role: Role::Hero(HeroState { on_ground: false }),
        }
    }

    /// An enemy patrolling `x - half_width ..= x + half_width`
    pub fn enemy(x: f32, y: f32, half_width: f32, variant: u32, animation_period: u32) -> Self {
        let half_width = half_width.max(0.0);
        Self {
            body: Body::at(x, y),
            anim: Animation::new(enemy_frames(variant), animation_period),
            role: Role::Enemy(Patrol {
                direction: 1.0,
                left_bound: x - half_width,
                right_bound: x + half_width,
                jumped: false,
            }),
        }
    }

    pub fn rect(&self) -> Rect {
        self.body.rect
    }

    pub fn sprite(&self) -> &str {
        self.anim.current()
    }

    #[cfg(test)]
    pub fn patrol(&self) -> Option<&Patrol> {
        match &self.role {
            Role::Enemy(p) => Some(p),
            Role::Hero(_) => None,
        }
    }

    pub fn patrol_mut(&mut self) -> Option<&mut Patrol> {
        match &mut self.role {
            Role::Enemy(p) => Some(p),
            Role::Hero(_) => None,
        }
    }

    #[cfg(test)]
    pub fn on_ground(&self) -> bool {
        matches!(self.role, Role::Hero(HeroState { on_ground: true }))
    }

    /// Advance one tick. `controls` only matter for the hero.
    pub fn update(&mut self, controls: Controls, config: &GameConfig) -> Option<CharacterEvent> {
        let body = &mut self.body;
        let mut event = None;

        match &mut self.role {
            Role::Hero(hero) => {
                let tuning = &config.hero;
                body.vx = controls.horizontal() * tuning.speed;

                if controls.up && hero.on_ground {
                    body.vy = tuning.jump_impulse;
                    hero.on_ground = false;
                    event = Some(CharacterEvent::Jumped);
                }

                // Gravity applies every tick, even on the ground
                body.vy += tuning.gravity;
                body.integrate();

                if body.y >= config.ground_level {
                    body.y = config.ground_level;
                    body.vy = 0.0;
                    hero.on_ground = true;
                }
            }
            Role::Enemy(patrol) => {
                body.vx = config.enemy.speed * patrol.direction;
                body.integrate();

                if body.x < patrol.left_bound {
                    body.x = patrol.left_bound;
                    patrol.direction = 1.0;
                } else if body.x > patrol.right_bound {
                    body.x = patrol.right_bound;
                    patrol.direction = -1.0;
                }
            }
        }

        body.sync_rect();
        self.anim.tick();
        event
    }
}
