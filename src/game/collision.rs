//! Collision System
//!
//! Axis-separated resolution of the player hitbox against static tile
//! colliders. The player moves along x and is pushed out, then along y and is
//! pushed out. Colliders are visited in their stored (row-major) order and
//! every overlapping one is resolved; when several overlap, the last one
//! visited decides the final edge. There is no sorting by penetration depth.

use crate::world::Rect;
use super::player::Player;

/// Result of one physics step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionResult {
    /// Standing on a collider
    pub grounded: bool,
    /// Horizontal movement was blocked
    pub hit_wall: bool,
    /// Upward movement was blocked
    pub hit_ceiling: bool,
}

/// Move `hitbox` by `velocity_x` and push it out of every overlapping collider.
/// Returns true if any collider blocked the move.
pub fn collide_horizontal(hitbox: &mut Rect, velocity_x: f32, colliders: &[Rect]) -> bool {
    hitbox.x += velocity_x;
    let mut hit = false;
    for col in colliders {
        if !hitbox.intersects(col) {
            continue;
        }
        if velocity_x > 0.0 {
            hitbox.set_right(col.left());
            hit = true;
        } else if velocity_x < 0.0 {
            hitbox.x = col.right();
            hit = true;
        }
    }
    hit
}

/// Move `hitbox` by `velocity_y` and push it out of overlapping colliders.
/// Landing or bumping a ceiling zeroes `velocity_y`; after that, later
/// overlaps in the same pass are left alone.
pub fn collide_vertical(hitbox: &mut Rect, velocity_y: &mut f32, colliders: &[Rect]) -> CollisionResult {
    hitbox.y += *velocity_y;
    let mut result = CollisionResult::default();
    for col in colliders {
        if !hitbox.intersects(col) {
            continue;
        }
        if *velocity_y > 0.0 {
            hitbox.set_bottom(col.top());
            *velocity_y = 0.0;
            result.grounded = true;
        } else if *velocity_y < 0.0 {
            hitbox.y = col.bottom();
            *velocity_y = 0.0;
            result.hit_ceiling = true;
        }
    }
    result
}

/// One physics step for the player: horizontal move, gravity, vertical move.
/// Gravity has no terminal velocity.
pub fn move_and_collide(player: &mut Player, colliders: &[Rect], gravity: f32) -> CollisionResult {
    let hit_wall = collide_horizontal(&mut player.hitbox, player.velocity.x, colliders);

    player.velocity.y += gravity;
    let mut result = collide_vertical(&mut player.hitbox, &mut player.velocity.y, colliders);
    result.hit_wall = hit_wall;

    if result.grounded && !player.grounded {
        log::trace!("landed at ({:.1}, {:.1})", player.hitbox.x, player.hitbox.bottom());
    }
    if result.hit_wall {
        log::trace!("blocked at x {:.1}", player.hitbox.x);
    }
    if result.hit_ceiling {
        log::trace!("head bump at y {:.1}", player.hitbox.y);
    }
    player.grounded = result.grounded;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerConfig;
    use crate::game::player::HitboxLayout;

    const TILE: f32 = 144.0;

    /// A row of floor tiles at y = 576 from x = 0 to 10 tiles
    fn floor() -> Vec<Rect> {
        (0..10).map(|i| Rect::square(i as f32 * TILE, 576.0, TILE)).collect()
    }

    fn player_at(x: f32, y: f32) -> Player {
        Player::spawn(x, y, TILE, HitboxLayout::from_config(&PlayerConfig::default()))
    }

    fn standing_player(colliders: &[Rect]) -> Player {
        let mut player = player_at(300.0, 100.0);
        // Fall until landed
        for _ in 0..500 {
            move_and_collide(&mut player, colliders, 0.1);
            if player.grounded {
                break;
            }
        }
        assert!(player.grounded);
        player
    }

    #[test]
    fn test_lands_on_floor() {
        let colliders = floor();
        let player = standing_player(&colliders);
        assert_eq!(player.hitbox.bottom(), 576.0);
        assert_eq!(player.velocity.y, 0.0);
    }

    #[test]
    fn test_idle_on_flat_ground_is_stable() {
        let colliders = floor();
        let mut player = standing_player(&colliders);
        let x = player.hitbox.x;
        for _ in 0..120 {
            let result = move_and_collide(&mut player, &colliders, 0.1);
            assert!(result.grounded);
            assert!(!result.hit_wall);
            assert_eq!(player.velocity.y, 0.0);
            assert_eq!(player.hitbox.x, x);
            assert_eq!(player.hitbox.bottom(), 576.0);
        }
    }

    #[test]
    fn test_walking_right_stops_flush_at_wall() {
        let mut colliders = floor();
        let wall = Rect::square(6.0 * TILE, 576.0 - TILE, TILE);
        colliders.push(wall);
        let mut player = standing_player(&colliders);
        player.velocity.x = 5.0;

        let mut previous_right = player.hitbox.right();
        loop {
            player.velocity.x = 5.0;
            let result = move_and_collide(&mut player, &colliders, 0.1);
            assert!(player.hitbox.right() <= wall.left());
            if result.hit_wall {
                // The first overlapping frame clamps exactly to the wall
                assert_eq!(player.hitbox.right(), wall.left());
                assert!(previous_right + 5.0 > wall.left());
                break;
            }
            assert_eq!(player.hitbox.right(), previous_right + 5.0);
            previous_right = player.hitbox.right();
        }

        // Pushing into the wall keeps it flush
        for _ in 0..10 {
            player.velocity.x = 5.0;
            move_and_collide(&mut player, &colliders, 0.1);
            assert_eq!(player.hitbox.right(), wall.left());
        }
    }

    #[test]
    fn test_walking_left_stops_at_wall_right_edge() {
        let wall = Rect::square(0.0, 0.0, 100.0);
        let mut hitbox = Rect::new(102.0, 10.0, 20.0, 20.0);
        assert!(collide_horizontal(&mut hitbox, -5.0, &[wall]));
        assert_eq!(hitbox.x, 100.0);
    }

    #[test]
    fn test_head_bump_zeroes_velocity() {
        let ceiling = Rect::square(0.0, 0.0, 100.0);
        let mut hitbox = Rect::new(10.0, 103.0, 20.0, 20.0);
        let mut vy = -6.0;
        let result = collide_vertical(&mut hitbox, &mut vy, &[ceiling]);
        assert!(result.hit_ceiling);
        assert!(!result.grounded);
        assert_eq!(hitbox.y, 100.0);
        assert_eq!(vy, 0.0);
    }

    #[test]
    fn test_last_overlapping_collider_wins_horizontally() {
        // Clamping against `wall` pushes the hitbox back into `post`, which
        // only gets resolved if it is visited afterwards
        let wall = Rect::new(50.0, 0.0, 10.0, 100.0);
        let post = Rect::new(25.0, 0.0, 7.0, 100.0);

        let mut hitbox = Rect::new(20.0, 10.0, 20.0, 20.0);
        collide_horizontal(&mut hitbox, 25.0, &[wall, post]);
        assert_eq!(hitbox.right(), post.left());

        let mut hitbox = Rect::new(20.0, 10.0, 20.0, 20.0);
        collide_horizontal(&mut hitbox, 25.0, &[post, wall]);
        assert_eq!(hitbox.right(), wall.left());
    }

    #[test]
    fn test_vertical_resolution_stops_after_zeroing() {
        // Both floors overlap; only the first visited is resolved
        let upper = Rect::new(0.0, 30.0, 100.0, 10.0);
        let lower = Rect::new(0.0, 35.0, 100.0, 10.0);
        let mut hitbox = Rect::new(10.0, 0.0, 20.0, 20.0);
        let mut vy = 20.0;
        let result = collide_vertical(&mut hitbox, &mut vy, &[lower, upper]);
        assert!(result.grounded);
        assert_eq!(hitbox.bottom(), 35.0);
        assert_eq!(vy, 0.0);
    }

    #[test]
    fn test_no_tunnelling_when_falling() {
        let colliders = floor();
        let mut player = player_at(300.0, 100.0);
        for _ in 0..2000 {
            move_and_collide(&mut player, &colliders, 0.1);
            assert!(colliders.iter().all(|c| !player.hitbox.intersects(c)));
        }
        assert!(player.grounded);
    }
}
