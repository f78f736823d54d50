//! Collision classification for the platformer
//!
//! Pure queries: each function inspects rectangles and the player's motion
//! and reports what happened; `sim::tick` applies the response. The
//! vertical-approach tests compare against the player's top edge from
//! before this frame's position update.

use super::rect::Rect;
use crate::consts::{GROUND_LINE, PLAYER_SIZE};

/// Outcome of checking the player against one platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformContact {
    /// Falling onto the platform: rest on top, at the given top-edge y
    Landed { top: f32 },
    /// Rising into the platform from below: snap the top edge to its underside
    Bumped { underside: f32 },
}

/// Outcome of checking the player against one enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyContact {
    /// Falling contact from above: the enemy is defeated
    Pounce,
    /// Side or below contact: the player loses a life
    Hurt,
}

/// Ground collision: the top-edge y to clamp to when the player's bottom
/// would reach the ground line, else None
pub fn ground_contact(player: &Rect) -> Option<f32> {
    (player.y >= GROUND_LINE).then_some(GROUND_LINE)
}

/// Classify a player/platform overlap by vertical approach.
///
/// `prev_top` is the player's top edge before this frame's integration.
/// No overlap, or an overlap without a matching vertical approach (for
/// instance a purely horizontal push with `vel_y == 0`), returns None.
pub fn platform_contact(
    player: &Rect,
    prev_top: f32,
    vel_y: f32,
    platform: &Rect,
) -> Option<PlatformContact> {
    if !player.overlaps(platform) {
        return None;
    }
    if vel_y > 0.0 && prev_top < platform.y {
        Some(PlatformContact::Landed {
            top: platform.y - PLAYER_SIZE,
        })
    } else if vel_y < 0.0 && prev_top > platform.y {
        Some(PlatformContact::Bumped {
            underside: platform.bottom(),
        })
    } else {
        None
    }
}

/// Classify a player/enemy overlap: a falling approach from above is a
/// pounce, any other contact hurts. None when the rectangles don't overlap.
pub fn enemy_contact(
    player: &Rect,
    prev_top: f32,
    vel_y: f32,
    enemy: &Rect,
) -> Option<EnemyContact> {
    if !player.overlaps(enemy) {
        return None;
    }
    if vel_y > 0.0 && prev_top < enemy.y {
        Some(EnemyContact::Pounce)
    } else {
        Some(EnemyContact::Hurt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{GROUND_LINE, PLAYER_SIZE};

    fn player_at(x: f32, y: f32) -> Rect {
        Rect::new(x, y, PLAYER_SIZE, PLAYER_SIZE)
    }

    #[test]
    fn test_ground_contact_clamps_at_line() {
        // Above the line: airborne
        assert_eq!(ground_contact(&player_at(50.0, GROUND_LINE - 1.0)), None);
        // At or past the line: clamp
        assert_eq!(
            ground_contact(&player_at(50.0, GROUND_LINE)),
            Some(GROUND_LINE)
        );
        assert_eq!(
            ground_contact(&player_at(50.0, GROUND_LINE + 12.0)),
            Some(GROUND_LINE)
        );
    }

    #[test]
    fn test_platform_landing() {
        let platform = Rect::new(100.0, 450.0, 200.0, 20.0);
        // Falling, previous top above the platform top
        let player = player_at(150.0, 415.0); // bottom at 455, inside the slab
        let contact = platform_contact(&player, 405.0, 10.0, &platform);
        assert_eq!(contact, Some(PlatformContact::Landed { top: 410.0 }));
    }

    #[test]
    fn test_platform_head_bump() {
        let platform = Rect::new(100.0, 450.0, 200.0, 20.0);
        // Rising, previous top below the platform top
        let player = player_at(150.0, 465.0);
        let contact = platform_contact(&player, 480.0, -15.0, &platform);
        assert_eq!(contact, Some(PlatformContact::Bumped { underside: 470.0 }));
    }

    #[test]
    fn test_platform_no_overlap_no_contact() {
        let platform = Rect::new(100.0, 450.0, 200.0, 20.0);
        let player = player_at(150.0, 300.0);
        assert_eq!(platform_contact(&player, 290.0, 10.0, &platform), None);
    }

    #[test]
    fn test_platform_horizontal_overlap_is_ignored() {
        let platform = Rect::new(100.0, 450.0, 200.0, 20.0);
        // Overlapping but resting (vel_y == 0): no resolution
        let player = player_at(150.0, 440.0);
        assert_eq!(platform_contact(&player, 440.0, 0.0, &platform), None);
    }

    #[test]
    fn test_enemy_pounce_from_above() {
        let enemy = Rect::new(500.0, 320.0, 30.0, 30.0);
        let player = player_at(500.0, 290.0); // bottom at 330, inside the enemy
        let contact = enemy_contact(&player, 285.0, 5.0, &enemy);
        assert_eq!(contact, Some(EnemyContact::Pounce));
    }

    #[test]
    fn test_enemy_side_contact_hurts() {
        let enemy = Rect::new(200.0, 550.0, 30.0, 30.0);
        // Walking into the enemy at ground level, no vertical motion
        let player = player_at(180.0, GROUND_LINE);
        let contact = enemy_contact(&player, GROUND_LINE, 0.0, &enemy);
        assert_eq!(contact, Some(EnemyContact::Hurt));
    }

    #[test]
    fn test_enemy_rising_contact_hurts() {
        let enemy = Rect::new(200.0, 300.0, 30.0, 30.0);
        // Hitting the enemy from below while jumping
        let player = player_at(200.0, 310.0);
        let contact = enemy_contact(&player, 330.0, -12.0, &enemy);
        assert_eq!(contact, Some(EnemyContact::Hurt));
    }

    #[test]
    fn test_enemy_no_overlap_no_contact() {
        let enemy = Rect::new(200.0, 550.0, 30.0, 30.0);
        let player = player_at(50.0, GROUND_LINE);
        assert_eq!(enemy_contact(&player, GROUND_LINE, 0.0, &enemy), None);
    }
}
