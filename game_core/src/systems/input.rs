use glam::Vec2;
use hecs::World;

use crate::{active_target, Placement, Visual};

/// Hit-test a container-relative point against the active target's box and
/// mark it pressed on a hit
pub fn press_at(world: &mut World, point: Vec2) -> bool {
    let Some(entity) = active_target(world) else {
        return false;
    };
    let Ok((placement, visual)) = world.query_one_mut::<(&Placement, &mut Visual)>(entity) else {
        return false;
    };
    if placement.bounds().contains(point) {
        visual.pressed = true;
        true
    } else {
        false
    }
}

/// Press released anywhere
pub fn release(world: &mut World) {
    for (_entity, visual) in world.query_mut::<&mut Visual>() {
        visual.pressed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_target, Band};

    #[test]
    fn test_press_inside_and_release() {
        let mut world = World::new();
        let entity = create_target(
            &mut world,
            Vec2::new(50.0, 150.0),
            100.0,
            Band::new(0.0, 25.0),
            8,
        );

        assert!(press_at(&mut world, Vec2::new(50.0, 150.0)));
        assert!(world.get::<&Visual>(entity).unwrap().pressed);

        release(&mut world);
        assert!(!world.get::<&Visual>(entity).unwrap().pressed);
    }

    #[test]
    fn test_press_outside() {
        let mut world = World::new();
        let entity = create_target(
            &mut world,
            Vec2::new(50.0, 150.0),
            100.0,
            Band::new(0.0, 25.0),
            8,
        );
        assert!(!press_at(&mut world, Vec2::new(151.0, 200.0)));
        assert!(!press_at(&mut world, Vec2::new(60.0, 149.0)));
        assert!(!world.get::<&Visual>(entity).unwrap().pressed);
    }

    #[test]
    fn test_press_without_target() {
        let mut world = World::new();
        assert!(!press_at(&mut world, Vec2::ZERO));
    }
}
