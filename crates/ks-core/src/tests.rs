//! Unit tests for ks-core primitives.

#[cfg(test)]
mod ids {
    use crate::{MissionId, RobotId, ShelfId};

    #[test]
    fn index_roundtrip() {
        let id = RobotId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(RobotId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering_is_priority() {
        assert!(RobotId(0) < RobotId(1));
        assert!(ShelfId(100) > ShelfId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(RobotId::INVALID.0, u32::MAX);
        assert_eq!(ShelfId::INVALID.0, u32::MAX);
        assert_eq!(MissionId::default(), MissionId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(RobotId(7).to_string(), "RobotId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Direction, Location, Position};

    #[test]
    fn east_increases_column() {
        assert_eq!(Location::new(0, 0) + Direction::East, Location::new(0, 1));
        assert_eq!(Location::new(0, 0) + Direction::South, Location::new(1, 0));
        assert_eq!(Location::new(3, 3) + Direction::North, Location::new(2, 3));
        assert_eq!(Location::new(3, 3) + Direction::West, Location::new(3, 2));
    }

    #[test]
    fn turns_are_inverse() {
        for d in Direction::ALL {
            assert_eq!(d.clockwise().counter_clockwise(), d);
            assert_eq!(d.clockwise().clockwise().clockwise().clockwise(), d);
        }
        assert_eq!(Direction::West.counter_clockwise(), Direction::South);
    }

    #[test]
    fn manhattan() {
        assert_eq!(Location::new(0, 0).manhattan(Location::new(0, 4)), 4);
        assert_eq!(Location::new(-2, 1).manhattan(Location::new(1, -1)), 5);
    }

    #[test]
    fn position_orders_by_location_then_direction() {
        let a = Position::new(Location::new(0, 1), Direction::West);
        let b = Position::new(Location::new(0, 2), Direction::North);
        let c = Position::new(Location::new(0, 2), Direction::East);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn display() {
        let p = Position::new(Location::new(2, 5), Direction::South);
        assert_eq!(p.to_string(), "(2, 5) SOUTH");
    }
}

#[cfg(test)]
mod action {
    use crate::{Action, ActionDurations, ActionWithTime, Direction, Location, Position};

    fn origin() -> Position {
        Position::new(Location::new(0, 0), Direction::East)
    }

    #[test]
    fn move_follows_heading() {
        assert_eq!(Action::Move.apply(origin()).loc, Location::new(0, 1));
        assert_eq!(Action::Move.apply(origin()).dir, Direction::East);
    }

    #[test]
    fn turns_keep_location() {
        let cw = Action::CTurn.apply(origin());
        let ccw = Action::CcTurn.apply(origin());
        assert_eq!(cw, Position::new(Location::new(0, 0), Direction::South));
        assert_eq!(ccw, Position::new(Location::new(0, 0), Direction::North));
    }

    #[test]
    fn stationary_actions_keep_pose() {
        for a in [Action::Yield, Action::Attach, Action::Detach] {
            assert_eq!(a.apply(origin()), origin());
        }
    }

    #[test]
    fn timed_step_derives_end() {
        let d = ActionDurations::default();
        let step = ActionWithTime::new(Action::Move, 3_000, origin(), &d);
        assert_eq!(step.end_time_ms, 3_000 + d.move_ms);
        assert_eq!(step.end_pos.loc, Location::new(0, 1));
        assert!(step.is_consistent());
        assert_eq!(step.to_string(), "MOVE start: 3000 end: 4000");
    }

    #[test]
    fn inconsistent_step_detected() {
        let d = ActionDurations::default();
        let mut step = ActionWithTime::new(Action::CTurn, 0, origin(), &d);
        step.end_pos = origin();
        assert!(!step.is_consistent());
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, PlannerConfig};

    #[test]
    fn default_is_valid() {
        PlannerConfig::default().validate().unwrap();
    }

    #[test]
    fn buffer_must_exceed_move() {
        let mut cfg = PlannerConfig::default();
        cfg.buffer_ms = cfg.durations.move_ms;
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn zero_duration_rejected() {
        let mut cfg = PlannerConfig::default();
        cfg.durations.yield_ms = 0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("yield_ms"), "got {err}");
    }

    #[test]
    fn pickup_dwell() {
        let cfg = PlannerConfig::default();
        assert_eq!(cfg.pickup_dwell_ms(), cfg.durations.attach_ms + cfg.buffer_ms);
    }
}
