//! Unit tests for ks-mission.

#[cfg(test)]
mod helpers {
    use ks_core::{Location, MissionId, ShelfId};
    use crate::{Mission, WmsMission};

    pub fn wms(pick: (i32, i32), drop: (i32, i32)) -> Mission {
        Mission::Wms(WmsMission {
            id:        MissionId(1),
            shelf_id:  ShelfId(9),
            pick_from: Location::from(pick),
            drop_to:   Location::from(drop),
        })
    }
}

// ── Mission ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mission {
    use ks_core::Location;
    use crate::Mission;

    #[test]
    fn internal_has_single_endpoint() {
        let m = Mission::Internal { to: Location::new(2, 2) };
        assert_eq!(m.endpoints(), vec![Location::new(2, 2)]);
        assert!(m.is_internal());
    }

    #[test]
    fn wms_endpoints_pick_then_drop() {
        let m = super::helpers::wms((1, 1), (3, 4));
        assert_eq!(m.endpoints(), vec![Location::new(1, 1), Location::new(3, 4)]);
        assert_eq!(m.destination(), Location::new(3, 4));
        assert!(!m.is_internal());
    }

    #[test]
    fn display() {
        let m = Mission::Internal { to: Location::new(0, 4) };
        assert_eq!(m.to_string(), "internal -> (0, 4)");
    }
}

// ── RobotInfo ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod robot {
    use ks_core::{Action, Direction, Location, RobotId};
    use crate::{Mission, MissionError, RobotInfo};

    #[test]
    fn new_robot_is_idle_and_faces_north() {
        let r = RobotInfo::new(RobotId(0), Location::new(1, 1));
        assert!(r.is_idle());
        assert_eq!(r.pos.dir, Direction::North);
        r.check().unwrap();
    }

    #[test]
    fn attached_without_mission_is_inconsistent() {
        let mut r = RobotInfo::new(RobotId(3), Location::new(0, 0));
        r.shelf_attached = true;
        assert!(matches!(r.check(), Err(MissionError::Inconsistent(RobotId(3)))));
    }

    #[test]
    fn motion_actions_update_pose() {
        let mut r = RobotInfo::new(RobotId(0), Location::new(2, 2)).facing(Direction::East);
        r.apply(Action::Move).unwrap();
        assert_eq!(r.pos.loc, Location::new(2, 3));
        r.apply(Action::CTurn).unwrap();
        assert_eq!(r.pos.dir, Direction::South);
        r.apply(Action::CcTurn).unwrap();
        r.apply(Action::CcTurn).unwrap();
        assert_eq!(r.pos.dir, Direction::North);
        r.apply(Action::Yield).unwrap();
        assert_eq!(r.pos.loc, Location::new(2, 3));
    }

    #[test]
    fn attach_detach_cycle_completes_mission() {
        let mut r = RobotInfo::new(RobotId(0), Location::new(1, 1))
            .with_mission(super::helpers::wms((1, 1), (0, 0)));
        r.apply(Action::Attach).unwrap();
        assert!(r.shelf_attached);
        r.apply(Action::Detach).unwrap();
        assert!(!r.shelf_attached);
        assert!(r.is_idle());
    }

    #[test]
    fn double_attach_rejected() {
        let mut r = RobotInfo::new(RobotId(0), Location::new(1, 1))
            .with_mission(super::helpers::wms((1, 1), (0, 0)));
        r.apply(Action::Attach).unwrap();
        let err = r.apply(Action::Attach).unwrap_err();
        assert!(matches!(
            err,
            MissionError::InvalidTransition { action: Action::Attach, .. }
        ));
    }

    #[test]
    fn detach_without_shelf_rejected() {
        let mut r = RobotInfo::new(RobotId(0), Location::new(1, 1));
        assert!(r.apply(Action::Detach).is_err());
    }

    #[test]
    fn settle_completes_internal_mission_on_target() {
        let mut r = RobotInfo::new(RobotId(0), Location::new(0, 1))
            .facing(Direction::West)
            .with_mission(Mission::Internal { to: Location::new(0, 0) });
        assert!(!r.settle());
        r.apply(Action::Move).unwrap();
        assert!(r.settle());
        assert!(r.is_idle());
    }

    #[test]
    fn settle_ignores_wms() {
        let mut r = RobotInfo::new(RobotId(0), Location::new(0, 0))
            .with_mission(super::helpers::wms((1, 1), (0, 0)));
        assert!(!r.settle());
        assert!(r.has_mission());
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use ks_core::{Location, MissionId, ShelfId};
    use crate::{MissionError, load_missions_reader};

    const CSV: &str = "\
mission_id,shelf_id,pick_x,pick_y,drop_x,drop_y
0,17,2,3,0,9
1,18,4,3,0,8
";

    #[test]
    fn loads_rows_in_order() {
        let missions = load_missions_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(missions.len(), 2);
        assert_eq!(missions[0].id, MissionId(0));
        assert_eq!(missions[0].shelf_id, ShelfId(17));
        assert_eq!(missions[0].pick_from, Location::new(2, 3));
        assert_eq!(missions[1].drop_to, Location::new(0, 8));
    }

    #[test]
    fn empty_file_yields_no_missions() {
        let header_only = "mission_id,shelf_id,pick_x,pick_y,drop_x,drop_y\n";
        assert!(load_missions_reader(Cursor::new(header_only)).unwrap().is_empty());
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let bad = "mission_id,shelf_id,pick_x,pick_y,drop_x,drop_y\n0,1,two,3,0,9\n";
        let err = load_missions_reader(Cursor::new(bad)).unwrap_err();
        assert!(matches!(err, MissionError::Parse(_)));
    }

    #[test]
    fn same_pick_and_drop_rejected() {
        let bad = "mission_id,shelf_id,pick_x,pick_y,drop_x,drop_y\n4,1,2,2,2,2\n";
        let err = load_missions_reader(Cursor::new(bad)).unwrap_err();
        assert!(err.to_string().contains("mission 4"), "got {err}");
    }
}
