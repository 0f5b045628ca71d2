    use super::*;
    use crate::model::CATALOG;

    fn ids(ws: &Workspace, group: GroupId) -> Vec<SectionId> {
        ws.tabs(group).iter().map(|t| t.id).collect()
    }

    fn open_left(ws: &mut Workspace, ids: &[SectionId]) {
        for id in ids {
            ws.open(id.section(), GroupId::Left);
        }
    }

    #[test]
    fn starts_with_home_and_empty_right() {
        let ws = Workspace::new();
        assert_eq!(ids(&ws, GroupId::Left), vec![SectionId::Home]);
        assert_eq!(ws.active(GroupId::Left), Some(SectionId::Home));
        assert!(ws.tabs(GroupId::Right).is_empty());
        assert_eq!(ws.active(GroupId::Right), None);
        assert!(!ws.is_split());
        assert_eq!(ws.split_ratio(), 0.5);
    }

    #[test]
    fn open_close_scenario_enforces_home_floor() {
        let mut ws = Workspace::new();
        ws.open(SectionId::Contact.section(), GroupId::Left);
        assert_eq!(ids(&ws, GroupId::Left), vec![SectionId::Home, SectionId::Contact]);
        assert_eq!(ws.active(GroupId::Left), Some(SectionId::Contact));

        assert!(ws.close(SectionId::Home, GroupId::Left));
        assert_eq!(ids(&ws, GroupId::Left), vec![SectionId::Contact]);
        assert_eq!(ws.active(GroupId::Left), Some(SectionId::Contact));

        assert!(ws.close(SectionId::Contact, GroupId::Left));
        assert_eq!(ids(&ws, GroupId::Left), vec![SectionId::Home]);
        assert_eq!(ws.active(GroupId::Left), Some(SectionId::Home));
    }

    #[test]
    fn open_existing_tab_only_activates_it() {
        let mut ws = Workspace::new();
        open_left(&mut ws, &[SectionId::About, SectionId::Skills]);
        ws.open(SectionId::About.section(), GroupId::Left);
        assert_eq!(
            ids(&ws, GroupId::Left),
            vec![SectionId::Home, SectionId::About, SectionId::Skills]
        );
        assert_eq!(ws.active(GroupId::Left), Some(SectionId::About));
    }

    #[test]
    fn closing_active_prefers_left_neighbour() {
        let mut ws = Workspace::new();
        open_left(&mut ws, &[SectionId::About, SectionId::Skills]);
        assert_eq!(ws.active(GroupId::Left), Some(SectionId::Skills));
        ws.close(SectionId::Skills, GroupId::Left);
        assert_eq!(ws.active(GroupId::Left), Some(SectionId::About));
    }

    #[test]
    fn closing_first_active_tab_falls_to_replacement() {
        let mut ws = Workspace::new();
        open_left(&mut ws, &[SectionId::About, SectionId::Skills]);
        ws.set_active(GroupId::Left, SectionId::Home);
        ws.close(SectionId::Home, GroupId::Left);
        assert_eq!(ws.active(GroupId::Left), Some(SectionId::About));
    }

    #[test]
    fn closing_inactive_tab_keeps_active() {
        let mut ws = Workspace::new();
        open_left(&mut ws, &[SectionId::About, SectionId::Skills]);
        ws.close(SectionId::About, GroupId::Left);
        assert_eq!(ids(&ws, GroupId::Left), vec![SectionId::Home, SectionId::Skills]);
        assert_eq!(ws.active(GroupId::Left), Some(SectionId::Skills));
    }

    #[test]
    fn invalid_requests_are_noops() {
        let mut ws = Workspace::new();
        open_left(&mut ws, &[SectionId::About]);
        let before = ws.clone();
        assert!(!ws.close(SectionId::Projects, GroupId::Left));
        assert!(!ws.close(SectionId::Projects, GroupId::Right));
        assert!(!ws.set_active(GroupId::Left, SectionId::Projects));
        assert!(!ws.reorder(0, 9));
        assert!(!ws.reorder(7, 0));
        assert!(!ws.close_others(SectionId::Projects, GroupId::Left));
        assert!(!ws.close_to_right(SectionId::Projects, GroupId::Left));
        assert!(!ws.move_to_group(SectionId::Projects, GroupId::Right));
        assert_eq!(ws, before);
    }

    #[test]
    fn close_others_keeps_only_target_and_leaves_right_alone() {
        let mut ws = Workspace::new();
        open_left(&mut ws, &[SectionId::About, SectionId::Skills, SectionId::Contact]);
        ws.move_to_group(SectionId::Contact, GroupId::Right);
        ws.close_others(SectionId::About, GroupId::Left);
        assert_eq!(ids(&ws, GroupId::Left), vec![SectionId::About]);
        assert_eq!(ws.active(GroupId::Left), Some(SectionId::About));
        assert_eq!(ids(&ws, GroupId::Right), vec![SectionId::Contact]);
    }

    #[test]
    fn close_to_right_truncates_and_activates() {
        let mut ws = Workspace::new();
        open_left(&mut ws, &[SectionId::About, SectionId::Skills, SectionId::Contact]);
        ws.close_to_right(SectionId::About, GroupId::Left);
        assert_eq!(ids(&ws, GroupId::Left), vec![SectionId::Home, SectionId::About]);
        assert_eq!(ws.active(GroupId::Left), Some(SectionId::About));
    }

    #[test]
    fn close_all_resets_both_groups_but_keeps_ratio() {
        let mut ws = Workspace::new();
        open_left(&mut ws, &[SectionId::About, SectionId::Skills]);
        ws.move_to_group(SectionId::Skills, GroupId::Right);
        ws.set_split_ratio(0.7);
        ws.close_all();
        assert_eq!(ids(&ws, GroupId::Left), vec![SectionId::Home]);
        assert_eq!(ws.active(GroupId::Left), Some(SectionId::Home));
        assert!(ws.tabs(GroupId::Right).is_empty());
        assert_eq!(ws.active(GroupId::Right), None);
        assert!((ws.split_ratio() - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn reorder_uses_array_move_semantics() {
        let mut ws = Workspace::new();
        open_left(&mut ws, &[SectionId::About, SectionId::Skills, SectionId::Contact]);

        // Forward: drop before the tab at index 3 lands at index 2.
        assert!(ws.reorder(0, 3));
        assert_eq!(
            ids(&ws, GroupId::Left),
            vec![SectionId::About, SectionId::Skills, SectionId::Home, SectionId::Contact]
        );

        // Backward: straight insert.
        assert!(ws.reorder(3, 0));
        assert_eq!(
            ids(&ws, GroupId::Left),
            vec![SectionId::Contact, SectionId::About, SectionId::Skills, SectionId::Home]
        );

        // Past the end.
        assert!(ws.reorder(0, 4));
        assert_eq!(
            ids(&ws, GroupId::Left),
            vec![SectionId::About, SectionId::Skills, SectionId::Home, SectionId::Contact]
        );

        assert!(!ws.reorder(2, 2));
    }

    #[test]
    fn reorder_keeps_active_tab() {
        let mut ws = Workspace::new();
        open_left(&mut ws, &[SectionId::About, SectionId::Skills]);
        ws.reorder(2, 0);
        assert_eq!(ws.active(GroupId::Left), Some(SectionId::Skills));
    }

    #[test]
    fn reorder_is_a_permutation() {
        let all: Vec<SectionId> = CATALOG.iter().map(|s| s.id).collect();
        for source in 0..all.len() {
            for target in 0..=all.len() {
                let mut ws = Workspace::new();
                open_left(&mut ws, &all[1..]);
                ws.reorder(source, target);
                let mut after = ids(&ws, GroupId::Left);
                after.sort_by_key(|id| *id as usize);
                assert_eq!(after, all, "reorder({}, {})", source, target);
            }
        }
    }

    #[test]
    fn move_to_group_splits_and_repairs_source() {
        let mut ws = Workspace::new();
        open_left(&mut ws, &[SectionId::About, SectionId::Skills]);
        assert!(ws.move_to_group(SectionId::Skills, GroupId::Right));
        assert_eq!(ids(&ws, GroupId::Left), vec![SectionId::Home, SectionId::About]);
        assert_eq!(ws.active(GroupId::Left), Some(SectionId::About));
        assert_eq!(ids(&ws, GroupId::Right), vec![SectionId::Skills]);
        assert_eq!(ws.active(GroupId::Right), Some(SectionId::Skills));
        assert!(ws.is_split());
    }

    #[test]
    fn move_to_group_never_duplicates() {
        let mut ws = Workspace::new();
        open_left(&mut ws, &[SectionId::About]);
        ws.open(SectionId::About.section(), GroupId::Right);
        ws.open(SectionId::Skills.section(), GroupId::Right);
        assert!(ws.move_to_group(SectionId::About, GroupId::Right));
        assert_eq!(ids(&ws, GroupId::Right), vec![SectionId::About, SectionId::Skills]);
        assert_eq!(ws.active(GroupId::Right), Some(SectionId::About));
        assert_eq!(ids(&ws, GroupId::Left), vec![SectionId::Home]);
    }

    #[test]
    fn moving_last_right_tab_back_empties_right() {
        let mut ws = Workspace::new();
        open_left(&mut ws, &[SectionId::About]);
        ws.move_to_group(SectionId::About, GroupId::Right);
        ws.set_split_ratio(0.3);
        assert!(ws.move_to_group(SectionId::About, GroupId::Left));
        assert!(!ws.is_split());
        assert_eq!(ws.active(GroupId::Right), None);
        assert_eq!(ws.active(GroupId::Left), Some(SectionId::About));
        assert!((ws.split_ratio() - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn moving_last_left_tab_restores_home() {
        let mut ws = Workspace::new();
        ws.move_to_group(SectionId::Home, GroupId::Right);
        assert_eq!(ids(&ws, GroupId::Left), vec![SectionId::Home]);
        assert_eq!(ids(&ws, GroupId::Right), vec![SectionId::Home]);
    }

    #[test]
    fn right_group_closes_down_to_empty() {
        let mut ws = Workspace::new();
        ws.open(SectionId::About.section(), GroupId::Right);
        ws.open(SectionId::Skills.section(), GroupId::Right);
        ws.close(SectionId::Skills, GroupId::Right);
        assert_eq!(ws.active(GroupId::Right), Some(SectionId::About));
        ws.close(SectionId::About, GroupId::Right);
        assert_eq!(ws.active(GroupId::Right), None);
        assert!(ws.tabs(GroupId::Right).is_empty());
    }

    #[test]
    fn split_ratio_is_clamped() {
        let mut ws = Workspace::new();
        ws.set_split_ratio(0.05);
        assert!((ws.split_ratio() - 0.2).abs() < f32::EPSILON);
        ws.set_split_ratio(0.95);
        assert!((ws.split_ratio() - 0.8).abs() < f32::EPSILON);
        ws.set_split_ratio(f32::NAN);
        assert!((ws.split_ratio() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn pointer_ratio_respects_pane_floor_then_ratio_floor() {
        // 50 px left pane on a 1000 px container: 100 px floor gives 0.1,
        // which the ratio floor lifts to 0.2.
        let r = ratio_from_pointer(60.0, 0.0, 10.0, 1000.0, 100.0).unwrap();
        assert!((r - 0.2).abs() < f32::EPSILON);

        let r = ratio_from_pointer(700.0, 100.0, 0.0, 1000.0, 100.0).unwrap();
        assert!((r - 0.6).abs() < 1e-6);

        let r = ratio_from_pointer(1000.0, 0.0, 0.0, 1000.0, 100.0).unwrap();
        assert!((r - 0.8).abs() < f32::EPSILON);

        assert_eq!(ratio_from_pointer(10.0, 0.0, 0.0, 0.0, 100.0), None);
    }

    #[test]
    fn interaction_slot_holds_one_session() {
        let mut slot = Interaction::default();
        assert!(slot.begin_drag(SectionId::Experience, 2));
        assert!(!slot.begin_resize(1.0));
        slot.hover(0);
        assert_eq!(
            slot.finish(),
            Interaction::TabDrag(DragState {
                id: SectionId::Experience,
                source_index: 2,
                hover_index: 0
            })
        );
        assert!(slot.is_idle());
        assert!(slot.begin_resize(3.0));
        slot.cancel();
        assert!(slot.is_idle());
    }

    #[test]
    fn random_sequences_keep_group_invariants() {
        let mut ws = Workspace::new();
        let mut seed: u64 = 0x5eed;
        let mut next = || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) as usize
        };
        for _ in 0..2000 {
            let id = CATALOG[next() % CATALOG.len()].id;
            let group = if next() % 2 == 0 { GroupId::Left } else { GroupId::Right };
            match next() % 8 {
                0 | 1 => ws.open(id.section(), group),
                2 | 3 => {
                    ws.close(id, group);
                }
                4 => {
                    ws.move_to_group(id, group);
                }
                5 => {
                    ws.reorder(next() % 9, next() % 9);
                }
                6 => {
                    ws.close_to_right(id, group);
                }
                _ => {
                    ws.set_active(group, id);
                }
            }

            assert!(!ws.tabs(GroupId::Left).is_empty());
            for group in [GroupId::Left, GroupId::Right] {
                let tabs = ids(&ws, group);
                let mut dedup = tabs.clone();
                dedup.sort_by_key(|id| *id as usize);
                dedup.dedup();
                assert_eq!(dedup.len(), tabs.len(), "duplicate tab in {:?}", group);
                match ws.active(group) {
                    Some(active) => assert!(tabs.contains(&active)),
                    None => assert!(tabs.is_empty()),
                }
            }
        }
    }
