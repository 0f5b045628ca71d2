    use super::*;

    fn workspace_with(ids: &[SectionId]) -> Workspace {
        let mut ws = Workspace::new();
        for id in ids {
            ws.open(id.section(), GroupId::Left);
        }
        ws
    }

    #[test]
    fn single_tab_group_offers_no_split() {
        let ws = Workspace::new();
        let menu = ContextMenu::open_for(SectionId::Home, GroupId::Left, (0, 0), &ws);
        assert_eq!(
            menu.actions,
            vec![
                MenuAction::Close,
                MenuAction::CloseOthers,
                MenuAction::CloseToRight,
                MenuAction::CloseAll
            ]
        );
    }

    #[test]
    fn split_direction_follows_group() {
        let mut ws = workspace_with(&[SectionId::About, SectionId::Skills]);
        let menu = ContextMenu::open_for(SectionId::About, GroupId::Left, (0, 0), &ws);
        assert_eq!(menu.actions.last(), Some(&MenuAction::SplitRight));

        ws.move_to_group(SectionId::About, GroupId::Right);
        let menu = ContextMenu::open_for(SectionId::About, GroupId::Right, (0, 0), &ws);
        assert!(!menu.actions.contains(&MenuAction::SplitLeft));

        ws.open(SectionId::Contact.section(), GroupId::Right);
        let menu = ContextMenu::open_for(SectionId::About, GroupId::Right, (0, 0), &ws);
        assert_eq!(menu.actions.last(), Some(&MenuAction::SplitLeft));
    }

    #[test]
    fn actions_drive_workspace() {
        let mut ws = workspace_with(&[SectionId::About, SectionId::Skills, SectionId::Contact]);
        MenuAction::SplitRight.apply(SectionId::Skills, GroupId::Left, &mut ws);
        assert_eq!(ws.active(GroupId::Right), Some(SectionId::Skills));
        assert!(!ws.contains(GroupId::Left, SectionId::Skills));

        MenuAction::CloseToRight.apply(SectionId::Home, GroupId::Left, &mut ws);
        assert_eq!(ws.tabs(GroupId::Left).len(), 1);

        MenuAction::SplitLeft.apply(SectionId::Skills, GroupId::Right, &mut ws);
        assert!(!ws.is_split());
        assert_eq!(ws.active(GroupId::Left), Some(SectionId::Skills));

        MenuAction::CloseAll.apply(SectionId::Skills, GroupId::Left, &mut ws);
        assert_eq!(ws, Workspace::new());
    }

    #[test]
    fn keyboard_selection_wraps() {
        let ws = Workspace::new();
        let mut menu = ContextMenu::open_for(SectionId::Home, GroupId::Left, (0, 0), &ws);
        menu.move_up();
        assert_eq!(menu.selected_action(), Some(MenuAction::CloseAll));
        menu.move_down();
        assert_eq!(menu.selected_action(), Some(MenuAction::Close));
    }

    #[test]
    fn rect_stays_on_screen_and_maps_rows() {
        let ws = Workspace::new();
        let screen = Rect::new(0, 0, 80, 24);
        let menu = ContextMenu::open_for(SectionId::Home, GroupId::Left, (75, 22), &ws);
        let r = menu.rect(screen);
        assert_eq!(r, Rect::new(56, 18, 24, 6));

        assert_eq!(menu.action_at(60, 18, screen), None);
        assert_eq!(menu.action_at(60, 19, screen), Some(MenuAction::Close));
        assert_eq!(menu.action_at(60, 22, screen), Some(MenuAction::CloseAll));
        assert_eq!(menu.action_at(10, 10, screen), None);
        assert!(!menu.contains(55, 19, screen));
    }
