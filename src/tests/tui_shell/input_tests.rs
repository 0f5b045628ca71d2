    use super::*;

    #[test]
    fn edits_at_cursor_with_multibyte_text() {
        let mut input = Input::default();
        input.set("résumé".to_string());
        assert_eq!(input.cursor, 6);

        input.move_left();
        input.backspace();
        assert_eq!(input.buf, "résué");

        input.insert_char('m');
        assert_eq!(input.buf, "résumé");

        input.delete();
        assert_eq!(input.buf, "résum");
        assert_eq!(input.cursor, 5);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut input = Input::default();
        input.backspace();
        input.delete();
        input.move_left();
        assert_eq!(input.cursor, 0);

        input.insert_char('a');
        input.move_right();
        input.move_right();
        assert_eq!(input.cursor, 1);

        input.clear();
        assert!(input.buf.is_empty());
        assert_eq!(input.cursor, 0);
    }
