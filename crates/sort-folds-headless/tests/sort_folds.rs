use pretty_assertions::assert_eq;
use sort_folds::{
    FoldNavigator, FoldSpan, LineRange, Position, SortFoldsError, SortFoldsOptions, TextBuffer,
    sort_folds, sort_folds_with,
};
use sort_folds_headless::{FoldMarkers, HeadlessConfig, HeadlessEditor};

fn editor(text: &str, selection: LineRange) -> HeadlessEditor {
    let mut editor = HeadlessEditor::new(text);
    editor.set_selection(selection);
    editor
}

fn lines(editor: &HeadlessEditor) -> Vec<String> {
    editor.lines(0, editor.line_count()).unwrap()
}

const FRUIT: &str = "\
A
#fold{{{
banana
#}}}
B
#fold{{{
apple
#}}}
C
";

#[test]
fn test_two_folds_sorted_by_their_content_line() {
    let mut ed = editor(FRUIT, LineRange::new(0, 9));

    let outcome = sort_folds(&mut ed, 1).unwrap();

    assert_eq!(outcome.spans.len(), 2);
    assert_eq!(outcome.rewritten, 2);
    assert_eq!(
        ed.text(),
        "A\n#fold{{{\napple\n#}}}\nB\n#fold{{{\nbanana\n#}}}\nC\n"
    );
}

#[test]
fn test_identical_key_lines_keep_original_order() {
    let mut ed = editor(FRUIT, LineRange::new(0, 9));

    // Both folds start with "#fold{{{".
    let outcome = sort_folds(&mut ed, 0).unwrap();

    assert!(outcome.sorted());
    assert_eq!(outcome.rewritten, 0);
    assert_eq!(ed.text(), FRUIT);
}

#[test]
fn test_three_folds_sorted() {
    let text = "\
c {{{
  third
}}}
a {{{
  first
}}}
b {{{
  second
}}}
";
    let mut ed = editor(text, LineRange::new(0, 9));

    sort_folds(&mut ed, 0).unwrap();

    for (fold, key) in ["a {{{", "b {{{", "c {{{"].iter().enumerate() {
        assert_eq!(ed.line(fold * 3).as_deref(), Some(*key));
    }
    assert_eq!(ed.line(1).as_deref(), Some("  first"));
    assert_eq!(ed.line(7).as_deref(), Some("  third"));
}

#[test]
fn test_case_insensitive_order() {
    let text = "Banana {{{\n}}}\napple {{{\n}}}\n";
    let mut ed = editor(text, LineRange::new(0, 4));

    sort_folds(&mut ed, 0).unwrap();

    assert_eq!(ed.text(), "apple {{{\n}}}\nBanana {{{\n}}}\n");
}

#[test]
fn test_sorting_twice_is_idempotent() {
    let text = "d {{{\n x\n}}}\nB {{{\n}}}\nb {{{\n y\n}}}\na {{{\n}}}\n";
    let mut ed = editor(text, LineRange::new(0, 10));

    sort_folds(&mut ed, 0).unwrap();
    let once = ed.text();
    let outcome = sort_folds(&mut ed, 0).unwrap();

    assert_eq!(outcome.rewritten, 0);
    assert_eq!(ed.text(), once);
    assert_eq!(once, "a {{{\n}}}\nB {{{\n}}}\nb {{{\n y\n}}}\nd {{{\n x\n}}}\n");
}

#[test]
fn test_only_selected_folds_move() {
    let text = "c {{{\n}}}\nb {{{\n}}}\na {{{\n}}}\n";
    let mut ed = editor(text, LineRange::inclusive(0, 3));

    sort_folds(&mut ed, 0).unwrap();

    assert_eq!(ed.text(), "b {{{\n}}}\nc {{{\n}}}\na {{{\n}}}\n");
}

#[test]
fn test_nested_children_sorted_inside_parent() {
    let text = "\
z-parent {{{
  c {{{
  }}}
  a {{{
    deep {{{
    }}}
  }}}
  b {{{
  }}}
}}}
tail
";
    let mut ed = editor(text, LineRange::new(1, 9));
    ed.set_cursor(Position::new(1, 2));

    let outcome = sort_folds(&mut ed, 0).unwrap();

    assert_eq!(
        outcome.spans,
        vec![
            FoldSpan::new(1, 3).unwrap(),
            FoldSpan::new(3, 7).unwrap(),
            FoldSpan::new(7, 9).unwrap()
        ]
    );
    assert_eq!(
        lines(&ed),
        [
            "z-parent {{{",
            "  a {{{",
            "    deep {{{",
            "    }}}",
            "  }}}",
            "  b {{{",
            "  }}}",
            "  c {{{",
            "  }}}",
            "}}}",
            "tail",
        ]
    );
    assert_eq!(ed.cursor(), Position::new(1, 2));

    // The parent is left open, the sorted siblings closed.
    let regions = ed.fold_regions();
    assert!(!regions[0].is_collapsed);
    assert!(regions[1..].iter().all(|r| r.is_collapsed));
}

#[test]
fn test_fewer_than_two_folds_is_noop() {
    let one = "x\n{{{ only\n}}}\ny\n";
    let mut ed = editor(one, LineRange::new(0, 4));
    let outcome = sort_folds(&mut ed, 3).unwrap();
    assert_eq!(outcome.spans.len(), 1);
    assert!(!outcome.sorted());
    assert_eq!(ed.text(), one);

    let none = "z\ny\nx\n";
    let mut ed = editor(none, LineRange::new(0, 3));
    let outcome = sort_folds(&mut ed, 0).unwrap();
    assert!(outcome.spans.is_empty());
    assert_eq!(ed.text(), none);
}

#[test]
fn test_cursor_restored_whatever_the_outcome() {
    let cases = [
        (FRUIT, LineRange::new(0, 9)),
        (FRUIT, LineRange::new(0, 1)),
        ("b {{{\n}}}\na {{{\n}}}\n", LineRange::new(0, 4)),
    ];
    for (text, selection) in cases {
        let mut ed = editor(text, selection);
        ed.set_cursor(Position::new(2, 3));

        sort_folds(&mut ed, 0).unwrap();

        assert_eq!(ed.cursor(), Position::new(2, 3));
    }
}

#[test]
fn test_key_index_out_of_range_leaves_buffer_unmodified() {
    let text = "b {{{\n  1\n  2\n}}}\na {{{\n}}}\n";
    let mut ed = editor(text, LineRange::new(0, 6));
    ed.set_cursor(Position::new(1, 0));

    let err = sort_folds_with(&mut ed, &SortFoldsOptions { key_index: 2 }).unwrap_err();

    assert_eq!(
        err,
        SortFoldsError::KeyIndexOutOfRange {
            key_index: 2,
            span: FoldSpan::new(4, 6).unwrap(),
            len: 2
        }
    );
    assert_eq!(ed.text(), text);
    assert_eq!(ed.cursor(), Position::new(1, 0));
}

#[test]
fn test_custom_markers_and_crlf() {
    let config = HeadlessConfig {
        fold_markers: FoldMarkers::new("#region", "#endregion"),
        fold_level: 0,
    };
    let mut ed = HeadlessEditor::with_config(
        "#region zeta\r\nz\r\n#endregion\r\n#region alpha\r\na\r\n#endregion\r\n",
        config,
    );

    sort_folds(&mut ed, 0).unwrap();

    assert_eq!(
        ed.text(),
        "#region alpha\r\na\r\n#endregion\r\n#region zeta\r\nz\r\n#endregion\r\n"
    );
}

#[test]
fn test_single_line_level_folds_are_sorted() {
    let mut ed = editor("p {{{1\nb {{{2\na {{{2\n}}}1\nq\n", LineRange::new(1, 3));

    let outcome = sort_folds(&mut ed, 0).unwrap();

    assert_eq!(outcome.rewritten, 2);
    assert_eq!(ed.text(), "p {{{1\na {{{2\n}}}1\nb {{{2\nq\n");
}
