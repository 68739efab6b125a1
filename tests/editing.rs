//! Editing tests - row store mutations and editor-level operations

use strand::config::Config;
use strand::editor::{Editor, Move};
use strand::Buffer;
use strand::BufferError;

fn editor(lines: &[&str]) -> Editor {
    let mut ed = Editor::new(Config::default());
    for (i, line) in lines.iter().enumerate() {
        ed.buffer_mut().insert_row(i, line).unwrap();
    }
    ed.buffer_mut().mark_clean();
    ed
}

fn buffer_to_string(ed: &Editor) -> String {
    ed.buffer().serialize()
}

// ========================================================================
// Row store invariants
// ========================================================================

#[test]
fn test_highlight_matches_render_after_every_mutation() {
    let mut ed = editor(&["int main() {", "\treturn 0;", "}"]);
    ed.buffer_mut().select_syntax("main.c");

    ed.set_cursor(1, 1);
    ed.insert_char('x');
    ed.insert_newline();
    ed.delete_char();
    ed.move_cursor(Move::Up);
    ed.insert_char('\t');

    for row in ed.buffer().rows() {
        assert_eq!(row.highlight().len(), row.render_len());
    }
}

#[test]
fn test_row_indices_stay_in_sync() {
    let mut ed = editor(&["a", "b", "c"]);
    ed.buffer_mut().insert_row(1, "x").unwrap();
    ed.buffer_mut().delete_row(3).unwrap();

    for (i, row) in ed.buffer().rows().iter().enumerate() {
        assert_eq!(row.index, i);
    }
}

#[test]
fn test_structural_operations_signal_out_of_range() {
    let mut buf = Buffer::new(4);
    buf.insert_row(0, "only").unwrap();

    assert!(matches!(
        buf.insert_row(2, "x"),
        Err(BufferError::OutOfRange { at: 2, len: 1 })
    ));
    assert!(matches!(
        buf.delete_row(1),
        Err(BufferError::OutOfRange { at: 1, len: 1 })
    ));
}

// ========================================================================
// Editing symmetry
// ========================================================================

#[test]
fn test_insert_then_delete_restores_content() {
    let mut ed = editor(&["hello world"]);
    let before = buffer_to_string(&ed);

    ed.set_cursor(0, 5);
    ed.insert_char('X');
    assert_eq!(buffer_to_string(&ed), "helloX world\n");

    ed.delete_char();
    assert_eq!(buffer_to_string(&ed), before);
}

#[test]
fn test_split_then_merge_restores_content() {
    let mut ed = editor(&["hello world"]);
    let before = buffer_to_string(&ed);

    ed.set_cursor(0, 5);
    ed.insert_newline();
    assert_eq!(buffer_to_string(&ed), "hello\n world\n");

    // Backspace at the start of the second row merges it back.
    ed.delete_char();
    assert_eq!(buffer_to_string(&ed), before);
    assert_eq!((ed.cy(), ed.cx()), (0, 5));
}

// ========================================================================
// Empty document handling
// ========================================================================

#[test]
fn test_typing_into_empty_document() {
    let mut ed = editor(&[]);
    for ch in "hi".chars() {
        ed.insert_char(ch);
    }
    assert_eq!(buffer_to_string(&ed), "hi\n");
}

#[test]
fn test_newline_on_virtual_row() {
    let mut ed = editor(&["a"]);
    ed.set_cursor(1, 0); // virtual row below the document
    ed.insert_newline();
    assert_eq!(buffer_to_string(&ed), "a\n\n");
}

#[test]
fn test_delete_on_virtual_row_is_noop() {
    let mut ed = editor(&["a"]);
    ed.set_cursor(1, 0);
    ed.delete_char();
    assert_eq!(buffer_to_string(&ed), "a\n");
}

// ========================================================================
// Serialization and file round trip
// ========================================================================

#[test]
fn test_serialize_terminates_every_row() {
    let ed = editor(&["one", "", "three"]);
    assert_eq!(buffer_to_string(&ed), "one\n\nthree\n");
}

#[test]
fn test_save_and_reopen_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.c");

    let mut ed = editor(&["int x;", "// done"]);
    ed.set_filename(path.clone());
    let bytes = ed.save().unwrap();
    assert_eq!(bytes, "int x;\n// done\n".len());
    assert!(!ed.is_dirty());

    let mut reopened = Editor::new(Config::default());
    reopened.open(&path).unwrap();
    assert_eq!(buffer_to_string(&reopened), "int x;\n// done\n");
    assert_eq!(reopened.buffer().syntax().unwrap().filetype, "c");
}

#[test]
fn test_open_nonexistent_path_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.rs");

    let mut ed = Editor::new(Config::default());
    ed.open(&path).unwrap();
    assert!(ed.buffer().is_empty());
    assert_eq!(ed.buffer().syntax().unwrap().filetype, "rust");
}

#[test]
fn test_save_without_filename_fails() {
    let mut ed = editor(&["x"]);
    assert!(ed.save().is_err());
}

// ========================================================================
// Dirty tracking
// ========================================================================

#[test]
fn test_edits_mark_buffer_dirty() {
    let mut ed = editor(&["x"]);
    assert!(!ed.is_dirty());
    ed.insert_char('y');
    assert!(ed.is_dirty());
}

#[test]
fn test_kill_buffer_resets_everything() {
    let mut ed = editor(&["some", "text"]);
    ed.set_filename("file.c".into());
    ed.set_cursor(1, 2);

    ed.kill_buffer();
    assert!(ed.buffer().is_empty());
    assert!(ed.filename().is_none());
    assert!(ed.buffer().syntax().is_none());
    assert_eq!((ed.cy(), ed.cx()), (0, 0));
    assert!(!ed.is_dirty());
}
