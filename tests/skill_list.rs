use portal_forms::form::{AddOutcome, SkillEditor, SkillList, TagEdit, TagKey};

#[test]
fn duplicate_ignores_case_and_keeps_first_casing() {
    let mut list = SkillList::new();
    assert_eq!(list.add("React"), AddOutcome::Added);
    assert_eq!(list.add("react"), AddOutcome::Duplicate);
    assert_eq!(list.as_slice(), ["React".to_string()]);
}

#[test]
fn blank_candidate_is_a_no_op() {
    let mut list = SkillList::new();
    assert_eq!(list.add(""), AddOutcome::Empty);
    assert_eq!(list.add("   "), AddOutcome::Empty);
    assert!(list.is_empty());
}

#[test]
fn remove_non_member_is_a_no_op() {
    let mut list = SkillList::new();
    list.add("Go");
    assert!(!list.remove("Rust"));
    assert!(!list.remove("go"));
    assert_eq!(list.len(), 1);
    assert!(list.remove("Go"));
    assert!(list.is_empty());
}

#[test]
fn insertion_order_is_preserved() {
    let mut list = SkillList::new();
    for skill in ["Pega", "TypeScript", "React"] {
        list.add(skill);
    }
    assert_eq!(list.as_slice(), ["Pega", "TypeScript", "React"].map(String::from));
}

#[test]
fn duplicate_commit_still_clears_draft() {
    let mut editor = SkillEditor::new();
    editor.set_draft("Rust");
    assert_eq!(editor.commit_draft(), AddOutcome::Added);
    editor.set_draft("RUST");
    assert_eq!(editor.commit_draft(), AddOutcome::Duplicate);
    assert_eq!(editor.draft(), "");
    assert_eq!(editor.skills().len(), 1);
}

#[test]
fn comma_and_enter_commit() {
    let mut editor = SkillEditor::new();
    for ch in "Go".chars() {
        assert_eq!(editor.handle_key(TagKey::Char(ch)), TagEdit::Draft);
    }
    assert_eq!(
        editor.handle_key(TagKey::Char(',')),
        TagEdit::Committed(AddOutcome::Added)
    );
    for ch in "Rust".chars() {
        editor.handle_key(TagKey::Char(ch));
    }
    assert_eq!(
        editor.handle_key(TagKey::Enter),
        TagEdit::Committed(AddOutcome::Added)
    );
    assert_eq!(editor.skills().as_slice(), ["Go", "Rust"].map(String::from));
}

#[test]
fn backspace_on_empty_draft_pops_last_tag() {
    let mut editor = SkillEditor::new();
    editor.set_draft("Go");
    editor.commit_draft();
    editor.set_draft("x");

    assert_eq!(editor.handle_key(TagKey::Backspace), TagEdit::Draft);
    assert_eq!(
        editor.handle_key(TagKey::Backspace),
        TagEdit::Popped("Go".to_string())
    );
    assert_eq!(editor.handle_key(TagKey::Backspace), TagEdit::Ignored);
}
