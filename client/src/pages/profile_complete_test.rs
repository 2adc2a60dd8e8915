use super::*;

#[test]
fn skills_line_is_split_and_trimmed() {
    let form = ProfileForm {
        headline: " Backend developer ".to_owned(),
        summary: "Five years building APIs and data pipelines.".to_owned(),
        phone: "+57 300 123 4567".to_owned(),
        skills: "rust, , sql ,rust".to_owned(),
    };
    let draft = form.to_draft();
    assert_eq!(draft.headline, "Backend developer");
    assert_eq!(draft.skills, vec!["rust".to_owned(), "sql".to_owned()]);
    assert!(draft.validate().is_ok());
}

#[test]
fn stored_skills_are_joined_for_editing() {
    let draft = ProfileDraft { skills: vec!["rust".to_owned(), "sql".to_owned()], ..ProfileDraft::default() };
    assert_eq!(ProfileForm::from_draft(draft).skills, "rust, sql");
}
