use super::*;

#[test]
fn blank_optional_fields_are_omitted() {
    let form = OfferForm {
        title: "  Rust developer ".to_owned(),
        description: "Build and run backend services.".to_owned(),
        location: "   ".to_owned(),
        modality: Modality::Hybrid.code().to_owned(),
        salary: String::new(),
    };
    let draft = form.to_draft();
    assert_eq!(draft.title, "Rust developer");
    assert_eq!(draft.location, None);
    assert_eq!(draft.salary, None);
    assert_eq!(draft.modality, Modality::Hybrid);
    assert!(draft.validate().is_ok());
}

#[test]
fn unknown_modality_code_falls_back_to_default() {
    let form = OfferForm { modality: "??".to_owned(), ..OfferForm::default() };
    assert_eq!(form.to_draft().modality, Modality::default());
}

#[test]
fn edit_form_round_trips_existing_offer() {
    let offer = Offer {
        id: "o1".to_owned(),
        title: "Data engineer".to_owned(),
        description: "Pipelines and warehouses for analytics.".to_owned(),
        location: Some("Lima".to_owned()),
        modality: Modality::Remote,
        company_name: None,
        salary: Some("USD 3000".to_owned()),
        published_at: None,
        active: true,
    };
    let form = OfferForm::from_offer(&offer);
    assert_eq!(form.location, "Lima");
    assert_eq!(form.to_draft(), OfferDraft::from_offer(&offer));
}
