use super::*;
use serde_json::json;

fn offer_draft() -> OfferDraft {
    OfferDraft {
        title: "Backend developer".to_owned(),
        description: "Build and operate our hiring APIs.".to_owned(),
        location: Some("Lima".to_owned()),
        modality: Modality::Hybrid,
        salary: None,
    }
}

fn profile_draft() -> ProfileDraft {
    ProfileDraft {
        headline: "Data analyst".to_owned(),
        summary: "Five years turning messy spreadsheets into reports.".to_owned(),
        phone: "+51 987-654-321".to_owned(),
        skills: vec!["SQL".to_owned()],
    }
}

#[test]
fn offer_decodes_spanish_payload() {
    let offer: Offer = serde_json::from_value(json!({
        "id": 3,
        "titulo": "Analista",
        "descripcion": "Analizar datos",
        "modalidad": "REMOTO",
        "empresaNombre": "Acme"
    }))
    .unwrap();
    assert_eq!(offer.id, "3");
    assert_eq!(offer.title, "Analista");
    assert_eq!(offer.modality, Modality::Remote);
    assert_eq!(offer.company_name.as_deref(), Some("Acme"));
    assert!(offer.active, "offers default to active");
}

#[test]
fn offer_draft_requires_title_and_description() {
    assert!(offer_draft().validate().is_ok());
    let blank = OfferDraft { title: "  ".into(), ..offer_draft() };
    assert_eq!(blank.validate(), Err(DraftError::Missing("Title")));
    let short = OfferDraft { description: "Too short".into(), ..offer_draft() };
    assert_eq!(short.validate(), Err(DraftError::TooShort { field: "Description", min: MIN_DESCRIPTION_LEN }));
}

#[test]
fn offer_draft_caps_title_length() {
    let long = OfferDraft { title: "x".repeat(MAX_TITLE_LEN + 1), ..offer_draft() };
    assert_eq!(long.validate(), Err(DraftError::TooLong { field: "Title", max: MAX_TITLE_LEN }));
}

#[test]
fn offer_draft_serializes_camel_case_without_empty_options() {
    let body = serde_json::to_value(offer_draft()).unwrap();
    assert_eq!(
        body,
        json!({"title": "Backend developer", "description": "Build and operate our hiring APIs.", "location": "Lima", "modality": "HYBRID"})
    );
}

#[test]
fn modality_codes_match_serde() {
    for modality in Modality::ALL {
        assert_eq!(serde_json::to_value(modality).unwrap(), json!(modality.code()));
        assert_eq!(Modality::from_code(modality.code()), Some(modality));
    }
}

#[test]
fn application_status_accepts_spanish_codes_and_keeps_unknown() {
    let status: ApplicationStatus = serde_json::from_value(json!("ENTREVISTA")).unwrap();
    assert_eq!(status, ApplicationStatus::Interview);
    let other: ApplicationStatus = serde_json::from_value(json!("ON_HOLD")).unwrap();
    assert_eq!(serde_json::to_value(other).unwrap(), json!("ON_HOLD"));
}

#[test]
fn applicant_decodes_with_aliases() {
    let applicant: Applicant = serde_json::from_value(json!({
        "id": 10, "candidatoId": 4, "nombre": "Luis", "estado": "PENDIENTE"
    }))
    .unwrap();
    assert_eq!(applicant.candidate_id.as_deref(), Some("4"));
    assert_eq!(applicant.status, ApplicationStatus::Pending);
}

#[test]
fn employee_draft_checks_email() {
    let mut draft = EmployeeDraft { name: "Eva".into(), email: "eva@acme.com".into(), ..EmployeeDraft::default() };
    assert!(draft.validate().is_ok());
    draft.email = "eva".into();
    assert_eq!(draft.validate(), Err(DraftError::InvalidEmail));
    draft.name = String::new();
    assert_eq!(draft.validate(), Err(DraftError::Missing("Name")));
}

#[test]
fn profile_draft_rules() {
    assert!(profile_draft().validate().is_ok());
    let bad_phone = ProfileDraft { phone: "12ab".into(), ..profile_draft() };
    assert_eq!(bad_phone.validate(), Err(DraftError::InvalidPhone));
    let no_skills = ProfileDraft { skills: vec!["  ".into()], ..profile_draft() };
    assert_eq!(no_skills.validate(), Err(DraftError::Missing("Skills")));
    let short_summary = ProfileDraft { summary: "Hi".into(), ..profile_draft() };
    assert_eq!(
        short_summary.validate(),
        Err(DraftError::TooShort { field: "Summary", min: MIN_SUMMARY_LEN })
    );
}

#[test]
fn parse_skills_trims_and_dedupes() {
    assert_eq!(parse_skills(" Rust, sql ,, SQL, Go "), vec!["Rust", "sql", "Go"]);
}
