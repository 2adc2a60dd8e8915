use super::*;
use crate::remote::Method;
use crate::remote::test_helpers::ScriptedRemote;
use contracts::catalog::{ApplicationStatus, Modality};
use serde_json::json;

fn company_auth() -> Credentials {
    Credentials { token: "tok".to_owned(), company_id: Some("c1".to_owned()) }
}

fn candidate_auth() -> Credentials {
    Credentials { token: "tok".to_owned(), company_id: None }
}

fn draft() -> OfferDraft {
    OfferDraft {
        title: "Backend developer".to_owned(),
        description: "Build and operate our hiring APIs.".to_owned(),
        location: None,
        modality: Modality::Remote,
        salary: None,
    }
}

#[tokio::test]
async fn list_offers_sends_paging_and_reads_meta() {
    let remote = ScriptedRemote::new().reply(
        200,
        json!({"data": [{"id": 1, "titulo": "A"}], "meta": {"page": 2, "limit": 12, "totalPages": 3}}),
    );
    let page = list_offers(&remote, 2, 12).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total_pages, Some(3));
    assert!(page.has_more());

    let sent = &remote.requests()[0];
    assert_eq!(sent.path, "offers");
    assert_eq!(sent.query, vec![("page".to_owned(), "2".to_owned()), ("limit".to_owned(), "12".to_owned())]);
    assert!(sent.auth.is_none(), "public listing is anonymous");
}

#[tokio::test]
async fn get_offer_not_found() {
    let remote = ScriptedRemote::new().reply(404, json!({"message": "Oferta no encontrada"}));
    let err = get_offer(&remote, "99").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::NotFound);
    assert_eq!(err.message, "Oferta no encontrada");
}

#[tokio::test]
async fn ids_are_path_encoded() {
    let remote = ScriptedRemote::new().reply(200, json!({"id": "x", "title": "T"}));
    get_offer(&remote, "a/../b").await.unwrap();
    assert_eq!(remote.requests()[0].path, "offers/a%2F..%2Fb");
}

#[tokio::test]
async fn company_calls_need_an_active_company() {
    let remote = ScriptedRemote::new();
    let err = company_offers(&remote, &candidate_auth()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::NoOrganization);
    assert!(remote.requests().is_empty());
}

#[tokio::test]
async fn company_offers_forward_scope() {
    let remote = ScriptedRemote::new().reply(200, json!([{"id": 5, "title": "Ops"}]));
    let offers = company_offers(&remote, &company_auth()).await.unwrap();
    assert_eq!(offers[0].id, "5");
    let sent = &remote.requests()[0];
    assert_eq!(sent.path, "companies/c1/offers");
    assert_eq!(sent.auth, Some(company_auth()));
}

#[tokio::test]
async fn invalid_offer_draft_is_rejected_locally() {
    let remote = ScriptedRemote::new();
    let bad = OfferDraft { title: String::new(), ..draft() };
    let err = create_offer(&remote, &company_auth(), &bad).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Validation);
    assert_eq!(err.message, "Title is required.");
    assert!(remote.requests().is_empty());
}

#[tokio::test]
async fn create_offer_posts_draft() {
    let remote = ScriptedRemote::new().reply(201, json!({"data": {"id": 7, "title": "Backend developer"}}));
    let offer = create_offer(&remote, &company_auth(), &draft()).await.unwrap();
    assert_eq!(offer.id, "7");
    let sent = &remote.requests()[0];
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.body.as_ref().and_then(|b| b.get("modality")), Some(&json!("REMOTE")));
}

#[tokio::test]
async fn delete_and_status_change_ignore_body() {
    let remote = ScriptedRemote::new().reply(204, json!(null)).reply(200, json!({}));
    delete_offer(&remote, &company_auth(), "7").await.unwrap();
    change_status(&remote, &company_auth(), "3", &StatusChange { status: ApplicationStatus::Interview })
        .await
        .unwrap();
    let sent = remote.requests();
    assert_eq!(sent[0].method, Method::Delete);
    assert_eq!(sent[1].path, "applications/3");
    assert_eq!(sent[1].body, Some(json!({"status": "INTERVIEW"})));
}

#[tokio::test]
async fn remove_employee_path() {
    let remote = ScriptedRemote::new().reply(200, json!({}));
    remove_employee(&remote, &company_auth(), "e9").await.unwrap();
    assert_eq!(remote.requests()[0].path, "companies/c1/employees/e9");
}

#[tokio::test]
async fn profile_update_validates_then_patches() {
    let remote = ScriptedRemote::new().reply(200, json!({"data": {"id": 4, "perfilCompleto": true}}));
    let bad = ProfileDraft::default();
    assert_eq!(
        update_profile(&remote, &candidate_auth(), &bad).await.unwrap_err().kind,
        FailureKind::Validation
    );
    let good = ProfileDraft {
        headline: "Analyst".to_owned(),
        summary: "Five years turning messy spreadsheets into reports.".to_owned(),
        phone: "987654321".to_owned(),
        skills: vec!["SQL".to_owned()],
    };
    let profile = update_profile(&remote, &candidate_auth(), &good).await.unwrap();
    assert!(profile.profile_complete);
    assert_eq!(remote.requests().len(), 1);
}

#[tokio::test]
async fn undecodable_body_is_invalid_data() {
    let remote = ScriptedRemote::new().reply(200, json!({"data": 12}));
    let err = my_profile(&remote, &candidate_auth()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidData);
}
