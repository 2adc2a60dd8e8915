use super::*;
use contracts::catalog::Modality;

fn offer() -> Offer {
    Offer {
        id: "1".to_owned(),
        title: "Rust developer".to_owned(),
        description: "Build services".to_owned(),
        location: Some("Bogotá".to_owned()),
        modality: Modality::Remote,
        company_name: Some("Acme".to_owned()),
        salary: None,
        published_at: None,
        active: true,
    }
}

#[test]
fn meta_line_skips_missing_parts() {
    let mut offer = offer();
    assert_eq!(offer_meta_line(&offer), format!("Acme · Bogotá · {}", Modality::Remote.label()));
    offer.company_name = None;
    offer.location = Some("  ".to_owned());
    assert_eq!(offer_meta_line(&offer), Modality::Remote.label());
}

#[test]
fn excerpt_cuts_on_char_boundary() {
    assert_eq!(excerpt("  short  ", 10), "short");
    assert_eq!(excerpt("ñandú corre", 5), "ñandú…");
}
