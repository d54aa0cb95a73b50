use chrono::{DateTime, Utc};
use relato_types::{Report, ReportId, Section, SectionKey, SectionOrder, SectionSet, UserId};
use std::collections::BTreeMap;

/// Template entry: (key, title, visible, fixed)
type TemplateEntry = (&'static str, &'static str, bool, bool);

/// Sections every new report starts with, in their initial display order.
///
/// `resumo` and `outros` are free-form (editable title); the five topics in
/// between are fixed.
pub const REPORT_TEMPLATE: [TemplateEntry; 7] = [
    ("resumo", "Resumo do roteiro", true, false),
    ("transporte_aereo", "Transporte Aéreo", false, true),
    ("hospedagem", "Hospedagem", false, true),
    ("alimentacao", "Alimentação", false, true),
    ("passeios", "Passeios", false, true),
    ("transporte_interno", "Transporte Interno", false, true),
    ("outros", "Outros", false, false),
];

/// Build an empty draft owned by `user_id`.
pub fn new_draft(user_id: UserId, now: DateTime<Utc>) -> Report {
    let sections: SectionSet = REPORT_TEMPLATE
        .iter()
        .map(|(key, title, visible, fixed)| {
            (SectionKey::from(*key), Section::new(*title, *visible, *fixed))
        })
        .collect();

    let order = SectionOrder::new(
        REPORT_TEMPLATE
            .iter()
            .map(|(key, ..)| SectionKey::from(*key))
            .collect(),
    );

    Report {
        id: ReportId::new(),
        title: String::new(),
        countries: Vec::new(),
        month: None,
        season: None,
        season_emoji: None,
        child_ages: Vec::new(),
        locations: Vec::new(),
        sections,
        section_order: order,
        visibility: BTreeMap::new(),
        user_id,
        created_at: now,
        view_count: 0,
        resumo_image: None,
        images: None,
    }
}

/// Writing prompt shown in an empty section body
pub fn placeholder(key: &str) -> &'static str {
    match key {
        "resumo" => {
            "Give an overview of the itinerary: how many days, the highlights, how it went, \
             and whether you used an agency or planned it yourselves. You can rename this section."
        }
        "transporte_aereo" => {
            "How was the flight? Which airline? Did you bring anything to keep the kids busy?"
        }
        "hospedagem" => {
            "Where did you stay? Hotel, rental, guesthouse: rating, location, value for money."
        }
        "alimentacao" => "Restaurants, local food, options for children, where to eat well.",
        "passeios" => "Which tours did you take? Places, tickets, duration, recommendations.",
        "transporte_interno" => {
            "How did you get around? Car rental, public transport, ride apps, safety."
        }
        "outros" => {
            "Anything else worth knowing: travel insurance, weather, surprises, curiosities. \
             You can rename this section."
        }
        _ => "Tell us about this part of the trip...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_has_seven_ordered_sections() {
        let draft = new_draft(UserId::new(), Utc::now());

        assert_eq!(draft.sections.len(), 7);
        let order: Vec<&str> = draft.section_order.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "resumo",
                "transporte_aereo",
                "hospedagem",
                "alimentacao",
                "passeios",
                "transporte_interno",
                "outros"
            ]
        );
    }

    #[test]
    fn test_only_summary_starts_visible() {
        let draft = new_draft(UserId::new(), Utc::now());
        let visible: Vec<&str> = draft
            .sections
            .iter()
            .filter(|(_, s)| s.visible)
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(visible, vec!["resumo"]);
    }

    #[test]
    fn test_free_form_sections_are_not_fixed() {
        let draft = new_draft(UserId::new(), Utc::now());
        assert!(!draft.sections.get("resumo").unwrap().fixed);
        assert!(!draft.sections.get("outros").unwrap().fixed);
        assert!(draft.sections.get("hospedagem").unwrap().fixed);
    }

    #[test]
    fn test_placeholder_falls_back_for_unknown_keys() {
        assert!(placeholder("passeios").contains("tours"));
        assert_eq!(placeholder("custom"), "Tell us about this part of the trip...");
    }
}
