use crate::presentation::view_models::CountryViewModel;
use relato_sdk::types::{flag_emoji, format_age_months};

/// "🇵🇹 Portugal, 🇪🇸 Espanha"; countries without a valid code show the name only
pub fn countries_line(countries: &[CountryViewModel]) -> String {
    countries
        .iter()
        .map(|c| match flag_emoji(&c.code) {
            Some(flag) => format!("{} {}", flag, c.name),
            None => c.name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// "4 years, 1 year and 6 months"
pub fn child_ages_line(ages_months: &[u32]) -> String {
    ages_months
        .iter()
        .map(|m| format_age_months(*m))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Collapse whitespace so multi-line content fits one row
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countries_line_with_flags() {
        let countries = vec![
            CountryViewModel {
                code: "PT".to_string(),
                name: "Portugal".to_string(),
            },
            CountryViewModel {
                code: "".to_string(),
                name: "Atlântida".to_string(),
            },
        ];
        assert_eq!(countries_line(&countries), "🇵🇹 Portugal, Atlântida");
    }

    #[test]
    fn test_child_ages_line() {
        assert_eq!(child_ages_line(&[48, 18]), "4 years, 1 year and 6 months");
        assert_eq!(child_ages_line(&[]), "");
    }

    #[test]
    fn test_single_line_collapses_whitespace() {
        assert_eq!(single_line("Dez dias\n\nem  Lisboa "), "Dez dias em Lisboa");
    }
}
