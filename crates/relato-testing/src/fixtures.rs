//! Draft files and sample images.

/// Smallest byte sequence that starts like a JPEG file
pub const SAMPLE_JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0xFF, 0xD9];

/// Only the summary is written: not enough to save
pub const SUMMARY_ONLY_DRAFT: &str = r#"
title = "Fim de semana no Porto"

[[countries]]
code = "PT"
name = "Portugal"

[sections.resumo]
content = "Dois dias curtos no Porto com as crianças."
"#;

/// Summary, lodging and food written and visible: exactly enough to save
pub const THREE_SECTION_DRAFT: &str = r#"
title = "Lisboa em família"
month = "Março"
season = "Primavera"
locations = ["Alfama", "Belém"]

[[countries]]
code = "PT"
name = "Portugal"

[[child_ages]]
value = 4
unit = "years"

[[child_ages]]
value = 18
unit = "months"

[sections.resumo]
content = "Dez dias entre Lisboa e Sintra."

[sections.hospedagem]
visible = true
content = "Apartamento em Alfama, perto do elétrico 28."

[sections.alimentacao]
visible = true
content = "Pastéis de Belém todos os dias."
"#;

/// Draft with the given title and country, otherwise like [`THREE_SECTION_DRAFT`]
pub fn draft_for(title: &str, country_code: &str, country_name: &str) -> String {
    format!(
        r#"
title = "{title}"

[[countries]]
code = "{country_code}"
name = "{country_name}"

[sections.resumo]
content = "Resumo de {title}."

[sections.hospedagem]
visible = true
content = "Hotel em {title}."

[sections.alimentacao]
visible = true
content = "Comida em {title}."
"#
    )
}
