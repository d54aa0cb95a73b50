use crate::args::EntryList;
use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    AuthorViewModel, CommandResultViewModel, CountryViewModel, DraftSavedViewModel,
    EntryRemovedViewModel, Guidance, ImageAttachedViewModel, ImageRemovedViewModel, MoveSummary,
    OrderRowViewModel, OrderViewModel, ReadableSectionViewModel, ReportDeletedViewModel, ReportDetailViewModel, StatusBadge,
    TemplateSectionViewModel, TemplateViewModel,
};
use relato_sdk::types::{
    Country, OrderView, Report, ReportDetail, ReportId, flag_emoji, format_age_months, season_badge,
};
use relato_sdk::{DraftResult, ReportTemplate};

pub(crate) fn country_views(countries: &[Country]) -> Vec<CountryViewModel> {
    countries
        .iter()
        .map(|c| CountryViewModel {
            code: c.code.clone(),
            name: c.name.clone(),
        })
        .collect()
}

pub fn present_template(template: ReportTemplate) -> CommandResultViewModel<TemplateViewModel> {
    let sections = template
        .sections
        .into_iter()
        .map(|s| TemplateSectionViewModel {
            key: s.key.to_string(),
            title: s.title,
            visible: s.visible,
            fixed: s.fixed,
            placeholder: s.placeholder.to_string(),
        })
        .collect();

    CommandResultViewModel::new(TemplateViewModel {
        sections,
        min_completed_sections: template.min_completed_sections,
    })
    .with_suggestion(
        Guidance::new("Write a draft file with [sections.<key>] tables, then create it")
            .with_command(cmd::REPORT_CREATE),
    )
}

pub fn present_draft_saved(
    result: DraftResult,
    created: bool,
) -> CommandResultViewModel<DraftSavedViewModel> {
    let id = result.id.to_string();
    let label = if created {
        "Report published"
    } else {
        "Report updated"
    };

    let badge = if result.ignored.is_empty() {
        StatusBadge::success(label)
    } else {
        StatusBadge::warning(format!(
            "{} ({} draft entries ignored)",
            label,
            result.ignored.len()
        ))
    };

    CommandResultViewModel::new(DraftSavedViewModel {
        id: id.clone(),
        created,
        ignored: result.ignored,
    })
    .with_badge(badge)
    .with_suggestion(Guidance::new("Read it").with_command(fmt::report_show(&id)))
    .with_suggestion(Guidance::new("Rearrange sections").with_command(fmt::report_order(&id)))
}

pub fn present_report_detail(
    detail: ReportDetail,
) -> CommandResultViewModel<ReportDetailViewModel> {
    let ReportDetail {
        report,
        cover,
        sections,
    } = detail;
    let author = report.user;
    let report = report.report;
    let id = report.id.to_string();

    let view = ReportDetailViewModel {
        id: id.clone(),
        title: report.title.clone(),
        author: AuthorViewModel {
            id: author.id.to_string(),
            name: author.name,
            avatar_url: author.avatar_url,
        },
        countries: country_views(&report.countries),
        month: report.month.map(|m| m.name().to_string()),
        season: report.season.map(|s| s.name().to_string()),
        season_emoji: season_badge(report.season, report.season_emoji.as_deref()).to_string(),
        child_ages_months: report.child_ages.clone(),
        locations: report.locations.clone(),
        view_count: report.view_count,
        created_at: report.created_at,
        cover,
        sections: sections
            .into_iter()
            .map(|s| ReadableSectionViewModel {
                key: s.key.to_string(),
                title: s.title,
                content: s.content,
                gallery: s.gallery,
            })
            .collect(),
    };

    CommandResultViewModel::new(view)
        .with_suggestion(Guidance::new("Like it").with_command(fmt::like(&id)))
        .with_suggestion(Guidance::new("Save it for later").with_command(fmt::save(&id)))
}

pub fn present_order(
    id: &ReportId,
    view: OrderView,
    moved: Option<(usize, usize)>,
) -> CommandResultViewModel<OrderViewModel> {
    let report_id = id.to_string();
    let (rows, message) = match view {
        OrderView::Rows { rows } => (
            rows.into_iter()
                .enumerate()
                .map(|(position, row)| OrderRowViewModel {
                    position,
                    key: row.key.to_string(),
                    label: row.label,
                    visible: row.visible,
                })
                .collect(),
            None,
        ),
        OrderView::Empty { message } => (Vec::new(), Some(message.to_string())),
    };

    let mut result = CommandResultViewModel::new(OrderViewModel {
        report_id: report_id.clone(),
        rows,
        message,
        moved: moved.map(|(from, to)| MoveSummary { from, to }),
    });

    result = match moved {
        Some((from, to)) if from == to => {
            result.with_badge(StatusBadge::info("Section already in that position"))
        }
        Some((from, to)) => result.with_badge(StatusBadge::success(format!(
            "Moved section {} to position {}",
            from, to
        ))),
        None => result.with_suggestion(
            Guidance::new("Drag a section to a new position")
                .with_command(fmt::report_move(&report_id)),
        ),
    };
    result
}

pub fn present_image_attached(
    id: &ReportId,
    section: &str,
    url: String,
) -> CommandResultViewModel<ImageAttachedViewModel> {
    CommandResultViewModel::new(ImageAttachedViewModel {
        report_id: id.to_string(),
        section: section.to_string(),
        url,
    })
    .with_badge(StatusBadge::success(format!("Image added to {}", section)))
    .with_suggestion(
        Guidance::new("Remove an image")
            .with_command(fmt::report_detach(&id.to_string(), section)),
    )
}

pub fn present_image_removed(
    id: &ReportId,
    section: &str,
    remaining: Vec<String>,
) -> CommandResultViewModel<ImageRemovedViewModel> {
    CommandResultViewModel::new(ImageRemovedViewModel {
        report_id: id.to_string(),
        section: section.to_string(),
        remaining,
    })
    .with_badge(StatusBadge::success(format!("Image removed from {}", section)))
    .with_suggestion(
        Guidance::new("Add another image").with_command(fmt::report_attach(&id.to_string())),
    )
}

pub fn present_entry_removed(
    report: &Report,
    list: EntryList,
    index: usize,
) -> CommandResultViewModel<EntryRemovedViewModel> {
    let remaining = match list {
        EntryList::Country => report
            .countries
            .iter()
            .map(|c| match flag_emoji(&c.code) {
                Some(flag) => format!("{} {}", flag, c.name),
                None => c.name.clone(),
            })
            .collect(),
        EntryList::ChildAge => report
            .child_ages
            .iter()
            .map(|months| format_age_months(*months))
            .collect(),
        EntryList::Location => report.locations.clone(),
    };

    CommandResultViewModel::new(EntryRemovedViewModel {
        report_id: report.id.to_string(),
        list: list.as_str().to_string(),
        index,
        remaining,
    })
    .with_badge(StatusBadge::success(format!("Removed {} {}", list.as_str(), index)))
    .with_suggestion(
        Guidance::new("Review the report").with_command(fmt::report_show(&report.id.to_string())),
    )
}

pub fn present_report_deleted(id: &ReportId) -> CommandResultViewModel<ReportDeletedViewModel> {
    CommandResultViewModel::new(ReportDeletedViewModel { id: id.to_string() })
        .with_badge(StatusBadge::success("Report deleted"))
        .with_suggestion(Guidance::new("Your remaining reports").with_command(cmd::PROFILE_SHOW))
}
