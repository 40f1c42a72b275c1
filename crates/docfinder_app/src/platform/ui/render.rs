use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use docfinder_core::{AppViewModel, ConsultationMode, DoctorRowView, SortKey};

use super::constants::HELP_LINE;
use super::layout::{self, Layout};

/// Full-frame redraw of the view model. Pure formatting: every decision
/// about what is visible was already made by the core.
pub fn render(
    out: &mut impl Write,
    view: &AppViewModel,
    facet_cursor: usize,
    fetched_at: Option<&str>,
    size: (u16, u16),
) -> io::Result<()> {
    let layout = layout::compute(size.0, size.1);
    queue!(out, Clear(ClearType::All))?;

    if view.loading {
        draw_centered(&mut *out, &layout, 0, "Loading doctors…")?;
        return out.flush();
    }
    if let Some(message) = &view.error {
        draw_centered(&mut *out, &layout, 0, message)?;
        draw_centered(&mut *out, &layout, 2, "Press F5 to retry.")?;
        return out.flush();
    }

    draw_header(&mut *out, &layout, view)?;
    draw_panel(&mut *out, &layout, view, facet_cursor)?;
    draw_list(&mut *out, &layout, view)?;
    draw_status(&mut *out, &layout, view, fetched_at)?;
    out.flush()
}

fn draw_centered(out: &mut impl Write, layout: &Layout, row_offset: u16, text: &str) -> io::Result<()> {
    let row = (layout.height / 2).saturating_add(row_offset);
    let text = clip(text, layout.width as usize);
    let col = layout.width.saturating_sub(text.chars().count() as u16) / 2;
    queue!(out, MoveTo(col, row), Print(text))
}

fn draw_header(out: &mut impl Write, layout: &Layout, view: &AppViewModel) -> io::Result<()> {
    let counts = format!("{} of {} doctors", view.visible_count, view.total_count);
    queue!(
        out,
        MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print("Docfinder"),
        SetAttribute(Attribute::Reset),
        MoveTo(layout.width.saturating_sub(counts.len() as u16), 0),
        Print(&counts),
    )?;

    let mut search_line = format!("Search: {}▏", view.search_term);
    if !view.suggestions.is_empty() {
        search_line.push_str(&format!("   Suggestions: {}", view.suggestions.join(" · ")));
    }
    queue!(
        out,
        MoveTo(0, 1),
        Print(clip(&search_line, layout.width as usize)),
        MoveTo(0, 2),
        Print("─".repeat(layout.width as usize)),
    )
}

fn draw_panel(
    out: &mut impl Write,
    layout: &Layout,
    view: &AppViewModel,
    facet_cursor: usize,
) -> io::Result<()> {
    let width = layout.panel_width as usize;
    let mut lines: Vec<String> = Vec::new();

    lines.push("Sort By".to_string());
    lines.push(format!(
        " {} Fees (Low to High)",
        radio(view.sort == SortKey::Fees)
    ));
    lines.push(format!(
        " {} Experience (High to Low)",
        radio(view.sort == SortKey::Experience)
    ));
    lines.push(String::new());

    lines.push("Mode of consultation".to_string());
    lines.push(format!(
        " {} Video Consultation",
        radio(view.mode == ConsultationMode::VideoConsult)
    ));
    lines.push(format!(
        " {} In-clinic Consultation",
        radio(view.mode == ConsultationMode::InClinic)
    ));
    lines.push(format!(" {} All", radio(view.mode == ConsultationMode::All)));
    lines.push(String::new());

    lines.push("Specialties".to_string());
    let facet_rows = (layout.body_rows as usize).saturating_sub(lines.len());
    let start = facet_window(facet_cursor, view.facets.len(), facet_rows);
    for (index, facet) in view.facets.iter().enumerate().skip(start).take(facet_rows) {
        let cursor = if index == facet_cursor { '▸' } else { ' ' };
        let mark = if facet.selected { "[x]" } else { "[ ]" };
        lines.push(format!("{cursor}{mark} {}", facet.name));
    }

    for (offset, line) in lines.iter().enumerate() {
        if offset as u16 >= layout.body_rows {
            break;
        }
        queue!(
            out,
            MoveTo(0, layout.body_top + offset as u16),
            Print(clip(line, width)),
        )?;
    }
    Ok(())
}

fn draw_list(out: &mut impl Write, layout: &Layout, view: &AppViewModel) -> io::Result<()> {
    let left = layout.list_left;
    let width = (layout.width.saturating_sub(left)) as usize;

    if view.doctors.is_empty() {
        return queue!(
            out,
            MoveTo(left, layout.body_top),
            Print("No doctors match the current filters."),
        );
    }

    let rows_per_doctor = 2;
    let visible = (layout.body_rows as usize) / rows_per_doctor;
    for (index, doctor) in view.doctors.iter().take(visible).enumerate() {
        let row = layout.body_top + (index * rows_per_doctor) as u16;
        queue!(
            out,
            MoveTo(left, row),
            SetAttribute(Attribute::Bold),
            Print(clip(&title_line(doctor), width)),
            SetAttribute(Attribute::Reset),
            MoveTo(left, row + 1),
            Print(clip(&detail_line(doctor), width)),
        )?;
    }
    Ok(())
}

fn draw_status(
    out: &mut impl Write,
    layout: &Layout,
    view: &AppViewModel,
    fetched_at: Option<&str>,
) -> io::Result<()> {
    let share = if view.share_query.is_empty() {
        "Share: (no filters)".to_string()
    } else {
        format!("Share: ?{}", view.share_query)
    };
    let share = match fetched_at {
        Some(stamp) => format!("{share}   Updated {stamp}"),
        None => share,
    };
    queue!(
        out,
        MoveTo(0, layout.status_row),
        Print(clip(&share, layout.width as usize)),
        MoveTo(0, layout.status_row + 1),
        SetAttribute(Attribute::Dim),
        Print(clip(HELP_LINE, layout.width as usize)),
        SetAttribute(Attribute::Reset),
    )
}

fn title_line(doctor: &DoctorRowView) -> String {
    if doctor.specialities.is_empty() {
        doctor.name.clone()
    } else {
        format!("{} — {}", doctor.name, doctor.specialities.join(", "))
    }
}

fn detail_line(doctor: &DoctorRowView) -> String {
    let mut parts: Vec<String> = Vec::new();
    if !doctor.experience.is_empty() {
        parts.push(doctor.experience.clone());
    }
    if !doctor.fees.is_empty() {
        parts.push(doctor.fees.clone());
    }
    if doctor.video_consult {
        parts.push("Video".to_string());
    }
    if doctor.in_clinic {
        parts.push("Clinic".to_string());
    }
    if let Some(clinic) = &doctor.clinic {
        parts.push(format!("{}, {}, {}", clinic.name, clinic.locality, clinic.city));
    }
    if !doctor.languages.is_empty() {
        parts.push(format!("Speaks: {}", doctor.languages.join(", ")));
    }
    format!("  {}", parts.join(" · "))
}

fn radio(selected: bool) -> &'static str {
    if selected {
        "(•)"
    } else {
        "( )"
    }
}

/// First row of the facet window so the cursor stays visible.
fn facet_window(cursor: usize, total: usize, rows: usize) -> usize {
    if rows == 0 || total <= rows {
        return 0;
    }
    let max_start = total - rows;
    cursor.saturating_sub(rows.saturating_sub(1)).min(max_start)
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else if width == 0 {
        String::new()
    } else {
        let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
        clipped.push('…');
        clipped
    }
}
