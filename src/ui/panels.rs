use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::ChartBinding;

const INTRO: &str = "Radiative forcing is the difference between the solar energy \
absorbed by the Earth and the energy radiated back to space, in watts per square \
metre. A system in thermal equilibrium has zero forcing; a positive value means the \
planet gains energy and warms. The chart breaks the total down into the forcing \
agents responsible for it. Some of the agents are natural, while others \
originate from human activity.";

const DEFINITIONS: [(&str, &str); 7] = [
    (
        "Albedo",
        "the fraction of incident light a surface reflects, from 0 for a perfect \
         absorber to 1 for a perfect reflector. Replacing forest with cropland raises it.",
    ),
    (
        "Stratospheric ozone",
        "absorbs energy in the stratosphere and re-emits part of it back to space.",
    ),
    (
        "Black carbon on snow",
        "soot from fossil fuels darkens ice and snow, lowering their albedo.",
    ),
    (
        "Aerosols",
        "particles with a negative contribution; they are short-lived and cannot offset \
         long-term greenhouse warming.",
    ),
    (
        "Aerosol cloud albedo effect",
        "aerosols reduce precipitation efficiency and inhibit cloud formation, letting \
         more heat escape at night.",
    ),
    (
        "Contrails",
        "ice clouds formed when engine exhaust water vapour condenses on combustion \
         particles; they insulate like natural clouds.",
    ),
    (
        "Solar irradiance",
        "natural variation of the Sun's output as measured at Earth; the only \
         non-anthropogenic agent.",
    ),
];

// ---------------------------------------------------------------------------
// Top panel – static page text
// ---------------------------------------------------------------------------

/// Heading, introduction and the collapsible definitions list.
pub fn header(ui: &mut Ui) {
    ui.heading("Radiative Forcing");
    ui.label(INTRO);

    egui::CollapsingHeader::new("Useful definitions")
        .id_salt("definitions")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            for (term, text) in DEFINITIONS {
                ui.horizontal_wrapped(|ui: &mut Ui| {
                    ui.label(RichText::new(format!("{term}:")).strong());
                    ui.label(text);
                });
            }
        });
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Left side panel – category checklist
// ---------------------------------------------------------------------------

/// What the user did with the checklist this frame.
enum ChecklistAction {
    Toggle(String),
    SelectAll,
    SelectNone,
}

/// Render the checklist of forcing agents, one checkbox per catalog entry.
pub fn side_panel(ui: &mut Ui, binding: &mut ChartBinding) {
    let n_total = binding.dataset().catalog().len();
    let n_selected = binding.selection().len();
    ui.strong(format!("Forcing agents  ({n_selected}/{n_total})"));

    let mut action = None;

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            action = Some(ChecklistAction::SelectAll);
        }
        if ui.small_button("None").clicked() {
            action = Some(ChecklistAction::SelectNone);
        }
    });
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for label in binding.dataset().catalog() {
                let mut checked = binding.is_selected(label);
                if ui.checkbox(&mut checked, label.as_str()).changed() {
                    action = Some(ChecklistAction::Toggle(label.clone()));
                }
            }
        });

    // Applied after the loop: the catalog is borrowed while drawing.
    match action {
        Some(ChecklistAction::Toggle(label)) => binding.toggle(&label),
        Some(ChecklistAction::SelectAll) => binding.select_all(),
        Some(ChecklistAction::SelectNone) => binding.select_none(),
        None => {}
    }
}

// ---------------------------------------------------------------------------
// Load failure
// ---------------------------------------------------------------------------

/// Shown in place of the chart when the dataset could not be loaded.
pub fn load_failure(ui: &mut Ui, message: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(
            RichText::new(format!("Could not load the forcing data.\n\n{message}"))
                .color(Color32::RED),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intro_mentions_natural_and_human_agents() {
        assert!(INTRO.contains("Some of the agents are natural"));
        assert!(INTRO.contains("human activity"));
    }

    #[test]
    fn solar_irradiance_is_defined() {
        assert!(DEFINITIONS.iter().any(|(term, _)| *term == "Solar irradiance"));
    }
}
