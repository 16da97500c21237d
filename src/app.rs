use eframe::egui;

use crate::color::WaterfallStyle;
use crate::state::ChartBinding;
use crate::ui::{panels, plot};

/// What the window shows: the interactive chart, or why there is none.
pub enum ViewerState {
    Ready(ChartBinding),
    LoadFailed(String),
}

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ForcingApp {
    pub state: ViewerState,
    style: WaterfallStyle,
}

impl ForcingApp {
    pub fn new(state: ViewerState) -> Self {
        Self {
            state,
            style: WaterfallStyle::default(),
        }
    }
}

impl eframe::App for ForcingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: page text ----
        egui::TopBottomPanel::top("page_header").show(ctx, |ui| {
            panels::header(ui);
        });

        match &mut self.state {
            ViewerState::Ready(binding) => {
                // ---- Left side panel: checklist ----
                egui::SidePanel::left("agent_checklist")
                    .default_width(220.0)
                    .resizable(true)
                    .show(ctx, |ui| {
                        panels::side_panel(ui, binding);
                    });

                // ---- Central panel: waterfall ----
                egui::CentralPanel::default().show(ctx, |ui| {
                    plot::waterfall_plot(ui, binding.current_chart_spec(), &self.style);
                });
            }
            ViewerState::LoadFailed(message) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    panels::load_failure(ui, message);
                });
            }
        }
    }
}
