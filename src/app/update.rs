//! Per-frame update logic for [`LiveBarApp`].
//!
//! `eframe::App::update` is the render pass. The merge pass (first paint,
//! slot drain, color re-application, redraw) runs first through
//! [`FrameSync::on_frame`](crate::frame::FrameSync::on_frame); only then is
//! the UI rendered from the resulting model state.

use eframe::egui;

use crate::color::BarColor;
use crate::model::{BarChart, BarModel};

use super::LiveBarApp;

impl eframe::App for LiveBarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Data first, then paint.
        self.sync.on_frame(
            &mut self.lifecycle,
            &self.pending,
            self.bar_color,
            || BarChart::new(BarModel::new(&*self.series_name, &self.seed, self.bar_color)),
        );

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(headline) = &self.headline {
                ui.heading(headline);
            }

            ui.horizontal(|ui| {
                ui.label("Bar color:");
                egui::ComboBox::from_id_salt("livebar_color")
                    .selected_text(self.bar_color.label())
                    .show_ui(ui, |ui| {
                        for &color in BarColor::all() {
                            ui.selectable_value(&mut self.bar_color, color, color.label());
                        }
                    });
            });

            if let Some(chart) = self.lifecycle.chart() {
                draw_bars(ui, &chart.model);
            }
        });

        // A color picked from the dropdown is only applied by the *next*
        // frame's merge pass; keep frames coming even without input events.
        ctx.request_repaint();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.teardown();
    }
}

/// Paint the model with egui_plot. Pure presentation: reads the model, never
/// mutates it.
fn draw_bars(ui: &mut egui::Ui, model: &BarModel) {
    use egui_plot::{Bar, Legend, Plot};

    let charts: Vec<egui_plot::BarChart> = model
        .series
        .iter()
        .map(|series| {
            let bars: Vec<Bar> = model
                .labels
                .iter()
                .zip(&series.data)
                .map(|(&label, &value)| Bar::new(label as f64, value).name(label.to_string()))
                .collect();
            egui_plot::BarChart::new(&series.name, bars).color(series.color.color32())
        })
        .collect();

    Plot::new("livebar_plot")
        .legend(Legend::default())
        .x_axis_formatter(|x, _range| format!("{:.0}", x.value))
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}
