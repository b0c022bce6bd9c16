use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{SessionSnapshot, UiEvent},
    orchestration::dispatch_backend_command,
};

const CELL_SIZE: f32 = 84.0;
const MARKER_TEXT_SIZE: f32 = 40.0;

pub struct GridGameApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    snapshot: SessionSnapshot,
    /// Bridge status line, separate from the game message.
    status: String,
    backend_failed: bool,
}

impl GridGameApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            snapshot: SessionSnapshot::default(),
            status: "Loading game...".to_string(),
            backend_failed: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => self.status = message,
                UiEvent::Fatal(message) => {
                    self.status = message;
                    self.backend_failed = true;
                }
                UiEvent::Snapshot(snapshot) => self.snapshot = snapshot,
            }
        }
    }

    fn queue(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
    }

    fn show_board(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;
        egui::Grid::new("game_board")
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for row in self.snapshot.board.rows() {
                    for cell in row {
                        let label = egui::RichText::new(cell.text).size(MARKER_TEXT_SIZE);
                        let button =
                            egui::Button::new(label).min_size(egui::vec2(CELL_SIZE, CELL_SIZE));
                        if ui.add_enabled(cell.clickable, button).clicked() {
                            clicked = Some((cell.row, cell.col));
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some((row, col)) = clicked {
            self.queue(BackendCommand::Click { row, col });
        }
    }
}

impl eframe::App for GridGameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.small(self.status.as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Grid Game");
                if let Some(turn) = &self.snapshot.turn {
                    ui.label(turn.as_str());
                }
                ui.add_space(8.0);
                self.show_board(ui);
                ui.add_space(8.0);
                if !self.snapshot.message.is_empty() {
                    ui.label(egui::RichText::new(&self.snapshot.message).strong());
                }
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let enabled = !self.backend_failed;
                    if ui.add_enabled(enabled, egui::Button::new("Reset")).clicked() {
                        self.queue(BackendCommand::Reset);
                    }
                    if ui
                        .add_enabled(enabled, egui::Button::new("Refresh"))
                        .on_hover_text("Refetch the game; a server that resets on fetch starts a new one")
                        .clicked()
                    {
                        self.queue(BackendCommand::Refresh);
                    }
                });
            });
        });

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
