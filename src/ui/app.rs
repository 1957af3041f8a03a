//! Main application for the tic-tac-toe window

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use tracing::warn;

use super::board_view::BoardView;
use super::theme::*;
use crate::{
    AiConfig, Command, Difficulty, Evaluation, GameMode, Mark, Outcome, TurnController,
};

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: TurnController,
    board_view: BoardView,
    show_debug: bool,
    message: Option<String>,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, mode: GameMode, config: AiConfig) -> Self {
        Self {
            state: TurnController::new(mode, config),
            board_view: BoardView::default(),
            show_debug: true,
            message: None,
        }
    }

    fn run(&mut self, command: Command) {
        match self.state.dispatch(command) {
            Ok(()) => self.message = None,
            Err(err) => {
                warn!(?command, %err, "command rejected");
                self.message = Some(err.to_string());
            }
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (R)").clicked() {
                        self.run(Command::Reset);
                        ui.close_menu();
                    }
                    if ui.button("Toggle Mode (G)").clicked() {
                        self.run(Command::ToggleMode);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("AI Plays Cross").clicked() {
                        self.run(Command::SetAiPlayer(Mark::Cross));
                        ui.close_menu();
                    }
                    if ui.button("AI Plays Circle").clicked() {
                        self.run(Command::SetAiPlayer(Mark::Circle));
                        ui.close_menu();
                    }
                });

                ui.menu_button("AI", |ui| {
                    if ui.button("Random (0)").clicked() {
                        self.run(Command::SetDifficulty(Difficulty::Random));
                        ui.close_menu();
                    }
                    if ui.button("Optimal (1)").clicked() {
                        self.run(Command::SetDifficulty(Difficulty::Optimal));
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode() {
                        GameMode::PvE => "Human vs AI",
                        GameMode::PvP => "Human vs Human",
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("TIC TAC TOE AI").size(20.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_config_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    ui.label(RichText::new(format!("⚠ {}", msg)).size(11.0).color(LAST_MOVE_MARKER));
                }
            });
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (headline, color) = match self.state.outcome() {
                Outcome::Win(winner) => (format!("{} WINS", mark_name(winner)), WIN_HIGHLIGHT),
                Outcome::Draw => ("DRAW".to_string(), WIN_HIGHLIGHT),
                Outcome::Ongoing => {
                    let who = mark_name(self.state.current_player());
                    if self.state.is_ai_turn() {
                        (format!("{} (AI) to move", who), STATUS_OK)
                    } else {
                        (format!("{} to move", who), STATUS_OK)
                    }
                }
            };
            ui.label(RichText::new(headline).size(16.0).strong().color(color));
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
            if self.state.is_over() {
                ui.label(RichText::new("Press R for a new game").size(11.0).color(TEXT_MUTED));
            }
        });
    }

    fn render_config_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let config = self.state.ai_config();
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.label(RichText::new(format!("Level: {:?}", config.difficulty)).size(12.0).color(TEXT_PRIMARY));
            ui.label(RichText::new(format!("Plays: {}", mark_name(config.player))).size(12.0).color(TEXT_PRIMARY));
            ui.add_space(6.0);
            ui.label(RichText::new("G mode · R reset · 0/1 level").size(10.0).color(TEXT_MUTED));
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match self.state.last_ai_result() {
                Some(result) => {
                    let eval = match result.evaluation {
                        Evaluation::Random => "random".to_string(),
                        Evaluation::Score(score) => format!("{:+}", score),
                    };
                    ui.label(RichText::new(format!("{:?}", result.search_type)).size(11.0).strong().color(STATUS_OK));
                    ui.label(RichText::new(format!("Eval: {}", eval)).size(10.0).color(TEXT_SECONDARY));
                    ui.label(
                        RichText::new(format!("{} nodes · {}ms", result.nodes, result.time_ms))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.label(RichText::new(format!("→ {}", result.best_move)).size(12.0).strong().color(WIN_HIGHLIGHT));
                }
                None => {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let clicked = self.board_view.show(
                ui,
                self.state.board(),
                self.state.last_move(),
                self.state.winning_line(),
                self.state.is_over(),
            );

            if let Some(pos) = clicked {
                if !self.state.is_ai_turn() {
                    self.run(Command::Place {
                        row: pos.row as i32,
                        col: pos.col as i32,
                    });
                }
            }
        });
    }

    /// Map key presses to commands
    fn handle_input(&mut self, ctx: &Context) {
        let mut commands = Vec::new();
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::G) {
                commands.push(Command::ToggleMode);
            }
            if i.key_pressed(egui::Key::R) {
                commands.push(Command::Reset);
            }
            if i.key_pressed(egui::Key::Num0) {
                commands.push(Command::SetDifficulty(Difficulty::Random));
            }
            if i.key_pressed(egui::Key::Num1) {
                commands.push(Command::SetDifficulty(Difficulty::Optimal));
            }
        });

        for command in commands {
            self.run(command);
        }
    }
}

fn mark_name(mark: Mark) -> &'static str {
    match mark {
        Mark::Cross => "CROSS",
        Mark::Circle => "CIRCLE",
        Mark::Empty => "-",
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // The search finishes well within a frame, so the AI moves inline
        if let Err(err) = self.state.play_ai_turn() {
            warn!(%err, "AI turn failed");
            self.message = Some(err.to_string());
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_turn() {
            ctx.request_repaint();
        }
    }
}
