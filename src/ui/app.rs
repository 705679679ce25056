//! Main application for the Ataxx GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::{Outcome, Side};
use super::board_view::BoardView;
use super::game_state::{GameMode, GameState};
use super::theme::*;

/// Main Ataxx application
pub struct AtaxxApp {
    state: GameState,
    board_view: BoardView,
    /// Seed handed to every new game's AI
    seed: u64,
    move_input: String,
}

impl AtaxxApp {
    /// Create a new app whose AI is seeded with `seed`
    pub fn new(_cc: &eframe::CreationContext<'_>, seed: u64) -> Self {
        Self {
            state: GameState::new(GameMode::default(), seed),
            board_view: BoardView::default(),
            seed,
            move_input: String::new(),
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        self.state = GameState::new(mode, self.seed);
        self.move_input.clear();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    let modes = [
                        GameMode::PvE { human: Side::Red },
                        GameMode::PvE { human: Side::Blue },
                        GameMode::PvP,
                        GameMode::AiVsAi,
                    ];
                    for mode in modes {
                        if ui.button(format!("New Game ({})", mode.label())).clicked() {
                            self.new_game(mode);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.state.mode.label());
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);
                ui.add_space(10.0);

                self.render_ai_card(ui);

                if let Some(outcome) = self.state.outcome() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●").size(20.0).color(RED_PIECE));
            ui.label(RichText::new("●").size(20.0).color(BLUE_PIECE));
            ui.add_space(4.0);
            ui.label(RichText::new("ATAXX").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let side = self.state.current_turn();

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, side_color(side));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(side.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_game_over() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else if self.state.awaiting_start() {
                        ("Setup: block cells, then Start", TEXT_SECONDARY)
                    } else if self.state.must_pass() {
                        ("No moves left: pass", TIMER_WARNING)
                    } else if self.state.is_ai_turn() {
                        ("AI to move", TIMER_WARNING)
                    } else if self.state.board.in_setup() {
                        ("Setup: click empty cells to block", TEXT_SECONDARY)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                    let elapsed = self.state.move_timer.elapsed();
                    ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(11.0).color(TEXT_MUTED));
                });
            });
        });
    }

    /// Render score card with piece counts
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            for side in [Side::Red, Side::Blue] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("●").size(18.0).color(side_color(side)));
                    ui.label(RichText::new(side.name()).size(13.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let count = self.state.board.count(side);
                        ui.label(RichText::new(count.to_string()).size(16.0).strong().color(TEXT_PRIMARY));
                    });
                });
            }

            ui.add_space(6.0);
            ui.label(RichText::new(self.state.board.status()).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Render actions card: undo, pass and typed moves
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if self.state.awaiting_start() && ui.button("▶ Start").clicked() {
                    self.state.start();
                }
                if ui.button("↩ Undo").clicked() {
                    self.state.undo();
                }
                if ui.button("Pass").clicked() {
                    if let Err(msg) = self.state.pass() {
                        self.state.message = Some(msg);
                    }
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let edit = ui.add(egui::TextEdit::singleline(&mut self.move_input).hint_text("c2-d3").desired_width(90.0));
                let entered = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if (ui.button("Play").clicked() || entered) && !self.move_input.trim().is_empty() {
                    match self.state.submit_notation(&self.move_input) {
                        Ok(()) => self.move_input.clear(),
                        Err(msg) => self.state.message = Some(msg),
                    }
                }
            });

            ui.add_space(8.0);
            ui.label(RichText::new(format!("Move #{}", self.state.move_history.len())).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Render the last AI decision
    fn render_ai_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("LAST AI MOVE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = self.state.last_ai_result() else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("→ {}", result.best_move)).size(14.0).strong().color(WIN_HIGHLIGHT));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                });
            });
            let score = result.score.map_or_else(|| "-".to_string(), |s| s.to_string());
            ui.label(RichText::new(format!("Score: {score}")).size(10.0).color(TEXT_SECONDARY));
            ui.label(
                RichText::new(format!("{} candidates, {} tied", result.candidates, result.tied))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);

                    let (headline, accent) = match outcome {
                        Outcome::Winner(side) => (format!("{} WINS!", side.name().to_uppercase()), side_color(side)),
                        Outcome::Draw => ("DRAW".to_string(), TEXT_PRIMARY),
                    };
                    ui.label(RichText::new(headline).size(18.0).strong().color(accent));
                    ui.add_space(4.0);
                    ui.label(RichText::new(self.state.board.score()).size(11.0).color(TEXT_SECONDARY));

                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.new_game(self.state.mode);
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accept_input =
                !self.state.is_game_over() && (self.state.is_human_turn() || self.state.board.in_setup());
            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.selected,
                self.state.last_move,
                &self.state.last_captures,
                accept_input,
            );

            if let Some(sq) = clicked {
                if let Err(msg) = self.state.click(sq) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // Typing a move must not trigger shortcuts.
        if ctx.wants_keyboard_input() {
            return;
        }
        let (undo, new_game) = ctx.input(|i| (i.key_pressed(egui::Key::U), i.key_pressed(egui::Key::N)));
        if undo {
            self.state.undo();
        }
        if new_game {
            self.state.reset();
        }
    }
}

impl eframe::App for AtaxxApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        if self.state.ai_due() {
            if let Err(msg) = self.state.play_ai_turn() {
                self.state.message = Some(msg);
            }
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep the timer running and wake up for the AI
        if !self.state.is_game_over() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
