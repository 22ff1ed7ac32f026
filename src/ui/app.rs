//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, Frame, Key, RichText, TopBottomPanel};
use tracing::{info, warn};

use super::board_view::BoardView;
use super::game_state::{GameResult, GameState};
use super::theme::*;
use crate::cli::AppConfig;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self::with_config(AppConfig::default())
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::with_config(config)
    }

    /// Window inner size for a square board area plus the status bar
    pub fn window_size(board_size: f32) -> [f32; 2] {
        [board_size, board_size + STATUS_BAR_HEIGHT]
    }

    fn with_config(config: AppConfig) -> Self {
        Self {
            state: GameState::new(config.human),
            board_view: BoardView::default(),
        }
    }

    /// `R` restarts, but only once the game is over
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(Key::R)) && self.state.request_restart() {
            info!("Game restarted");
        }
    }

    /// One-line status: whose turn, last search, messages
    fn render_status_bar(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar")
            .exact_height(STATUS_BAR_HEIGHT)
            .frame(Frame::new().fill(STATUS_BG).inner_margin(6.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let status = if self.state.game_over.is_some() {
                        "Press R to play again".to_string()
                    } else if self.state.is_ai_thinking() {
                        "AI thinking...".to_string()
                    } else {
                        format!("Your turn ({})", self.state.human)
                    };
                    ui.label(RichText::new(status).color(TEXT_PRIMARY).strong());

                    if let Some(msg) = &self.state.message {
                        ui.separator();
                        ui.label(RichText::new(msg).color(TEXT_PRIMARY));
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some(result) = &self.state.last_ai_result {
                            ui.label(
                                RichText::new(format!(
                                    "AI: {} nodes, {}ms",
                                    result.nodes, result.time_ms
                                ))
                                .color(TEXT_SECONDARY),
                            );
                        }
                    });
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_BG))
            .show(ctx, |ui| {
                let banner = self.state.game_over.map(|result| result.banner());
                let winning_line = match self.state.game_over {
                    Some(GameResult::Win { line, .. }) => Some(line),
                    _ => None,
                };

                let clicked = self.board_view.show(
                    ui,
                    &self.state.board,
                    winning_line,
                    banner.as_deref(),
                    self.state.is_human_turn() && !self.state.is_ai_thinking(),
                );

                if let Some(pos) = clicked {
                    if let Err(err) = self.state.try_place(pos) {
                        warn!(%err, %pos, "Move rejected");
                        self.state.message = Some(err.to_string());
                    }
                }
            });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Check AI result
        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_status_bar(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_leaves_room_for_status_bar() {
        assert_eq!(TicTacToeApp::window_size(600.0), [600.0, 600.0 + STATUS_BAR_HEIGHT]);
    }

    #[test]
    fn test_default_app_starts_with_human_x() {
        let app = TicTacToeApp::default();
        assert_eq!(app.state.human, crate::Mark::X);
        assert!(app.state.is_human_turn());
    }
}
