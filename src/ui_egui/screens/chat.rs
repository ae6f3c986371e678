use egui::{Align, Color32, Layout, RichText};

use super::ScreenAction;
use crate::models::intake::{Message, Speaker};

const CLIENT_BUBBLE: Color32 = Color32::BLACK;
const ASSISTANT_BUBBLE: Color32 = Color32::from_rgb(244, 244, 245);

fn render_bubble(ui: &mut egui::Ui, message: &Message, show_avatar: bool) {
    let max_width = ui.available_width() * 0.75;
    let (layout, fill, text_color) = match message.from {
        Speaker::Client => (Layout::right_to_left(Align::Max), CLIENT_BUBBLE, Color32::WHITE),
        Speaker::Assistant => (Layout::left_to_right(Align::Max), ASSISTANT_BUBBLE, Color32::BLACK),
    };

    ui.with_layout(layout, |ui| {
        if message.from == Speaker::Assistant {
            let avatar = if show_avatar { "👨‍🔧" } else { "" };
            ui.add_sized([28.0, 28.0], egui::Label::new(RichText::new(avatar).size(20.0)));
        }
        egui::Frame::none()
            .fill(fill)
            .rounding(14.0)
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.add(egui::Label::new(RichText::new(&message.text).color(text_color)).wrap());
            });
    });
}

/// Conversation history plus the input line. Enter sends.
pub fn render_chat(
    ui: &mut egui::Ui,
    messages: &[Message],
    awaiting_reply: bool,
    input: &mut String,
    artisan_name: &str,
) -> ScreenAction {
    let mut action = ScreenAction::None;

    ui.vertical_centered(|ui| {
        ui.label(RichText::new("👨‍🔧").size(32.0));
        ui.label(RichText::new(format!("Bob - {}", artisan_name)).strong());
    });
    ui.separator();

    let input_height = 40.0;
    egui::ScrollArea::vertical()
        .max_height(ui.available_height() - input_height)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            let last_index = messages.len().saturating_sub(1);
            for (index, message) in messages.iter().enumerate() {
                let is_last_assistant = message.from == Speaker::Assistant && index == last_index;
                render_bubble(ui, message, is_last_assistant);
                ui.add_space(6.0);
            }
            if awaiting_reply {
                ui.label(RichText::new("Bob réfléchit…").small().weak());
            }
        });

    ui.separator();
    ui.horizontal(|ui| {
        let response = ui.add_enabled(
            !awaiting_reply,
            egui::TextEdit::singleline(input)
                .hint_text("Écrire un message...")
                .desired_width(ui.available_width() - 40.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = ui
            .add_enabled(!awaiting_reply && !input.trim().is_empty(), egui::Button::new("➤"))
            .clicked();

        if submitted || clicked {
            action = ScreenAction::SendMessage;
            response.request_focus();
        }
    });

    action
}
